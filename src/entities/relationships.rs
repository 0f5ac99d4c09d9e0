use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Relationship {
    pub user_id: i64,
    pub friend_id: i64,
    pub confirmed: bool,
}
