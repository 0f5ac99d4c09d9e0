use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct MpaRating {
    pub mpa_id: i32,
    pub name: String,
    pub code: String,
}
