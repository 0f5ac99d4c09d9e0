use chrono::NaiveDate;
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct User {
    pub user_id: i64,
    pub email: String,
    pub login: String,
    pub name: String,
    #[sqlx(default)]
    pub birthday: Option<NaiveDate>,
}
