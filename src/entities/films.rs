use chrono::NaiveDate;
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Film {
    pub film_id: i64,
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub mpa_id: i32,
    pub mpa_name: String,
    pub mpa_code: String,
}

/// A film row joined with the size of its like set.
#[derive(Debug, FromRow)]
pub struct RankedFilm {
    #[sqlx(flatten)]
    pub film: Film,
    pub like_count: i64,
}
