use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Genre {
    pub genre_id: i32,
    pub name: String,
}

#[derive(Debug, FromRow)]
pub struct FilmGenre {
    pub film_id: i64,
    pub genre_id: i32,
    pub name: String,
}
