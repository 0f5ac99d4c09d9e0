use crate::entities::genres::{FilmGenre, Genre as GenreEntity};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Genre {
    #[serde(rename = "id")]
    pub genre_id: i32,
    pub name: String,
}

impl From<GenreEntity> for Genre {
    fn from(value: GenreEntity) -> Self {
        Self {
            genre_id: value.genre_id,
            name: value.name,
        }
    }
}

impl From<FilmGenre> for Genre {
    fn from(value: FilmGenre) -> Self {
        Self {
            genre_id: value.genre_id,
            name: value.name,
        }
    }
}
