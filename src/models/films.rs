use crate::entities::films::Film as FilmEntity;
use crate::models::genres::Genre;
use crate::models::mpa_ratings::MpaRating;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    #[serde(rename = "id")]
    pub film_id: i64,
    pub name: String,
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub mpa: MpaRating,
    pub genres: Vec<Genre>,
}

impl Film {
    pub fn from_entity(value: FilmEntity, genres: Vec<Genre>) -> Self {
        Self {
            film_id: value.film_id,
            name: value.name,
            description: value.description,
            release_date: value.release_date,
            duration: value.duration,
            mpa: MpaRating {
                mpa_id: value.mpa_id,
                name: value.mpa_name,
                code: value.mpa_code,
            },
            genres,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularFilm {
    #[serde(flatten)]
    pub film: Film,
    pub like_count: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFilmArgs {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub mpa_id: i32,
    #[serde(default)]
    pub genre_ids: Vec<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFilmArgs {
    #[serde(rename = "id")]
    pub film_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
    pub mpa_id: i32,
    /// Replaces the film's genres when present; keeps them otherwise.
    #[serde(default)]
    pub genre_ids: Option<Vec<i32>>,
}

#[derive(Debug, Deserialize)]
pub struct PopularFilmsArgs {
    pub count: Option<i64>,
}
