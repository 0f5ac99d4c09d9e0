use crate::entities::mpa_ratings::MpaRating as MpaRatingEntity;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MpaRating {
    #[serde(rename = "id")]
    pub mpa_id: i32,
    pub name: String,
    pub code: String,
}

impl From<MpaRatingEntity> for MpaRating {
    fn from(value: MpaRatingEntity) -> Self {
        Self {
            mpa_id: value.mpa_id,
            name: value.name,
            code: value.code,
        }
    }
}
