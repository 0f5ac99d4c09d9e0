use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::common::state::AppState;
use crate::models::genres::Genre;
use crate::models::mpa_ratings::MpaRating;
use crate::usecases::{genres, mpa_ratings};
use axum::extract::Path;
use axum::routing::get;
use axum::{Json, Router};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/genres", get(list_genres))
        .route("/genres/{id}", get(fetch_genre))
        .route("/mpa", get(list_mpa_ratings))
        .route("/mpa/{id}", get(fetch_mpa_rating))
}

pub async fn list_genres(ctx: RequestContext) -> ServiceResponse<Vec<Genre>> {
    let genres = genres::fetch_all(&ctx).await?;
    Ok(Json(genres))
}

pub async fn fetch_genre(ctx: RequestContext, Path(genre_id): Path<i32>) -> ServiceResponse<Genre> {
    let genre = genres::fetch_one(&ctx, genre_id).await?;
    Ok(Json(genre))
}

pub async fn list_mpa_ratings(ctx: RequestContext) -> ServiceResponse<Vec<MpaRating>> {
    let ratings = mpa_ratings::fetch_all(&ctx).await?;
    Ok(Json(ratings))
}

pub async fn fetch_mpa_rating(
    ctx: RequestContext,
    Path(mpa_id): Path<i32>,
) -> ServiceResponse<MpaRating> {
    let rating = mpa_ratings::fetch_one(&ctx, mpa_id).await?;
    Ok(Json(rating))
}
