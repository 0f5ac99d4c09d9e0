use crate::api::RequestContext;
use crate::common::error::{ServiceResponse, ServiceResult};
use crate::common::state::AppState;
use crate::models::films::{CreateFilmArgs, Film, PopularFilm, PopularFilmsArgs, UpdateFilmArgs};
use crate::usecases::popularity::DEFAULT_POPULAR_COUNT;
use crate::usecases::{films, likes, popularity};
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/films", get(list).post(create).put(update))
        .route("/films/popular", get(popular))
        .route("/films/{id}", get(fetch_one).delete(delete))
        .route("/films/{id}/likes", get(liked_by))
        .route("/films/{id}/like/{user_id}", put(add_like).delete(remove_like))
}

pub async fn list(ctx: RequestContext) -> ServiceResponse<Vec<Film>> {
    let films = films::fetch_all(&ctx).await?;
    Ok(Json(films))
}

pub async fn fetch_one(ctx: RequestContext, Path(film_id): Path<i64>) -> ServiceResponse<Film> {
    let film = films::fetch_one(&ctx, film_id).await?;
    Ok(Json(film))
}

pub async fn create(
    ctx: RequestContext,
    Json(args): Json<CreateFilmArgs>,
) -> ServiceResult<(StatusCode, Json<Film>)> {
    let film = films::create(&ctx, args).await?;
    Ok((StatusCode::CREATED, Json(film)))
}

pub async fn update(ctx: RequestContext, Json(args): Json<UpdateFilmArgs>) -> ServiceResponse<Film> {
    let film = films::update(&ctx, args).await?;
    Ok(Json(film))
}

pub async fn delete(ctx: RequestContext, Path(film_id): Path<i64>) -> ServiceResult<StatusCode> {
    films::delete(&ctx, film_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_like(
    ctx: RequestContext,
    Path((film_id, user_id)): Path<(i64, i64)>,
) -> ServiceResult<StatusCode> {
    likes::add_like(&ctx, film_id, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn remove_like(
    ctx: RequestContext,
    Path((film_id, user_id)): Path<(i64, i64)>,
) -> ServiceResult<StatusCode> {
    likes::remove_like(&ctx, film_id, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn liked_by(ctx: RequestContext, Path(film_id): Path<i64>) -> ServiceResponse<Vec<i64>> {
    let user_ids = likes::fetch_user_ids(&ctx, film_id).await?;
    Ok(Json(user_ids))
}

pub async fn popular(
    ctx: RequestContext,
    Query(args): Query<PopularFilmsArgs>,
) -> ServiceResponse<Vec<PopularFilm>> {
    let count = args.count.unwrap_or(DEFAULT_POPULAR_COUNT);
    let films = popularity::fetch_popular(&ctx, count).await?;
    Ok(Json(films))
}
