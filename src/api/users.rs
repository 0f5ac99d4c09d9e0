use crate::api::RequestContext;
use crate::common::error::{ServiceResponse, ServiceResult};
use crate::common::state::AppState;
use crate::models::relationships::FriendshipStateResponse;
use crate::models::users::{CreateUserArgs, UpdateUserArgs, User};
use crate::usecases::{common_friends, relationships, users};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list).post(create).put(update))
        .route("/users/{id}", get(fetch_one).delete(delete))
        .route("/users/{id}/friends", get(friends))
        .route("/users/{id}/friends/requests", get(outgoing_requests))
        .route("/users/{id}/friends/incoming", get(incoming_requests))
        .route("/users/{id}/friends/common/{other_id}", get(common))
        .route(
            "/users/{id}/friends/{friend_id}",
            put(add_friend).delete(remove_friend),
        )
        .route("/users/{id}/friends/{friend_id}/confirm", put(confirm_friend))
        .route("/users/{id}/friends/{friend_id}/state", get(friendship_state))
}

pub async fn list(ctx: RequestContext) -> ServiceResponse<Vec<User>> {
    let users = users::fetch_all(&ctx).await?;
    Ok(Json(users))
}

pub async fn fetch_one(ctx: RequestContext, Path(user_id): Path<i64>) -> ServiceResponse<User> {
    let user = users::fetch_one(&ctx, user_id).await?;
    Ok(Json(user))
}

pub async fn create(
    ctx: RequestContext,
    Json(args): Json<CreateUserArgs>,
) -> ServiceResult<(StatusCode, Json<User>)> {
    let user = users::create(&ctx, args).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update(ctx: RequestContext, Json(args): Json<UpdateUserArgs>) -> ServiceResponse<User> {
    let user = users::update(&ctx, args).await?;
    Ok(Json(user))
}

pub async fn delete(ctx: RequestContext, Path(user_id): Path<i64>) -> ServiceResult<StatusCode> {
    users::delete(&ctx, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_friend(
    ctx: RequestContext,
    Path((user_id, friend_id)): Path<(i64, i64)>,
) -> ServiceResult<StatusCode> {
    relationships::add_friend(&ctx, user_id, friend_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn confirm_friend(
    ctx: RequestContext,
    Path((user_id, friend_id)): Path<(i64, i64)>,
) -> ServiceResult<StatusCode> {
    relationships::confirm_friendship(&ctx, user_id, friend_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn remove_friend(
    ctx: RequestContext,
    Path((user_id, friend_id)): Path<(i64, i64)>,
) -> ServiceResult<StatusCode> {
    relationships::remove_friend(&ctx, user_id, friend_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn friends(ctx: RequestContext, Path(user_id): Path<i64>) -> ServiceResponse<Vec<User>> {
    let friends = relationships::fetch_friends(&ctx, user_id).await?;
    Ok(Json(friends))
}

pub async fn outgoing_requests(
    ctx: RequestContext,
    Path(user_id): Path<i64>,
) -> ServiceResponse<Vec<User>> {
    let request_ids = relationships::fetch_outgoing_request_ids(&ctx, user_id).await?;
    let requested = users::fetch_many(&ctx, &request_ids).await?;
    Ok(Json(requested))
}

pub async fn incoming_requests(
    ctx: RequestContext,
    Path(user_id): Path<i64>,
) -> ServiceResponse<Vec<User>> {
    let follower_ids = relationships::fetch_incoming_request_ids(&ctx, user_id).await?;
    let followers = users::fetch_many(&ctx, &follower_ids).await?;
    Ok(Json(followers))
}

pub async fn common(
    ctx: RequestContext,
    Path((user_id, other_id)): Path<(i64, i64)>,
) -> ServiceResponse<Vec<User>> {
    let common = common_friends::fetch_common_friends(&ctx, user_id, other_id).await?;
    Ok(Json(common))
}

pub async fn friendship_state(
    ctx: RequestContext,
    Path((user_id, other_id)): Path<(i64, i64)>,
) -> ServiceResponse<FriendshipStateResponse> {
    let state = relationships::fetch_state(&ctx, user_id, other_id).await?;
    Ok(Json(FriendshipStateResponse {
        user_id,
        other_id,
        state,
    }))
}
