use crate::common::context::Context;
use crate::common::db;
use crate::common::error::{AppError, ServiceResult, is_foreign_key_violation, unexpected};
use crate::common::ids;
use crate::models::relationships::{FriendshipMode, FriendshipState, Relationship};
use crate::models::users::User;
use crate::repositories::relationships;
use crate::usecases::users;
use tracing::{info, warn};

/// Records a friendship request from `user_id` to `friend_id`.
///
/// In [`FriendshipMode::RequestConfirm`] this writes a single unconfirmed edge and
/// leaves the mirror edge to the other user. In [`FriendshipMode::Symmetric`] both
/// directions are written as confirmed. Re-adding an existing edge is a no-op.
pub async fn add_friend<C: Context>(ctx: &C, user_id: i64, friend_id: i64) -> ServiceResult<()> {
    ids::ensure_valid_pair(user_id, friend_id)?;
    if user_id == friend_id {
        warn!(user_id, "User tried to add themselves as a friend");
        return Err(AppError::RelationshipsSelfFriendship);
    }

    let mut tx = db::begin_write(ctx.db()).await?;
    users::ensure_exists(&mut *tx, user_id).await?;
    users::ensure_exists(&mut *tx, friend_id).await?;

    let written = match ctx.friendship_mode() {
        FriendshipMode::RequestConfirm => {
            relationships::add_request(&mut *tx, user_id, friend_id).await
        }
        FriendshipMode::Symmetric => {
            match relationships::upsert_confirmed(&mut *tx, user_id, friend_id).await {
                Ok(outgoing) => relationships::upsert_confirmed(&mut *tx, friend_id, user_id)
                    .await
                    .map(|incoming| outgoing || incoming),
                Err(e) => Err(e),
            }
        }
    };
    let created = match written {
        Ok(created) => created,
        Err(e) if is_foreign_key_violation(&e) => return Err(AppError::UsersNotFound),
        Err(e) => return unexpected(e),
    };
    tx.commit().await?;

    if created {
        info!(
            user_id,
            friend_id,
            mode = %ctx.friendship_mode(),
            "Added friend"
        );
    }
    Ok(())
}

/// Confirms the friendship between the pair. Both directed requests must exist.
pub async fn confirm_friendship<C: Context>(
    ctx: &C,
    user_id: i64,
    friend_id: i64,
) -> ServiceResult<()> {
    ids::ensure_valid_pair(user_id, friend_id)?;
    if user_id == friend_id {
        return Err(AppError::RelationshipsSelfFriendship);
    }

    let mut tx = db::begin_write(ctx.db()).await?;
    users::ensure_exists(&mut *tx, user_id).await?;
    users::ensure_exists(&mut *tx, friend_id).await?;

    let outgoing = relationships::fetch_one(&mut *tx, user_id, friend_id).await?;
    let incoming = relationships::fetch_one(&mut *tx, friend_id, user_id).await?;
    if outgoing.is_none() || incoming.is_none() {
        warn!(
            user_id,
            friend_id, "User tried to confirm a friendship without mutual requests"
        );
        return Err(AppError::RelationshipsRequestMissing);
    }

    relationships::confirm_pair(&mut *tx, user_id, friend_id).await?;
    tx.commit().await?;

    info!(user_id, friend_id, "Confirmed friendship");
    Ok(())
}

/// Removes the friendship in both directions, whatever its state.
pub async fn remove_friend<C: Context>(
    ctx: &C,
    user_id: i64,
    friend_id: i64,
) -> ServiceResult<()> {
    ids::ensure_valid_pair(user_id, friend_id)?;
    if user_id == friend_id {
        return Err(AppError::RelationshipsSelfFriendship);
    }

    match relationships::remove_pair(ctx.db(), user_id, friend_id).await {
        Ok(0) => Ok(()),
        Ok(removed) => {
            info!(user_id, friend_id, removed, "Removed friend");
            Ok(())
        }
        Err(e) => unexpected(e),
    }
}

/// Ids of the user's confirmed friends, ascending.
pub async fn fetch_friend_ids<C: Context>(ctx: &C, user_id: i64) -> ServiceResult<Vec<i64>> {
    ids::ensure_valid(user_id)?;
    users::ensure_exists(ctx.db(), user_id).await?;
    match relationships::fetch_confirmed_ids(ctx.db(), user_id).await {
        Ok(friend_ids) => Ok(friend_ids),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_friends<C: Context>(ctx: &C, user_id: i64) -> ServiceResult<Vec<User>> {
    let friend_ids = fetch_friend_ids(ctx, user_id).await?;
    users::fetch_many(ctx, &friend_ids).await
}

/// Targets of every outbound edge, confirmed or pending, ascending.
pub async fn fetch_outbound_ids<C: Context>(ctx: &C, user_id: i64) -> ServiceResult<Vec<i64>> {
    ids::ensure_valid(user_id)?;
    users::ensure_exists(ctx.db(), user_id).await?;
    match relationships::fetch_outbound_ids(ctx.db(), user_id).await {
        Ok(friend_ids) => Ok(friend_ids),
        Err(e) => unexpected(e),
    }
}

/// Users this user has requested who have not been confirmed yet.
pub async fn fetch_outgoing_request_ids<C: Context>(
    ctx: &C,
    user_id: i64,
) -> ServiceResult<Vec<i64>> {
    ids::ensure_valid(user_id)?;
    users::ensure_exists(ctx.db(), user_id).await?;
    match relationships::fetch_outgoing_request_ids(ctx.db(), user_id).await {
        Ok(friend_ids) => Ok(friend_ids),
        Err(e) => unexpected(e),
    }
}

/// Users who have requested this user and have not been confirmed yet.
pub async fn fetch_incoming_request_ids<C: Context>(
    ctx: &C,
    user_id: i64,
) -> ServiceResult<Vec<i64>> {
    ids::ensure_valid(user_id)?;
    users::ensure_exists(ctx.db(), user_id).await?;
    match relationships::fetch_incoming_request_ids(ctx.db(), user_id).await {
        Ok(follower_ids) => Ok(follower_ids),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_state<C: Context>(
    ctx: &C,
    user_id: i64,
    other_id: i64,
) -> ServiceResult<FriendshipState> {
    ids::ensure_valid_pair(user_id, other_id)?;
    let mut tx = ctx.db().begin().await?;
    users::ensure_exists(&mut *tx, user_id).await?;
    users::ensure_exists(&mut *tx, other_id).await?;
    let outgoing = relationships::fetch_one(&mut *tx, user_id, other_id)
        .await?
        .map(Relationship::from);
    let incoming = relationships::fetch_one(&mut *tx, other_id, user_id)
        .await?
        .map(Relationship::from);
    tx.commit().await?;
    Ok(FriendshipState::from_edges(
        outgoing.as_ref(),
        incoming.as_ref(),
    ))
}
