use crate::common::context::Context;
use crate::common::error::ServiceResult;
use crate::common::ids;
use crate::models::users::User;
use crate::repositories::relationships;
use crate::usecases::users;
use std::collections::BTreeSet;
use tracing::debug;

/// Ids confirmed-friends with both users, ascending, never including either user.
///
/// Each side is read from its own confirmed outbound edges; a pending request in
/// one direction does not make a user a common friend.
pub async fn fetch_common_friend_ids<C: Context>(
    ctx: &C,
    user_id: i64,
    other_id: i64,
) -> ServiceResult<Vec<i64>> {
    ids::ensure_valid_pair(user_id, other_id)?;

    let mut tx = ctx.db().begin().await?;
    users::ensure_exists(&mut *tx, user_id).await?;
    users::ensure_exists(&mut *tx, other_id).await?;
    let friends = relationships::fetch_confirmed_ids(&mut *tx, user_id).await?;
    let other_friends = relationships::fetch_confirmed_ids(&mut *tx, other_id).await?;
    tx.commit().await?;

    let common = intersect(user_id, other_id, &friends, &other_friends);
    debug!(user_id, other_id, count = common.len(), "Resolved common friends");
    Ok(common)
}

pub async fn fetch_common_friends<C: Context>(
    ctx: &C,
    user_id: i64,
    other_id: i64,
) -> ServiceResult<Vec<User>> {
    let common_ids = fetch_common_friend_ids(ctx, user_id, other_id).await?;
    users::fetch_many(ctx, &common_ids).await
}

fn intersect(user_id: i64, other_id: i64, friends: &[i64], other_friends: &[i64]) -> Vec<i64> {
    let friends: BTreeSet<i64> = friends.iter().copied().collect();
    let other_friends: BTreeSet<i64> = other_friends.iter().copied().collect();
    friends
        .intersection(&other_friends)
        .copied()
        .filter(|id| *id != user_id && *id != other_id)
        .collect()
}
