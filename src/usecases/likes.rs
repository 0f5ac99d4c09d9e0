use crate::common::context::Context;
use crate::common::db;
use crate::common::error::{AppError, ServiceResult, is_unique_violation, unexpected};
use crate::common::ids;
use crate::repositories::likes;
use crate::usecases::{films, users};
use tracing::info;

/// Records that `user_id` likes `film_id`. Liking the same film twice is a conflict.
pub async fn add_like<C: Context>(ctx: &C, film_id: i64, user_id: i64) -> ServiceResult<()> {
    ids::ensure_valid_pair(film_id, user_id)?;
    let mut tx = db::begin_write(ctx.db()).await?;
    films::ensure_exists(&mut *tx, film_id).await?;
    users::ensure_exists(&mut *tx, user_id).await?;
    match likes::add(&mut *tx, film_id, user_id).await {
        Ok(()) => {}
        Err(e) if is_unique_violation(&e) => return Err(AppError::LikesAlreadyExists),
        Err(e) => return unexpected(e),
    }
    tx.commit().await?;

    info!(film_id, user_id, "Added like");
    Ok(())
}

/// Removes the like if present. Removing a like that does not exist is a no-op.
pub async fn remove_like<C: Context>(ctx: &C, film_id: i64, user_id: i64) -> ServiceResult<()> {
    ids::ensure_valid_pair(film_id, user_id)?;
    let mut tx = db::begin_write(ctx.db()).await?;
    films::ensure_exists(&mut *tx, film_id).await?;
    users::ensure_exists(&mut *tx, user_id).await?;
    let removed = likes::remove(&mut *tx, film_id, user_id).await?;
    tx.commit().await?;

    if removed > 0 {
        info!(film_id, user_id, "Removed like");
    }
    Ok(())
}

/// Ids of the users who liked the film.
pub async fn fetch_user_ids<C: Context>(ctx: &C, film_id: i64) -> ServiceResult<Vec<i64>> {
    ids::ensure_valid(film_id)?;
    films::ensure_exists(ctx.db(), film_id).await?;
    match likes::fetch_user_ids(ctx.db(), film_id).await {
        Ok(user_ids) => Ok(user_ids),
        Err(e) => unexpected(e),
    }
}

pub async fn count<C: Context>(ctx: &C, film_id: i64) -> ServiceResult<i64> {
    ids::ensure_valid(film_id)?;
    films::ensure_exists(ctx.db(), film_id).await?;
    match likes::count(ctx.db(), film_id).await {
        Ok(count) => Ok(count),
        Err(e) => unexpected(e),
    }
}
