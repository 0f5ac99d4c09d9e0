use crate::common::context::Context;
use crate::common::db;
use crate::common::error::{AppError, ServiceResult, is_unique_violation, unexpected};
use crate::common::ids;
use crate::models::users::{CreateUserArgs, UpdateUserArgs, User, display_name};
use crate::repositories::{likes, relationships, users};
use sqlx::SqliteExecutor;
use tracing::info;

pub async fn fetch_one<C: Context>(ctx: &C, user_id: i64) -> ServiceResult<User> {
    ids::ensure_valid(user_id)?;
    match users::fetch_one(ctx.db(), user_id).await {
        Ok(user) => Ok(User::from(user)),
        Err(sqlx::Error::RowNotFound) => Err(AppError::UsersNotFound),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<User>> {
    match users::fetch_all(ctx.db()).await {
        Ok(users) => Ok(users.into_iter().map(User::from).collect()),
        Err(e) => unexpected(e),
    }
}

/// Fetches the given users ordered by id. Unknown ids are skipped.
pub async fn fetch_many<C: Context>(ctx: &C, user_ids: &[i64]) -> ServiceResult<Vec<User>> {
    match users::fetch_many(ctx.db(), user_ids).await {
        Ok(users) => Ok(users.into_iter().map(User::from).collect()),
        Err(e) => unexpected(e),
    }
}

pub async fn ensure_exists<'c, E: SqliteExecutor<'c>>(db: E, user_id: i64) -> ServiceResult<()> {
    match users::exists(db, user_id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(AppError::UsersNotFound),
        Err(e) => unexpected(e),
    }
}

pub async fn create<C: Context>(ctx: &C, args: CreateUserArgs) -> ServiceResult<User> {
    let name = display_name(args.name.as_deref(), &args.login);
    let user_id = match users::create(ctx.db(), &args.email, &args.login, &name, args.birthday)
        .await
    {
        Ok(user_id) => user_id,
        Err(e) if is_unique_violation(&e) => return Err(AppError::UsersAlreadyExists),
        Err(e) => return unexpected(e),
    };
    info!(user_id, login = %args.login, "Created user");
    fetch_one(ctx, user_id).await
}

pub async fn update<C: Context>(ctx: &C, args: UpdateUserArgs) -> ServiceResult<User> {
    ids::ensure_valid(args.user_id)?;
    let name = display_name(args.name.as_deref(), &args.login);
    let updated = match users::update(
        ctx.db(),
        args.user_id,
        &args.email,
        &args.login,
        &name,
        args.birthday,
    )
    .await
    {
        Ok(updated) => updated,
        Err(e) if is_unique_violation(&e) => return Err(AppError::UsersAlreadyExists),
        Err(e) => return unexpected(e),
    };
    if updated == 0 {
        return Err(AppError::UsersNotFound);
    }
    info!(user_id = args.user_id, "Updated user");
    fetch_one(ctx, args.user_id).await
}

/// Deletes the user together with every friendship edge and like that references it.
pub async fn delete<C: Context>(ctx: &C, user_id: i64) -> ServiceResult<()> {
    ids::ensure_valid(user_id)?;
    let mut tx = db::begin_write(ctx.db()).await?;
    let removed_edges = relationships::remove_all_for_user(&mut *tx, user_id).await?;
    let removed_likes = likes::remove_all_for_user(&mut *tx, user_id).await?;
    if users::delete(&mut *tx, user_id).await? == 0 {
        return Err(AppError::UsersNotFound);
    }
    tx.commit().await?;

    info!(user_id, removed_edges, removed_likes, "Deleted user");
    Ok(())
}
