use crate::entities::relationships::Relationship;
use sqlx::SqliteExecutor;

const TABLE_NAME: &str = "friends";
const READ_FIELDS: &str = "user_id, friend_id, confirmed";

pub async fn fetch_one<'c, E: SqliteExecutor<'c>>(
    db: E,
    user_id: i64,
    friend_id: i64,
) -> sqlx::Result<Option<Relationship>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE user_id = ? AND friend_id = ?"
    );
    sqlx::query_as(QUERY)
        .bind(user_id)
        .bind(friend_id)
        .fetch_optional(db)
        .await
}

/// Targets of every outbound edge of `user_id`, confirmed or not.
pub async fn fetch_outbound_ids<'c, E: SqliteExecutor<'c>>(
    db: E,
    user_id: i64,
) -> sqlx::Result<Vec<i64>> {
    const QUERY: &str = const_str::concat!(
        "SELECT friend_id FROM ",
        TABLE_NAME,
        " WHERE user_id = ? ORDER BY friend_id"
    );
    sqlx::query_scalar(QUERY).bind(user_id).fetch_all(db).await
}

pub async fn fetch_confirmed_ids<'c, E: SqliteExecutor<'c>>(
    db: E,
    user_id: i64,
) -> sqlx::Result<Vec<i64>> {
    const QUERY: &str = const_str::concat!(
        "SELECT friend_id FROM ",
        TABLE_NAME,
        " WHERE user_id = ? AND confirmed = TRUE ORDER BY friend_id"
    );
    sqlx::query_scalar(QUERY).bind(user_id).fetch_all(db).await
}

pub async fn fetch_outgoing_request_ids<'c, E: SqliteExecutor<'c>>(
    db: E,
    user_id: i64,
) -> sqlx::Result<Vec<i64>> {
    const QUERY: &str = const_str::concat!(
        "SELECT friend_id FROM ",
        TABLE_NAME,
        " WHERE user_id = ? AND confirmed = FALSE ORDER BY friend_id"
    );
    sqlx::query_scalar(QUERY).bind(user_id).fetch_all(db).await
}

pub async fn fetch_incoming_request_ids<'c, E: SqliteExecutor<'c>>(
    db: E,
    user_id: i64,
) -> sqlx::Result<Vec<i64>> {
    const QUERY: &str = const_str::concat!(
        "SELECT user_id FROM ",
        TABLE_NAME,
        " WHERE friend_id = ? AND confirmed = FALSE ORDER BY user_id"
    );
    sqlx::query_scalar(QUERY).bind(user_id).fetch_all(db).await
}

/// Inserts an unconfirmed edge. Returns false when the edge already existed.
pub async fn add_request<'c, E: SqliteExecutor<'c>>(
    db: E,
    user_id: i64,
    friend_id: i64,
) -> sqlx::Result<bool> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (user_id, friend_id, confirmed) VALUES (?, ?, FALSE)",
        " ON CONFLICT (user_id, friend_id) DO NOTHING"
    );
    let result = sqlx::query(QUERY)
        .bind(user_id)
        .bind(friend_id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Inserts a confirmed edge, confirming it if it was already pending.
/// Returns false when the edge was already confirmed.
pub async fn upsert_confirmed<'c, E: SqliteExecutor<'c>>(
    db: E,
    user_id: i64,
    friend_id: i64,
) -> sqlx::Result<bool> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (user_id, friend_id, confirmed) VALUES (?, ?, TRUE)",
        " ON CONFLICT (user_id, friend_id) DO UPDATE SET confirmed = TRUE",
        " WHERE confirmed = FALSE"
    );
    let result = sqlx::query(QUERY)
        .bind(user_id)
        .bind(friend_id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Confirms both directed edges between the pair.
pub async fn confirm_pair<'c, E: SqliteExecutor<'c>>(
    db: E,
    user_id: i64,
    friend_id: i64,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET confirmed = TRUE",
        " WHERE (user_id = ? AND friend_id = ?) OR (user_id = ? AND friend_id = ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(user_id)
        .bind(friend_id)
        .bind(friend_id)
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(result.rows_affected())
}

/// Deletes both directed edges between the pair.
pub async fn remove_pair<'c, E: SqliteExecutor<'c>>(
    db: E,
    user_id: i64,
    friend_id: i64,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "DELETE FROM ",
        TABLE_NAME,
        " WHERE (user_id = ? AND friend_id = ?) OR (user_id = ? AND friend_id = ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(user_id)
        .bind(friend_id)
        .bind(friend_id)
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(result.rows_affected())
}

/// Deletes every edge where `user_id` is either endpoint.
pub async fn remove_all_for_user<'c, E: SqliteExecutor<'c>>(
    db: E,
    user_id: i64,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "DELETE FROM ",
        TABLE_NAME,
        " WHERE user_id = ? OR friend_id = ?"
    );
    let result = sqlx::query(QUERY)
        .bind(user_id)
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(result.rows_affected())
}
