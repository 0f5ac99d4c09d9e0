use sqlx::SqliteExecutor;

const TABLE_NAME: &str = "likes";

pub async fn fetch_user_ids<'c, E: SqliteExecutor<'c>>(
    db: E,
    film_id: i64,
) -> sqlx::Result<Vec<i64>> {
    const QUERY: &str = const_str::concat!(
        "SELECT user_id FROM ",
        TABLE_NAME,
        " WHERE film_id = ? ORDER BY user_id"
    );
    sqlx::query_scalar(QUERY).bind(film_id).fetch_all(db).await
}

pub async fn count<'c, E: SqliteExecutor<'c>>(db: E, film_id: i64) -> sqlx::Result<i64> {
    const QUERY: &str = const_str::concat!(
        "SELECT COUNT(*) FROM ",
        TABLE_NAME,
        " WHERE film_id = ?"
    );
    sqlx::query_scalar(QUERY).bind(film_id).fetch_one(db).await
}

/// Fails with a unique violation when the like already exists.
pub async fn add<'c, E: SqliteExecutor<'c>>(db: E, film_id: i64, user_id: i64) -> sqlx::Result<()> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (film_id, user_id) VALUES (?, ?)"
    );
    sqlx::query(QUERY)
        .bind(film_id)
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn remove<'c, E: SqliteExecutor<'c>>(
    db: E,
    film_id: i64,
    user_id: i64,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "DELETE FROM ",
        TABLE_NAME,
        " WHERE film_id = ? AND user_id = ?"
    );
    let result = sqlx::query(QUERY)
        .bind(film_id)
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(result.rows_affected())
}

pub async fn remove_all_for_film<'c, E: SqliteExecutor<'c>>(
    db: E,
    film_id: i64,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!("DELETE FROM ", TABLE_NAME, " WHERE film_id = ?");
    let result = sqlx::query(QUERY).bind(film_id).execute(db).await?;
    Ok(result.rows_affected())
}

pub async fn remove_all_for_user<'c, E: SqliteExecutor<'c>>(
    db: E,
    user_id: i64,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!("DELETE FROM ", TABLE_NAME, " WHERE user_id = ?");
    let result = sqlx::query(QUERY).bind(user_id).execute(db).await?;
    Ok(result.rows_affected())
}
