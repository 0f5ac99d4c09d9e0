use crate::entities::films::{Film, RankedFilm};
use chrono::NaiveDate;
use sqlx::SqliteExecutor;

const TABLE_NAME: &str = "films";
const READ_FIELDS: &str = r#"
f.film_id, f.name, f.description, f.release_date, f.duration,
f.mpa_id, m.name AS mpa_name, m.code AS mpa_code"#;
const JOIN_MPA: &str = " FROM films f JOIN mpa_ratings m ON f.mpa_id = m.mpa_id";

pub async fn fetch_one<'c, E: SqliteExecutor<'c>>(db: E, film_id: i64) -> sqlx::Result<Film> {
    const QUERY: &str =
        const_str::concat!("SELECT ", READ_FIELDS, JOIN_MPA, " WHERE f.film_id = ?");
    sqlx::query_as(QUERY).bind(film_id).fetch_one(db).await
}

pub async fn fetch_all<'c, E: SqliteExecutor<'c>>(db: E) -> sqlx::Result<Vec<Film>> {
    const QUERY: &str = const_str::concat!("SELECT ", READ_FIELDS, JOIN_MPA, " ORDER BY f.film_id");
    sqlx::query_as(QUERY).fetch_all(db).await
}

/// Films ordered by like count descending, then by id ascending.
pub async fn fetch_popular<'c, E: SqliteExecutor<'c>>(
    db: E,
    limit: i64,
) -> sqlx::Result<Vec<RankedFilm>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        ", COUNT(l.user_id) AS like_count",
        JOIN_MPA,
        " LEFT JOIN likes l ON f.film_id = l.film_id",
        " GROUP BY f.film_id",
        " ORDER BY like_count DESC, f.film_id ASC",
        " LIMIT ?"
    );
    sqlx::query_as(QUERY).bind(limit).fetch_all(db).await
}

pub async fn exists<'c, E: SqliteExecutor<'c>>(db: E, film_id: i64) -> sqlx::Result<bool> {
    const QUERY: &str = const_str::concat!(
        "SELECT COUNT(*) FROM ",
        TABLE_NAME,
        " WHERE film_id = ?"
    );
    let count: i64 = sqlx::query_scalar(QUERY).bind(film_id).fetch_one(db).await?;
    Ok(count > 0)
}

pub async fn create<'c, E: SqliteExecutor<'c>>(
    db: E,
    name: &str,
    description: &str,
    release_date: NaiveDate,
    duration: i32,
    mpa_id: i32,
) -> sqlx::Result<i64> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (name, description, release_date, duration, mpa_id) VALUES (?, ?, ?, ?, ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(name)
        .bind(description)
        .bind(release_date)
        .bind(duration)
        .bind(mpa_id)
        .execute(db)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn update<'c, E: SqliteExecutor<'c>>(
    db: E,
    film_id: i64,
    name: &str,
    description: &str,
    release_date: NaiveDate,
    duration: i32,
    mpa_id: i32,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET name = ?, description = ?, release_date = ?, duration = ?, mpa_id = ?",
        " WHERE film_id = ?"
    );
    let result = sqlx::query(QUERY)
        .bind(name)
        .bind(description)
        .bind(release_date)
        .bind(duration)
        .bind(mpa_id)
        .bind(film_id)
        .execute(db)
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete<'c, E: SqliteExecutor<'c>>(db: E, film_id: i64) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!("DELETE FROM ", TABLE_NAME, " WHERE film_id = ?");
    let result = sqlx::query(QUERY).bind(film_id).execute(db).await?;
    Ok(result.rows_affected())
}
