use crate::entities::mpa_ratings::MpaRating;
use sqlx::SqliteExecutor;

const TABLE_NAME: &str = "mpa_ratings";
const READ_FIELDS: &str = "mpa_id, name, code";

pub async fn fetch_one<'c, E: SqliteExecutor<'c>>(db: E, mpa_id: i32) -> sqlx::Result<MpaRating> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE mpa_id = ?"
    );
    sqlx::query_as(QUERY).bind(mpa_id).fetch_one(db).await
}

pub async fn fetch_all<'c, E: SqliteExecutor<'c>>(db: E) -> sqlx::Result<Vec<MpaRating>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " ORDER BY mpa_id"
    );
    sqlx::query_as(QUERY).fetch_all(db).await
}

pub async fn exists<'c, E: SqliteExecutor<'c>>(db: E, mpa_id: i32) -> sqlx::Result<bool> {
    const QUERY: &str = const_str::concat!(
        "SELECT COUNT(*) FROM ",
        TABLE_NAME,
        " WHERE mpa_id = ?"
    );
    let count: i64 = sqlx::query_scalar(QUERY).bind(mpa_id).fetch_one(db).await?;
    Ok(count > 0)
}
