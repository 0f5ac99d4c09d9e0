use crate::entities::users::User;
use crate::repositories::MAX_IDS_PER_QUERY;
use chrono::NaiveDate;
use sqlx::{Pool, Sqlite, SqliteExecutor};

const TABLE_NAME: &str = "users";
const READ_FIELDS: &str = "user_id, email, login, name, birthday";

pub async fn fetch_one<'c, E: SqliteExecutor<'c>>(db: E, user_id: i64) -> sqlx::Result<User> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE user_id = ?"
    );
    sqlx::query_as(QUERY).bind(user_id).fetch_one(db).await
}

pub async fn fetch_all<'c, E: SqliteExecutor<'c>>(db: E) -> sqlx::Result<Vec<User>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " ORDER BY user_id"
    );
    sqlx::query_as(QUERY).fetch_all(db).await
}

/// Fetches the users in `user_ids`, ordered by id.
pub async fn fetch_many(db: &Pool<Sqlite>, user_ids: &[i64]) -> sqlx::Result<Vec<User>> {
    let mut users: Vec<User> = Vec::with_capacity(user_ids.len());
    for chunk in user_ids.chunks(MAX_IDS_PER_QUERY) {
        let placeholders = vec!["?"; chunk.len()].join(", ");
        let sql =
            format!("SELECT {READ_FIELDS} FROM {TABLE_NAME} WHERE user_id IN ({placeholders})");
        let mut query = sqlx::query_as::<_, User>(&sql);
        for user_id in chunk {
            query = query.bind(*user_id);
        }
        users.extend(query.fetch_all(db).await?);
    }
    users.sort_by_key(|user| user.user_id);
    Ok(users)
}

pub async fn exists<'c, E: SqliteExecutor<'c>>(db: E, user_id: i64) -> sqlx::Result<bool> {
    const QUERY: &str = const_str::concat!(
        "SELECT COUNT(*) FROM ",
        TABLE_NAME,
        " WHERE user_id = ?"
    );
    let count: i64 = sqlx::query_scalar(QUERY).bind(user_id).fetch_one(db).await?;
    Ok(count > 0)
}

pub async fn create<'c, E: SqliteExecutor<'c>>(
    db: E,
    email: &str,
    login: &str,
    name: &str,
    birthday: Option<NaiveDate>,
) -> sqlx::Result<i64> {
    const QUERY: &str = const_str::concat!(
        "INSERT INTO ",
        TABLE_NAME,
        " (email, login, name, birthday) VALUES (?, ?, ?, ?)"
    );
    let result = sqlx::query(QUERY)
        .bind(email)
        .bind(login)
        .bind(name)
        .bind(birthday)
        .execute(db)
        .await?;
    Ok(result.last_insert_rowid())
}

/// Returns the number of updated rows, zero when the user does not exist.
pub async fn update<'c, E: SqliteExecutor<'c>>(
    db: E,
    user_id: i64,
    email: &str,
    login: &str,
    name: &str,
    birthday: Option<NaiveDate>,
) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!(
        "UPDATE ",
        TABLE_NAME,
        " SET email = ?, login = ?, name = ?, birthday = ? WHERE user_id = ?"
    );
    let result = sqlx::query(QUERY)
        .bind(email)
        .bind(login)
        .bind(name)
        .bind(birthday)
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete<'c, E: SqliteExecutor<'c>>(db: E, user_id: i64) -> sqlx::Result<u64> {
    const QUERY: &str = const_str::concat!("DELETE FROM ", TABLE_NAME, " WHERE user_id = ?");
    let result = sqlx::query(QUERY).bind(user_id).execute(db).await?;
    Ok(result.rows_affected())
}
