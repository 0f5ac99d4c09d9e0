use sqlx::{Pool, Sqlite, Transaction};

/// Opens a transaction holding the write lock from the start.
///
/// Usecases that read before writing must use this: a deferred SQLite transaction
/// cannot upgrade its lock while another connection writes and fails with `SQLITE_BUSY`.
pub async fn begin_write(db: &Pool<Sqlite>) -> sqlx::Result<Transaction<'static, Sqlite>> {
    db.begin_with("BEGIN IMMEDIATE").await
}
