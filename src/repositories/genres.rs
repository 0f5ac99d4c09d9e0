use crate::entities::genres::{FilmGenre, Genre};
use crate::repositories::MAX_IDS_PER_QUERY;
use sqlx::{Pool, Sqlite, SqliteExecutor};

const TABLE_NAME: &str = "genres";
const READ_FIELDS: &str = "genre_id, name";

pub async fn fetch_one<'c, E: SqliteExecutor<'c>>(db: E, genre_id: i32) -> sqlx::Result<Genre> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE genre_id = ?"
    );
    sqlx::query_as(QUERY).bind(genre_id).fetch_one(db).await
}

pub async fn fetch_all<'c, E: SqliteExecutor<'c>>(db: E) -> sqlx::Result<Vec<Genre>> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " ORDER BY genre_id"
    );
    sqlx::query_as(QUERY).fetch_all(db).await
}

pub async fn exists<'c, E: SqliteExecutor<'c>>(db: E, genre_id: i32) -> sqlx::Result<bool> {
    const QUERY: &str = const_str::concat!(
        "SELECT COUNT(*) FROM ",
        TABLE_NAME,
        " WHERE genre_id = ?"
    );
    let count: i64 = sqlx::query_scalar(QUERY).bind(genre_id).fetch_one(db).await?;
    Ok(count > 0)
}

/// Genre rows for every film in `film_ids`, ordered by film then genre id.
pub async fn fetch_for_films(
    db: &Pool<Sqlite>,
    film_ids: &[i64],
) -> sqlx::Result<Vec<FilmGenre>> {
    let mut rows: Vec<FilmGenre> = Vec::new();
    for chunk in film_ids.chunks(MAX_IDS_PER_QUERY) {
        let placeholders = vec!["?"; chunk.len()].join(", ");
        let sql = format!(
            "SELECT fg.film_id, g.genre_id, g.name FROM film_genres fg \
             JOIN genres g ON g.genre_id = fg.genre_id \
             WHERE fg.film_id IN ({placeholders})"
        );
        let mut query = sqlx::query_as::<_, FilmGenre>(&sql);
        for film_id in chunk {
            query = query.bind(*film_id);
        }
        rows.extend(query.fetch_all(db).await?);
    }
    rows.sort_by_key(|row| (row.film_id, row.genre_id));
    Ok(rows)
}

pub async fn link_film<'c, E: SqliteExecutor<'c>>(
    db: E,
    film_id: i64,
    genre_id: i32,
) -> sqlx::Result<()> {
    const QUERY: &str = "INSERT INTO film_genres (film_id, genre_id) VALUES (?, ?) \
                         ON CONFLICT (film_id, genre_id) DO NOTHING";
    sqlx::query(QUERY)
        .bind(film_id)
        .bind(genre_id)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn unlink_film<'c, E: SqliteExecutor<'c>>(db: E, film_id: i64) -> sqlx::Result<u64> {
    const QUERY: &str = "DELETE FROM film_genres WHERE film_id = ?";
    let result = sqlx::query(QUERY).bind(film_id).execute(db).await?;
    Ok(result.rows_affected())
}
