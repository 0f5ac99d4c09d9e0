use crate::common::context::Context;
use crate::common::db;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::common::ids;
use crate::models::films::{CreateFilmArgs, Film, UpdateFilmArgs};
use crate::models::genres::Genre;
use crate::repositories::{films, genres, likes, mpa_ratings};
use sqlx::{Pool, Sqlite, SqliteConnection, SqliteExecutor};
use std::collections::{BTreeMap, BTreeSet};
use tracing::info;

pub async fn fetch_one<C: Context>(ctx: &C, film_id: i64) -> ServiceResult<Film> {
    ids::ensure_valid(film_id)?;
    let film = match films::fetch_one(ctx.db(), film_id).await {
        Ok(film) => film,
        Err(sqlx::Error::RowNotFound) => return Err(AppError::FilmsNotFound),
        Err(e) => return unexpected(e),
    };
    let mut genres = fetch_genres_by_film(ctx.db(), &[film_id]).await?;
    let film_genres = genres.remove(&film_id).unwrap_or_default();
    Ok(Film::from_entity(film, film_genres))
}

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<Film>> {
    let all = match films::fetch_all(ctx.db()).await {
        Ok(all) => all,
        Err(e) => return unexpected(e),
    };
    let film_ids: Vec<i64> = all.iter().map(|film| film.film_id).collect();
    let mut genres = fetch_genres_by_film(ctx.db(), &film_ids).await?;
    Ok(all
        .into_iter()
        .map(|film| {
            let film_genres = genres.remove(&film.film_id).unwrap_or_default();
            Film::from_entity(film, film_genres)
        })
        .collect())
}

pub async fn ensure_exists<'c, E: SqliteExecutor<'c>>(db: E, film_id: i64) -> ServiceResult<()> {
    match films::exists(db, film_id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(AppError::FilmsNotFound),
        Err(e) => unexpected(e),
    }
}

/// Genres of each film in `film_ids`, keyed by film id and ordered by genre id.
pub async fn fetch_genres_by_film(
    db: &Pool<Sqlite>,
    film_ids: &[i64],
) -> ServiceResult<BTreeMap<i64, Vec<Genre>>> {
    let rows = match genres::fetch_for_films(db, film_ids).await {
        Ok(rows) => rows,
        Err(e) => return unexpected(e),
    };
    let mut by_film: BTreeMap<i64, Vec<Genre>> = BTreeMap::new();
    for row in rows {
        by_film.entry(row.film_id).or_default().push(Genre::from(row));
    }
    Ok(by_film)
}

async fn ensure_references(
    conn: &mut SqliteConnection,
    mpa_id: i32,
    genre_ids: &BTreeSet<i32>,
) -> ServiceResult<()> {
    if !mpa_ratings::exists(&mut *conn, mpa_id).await? {
        return Err(AppError::MpaNotFound);
    }
    for genre_id in genre_ids {
        if !genres::exists(&mut *conn, *genre_id).await? {
            return Err(AppError::GenresNotFound);
        }
    }
    Ok(())
}

pub async fn create<C: Context>(ctx: &C, args: CreateFilmArgs) -> ServiceResult<Film> {
    let genre_ids: BTreeSet<i32> = args.genre_ids.iter().copied().collect();

    let mut tx = db::begin_write(ctx.db()).await?;
    ensure_references(&mut tx, args.mpa_id, &genre_ids).await?;
    let film_id = films::create(
        &mut *tx,
        &args.name,
        &args.description,
        args.release_date,
        args.duration,
        args.mpa_id,
    )
    .await?;
    for genre_id in &genre_ids {
        genres::link_film(&mut *tx, film_id, *genre_id).await?;
    }
    tx.commit().await?;

    info!(film_id, name = %args.name, "Created film");
    fetch_one(ctx, film_id).await
}

pub async fn update<C: Context>(ctx: &C, args: UpdateFilmArgs) -> ServiceResult<Film> {
    ids::ensure_valid(args.film_id)?;
    let genre_ids: Option<BTreeSet<i32>> = args
        .genre_ids
        .as_ref()
        .map(|genre_ids| genre_ids.iter().copied().collect());

    let mut tx = db::begin_write(ctx.db()).await?;
    ensure_exists(&mut *tx, args.film_id).await?;
    ensure_references(&mut tx, args.mpa_id, genre_ids.as_ref().unwrap_or(&BTreeSet::new()))
        .await?;
    films::update(
        &mut *tx,
        args.film_id,
        &args.name,
        &args.description,
        args.release_date,
        args.duration,
        args.mpa_id,
    )
    .await?;
    if let Some(genre_ids) = &genre_ids {
        genres::unlink_film(&mut *tx, args.film_id).await?;
        for genre_id in genre_ids {
            genres::link_film(&mut *tx, args.film_id, *genre_id).await?;
        }
    }
    tx.commit().await?;

    info!(film_id = args.film_id, "Updated film");
    fetch_one(ctx, args.film_id).await
}

/// Deletes the film together with its likes and genre links.
pub async fn delete<C: Context>(ctx: &C, film_id: i64) -> ServiceResult<()> {
    ids::ensure_valid(film_id)?;
    let mut tx = db::begin_write(ctx.db()).await?;
    let removed_likes = likes::remove_all_for_film(&mut *tx, film_id).await?;
    genres::unlink_film(&mut *tx, film_id).await?;
    if films::delete(&mut *tx, film_id).await? == 0 {
        return Err(AppError::FilmsNotFound);
    }
    tx.commit().await?;

    info!(film_id, removed_likes, "Deleted film");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::{TestContext, create_film, create_user};
    use crate::usecases::likes;
    use chrono::NaiveDate;

    fn film_args(genre_ids: Vec<i32>) -> CreateFilmArgs {
        CreateFilmArgs {
            name: "Alien".to_owned(),
            description: "In space no one can hear you scream.".to_owned(),
            release_date: NaiveDate::from_ymd_opt(1979, 5, 25).unwrap(),
            duration: 117,
            mpa_id: 4,
            genre_ids,
        }
    }

    #[tokio::test]
    async fn create_attaches_rating_and_sorted_unique_genres() {
        let ctx = TestContext::new().await;
        let film = create(&ctx, film_args(vec![4, 2, 4])).await.unwrap();

        assert_eq!(film.mpa.mpa_id, 4);
        assert_eq!(film.mpa.name, "R");
        let genre_ids: Vec<i32> = film.genres.iter().map(|genre| genre.genre_id).collect();
        assert_eq!(genre_ids, vec![2, 4]);
    }

    #[tokio::test]
    async fn create_rejects_unknown_references() {
        let ctx = TestContext::new().await;
        let mut args = film_args(vec![]);
        args.mpa_id = 99;
        assert!(matches!(
            create(&ctx, args).await,
            Err(AppError::MpaNotFound)
        ));
        assert!(matches!(
            create(&ctx, film_args(vec![1, 99])).await,
            Err(AppError::GenresNotFound)
        ));
        assert!(fetch_all(&ctx).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_keeps_genres_unless_replaced() {
        let ctx = TestContext::new().await;
        let film = create(&ctx, film_args(vec![1, 2])).await.unwrap();

        let keep = UpdateFilmArgs {
            film_id: film.film_id,
            name: "Aliens".to_owned(),
            description: String::new(),
            release_date: NaiveDate::from_ymd_opt(1986, 7, 18).unwrap(),
            duration: 137,
            mpa_id: 4,
            genre_ids: None,
        };
        let updated = update(&ctx, keep).await.unwrap();
        assert_eq!(updated.name, "Aliens");
        assert_eq!(updated.genres.len(), 2);

        let replace = UpdateFilmArgs {
            film_id: film.film_id,
            name: "Aliens".to_owned(),
            description: String::new(),
            release_date: NaiveDate::from_ymd_opt(1986, 7, 18).unwrap(),
            duration: 137,
            mpa_id: 4,
            genre_ids: Some(vec![6]),
        };
        let updated = update(&ctx, replace).await.unwrap();
        let genre_ids: Vec<i32> = updated.genres.iter().map(|genre| genre.genre_id).collect();
        assert_eq!(genre_ids, vec![6]);
    }

    #[tokio::test]
    async fn update_unknown_film_is_not_found() {
        let ctx = TestContext::new().await;
        let args = UpdateFilmArgs {
            film_id: 31,
            name: "Ghost".to_owned(),
            description: String::new(),
            release_date: NaiveDate::from_ymd_opt(1990, 7, 13).unwrap(),
            duration: 127,
            mpa_id: 3,
            genre_ids: None,
        };
        assert!(matches!(
            update(&ctx, args).await,
            Err(AppError::FilmsNotFound)
        ));
    }

    #[tokio::test]
    async fn delete_cascades_likes() {
        let ctx = TestContext::new().await;
        let film = create(&ctx, film_args(vec![1])).await.unwrap().film_id;
        let other = create_film(&ctx, "Other").await.film_id;
        let user = create_user(&ctx, "ripley").await.user_id;
        likes::add_like(&ctx, film, user).await.unwrap();
        likes::add_like(&ctx, other, user).await.unwrap();

        delete(&ctx, film).await.unwrap();

        assert!(matches!(
            fetch_one(&ctx, film).await,
            Err(AppError::FilmsNotFound)
        ));
        assert!(matches!(
            likes::fetch_user_ids(&ctx, film).await,
            Err(AppError::FilmsNotFound)
        ));
        assert_eq!(likes::count(&ctx, other).await.unwrap(), 1);
        assert!(matches!(
            delete(&ctx, film).await,
            Err(AppError::FilmsNotFound)
        ));
    }
}
