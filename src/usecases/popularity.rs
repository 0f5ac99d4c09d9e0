use crate::common::context::Context;
use crate::common::error::{ServiceResult, unexpected};
use crate::models::films::{Film, PopularFilm};
use crate::repositories::films;
use crate::usecases::films::fetch_genres_by_film;

pub const DEFAULT_POPULAR_COUNT: i64 = 10;

/// Requests for fewer than one film still return one film.
pub const fn page_size(count: i64) -> i64 {
    if count < 1 { 1 } else { count }
}

/// Up to `count` films ordered by like count descending, then by film id.
pub async fn fetch_popular<C: Context>(ctx: &C, count: i64) -> ServiceResult<Vec<PopularFilm>> {
    let ranked = match films::fetch_popular(ctx.db(), page_size(count)).await {
        Ok(ranked) => ranked,
        Err(e) => return unexpected(e),
    };

    let film_ids: Vec<i64> = ranked.iter().map(|ranked| ranked.film.film_id).collect();
    let mut genres = fetch_genres_by_film(ctx.db(), &film_ids).await?;
    Ok(ranked
        .into_iter()
        .map(|ranked| {
            let film_genres = genres.remove(&ranked.film.film_id).unwrap_or_default();
            PopularFilm {
                film: Film::from_entity(ranked.film, film_genres),
                like_count: ranked.like_count,
            }
        })
        .collect())
}
