use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::genres::Genre;
use crate::repositories::genres;

pub async fn fetch_one<C: Context>(ctx: &C, genre_id: i32) -> ServiceResult<Genre> {
    match genres::fetch_one(ctx.db(), genre_id).await {
        Ok(genre) => Ok(Genre::from(genre)),
        Err(sqlx::Error::RowNotFound) => Err(AppError::GenresNotFound),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<Genre>> {
    match genres::fetch_all(ctx.db()).await {
        Ok(genres) => Ok(genres.into_iter().map(Genre::from).collect()),
        Err(e) => unexpected(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::TestContext;

    #[tokio::test]
    async fn seeded_genres_are_listed_in_order() {
        let ctx = TestContext::new().await;
        let all = fetch_all(&ctx).await.unwrap();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0].name, "Comedy");
        assert_eq!(fetch_one(&ctx, 2).await.unwrap().name, "Drama");
        assert!(matches!(
            fetch_one(&ctx, 100).await,
            Err(AppError::GenresNotFound)
        ));
    }
}
