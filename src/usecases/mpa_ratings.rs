use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::mpa_ratings::MpaRating;
use crate::repositories::mpa_ratings;

pub async fn fetch_one<C: Context>(ctx: &C, mpa_id: i32) -> ServiceResult<MpaRating> {
    match mpa_ratings::fetch_one(ctx.db(), mpa_id).await {
        Ok(rating) => Ok(MpaRating::from(rating)),
        Err(sqlx::Error::RowNotFound) => Err(AppError::MpaNotFound),
        Err(e) => unexpected(e),
    }
}

pub async fn fetch_all<C: Context>(ctx: &C) -> ServiceResult<Vec<MpaRating>> {
    match mpa_ratings::fetch_all(ctx.db()).await {
        Ok(ratings) => Ok(ratings.into_iter().map(MpaRating::from).collect()),
        Err(e) => unexpected(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testing::TestContext;

    #[tokio::test]
    async fn seeded_ratings_are_available() {
        let ctx = TestContext::new().await;
        let codes: Vec<String> = fetch_all(&ctx)
            .await
            .unwrap()
            .into_iter()
            .map(|rating| rating.code)
            .collect();
        assert_eq!(codes, vec!["G", "PG", "PG-13", "R", "NC-17"]);
        assert!(matches!(
            fetch_one(&ctx, 0).await,
            Err(AppError::MpaNotFound)
        ));
    }
}
