use crate::common::context::Context;
use crate::common::init;
use crate::models::films::{CreateFilmArgs, Film};
use crate::models::relationships::FriendshipMode;
use crate::models::users::{CreateUserArgs, User};
use crate::usecases::{films, users};
use chrono::NaiveDate;
use sqlx::{Pool, Sqlite};
use std::time::Duration;
use tempfile::TempDir;

pub struct TestContext {
    db: Pool<Sqlite>,
    friendship_mode: FriendshipMode,
    _dir: TempDir,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::with_mode(FriendshipMode::RequestConfirm).await
    }

    pub async fn with_mode(friendship_mode: FriendshipMode) -> Self {
        let dir = TempDir::new().unwrap();
        let db_url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());
        let db = init::connect_db(&db_url, 4, Duration::from_secs(5))
            .await
            .unwrap();
        Self {
            db,
            friendship_mode,
            _dir: dir,
        }
    }

    /// Reuses the same database under a different friendship mode.
    pub fn switch_mode(self, friendship_mode: FriendshipMode) -> Self {
        Self {
            friendship_mode,
            ..self
        }
    }
}

impl Context for TestContext {
    fn db(&self) -> &Pool<Sqlite> {
        &self.db
    }

    fn friendship_mode(&self) -> FriendshipMode {
        self.friendship_mode
    }
}

pub async fn create_user(ctx: &TestContext, login: &str) -> User {
    let args = CreateUserArgs {
        email: format!("{login}@example.com"),
        login: login.to_owned(),
        name: None,
        birthday: NaiveDate::from_ymd_opt(1990, 1, 1),
    };
    users::create(ctx, args).await.unwrap()
}

pub async fn create_film(ctx: &TestContext, name: &str) -> Film {
    let args = CreateFilmArgs {
        name: name.to_owned(),
        description: format!("{name} description"),
        release_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        duration: 120,
        mpa_id: 1,
        genre_ids: vec![],
    };
    films::create(ctx, args).await.unwrap()
}
