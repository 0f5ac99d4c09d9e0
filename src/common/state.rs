use crate::common::context::Context;
use crate::models::relationships::FriendshipMode;
use sqlx::{Pool, Sqlite};

#[derive(Clone)]
pub struct AppState {
    pub db: Pool<Sqlite>,
    pub friendship_mode: FriendshipMode,
}

impl Context for AppState {
    fn db(&self) -> &Pool<Sqlite> {
        &self.db
    }

    fn friendship_mode(&self) -> FriendshipMode {
        self.friendship_mode
    }
}
