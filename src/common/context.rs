use crate::models::relationships::FriendshipMode;
use sqlx::{Pool, Sqlite};

pub trait Context: Sync + Send {
    fn db(&self) -> &Pool<Sqlite>;
    fn friendship_mode(&self) -> FriendshipMode;
}
