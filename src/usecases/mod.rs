pub mod common_friends;
pub mod films;
pub mod genres;
pub mod likes;
pub mod mpa_ratings;
pub mod popularity;
pub mod relationships;
pub mod users;
