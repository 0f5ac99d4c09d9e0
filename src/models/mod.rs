pub mod films;
pub mod genres;
pub mod mpa_ratings;
pub mod relationships;
pub mod users;
