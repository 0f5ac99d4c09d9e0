pub mod films;
pub mod genres;
pub mod likes;
pub mod mpa_ratings;
pub mod relationships;
pub mod users;

/// Upper bound on ids bound into a single `IN (...)` list.
pub const MAX_IDS_PER_QUERY: usize = 500;
