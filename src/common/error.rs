use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

pub type ServiceResult<T> = Result<T, AppError>;
pub type ServiceResponse<T> = ServiceResult<Json<T>>;

#[track_caller]
pub fn unexpected<T, E: Into<anyhow::Error>>(e: E) -> ServiceResult<T> {
    let caller = std::panic::Location::caller();
    error!("An unexpected error has occurred at {caller}: {}", e.into());
    Err(AppError::Unexpected)
}

/// Caller-facing classification of every [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    InvalidArgument,
    PreconditionFailed,
    Internal,
}

#[derive(Debug)]
pub enum AppError {
    Unexpected,
    InvalidId,

    FilmsNotFound,

    GenresNotFound,

    LikesAlreadyExists,

    MpaNotFound,

    RelationshipsSelfFriendship,
    RelationshipsRequestMissing,

    UsersNotFound,
    UsersAlreadyExists,
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    #[track_caller]
    fn from(e: E) -> Self {
        unexpected::<(), E>(e).unwrap_err()
    }
}

impl AppError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            AppError::FilmsNotFound
            | AppError::GenresNotFound
            | AppError::MpaNotFound
            | AppError::UsersNotFound => ErrorKind::NotFound,

            AppError::LikesAlreadyExists | AppError::UsersAlreadyExists => ErrorKind::Conflict,

            AppError::InvalidId | AppError::RelationshipsSelfFriendship => {
                ErrorKind::InvalidArgument
            }

            AppError::RelationshipsRequestMissing => ErrorKind::PreconditionFailed,

            AppError::Unexpected => ErrorKind::Internal,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            AppError::Unexpected => "unexpected",
            AppError::InvalidId => "invalid_id",

            AppError::FilmsNotFound => "films.not_found",

            AppError::GenresNotFound => "genres.not_found",

            AppError::LikesAlreadyExists => "likes.already_exists",

            AppError::MpaNotFound => "mpa.not_found",

            AppError::RelationshipsSelfFriendship => "relationships.self_friendship",
            AppError::RelationshipsRequestMissing => "relationships.request_missing",

            AppError::UsersNotFound => "users.not_found",
            AppError::UsersAlreadyExists => "users.already_exists",
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            AppError::Unexpected => "An unexpected error has occurred.",
            AppError::InvalidId => "Identifiers must be positive.",

            AppError::FilmsNotFound => "This film does not exist.",

            AppError::GenresNotFound => "This genre does not exist.",

            AppError::LikesAlreadyExists => "This user has already liked this film.",

            AppError::MpaNotFound => "This MPA rating does not exist.",

            AppError::RelationshipsSelfFriendship => "Users cannot add themselves as a friend.",
            AppError::RelationshipsRequestMissing => {
                "Both users must request the friendship before it can be confirmed."
            }

            AppError::UsersNotFound => "This user does not exist.",
            AppError::UsersAlreadyExists => "A user with this email or login already exists.",
        }
    }

    pub const fn http_status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::InvalidArgument | ErrorKind::PreconditionFailed => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub const fn response_parts(&self) -> (StatusCode, Json<ErrorResponse>) {
        let status = self.http_status_code();
        let response = ErrorResponse {
            code: self.code(),
            message: self.message(),
        };
        (status, Json(response))
    }
}

/// Returns true when `e` is a unique or primary key violation reported by the store.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

pub fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.response_parts().into_response()
    }
}
