use actix_web::http::StatusCode;
use actix_web::ResponseError;

use thiserror::Error;

pub type RestResult<T> = Result<T, RestError>;

/// SQLSTATE raised by Postgres when a foreign key constraint is violated
const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Debug, Error)]
pub enum RestError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<sqlx::Error> for RestError {
    fn from(e: sqlx::Error) -> Self {
        if is_foreign_key_violation(&e) {
            return Self::BadRequest("Referenced record does not exist".into());
        }
        tracing::error!(error.cause_chain = ?e, "Database query failed");
        Self::InternalError("Database error".into())
    }
}

impl ResponseError for RestError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InternalError(_) | Self::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db_err) => db_err
            .code()
            .map(|code| code.as_ref() == FOREIGN_KEY_VIOLATION)
            .unwrap_or(false),
        _ => false,
    }
}
