use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt::Display;

#[derive(Debug)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        database_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self.code {
            1..=99 => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };

        (status, self.message).into_response()
    }
}

pub fn database_error<T: Display>(err: T) -> Error {
    Error {
        code: 2,
        message: err.to_string(),
    }
}

pub fn not_found_error() -> Error {
    Error {
        code: 100,
        message: "place not found".into(),
    }
}

pub fn validation_error(message: &str) -> Error {
    Error {
        code: 101,
        message: message.into(),
    }
}
