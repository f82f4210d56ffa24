use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use super::html;

#[derive(Debug, thiserror::Error)]
pub(crate) enum AppError {
    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => not_found_page().into_response(),
            Self::Internal(err) => {
                tracing::error!("failed to handle request\nError: {err:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(html::page("Server error", "<h1>Something went wrong</h1>"))).into_response()
            },
        }
    }
}

/// Path ids are plain digits that fit a record id. Anything else names no record.
pub(crate) fn record_id(value: &str) -> Result<i32, AppError> {
    if value.is_empty() || !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(AppError::NotFound);
    }

    value.parse().map_err(|_| AppError::NotFound)
}

pub(crate) async fn not_found() -> AppError {
    AppError::NotFound
}

fn not_found_page() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(html::page("Not found", "<h1>Page not found</h1>")))
}

#[cfg(test)]
mod tests {
    use super::{AppError, record_id};

    #[test]
    fn parse_digits() {
        assert_eq!(record_id("1").unwrap(), 1);
        assert_eq!(record_id("0042").unwrap(), 42);
    }

    #[test]
    fn reject_anything_else_as_not_found() {
        for value in ["", "abc", "-1", "+1", "1x", "99999999999"] {
            assert!(matches!(record_id(value), Err(AppError::NotFound)), "{value}");
        }
    }
}
