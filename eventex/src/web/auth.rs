use axum::{
    extract::{Request, State},
    http::{
        HeaderMap,
        StatusCode,
        header::{AUTHORIZATION, WWW_AUTHENTICATE},
    },
    middleware::Next,
    response::{Html, IntoResponse, Response},
};
use base64::{Engine, engine::general_purpose::STANDARD};

use super::html;

const CHALLENGE: &str = r#"Basic realm="Eventex admin", charset="UTF-8""#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Credentials {
    pub(crate) username: String,
    pub(crate) password: String,
}

impl Credentials {
    /// Whether `headers` carry these credentials as HTTP Basic authorization.
    fn authorize(&self, headers: &HeaderMap) -> bool {
        headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Basic "))
            .and_then(|encoded| STANDARD.decode(encoded.trim()).ok())
            .and_then(|decoded| String::from_utf8(decoded).ok())
            .is_some_and(|decoded| decoded.split_once(':') == Some((self.username.as_str(), self.password.as_str())))
    }
}

pub(crate) async fn require_admin(State(credentials): State<Option<Credentials>>, request: Request, next: Next) -> Response {
    match credentials {
        Some(credentials) if credentials.authorize(request.headers()) => next.run(request).await,
        _ => {
            tracing::info!("challenged unauthenticated request to {}", request.uri());
            challenge()
        },
    }
}

fn challenge() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(WWW_AUTHENTICATE, CHALLENGE)],
        Html(html::page("Log in", "<h1>Log in</h1>\n<p>The admin area requires your username and password.</p>")),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue, header::AUTHORIZATION};

    use super::Credentials;

    fn credentials() -> Credentials {
        Credentials {
            username: "admin".to_string(),
            password: "s3cr:et".to_string(),
        }
    }

    fn headers(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn accept_matching_credentials() {
        // admin:s3cr:et
        assert!(credentials().authorize(&headers("Basic YWRtaW46czNjcjpldA==")));
    }

    #[test]
    fn reject_wrong_password() {
        // admin:admin
        assert!(!credentials().authorize(&headers("Basic YWRtaW46YWRtaW4=")));
    }

    #[test]
    fn reject_other_schemes_and_garbage() {
        assert!(!credentials().authorize(&headers("Bearer YWRtaW46czNjcjpldA==")));
        assert!(!credentials().authorize(&headers("Basic !!!")));
        assert!(!credentials().authorize(&HeaderMap::new()));
    }
}
