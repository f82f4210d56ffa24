use reqwest::{StatusCode, header::InvalidHeaderValue};

#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    #[error("invalid header value: {0}")]
    InvalidHeaderValue(#[source] InvalidHeaderValue),

    #[error("failed to build client: {0}")]
    ClientError(#[source] reqwest::Error),

    #[error("failed to request: {0}")]
    RequestError(#[source] reqwest::Error),

    #[error("mail api responded with {status}: {body}")]
    UnsuccessfulRequest { status: StatusCode, body: String },
}
