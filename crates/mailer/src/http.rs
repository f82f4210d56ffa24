use std::time::Duration;

use futures::{FutureExt, future::BoxFuture};
use reqwest::{
    Client,
    header::{ACCEPT, HeaderMap, HeaderName, HeaderValue},
};
use serde::Serialize;
use url::Url;

use crate::{Deliver, MailerError, Message};

const TOKEN_HEADER: HeaderName = HeaderName::from_static("x-postmark-server-token");
const TIMEOUT: Duration = Duration::from_secs(10);

/// Sends messages through a Postmark-compatible email API.
#[derive(Debug, Clone)]
pub struct HttpMailer {
    client: Client,
    endpoint: Url,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct Payload<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text_body: &'a str,
}

impl<'a> From<&'a Message> for Payload<'a> {
    fn from(message: &'a Message) -> Self {
        Self {
            from: &message.from,
            to: &message.to,
            subject: &message.subject,
            text_body: &message.body,
        }
    }
}

impl HttpMailer {
    pub fn new(endpoint: Url, token: &str) -> Result<Self, MailerError> {
        let mut headers = HeaderMap::new();
        headers.insert(TOKEN_HEADER, HeaderValue::from_str(token).map_err(MailerError::InvalidHeaderValue)?);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(TIMEOUT)
            .build()
            .map_err(MailerError::ClientError)?;

        Ok(Self { client, endpoint })
    }
}

impl Deliver for HttpMailer {
    fn deliver(&self, message: Message) -> BoxFuture<'static, Result<(), MailerError>> {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();

        async move {
            let response = client
                .post(endpoint)
                .json(&Payload::from(&message))
                .send()
                .await
                .map_err(MailerError::RequestError)?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(MailerError::UnsuccessfulRequest { status, body });
            }

            tracing::info!(to = %message.to, "sent \"{}\"", message.subject);

            Ok(())
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::{HttpMailer, Payload};
    use crate::{MailerError, Message};

    #[test]
    fn payload_uses_api_field_names() {
        let message = Message {
            from: "contato@eventex.com.br".to_string(),
            to: "henrique@bastos.net".to_string(),
            subject: "Subscription confirmed".to_string(),
            body: "Thank you for subscribing!".to_string(),
        };

        let payload = serde_json::to_value(Payload::from(&message)).unwrap();

        assert_eq!(
            payload,
            serde_json::json!({
                "From": "contato@eventex.com.br",
                "To": "henrique@bastos.net",
                "Subject": "Subscription confirmed",
                "TextBody": "Thank you for subscribing!",
            })
        );
    }

    #[test]
    fn reject_token_unfit_for_header() {
        let endpoint = Url::parse("https://api.postmarkapp.com/email").unwrap();

        assert!(matches!(
            HttpMailer::new(endpoint, "line\nbreak"),
            Err(MailerError::InvalidHeaderValue(_))
        ));
    }
}
