use anyhow::Result;
use clap::Parser;
use mailer::{ConsoleMailer, HttpMailer, Mailer};
use url::Url;

#[derive(Debug, Parser)]
pub(crate) struct MailConfig {
    #[arg(long, env, default_value = "contato@eventex.com.br", help = "Sender of notification emails")]
    pub(crate) default_from_email: String,

    #[arg(long, env, requires = "mail_api_token", help = "Email API endpoint; emails are only logged when omitted")]
    pub(crate) mail_api_url: Option<Url>,

    #[arg(long, env, hide_env_values = true)]
    pub(crate) mail_api_token: Option<String>,
}

impl MailConfig {
    pub(crate) fn mailer(&self) -> Result<Mailer> {
        match (&self.mail_api_url, &self.mail_api_token) {
            (Some(url), Some(token)) => Ok(Mailer::Http(HttpMailer::new(url.clone(), token)?)),
            _ => {
                tracing::warn!("MAIL_API_URL is not set, so emails are written to the log instead of being sent.");
                Ok(Mailer::Console(ConsoleMailer))
            },
        }
    }
}
