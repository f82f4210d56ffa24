use clap::Parser;

use crate::web::Credentials;

#[derive(Debug, Parser)]
pub(crate) struct AdminConfig {
    #[arg(long, env, requires = "admin_password", help = "Admin pages reject every request when omitted")]
    pub(crate) admin_username: Option<String>,

    #[arg(long, env, hide_env_values = true)]
    pub(crate) admin_password: Option<String>,
}

impl AdminConfig {
    pub(crate) fn credentials(&self) -> Option<Credentials> {
        match (&self.admin_username, &self.admin_password) {
            (Some(username), Some(password)) => Some(Credentials {
                username: username.clone(),
                password: password.clone(),
            }),
            _ => {
                tracing::warn!("ADMIN_USERNAME is not set, so admin pages are unreachable.");
                None
            },
        }
    }
}
