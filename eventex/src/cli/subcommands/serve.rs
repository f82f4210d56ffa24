use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::args::{admin::AdminConfig, database::DatabaseConfig, mail::MailConfig, server::ServerConfig},
    store::PgStore,
    web::{self, AppState},
};

#[derive(Debug, Parser)]
#[command(about = "Runs the web server (default when no subcommand is given)")]
pub(crate) struct Serve {
    #[command(flatten)]
    pub(crate) database: DatabaseConfig,

    #[command(flatten)]
    pub(crate) server: ServerConfig,

    #[command(flatten)]
    pub(crate) mail: MailConfig,

    #[command(flatten)]
    pub(crate) admin: AdminConfig,
}

impl Serve {
    pub(crate) async fn run(&self) -> Result<()> {
        let database = self.database.connect().await?;

        let state = AppState {
            store: PgStore::new(database),
            mailer: Arc::new(self.mail.mailer()?),
            from_email: self.mail.default_from_email.clone(),
            admin: self.admin.credentials(),
        };

        web::serve(self.server.listen, state).await
    }
}
