use anyhow::Result;
use clap::Parser;
use database::migrations::{MigrationCommand, Migrator};

use crate::cli::args::database::DatabaseConfig;

#[derive(Debug, Parser)]
#[command(about = "Applies, reverts or lists database migrations")]
pub(crate) struct Migration {
    #[command(flatten)]
    database: DatabaseConfig,

    #[command(flatten)]
    command: MigrationCommand,
}

impl Migration {
    pub(crate) async fn run(&self) -> Result<()> {
        let migrator = Migrator::new()?;
        let pgpool = self.database.connect().await?;
        self.command.run(&mut *pgpool.acquire().await?, migrator.into_boxed_inner()).await?;

        Ok(())
    }
}
