use anyhow::{Context as _, Result};
use clap::{Args, Parser};
use database::{
    contact::{self, ContactKind},
    speaker,
};

use crate::cli::args::database::DatabaseConfig;

#[derive(Debug, Parser)]
#[command(about = "Manages speaker contacts")]
pub(crate) struct Contact {
    #[command(subcommand)]
    command: ContactCommand,
}

#[derive(Debug, clap::Subcommand)]
enum ContactCommand {
    #[command(about = "Adds a contact to a speaker")]
    Add(AddContact),
}

#[derive(Debug, Args)]
struct AddContact {
    #[command(flatten)]
    database: DatabaseConfig,

    #[arg(long, help = "Slug of the speaker")]
    speaker: String,

    #[arg(long, help = "email, phone or fax")]
    kind: ContactKind,

    #[arg(long)]
    value: String,
}

impl Contact {
    pub(crate) async fn run(&self) -> Result<()> {
        match &self.command {
            ContactCommand::Add(add) => add.run().await,
        }
    }
}

impl AddContact {
    async fn run(&self) -> Result<()> {
        let database = self.database.connect().await?;

        let speaker = speaker::fetch_by_slug(&database, &self.speaker)
            .await?
            .with_context(|| format!("speaker {} does not exist", self.speaker))?;
        let contact = contact::create(&database, speaker.id, self.kind, &self.value).await?;

        tracing::info!("added {} contact {} to {}", contact.kind, contact.value, speaker.name);

        Ok(())
    }
}
