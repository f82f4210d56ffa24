use anyhow::{Context as _, Result};
use clap::{Args, Parser};
use database::{
    media::{self, MediaKind, MediaLabel},
    talk,
};

use crate::cli::args::database::DatabaseConfig;

#[derive(Debug, Parser)]
#[command(about = "Manages talk media")]
pub(crate) struct Media {
    #[command(subcommand)]
    command: MediaCommand,
}

#[derive(Debug, clap::Subcommand)]
enum MediaCommand {
    #[command(about = "Attaches a video or slides to a talk")]
    Add(AddMedia),
}

#[derive(Debug, Args)]
struct AddMedia {
    #[command(flatten)]
    database: DatabaseConfig,

    #[arg(long, help = "Id of the talk")]
    talk: i32,

    #[arg(long, help = "youtube or slides")]
    kind: MediaKind,

    #[arg(long, help = "Video id or slideshow id at the provider")]
    media_id: String,

    #[arg(long)]
    title: String,
}

impl Media {
    pub(crate) async fn run(&self) -> Result<()> {
        match &self.command {
            MediaCommand::Add(add) => add.run().await,
        }
    }
}

impl AddMedia {
    async fn run(&self) -> Result<()> {
        let database = self.database.connect().await?;

        let talk = talk::fetch_by_id(&database, self.talk)
            .await?
            .with_context(|| format!("talk {} does not exist", self.talk))?;
        let media = media::create(&database, talk.id, self.kind, &self.media_id, &self.title).await?;

        tracing::info!("added {} {}", media.kind, MediaLabel { talk_title: &talk.title, media: &media });

        Ok(())
    }
}
