use anyhow::{Result, bail};
use clap::{Args, Parser};
use database::speaker;

use crate::{cli::args::database::DatabaseConfig, slug::slugify};

#[derive(Debug, Parser)]
#[command(about = "Manages speakers")]
pub(crate) struct Speaker {
    #[command(subcommand)]
    command: SpeakerCommand,
}

#[derive(Debug, clap::Subcommand)]
enum SpeakerCommand {
    #[command(about = "Adds a speaker")]
    Add(AddSpeaker),
}

#[derive(Debug, Args)]
struct AddSpeaker {
    #[command(flatten)]
    database: DatabaseConfig,

    #[arg(long)]
    name: String,

    #[arg(long, help = "Derived from the name when omitted")]
    slug: Option<String>,

    #[arg(long)]
    url: String,

    #[arg(long, default_value = "")]
    description: String,

    #[arg(long, help = "Path or URL of the avatar image")]
    avatar: Option<String>,
}

impl Speaker {
    pub(crate) async fn run(&self) -> Result<()> {
        match &self.command {
            SpeakerCommand::Add(add) => add.run().await,
        }
    }
}

impl AddSpeaker {
    async fn run(&self) -> Result<()> {
        let slug = speaker_slug(&self.name, self.slug.as_deref())?;
        let database = self.database.connect().await?;

        let speaker = speaker::create(
            &database,
            &self.name,
            &slug,
            &self.url,
            &self.description,
            self.avatar.as_deref(),
        )
        .await?;

        tracing::info!("added speaker {} at /speakers/{}", speaker.name, speaker.slug);

        Ok(())
    }
}

/// The given slug, or one derived from the name. An empty slug would make the speaker page unreachable.
fn speaker_slug(name: &str, slug: Option<&str>) -> Result<String> {
    let slug = match slug {
        Some(slug) => slug.to_string(),
        None => slugify(name),
    };

    if slug.is_empty() {
        bail!("cannot derive a slug from {name:?}, pass one with --slug");
    }

    Ok(slug)
}
