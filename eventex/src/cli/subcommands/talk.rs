use anyhow::Result;
use clap::{Args, Parser};
use database::talk;
use time::{Time, macros::format_description};

use crate::cli::args::database::DatabaseConfig;

#[derive(Debug, Parser)]
#[command(about = "Manages talks")]
pub(crate) struct Talk {
    #[command(subcommand)]
    command: TalkCommand,
}

#[derive(Debug, clap::Subcommand)]
enum TalkCommand {
    #[command(about = "Adds a talk")]
    Add(AddTalk),
}

#[derive(Debug, Args)]
struct AddTalk {
    #[command(flatten)]
    database: DatabaseConfig,

    #[arg(long)]
    title: String,

    #[arg(long, default_value = "")]
    description: String,

    #[arg(long, value_parser = parse_start_time, help = "HH:MM")]
    start_time: Time,
}

impl Talk {
    pub(crate) async fn run(&self) -> Result<()> {
        match &self.command {
            TalkCommand::Add(add) => add.run().await,
        }
    }
}

impl AddTalk {
    async fn run(&self) -> Result<()> {
        let database = self.database.connect().await?;
        let talk = talk::create(&database, &self.title, &self.description, self.start_time).await?;

        tracing::info!("added talk {} at /talks/{}", talk.title, talk.id);

        Ok(())
    }
}

fn parse_start_time(value: &str) -> Result<Time, time::error::Parse> {
    Time::parse(value, format_description!("[hour]:[minute]"))
}
