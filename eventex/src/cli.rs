use std::ffi::OsString;

use anyhow::Result;
use clap::{Parser, error::ErrorKind};

use crate::cli::subcommands::{Serve, Subcommand};

mod args;
mod subcommands;

pub(crate) struct Application;

#[derive(Debug, clap::Parser)]
#[command(version, about = "Conference site with speakers, talks and subscriptions")]
#[command(arg_required_else_help = false)]
#[command(subcommand_required = false)]
#[command(after_help = "Without a subcommand the arguments are those of `serve`.")]
pub(crate) struct Cli {
    #[command(subcommand)]
    subcommand: Option<Subcommand>,
}

impl Application {
    pub(crate) async fn start() -> Result<()> {
        let subcommand = parse_from(std::env::args_os()).unwrap_or_else(|err| err.exit());

        subcommand.run().await
    }
}

/// Falls back to `serve` both when no subcommand is given and when the arguments only make sense for it.
fn parse_from<I, T>(args: I) -> Result<Subcommand, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = args.into_iter().collect::<Vec<_>>();

    match Cli::try_parse_from(args.clone()) {
        Ok(Cli { subcommand: Some(subcommand) }) => Ok(subcommand),
        Ok(Cli { subcommand: None }) => Serve::try_parse_from(args).map(Subcommand::Serve),
        Err(err) if err.kind() == ErrorKind::UnknownArgument => Serve::try_parse_from(args).map(Subcommand::Serve),
        Err(err) => Err(err),
    }
}
