use anyhow::Result;
use logging::{LevelFilter, initialize_logging};

use crate::cli::Application;

mod cli;
mod notification;
mod slug;
mod store;
mod web;

#[tokio::main]
async fn main() -> Result<()> {
    initialize_logging(LevelFilter::INFO);

    Application::start().await
}
