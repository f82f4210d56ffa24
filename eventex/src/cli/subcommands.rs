use anyhow::Result;

pub(crate) use self::serve::Serve;
use self::{contact::Contact, media::Media, migration::Migration, speaker::Speaker, talk::Talk};

mod contact;
mod media;
mod migration;
mod serve;
mod speaker;
mod talk;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Subcommand {
    Serve(Serve),
    Migration(Migration),
    Speaker(Speaker),
    Contact(Contact),
    Talk(Talk),
    Media(Media),
}

impl Subcommand {
    pub(crate) async fn run(self) -> Result<()> {
        match self {
            Self::Serve(serve) => serve.run().await,
            Self::Migration(migration) => migration.run().await,
            Self::Speaker(speaker) => speaker.run().await,
            Self::Contact(contact) => contact.run().await,
            Self::Talk(talk) => talk.run().await,
            Self::Media(media) => media.run().await,
        }
    }
}
