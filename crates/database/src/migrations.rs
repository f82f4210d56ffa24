use std::ops::Deref;

use sqlx::Postgres;
pub use sqlx_migrator::cli::MigrationCommand;
pub use sqlx_migrator::migrator::{Migrate, Plan};
use sqlx_migrator::{Info, migrator, vec_box};

pub mod v1_speakers_and_contacts;
pub mod v2_talks_and_media;
pub mod v3_subscriptions;

pub struct Migrator {
    inner: migrator::Migrator<Postgres>,
}

impl Deref for Migrator {
    type Target = migrator::Migrator<Postgres>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Migrator {
    /// Fails when two registered migrations share an app and name but disagree on their contents.
    pub fn new() -> Result<Self, sqlx_migrator::Error> {
        let mut migrator = migrator::Migrator::new();
        migrator.add_migrations(vec_box!(
            v1_speakers_and_contacts::V1Migration,
            v2_talks_and_media::V2Migration,
            v3_subscriptions::V3Migration,
        ))?;

        Ok(Self { inner: migrator })
    }

    pub fn into_boxed_inner(self) -> Box<migrator::Migrator<Postgres>> {
        Box::new(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use sqlx_migrator::{Info, Migration};

    use super::Migrator;

    #[test]
    fn register_every_migration_in_order() {
        let migrator = Migrator::new().unwrap();

        let names = migrator
            .migrations()
            .iter()
            .map(|migration| (migration.app(), migration.name()))
            .collect::<Vec<_>>();

        assert_eq!(
            names,
            [
                ("eventex", "create speakers and contacts"),
                ("eventex", "create talks and media"),
                ("eventex", "create subscriptions"),
            ]
        );
    }
}
