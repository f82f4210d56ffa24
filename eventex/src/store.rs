use anyhow::Result;
use database::{
    CreateError,
    PgPool,
    contact::{self, Contact},
    media::{self, Media},
    speaker::{self, Speaker},
    subscription::{self, Subscription},
    talk::{self, Talk},
};
use forms::NewSubscription;

/// Records the web pages read and write.
pub(crate) trait Store: Send + Sync + 'static {
    fn speakers(&self) -> impl Future<Output = Result<Vec<Speaker>>> + Send;

    fn speaker(&self, slug: String) -> impl Future<Output = Result<Option<(Speaker, Vec<Contact>)>>> + Send;

    fn talks(&self) -> impl Future<Output = Result<Vec<Talk>>> + Send;

    fn talk(&self, id: i32) -> impl Future<Output = Result<Option<(Talk, Vec<Media>)>>> + Send;

    fn create_subscription(&self, subscription: NewSubscription) -> impl Future<Output = Result<Subscription, CreateError>> + Send;

    fn subscription(&self, id: i32) -> impl Future<Output = Result<Option<Subscription>>> + Send;

    fn subscriptions(&self) -> impl Future<Output = Result<Vec<Subscription>>> + Send;

    fn mark_as_paid(&self, ids: Vec<i32>) -> impl Future<Output = Result<u64>> + Send;
}

pub(crate) struct PgStore {
    database: PgPool,
}

impl PgStore {
    pub(crate) fn new(database: PgPool) -> Self {
        Self { database }
    }
}

impl Store for PgStore {
    async fn speakers(&self) -> Result<Vec<Speaker>> {
        speaker::fetch_all(&self.database).await
    }

    async fn speaker(&self, slug: String) -> Result<Option<(Speaker, Vec<Contact>)>> {
        let Some(speaker) = speaker::fetch_by_slug(&self.database, &slug).await? else {
            return Ok(None);
        };
        let contacts = contact::fetch_by_speaker(&self.database, speaker.id).await?;

        Ok(Some((speaker, contacts)))
    }

    async fn talks(&self) -> Result<Vec<Talk>> {
        talk::fetch_all(&self.database).await
    }

    async fn talk(&self, id: i32) -> Result<Option<(Talk, Vec<Media>)>> {
        let Some(talk) = talk::fetch_by_id(&self.database, id).await? else {
            return Ok(None);
        };
        let media = media::fetch_by_talk(&self.database, talk.id).await?;

        Ok(Some((talk, media)))
    }

    async fn create_subscription(&self, subscription: NewSubscription) -> Result<Subscription, CreateError> {
        subscription::create(
            &self.database,
            &subscription.name,
            &subscription.national_id,
            subscription.email.as_deref(),
            subscription.phone.as_deref(),
        )
        .await
    }

    async fn subscription(&self, id: i32) -> Result<Option<Subscription>> {
        subscription::fetch_by_id(&self.database, id).await
    }

    async fn subscriptions(&self) -> Result<Vec<Subscription>> {
        subscription::fetch_all(&self.database).await
    }

    async fn mark_as_paid(&self, ids: Vec<i32>) -> Result<u64> {
        subscription::mark_as_paid(&self.database, &ids).await
    }
}
