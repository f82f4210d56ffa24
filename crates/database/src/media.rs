use std::fmt::{self, Display};

use anyhow::{Error, Result};
use futures::{TryFutureExt, TryStreamExt};
use sea_query::{Expr, Iden, Order, PostgresQueryBuilder, Query};
use sea_query_binder::SqlxBinder;
use sqlx::{FromRow, PgPool};

#[derive(Iden)]
pub(crate) enum DatabaseMedia {
    #[iden = "media"]
    Table,
    Id,
    TalkId,
    Kind,
    MediaId,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum MediaKind {
    #[strum(serialize = "youtube", to_string = "YouTube")]
    YouTube,
    #[strum(serialize = "slides", to_string = "Slides")]
    Slides,
}

impl MediaKind {
    pub(crate) fn code(self) -> &'static str {
        match self {
            Self::YouTube => "YT",
            Self::Slides => "SL",
        }
    }

    pub(crate) fn from_code(code: &str) -> Option<Self> {
        match code {
            "YT" => Some(Self::YouTube),
            "SL" => Some(Self::Slides),
            _ => None,
        }
    }
}

#[derive(Debug, FromRow)]
struct DatabaseMediaRow {
    id: i32,
    talk_id: i32,
    kind: String,
    media_id: String,
    title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub id: i32,
    pub talk_id: i32,
    pub kind: MediaKind,
    pub media_id: String,
    pub title: String,
}

impl TryFrom<DatabaseMediaRow> for Media {
    type Error = Error;

    fn try_from(row: DatabaseMediaRow) -> Result<Self> {
        let kind = MediaKind::from_code(&row.kind).ok_or_else(|| anyhow::anyhow!("unknown media kind {:?}", row.kind))?;

        Ok(Self {
            id: row.id,
            talk_id: row.talk_id,
            kind,
            media_id: row.media_id,
            title: row.title,
        })
    }
}

/// Renders as `"{talk title} - {media title}"`.
pub struct MediaLabel<'a> {
    pub talk_title: &'a str,
    pub media: &'a Media,
}

impl Display for MediaLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.talk_title, self.media.title)
    }
}

const COLUMNS: [DatabaseMedia; 5] = [
    DatabaseMedia::Id,
    DatabaseMedia::TalkId,
    DatabaseMedia::Kind,
    DatabaseMedia::MediaId,
    DatabaseMedia::Title,
];

pub async fn create(database: &PgPool, talk_id: i32, kind: MediaKind, media_id: &str, title: &str) -> Result<Media> {
    let (sql, values) = Query::insert()
        .into_table(DatabaseMedia::Table)
        .columns([DatabaseMedia::TalkId, DatabaseMedia::Kind, DatabaseMedia::MediaId, DatabaseMedia::Title])
        .values_panic([talk_id.into(), kind.code().into(), media_id.into(), title.into()])
        .returning(Query::returning().columns(COLUMNS))
        .build_sqlx(PostgresQueryBuilder);

    sqlx::query_as_with::<_, DatabaseMediaRow, _>(&sql, values)
        .fetch_one(&mut *database.acquire().await?)
        .map_err(Error::msg)
        .await
        .and_then(Media::try_from)
}

pub async fn fetch_by_talk(database: &PgPool, talk_id: i32) -> Result<Vec<Media>> {
    let (sql, values) = Query::select()
        .columns(COLUMNS)
        .from(DatabaseMedia::Table)
        .and_where(Expr::col(DatabaseMedia::TalkId).eq(talk_id))
        .order_by(DatabaseMedia::Id, Order::Asc)
        .build_sqlx(PostgresQueryBuilder);

    sqlx::query_as_with::<_, DatabaseMediaRow, _>(&sql, values)
        .fetch(&mut *database.acquire().await?)
        .map_err(Error::msg)
        .and_then(|row| futures::future::ready(Media::try_from(row)))
        .try_collect()
        .await
}

#[cfg(test)]
mod tests {
    use super::{Media, MediaKind, MediaLabel};

    #[test]
    fn label_joins_talk_and_media_titles() {
        let media = Media {
            id: 1,
            talk_id: 1,
            kind: MediaKind::YouTube,
            media_id: "QjA5faZF1A8".to_string(),
            title: "Video".to_string(),
        };

        let label = MediaLabel { talk_title: "Talk 1", media: &media };

        assert_eq!(label.to_string(), "Talk 1 - Video");
    }

    #[test]
    fn kind_round_trips_through_codes() {
        assert_eq!(MediaKind::from_code(MediaKind::YouTube.code()), Some(MediaKind::YouTube));
        assert_eq!(MediaKind::from_code(MediaKind::Slides.code()), Some(MediaKind::Slides));
        assert_eq!("YouTube".parse::<MediaKind>().ok(), Some(MediaKind::YouTube));
        assert_eq!(MediaKind::Slides.to_string(), "Slides");
    }
}
