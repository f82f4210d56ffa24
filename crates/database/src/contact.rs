use anyhow::{Error, Result};
use futures::{TryFutureExt, TryStreamExt};
use sea_query::{Expr, Iden, Order, PostgresQueryBuilder, Query};
use sea_query_binder::SqlxBinder;
use sqlx::{FromRow, PgPool};

#[derive(Iden)]
pub(crate) enum DatabaseContact {
    #[iden = "contacts"]
    Table,
    Id,
    SpeakerId,
    Kind,
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ContactKind {
    Email,
    Phone,
    Fax,
}

impl ContactKind {
    pub(crate) fn code(self) -> &'static str {
        match self {
            Self::Email => "E",
            Self::Phone => "P",
            Self::Fax => "F",
        }
    }

    pub(crate) fn from_code(code: &str) -> Option<Self> {
        match code {
            "E" => Some(Self::Email),
            "P" => Some(Self::Phone),
            "F" => Some(Self::Fax),
            _ => None,
        }
    }
}

#[derive(Debug, FromRow)]
struct DatabaseContactRow {
    id: i32,
    speaker_id: i32,
    kind: String,
    value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: i32,
    pub speaker_id: i32,
    pub kind: ContactKind,
    pub value: String,
}

impl TryFrom<DatabaseContactRow> for Contact {
    type Error = Error;

    fn try_from(row: DatabaseContactRow) -> Result<Self> {
        let kind = ContactKind::from_code(&row.kind).ok_or_else(|| anyhow::anyhow!("unknown contact kind {:?}", row.kind))?;

        Ok(Self {
            id: row.id,
            speaker_id: row.speaker_id,
            kind,
            value: row.value,
        })
    }
}

const COLUMNS: [DatabaseContact; 4] = [
    DatabaseContact::Id,
    DatabaseContact::SpeakerId,
    DatabaseContact::Kind,
    DatabaseContact::Value,
];

pub async fn create(database: &PgPool, speaker_id: i32, kind: ContactKind, value: &str) -> Result<Contact> {
    let (sql, values) = Query::insert()
        .into_table(DatabaseContact::Table)
        .columns([DatabaseContact::SpeakerId, DatabaseContact::Kind, DatabaseContact::Value])
        .values_panic([speaker_id.into(), kind.code().into(), value.into()])
        .returning(Query::returning().columns(COLUMNS))
        .build_sqlx(PostgresQueryBuilder);

    sqlx::query_as_with::<_, DatabaseContactRow, _>(&sql, values)
        .fetch_one(&mut *database.acquire().await?)
        .map_err(Error::msg)
        .await
        .and_then(Contact::try_from)
}

pub async fn fetch_by_speaker(database: &PgPool, speaker_id: i32) -> Result<Vec<Contact>> {
    let (sql, values) = Query::select()
        .columns(COLUMNS)
        .from(DatabaseContact::Table)
        .and_where(Expr::col(DatabaseContact::SpeakerId).eq(speaker_id))
        .order_by(DatabaseContact::Id, Order::Asc)
        .build_sqlx(PostgresQueryBuilder);

    sqlx::query_as_with::<_, DatabaseContactRow, _>(&sql, values)
        .fetch(&mut *database.acquire().await?)
        .map_err(Error::msg)
        .and_then(|row| futures::future::ready(Contact::try_from(row)))
        .try_collect()
        .await
}
