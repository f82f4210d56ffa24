use anyhow::{Error, Result};
use futures::TryStreamExt;
use sea_query::{Expr, Iden, Order, PostgresQueryBuilder, Query};
use sea_query_binder::SqlxBinder;
use sqlx::{FromRow, PgPool};
use time::Time;

use crate::period::StartTime;

#[derive(Iden)]
pub(crate) enum DatabaseTalk {
    #[iden = "talks"]
    Table,
    Id,
    Title,
    Description,
    StartTime,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Talk {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub start_time: Time,
}

impl StartTime for Talk {
    fn start_time(&self) -> Time {
        self.start_time
    }
}

const COLUMNS: [DatabaseTalk; 4] = [
    DatabaseTalk::Id,
    DatabaseTalk::Title,
    DatabaseTalk::Description,
    DatabaseTalk::StartTime,
];

pub async fn create(database: &PgPool, title: &str, description: &str, start_time: Time) -> Result<Talk> {
    let (sql, values) = Query::insert()
        .into_table(DatabaseTalk::Table)
        .columns([DatabaseTalk::Title, DatabaseTalk::Description, DatabaseTalk::StartTime])
        .values_panic([title.into(), description.into(), start_time.into()])
        .returning(Query::returning().columns(COLUMNS))
        .build_sqlx(PostgresQueryBuilder);

    sqlx::query_as_with::<_, Talk, _>(&sql, values)
        .fetch_one(&mut *database.acquire().await?)
        .await
        .map_err(Error::msg)
}

/// Talks ordered by start time, ready for [`crate::period::at_morning`] and [`crate::period::at_afternoon`].
pub async fn fetch_all(database: &PgPool) -> Result<Vec<Talk>> {
    let (sql, values) = Query::select()
        .columns(COLUMNS)
        .from(DatabaseTalk::Table)
        .order_by(DatabaseTalk::StartTime, Order::Asc)
        .order_by(DatabaseTalk::Id, Order::Asc)
        .build_sqlx(PostgresQueryBuilder);

    sqlx::query_as_with::<_, Talk, _>(&sql, values)
        .fetch(&mut *database.acquire().await?)
        .try_collect()
        .await
        .map_err(Error::msg)
}

pub async fn fetch_by_id(database: &PgPool, id: i32) -> Result<Option<Talk>> {
    let (sql, values) = Query::select()
        .columns(COLUMNS)
        .from(DatabaseTalk::Table)
        .and_where(Expr::col(DatabaseTalk::Id).eq(id))
        .build_sqlx(PostgresQueryBuilder);

    sqlx::query_as_with::<_, Talk, _>(&sql, values)
        .fetch_optional(&mut *database.acquire().await?)
        .await
        .map_err(Error::msg)
}
