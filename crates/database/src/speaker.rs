use anyhow::{Error, Result};
use futures::TryStreamExt;
use sea_query::{Expr, Iden, Order, PostgresQueryBuilder, Query};
use sea_query_binder::SqlxBinder;
use sqlx::{FromRow, PgPool};

use crate::error::CreateError;

#[derive(Iden)]
pub(crate) enum DatabaseSpeaker {
    #[iden = "speakers"]
    Table,
    Id,
    Name,
    Slug,
    Url,
    Description,
    Avatar,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Speaker {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub url: String,
    pub description: String,
    pub avatar: Option<String>,
}

const COLUMNS: [DatabaseSpeaker; 6] = [
    DatabaseSpeaker::Id,
    DatabaseSpeaker::Name,
    DatabaseSpeaker::Slug,
    DatabaseSpeaker::Url,
    DatabaseSpeaker::Description,
    DatabaseSpeaker::Avatar,
];

pub async fn create(
    database: &PgPool,
    name: &str,
    slug: &str,
    url: &str,
    description: &str,
    avatar: Option<&str>,
) -> Result<Speaker, CreateError> {
    let (sql, values) = Query::insert()
        .into_table(DatabaseSpeaker::Table)
        .columns([
            DatabaseSpeaker::Name,
            DatabaseSpeaker::Slug,
            DatabaseSpeaker::Url,
            DatabaseSpeaker::Description,
            DatabaseSpeaker::Avatar,
        ])
        .values_panic([
            name.into(),
            slug.into(),
            url.into(),
            description.into(),
            avatar.map(str::to_string).into(),
        ])
        .returning(Query::returning().columns(COLUMNS))
        .build_sqlx(PostgresQueryBuilder);

    sqlx::query_as_with::<_, Speaker, _>(&sql, values)
        .fetch_one(&mut *database.acquire().await?)
        .await
        .map_err(CreateError::from_unique("slug"))
}

pub async fn fetch_all(database: &PgPool) -> Result<Vec<Speaker>> {
    let (sql, values) = Query::select()
        .columns(COLUMNS)
        .from(DatabaseSpeaker::Table)
        .order_by(DatabaseSpeaker::Name, Order::Asc)
        .build_sqlx(PostgresQueryBuilder);

    sqlx::query_as_with::<_, Speaker, _>(&sql, values)
        .fetch(&mut *database.acquire().await?)
        .try_collect()
        .await
        .map_err(Error::msg)
}

pub async fn fetch_by_slug(database: &PgPool, slug: &str) -> Result<Option<Speaker>> {
    let (sql, values) = Query::select()
        .columns(COLUMNS)
        .from(DatabaseSpeaker::Table)
        .and_where(Expr::col(DatabaseSpeaker::Slug).eq(slug))
        .build_sqlx(PostgresQueryBuilder);

    sqlx::query_as_with::<_, Speaker, _>(&sql, values)
        .fetch_optional(&mut *database.acquire().await?)
        .await
        .map_err(Error::msg)
}
