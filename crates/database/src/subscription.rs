use anyhow::{Error, Result};
use futures::TryStreamExt;
use sea_query::{Expr, Iden, Order, PostgresQueryBuilder, Query};
use sea_query_binder::SqlxBinder;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use crate::error::CreateError;

#[derive(Iden)]
pub(crate) enum DatabaseSubscription {
    #[iden = "subscriptions"]
    Table,
    Id,
    Name,
    NationalId,
    Email,
    Phone,
    CreatedAt,
    Paid,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Subscription {
    pub id: i32,
    pub name: String,
    pub national_id: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: OffsetDateTime,
    pub paid: bool,
}

const COLUMNS: [DatabaseSubscription; 7] = [
    DatabaseSubscription::Id,
    DatabaseSubscription::Name,
    DatabaseSubscription::NationalId,
    DatabaseSubscription::Email,
    DatabaseSubscription::Phone,
    DatabaseSubscription::CreatedAt,
    DatabaseSubscription::Paid,
];

/// `created_at` and `paid` are filled in by the column defaults.
pub async fn create(
    database: &PgPool,
    name: &str,
    national_id: &str,
    email: Option<&str>,
    phone: Option<&str>,
) -> Result<Subscription, CreateError> {
    let (sql, values) = Query::insert()
        .into_table(DatabaseSubscription::Table)
        .columns([
            DatabaseSubscription::Name,
            DatabaseSubscription::NationalId,
            DatabaseSubscription::Email,
            DatabaseSubscription::Phone,
        ])
        .values_panic([
            name.into(),
            national_id.into(),
            email.map(str::to_string).into(),
            phone.map(str::to_string).into(),
        ])
        .returning(Query::returning().columns(COLUMNS))
        .build_sqlx(PostgresQueryBuilder);

    sqlx::query_as_with::<_, Subscription, _>(&sql, values)
        .fetch_one(&mut *database.acquire().await?)
        .await
        .map_err(CreateError::from_unique("national_id"))
}

pub async fn fetch_by_id(database: &PgPool, id: i32) -> Result<Option<Subscription>> {
    let (sql, values) = Query::select()
        .columns(COLUMNS)
        .from(DatabaseSubscription::Table)
        .and_where(Expr::col(DatabaseSubscription::Id).eq(id))
        .build_sqlx(PostgresQueryBuilder);

    sqlx::query_as_with::<_, Subscription, _>(&sql, values)
        .fetch_optional(&mut *database.acquire().await?)
        .await
        .map_err(Error::msg)
}

pub async fn fetch_all(database: &PgPool) -> Result<Vec<Subscription>> {
    let (sql, values) = Query::select()
        .columns(COLUMNS)
        .from(DatabaseSubscription::Table)
        .order_by(DatabaseSubscription::CreatedAt, Order::Asc)
        .order_by(DatabaseSubscription::Id, Order::Asc)
        .build_sqlx(PostgresQueryBuilder);

    sqlx::query_as_with::<_, Subscription, _>(&sql, values)
        .fetch(&mut *database.acquire().await?)
        .try_collect()
        .await
        .map_err(Error::msg)
}

/// Flags the given subscriptions as paid. Already paid ones are left untouched, so the
/// returned count only includes subscriptions that changed.
pub async fn mark_as_paid(database: &PgPool, ids: &[i32]) -> Result<u64> {
    if ids.is_empty() {
        return Ok(0);
    }

    let (sql, values) = Query::update()
        .table(DatabaseSubscription::Table)
        .value(DatabaseSubscription::Paid, true)
        .and_where(Expr::col(DatabaseSubscription::Id).is_in(ids.iter().cloned()))
        .and_where(Expr::col(DatabaseSubscription::Paid).eq(false))
        .build_sqlx(PostgresQueryBuilder);

    let result = sqlx::query_with(&sql, values)
        .execute(&mut *database.acquire().await?)
        .await?;

    tracing::info!("marked {} subscription(s) as paid", result.rows_affected());

    Ok(result.rows_affected())
}
