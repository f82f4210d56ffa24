use futures::future::BoxFuture;
use sea_query::{ColumnDef, Expr, PostgresQueryBuilder, Table};
use sqlx::{PgConnection, Postgres};
use sqlx_migrator::{operation::Operation, vec_box};

use crate::subscription::DatabaseSubscription;

pub(crate) struct CreateTableOperation;

pub(crate) struct V3Migration;

impl Operation<Postgres> for CreateTableOperation {
    fn up<'a, 'b, 'async_trait>(&'a self, connection: &'b mut PgConnection) -> BoxFuture<'async_trait, Result<(), sqlx_migrator::error::Error>>
    where
        Self: 'async_trait,
        'a: 'async_trait,
        'b: 'async_trait,
    {
        Box::pin(async {
            // national_id is unique, email deliberately is not.
            let sql = Table::create()
                .if_not_exists()
                .table(DatabaseSubscription::Table)
                .col(ColumnDef::new(DatabaseSubscription::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(DatabaseSubscription::Name).text().not_null())
                .col(ColumnDef::new(DatabaseSubscription::NationalId).text().not_null().unique_key())
                .col(ColumnDef::new(DatabaseSubscription::Email).text())
                .col(ColumnDef::new(DatabaseSubscription::Phone).text())
                .col(
                    ColumnDef::new(DatabaseSubscription::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp()),
                )
                .col(ColumnDef::new(DatabaseSubscription::Paid).boolean().not_null().default(false))
                .build(PostgresQueryBuilder);

            sqlx::query(&sql).execute(&mut *connection).await?;

            Ok(())
        })
    }

    fn down<'a, 'b, 'async_trait>(&'a self, connection: &'b mut PgConnection) -> BoxFuture<'async_trait, Result<(), sqlx_migrator::error::Error>>
    where
        Self: 'async_trait,
        'a: 'async_trait,
        'b: 'async_trait,
    {
        Box::pin(async {
            let sql = Table::drop()
                .table(DatabaseSubscription::Table)
                .build(PostgresQueryBuilder);

            sqlx::query(&sql).execute(&mut *connection).await?;

            Ok(())
        })
    }
}

sqlx_migrator::migration!(
    sqlx::Postgres,
    V3Migration,
    "eventex",
    "create subscriptions",
    vec_box![],
    vec_box![
        CreateTableOperation,
    ]
);
