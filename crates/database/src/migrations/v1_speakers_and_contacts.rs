use futures::future::BoxFuture;
use sea_query::{ColumnDef, ForeignKey, ForeignKeyAction, Index, PostgresQueryBuilder, Table};
use sqlx::{PgConnection, Postgres};
use sqlx_migrator::{operation::Operation, vec_box};

use crate::{contact::DatabaseContact, speaker::DatabaseSpeaker};

pub(crate) struct CreateTableOperation;
pub(crate) struct CreateIndexOperation;

pub(crate) struct V1Migration;

impl Operation<Postgres> for CreateTableOperation {
    fn up<'a, 'b, 'async_trait>(&'a self, connection: &'b mut PgConnection) -> BoxFuture<'async_trait, Result<(), sqlx_migrator::error::Error>>
    where
        Self: 'async_trait,
        'a: 'async_trait,
        'b: 'async_trait,
    {
        Box::pin(async {
            let sql = Table::create()
                .if_not_exists()
                .table(DatabaseSpeaker::Table)
                .col(ColumnDef::new(DatabaseSpeaker::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(DatabaseSpeaker::Name).text().not_null())
                .col(ColumnDef::new(DatabaseSpeaker::Slug).text().not_null().unique_key())
                .col(ColumnDef::new(DatabaseSpeaker::Url).text().not_null())
                .col(ColumnDef::new(DatabaseSpeaker::Description).text().not_null().default(""))
                .col(ColumnDef::new(DatabaseSpeaker::Avatar).text())
                .build(PostgresQueryBuilder);

            sqlx::query(&sql).execute(&mut *connection).await?;

            let sql = Table::create()
                .if_not_exists()
                .table(DatabaseContact::Table)
                .col(ColumnDef::new(DatabaseContact::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(DatabaseContact::SpeakerId).integer().not_null())
                .col(ColumnDef::new(DatabaseContact::Kind).char_len(1).not_null())
                .col(ColumnDef::new(DatabaseContact::Value).text().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .from(DatabaseContact::Table, DatabaseContact::SpeakerId)
                        .to(DatabaseSpeaker::Table, DatabaseSpeaker::Id)
                        .on_delete(ForeignKeyAction::Cascade),
                )
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
                .table(DatabaseContact::Table)
                .table(DatabaseSpeaker::Table)
                .build(PostgresQueryBuilder);

            sqlx::query(&sql).execute(&mut *connection).await?;

            Ok(())
        })
    }
}

impl Operation<Postgres> for CreateIndexOperation {
    fn up<'a, 'b, 'async_trait>(&'a self, connection: &'b mut PgConnection) -> BoxFuture<'async_trait, Result<(), sqlx_migrator::error::Error>>
    where
        Self: 'async_trait,
        'a: 'async_trait,
        'b: 'async_trait,
    {
        Box::pin(async {
            let sql = Index::create()
                .if_not_exists()
                .name("contacts_speaker_id_idx")
                .table(DatabaseContact::Table)
                .col(DatabaseContact::SpeakerId)
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
            let sql = Index::drop()
                .name("contacts_speaker_id_idx")
                .build(PostgresQueryBuilder);

            sqlx::query(&sql).execute(&mut *connection).await?;

            Ok(())
        })
    }
}

sqlx_migrator::migration!(
    sqlx::Postgres,
    V1Migration,
    "eventex",
    "create speakers and contacts",
    vec_box![],
    vec_box![
        CreateTableOperation,
        CreateIndexOperation,
    ]
);
