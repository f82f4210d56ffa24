use futures::future::BoxFuture;
use sea_query::{ColumnDef, ForeignKey, ForeignKeyAction, Index, PostgresQueryBuilder, Table};
use sqlx::{PgConnection, Postgres};
use sqlx_migrator::{operation::Operation, vec_box};

use crate::{media::DatabaseMedia, talk::DatabaseTalk};

pub(crate) struct CreateTableOperation;
pub(crate) struct CreateIndexOperation;

pub(crate) struct V2Migration;

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
                .table(DatabaseTalk::Table)
                .col(ColumnDef::new(DatabaseTalk::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(DatabaseTalk::Title).text().not_null())
                .col(ColumnDef::new(DatabaseTalk::Description).text().not_null().default(""))
                .col(ColumnDef::new(DatabaseTalk::StartTime).time().not_null())
                .build(PostgresQueryBuilder);

            sqlx::query(&sql).execute(&mut *connection).await?;

            let sql = Table::create()
                .if_not_exists()
                .table(DatabaseMedia::Table)
                .col(ColumnDef::new(DatabaseMedia::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(DatabaseMedia::TalkId).integer().not_null())
                .col(ColumnDef::new(DatabaseMedia::Kind).char_len(2).not_null())
                .col(ColumnDef::new(DatabaseMedia::MediaId).text().not_null())
                .col(ColumnDef::new(DatabaseMedia::Title).text().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .from(DatabaseMedia::Table, DatabaseMedia::TalkId)
                        .to(DatabaseTalk::Table, DatabaseTalk::Id)
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
                .table(DatabaseMedia::Table)
                .table(DatabaseTalk::Table)
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
                .name("talks_start_time_idx")
                .table(DatabaseTalk::Table)
                .col(DatabaseTalk::StartTime)
                .build(PostgresQueryBuilder);

            sqlx::query(&sql).execute(&mut *connection).await?;

            let sql = Index::create()
                .if_not_exists()
                .name("media_talk_id_idx")
                .table(DatabaseMedia::Table)
                .col(DatabaseMedia::TalkId)
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
                .name("talks_start_time_idx")
                .build(PostgresQueryBuilder);

            sqlx::query(&sql).execute(&mut *connection).await?;

            let sql = Index::drop()
                .name("media_talk_id_idx")
                .build(PostgresQueryBuilder);

            sqlx::query(&sql).execute(&mut *connection).await?;

            Ok(())
        })
    }
}

sqlx_migrator::migration!(
    sqlx::Postgres,
    V2Migration,
    "eventex",
    "create talks and media",
    vec_box![],
    vec_box![
        CreateTableOperation,
        CreateIndexOperation,
    ]
);
