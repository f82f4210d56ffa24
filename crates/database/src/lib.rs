pub use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};

pub use crate::error::CreateError;

pub mod contact;
pub mod error;
pub mod media;
pub mod migrations;
pub mod period;
pub mod speaker;
pub mod subscription;
pub mod talk;
