#[derive(Debug, thiserror::Error)]
pub enum CreateError {
    #[error("{field} is already taken")]
    Conflict { field: &'static str },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl CreateError {
    pub(crate) fn from_unique(field: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |error| match &error {
            sqlx::Error::Database(database_error) if database_error.is_unique_violation() => Self::Conflict { field },
            _ => Self::Database(error),
        }
    }
}
