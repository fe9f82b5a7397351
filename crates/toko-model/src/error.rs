use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("mandatory source table not supplied: {table}")]
    MissingTable { table: &'static str },
}

pub type Result<T> = std::result::Result<T, MigrateError>;
