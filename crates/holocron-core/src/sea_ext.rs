use sea_orm::{DbErr, SqlErr, TransactionError};

/// Classify storage errors raised by integrity constraints.
///
/// Constraint violations are an expected outcome for writes guarded by unique
/// indexes or foreign keys; callers translate them into domain errors instead of
/// surfacing them as internal faults.
pub trait ConstraintViolation {
    fn is_unique_violation(&self) -> bool;
    fn is_foreign_key_violation(&self) -> bool;
}

impl ConstraintViolation for DbErr {
    fn is_unique_violation(&self) -> bool {
        matches!(self.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
    }

    fn is_foreign_key_violation(&self) -> bool {
        matches!(self.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
    }
}

/// Collapse a transaction error into the underlying `DbErr`, whether it came from
/// acquiring the connection or from inside the transaction body.
pub fn flatten_transaction_error(err: TransactionError<DbErr>) -> DbErr {
    match err {
        TransactionError::Connection(e) | TransactionError::Transaction(e) => e,
    }
}
