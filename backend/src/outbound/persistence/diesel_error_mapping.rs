//! Translation of pool and Diesel failures into [`RepositoryError`].
//!
//! Reads never produce `Rejected`: only a write can violate a constraint, and
//! the database's own message is kept verbatim so clients see it in the 400
//! body.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::RepositoryError;

use super::pool::PoolError;

pub(super) fn map_pool_error(error: PoolError) -> RepositoryError {
    debug!(%error, "connection checkout failed");
    RepositoryError::connection(error.message())
}

fn log_diesel_error(error: &DieselError, operation: &'static str) {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, operation, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            operation,
            error_type = %std::any::type_name_of_val(error),
            "diesel operation failed"
        ),
    }
}

/// Map a failure from a query that only reads or deletes rows.
pub(super) fn map_read_error(error: DieselError, operation: &'static str) -> RepositoryError {
    log_diesel_error(&error, operation);
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RepositoryError::connection("database connection error")
        }
        other => RepositoryError::query(other.to_string()),
    }
}

/// Map a failure from an insert or update.
pub(super) fn map_write_error(error: DieselError, operation: &'static str) -> RepositoryError {
    log_diesel_error(&error, operation);
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(_, info) => RepositoryError::rejected(info.message()),
        other => RepositoryError::query(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn database_error(kind: DatabaseErrorKind, message: &str) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(message.to_owned()))
    }

    #[rstest]
    fn unique_violation_on_write_is_rejected_verbatim() {
        let message = "duplicate key value violates unique constraint \"users_email_key\"";
        let error = map_write_error(
            database_error(DatabaseErrorKind::UniqueViolation, message),
            "insert",
        );
        assert_eq!(error, RepositoryError::rejected(message));
    }

    #[rstest]
    #[case(map_write_error(database_error(DatabaseErrorKind::ClosedConnection, "gone"), "update"))]
    #[case(map_read_error(database_error(DatabaseErrorKind::ClosedConnection, "gone"), "list"))]
    #[case(map_pool_error(PoolError::checkout("timed out")))]
    fn lost_connections_map_to_connection(#[case] error: RepositoryError) {
        assert!(matches!(error, RepositoryError::Connection { .. }));
    }

    #[rstest]
    #[case(database_error(DatabaseErrorKind::UniqueViolation, "duplicate"))]
    #[case(DieselError::NotFound)]
    fn reads_never_report_rejection(#[case] error: DieselError) {
        let mapped = map_read_error(error, "find_by_id");
        assert!(matches!(mapped, RepositoryError::Query { .. }));
    }
}
