use thiserror::Error;
use uuid::Uuid;

use crate::auth::{AdminRole, Permission};
use crate::client::ClientError;
use crate::dispute::ResolutionError;

/// Crate-level error taxonomy.
///
/// Authorization denial is not an error channel inside the permission
/// engine itself (`has_permission` is a plain boolean); `PermissionDenied`
/// exists so callers like the CLI can refuse an action before any request
/// traffic is produced.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Validation(#[from] ResolutionError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("role {role} is not permitted to {permission}")]
    PermissionDenied {
        role: AdminRole,
        permission: Permission,
    },

    #[error("not signed in")]
    NotAuthenticated,

    #[error("transaction {0} not found among disputed transactions")]
    DisputeNotFound(Uuid),
}
