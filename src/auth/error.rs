use thiserror::Error;

/// Expected business outcomes of the auth operations.
///
/// Each variant is a distinct rejection the boundary layer can map to its
/// own status code. Store, hasher or signer failures are transport-level
/// and pass through `Internal` unchanged.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("email already registered")]
    DuplicateUser,

    #[error("user not found")]
    UserNotFound,

    #[error("incorrect password")]
    InvalidPassword,

    #[error("invalid session token")]
    InvalidToken,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
