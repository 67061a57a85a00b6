#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("{0} not found")]
    NotFound(String),

    #[error("authentication required")]
    Unauthenticated,

    #[error("forbidden")]
    Forbidden,

    #[error("already registered for this event")]
    DuplicateRegistration,

    #[error("backend unavailable: {0}")]
    BackendUnavailable(#[from] sqlx::Error),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn not_found(what: impl std::fmt::Display, id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("{what} '{id}'"))
    }
}

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Server(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Server(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Server(format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! not_found {
    ($what:expr, $id:expr $(,)?) => {
        return Err($crate::Error::not_found($what, $id))
    };
}
