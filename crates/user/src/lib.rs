mod identity;
mod query;
pub(crate) mod repository;
mod root;

pub use identity::*;
pub use query::*;
pub use root::*;

pub use campusconnect_shared::user::Role;
