mod command;
mod query;

pub use command::*;
pub use query::*;

pub use campusconnect_shared::event::Category;
