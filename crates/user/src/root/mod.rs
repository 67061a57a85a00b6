use std::ops::Deref;

mod create_profile;
mod ensure_profile;
mod set_role;

pub use create_profile::CreateProfileInput;

use crate::Query;

#[derive(Clone)]
pub struct Command {
    state: campusconnect_shared::State,
}

impl Deref for Command {
    type Target = campusconnect_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Command {
    pub fn new(state: campusconnect_shared::State) -> Self {
        Self { state }
    }

    fn query(&self) -> Query {
        Query(self.read_db.clone())
    }
}
