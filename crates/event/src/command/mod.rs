use std::ops::Deref;

mod create;
mod delete;
mod update;

pub use create::CreateEventInput;
pub use update::UpdateEventInput;

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
}
