use std::ops::Deref;

mod reconcile;
mod register;
mod withdraw;

pub use register::RegisterInput;

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
