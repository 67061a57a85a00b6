use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Labels an event can be filed under.
///
/// Only inputs are checked against this set; stored rows keep the raw text.
#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
pub enum Category {
    #[default]
    Technology,
    Cultural,
    Business,
    Environment,
    Sports,
    Academic,
}
