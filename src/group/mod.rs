//! Parameter groups and their nested value mappings.

mod parameter_group;
mod values;

pub use parameter_group::{GroupCallback, GroupMode, Member, ParameterGroup};
pub use values::{ValueEntry, Values};
