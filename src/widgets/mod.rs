//! Widgets module
//!
//! Thin egui glue drawing parameters and groups with egui's built-in
//! controls. Drawing never mutates the model: user input comes back as
//! [`PendingEdit`]s for the caller to apply through the root group.

pub mod group_panel;
pub mod parameter_row;

pub use group_panel::{group_panel, members_panel, PendingEdit};
pub use parameter_row::{parameter_row, Edit, LABEL_WIDTH};
