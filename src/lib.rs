//! Live Tuner Library
//!
//! Typed parameters, linked and independent parameter groups, and JSON
//! configuration files for building live tuning panels over a host
//! application's runtime values. The egui layer in [`widgets`] and [`app`]
//! draws the model; everything else is headless.

pub mod app;
pub mod error;
pub mod group;
pub mod param;
pub mod persistence;
pub mod widgets;

pub use error::{Result, TunerError};
pub use group::{GroupMode, Member, ParameterGroup, ValueEntry, Values};
pub use param::{ParamConfig, ParamKind, ParamValue, Parameter};
