//! Application module
//!
//! Contains the eframe application, the demo panel and theme definitions.

pub mod demo;
pub mod theme;
pub mod tuner_app;

pub use demo::demo_panel;
pub use tuner_app::TunerApp;
