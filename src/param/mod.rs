//! Parameters: named, typed values exposed for live adjustment.

mod config;
mod parameter;
mod value;

pub use config::{
    ActionConfig, BoolConfig, EnumConfig, FloatConfig, ParamConfig, ParamKind, StringConfig,
    FLOAT_TOLERANCE,
};
pub use parameter::{Parameter, ValueCallback};
pub use value::ParamValue;
