//! A named, typed value with change notification.

use std::fmt;

use tracing::{debug, info, warn};

use super::config::{validate_range, FLOAT_TOLERANCE};
use super::{
    ActionConfig, BoolConfig, EnumConfig, FloatConfig, ParamConfig, ParamKind, ParamValue,
    StringConfig,
};
use crate::error::{Result, TunerError};

/// Observer invoked with `(name, value)` after a parameter changes.
pub type ValueCallback = Box<dyn FnMut(&str, &ParamValue)>;

/// A single tunable value.
///
/// The stored value always satisfies the parameter's configuration: floats
/// are clamped into `[min, max]` and enum values outside the option list are
/// rejected. Observers run synchronously, in registration order, whenever a
/// `set_value` call actually changes the value.
pub struct Parameter {
    name: String,
    config: ParamConfig,
    value: ParamValue,
    observers: Vec<ValueCallback>,
}

impl Parameter {
    /// Creates a parameter, validating its configuration.
    pub fn new(name: impl Into<String>, config: impl Into<ParamConfig>) -> Result<Self> {
        let name = name.into();
        let config = config.into();
        let value = config.initial_value(&name)?;
        Ok(Self {
            name,
            config,
            value,
            observers: Vec::new(),
        })
    }

    /// Creates a float parameter (slider).
    pub fn float(name: impl Into<String>, min: f64, max: f64, step: f64, initial: f64) -> Result<Self> {
        Self::new(name, FloatConfig::new(min, max, step, initial))
    }

    /// Creates a bool parameter (checkbox).
    pub fn boolean(name: impl Into<String>, initial: bool) -> Result<Self> {
        Self::new(name, BoolConfig { initial })
    }

    /// Creates a string parameter (text field).
    pub fn text(name: impl Into<String>, initial: impl Into<String>) -> Result<Self> {
        Self::new(
            name,
            StringConfig {
                initial: initial.into(),
            },
        )
    }

    /// Creates an enum parameter (dropdown) selecting the first option.
    pub fn choice<I, S>(name: impl Into<String>, options: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name, EnumConfig::new(options))
    }

    /// Creates an action parameter (button).
    pub fn action(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: ParamConfig::Action(ActionConfig::default()),
            value: ParamValue::None,
            observers: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ParamKind {
        self.config.kind()
    }

    pub fn config(&self) -> &ParamConfig {
        &self.config
    }

    /// Returns the current value; `ParamValue::None` for actions.
    pub fn value(&self) -> &ParamValue {
        &self.value
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Coerces and stores `value`, notifying observers if it changed.
    ///
    /// Returns whether the stored value changed. Actions ignore the call.
    ///
    /// Floats within [`FLOAT_TOLERANCE`] of the current value count as
    /// unchanged and are not stored, so `value()` may differ from the clamped
    /// input by less than that tolerance.
    pub fn set_value(&mut self, value: impl Into<ParamValue>) -> Result<bool> {
        if self.kind() == ParamKind::Action {
            return Ok(false);
        }

        let coerced = match self.config.coerce(&self.name, value.into()) {
            Ok(v) => v,
            Err(e) => {
                warn!("[{}] Rejected value: {}", self.name, e);
                return Err(e);
            }
        };

        if same_value(&self.value, &coerced) {
            return Ok(false);
        }

        debug!("[{}] Value set → {}", self.name, coerced);
        self.value = coerced;
        self.notify();
        Ok(true)
    }

    /// Appends an observer called with `(name, value)` on every change.
    pub fn register_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&str, &ParamValue) + 'static,
    {
        self.observers.push(Box::new(callback));
        debug!("[{}] Callback registered ({} total)", self.name, self.observers.len());
    }

    /// Fires an action parameter, notifying observers with `(name, None)`.
    pub fn trigger(&mut self) -> Result<()> {
        if self.kind() != ParamKind::Action {
            return Err(TunerError::invalid_value(
                &self.name,
                "only action parameters can be triggered",
            ));
        }
        debug!("[{}] Triggered", self.name);
        self.notify();
        Ok(())
    }

    /// Reconfigures the bounds of a float parameter.
    ///
    /// The current value is re-clamped silently; observers are not notified.
    pub fn set_range(&mut self, min: f64, max: f64, step: f64) -> Result<()> {
        let ParamConfig::Float(cfg) = &mut self.config else {
            return Err(TunerError::invalid_config(&self.name, "not a float parameter"));
        };
        validate_range(&self.name, min, max, step)?;

        if min != cfg.min {
            info!("[{}] Min changed: {} → {}", self.name, cfg.min, min);
        }
        if max != cfg.max {
            info!("[{}] Max changed: {} → {}", self.name, cfg.max, max);
        }
        if step != cfg.step {
            info!("[{}] Step changed: {} → {}", self.name, cfg.step, step);
        }
        cfg.min = min;
        cfg.max = max;
        cfg.step = step;

        if let ParamValue::Float(v) = self.value {
            self.value = ParamValue::Float(cfg.clamp(v));
        }
        Ok(())
    }

    /// Replaces the options of an enum parameter.
    ///
    /// The new selection is `initial` if it is an option, else the current
    /// value if still valid, else the first option. Observers are notified
    /// only if the selection changed.
    pub fn set_options<I, S>(&mut self, options: I, initial: Option<&str>) -> Result<bool>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ParamConfig::Enum(cfg) = &mut self.config else {
            return Err(TunerError::invalid_config(&self.name, "not an enum parameter"));
        };
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        let Some(first) = options.first().cloned() else {
            return Err(TunerError::invalid_config(&self.name, "enum needs at least one option"));
        };

        let current = self.value.as_str().unwrap_or_default();
        let selected = match initial {
            Some(initial) if options.iter().any(|o| o == initial) => initial.to_owned(),
            _ if options.iter().any(|o| o == current) => current.to_owned(),
            _ => first,
        };

        info!("[{}] Options updated: {:?}", self.name, options);
        cfg.options = options;
        cfg.initial = Some(selected.clone());

        let selected = ParamValue::Text(selected);
        if self.value == selected {
            return Ok(false);
        }
        self.value = selected;
        self.notify();
        Ok(true)
    }

    fn notify(&mut self) {
        for callback in self.observers.iter_mut() {
            callback(&self.name, &self.value);
        }
    }
}

fn same_value(a: &ParamValue, b: &ParamValue) -> bool {
    match (a, b) {
        (ParamValue::Float(a), ParamValue::Float(b)) => (a - b).abs() < FLOAT_TOLERANCE,
        _ => a == b,
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter")
            .field("name", &self.name)
            .field("config", &self.config)
            .field("value", &self.value)
            .field("observers", &self.observers.len())
            .finish()
    }
}
