//! Kind-specific parameter configuration.
//!
//! Each parameter kind carries its own constraints. Configurations are
//! serde-deserializable so host applications can declare panels in JSON:
//!
//! ```json
//! { "kind": "float", "min": 0.0, "max": 10.0, "step": 0.1, "initial": 5.0 }
//! ```

use serde::{Deserialize, Serialize};

use super::ParamValue;
use crate::error::{Result, TunerError};

/// Two float values closer than this are considered equal.
pub const FLOAT_TOLERANCE: f64 = 1e-6;

/// Fieldless discriminant of a parameter kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    Float,
    Bool,
    String,
    Enum,
    Action,
}

/// Bounded continuous value (slider + spinbox).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatConfig {
    pub min: f64,
    pub max: f64,
    /// Drag granularity. Values are not snapped to it.
    pub step: f64,
    pub initial: f64,
}

impl Default for FloatConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            step: 0.01,
            initial: 0.0,
        }
    }
}

impl FloatConfig {
    /// Creates a float configuration with the given bounds and initial value.
    pub fn new(min: f64, max: f64, step: f64, initial: f64) -> Self {
        Self {
            min,
            max,
            step,
            initial,
        }
    }

    /// Clamps a value to `[min, max]`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    fn validate(&self, name: &str) -> Result<()> {
        validate_range(name, self.min, self.max, self.step)
    }
}

/// Checks the bounds used by float parameters and their range editor.
pub(crate) fn validate_range(name: &str, min: f64, max: f64, step: f64) -> Result<()> {
    if !min.is_finite() || !max.is_finite() || !step.is_finite() {
        return Err(TunerError::invalid_config(name, "bounds and step must be finite"));
    }
    if min >= max {
        return Err(TunerError::invalid_config(
            name,
            format!("min ({}) must be below max ({})", min, max),
        ));
    }
    if step <= 0.0 {
        return Err(TunerError::invalid_config(
            name,
            format!("step ({}) must be positive", step),
        ));
    }
    Ok(())
}

/// Checkbox.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoolConfig {
    pub initial: bool,
}

/// Single-line text field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringConfig {
    pub initial: String,
}

/// Dropdown over a fixed list of options.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EnumConfig {
    pub options: Vec<String>,
    /// Selected option; defaults to the first one.
    #[serde(default)]
    pub initial: Option<String>,
}

impl EnumConfig {
    /// Creates an enum configuration selecting the first option.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            initial: None,
        }
    }

    /// Selects `initial` instead of the first option.
    pub fn with_initial(mut self, initial: impl Into<String>) -> Self {
        self.initial = Some(initial.into());
        self
    }

    /// Returns true if `option` is one of the allowed options.
    pub fn contains(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

/// Push button; holds no value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionConfig {}

/// Configuration of a parameter, one variant per kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ParamConfig {
    Float(FloatConfig),
    Bool(BoolConfig),
    String(StringConfig),
    Enum(EnumConfig),
    Action(ActionConfig),
}

impl ParamConfig {
    /// Returns the kind of parameter this configuration describes.
    pub fn kind(&self) -> ParamKind {
        match self {
            Self::Float(_) => ParamKind::Float,
            Self::Bool(_) => ParamKind::Bool,
            Self::String(_) => ParamKind::String,
            Self::Enum(_) => ParamKind::Enum,
            Self::Action(_) => ParamKind::Action,
        }
    }

    /// Validates the configuration and returns the initial value.
    pub(crate) fn initial_value(&self, name: &str) -> Result<ParamValue> {
        match self {
            Self::Float(cfg) => {
                cfg.validate(name)?;
                if !cfg.initial.is_finite() {
                    return Err(TunerError::invalid_config(name, "initial value must be finite"));
                }
                Ok(ParamValue::Float(cfg.clamp(cfg.initial)))
            }
            Self::Bool(cfg) => Ok(ParamValue::Bool(cfg.initial)),
            Self::String(cfg) => Ok(ParamValue::Text(cfg.initial.clone())),
            Self::Enum(cfg) => {
                let first = cfg
                    .options
                    .first()
                    .ok_or_else(|| TunerError::invalid_config(name, "enum needs at least one option"))?;
                match &cfg.initial {
                    Some(initial) if !cfg.contains(initial) => Err(TunerError::invalid_config(
                        name,
                        format!("initial value '{}' is not an option", initial),
                    )),
                    Some(initial) => Ok(ParamValue::Text(initial.clone())),
                    None => Ok(ParamValue::Text(first.clone())),
                }
            }
            Self::Action(_) => Ok(ParamValue::None),
        }
    }

    /// Coerces `value` into a value satisfying this configuration.
    ///
    /// Floats are clamped to their bounds (never snapped to `step`). Action
    /// configurations coerce everything to `None`.
    pub(crate) fn coerce(&self, name: &str, value: ParamValue) -> Result<ParamValue> {
        match (self, value) {
            (Self::Float(cfg), ParamValue::Float(v)) => {
                if v.is_nan() {
                    return Err(TunerError::invalid_value(name, "not a number"));
                }
                Ok(ParamValue::Float(cfg.clamp(v)))
            }
            (Self::Bool(_), v @ ParamValue::Bool(_)) => Ok(v),
            (Self::String(_), v @ ParamValue::Text(_)) => Ok(v),
            (Self::Enum(cfg), ParamValue::Text(v)) => {
                if cfg.contains(&v) {
                    Ok(ParamValue::Text(v))
                } else {
                    Err(TunerError::invalid_value(
                        name,
                        format!("'{}' is not one of {:?}", v, cfg.options),
                    ))
                }
            }
            (Self::Action(_), _) => Ok(ParamValue::None),
            (cfg, other) => Err(TunerError::invalid_value(
                name,
                format!(
                    "expected {} value, found {}",
                    cfg.expected_type(),
                    other.type_name()
                ),
            )),
        }
    }

    fn expected_type(&self) -> &'static str {
        match self {
            Self::Float(_) => "a float",
            Self::Bool(_) => "a bool",
            Self::String(_) | Self::Enum(_) => "a text",
            Self::Action(_) => "no",
        }
    }
}

impl From<FloatConfig> for ParamConfig {
    fn from(cfg: FloatConfig) -> Self {
        Self::Float(cfg)
    }
}

impl From<BoolConfig> for ParamConfig {
    fn from(cfg: BoolConfig) -> Self {
        Self::Bool(cfg)
    }
}

impl From<StringConfig> for ParamConfig {
    fn from(cfg: StringConfig) -> Self {
        Self::String(cfg)
    }
}

impl From<EnumConfig> for ParamConfig {
    fn from(cfg: EnumConfig) -> Self {
        Self::Enum(cfg)
    }
}

impl From<ActionConfig> for ParamConfig {
    fn from(cfg: ActionConfig) -> Self {
        Self::Action(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_defaults() {
        let cfg = FloatConfig::default();
        assert_eq!(cfg.min, 0.0);
        assert_eq!(cfg.max, 1.0);
        assert_eq!(cfg.step, 0.01);
        assert_eq!(
            ParamConfig::from(cfg).initial_value("gain"),
            Ok(ParamValue::Float(0.0))
        );
    }

    #[test]
    fn test_float_initial_is_clamped() {
        let cfg = ParamConfig::from(FloatConfig::new(0.0, 10.0, 0.1, 42.0));
        assert_eq!(cfg.initial_value("x"), Ok(ParamValue::Float(10.0)));
    }

    #[test]
    fn test_invalid_float_configs() {
        for cfg in [
            FloatConfig::new(1.0, 1.0, 0.1, 1.0),
            FloatConfig::new(2.0, 1.0, 0.1, 1.0),
            FloatConfig::new(0.0, 1.0, 0.0, 0.5),
            FloatConfig::new(0.0, f64::INFINITY, 0.1, 0.5),
            FloatConfig::new(0.0, 1.0, 0.1, f64::NAN),
        ] {
            let result = ParamConfig::from(cfg).initial_value("x");
            assert!(matches!(result, Err(TunerError::InvalidConfig { .. })));
        }
    }

    #[test]
    fn test_enum_initial() {
        let cfg = ParamConfig::from(EnumConfig::new(["low", "band", "high"]));
        assert_eq!(cfg.initial_value("mode"), Ok(ParamValue::from("low")));

        let cfg = ParamConfig::from(EnumConfig::new(["low", "band"]).with_initial("band"));
        assert_eq!(cfg.initial_value("mode"), Ok(ParamValue::from("band")));

        let cfg = ParamConfig::from(EnumConfig::new(["low", "band"]).with_initial("notch"));
        assert!(matches!(cfg.initial_value("mode"), Err(TunerError::InvalidConfig { .. })));

        let cfg = ParamConfig::from(EnumConfig::new(Vec::<String>::new()));
        assert!(matches!(cfg.initial_value("mode"), Err(TunerError::InvalidConfig { .. })));
    }

    #[test]
    fn test_coerce_type_mismatch() {
        let cfg = ParamConfig::from(BoolConfig::default());
        let err = cfg.coerce("enabled", ParamValue::Float(1.0)).unwrap_err();
        assert_eq!(
            err,
            TunerError::invalid_value("enabled", "expected a bool value, found float")
        );
    }

    #[test]
    fn test_coerce_does_not_snap_to_step() {
        let cfg = ParamConfig::from(FloatConfig::new(0.0, 10.0, 0.5, 0.0));
        assert_eq!(cfg.coerce("x", ParamValue::Float(3.33)), Ok(ParamValue::Float(3.33)));
    }

    #[test]
    fn test_coerce_action_ignores_value() {
        let cfg = ParamConfig::from(ActionConfig::default());
        assert_eq!(cfg.coerce("reset", ParamValue::from("anything")), Ok(ParamValue::None));
    }

    #[test]
    fn test_config_from_json() {
        let cfg: ParamConfig = serde_json::from_str(
            r#"{ "kind": "float", "min": 0.0, "max": 10.0, "step": 0.1, "initial": 5.0 }"#,
        )
        .unwrap();
        assert_eq!(cfg, ParamConfig::Float(FloatConfig::new(0.0, 10.0, 0.1, 5.0)));

        let cfg: ParamConfig = serde_json::from_str(r#"{ "kind": "bool" }"#).unwrap();
        assert_eq!(cfg.kind(), ParamKind::Bool);

        let cfg: ParamConfig =
            serde_json::from_str(r#"{ "kind": "enum", "options": ["a", "b"] }"#).unwrap();
        assert_eq!(cfg, ParamConfig::Enum(EnumConfig::new(["a", "b"])));

        let cfg: ParamConfig = serde_json::from_str(r#"{ "kind": "action" }"#).unwrap();
        assert_eq!(cfg.kind(), ParamKind::Action);
    }
}
