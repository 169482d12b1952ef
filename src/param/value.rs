//! Runtime values held by parameters.

use std::fmt;

/// The current value of a parameter.
///
/// Enum and string parameters both hold `Text`; action parameters hold
/// `None`, since a button press carries no persistent state.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    /// Continuous numeric value.
    Float(f64),
    /// On/off state.
    Bool(bool),
    /// Free text or the selected enum option.
    Text(String),
    /// No value (action parameters).
    None,
}

impl ParamValue {
    /// Returns the value as f64, if numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as bool, if boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as a string slice, if textual.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Returns true for the "no value" sentinel.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Short type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Text(_) => "text",
            Self::None => "none",
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(v) => write!(f, "{}", v),
            Self::Bool(v) => write!(f, "{}", v),
            Self::Text(v) => write!(f, "{}", v),
            Self::None => write!(f, "none"),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(ParamValue::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(ParamValue::Bool(true).as_f64(), None);
        assert_eq!(ParamValue::Bool(true).as_bool(), Some(true));
        assert_eq!(ParamValue::from("low").as_str(), Some("low"));
        assert!(ParamValue::None.is_none());
        assert!(!ParamValue::Float(0.0).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(ParamValue::Float(0.5).to_string(), "0.5");
        assert_eq!(ParamValue::Bool(false).to_string(), "false");
        assert_eq!(ParamValue::from("band").to_string(), "band");
        assert_eq!(ParamValue::None.to_string(), "none");
    }
}
