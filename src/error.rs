//! Error types shared by parameters and parameter groups.

use thiserror::Error;

/// Errors raised while configuring or mutating the parameter model.
///
/// Out-of-range numbers are never an error: float parameters clamp them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TunerError {
    /// A key or path segment does not name any member of the group.
    #[error("parameter '{name}' not found in group '{group}'")]
    UnknownParameter { group: String, name: String },

    /// The value has the wrong type or is outside an enum's options.
    #[error("invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },

    /// The parameter configuration itself is unusable (e.g. `min >= max`).
    #[error("invalid configuration for '{name}': {reason}")]
    InvalidConfig { name: String, reason: String },

    /// A group already has a member with this name.
    #[error("group '{group}' already has a member named '{name}'")]
    DuplicateName { group: String, name: String },

    /// Several keys of a `set_values` call failed. The other keys were applied.
    #[error("{} values could not be applied", .0.len())]
    Batch(Vec<TunerError>),
}

impl TunerError {
    pub(crate) fn invalid_value(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_config(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Flattens this error into `errors`, unpacking nested batches.
    pub(crate) fn flatten_into(self, errors: &mut Vec<TunerError>) {
        match self {
            Self::Batch(inner) => errors.extend(inner),
            other => errors.push(other),
        }
    }

    /// Collapses collected errors: none is `Ok`, one is returned as-is.
    pub(crate) fn from_collected(mut errors: Vec<TunerError>) -> Result<()> {
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(Self::Batch(errors)),
        }
    }
}

/// Result alias used throughout the model.
pub type Result<T, E = TunerError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TunerError::UnknownParameter {
            group: "Filter".into(),
            name: "Cutoff".into(),
        };
        assert_eq!(err.to_string(), "parameter 'Cutoff' not found in group 'Filter'");

        let batch = TunerError::Batch(vec![err.clone(), err]);
        assert_eq!(batch.to_string(), "2 values could not be applied");
    }

    #[test]
    fn test_collected_errors() {
        assert!(TunerError::from_collected(Vec::new()).is_ok());

        let single = TunerError::invalid_value("Mode", "not an option");
        assert_eq!(
            TunerError::from_collected(vec![single.clone()]),
            Err(single.clone())
        );

        let mut errors = Vec::new();
        TunerError::Batch(vec![single.clone(), single.clone()]).flatten_into(&mut errors);
        single.flatten_into(&mut errors);
        assert_eq!(errors.len(), 3);
        assert!(matches!(
            TunerError::from_collected(errors),
            Err(TunerError::Batch(inner)) if inner.len() == 3
        ));
    }
}
