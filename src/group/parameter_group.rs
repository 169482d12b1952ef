//! Ordered collections of parameters and nested groups.

use std::fmt;

use tracing::{debug, warn};

use super::{ValueEntry, Values};
use crate::error::{Result, TunerError};
use crate::param::{ParamValue, Parameter};

/// Observer invoked with `(title, snapshot)` when a linked group changes.
pub type GroupCallback = Box<dyn FnMut(&str, &Values)>;

/// How a group reports member changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GroupMode {
    /// Any member change re-emits the whole group's values.
    Linked,
    /// Members notify on their own; the group never emits.
    #[default]
    Independent,
}

/// A member of a group: a parameter or a nested group.
#[derive(Debug)]
pub enum Member {
    Param(Parameter),
    Group(ParameterGroup),
}

impl Member {
    /// The parameter name or nested group title.
    pub fn name(&self) -> &str {
        match self {
            Self::Param(p) => p.name(),
            Self::Group(g) => g.title(),
        }
    }

    fn entry(&self) -> ValueEntry {
        match self {
            Self::Param(p) => ValueEntry::Value(p.value().clone()),
            Self::Group(g) => ValueEntry::Group(g.get_values()),
        }
    }
}

/// A titled, ordered collection of parameters and nested groups.
///
/// The group owns its members outright and hands out only shared references
/// to them, so every value change goes through the group. That is what lets
/// a [`GroupMode::Linked`] group emit its snapshot after each member change.
pub struct ParameterGroup {
    title: String,
    mode: GroupMode,
    members: Vec<Member>,
    observers: Vec<GroupCallback>,
}

impl ParameterGroup {
    /// Creates an empty group.
    pub fn new(title: impl Into<String>, mode: GroupMode) -> Self {
        Self {
            title: title.into(),
            mode,
            members: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Creates an empty linked group.
    pub fn linked(title: impl Into<String>) -> Self {
        Self::new(title, GroupMode::Linked)
    }

    /// Creates an empty independent group.
    pub fn independent(title: impl Into<String>) -> Self {
        Self::new(title, GroupMode::Independent)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn mode(&self) -> GroupMode {
        self.mode
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Appends a parameter. Names must be unique within the group.
    pub fn add_parameter(&mut self, param: Parameter) -> Result<()> {
        self.push(Member::Param(param))
    }

    /// Appends several parameters in order, stopping at the first duplicate.
    pub fn add_parameters<I>(&mut self, params: I) -> Result<()>
    where
        I: IntoIterator<Item = Parameter>,
    {
        params.into_iter().try_for_each(|p| self.add_parameter(p))
    }

    /// Appends a nested group, addressed by its title.
    pub fn add_group(&mut self, group: ParameterGroup) -> Result<()> {
        self.push(Member::Group(group))
    }

    fn push(&mut self, member: Member) -> Result<()> {
        if self.position(member.name()).is_some() {
            return Err(TunerError::DuplicateName {
                group: self.title.clone(),
                name: member.name().to_owned(),
            });
        }
        debug!("[{}] Added member '{}'", self.title, member.name());
        self.members.push(member);
        Ok(())
    }

    /// Appends an observer for this group's aggregate notifications.
    ///
    /// Independent groups accept observers but never call them.
    pub fn register_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&str, &Values) + 'static,
    {
        self.observers.push(Box::new(callback));
        debug!("[{}] Group callback registered", self.title);
    }

    pub fn get(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name() == name)
    }

    /// Returns the direct parameter member called `name`.
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        match self.get(name)? {
            Member::Param(p) => Some(p),
            Member::Group(_) => None,
        }
    }

    /// Returns the direct nested group titled `name`.
    pub fn group(&self, name: &str) -> Option<&ParameterGroup> {
        match self.get(name)? {
            Member::Group(g) => Some(g),
            Member::Param(_) => None,
        }
    }

    /// Follows `path` through nested groups to a parameter.
    pub fn parameter_at<S: AsRef<str>>(&self, path: &[S]) -> Option<&Parameter> {
        let (first, rest) = path.split_first()?;
        match (self.get(first.as_ref())?, rest.is_empty()) {
            (Member::Param(p), true) => Some(p),
            (Member::Group(g), false) => g.parameter_at(rest),
            _ => None,
        }
    }

    fn parameter_at_mut<S: AsRef<str>>(&mut self, path: &[S]) -> Option<&mut Parameter> {
        let (first, rest) = path.split_first()?;
        let index = self.position(first.as_ref())?;
        match (&mut self.members[index], rest.is_empty()) {
            (Member::Param(p), true) => Some(p),
            (Member::Group(g), false) => g.parameter_at_mut(rest),
            _ => None,
        }
    }

    /// Registers a value callback on the parameter at `path`.
    pub fn register_callback_at<S, F>(&mut self, path: &[S], callback: F) -> Result<()>
    where
        S: AsRef<str>,
        F: FnMut(&str, &ParamValue) + 'static,
    {
        match self.parameter_at_mut(path) {
            Some(param) => {
                param.register_callback(callback);
                Ok(())
            }
            None => Err(unknown_path(&self.title, path)),
        }
    }

    /// Returns every member's current value, recursing into nested groups.
    pub fn get_values(&self) -> Values {
        self.members
            .iter()
            .map(|m| (m.name().to_owned(), m.entry()))
            .collect()
    }

    /// Applies a (possibly nested) mapping of values to the members.
    ///
    /// Every resolvable key is applied. Unknown keys and rejected values are
    /// collected: a single failure is returned as-is, several as
    /// [`TunerError::Batch`].
    pub fn set_values(&mut self, values: &Values) -> Result<()> {
        let mut errors = Vec::new();
        self.apply_values(values, &mut errors);
        for error in &errors {
            warn!("[{}] {}", self.title, error);
        }
        TunerError::from_collected(errors)
    }

    /// Returns true if any member changed.
    fn apply_values(&mut self, values: &Values, errors: &mut Vec<TunerError>) -> bool {
        let mut any_changed = false;
        for (name, entry) in values.iter() {
            let Some(index) = self.position(name) else {
                errors.push(TunerError::UnknownParameter {
                    group: self.title.clone(),
                    name: name.to_owned(),
                });
                continue;
            };

            let changed = match (&mut self.members[index], entry) {
                (Member::Param(p), ValueEntry::Value(v)) => {
                    p.set_value(v.clone()).unwrap_or_else(|e| {
                        e.flatten_into(errors);
                        false
                    })
                }
                (Member::Group(g), ValueEntry::Group(nested)) => g.apply_values(nested, errors),
                (Member::Param(p), ValueEntry::Group(_)) => {
                    errors.push(TunerError::invalid_value(
                        p.name(),
                        "expected a value, found a nested mapping",
                    ));
                    false
                }
                (Member::Group(g), ValueEntry::Value(_)) => {
                    errors.push(TunerError::invalid_value(
                        g.title(),
                        "expected a nested mapping for a group",
                    ));
                    false
                }
            };

            if changed {
                self.notify();
                any_changed = true;
            }
        }
        any_changed
    }

    /// Sets a direct parameter member. Returns whether its value changed.
    pub fn set(&mut self, name: &str, value: impl Into<ParamValue>) -> Result<bool> {
        self.set_at(&[name], value)
    }

    /// Sets the parameter at `path`, notifying every linked group on the way.
    pub fn set_at<S: AsRef<str>>(&mut self, path: &[S], value: impl Into<ParamValue>) -> Result<bool> {
        let value = value.into();
        self.update_at(path, move |p| p.set_value(value))
    }

    /// Fires the action parameter at `path`.
    pub fn trigger_at<S: AsRef<str>>(&mut self, path: &[S]) -> Result<()> {
        self.update_at(path, |p| p.trigger().map(|()| true))
            .map(|_| ())
    }

    /// Reconfigures the bounds of the float parameter at `path`.
    ///
    /// The value is re-clamped silently, so no group emits.
    pub fn set_range_at<S: AsRef<str>>(&mut self, path: &[S], min: f64, max: f64, step: f64) -> Result<()> {
        self.update_at(path, |p| p.set_range(min, max, step).map(|()| false))
            .map(|_| ())
    }

    /// Replaces the options of the enum parameter at `path`.
    ///
    /// If the selection moves, every linked group on the path emits once.
    pub fn set_options_at<S, I, O>(&mut self, path: &[S], options: I, initial: Option<&str>) -> Result<bool>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = O>,
        O: Into<String>,
    {
        self.update_at(path, move |p| p.set_options(options, initial))
    }

    fn update_at<S, F>(&mut self, path: &[S], op: F) -> Result<bool>
    where
        S: AsRef<str>,
        F: FnOnce(&mut Parameter) -> Result<bool>,
    {
        let Some((first, rest)) = path.split_first() else {
            return Err(TunerError::invalid_value(&self.title, "empty parameter path"));
        };
        let index = self
            .position(first.as_ref())
            .ok_or_else(|| unknown_path(&self.title, path))?;

        let changed = match (&mut self.members[index], rest.is_empty()) {
            (Member::Param(p), true) => op(p)?,
            (Member::Group(g), false) => g.update_at(rest, op)?,
            (Member::Param(p), false) => {
                return Err(TunerError::UnknownParameter {
                    group: p.name().to_owned(),
                    name: rest[0].as_ref().to_owned(),
                });
            }
            (Member::Group(g), true) => {
                return Err(TunerError::invalid_value(
                    g.title(),
                    "is a group, not a parameter",
                ));
            }
        };

        if changed {
            self.notify();
        }
        Ok(changed)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.members.iter().position(|m| m.name() == name)
    }

    fn notify(&mut self) {
        if self.mode != GroupMode::Linked || self.observers.is_empty() {
            return;
        }
        let snapshot = self.get_values();
        for callback in self.observers.iter_mut() {
            callback(&self.title, &snapshot);
        }
    }
}

fn unknown_path<S: AsRef<str>>(title: &str, path: &[S]) -> TunerError {
    TunerError::UnknownParameter {
        group: title.to_owned(),
        name: path
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("/"),
    }
}

impl fmt::Debug for ParameterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterGroup")
            .field("title", &self.title)
            .field("mode", &self.mode)
            .field("members", &self.members)
            .field("observers", &self.observers.len())
            .finish()
    }
}
