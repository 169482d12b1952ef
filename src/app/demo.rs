//! Sample tuning panel shown by the `live-tuner` binary.

use tracing::info;

use crate::error::Result;
use crate::group::ParameterGroup;
use crate::param::{EnumConfig, Parameter};

/// Builds a panel exercising every parameter kind and both group modes.
///
/// Callbacks only log; a host application would forward them to its runtime.
pub fn demo_panel() -> Result<ParameterGroup> {
    let mut pid = ParameterGroup::linked("PID Controller");
    pid.add_parameters([
        Parameter::float("Kp", 0.0, 10.0, 0.1, 1.0)?,
        Parameter::float("Ki", 0.0, 5.0, 0.01, 0.5)?,
        Parameter::float("Kd", 0.0, 5.0, 0.01, 0.0)?,
    ])?;
    pid.register_callback(|title, values| {
        info!("{} → {}", title, crate::persistence::to_json(values));
    });

    let mut filter = ParameterGroup::independent("Filter");
    filter.add_parameters([
        Parameter::boolean("Enabled", true)?,
        Parameter::new("Mode", EnumConfig::new(["Low Pass", "High Pass", "Band Pass"]))?,
        Parameter::float("Cutoff", 20.0, 20_000.0, 10.0, 1_000.0)?,
    ])?;
    for name in ["Enabled", "Mode", "Cutoff"] {
        filter.register_callback_at(&[name], |name, value| info!("{} = {}", name, value))?;
    }

    let mut reset = Parameter::action("Reset Integrator");
    reset.register_callback(|name, _| info!("{} pressed", name));

    let mut root = ParameterGroup::independent("Live Tuner");
    root.add_parameter(Parameter::text("Session", "bench run")?)?;
    root.add_group(pid)?;
    root.add_group(filter)?;
    root.add_parameter(reset)?;
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::GroupMode;

    #[test]
    fn test_demo_panel_layout() {
        let root = demo_panel().unwrap();
        let values = root.get_values();
        assert_eq!(
            values.keys().collect::<Vec<_>>(),
            vec!["Session", "PID Controller", "Filter", "Reset Integrator"]
        );
        assert_eq!(root.group("PID Controller").unwrap().mode(), GroupMode::Linked);
        assert_eq!(root.group("Filter").unwrap().mode(), GroupMode::Independent);
        assert_eq!(root.group("Filter").unwrap().parameter("Cutoff").unwrap().observer_count(), 1);
    }
}
