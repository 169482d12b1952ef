//! One row of controls per parameter, using egui's built-in widgets.

use egui::{RichText, Ui};

use crate::app::theme;
use crate::param::{ParamConfig, ParamValue, Parameter, FLOAT_TOLERANCE};

/// A user interaction with a parameter row, applied after drawing.
#[derive(Clone, Debug, PartialEq)]
pub enum Edit {
    /// The user entered a new value.
    Set(ParamValue),
    /// The user pressed an action button.
    Trigger,
    /// The user asked to adjust a float's min/max/step.
    AdjustRange,
}

/// Width reserved for parameter labels.
pub const LABEL_WIDTH: f32 = 110.0;

/// Draws the label and control for `param`.
///
/// The parameter itself is never mutated here; the returned edit is applied
/// by the caller through the owning group so notifications fire.
pub fn parameter_row(ui: &mut Ui, param: &Parameter) -> Option<Edit> {
    ui.horizontal(|ui| {
        if !matches!(param.config(), ParamConfig::Action(_)) {
            ui.add_sized(
                [LABEL_WIDTH, ui.spacing().interact_size.y],
                egui::Label::new(RichText::new(param.name()).color(theme::text::SECONDARY)),
            );
        }

        match (param.config(), param.value()) {
            (ParamConfig::Float(cfg), ParamValue::Float(current)) => {
                let mut value = *current;
                let response = ui.add(
                    egui::Slider::new(&mut value, cfg.min..=cfg.max).drag_value_speed(cfg.step),
                );
                let mut edit = None;
                response.context_menu(|ui| {
                    if ui.button("Adjust range…").clicked() {
                        edit = Some(Edit::AdjustRange);
                        ui.close_menu();
                    }
                });
                if edit.is_none() && response.changed() && (value - current).abs() >= FLOAT_TOLERANCE {
                    edit = Some(Edit::Set(ParamValue::Float(value)));
                }
                edit
            }
            (ParamConfig::Bool(_), ParamValue::Bool(current)) => {
                let mut value = *current;
                ui.checkbox(&mut value, "")
                    .changed()
                    .then_some(Edit::Set(ParamValue::Bool(value)))
            }
            (ParamConfig::Enum(cfg), ParamValue::Text(current)) => {
                let mut selected = current.clone();
                egui::ComboBox::from_id_salt(("enum", param.name()))
                    .selected_text(selected.as_str())
                    .show_ui(ui, |ui| {
                        for option in &cfg.options {
                            ui.selectable_value(&mut selected, option.clone(), option.as_str());
                        }
                    });
                (selected != *current).then(|| Edit::Set(ParamValue::Text(selected)))
            }
            (ParamConfig::String(_), ParamValue::Text(current)) => text_field(ui, param.name(), current),
            (ParamConfig::Action(_), _) => ui
                .button(RichText::new(param.name()).color(theme::ACCENT))
                .clicked()
                .then_some(Edit::Trigger),
            _ => {
                ui.label(RichText::new(param.value().to_string()).color(theme::text::DISABLED));
                None
            }
        }
    })
    .inner
}

/// Single-line text field committed on Enter or focus loss.
///
/// The in-progress text lives in egui's temporary memory so the parameter
/// only sees the final string.
fn text_field(ui: &mut Ui, name: &str, current: &str) -> Option<Edit> {
    let id = ui.make_persistent_id(("text", name));
    let mut buffer = ui
        .data_mut(|d| d.get_temp::<String>(id))
        .unwrap_or_else(|| current.to_owned());

    let response = ui.text_edit_singleline(&mut buffer);

    if response.lost_focus() {
        ui.data_mut(|d| d.remove::<String>(id));
        (buffer != current).then(|| Edit::Set(ParamValue::Text(buffer)))
    } else {
        if response.has_focus() {
            ui.data_mut(|d| d.insert_temp(id, buffer));
        }
        None
    }
}
