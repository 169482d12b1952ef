//! Collapsible group frames that recurse into nested groups.

use egui::{RichText, Ui};

use super::parameter_row::{parameter_row, Edit};
use crate::app::theme;
use crate::group::{GroupMode, Member, ParameterGroup};

/// An edit together with the path of the parameter it targets.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingEdit {
    pub path: Vec<String>,
    pub edit: Edit,
}

/// Draws every member of `group` without a frame of its own.
///
/// `prefix` is the path of `group` relative to the root being drawn.
pub fn members_panel(ui: &mut Ui, group: &ParameterGroup, prefix: &[String]) -> Vec<PendingEdit> {
    let mut edits = Vec::new();
    for member in group.members() {
        let mut path = prefix.to_vec();
        path.push(member.name().to_owned());
        match member {
            Member::Param(param) => {
                if let Some(edit) = parameter_row(ui, param) {
                    edits.push(PendingEdit { path, edit });
                }
            }
            Member::Group(nested) => edits.extend(group_panel(ui, nested, &path)),
        }
    }
    edits
}

/// Draws `group` as a titled, collapsible frame.
pub fn group_panel(ui: &mut Ui, group: &ParameterGroup, path: &[String]) -> Vec<PendingEdit> {
    let header_color = match group.mode() {
        GroupMode::Linked => theme::group::LINKED,
        GroupMode::Independent => theme::group::INDEPENDENT,
    };

    egui::Frame::group(ui.style())
        .rounding(theme::ROUNDING)
        .show(ui, |ui| {
            egui::CollapsingHeader::new(RichText::new(group.title()).color(header_color).strong())
                .id_salt(path)
                .default_open(true)
                .show(ui, |ui| members_panel(ui, group, path))
                .body_returned
                .unwrap_or_default()
        })
        .inner
}
