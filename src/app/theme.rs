//! Theme for the Live Tuner UI
//!
//! Neutral graphite surfaces so the group header colors carry the meaning:
//! amber for linked groups, teal for independent ones.

use egui::{Color32, Context, Rounding, Stroke, Vec2};

/// Surface colors, darkest first
pub mod surface {
    use super::Color32;

    pub const WINDOW: Color32 = Color32::from_rgb(24, 26, 29);
    pub const PANEL: Color32 = Color32::from_rgb(32, 35, 39);
    pub const FIELD: Color32 = Color32::from_rgb(18, 20, 22);

    /// Controls at rest, hovered and dragged
    pub const CONTROL: Color32 = Color32::from_rgb(44, 48, 54);
    pub const CONTROL_HOVERED: Color32 = Color32::from_rgb(56, 61, 68);
    pub const CONTROL_ACTIVE: Color32 = Color32::from_rgb(68, 74, 83);
}

/// Group header colors by mode
pub mod group {
    use super::Color32;

    pub const LINKED: Color32 = Color32::from_rgb(232, 168, 56);
    pub const INDEPENDENT: Color32 = Color32::from_rgb(77, 182, 172);
}

pub mod text {
    use super::Color32;

    pub const PRIMARY: Color32 = Color32::from_rgb(228, 230, 233);
    pub const SECONDARY: Color32 = Color32::from_rgb(150, 156, 164);
    pub const DISABLED: Color32 = Color32::from_rgb(96, 101, 108);
}

/// Status bar colors
pub mod status {
    use super::Color32;

    pub const OK: Color32 = Color32::from_rgb(124, 179, 66);
    pub const ERROR: Color32 = Color32::from_rgb(229, 83, 75);
}

/// Action buttons, selection and focused sliders
pub const ACCENT: Color32 = Color32::from_rgb(100, 181, 246);

/// Rounding for group frames and windows
pub const ROUNDING: Rounding = Rounding::same(5.0);

const CONTROL_ROUNDING: Rounding = Rounding::same(3.0);

/// Apply the tuner theme to an egui context
pub fn apply_theme(ctx: &Context) {
    let mut style = (*ctx.style()).clone();

    let visuals = &mut style.visuals;
    visuals.dark_mode = true;
    visuals.panel_fill = surface::WINDOW;
    visuals.window_fill = surface::PANEL;
    visuals.window_stroke = Stroke::new(1.0, surface::CONTROL_HOVERED);
    visuals.window_rounding = ROUNDING;
    visuals.extreme_bg_color = surface::FIELD;

    let widgets = &mut visuals.widgets;
    for (state, fill, stroke) in [
        (&mut widgets.noninteractive, surface::PANEL, text::SECONDARY),
        (&mut widgets.inactive, surface::CONTROL, text::PRIMARY),
        (&mut widgets.hovered, surface::CONTROL_HOVERED, text::PRIMARY),
        (&mut widgets.active, surface::CONTROL_ACTIVE, ACCENT),
    ] {
        state.bg_fill = fill;
        state.weak_bg_fill = fill;
        state.fg_stroke = Stroke::new(1.0, stroke);
        state.rounding = CONTROL_ROUNDING;
    }

    visuals.selection.bg_fill = ACCENT.gamma_multiply(0.35);
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    // Rows stay compact so deep trees fit without scrolling
    style.spacing.item_spacing = Vec2::new(8.0, 4.0);
    style.spacing.button_padding = Vec2::new(10.0, 4.0);
    style.spacing.slider_width = 200.0;

    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_modes_are_distinguishable() {
        assert_ne!(group::LINKED, group::INDEPENDENT);
    }

    #[test]
    fn test_status_colors_are_distinct() {
        assert_ne!(status::OK, status::ERROR);
        assert_ne!(text::PRIMARY, text::DISABLED);
    }
}
