//! Main application struct for the Live Tuner
//!
//! Contains the TunerApp which implements eframe::App, owns the root
//! parameter group and routes user edits and file actions into it.

use std::path::PathBuf;

use eframe::egui::{self, Align, Layout, RichText};
use tracing::{info, warn};

use super::theme;
use crate::group::ParameterGroup;
use crate::param::ParamConfig;
use crate::persistence::ConfigFile;
use crate::widgets::{self, Edit, PendingEdit};

/// State of the "Adjust range" window for one float parameter.
#[derive(Clone, Debug, PartialEq)]
struct RangeEditor {
    path: Vec<String>,
    min: f64,
    max: f64,
    step: f64,
}

/// Status bar message.
#[derive(Clone, Debug, PartialEq)]
enum Status {
    Ready,
    Info(String),
    Error(String),
}

/// Main application state for the Live Tuner
pub struct TunerApp {
    /// Root of the parameter tree
    root: ParameterGroup,

    /// Current configuration file
    config: ConfigFile,

    /// Message shown in the status bar
    status: Status,

    /// Open range editor, if any
    range_editor: Option<RangeEditor>,

    /// Window title, also shown in the status bar
    title: String,

    /// Whether theme has been applied
    theme_applied: bool,
}

impl TunerApp {
    /// Create a new TunerApp around a parameter tree
    pub fn new(title: impl Into<String>, root: ParameterGroup) -> Self {
        Self {
            root,
            config: ConfigFile::new(),
            status: Status::Ready,
            range_editor: None,
            title: title.into(),
            theme_applied: false,
        }
    }

    /// The root parameter group
    pub fn root(&self) -> &ParameterGroup {
        &self.root
    }

    /// Path of the current configuration file
    pub fn config_path(&self) -> Option<&std::path::Path> {
        self.config.path()
    }

    /// Load a configuration file and apply it to the parameter tree
    ///
    /// Keys that do not match any parameter are reported in the status bar;
    /// all other keys are still applied.
    pub fn load(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        match self.config.load(&path) {
            Ok(values) => match self.root.set_values(&values) {
                Ok(()) => self.status = Status::Info(format!("Loaded {}", path.display())),
                Err(e) => {
                    warn!("Partially applied {}: {}", path.display(), e);
                    self.status = Status::Error(format!("Loaded {} with errors: {}", path.display(), e));
                }
            },
            Err(e) => self.status = Status::Error(format!("Could not load {}: {}", path.display(), e)),
        }
    }

    /// Save to the current file, falling back to "Save As" when there is none
    fn save(&mut self) {
        if self.config.path().is_none() {
            self.save_as_dialog();
            return;
        }
        match self.config.save(&self.root.get_values()) {
            Ok(path) => self.status = Status::Info(format!("Saved {}", path.display())),
            Err(e) => self.status = Status::Error(format!("Could not save: {}", e)),
        }
    }

    /// Save to a new file
    pub fn save_as(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        match self.config.save_as(&path, &self.root.get_values()) {
            Ok(()) => self.status = Status::Info(format!("Saved {}", path.display())),
            Err(e) => self.status = Status::Error(format!("Could not save {}: {}", path.display(), e)),
        }
    }

    fn load_dialog(&mut self) {
        if let Some(path) = json_dialog().pick_file() {
            self.load(path);
        }
    }

    fn save_as_dialog(&mut self) {
        if let Some(path) = json_dialog().set_file_name("config.json").save_file() {
            self.save_as(path);
        }
    }

    /// Apply edits collected while drawing
    pub fn apply_edits(&mut self, edits: Vec<PendingEdit>) {
        for PendingEdit { path, edit } in edits {
            let result = match edit {
                Edit::Set(value) => self.root.set_at(&path, value).map(|_| ()),
                Edit::Trigger => self.root.trigger_at(&path),
                Edit::AdjustRange => {
                    self.open_range_editor(path);
                    Ok(())
                }
            };
            if let Err(e) = result {
                self.status = Status::Error(e.to_string());
            }
        }
    }

    fn open_range_editor(&mut self, path: Vec<String>) {
        if let Some(ParamConfig::Float(cfg)) = self.root.parameter_at(&path).map(|p| p.config()) {
            self.range_editor = Some(RangeEditor {
                min: cfg.min,
                max: cfg.max,
                step: cfg.step,
                path,
            });
        }
    }

    /// Draw the menu bar; returns the chosen file action
    fn draw_menu_bar(&mut self, ui: &mut egui::Ui) -> MenuActions {
        let mut actions = MenuActions::default();

        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Load…").clicked() {
                    actions.load = true;
                    ui.close_menu();
                }
                if ui.button("Save").clicked() {
                    actions.save = true;
                    ui.close_menu();
                }
                if ui.button("Save As…").clicked() {
                    actions.save_as = true;
                    ui.close_menu();
                }
            });

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let file = match self.config.path() {
                    Some(path) => path.display().to_string(),
                    None => "unsaved".to_owned(),
                };
                ui.label(RichText::new(file).color(theme::text::DISABLED).small());
            });
        });

        actions
    }

    /// Draw the bottom status bar
    fn draw_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);

            let (text, color) = match &self.status {
                Status::Ready => ("Ready".to_owned(), theme::text::SECONDARY),
                Status::Info(message) => (message.clone(), theme::status::OK),
                Status::Error(message) => (format!("⚠ {}", message), theme::status::ERROR),
            };
            ui.label(RichText::new(text).color(color).small());

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new(&self.title).color(theme::text::DISABLED).small());
            });
        });
    }

    /// Draw the range editor window, applying it when confirmed
    fn draw_range_editor(&mut self, ctx: &egui::Context) {
        let Some(editor) = self.range_editor.as_mut() else {
            return;
        };

        let mut open = true;
        let mut apply = false;
        egui::Window::new(format!("Adjust {}", editor.path.join(" / ")))
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                egui::Grid::new("range_editor").num_columns(2).show(ui, |ui| {
                    ui.label("Min");
                    ui.add(egui::DragValue::new(&mut editor.min).speed(editor.step));
                    ui.end_row();
                    ui.label("Max");
                    ui.add(egui::DragValue::new(&mut editor.max).speed(editor.step));
                    ui.end_row();
                    ui.label("Step");
                    ui.add(egui::DragValue::new(&mut editor.step).speed(0.001));
                    ui.end_row();
                });
                apply = ui.button("Apply").clicked();
            });

        if apply {
            let editor = editor.clone();
            match self.root.set_range_at(&editor.path, editor.min, editor.max, editor.step) {
                Ok(()) => {
                    info!("Adjusted range of {}", editor.path.join("/"));
                    self.range_editor = None;
                }
                Err(e) => self.status = Status::Error(e.to_string()),
            }
        } else if !open {
            self.range_editor = None;
        }
    }
}

fn json_dialog() -> rfd::FileDialog {
    rfd::FileDialog::new().add_filter("JSON", &["json"])
}

/// File actions collected from the menu for deferred execution
#[derive(Default)]
struct MenuActions {
    load: bool,
    save: bool,
    save_as: bool,
}

impl eframe::App for TunerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            theme::apply_theme(ctx);
            self.theme_applied = true;
        }

        let menu_actions = egui::TopBottomPanel::top("menu_bar")
            .frame(egui::Frame::none()
                .fill(theme::surface::PANEL)
                .inner_margin(egui::Margin::symmetric(8.0, 4.0)))
            .show(ctx, |ui| self.draw_menu_bar(ui))
            .inner;

        egui::TopBottomPanel::bottom("status_bar")
            .frame(egui::Frame::none()
                .fill(theme::surface::PANEL)
                .inner_margin(egui::Margin::symmetric(0.0, 4.0)))
            .show(ctx, |ui| {
                self.draw_status_bar(ui);
            });

        let edits = egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .show(ui, |ui| widgets::members_panel(ui, &self.root, &[]))
                    .inner
            })
            .inner;

        self.draw_range_editor(ctx);

        // Deferred so drawing only ever borrows the tree immutably
        self.apply_edits(edits);
        if menu_actions.load {
            self.load_dialog();
        }
        if menu_actions.save {
            self.save();
        }
        if menu_actions.save_as {
            self.save_as_dialog();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param::{ParamValue, Parameter};
    use crate::persistence::save_values;

    fn app() -> TunerApp {
        let mut gains = ParameterGroup::linked("Gains");
        gains.add_parameter(Parameter::float("Kp", 0.0, 10.0, 0.1, 1.0).unwrap())
            .unwrap();
        gains.add_parameter(Parameter::action("Reset")).unwrap();
        let mut root = ParameterGroup::independent("Root");
        root.add_group(gains).unwrap();
        TunerApp::new("Test", root)
    }

    #[test]
    fn test_apply_edits_routes_through_root() {
        let mut app = app();
        app.apply_edits(vec![PendingEdit {
            path: vec!["Gains".into(), "Kp".into()],
            edit: Edit::Set(ParamValue::Float(20.0)),
        }]);
        assert_eq!(
            app.root().parameter_at(&["Gains", "Kp"]).unwrap().value(),
            &ParamValue::Float(10.0)
        );
        assert_eq!(app.status, Status::Ready);
    }

    #[test]
    fn test_failed_edit_shows_error() {
        let mut app = app();
        app.apply_edits(vec![PendingEdit {
            path: vec!["Gains".into(), "Kp".into()],
            edit: Edit::Trigger,
        }]);
        assert!(matches!(app.status, Status::Error(_)));
    }

    #[test]
    fn test_adjust_range_opens_editor() {
        let mut app = app();
        app.apply_edits(vec![PendingEdit {
            path: vec!["Gains".into(), "Kp".into()],
            edit: Edit::AdjustRange,
        }]);
        assert_eq!(
            app.range_editor,
            Some(RangeEditor {
                path: vec!["Gains".into(), "Kp".into()],
                min: 0.0,
                max: 10.0,
                step: 0.1,
            })
        );

        // Actions have no range.
        app.range_editor = None;
        app.apply_edits(vec![PendingEdit {
            path: vec!["Gains".into(), "Reset".into()],
            edit: Edit::AdjustRange,
        }]);
        assert!(app.range_editor.is_none());
    }

    #[test]
    fn test_load_and_save_as() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.json");
        let mut source = app();
        source.root.set_at(&["Gains", "Kp"], 4.0).unwrap();
        save_values(&input, &source.root().get_values()).unwrap();

        let mut app = app();
        app.load(&input);
        assert!(matches!(app.status, Status::Info(_)));
        assert_eq!(app.config_path(), Some(input.as_path()));
        assert_eq!(app.root().get_values(), source.root().get_values());

        let output = dir.path().join("out.json");
        app.save_as(&output);
        assert_eq!(app.config_path(), Some(output.as_path()));
        assert!(output.exists());
    }

    #[test]
    fn test_load_reports_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.json");
        std::fs::write(&input, r#"{ "Gains": { "Kp": 2.0 }, "Extra": 1 }"#).unwrap();

        let mut app = app();
        app.load(&input);
        assert!(matches!(app.status, Status::Error(_)));
        assert_eq!(
            app.root().parameter_at(&["Gains", "Kp"]).unwrap().value(),
            &ParamValue::Float(2.0)
        );
    }
}
