//! Egui frontend implementation for the FormBackend trait.

use eframe::egui;
use formdemo::{Field, FieldKind, FormBackend, FormEvent, FormState, OutputField};
use thiserror::Error;

/// Error type for the Egui frontend.
#[derive(Debug, Error)]
pub enum EguiError {
    /// An error occurred in the egui/eframe backend.
    #[error("Egui error: {0}")]
    Egui(String),
}

/// Builder/configuration for the Egui frontend.
#[derive(Debug, Clone)]
pub struct EguiBackend {
    /// Window title.
    title: String,
    /// Window size [width, height].
    window_size: [f32; 2],
}

impl Default for EguiBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl EguiBackend {
    /// Create a new Egui frontend with default settings.
    pub fn new() -> Self {
        Self {
            title: "Form".to_string(),
            window_size: [420.0, 360.0],
        }
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the window size.
    pub fn with_window_size(mut self, size: [f32; 2]) -> Self {
        self.window_size = size;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn window_size(&self) -> [f32; 2] {
        self.window_size
    }
}

/// Renders a form into an egui `Ui` and feeds user input back as events.
pub struct FormView<'a> {
    form: &'a mut FormState,
}

impl<'a> FormView<'a> {
    pub fn new(form: &'a mut FormState) -> Self {
        Self { form }
    }

    /// Draw the whole form: fields, submit button, output area.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let definition = self.form.definition().clone();

        for field in definition.fields() {
            match field.kind() {
                FieldKind::Text | FieldKind::Email => self.render_text_field(ui, field),
                FieldKind::Select(_) => self.render_select_field(ui, field),
            }
            ui.add_space(8.0);
        }

        if ui.button(definition.submit_label()).clicked() {
            self.dispatch(FormEvent::Submit);
        }
        ui.add_space(16.0);

        self.render_output(ui, definition.output());
    }

    fn dispatch(&mut self, event: FormEvent) {
        if let Err(err) = self.form.dispatch(event) {
            tracing::warn!(%err, "form event rejected");
        }
    }

    fn render_text_field(&mut self, ui: &mut egui::Ui, field: &Field) {
        let name = field.name();
        let mut draft = self.form.values().get(name).to_owned();

        let changed = ui
            .horizontal(|ui| {
                if let Some(label) = field.label() {
                    ui.label(label);
                }

                let mut edit = egui::TextEdit::singleline(&mut draft).id_salt(name.as_str());
                if let Some(placeholder) = field.placeholder() {
                    edit = edit.hint_text(placeholder);
                }

                let response = ui.add(edit);
                let response = if field.is_required() {
                    response.on_hover_text("Required")
                } else {
                    response
                };
                response.changed()
            })
            .inner;

        if changed {
            self.dispatch(FormEvent::change(name, draft));
        }
    }

    fn render_select_field(&mut self, ui: &mut egui::Ui, field: &Field) {
        let name = field.name();
        let options = field.kind().options().unwrap_or_default();
        let current = self.form.values().get(name).to_owned();
        let mut selected = current.clone();

        let selected_text = options
            .iter()
            .find(|option| option.value == current)
            .map_or(current.as_str(), |option| option.label.as_str());

        ui.horizontal(|ui| {
            if let Some(label) = field.label() {
                ui.label(label);
            }

            egui::ComboBox::from_id_salt(name.as_str())
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for option in options {
                        ui.selectable_value(
                            &mut selected,
                            option.value.clone(),
                            option.label.as_str(),
                        );
                    }
                });
        });

        if selected != current {
            self.dispatch(FormEvent::change(name, selected));
        }
    }

    fn render_output(&self, ui: &mut egui::Ui, output: &OutputField) {
        // A `&str` buffer makes the text edit read-only.
        let mut text = self.form.display().as_str();
        let mut edit = egui::TextEdit::multiline(&mut text).id_salt("output");
        if output.full_width {
            edit = edit.desired_width(f32::INFINITY);
        }
        ui.add(edit);
    }
}

impl eframe::App for FormView<'_> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| self.ui(ui));
        });
    }
}

impl FormBackend for EguiBackend {
    type Error = EguiError;

    fn run(&self, form: &mut FormState) -> Result<(), Self::Error> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.title.clone())
                .with_inner_size(self.window_size),
            ..Default::default()
        };

        tracing::info!(title = %self.title, "opening egui form");

        // eframe::run_native blocks until the window is closed
        let view_form = &mut *form;
        eframe::run_native(
            &self.title,
            options,
            Box::new(move |_cc| {
                let app: Box<dyn eframe::App + '_> = Box::new(FormView::new(view_form));
                Ok(app)
            }),
        )
        .map_err(|e| EguiError::Egui(e.to_string()))?;

        tracing::info!(submissions = form.submissions(), "egui form closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formdemo::{ColorChoice, FieldName, FormValues};

    fn render_frame(form: &mut FormState) -> egui::FullOutput {
        let ctx = egui::Context::default();
        ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| FormView::new(form).ui(ui));
        })
    }

    /// Drives one `Context` across frames with injected input.
    struct Driver {
        ctx: egui::Context,
        last: egui::FullOutput,
    }

    impl Driver {
        fn new(form: &mut FormState) -> Self {
            let ctx = egui::Context::default();
            let last = Self::run(&ctx, form, Vec::new());
            Self { ctx, last }
        }

        fn run(
            ctx: &egui::Context,
            form: &mut FormState,
            events: Vec<egui::Event>,
        ) -> egui::FullOutput {
            let input = egui::RawInput {
                screen_rect: Some(egui::Rect::from_min_size(
                    egui::Pos2::ZERO,
                    egui::vec2(800.0, 600.0),
                )),
                events,
                ..Default::default()
            };
            ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| FormView::new(form).ui(ui));
            })
        }

        fn frame(&mut self, form: &mut FormState, events: Vec<egui::Event>) {
            self.last = Self::run(&self.ctx, form, events);
        }

        /// Center of the topmost text shape whose text is exactly `needle`.
        fn find_text(&self, needle: &str) -> Option<egui::Pos2> {
            fn visit(shape: &egui::Shape, needle: &str) -> Option<egui::Pos2> {
                match shape {
                    egui::Shape::Text(text) if text.galley.text() == needle => {
                        Some(egui::Rect::from_min_size(text.pos, text.galley.size()).center())
                    }
                    egui::Shape::Vec(shapes) => {
                        shapes.iter().rev().find_map(|shape| visit(shape, needle))
                    }
                    _ => None,
                }
            }
            self.last
                .shapes
                .iter()
                .rev()
                .find_map(|clipped| visit(&clipped.shape, needle))
        }

        fn click(&mut self, form: &mut FormState, label: &str) {
            let pos = self
                .find_text(label)
                .unwrap_or_else(|| panic!("{label:?} is not on screen"));
            let button = |pressed| egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                modifiers: egui::Modifiers::NONE,
            };
            self.frame(form, vec![egui::Event::PointerMoved(pos), button(true)]);
            self.frame(form, vec![button(false)]);
            self.frame(form, Vec::new());
        }

        fn type_text(&mut self, form: &mut FormState, text: &str) {
            self.frame(form, vec![egui::Event::Text(text.to_string())]);
            self.frame(form, Vec::new());
        }
    }

    #[test]
    fn backend_creation() {
        let backend = EguiBackend::new();
        assert_eq!(backend.title(), "Form");

        let backend = EguiBackend::new()
            .with_title("Test")
            .with_window_size([800.0, 600.0]);
        assert_eq!(backend.title(), "Test");
        assert_eq!(backend.window_size(), [800.0, 600.0]);

        let _default = EguiBackend::default();
    }

    #[test]
    fn error_types() {
        let err = EguiError::Egui("test error".to_string());
        assert_eq!(err.to_string(), "Egui error: test error");
    }

    #[test]
    fn renders_without_crashing() {
        let mut form = FormState::new();
        let output = render_frame(&mut form);
        assert!(!output.shapes.is_empty());
    }

    #[test]
    fn submits_values_entered_through_the_window() {
        let mut form = FormState::new();
        let mut driver = Driver::new(&mut form);

        driver.click(&mut form, "Name");
        driver.type_text(&mut form, "mockname");
        assert_eq!(form.values().name(), "mockname");

        driver.click(&mut form, "Email");
        driver.type_text(&mut form, "mock@email.com");
        assert_eq!(form.values().email(), "mock@email.com");
        assert_eq!(form.values().name(), "mockname");

        driver.click(&mut form, "Red");
        driver.click(&mut form, "Green");
        assert_eq!(form.values().color(), ColorChoice::Green);
        assert!(form.display().is_empty());

        driver.click(&mut form, "Submit");
        let expected = r#"{"email":"mock@email.com","name":"mockname","color":"green"}"#;
        assert_eq!(form.display().as_str(), expected);
        assert_eq!(form.submissions(), 1);
        assert!(driver.find_text(expected).is_some());
    }

    #[test]
    fn submit_without_edits_shows_initial_values() {
        let mut form = FormState::new();
        let mut driver = Driver::new(&mut form);

        driver.click(&mut form, "Submit");
        assert_eq!(
            form.display().as_str(),
            r#"{"email":"","name":"","color":"red"}"#
        );
    }

    #[test]
    fn rendering_does_not_touch_state() {
        let mut form = FormState::builder()
            .values(
                FormValues::new()
                    .with_name("Ada")
                    .with_color(ColorChoice::Blue),
            )
            .build();
        form.change(FieldName::Email, "ada@example.com").unwrap();
        form.submit();
        let values = form.values().clone();
        let display = form.display().clone();

        for _ in 0..3 {
            render_frame(&mut form);
        }

        assert_eq!(form.values(), &values);
        assert_eq!(form.display(), &display);
        assert_eq!(form.submissions(), 1);
    }
}
