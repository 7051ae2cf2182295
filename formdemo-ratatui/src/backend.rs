//! Ratatui form frontend implementation for the FormBackend trait.
//!
//! Displays all fields at once with keyboard navigation.

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use formdemo::{Field, FieldKind, FormBackend, FormEvent, FormState};
use ratatui::{
    Frame, Terminal,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::CrosstermBackend,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io::{self, Stdout};
use thiserror::Error;
use unicode_width::UnicodeWidthChar;

/// Error type for the Ratatui form frontend.
#[derive(Debug, Error)]
pub enum RatatuiFormError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Color theme for the TUI form.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub text: Color,
    pub placeholder: Color,
    pub highlight: Color,
    pub border: Color,
    pub output: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            text: Color::White,
            placeholder: Color::DarkGray,
            highlight: Color::Yellow,
            border: Color::Gray,
            output: Color::Green,
        }
    }
}

/// Ratatui form frontend that displays all fields at once.
#[derive(Debug, Clone)]
pub struct RatatuiFormBackend {
    /// Title shown at the top of the form.
    title: String,
    /// Color theme for the UI.
    theme: Theme,
}

impl Default for RatatuiFormBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiFormBackend {
    /// Create a new Ratatui form frontend with default settings.
    pub fn new() -> Self {
        Self {
            title: "Form".to_string(),
            theme: Theme::default(),
        }
    }

    /// Set the title shown at the top of the form.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, RatatuiFormError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), RatatuiFormError> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        form: &mut FormState,
    ) -> Result<(), RatatuiFormError> {
        let mut ui = UiState::new(form, self.title.clone(), self.theme.clone());

        loop {
            terminal.draw(|frame| draw_form(frame, form, &ui))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if ui.handle_key(form, key) == Flow::Close {
                    return Ok(());
                }
            }
        }
    }
}

/// What currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    /// Index into the definition's fields.
    Field(usize),
    Submit,
}

/// Whether the event loop keeps running after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Close,
}

/// Terminal-only state: focus and text cursors. Values live in `FormState`.
struct UiState {
    focus: Focus,
    /// Cursor position (in chars) for each field, by definition index.
    cursors: Vec<usize>,
    title: String,
    theme: Theme,
}

impl UiState {
    fn new(form: &FormState, title: String, theme: Theme) -> Self {
        let cursors = form
            .definition()
            .fields()
            .iter()
            .map(|field| form.values().get(field.name()).chars().count())
            .collect();

        let focus = if form.definition().is_empty() {
            Focus::Submit
        } else {
            Focus::Field(0)
        };

        Self {
            focus,
            cursors,
            title,
            theme,
        }
    }

    fn focused_field(&self, form: &FormState) -> Option<(usize, Field)> {
        match self.focus {
            Focus::Field(idx) => form
                .definition()
                .fields()
                .get(idx)
                .map(|field| (idx, field.clone())),
            Focus::Submit => None,
        }
    }

    fn next_field(&mut self, form: &FormState) {
        let count = form.definition().len();
        self.focus = match self.focus {
            Focus::Field(idx) if idx + 1 < count => Focus::Field(idx + 1),
            Focus::Field(_) => Focus::Submit,
            // Already on submit button, can't go further
            Focus::Submit => Focus::Submit,
        };
    }

    fn prev_field(&mut self, form: &FormState) {
        let count = form.definition().len();
        self.focus = match self.focus {
            Focus::Field(idx) => Focus::Field(idx.saturating_sub(1)),
            Focus::Submit if count > 0 => Focus::Field(count - 1),
            Focus::Submit => Focus::Submit,
        };
    }

    fn dispatch(form: &mut FormState, event: FormEvent) {
        if let Err(err) = form.dispatch(event) {
            tracing::warn!(%err, "form event rejected");
        }
    }

    fn handle_key(&mut self, form: &mut FormState, key: KeyEvent) -> Flow {
        match key.code {
            KeyCode::Esc => return Flow::Close,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Flow::Close;
            }
            // F10 or Ctrl+S submit from anywhere
            KeyCode::F(10) => Self::dispatch(form, FormEvent::Submit),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Self::dispatch(form, FormEvent::Submit);
            }
            // Other control chords are not text
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {}
            // Enter: submit if on button, otherwise move to next field
            KeyCode::Enter => {
                if self.focus == Focus::Submit {
                    Self::dispatch(form, FormEvent::Submit);
                } else {
                    self.next_field(form);
                }
            }
            KeyCode::BackTab | KeyCode::Up => self.prev_field(form),
            KeyCode::Tab | KeyCode::Down => self.next_field(form),
            KeyCode::Left => self.step(form, Step::Back),
            KeyCode::Right => self.step(form, Step::Forward),
            KeyCode::Char(' ') if self.focused_is_select(form) => self.step(form, Step::Forward),
            KeyCode::Char(c) => self.insert_char(form, c),
            KeyCode::Backspace => self.delete_char(form, Step::Back),
            KeyCode::Delete => self.delete_char(form, Step::Forward),
            KeyCode::Home => self.move_cursor_to(form, |_| 0),
            KeyCode::End => self.move_cursor_to(form, |len| len),
            _ => {}
        }
        Flow::Continue
    }

    fn focused_is_select(&self, form: &FormState) -> bool {
        self.focused_field(form)
            .is_some_and(|(_, field)| matches!(field.kind(), FieldKind::Select(_)))
    }

    /// Left/Right: move the cursor in text fields, cycle options in selects.
    fn step(&mut self, form: &mut FormState, step: Step) {
        let Some((idx, field)) = self.focused_field(form) else {
            return;
        };

        match field.kind() {
            FieldKind::Select(options) => {
                if options.is_empty() {
                    return;
                }
                let current = form.values().get(field.name());
                let position = options
                    .iter()
                    .position(|option| option.value == current)
                    .unwrap_or(0);
                let len = options.len();
                let next = match step {
                    Step::Forward => (position + 1) % len,
                    Step::Back => (position + len - 1) % len,
                };
                let value = options[next].value.clone();
                Self::dispatch(form, FormEvent::change(field.name(), value));
            }
            FieldKind::Text | FieldKind::Email => {
                let len = form.values().get(field.name()).chars().count();
                let cursor = &mut self.cursors[idx];
                *cursor = match step {
                    Step::Forward => (*cursor + 1).min(len),
                    Step::Back => cursor.saturating_sub(1),
                };
            }
        }
    }

    fn move_cursor_to(&mut self, form: &FormState, target: impl Fn(usize) -> usize) {
        if let Some((idx, field)) = self.focused_field(form)
            && field.kind().is_text()
        {
            let len = form.values().get(field.name()).chars().count();
            self.cursors[idx] = target(len).min(len);
        }
    }

    fn insert_char(&mut self, form: &mut FormState, c: char) {
        let Some((idx, field)) = self.focused_field(form) else {
            return;
        };
        if !field.kind().is_text() {
            return;
        }

        let mut value = form.values().get(field.name()).to_owned();
        let cursor = self.cursors[idx].min(value.chars().count());
        value.insert(byte_offset(&value, cursor), c);
        self.cursors[idx] = cursor + 1;
        Self::dispatch(form, FormEvent::change(field.name(), value));
    }

    /// Backspace removes the char before the cursor, Delete the one after it.
    fn delete_char(&mut self, form: &mut FormState, direction: Step) {
        let Some((idx, field)) = self.focused_field(form) else {
            return;
        };
        if !field.kind().is_text() {
            return;
        }

        let mut value = form.values().get(field.name()).to_owned();
        let len = value.chars().count();
        let cursor = self.cursors[idx].min(len);
        let target = match direction {
            Step::Back if cursor > 0 => cursor - 1,
            Step::Forward if cursor < len => cursor,
            _ => return,
        };

        value.remove(byte_offset(&value, target));
        self.cursors[idx] = target;
        Self::dispatch(form, FormEvent::change(field.name(), value));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Back,
    Forward,
}

/// Byte offset of the char at `char_idx`, or the end of the string.
fn byte_offset(value: &str, char_idx: usize) -> usize {
    value
        .char_indices()
        .nth(char_idx)
        .map_or(value.len(), |(offset, _)| offset)
}

/// Scroll a single-line value so the cursor stays inside `width` columns.
///
/// Returns the byte offset of the first visible char and the cursor column
/// relative to it. The column is always below `width` when `width > 0`.
fn scroll_to_cursor(value: &str, cursor: usize, width: u16) -> (usize, u16) {
    let width = usize::from(width);
    let end = byte_offset(value, cursor);
    let mut start = end;
    let mut column = 0;
    for (offset, c) in value[..end].char_indices().rev() {
        let char_width = c.width().unwrap_or(0);
        if column + char_width >= width {
            break;
        }
        column += char_width;
        start = offset;
    }
    (start, u16::try_from(column).unwrap_or(u16::MAX))
}

const FIELD_HEIGHT: u16 = 3;

fn draw_form(frame: &mut Frame, form: &FormState, ui: &UiState) {
    let area = frame.area();
    let theme = &ui.theme;
    let fields = form.definition().fields();

    let mut constraints = vec![Constraint::Length(2)]; // Title
    constraints.extend(fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.push(Constraint::Length(3)); // Submit button
    constraints.push(Constraint::Min(3)); // Output
    constraints.push(Constraint::Length(1)); // Help bar

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    // Title
    let title = Paragraph::new(ui.title.as_str())
        .style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(title, chunks[0]);

    for (idx, field) in fields.iter().enumerate() {
        let is_focused = ui.focus == Focus::Field(idx);
        let cursor = ui.cursors.get(idx).copied().unwrap_or(0);
        draw_field(frame, form, field, chunks[idx + 1], is_focused, cursor, theme);
    }

    // Submit button
    let submit_focused = ui.focus == Focus::Submit;
    let submit_style = if submit_focused {
        Style::default()
            .fg(theme.text)
            .bg(theme.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD)
    };
    let label = form.definition().submit_label();
    let submit_text = if submit_focused {
        format!("[ {label} ]")
    } else {
        label.to_string()
    };
    let submit_button = Paragraph::new(submit_text)
        .style(submit_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if submit_focused {
                    theme.primary
                } else {
                    theme.border
                })),
        );
    let submit_area = chunks[fields.len() + 1];
    frame.render_widget(submit_button, submit_area);

    // Output area, read-only
    let output_area = chunks[fields.len() + 2];
    let output_area = if form.definition().output().full_width {
        output_area
    } else {
        Rect {
            width: output_area.width / 2,
            ..output_area
        }
    };
    let output = Paragraph::new(form.display().as_str())
        .style(Style::default().fg(theme.output))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(output, output_area);

    // Help bar
    let help_text =
        "Tab: Next  ←/→: Move cursor/Change color  Enter/F10/Ctrl+S: Submit  Esc/Ctrl+C: Quit";
    let help = Paragraph::new(help_text).style(Style::default().fg(theme.border));
    frame.render_widget(help, chunks[fields.len() + 3]);
}

fn draw_field(
    frame: &mut Frame,
    form: &FormState,
    field: &Field,
    area: Rect,
    is_focused: bool,
    cursor: usize,
    theme: &Theme,
) {
    let border_color = if is_focused {
        theme.primary
    } else {
        theme.border
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    if let Some(label) = field.label() {
        let marker = if field.is_required() { " *" } else { "" };
        block = block
            .title(format!(" {label}{marker} "))
            .title_style(Style::default().fg(if is_focused {
                theme.highlight
            } else {
                theme.text
            }));
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value = form.values().get(field.name());
    match field.kind() {
        FieldKind::Text | FieldKind::Email => {
            let (start, column) = if is_focused {
                scroll_to_cursor(value, cursor, inner.width)
            } else {
                (0, 0)
            };
            let text = if value.is_empty() {
                let placeholder = field.placeholder().unwrap_or_default();
                let marker = if field.is_required() && field.label().is_none() {
                    " *"
                } else {
                    ""
                };
                Paragraph::new(format!("{placeholder}{marker}"))
                    .style(Style::default().fg(theme.placeholder))
            } else {
                Paragraph::new(&value[start..]).style(Style::default().fg(theme.text))
            };
            frame.render_widget(text, inner);

            if is_focused && column < inner.width {
                frame.set_cursor_position((inner.x + column, inner.y));
            }
        }
        FieldKind::Select(options) => {
            let label = options
                .iter()
                .find(|option| option.value == value)
                .map_or(value, |option| option.label.as_str());
            let style = if is_focused {
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            frame.render_widget(Paragraph::new(format!("◀ {label} ▶")).style(style), inner);
        }
    }
}

impl FormBackend for RatatuiFormBackend {
    type Error = RatatuiFormError;

    fn run(&self, form: &mut FormState) -> Result<(), Self::Error> {
        tracing::info!(title = %self.title, "opening terminal form");

        let mut terminal = self.setup_terminal()?;
        let result = self.event_loop(&mut terminal, form);
        self.restore_terminal(&mut terminal)?;

        tracing::info!(submissions = form.submissions(), "terminal form closed");
        result
    }
}
