//! Ratatui form backend implementation for FormBackend trait.
//!
//! Displays all fields at once with keyboard navigation and a console pane.

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::CrosstermBackend,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use santa_list::{
    Accepted, Console, FieldId, FormBackend, FormController, FormError, FormState, Rejection,
};
use std::io::{self, Stdout};
use thiserror::Error;

/// Error type for the Ratatui form backend.
#[derive(Debug, Error)]
pub enum RatatuiFormError {
    /// User cancelled the form (Ctrl+C).
    #[error("Form cancelled by user")]
    Cancelled,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<RatatuiFormError> for FormError {
    fn from(err: RatatuiFormError) -> Self {
        match err {
            RatatuiFormError::Cancelled => FormError::Cancelled,
            other => FormError::backend(other),
        }
    }
}

/// Color theme for the TUI form.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub text: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
    pub selected_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            text: Color::White,
            highlight: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            border: Color::Gray,
            selected_bg: Color::DarkGray,
        }
    }
}

/// Ratatui form backend that displays all fields at once.
///
/// The form stays open after a save, whatever its outcome; Esc leaves it.
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
    /// Create a new Ratatui form backend with default settings.
    pub fn new() -> Self {
        Self {
            title: "Santa's Gift List".to_string(),
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
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), RatatuiFormError> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn event_loop<C: Console>(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        controller: &mut FormController<C>,
    ) -> Result<(), RatatuiFormError> {
        let mut view = FormView::new(self.theme.clone(), self.title.clone());

        loop {
            terminal.draw(|frame| draw_form(frame, &mut view, controller.state()))?;

            if let Event::Key(key) = event::read()? {
                match view.handle_key(key, controller) {
                    Flow::Continue => {}
                    Flow::Quit => return Ok(()),
                    Flow::Cancel => return Err(RatatuiFormError::Cancelled),
                }
            }
        }
    }
}

/// What the event loop does after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Field(usize),
    Save,
}

/// Presentation state: focus, cursor, scrolling and the console pane.
///
/// Field values live in the controller's [`FormState`].
struct FormView {
    focus: Focus,
    /// Cursor position in the focused text field, in characters
    cursor: usize,
    /// Index of the first field drawn
    first_visible: usize,
    messages: Vec<String>,
    /// Last rejection, shown on the field it concerns
    error: Option<(FieldId, String)>,
    last_accepted: bool,
    theme: Theme,
    title: String,
}

impl FormView {
    fn new(theme: Theme, title: String) -> Self {
        Self {
            focus: Focus::Field(0),
            cursor: 0,
            first_visible: 0,
            messages: Vec::new(),
            error: None,
            last_accepted: false,
            theme,
            title,
        }
    }

    fn focused_field(&self) -> Option<FieldId> {
        match self.focus {
            Focus::Field(idx) => FieldId::ALL.get(idx).copied(),
            Focus::Save => None,
        }
    }

    fn on_choice(&self) -> bool {
        self.focused_field().is_some_and(|field| !field.is_text())
    }

    fn focus_on(&mut self, idx: usize, state: &FormState) {
        self.focus = Focus::Field(idx);
        self.cursor = FieldId::ALL
            .get(idx)
            .map(|field| state.value(*field).chars().count())
            .unwrap_or(0);
    }

    fn next_field(&mut self, state: &FormState) {
        match self.focus {
            Focus::Field(idx) if idx + 1 < FieldId::ALL.len() => self.focus_on(idx + 1, state),
            // No more fields, focus the save button
            Focus::Field(_) => self.focus = Focus::Save,
            Focus::Save => {}
        }
    }

    fn prev_field(&mut self, state: &FormState) {
        match self.focus {
            Focus::Save => self.focus_on(FieldId::ALL.len() - 1, state),
            Focus::Field(idx) if idx > 0 => self.focus_on(idx - 1, state),
            Focus::Field(_) => {}
        }
    }

    /// Apply an edit to the focused text field's characters and cursor.
    fn edit_text<C: Console>(
        &mut self,
        controller: &mut FormController<C>,
        edit: impl FnOnce(&mut Vec<char>, &mut usize),
    ) {
        let Some(field) = self.focused_field().filter(|field| field.is_text()) else {
            return;
        };

        let mut chars: Vec<char> = controller.state().value(field).chars().collect();
        let mut cursor = self.cursor.min(chars.len());
        edit(&mut chars, &mut cursor);
        self.cursor = cursor;

        let text: String = chars.into_iter().collect();
        if text != controller.state().value(field) {
            controller.set_text(field, text);
            self.clear_error(field);
        }
    }

    /// Move a selector to its next or previous entry, wrapping around.
    fn cycle_choice<C: Console>(&mut self, controller: &mut FormController<C>, forward: bool) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let (Some(labels), Some(current)) = (
            FormState::choice_labels(field),
            controller.state().choice_index(field),
        ) else {
            return;
        };

        let len = labels.len();
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        controller.select(field, next);
        self.clear_error(field);
    }

    fn clear_error(&mut self, field: FieldId) {
        if self.error.as_ref().is_some_and(|(f, _)| *f == field) {
            self.error = None;
        }
    }

    fn log(&mut self, message: &str) {
        self.messages
            .extend(message.split('\n').map(str::to_string));
    }

    fn record_rejection(&mut self, rejection: &Rejection, state: &FormState) {
        let message = rejection.to_string();
        self.log(&message);
        self.last_accepted = false;
        self.error = rejection.field().map(|field| {
            let headline = message.lines().next().unwrap_or_default().to_string();
            (field, headline)
        });
        if let Some(field) = self.focused_field() {
            self.cursor = self.cursor.min(state.value(field).chars().count());
        }
    }

    fn record_accepted(&mut self, accepted: &Accepted) {
        for line in accepted.report() {
            self.log(&line);
        }
        self.error = None;
        self.last_accepted = true;
    }

    /// Enter inside a field: check it, moving on only if it passes.
    fn submit_focused<C: Console>(&mut self, controller: &mut FormController<C>) {
        let Some(field) = self.focused_field() else {
            return;
        };
        match controller.submit_field(field) {
            Ok(()) => {
                self.clear_error(field);
                self.next_field(controller.state());
            }
            Err(rejection) => self.record_rejection(&rejection, controller.state()),
        }
    }

    fn save<C: Console>(&mut self, controller: &mut FormController<C>) {
        match controller.save() {
            Ok(accepted) => self.record_accepted(&accepted),
            Err(rejection) => self.record_rejection(&rejection, controller.state()),
        }
    }

    fn handle_key<C: Console>(
        &mut self,
        key: KeyEvent,
        controller: &mut FormController<C>,
    ) -> Flow {
        if key.kind != KeyEventKind::Press {
            return Flow::Continue;
        }

        let on_choice = self.on_choice();
        let control = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('c') if control => return Flow::Cancel,
            // Ctrl+S or F10 to save from anywhere
            KeyCode::Char('s') if control => self.save(controller),
            KeyCode::F(10) => self.save(controller),
            KeyCode::Enter => match self.focus {
                Focus::Save => self.save(controller),
                Focus::Field(_) => self.submit_focused(controller),
            },
            // Shift+Tab: previous field
            KeyCode::BackTab => self.prev_field(controller.state()),
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.prev_field(controller.state());
            }
            KeyCode::Tab | KeyCode::Down => self.next_field(controller.state()),
            KeyCode::Up => self.prev_field(controller.state()),
            // Left/Right/Space change the option of a selector
            KeyCode::Left if on_choice => self.cycle_choice(controller, false),
            KeyCode::Right | KeyCode::Char(' ') if on_choice => {
                self.cycle_choice(controller, true);
            }
            KeyCode::Left => self.edit_text(controller, |_, cursor| {
                *cursor = cursor.saturating_sub(1);
            }),
            KeyCode::Right => self.edit_text(controller, |chars, cursor| {
                *cursor = (*cursor + 1).min(chars.len());
            }),
            KeyCode::Home => self.edit_text(controller, |_, cursor| *cursor = 0),
            KeyCode::End => self.edit_text(controller, |chars, cursor| *cursor = chars.len()),
            KeyCode::Backspace => self.edit_text(controller, |chars, cursor| {
                if *cursor > 0 {
                    *cursor -= 1;
                    chars.remove(*cursor);
                }
            }),
            KeyCode::Delete => self.edit_text(controller, |chars, cursor| {
                if *cursor < chars.len() {
                    chars.remove(*cursor);
                }
            }),
            KeyCode::Char(c) => self.edit_text(controller, |chars, cursor| {
                chars.insert(*cursor, c);
                *cursor += 1;
            }),
            _ => {}
        }

        Flow::Continue
    }

    /// Adjust the first drawn field so the focused one is on screen
    fn adjust_scroll(&mut self, capacity: usize) {
        let capacity = capacity.max(1);
        let idx = match self.focus {
            Focus::Field(idx) => idx,
            Focus::Save => FieldId::ALL.len() - 1,
        };

        if idx < self.first_visible {
            self.first_visible = idx;
        } else if idx >= self.first_visible + capacity {
            self.first_visible = idx + 1 - capacity;
        }
    }
}

const FIELD_HEIGHT: u16 = 3;

fn draw_form(frame: &mut Frame, view: &mut FormView, state: &FormState) {
    let area = frame.area();
    let theme = view.theme.clone();

    // Main layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(6),    // Form content
            Constraint::Length(3), // Save button
            Constraint::Length(8), // Console
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    let title = Paragraph::new(view.title.clone())
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

    // Form content area - reserve space for scrollbar on the right
    let form_area = chunks[1];
    let content_width = form_area.width.saturating_sub(2);
    let capacity = usize::from(form_area.height / FIELD_HEIGHT);
    view.adjust_scroll(capacity);

    let visible = FieldId::ALL
        .into_iter()
        .enumerate()
        .skip(view.first_visible)
        .take(capacity);
    for (row, (idx, field)) in visible.enumerate() {
        let field_area = Rect {
            x: form_area.x + 1,
            y: form_area.y + FIELD_HEIGHT * row as u16,
            width: content_width,
            height: FIELD_HEIGHT,
        };
        let is_focused = view.focus == Focus::Field(idx);
        let error = view
            .error
            .as_ref()
            .filter(|(f, _)| *f == field)
            .map(|(_, message)| message.as_str());
        draw_field(frame, field, state, field_area, is_focused, view.cursor, error, &theme);
    }

    // Draw scrollbar if the fields do not fit
    if capacity < FieldId::ALL.len() && form_area.width > 0 {
        let scrollbar_area = Rect {
            x: form_area.x + form_area.width - 1,
            y: form_area.y,
            width: 1,
            height: form_area.height,
        };

        let mut scrollbar_state = ScrollbarState::new(FieldId::ALL.len())
            .position(view.first_visible)
            .viewport_content_length(capacity);

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("▲"))
            .end_symbol(Some("▼"))
            .track_symbol(Some("│"))
            .thumb_symbol("█");

        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }

    // Save button
    let save_focused = view.focus == Focus::Save;
    let save_style = if save_focused {
        Style::default()
            .fg(theme.text)
            .bg(theme.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD)
    };
    let save_text = if save_focused {
        "  [ Save ]  "
    } else {
        "    Save    "
    };
    let save_button = Paragraph::new(save_text)
        .style(save_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if save_focused {
                    theme.primary
                } else {
                    theme.border
                })),
        );
    frame.render_widget(save_button, chunks[2]);

    // Console pane, newest lines at the bottom
    let console_block = Block::default()
        .borders(Borders::ALL)
        .title(" Console ")
        .border_style(Style::default().fg(if view.last_accepted {
            theme.success
        } else {
            theme.border
        }));
    let inner = console_block.inner(chunks[3]);
    let skip = view
        .messages
        .len()
        .saturating_sub(usize::from(inner.height));
    let console_text = view.messages[skip..].join("\n");
    let console = Paragraph::new(console_text)
        .style(Style::default().fg(theme.text))
        .block(console_block);
    frame.render_widget(console, chunks[3]);

    // Help bar
    let help_text =
        "Tab/↓: Next  Shift+Tab/↑: Previous  ←/→: Change option  Enter: Check / Save  Esc: Quit";
    let help = Paragraph::new(help_text).style(Style::default().fg(theme.border));
    frame.render_widget(help, chunks[4]);
}

#[allow(clippy::too_many_arguments)]
fn draw_field(
    frame: &mut Frame,
    field: FieldId,
    state: &FormState,
    area: Rect,
    is_focused: bool,
    cursor: usize,
    error: Option<&str>,
    theme: &Theme,
) {
    let border_color = if error.is_some() {
        theme.error
    } else if is_focused {
        theme.primary
    } else {
        theme.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", field.prompt()))
        .title_style(Style::default().fg(if is_focused {
            theme.highlight
        } else {
            theme.text
        }));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if field.is_text() {
        let text = Paragraph::new(state.value(field).to_string())
            .style(Style::default().fg(theme.text));
        frame.render_widget(text, inner);

        if is_focused {
            let cursor_x = inner.x.saturating_add(cursor as u16);
            if cursor_x < inner.x + inner.width {
                frame.set_cursor_position((cursor_x, inner.y));
            }
        }
    } else {
        let unselected = state.choice_index(field) == Some(0);
        let style = if is_focused {
            Style::default()
                .fg(theme.text)
                .bg(theme.selected_bg)
                .add_modifier(Modifier::BOLD)
        } else if unselected {
            Style::default().fg(theme.border)
        } else {
            Style::default().fg(theme.highlight)
        };
        let text = Paragraph::new(format!("◀ {} ▶", state.value(field))).style(style);
        frame.render_widget(text, inner);
    }

    // Show error if any
    if let Some(error) = error {
        let error_text =
            Paragraph::new(format!("⚠ {error}")).style(Style::default().fg(theme.error));
        let error_area = Rect {
            x: area.x + 1,
            y: area.y + area.height - 1,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        frame.render_widget(error_text, error_area);
    }
}

impl FormBackend for RatatuiFormBackend {
    type Error = RatatuiFormError;

    fn run<C: Console>(&self, controller: &mut FormController<C>) -> Result<(), Self::Error> {
        let mut terminal = self.setup_terminal()?;
        let result = self.event_loop(&mut terminal, controller);
        self.restore_terminal(&mut terminal)?;
        tracing::debug!(cancelled = result.is_err(), "form closed");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use santa_list::Transcript;

    fn view() -> FormView {
        FormView::new(Theme::default(), "Test".to_string())
    }

    fn controller() -> FormController<Transcript> {
        FormController::new(Transcript::new())
    }

    fn press(view: &mut FormView, controller: &mut FormController<Transcript>, code: KeyCode) -> Flow {
        view.handle_key(KeyEvent::new(code, KeyModifiers::NONE), controller)
    }

    fn type_str(view: &mut FormView, controller: &mut FormController<Transcript>, text: &str) {
        for c in text.chars() {
            press(view, controller, KeyCode::Char(c));
        }
    }

    #[test]
    fn backend_creation() {
        let _backend = RatatuiFormBackend::new();
        let _with_title = RatatuiFormBackend::new().with_title("Test");
        let _with_theme = RatatuiFormBackend::new().with_theme(Theme::default());
    }

    #[test]
    fn error_types() {
        let err = RatatuiFormError::Cancelled;
        assert_eq!(err.to_string(), "Form cancelled by user");
        assert!(FormError::from(err).is_cancelled());
    }

    #[test]
    fn theme_default() {
        let theme = Theme::default();
        assert_eq!(theme.primary, Color::Cyan);
        assert_eq!(theme.error, Color::Red);
    }

    #[test]
    fn typing_and_cursor_editing() {
        let (mut view, mut controller) = (view(), controller());
        type_str(&mut view, &mut controller, "Jonas");
        assert_eq!(controller.state().value(FieldId::Name), "Jonas");
        assert_eq!(view.cursor, 5);

        press(&mut view, &mut controller, KeyCode::Left);
        press(&mut view, &mut controller, KeyCode::Left);
        press(&mut view, &mut controller, KeyCode::Backspace);
        assert_eq!(controller.state().value(FieldId::Name), "Joas");

        press(&mut view, &mut controller, KeyCode::Home);
        press(&mut view, &mut controller, KeyCode::Delete);
        assert_eq!(controller.state().value(FieldId::Name), "oas");
        assert_eq!(view.cursor, 0);
    }

    #[test]
    fn navigation_stops_at_the_ends() {
        let (mut view, mut controller) = (view(), controller());
        press(&mut view, &mut controller, KeyCode::Up);
        assert_eq!(view.focus, Focus::Field(0));

        for _ in 0..20 {
            press(&mut view, &mut controller, KeyCode::Tab);
        }
        assert_eq!(view.focus, Focus::Save);

        press(&mut view, &mut controller, KeyCode::BackTab);
        assert_eq!(view.focused_field(), Some(FieldId::Behaviour));
    }

    #[test]
    fn selectors_cycle_with_wraparound() {
        let (mut view, mut controller) = (view(), controller());
        press(&mut view, &mut controller, KeyCode::Tab);
        press(&mut view, &mut controller, KeyCode::Tab);
        assert!(view.on_choice());

        press(&mut view, &mut controller, KeyCode::Right);
        assert_eq!(controller.state().value(FieldId::Gender), "Female");
        press(&mut view, &mut controller, KeyCode::Left);
        press(&mut view, &mut controller, KeyCode::Left);
        assert_eq!(controller.state().value(FieldId::Gender), "Male");
        press(&mut view, &mut controller, KeyCode::Char(' '));
        assert_eq!(controller.state().value(FieldId::Gender), "Select");
    }

    #[test]
    fn enter_on_an_invalid_name_clears_and_stays() {
        let (mut view, mut controller) = (view(), controller());
        type_str(&mut view, &mut controller, "jo");
        press(&mut view, &mut controller, KeyCode::Enter);

        assert_eq!(controller.state().value(FieldId::Name), "");
        assert_eq!(view.focus, Focus::Field(0));
        assert_eq!(view.cursor, 0);
        assert_eq!(
            view.error,
            Some((FieldId::Name, "Invalid Entry!".to_string()))
        );
        assert!(controller.console().contains("Please enter a valid one!"));

        type_str(&mut view, &mut controller, "J");
        assert_eq!(view.error, None);
    }

    #[test]
    fn enter_on_a_valid_field_moves_on() {
        let (mut view, mut controller) = (view(), controller());
        type_str(&mut view, &mut controller, "Jonas");
        press(&mut view, &mut controller, KeyCode::Enter);
        assert_eq!(view.focused_field(), Some(FieldId::Surname));
        assert!(view.messages.is_empty());
    }

    #[test]
    fn saving_a_complete_form() {
        let (mut view, mut controller) = (view(), controller());
        type_str(&mut view, &mut controller, "Jonas");
        press(&mut view, &mut controller, KeyCode::Tab);
        type_str(&mut view, &mut controller, "Smith");
        press(&mut view, &mut controller, KeyCode::Tab);
        press(&mut view, &mut controller, KeyCode::Right);
        press(&mut view, &mut controller, KeyCode::Tab);
        type_str(&mut view, &mut controller, "30");
        press(&mut view, &mut controller, KeyCode::Tab);
        type_str(&mut view, &mut controller, "Iceland");
        press(&mut view, &mut controller, KeyCode::Tab);
        type_str(&mut view, &mut controller, "Sing carols");
        press(&mut view, &mut controller, KeyCode::Tab);
        type_str(&mut view, &mut controller, "12");
        press(&mut view, &mut controller, KeyCode::Tab);
        press(&mut view, &mut controller, KeyCode::Right);
        press(&mut view, &mut controller, KeyCode::Tab);
        assert_eq!(view.focus, Focus::Save);

        press(&mut view, &mut controller, KeyCode::Enter);

        assert!(view.last_accepted);
        assert_eq!(view.messages[0], "Name Jonas");
        assert_eq!(view.messages[5], "Intentions Sing carols");
        assert_eq!(
            view.messages.last().map(String::as_str),
            Some("Get ready to jingle all the way!!")
        );
        assert_eq!(controller.console().lines(), view.messages.as_slice());
    }

    #[test]
    fn rejected_save_marks_the_field() {
        let (mut view, mut controller) = (view(), controller());
        type_str(&mut view, &mut controller, "Jonas");
        press(&mut view, &mut controller, KeyCode::Tab);
        type_str(&mut view, &mut controller, "Smith");
        press(&mut view, &mut controller, KeyCode::F(10));

        assert_eq!(
            view.error,
            Some((FieldId::Age, "Invalid entry!".to_string()))
        );
        assert!(!view.last_accepted);
    }

    #[test]
    fn escape_quits_and_ctrl_c_cancels() {
        let (mut view, mut controller) = (view(), controller());
        assert_eq!(press(&mut view, &mut controller, KeyCode::Esc), Flow::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(view.handle_key(ctrl_c, &mut controller), Flow::Cancel);
        assert_eq!(controller.state().value(FieldId::Name), "");
    }

    #[test]
    fn scrolling_follows_focus() {
        let mut view = view();
        view.focus = Focus::Field(6);
        view.adjust_scroll(3);
        assert_eq!(view.first_visible, 4);

        view.focus = Focus::Field(1);
        view.adjust_scroll(3);
        assert_eq!(view.first_visible, 1);

        view.focus = Focus::Save;
        view.adjust_scroll(8);
        assert_eq!(view.first_visible, 1);
    }
}
