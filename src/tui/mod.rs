// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Provides the interactive form shell (ratatui + crossterm): front-matter
//! fields, category picker, body editor, and the draft-on-quit flow.

use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use time::{format_description::FormatItem, macros::format_description, OffsetDateTime};
use tui_textarea::{CursorMove, TextArea};

use crate::model::{icon_for_category, ArticleRecord};
use crate::settings::Settings;
use crate::store::{DraftFolder, StoreError};
use crate::suggest::{OllamaSuggester, SuggestTags};

use self::theme::TuiTheme;

mod theme;

const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND_COLOR: Color = Color::White;
const FOOTER_BRAND: &str = "🅶 🅰 🅻 🅰 🆃 🅴 ";
const POLL_INTERVAL: Duration = Duration::from_millis(250);
const TOAST_TTL: Duration = Duration::from_secs(2);
const FALLBACK_CATEGORY: &str = "General";
const FAREWELL: &str = "Bye! 👋";

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Markdown container and highlight snippets shown in the cheat-sheet
/// sidebar.
const CHEAT_SHEET: &str = "\
::: important Custom important
...
:::
__
::: info Custom info
...
:::
__
::: note Custom note
...
:::
__
::: tip Custom tip
...
:::
__
::: warning Custom warning
...
:::
__
::: caution Custom caution
...
:::
__
Use == == to mark. ==highlighted==
";

/// Runs the interactive form editor and returns the farewell message to
/// print once the terminal is restored.
pub fn run(settings: Settings, folder: DraftFolder) -> Result<Option<String>, Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let mut app = App::new(settings, folder, theme)?;
    app.set_suggester(Box::new(OllamaSuggester::new()));

    let mut terminal = TerminalSession::new()?;
    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }
    drop(terminal);

    Ok(app.take_exit_message())
}

fn today_iso() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.date().format(&DATE_FORMAT).expect("format ISO date")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FieldInput {
    value: String,
    cursor: usize,
}

impl FieldInput {
    fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_cursor(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(idx, _)| idx)
            .unwrap_or(self.value.len())
    }

    fn insert(&mut self, ch: char) {
        let at = self.byte_cursor();
        self.value.insert(at, ch);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_cursor();
        self.value.remove(at);
    }

    fn delete(&mut self) {
        let at = self.byte_cursor();
        if at < self.value.len() {
            self.value.remove(at);
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(ch) => self.insert(ch),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.value.chars().count()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.value.chars().count(),
            _ => {}
        }
    }
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    warn: bool,
    expires_at: Instant,
}

/// The form values a session started from; quitting compares against this
/// snapshot to decide whether a draft is worth writing.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FormSnapshot {
    title: String,
    author: String,
    date: String,
    category: String,
    tags: String,
    body: String,
}

struct App {
    folder: DraftFolder,
    suggester: Option<Box<dyn SuggestTags>>,
    theme: TuiTheme,
    dark: bool,
    focus: FormField,
    title: FieldInput,
    author: FieldInput,
    date: FieldInput,
    tags: FieldInput,
    categories: Vec<String>,
    category_index: usize,
    category_open: bool,
    category_cursor: usize,
    body: TextArea<'static>,
    initial: FormSnapshot,
    source_filename: Option<String>,
    zen_mode: bool,
    sidebar_visible: bool,
    toast: Option<Toast>,
    exit_message: Option<String>,
    should_quit: bool,
}

impl App {
    fn new(settings: Settings, folder: DraftFolder, theme: TuiTheme) -> Result<Self, StoreError> {
        let loaded = folder.load_draft()?;
        let ignored = loaded.as_ref().map(|draft| draft.ignored()).unwrap_or(0);
        let draft = loaded.map(|draft| draft.into_record());

        let mut categories: Vec<String> = settings.categories().to_vec();
        if categories.is_empty() {
            categories.push(FALLBACK_CATEGORY.to_owned());
        }

        let (title, author, date, category, tags, body_text, source_filename) = match &draft {
            Some(record) => (
                record.title().to_owned(),
                record.author().to_owned(),
                record.date().to_owned(),
                record.category().to_owned(),
                record.tags().to_owned(),
                record.body().to_owned(),
                record.source_filename().map(str::to_owned),
            ),
            None => (
                String::new(),
                settings.author().to_owned(),
                today_iso(),
                FALLBACK_CATEGORY.to_owned(),
                String::new(),
                settings.textarea_default_content().to_owned(),
                None,
            ),
        };

        let category = if category.is_empty() {
            FALLBACK_CATEGORY.to_owned()
        } else {
            category
        };
        let category_index = match categories.iter().position(|name| name == &category) {
            Some(idx) => idx,
            None => {
                categories.push(category.clone());
                categories.len() - 1
            }
        };

        let initial = FormSnapshot {
            title: title.clone(),
            author: author.clone(),
            date: date.clone(),
            category: categories[category_index].clone(),
            tags: tags.clone(),
            body: body_text.clone(),
        };

        let dark = !settings.theme().to_ascii_lowercase().contains("light");

        let mut app = Self {
            folder,
            suggester: None,
            theme,
            dark,
            focus: FormField::Title,
            title: FieldInput::with_value(title),
            author: FieldInput::with_value(author),
            date: FieldInput::with_value(date),
            tags: FieldInput::with_value(tags),
            categories,
            category_index,
            category_open: false,
            category_cursor: 0,
            body: TextArea::from(body_text.lines()),
            initial,
            source_filename,
            zen_mode: false,
            sidebar_visible: false,
            toast: None,
            exit_message: None,
            should_quit: false,
        };

        // The editor normalizes line endings (and drops a trailing newline),
        // so the dirty-check baseline must come from the editor, not the
        // raw file text.
        app.initial.body = app.body_text();

        if ignored > 0 {
            app.set_warn_toast(format!("{ignored} other draft file(s) ignored"));
        }

        Ok(app)
    }

    fn set_suggester(&mut self, suggester: Box<dyn SuggestTags>) {
        self.suggester = Some(suggester);
    }

    fn selected_category(&self) -> &str {
        &self.categories[self.category_index]
    }

    fn body_text(&self) -> String {
        self.body.lines().join("\n")
    }

    fn current_record(&self) -> ArticleRecord {
        let category = self.selected_category();
        ArticleRecord::new(
            self.title.value(),
            self.author.value(),
            self.date.value(),
            icon_for_category(category),
            category,
            self.tags.value(),
            self.body_text(),
        )
    }

    fn form_has_changed(&self) -> bool {
        self.initial.title != self.title.value()
            || self.initial.author != self.author.value()
            || self.initial.date != self.date.value()
            || self.initial.category != self.selected_category()
            || self.initial.tags != self.tags.value()
            || self.initial.body != self.body_text()
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => {
                    self.zen_mode = !self.zen_mode;
                    return;
                }
                KeyCode::Char('z') => {
                    self.sidebar_visible = !self.sidebar_visible;
                    return;
                }
                KeyCode::Char('t') => {
                    self.dark = !self.dark;
                    return;
                }
                KeyCode::Char('w') => {
                    self.save_article();
                    return;
                }
                KeyCode::Char('q') => {
                    self.quit();
                    return;
                }
                _ => {}
            }
        }

        if self.category_open {
            self.handle_category_popup_key(key.code);
            return;
        }

        match self.focus {
            FormField::Body => self.handle_body_key(key),
            FormField::Category => self.handle_category_key(key.code),
            FormField::Save => self.handle_save_key(key.code),
            _ => self.handle_text_field_key(key.code),
        }
    }

    fn handle_text_field_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => self.focus = self.focus.cycle(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.cycle_back(),
            other => {
                if let Some(field) = self.focused_input_mut() {
                    field.handle_key(other);
                }
            }
        }
    }

    fn focused_input_mut(&mut self) -> Option<&mut FieldInput> {
        match self.focus {
            FormField::Title => Some(&mut self.title),
            FormField::Author => Some(&mut self.author),
            FormField::Date => Some(&mut self.date),
            FormField::Tags => Some(&mut self.tags),
            _ => None,
        }
    }

    fn handle_category_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.category_open = true;
                self.category_cursor = self.category_index;
            }
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.cycle(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.cycle_back(),
            _ => {}
        }
    }

    fn handle_category_popup_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.category_open = false,
            KeyCode::Up => self.category_cursor = self.category_cursor.saturating_sub(1),
            KeyCode::Down => {
                self.category_cursor = (self.category_cursor + 1).min(self.categories.len() - 1);
            }
            KeyCode::Enter => {
                self.category_open = false;
                self.category_index = self.category_cursor;
                self.maybe_suggest_tags();
            }
            _ => {}
        }
    }

    fn handle_save_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.save_article(),
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.cycle(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.cycle_back(),
            _ => {}
        }
    }

    fn handle_body_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('(') => {
                self.body.insert_str("()");
                self.body.move_cursor(CursorMove::Back);
            }
            KeyCode::Char('!') if self.body.cursor().1 == 0 => {
                self.body.insert_str("![alt](\"alt\")");
                for _ in 0..6 {
                    self.body.move_cursor(CursorMove::Back);
                }
            }
            KeyCode::Tab if self.cursor_on_last_body_line() => self.focus = self.focus.cycle(),
            KeyCode::BackTab => self.focus = self.focus.cycle_back(),
            _ => {
                self.body.input(key);
            }
        }
    }

    fn cursor_on_last_body_line(&self) -> bool {
        self.body.cursor().0 + 1 == self.body.lines().len()
    }

    /// Asks the suggestion collaborator to prefill the tags field. Runs only
    /// while the field is still empty so typed tags are never clobbered.
    fn maybe_suggest_tags(&mut self) {
        if !self.tags.value().is_empty() {
            return;
        }
        let Some(suggester) = self.suggester.as_deref() else {
            return;
        };

        match suggester.suggest(self.selected_category(), self.title.value()) {
            Ok(tags) => {
                self.tags.set_value(tags);
                self.set_toast("Tags suggested");
            }
            Err(err) => self.set_warn_toast(format!("No tag suggestion: {err}")),
        }
    }

    fn save_article(&mut self) {
        let record = self.current_record();
        match self.folder.save(&record, false) {
            Ok(path) => {
                self.exit_message = Some(format!("Article saved as {}!\n{FAREWELL}", path.display()));
                self.should_quit = true;
            }
            Err(err) => self.set_warn_toast(format!("Save failed: {err}")),
        }
    }

    fn quit(&mut self) {
        if !self.form_has_changed() {
            self.exit_message = Some(FAREWELL.to_owned());
            self.should_quit = true;
            return;
        }

        let record = self.current_record();
        match self.folder.save(&record, true) {
            Ok(path) => {
                self.exit_message = Some(format!("Article saved as {}!\n{FAREWELL}", path.display()));
                self.should_quit = true;
            }
            Err(err) => self.set_warn_toast(format!("Draft save failed: {err}")),
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            warn: false,
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    fn set_warn_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            warn: true,
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    fn active_toast(&self) -> Option<&Toast> {
        self.toast.as_ref().filter(|toast| Instant::now() < toast.expires_at)
    }

    fn take_exit_message(&mut self) -> Option<String> {
        self.exit_message.take()
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();
    let base = app.theme.base_style(app.dark);
    frame.render_widget(Block::default().style(base), area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let header_area = layout[0];
    let mut main_area = layout[1];
    let status_area = layout[2];

    draw_header(frame, app, header_area);

    if app.sidebar_visible && !app.zen_mode {
        let (form_area, sidebar_area) = split_off_sidebar(main_area);
        draw_sidebar(frame, app, sidebar_area);
        main_area = form_area;
    }

    if app.zen_mode {
        draw_body(frame, app, main_area);
    } else {
        draw_form(frame, app, main_area);
    }

    if app.category_open {
        draw_category_popup(frame, app, area);
    }

    draw_status(frame, app, status_area);
}

fn draw_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let source = match &app.source_filename {
        Some(filename) => format!("draft: {filename}"),
        None => "new article".to_owned(),
    };
    let line = Line::from(vec![
        Span::styled(" Galatea ", app.theme.label_style(app.dark).add_modifier(Modifier::BOLD)),
        Span::styled(format!("· {source} "), app.theme.base_style(app.dark)),
    ]);
    frame.render_widget(Paragraph::new(line).style(app.theme.base_style(app.dark)), area);
}

fn draw_form(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let rects = form_layout(area);

    draw_text_field(frame, app, FormField::Title, rects[0]);
    draw_text_field(frame, app, FormField::Author, rects[1]);
    draw_text_field(frame, app, FormField::Date, rects[2]);
    draw_category_field(frame, app, rects[3]);
    draw_text_field(frame, app, FormField::Tags, rects[4]);
    draw_body(frame, app, rects[5]);
    draw_save_button(frame, app, rects[6]);
}

fn draw_text_field(frame: &mut Frame<'_>, app: &App, field: FormField, area: Rect) {
    let focused = app.focus == field;
    let input = match field {
        FormField::Title => &app.title,
        FormField::Author => &app.author,
        FormField::Date => &app.date,
        FormField::Tags => &app.tags,
        _ => return,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(field_title(field.label()))
        .border_style(app.theme.field_border_style(app.dark, focused));
    let inner = block.inner(area);
    frame.render_widget(
        Paragraph::new(input.value().to_owned()).style(app.theme.base_style(app.dark)).block(block),
        area,
    );

    if focused && !app.category_open {
        let x = inner.x + u16::try_from(input.cursor()).unwrap_or(u16::MAX).min(inner.width.saturating_sub(1));
        frame.set_cursor(x, inner.y);
    }
}

fn draw_category_field(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focus == FormField::Category;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(field_title(FormField::Category.label()))
        .border_style(app.theme.field_border_style(app.dark, focused));
    frame.render_widget(
        Paragraph::new(format!("{} ▾", app.selected_category()))
            .style(app.theme.base_style(app.dark))
            .block(block),
        area,
    );
}

fn draw_body(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let focused = app.focus == FormField::Body;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(field_title(FormField::Body.label()))
        .border_style(app.theme.field_border_style(app.dark, focused));
    app.body.set_block(block);
    app.body.set_style(app.theme.base_style(app.dark));
    app.body.set_cursor_line_style(app.theme.base_style(app.dark));
    frame.render_widget(app.body.widget(), area);
}

fn draw_save_button(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focus == FormField::Save;
    let button = Paragraph::new("[ Save ]")
        .alignment(Alignment::Center)
        .style(app.theme.button_style(app.dark, focused));
    frame.render_widget(button, area);
}

fn draw_sidebar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(field_title("Cheat Sheet"))
        .border_style(app.theme.base_style(app.dark));
    frame.render_widget(
        Paragraph::new(CHEAT_SHEET)
            .style(app.theme.base_style(app.dark))
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

fn draw_category_popup(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let longest = app.categories.iter().map(|name| name.len()).max().unwrap_or(0);
    let width = u16::try_from(longest + 6).unwrap_or(u16::MAX).clamp(20, 40);
    let height = u16::try_from(app.categories.len() + 2).unwrap_or(u16::MAX).min(12);
    let popup = centered_popup(area, width, height);

    let items: Vec<ListItem<'_>> =
        app.categories.iter().map(|name| ListItem::new(name.clone())).collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(field_title("Category"))
                .border_style(app.theme.field_border_style(app.dark, true)),
        )
        .style(app.theme.base_style(app.dark))
        .highlight_style(app.theme.selection_style(app.dark));

    let mut state = ListState::default();
    state.select(Some(app.category_cursor));

    frame.render_widget(Clear, popup);
    frame.render_stateful_widget(list, popup, &mut state);
}

fn draw_status(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let paragraph = match app.active_toast() {
        Some(toast) => {
            let style = if toast.warn {
                app.theme.warn_style(app.dark)
            } else {
                app.theme.toast_style(app.dark)
            };
            Paragraph::new(toast.message.clone()).style(style)
        }
        None => Paragraph::new(footer_help_line()).style(app.theme.base_style(app.dark)),
    };
    frame.render_widget(paragraph, area);
}

include!("chrome.rs");

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}
