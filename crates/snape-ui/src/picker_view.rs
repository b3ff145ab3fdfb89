use crate::common::{centered_rect, picker_area, show_message};
use crate::help::help_lines;
use crate::input::{translate_event, Action, ListGeometry};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Terminal,
};
use snape_core::{
    open_snippets_folder, Mode, Outcome, Picker, Result, SnapeError, Snippet, WindowSize,
};
use std::io::{self, stdout};
use std::path::Path;

type CrosstermTerminal = Terminal<CrosstermBackend<io::Stdout>>;

struct PickerState {
    picker: Picker,
    show_help: bool,
    geometry: ListGeometry,
}

/// Show the snippet list and return the snippet the user picked, or `None`
/// if they quit.
pub fn display_snippet_picker(
    snippets: Vec<Snippet>,
    snippets_dir: Option<&Path>,
    size: WindowSize,
) -> Result<Option<Snippet>> {
    let mut state = PickerState {
        picker: Picker::new(snippets),
        show_help: false,
        geometry: ListGeometry::default(),
    };

    with_terminal(|terminal| run_picker(terminal, &mut state, snippets_dir, size))
}

/// Show a load failure in place of the list until a key is pressed.
pub fn display_load_error(message: &str, size: WindowSize) -> Result<()> {
    with_terminal(|terminal| {
        terminal.draw(|f| {
            let area = picker_area(size, f.size());
            let text = vec![
                Line::from(Span::styled(
                    "✗ Error",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(message.to_string()),
                Line::from(""),
                Line::from(Span::styled(
                    "Press any key to quit",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            let error = Paragraph::new(text)
                .block(Block::default().borders(Borders::ALL).title(" Snape "))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(error, area);
        })?;

        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    return Ok(());
                }
            }
        }
    })
}

fn with_terminal<T>(run: impl FnOnce(&mut CrosstermTerminal) -> Result<T>) -> Result<T> {
    guarded(setup_terminal, run, restore_terminal)
}

fn setup_terminal() -> io::Result<CrosstermTerminal> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout()))
}

/// Undo every setup step, even the ones that never happened, and report the
/// first failure.
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    raw.and(screen)
}

/// Run `body` on what `setup` produced, then always call `cleanup`, including
/// when `setup` failed halfway. The first error wins.
fn guarded<S, T>(
    setup: impl FnOnce() -> io::Result<S>,
    body: impl FnOnce(&mut S) -> Result<T>,
    cleanup: impl FnOnce() -> io::Result<()>,
) -> Result<T> {
    let result = setup()
        .map_err(SnapeError::from)
        .and_then(|mut state| body(&mut state));
    let restored = cleanup();

    let value = result?;
    restored?;
    Ok(value)
}

/// Main UI loop
fn run_picker(
    terminal: &mut CrosstermTerminal,
    state: &mut PickerState,
    snippets_dir: Option<&Path>,
    size: WindowSize,
) -> Result<Option<Snippet>> {
    loop {
        terminal.draw(|f| {
            let picker = &state.picker;
            let hint_style = Style::default().fg(Color::DarkGray);

            let area = picker_area(size, f.size());
            let frame = Block::default()
                .borders(Borders::ALL)
                .title(" Snape ")
                .style(Style::default().fg(Color::White));
            let layout = picker_layout(frame.inner(area), picker.mode());
            f.render_widget(frame, area);

            f.render_widget(
                Paragraph::new(header_text(picker.mode())).style(hint_style),
                layout.header,
            );
            if let Some(prompt) = layout.prompt {
                let search = Paragraph::new(filter_prompt(picker.filter_text())).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                );
                f.render_widget(search, prompt);
            }
            if let Some(footer) = layout.footer {
                f.render_widget(
                    Paragraph::new("Ctrl+O: open snippets folder").style(hint_style),
                    footer,
                );
            }

            let height = layout.list.height as usize;
            let offset = scroll_offset(picker.cursor(), state.geometry.offset, height);
            if picker.visible_len() == 0 {
                let text = if picker.is_empty() {
                    "No snippets found"
                } else {
                    "No matching snippets"
                };
                f.render_widget(
                    Paragraph::new(text)
                        .style(hint_style)
                        .alignment(Alignment::Center),
                    layout.list,
                );
            } else {
                f.render_widget(List::new(list_items(picker, offset, height)), layout.list);
            }
            state.geometry = ListGeometry {
                rows: layout.list,
                offset,
            };

            if state.show_help {
                let popup = centered_rect(90, 90, f.size());
                let help = Paragraph::new(help_lines(snippets_dir))
                    .block(Block::default().borders(Borders::ALL).title(" About "))
                    .wrap(Wrap { trim: false });
                f.render_widget(Clear, popup);
                f.render_widget(help, popup);
            }
        })?;

        let event = event::read()?;

        if state.show_help {
            if let Event::Key(key) = event {
                if key.kind != KeyEventKind::Release {
                    state.show_help = false;
                }
            }
            continue;
        }

        let input = match translate_event(event, &state.geometry) {
            Some(Action::Picker(input)) => input,
            Some(Action::Interrupt) => return Ok(None),
            None => continue,
        };

        match state.picker.dispatch(input) {
            Outcome::Continue => {}
            Outcome::Selected(snippet) => return Ok(Some(snippet)),
            Outcome::Quit => return Ok(None),
            Outcome::ShowHelp => state.show_help = true,
            Outcome::OpenFolder => open_folder(terminal, snippets_dir)?,
        }
    }
}

fn open_folder(terminal: &mut CrosstermTerminal, snippets_dir: Option<&Path>) -> Result<()> {
    let message = match snippets_dir {
        Some(dir) => match open_snippets_folder(dir) {
            Ok(()) => return Ok(()),
            Err(e) => format!("Could not open {}: {}", dir.display(), e),
        },
        None => "No snippets folder available".to_string(),
    };
    show_message(terminal, &message, Color::Red, 2000)
}

/// Screen regions of the picker frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PickerLayout {
    pub header: Rect,
    pub prompt: Option<Rect>,
    pub list: Rect,
    pub footer: Option<Rect>,
}

/// Split the inside of the picker frame: filter mode trades the folder hint
/// at the bottom for a search prompt above the list.
pub(crate) fn picker_layout(inner: Rect, mode: Mode) -> PickerLayout {
    match mode {
        Mode::Normal => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Help text
                    Constraint::Min(1),    // Snippet rows
                    Constraint::Length(1), // Folder hint
                ])
                .split(inner);
            PickerLayout {
                header: chunks[0],
                prompt: None,
                list: chunks[1],
                footer: Some(chunks[2]),
            }
        }
        Mode::Filter => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Help text
                    Constraint::Length(1), // Search prompt
                    Constraint::Min(1),    // Snippet rows
                ])
                .split(inner);
            PickerLayout {
                header: chunks[0],
                prompt: Some(chunks[1]),
                list: chunks[2],
                footer: None,
            }
        }
    }
}

fn header_text(mode: Mode) -> &'static str {
    match mode {
        Mode::Normal => "↑↓ Enter or [index] | / filter | ? help",
        Mode::Filter => "Filter mode - ESC to leave | ↑↓ Enter to select",
    }
}

/// Rows for the visible snippets starting at `offset`.
fn list_items(picker: &Picker, offset: usize, height: usize) -> Vec<ListItem<'static>> {
    picker
        .visible()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(index, snippet)| {
            row_item(
                picker.shortcut_for(index),
                &snippet.display_name,
                index == picker.cursor(),
            )
        })
        .collect()
}

fn row_item(shortcut: char, name: &str, selected: bool) -> ListItem<'static> {
    let marker = if selected {
        Span::styled(
            "> ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("  ")
    };

    let line = Line::from(vec![
        marker,
        Span::styled(format!("[{}]", shortcut), Style::default().fg(Color::Red)),
        Span::raw("  "),
        Span::raw(name.to_string()),
    ]);

    if selected {
        ListItem::new(line).style(Style::default().bg(Color::DarkGray))
    } else {
        ListItem::new(line)
    }
}

pub(crate) fn filter_prompt(filter: &str) -> String {
    format!("Search: {}▌", filter)
}

/// First visible row so that `cursor` stays on screen, moving as little as
/// possible from the previous `offset`.
pub(crate) fn scroll_offset(cursor: usize, offset: usize, height: usize) -> usize {
    if height == 0 {
        cursor
    } else if cursor >= offset + height {
        cursor + 1 - height
    } else if cursor < offset {
        cursor
    } else {
        offset
    }
}
