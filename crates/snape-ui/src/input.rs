use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use snape_core::{Input, Key};

/// A terminal event as far as the picker loop cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Picker(Input),
    /// Ctrl+C: leave immediately, whatever the mode.
    Interrupt,
}

/// Where the list rows were last drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListGeometry {
    /// Row area inside the list border.
    pub rows: Rect,
    /// Index of the visible snippet drawn on the first row.
    pub offset: usize,
}

impl ListGeometry {
    /// Visible-list index under a screen cell, if it is on a row.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let inside = column >= self.rows.x
            && column < self.rows.right()
            && row >= self.rows.y
            && row < self.rows.bottom();
        inside.then(|| self.offset + (row - self.rows.y) as usize)
    }
}

pub fn translate_event(event: Event, geometry: &ListGeometry) -> Option<Action> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse, geometry),
        _ => None,
    }
}

pub fn translate_key(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Interrupt),
            KeyCode::Char('o') => Some(Action::Picker(Input::OpenFolder)),
            _ => None,
        };
    }

    let input = match key.code {
        KeyCode::Up => Input::Key(Key::Up),
        KeyCode::Down => Input::Key(Key::Down),
        KeyCode::Enter => Input::Key(Key::Enter),
        KeyCode::Esc => Input::Key(Key::Escape),
        KeyCode::Backspace => Input::Key(Key::Backspace),
        KeyCode::Char(c) => Input::Char(c),
        _ => return None,
    };
    Some(Action::Picker(input))
}

fn translate_mouse(mouse: MouseEvent, geometry: &ListGeometry) -> Option<Action> {
    let input = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            Input::Click(geometry.row_at(mouse.column, mouse.row)?)
        }
        MouseEventKind::ScrollUp => Input::Key(Key::Up),
        MouseEventKind::ScrollDown => Input::Key(Key::Down),
        _ => return None,
    };
    Some(Action::Picker(input))
}
