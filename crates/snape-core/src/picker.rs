//! Selection and filter state for the snippet list.
//!
//! A [`Picker`] owns the loaded snippets and everything the list view needs:
//! which snippets are visible, where the cursor is, whether the user is
//! typing a filter, and the letter shortcut bound to each visible row. The
//! presentation layer feeds it [`Input`] values through [`Picker::dispatch`]
//! and acts on the returned [`Outcome`].
//!
//! Visible rows are stored as indices into the full list, so filtering never
//! reorders or copies snippets. The cursor is only meaningful while at least
//! one row is visible.

use crate::models::Snippet;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Filter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Named keys the picker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Escape,
    Backspace,
}

/// A user action reported by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Key(Key),
    Char(char),
    /// Click on a visible row.
    Click(usize),
    OpenFolder,
}

/// What the host has to do after an input was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// The session is over; copy this snippet.
    Selected(Snippet),
    /// The session is over without a selection.
    Quit,
    ShowHelp,
    OpenFolder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picker {
    all: Vec<Snippet>,
    visible: Vec<usize>,
    cursor: usize,
    mode: Mode,
    filter: String,
    shortcuts: HashMap<char, usize>,
}

impl Picker {
    pub fn new(snippets: Vec<Snippet>) -> Self {
        let mut picker = Picker {
            visible: (0..snippets.len()).collect(),
            all: snippets,
            cursor: 0,
            mode: Mode::Normal,
            filter: String::new(),
            shortcuts: HashMap::new(),
        };
        picker.shortcuts = build_shortcuts(picker.visible.len());
        picker
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn filter_text(&self) -> &str {
        &self.filter
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Snippets currently shown, in list order.
    pub fn visible(&self) -> impl ExactSizeIterator<Item = &Snippet> + '_ {
        self.visible.iter().map(|&idx| &self.all[idx])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// The snippet under the cursor, if any row is visible.
    pub fn selected(&self) -> Option<&Snippet> {
        self.visible.get(self.cursor).map(|&idx| &self.all[idx])
    }

    /// Letter shown next to the visible row at `index`.
    pub fn shortcut_for(&self, index: usize) -> char {
        index_char(index)
    }

    /// Row selected by typing `c`, if any.
    pub fn shortcut_target(&self, c: char) -> Option<usize> {
        self.shortcuts.get(&c).copied()
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Up => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            Direction::Down => {
                if self.cursor + 1 < self.visible.len() {
                    self.cursor += 1;
                }
            }
        }
    }

    /// Start typing a filter. Returns `false` if already filtering.
    pub fn enter_filter_mode(&mut self) -> bool {
        if self.mode != Mode::Normal {
            return false;
        }
        self.mode = Mode::Filter;
        self.filter.clear();
        true
    }

    pub fn type_filter_char(&mut self, c: char) -> bool {
        if self.mode != Mode::Filter {
            return false;
        }
        self.filter.push(c);
        self.apply_filter();
        true
    }

    pub fn backspace_filter(&mut self) -> bool {
        if self.mode != Mode::Filter || self.filter.pop().is_none() {
            return false;
        }
        self.apply_filter();
        true
    }

    /// Leave filter mode and show the full list again. Returns `false` and
    /// changes nothing when not filtering.
    pub fn exit_filter_mode(&mut self) -> bool {
        if self.mode != Mode::Filter {
            return false;
        }
        self.mode = Mode::Normal;
        self.filter.clear();
        self.set_visible((0..self.all.len()).collect());
        true
    }

    /// Jump to the row bound to `c` and commit it.
    pub fn select_by_shortcut(&mut self, c: char) -> Outcome {
        match self.shortcut_target(c) {
            Some(index) => {
                self.cursor = index;
                self.commit_selection()
            }
            None => Outcome::Continue,
        }
    }

    /// Select the visible row at `index` and commit it.
    pub fn select_at(&mut self, index: usize) -> Outcome {
        if index >= self.visible.len() {
            return Outcome::Continue;
        }
        self.cursor = index;
        self.commit_selection()
    }

    pub fn commit_selection(&self) -> Outcome {
        match self.selected() {
            Some(snippet) => Outcome::Selected(snippet.clone()),
            None => Outcome::Continue,
        }
    }

    /// End the session without a selection. Only allowed outside filter mode.
    pub fn quit(&self) -> Outcome {
        match self.mode {
            Mode::Normal => Outcome::Quit,
            Mode::Filter => Outcome::Continue,
        }
    }

    /// Route one input to the matching transition.
    pub fn dispatch(&mut self, input: Input) -> Outcome {
        match input {
            Input::Key(Key::Up) => self.move_cursor(Direction::Up),
            Input::Key(Key::Down) => self.move_cursor(Direction::Down),
            Input::Key(Key::Enter) => return self.commit_selection(),
            Input::Click(index) => return self.select_at(index),
            Input::OpenFolder => return Outcome::OpenFolder,
            Input::Key(Key::Escape) => match self.mode {
                Mode::Normal => return self.quit(),
                Mode::Filter => {
                    self.exit_filter_mode();
                }
            },
            Input::Key(Key::Backspace) => {
                self.backspace_filter();
            }
            Input::Char(c) => match self.mode {
                Mode::Filter => {
                    self.type_filter_char(c);
                }
                Mode::Normal => match c {
                    '/' => {
                        self.enter_filter_mode();
                    }
                    '?' => return Outcome::ShowHelp,
                    _ => return self.select_by_shortcut(c),
                },
            },
        }
        Outcome::Continue
    }

    fn apply_filter(&mut self) {
        let visible = if self.filter.is_empty() {
            (0..self.all.len()).collect()
        } else {
            let needle = self.filter.to_lowercase();
            self.all
                .iter()
                .enumerate()
                .filter(|(_, snippet)| snippet.matches(&needle))
                .map(|(idx, _)| idx)
                .collect()
        };
        self.set_visible(visible);
    }

    fn set_visible(&mut self, visible: Vec<usize>) {
        self.visible = visible;
        self.cursor = 0;
        self.shortcuts = build_shortcuts(self.visible.len());
    }
}

/// Shortcut letter for a row: `a`-`z`, then `A`-`Z`, then `a`-`z` again.
pub fn index_char(index: usize) -> char {
    let offset = match index {
        0..=25 => b'a' + index as u8,
        26..=51 => b'A' + (index - 26) as u8,
        _ => b'a' + (index % 26) as u8,
    };
    offset as char
}

/// Map every shortcut letter to its row. Rows are inserted in ascending
/// order, so a letter shared by wrapped rows resolves to the highest one.
pub fn build_shortcuts(len: usize) -> HashMap<char, usize> {
    let mut shortcuts = HashMap::with_capacity(len.min(52));
    for index in 0..len {
        shortcuts.insert(index_char(index), index);
    }
    shortcuts
}
