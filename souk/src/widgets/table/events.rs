//! Event handling for the data table.

use soukdom::{Event, Key};

use crate::widgets::events::EventResult;

use super::item::TableRow;
use super::render::{FILTER_PART, HEADER_PART};
use super::DataTable;

/// Which part of the table an element id points at.
enum Part<'a> {
    Header(&'a str),
    Filter(&'a str),
}

impl<R: TableRow> DataTable<R> {
    fn part_of<'a>(&self, target: &'a str) -> Option<Part<'a>> {
        let rest = target.strip_prefix(self.id.as_str())?;
        if let Some(key) = rest.strip_prefix(HEADER_PART) {
            return self.column(key).map(|_| Part::Header(key));
        }
        if let Some(key) = rest.strip_prefix(FILTER_PART) {
            return self.column(key).map(|_| Part::Filter(key));
        }
        None
    }

    /// Whether `target` is an element this table built.
    pub fn owns(&self, target: &str) -> bool {
        self.part_of(target).is_some()
    }

    /// Map a targeted event onto a sort or filter operation.
    ///
    /// Headers activate on left click, Enter or Space. Filter inputs take
    /// printable characters, Backspace, and Ctrl+U to clear.
    pub fn handle_event(&self, event: &Event) -> EventResult {
        let Some(target) = event.target() else {
            return EventResult::Ignored;
        };
        match self.part_of(target) {
            Some(Part::Header(key)) => self.on_header_event(key, event),
            Some(Part::Filter(key)) => self.on_filter_event(key, event),
            None => EventResult::Ignored,
        }
    }

    fn on_header_event(&self, key: &str, event: &Event) -> EventResult {
        if event.is_activation() {
            self.activate_header(key)
        } else {
            EventResult::Ignored
        }
    }

    fn on_filter_event(&self, key: &str, event: &Event) -> EventResult {
        let Event::Key {
            key: pressed,
            modifiers,
            ..
        } = event
        else {
            return match event {
                Event::Click { .. } => EventResult::Consumed,
                _ => EventResult::Ignored,
            };
        };

        match pressed {
            Key::Char('u') if modifiers.ctrl => self.change_filter(key, ""),
            Key::Char(c) if !modifiers.ctrl && !modifiers.alt => {
                let mut text = self.filter_text(key);
                text.push(*c);
                self.change_filter(key, &text)
            }
            Key::Backspace => {
                let mut text = self.filter_text(key);
                if text.pop().is_none() {
                    return EventResult::Consumed;
                }
                self.change_filter(key, &text)
            }
            _ => EventResult::Ignored,
        }
    }
}
