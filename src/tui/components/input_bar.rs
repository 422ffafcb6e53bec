//! # InputBar Component
//!
//! The line being typed, echoed above the bottom edge of the screen.
//!
//! ```text
//! ________________________________   row 0: separator
//! hello wor_                         row 1: buffer + cursor glyph
//!                                    row 2: empty
//! ```
//!
//! ## State Management
//!
//! The buffer is the only state that survives between frames besides the
//! screen geometry. Sending is not decided here: on Enter the bar reports
//! `SubmitRequested` and the dispatcher calls [`InputBar::take`] only when
//! there is a room to send to.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Clear;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const CURSOR_GLYPH: char = '_';

/// High-level events emitted by the InputBar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Enter pressed. The buffer is left untouched.
    SubmitRequested,
    ContentChanged,
}

#[derive(Debug, Default)]
pub struct InputBar {
    pub buffer: String,
}

impl InputBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the buffer for sending and clear it.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    /// Buffer plus cursor glyph, keeping only the tail that fits `width`.
    fn echo(&self, width: u16) -> String {
        let text: String = self.buffer.chars().chain([CURSOR_GLYPH]).collect();
        let overflow = text.chars().count().saturating_sub(usize::from(width));
        text.chars().skip(overflow).collect()
    }
}

impl Component for InputBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        if area.is_empty() {
            return;
        }
        let width = usize::from(area.width);
        let buf = frame.buffer_mut();

        buf.set_stringn(area.x, area.y, "_".repeat(width), width, Style::default());
        if area.height > 1 {
            buf.set_stringn(area.x, area.y + 1, self.echo(area.width), width, Style::default());
        }
    }
}

impl EventHandler for InputBar {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                self.buffer
                    .extend(text.chars().map(|c| if c == '\n' || c == '\r' { ' ' } else { c }));
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => self
                .buffer
                .pop()
                .map(|_| InputEvent::ContentChanged),
            TuiEvent::Submit => Some(InputEvent::SubmitRequested),
            _ => None,
        }
    }
}
