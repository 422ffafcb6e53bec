//! # ChatPane Component
//!
//! Bottom-anchored scrollback for the selected room.
//!
//! ## Assembly
//!
//! Messages are taken newest first. Each one is decoded, formatted as
//! `"<user>: <text>"` and wrapped to the pane width. Collection stops once
//! the wrapped lines fill the pane; the last message taken may overflow the
//! top edge, in which case only its bottom lines are kept.
//!
//! ```text
//!  ┌──────────────────────┐
//!  │ ...end of older msg  │  ← clipped entry (no username overlay)
//!  │ bob: second message  │
//!  │ alice: newest message│
//!  │ wraps onto two lines │  ← last row of the pane
//!  └──────────────────────┘
//! ```
//!
//! Nothing is cached: the pane is rebuilt from the room every frame, so the
//! cost is bounded by the pane height, not by the history length.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Clear;

use crate::core::entity::decode;
use crate::core::session::ChatMessage;
use crate::tui::component::Component;
use crate::tui::text_wrap::wrap;

/// One message, wrapped and positioned inside the pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawEntry {
    pub username: String,
    /// Visible wrapped lines, top to bottom.
    pub lines: Vec<String>,
    /// Pane row of `lines[0]`.
    pub row: u16,
    /// Lines cut off above the pane. The username overlay is only drawn when 0.
    pub clipped: usize,
}

/// Select and position the newest messages that fit a `width` x `height` pane.
///
/// Entries come back top to bottom (oldest first). Their visible lines never
/// add up to more than `height`, and the newest entry always ends on the
/// last row.
pub fn assemble(messages: &[ChatMessage], width: u16, height: u16) -> Vec<DrawEntry> {
    let budget = usize::from(height);
    let mut wrapped: Vec<(String, Vec<String>)> = Vec::new();
    let mut total = 0usize;

    for message in messages.iter().rev() {
        if total >= budget {
            break;
        }
        let text = decode(&format!("{}: {}", message.user, message.text));
        let lines = wrap(&text, width);
        total += lines.len();
        wrapped.push((message.user.clone(), lines));
    }

    let mut bottom = budget;
    let mut entries = Vec::with_capacity(wrapped.len());
    for (username, lines) in wrapped {
        let clipped = lines.len().saturating_sub(bottom);
        let top = bottom + clipped - lines.len();
        let visible = lines.into_iter().skip(clipped).collect::<Vec<_>>();
        if visible.is_empty() {
            continue;
        }
        entries.push(DrawEntry {
            username,
            lines: visible,
            row: u16::try_from(top).unwrap_or(u16::MAX),
            clipped,
        });
        bottom = top;
    }

    entries.reverse();
    entries
}

pub struct ChatPane<'a> {
    /// Messages of the selected room, oldest first. `None` = no room selected.
    pub messages: Option<&'a [ChatMessage]>,
    pub username_color: Color,
}

impl<'a> ChatPane<'a> {
    pub fn new(messages: Option<&'a [ChatMessage]>, username_color: Color) -> Self {
        Self {
            messages,
            username_color,
        }
    }
}

impl Component for ChatPane<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        let Some(messages) = self.messages else {
            return;
        };
        if area.is_empty() {
            return;
        }

        let width = usize::from(area.width);
        let buf = frame.buffer_mut();
        let name_style = Style::default().fg(self.username_color);

        for entry in assemble(messages, area.width, area.height) {
            let top = area.y + entry.row;
            for (y, line) in (top..).zip(&entry.lines) {
                buf.set_stringn(area.x, y, line, width, Style::default());
            }
            if entry.clipped == 0 {
                let overlay = format!("{}: ", entry.username);
                buf.set_stringn(area.x, top, overlay, width, name_style);
            }
        }
    }
}
