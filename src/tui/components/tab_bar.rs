//! # TabBar Component
//!
//! One tab per room along the top two rows. Row 0 holds the room names,
//! row 1 is an underline.
//!
//! ```text
//!  / lobby / dev / random /
//! ________________________________
//! ```
//!
//! Each name is preceded by a 3-column ` / ` separator. The same layout is
//! used for drawing and for mouse hit-testing so a click always lands on
//! what was drawn.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Clear;

use crate::core::session::{Room, RoomId};
use crate::tui::component::Component;

pub const SEPARATOR: &str = " / ";
const SEPARATOR_WIDTH: u16 = 3;
/// Rows (relative to the tab bar) that respond to clicks.
const HIT_ROWS: u16 = 2;

/// Horizontal span of one room's name. Both ends are clickable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub room: RoomId,
    pub name: String,
    pub left: u16,
    pub right: u16,
}

/// Lay rooms out left to right, starting at column 0.
pub fn layout(rooms: &[Room]) -> Vec<Tab> {
    let mut cursor: u16 = 0;
    rooms
        .iter()
        .enumerate()
        .map(|(i, room)| {
            let len = u16::try_from(room.name.chars().count()).unwrap_or(u16::MAX);
            cursor = cursor.saturating_add(SEPARATOR_WIDTH);
            let left = cursor;
            let right = left.saturating_add(len);
            cursor = right;
            Tab {
                room: RoomId(i),
                name: room.name.clone(),
                left,
                right,
            }
        })
        .collect()
}

/// Resolve a click at (x, y), relative to the tab bar, to a room.
pub fn hit_test(x: u16, y: u16, tabs: &[Tab]) -> Option<RoomId> {
    if y >= HIT_ROWS {
        return None;
    }
    tabs.iter()
        .find(|tab| (tab.left..=tab.right).contains(&x))
        .map(|tab| tab.room)
}

pub struct TabBar<'a> {
    pub rooms: &'a [Room],
    pub selected: Option<RoomId>,
    pub accent: Color,
}

impl<'a> TabBar<'a> {
    pub fn new(rooms: &'a [Room], selected: Option<RoomId>, accent: Color) -> Self {
        Self {
            rooms,
            selected,
            accent,
        }
    }
}

impl Component for TabBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        if area.is_empty() {
            return;
        }
        let buf = frame.buffer_mut();
        let width = usize::from(area.width);

        if area.height > 1 {
            buf.set_stringn(area.x, area.y + 1, "_".repeat(width), width, Style::default());
        }

        let tabs = layout(self.rooms);
        for tab in &tabs {
            let style = if self.selected == Some(tab.room) {
                Style::default().fg(self.accent)
            } else {
                Style::default()
            };
            put(buf, area, tab.left - SEPARATOR_WIDTH, SEPARATOR, Style::default());
            put(buf, area, tab.left, &tab.name, style);
        }
        if let Some(last) = tabs.last() {
            put(buf, area, last.right, SEPARATOR, Style::default());
        }
    }
}

/// Write `text` on the first row of `area` at column `col`, clipped to the area.
fn put(buf: &mut Buffer, area: Rect, col: u16, text: &str, style: Style) {
    let x = area.x.saturating_add(col);
    if x < area.right() {
        buf.set_stringn(x, area.y, text, usize::from(area.right() - x), style);
    }
}
