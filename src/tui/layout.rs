//! Screen geometry for the four regions.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐  row 0
//! │ tab bar (full width, 2 rows)                 │
//! ├────────────────────────────────┬─────────────┤  row 2
//! │ chat pane                      │ user list   │
//! │ (width - userlist, height - 5) │ (userlist,  │
//! │                                │  height - 5)│
//! ├────────────────────────────────┴─────────────┤  height - 3
//! │ input bar (full width, 3 rows)               │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Terminals smaller than the fixed rows/columns produce zero-sized regions
//! rather than an error; nothing is ever placed outside the screen.

use ratatui::layout::{Rect, Size};

pub const TAB_BAR_HEIGHT: u16 = 2;
pub const INPUT_BAR_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportGeometry {
    pub screen: Size,
    pub tab_bar: Rect,
    pub chat_pane: Rect,
    pub input_bar: Rect,
    pub user_list: Rect,
}

impl ViewportGeometry {
    pub fn compute(screen: Size, userlist_width: u16) -> Self {
        let Size { width, height } = screen;

        let tab_height = TAB_BAR_HEIGHT.min(height);
        let input_height = INPUT_BAR_HEIGHT.min(height - tab_height);
        let body_height = height - tab_height - input_height;

        let list_width = userlist_width.min(width);
        let chat_width = width - list_width;

        Self {
            screen,
            tab_bar: Rect::new(0, 0, width, tab_height),
            chat_pane: Rect::new(0, tab_height, chat_width, body_height),
            input_bar: Rect::new(0, tab_height + body_height, width, input_height),
            user_list: Rect::new(chat_width, tab_height, list_width, body_height),
        }
    }
}
