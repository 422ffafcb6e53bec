//! # UserList Component
//!
//! Users of the selected room, one per row, next to a `|` separator.
//! Rows past the bottom of the region are dropped.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Clear;

use crate::tui::component::Component;

pub struct UserList<'a> {
    /// `None` when no room is selected: only the separator is drawn.
    pub users: Option<&'a [String]>,
    pub accent: Color,
}

impl<'a> UserList<'a> {
    pub fn new(users: Option<&'a [String]>, accent: Color) -> Self {
        Self { users, accent }
    }
}

impl Component for UserList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        if area.is_empty() {
            return;
        }
        let buf = frame.buffer_mut();

        for y in area.top()..area.bottom() {
            buf.set_stringn(area.x, y, "|", 1, Style::default());
        }

        let name_width = usize::from(area.width - 1);
        if name_width == 0 {
            return;
        }
        let style = Style::default().fg(self.accent);
        for (y, user) in (area.top()..area.bottom()).zip(self.users.unwrap_or_default()) {
            buf.set_stringn(area.x + 1, y, user, name_width, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::row_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn users(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_render_users_top_down() {
        let backend = TestBackend::new(10, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let users = users(&["alice", "bob"]);

        terminal
            .draw(|f| {
                UserList::new(Some(users.as_slice()), Color::Green).render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(row_text(buffer, 0), "|alice");
        assert_eq!(row_text(buffer, 1), "|bob");
        assert_eq!(row_text(buffer, 2), "|");
        assert_eq!(row_text(buffer, 3), "|");
        assert_eq!(buffer[(1, 0)].fg, Color::Green);
    }

    #[test]
    fn test_render_truncates_long_list() {
        let backend = TestBackend::new(10, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        let users = users(&["a", "b", "c", "averyveryverylongname"]);

        terminal
            .draw(|f| {
                UserList::new(Some(users.as_slice()), Color::Green).render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(row_text(buffer, 0), "|a");
        assert_eq!(row_text(buffer, 1), "|b");
    }

    #[test]
    fn test_render_clips_names_to_width() {
        let backend = TestBackend::new(5, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let users = users(&["averyveryverylongname"]);

        terminal
            .draw(|f| {
                UserList::new(Some(users.as_slice()), Color::Green).render(f, f.area());
            })
            .unwrap();

        assert_eq!(row_text(terminal.backend().buffer(), 0), "|aver");
    }

    #[test]
    fn test_render_without_room() {
        let backend = TestBackend::new(6, 2);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                UserList::new(None, Color::Green).render(f, f.area());
            })
            .unwrap();

        assert_eq!(row_text(terminal.backend().buffer(), 1), "|");
    }
}
