//! Frame compositor: lays out the four regions and draws each one.
//!
//! Every region is cleared and redrawn on every frame. There is no dirty
//! tracking; ratatui's buffer diff keeps the terminal writes small.

use log::debug;
use ratatui::Frame;
use ratatui::layout::Size;

use crate::core::session::ChatSession;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ChatPane, TabBar, UserList};
use crate::tui::layout::ViewportGeometry;

pub fn draw_ui<S: ChatSession + ?Sized>(frame: &mut Frame, session: &S, tui: &mut TuiState) {
    let geometry = tui.geometry_for(Size::from(frame.area()));
    let theme = tui.theme;
    let room = session.current_room();

    TabBar::new(session.rooms(), session.selected_room(), theme.accent)
        .render(frame, geometry.tab_bar);
    ChatPane::new(room.map(|r| r.messages.as_slice()), theme.username)
        .render(frame, geometry.chat_pane);
    tui.input_bar.render(frame, geometry.input_bar);
    UserList::new(room.map(|r| r.users.as_slice()), theme.accent)
        .render(frame, geometry.user_list);
}

impl TuiState {
    /// Geometry for a screen of `screen` cells, recomputed only when the
    /// size differs from the previous frame.
    pub fn geometry_for(&mut self, screen: Size) -> ViewportGeometry {
        match self.geometry {
            Some(geometry) if geometry.screen == screen => geometry,
            _ => {
                debug!("Screen resized to {}x{}", screen.width, screen.height);
                let geometry = ViewportGeometry::compute(screen, self.userlist_width);
                self.geometry = Some(geometry);
                geometry
            }
        }
    }
}
