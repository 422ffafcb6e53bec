//! # Chat Session
//!
//! The data model the renderer reads (rooms, messages, users) and the
//! `ChatSession` seam through which it talks to whatever owns that data.
//!
//! ```text
//! ChatSession
//! ├── rooms: [Room]                 // ordered, read-only to the UI
//! │   ├── name: String
//! │   ├── messages: [ChatMessage]   // oldest first, newest last
//! │   └── users: [String]
//! └── selected: Option<RoomId>      // index into rooms, never a reference
//! ```
//!
//! The real network client lives outside this crate. `LocalSession` is an
//! in-memory stand-in used by the binary and by tests.

use log::{debug, info, warn};

use crate::core::config::ResolvedConfig;

/// A single chat line as received from the session. Text is raw and may
/// still contain HTML entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub user: String,
    pub text: String,
}

impl ChatMessage {
    pub fn new(user: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    pub messages: Vec<ChatMessage>,
    pub users: Vec<String>,
}

impl Room {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_users<I, S>(mut self, users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.users = users.into_iter().map(Into::into).collect();
        self
    }
}

/// Position of a room in `ChatSession::rooms()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(pub usize);

/// What the renderer needs from a chat session.
///
/// Everything is read through `&self` for the duration of a frame, so a
/// frame always sees one consistent snapshot of the rooms.
pub trait ChatSession {
    fn rooms(&self) -> &[Room];

    fn selected_room(&self) -> Option<RoomId>;

    fn select_room(&mut self, room: RoomId);

    /// Advance the selection by one, wrapping past the last room.
    fn select_next_room(&mut self);

    fn send_message(&mut self, room: RoomId, text: &str);

    fn is_connected(&self) -> bool;

    fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms().get(id.0)
    }

    fn current_room(&self) -> Option<&Room> {
        self.selected_room().and_then(|id| self.room(id))
    }
}

/// In-memory session: no network, sends are appended locally.
pub struct LocalSession {
    username: String,
    rooms: Vec<Room>,
    selected: Option<RoomId>,
    connected: bool,
}

impl LocalSession {
    pub fn new(username: impl Into<String>, rooms: Vec<Room>) -> Self {
        let selected = (!rooms.is_empty()).then_some(RoomId(0));
        Self {
            username: username.into(),
            rooms,
            selected,
            connected: true,
        }
    }

    /// Seed rooms from the resolved config. The local user joins every room.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let rooms = config
            .rooms
            .iter()
            .map(|entry| {
                let mut room = Room::new(entry.name.clone()).with_users(entry.users.clone());
                if !room.users.contains(&config.username) {
                    room.users.push(config.username.clone());
                }
                room
            })
            .collect::<Vec<_>>();
        info!(
            "Local session for {} with {} room(s)",
            config.username,
            rooms.len()
        );
        Self::new(config.username.clone(), rooms)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Append a message from someone else, as the network would between frames.
    pub fn push_message(&mut self, room: RoomId, message: ChatMessage) {
        match self.rooms.get_mut(room.0) {
            Some(r) => r.messages.push(message),
            None => warn!("push_message: no room at index {}", room.0),
        }
    }

    pub fn disconnect(&mut self) {
        info!("Local session disconnected");
        self.connected = false;
    }
}

impl ChatSession for LocalSession {
    fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    fn selected_room(&self) -> Option<RoomId> {
        self.selected
    }

    fn select_room(&mut self, room: RoomId) {
        if room.0 < self.rooms.len() {
            self.selected = Some(room);
        } else {
            warn!("select_room: no room at index {}", room.0);
        }
    }

    fn select_next_room(&mut self) {
        if self.rooms.is_empty() {
            return;
        }
        let next = match self.selected {
            Some(RoomId(i)) => (i + 1) % self.rooms.len(),
            None => 0,
        };
        self.selected = Some(RoomId(next));
    }

    fn send_message(&mut self, room: RoomId, text: &str) {
        let user = self.username.clone();
        match self.rooms.get_mut(room.0) {
            Some(r) => {
                debug!("Sending {} bytes to {}", text.len(), r.name);
                r.messages.push(ChatMessage::new(user, text));
            }
            None => warn!("send_message: no room at index {}", room.0),
        }
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_session;

    #[test]
    fn test_new_selects_first_room() {
        let session = test_session();
        assert_eq!(session.selected_room(), Some(RoomId(0)));
        assert_eq!(session.current_room().unwrap().name, "lobby");
    }

    #[test]
    fn test_new_without_rooms_selects_nothing() {
        let session = LocalSession::new("me", Vec::new());
        assert_eq!(session.selected_room(), None);
        assert!(session.current_room().is_none());
    }

    #[test]
    fn test_select_next_room_wraps() {
        let mut session = test_session();
        session.select_next_room();
        assert_eq!(session.selected_room(), Some(RoomId(1)));
        session.select_next_room();
        session.select_next_room();
        assert_eq!(session.selected_room(), Some(RoomId(0)));
    }

    #[test]
    fn test_select_next_room_no_rooms_is_noop() {
        let mut session = LocalSession::new("me", Vec::new());
        session.select_next_room();
        assert_eq!(session.selected_room(), None);
    }

    #[test]
    fn test_select_room_out_of_range_keeps_selection() {
        let mut session = test_session();
        session.select_room(RoomId(42));
        assert_eq!(session.selected_room(), Some(RoomId(0)));
    }

    #[test]
    fn test_send_message_appends_as_local_user() {
        let mut session = test_session();
        session.send_message(RoomId(1), "hi there");
        let last = session.rooms()[1].messages.last().unwrap();
        assert_eq!(last, &ChatMessage::new("tester", "hi there"));
    }

    #[test]
    fn test_stale_room_id_lookup_is_none() {
        let session = test_session();
        assert!(session.room(RoomId(99)).is_none());
    }

    #[test]
    fn test_disconnect() {
        let mut session = test_session();
        assert!(session.is_connected());
        session.disconnect();
        assert!(!session.is_connected());
    }
}
