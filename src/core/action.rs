//! # Actions
//!
//! Everything the UI asks of the chat session becomes an `Action`.
//! User presses Enter? That's `Action::SendMessage`.
//! User clicks a tab? That's `Action::SelectRoom(id)`.
//!
//! `update()` is the only place the TUI mutates the session, which keeps
//! the input side easy to log and easy to test against a fake session.
//!
//! ```text
//! Session + Action  →  update()  →  Session'
//! ```

use log::debug;

use crate::core::session::{ChatSession, RoomId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SendMessage { room: RoomId, text: String },
    SelectRoom(RoomId),
    SelectNextRoom,
}

pub fn update<S: ChatSession + ?Sized>(session: &mut S, action: Action) {
    debug!("update: {:?}", action);
    match action {
        Action::SendMessage { room, text } => session.send_message(room, &text),
        Action::SelectRoom(room) => session.select_room(room),
        Action::SelectNextRoom => session.select_next_room(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_session;

    #[test]
    fn test_send_message_action() {
        let mut session = test_session();
        update(
            &mut session,
            Action::SendMessage {
                room: RoomId(0),
                text: "hello".to_string(),
            },
        );
        let room = &session.rooms()[0];
        assert_eq!(room.messages.last().unwrap().text, "hello");
    }

    #[test]
    fn test_select_room_action() {
        let mut session = test_session();
        update(&mut session, Action::SelectRoom(RoomId(2)));
        assert_eq!(session.selected_room(), Some(RoomId(2)));
    }

    #[test]
    fn test_select_next_room_action() {
        let mut session = test_session();
        update(&mut session, Action::SelectNextRoom);
        assert_eq!(session.selected_room(), Some(RoomId(1)));
    }
}
