//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::buffer::Buffer;

use crate::core::session::{ChatMessage, LocalSession, Room};

/// Three rooms, the first one selected, local user "tester".
pub fn test_session() -> LocalSession {
    let mut lobby = Room::new("lobby").with_users(["alice", "bob", "tester"]);
    lobby.messages.push(ChatMessage::new("alice", "hi all"));
    lobby.messages.push(ChatMessage::new("bob", "hey alice"));

    let dev = Room::new("dev").with_users(["carol", "tester"]);
    let random = Room::new("random").with_users(["tester"]);

    LocalSession::new("tester", vec![lobby, dev, random])
}

/// Text of one buffer row, trailing blanks trimmed.
pub fn row_text(buffer: &Buffer, y: u16) -> String {
    let area = buffer.area;
    (area.x..area.x + area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect::<String>()
        .trim_end()
        .to_string()
}
