use std::collections::VecDeque;

use chatgrid::core::config::ResolvedConfig;
use chatgrid::core::session::{ChatMessage, ChatSession, LocalSession, Room, RoomId};
use chatgrid::tui::event::TuiEvent;
use chatgrid::tui::{Flow, TuiState, dispatch_events, ui};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

// ============================================================================
// Helper Functions
// ============================================================================

fn create_test_session() -> LocalSession {
    let mut general = Room::new("general").with_users(["ana", "ben", "me"]);
    general
        .messages
        .push(ChatMessage::new("ana", "welcome to the general channel"));
    let offtopic = Room::new("offtopic").with_users(["cy", "me"]);
    LocalSession::new("me", vec![general, offtopic])
}

fn row(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// One iteration of the frame loop: input first, then the redraw.
fn frame(
    terminal: &mut Terminal<TestBackend>,
    events: &[TuiEvent],
    tui: &mut TuiState,
    session: &mut LocalSession,
) -> Flow {
    let mut input: VecDeque<TuiEvent> = events.iter().cloned().collect();
    let flow = dispatch_events(&mut input, tui, session);
    terminal.draw(|f| ui::draw_ui(f, &*session, tui)).unwrap();
    flow
}

fn typed(text: &str) -> Vec<TuiEvent> {
    text.chars().map(TuiEvent::InputChar).collect()
}

// ============================================================================
// Frame Loop Tests
// ============================================================================

#[test]
fn test_first_frame_layout() {
    let mut terminal = Terminal::new(TestBackend::new(50, 12)).unwrap();
    let mut session = create_test_session();
    let mut tui = TuiState::new(&ResolvedConfig::default());

    frame(&mut terminal, &[], &mut tui, &mut session);

    let buffer = terminal.backend().buffer();
    assert_eq!(row(buffer, 0), " / general / offtopic /");
    // Chat pane is 30 wide, rows 2..=8; the message wraps onto two lines.
    assert_eq!(row(buffer, 7), "ana: welcome to the general   |");
    assert_eq!(row(buffer, 8), "channel                       |");
    assert_eq!(row(buffer, 2), "                              |ana");
    assert_eq!(row(buffer, 10), "_");
}

#[test]
fn test_typed_message_appears_in_scrollback() {
    let mut terminal = Terminal::new(TestBackend::new(50, 12)).unwrap();
    let mut session = create_test_session();
    let mut tui = TuiState::new(&ResolvedConfig::default());

    frame(&mut terminal, &typed("hi &amp; bye"), &mut tui, &mut session);
    assert_eq!(row(terminal.backend().buffer(), 10), "hi &amp; bye_");

    frame(&mut terminal, &[TuiEvent::Submit], &mut tui, &mut session);

    let buffer = terminal.backend().buffer();
    assert_eq!(row(buffer, 8), "me: hi & bye                  |");
    assert_eq!(row(buffer, 10), "_");
}

#[test]
fn test_click_switches_room_and_user_list() {
    let mut terminal = Terminal::new(TestBackend::new(50, 12)).unwrap();
    let mut session = create_test_session();
    let mut tui = TuiState::new(&ResolvedConfig::default());

    // " / general / offtopic": offtopic spans columns 13..=21
    frame(&mut terminal, &[TuiEvent::MouseClick(13, 0)], &mut tui, &mut session);

    assert_eq!(session.selected_room(), Some(RoomId(1)));
    let buffer = terminal.backend().buffer();
    assert_eq!(row(buffer, 2), "                              |cy");
    assert_eq!(row(buffer, 8), "                              |");
}

#[test]
fn test_messages_arriving_between_frames() {
    let mut terminal = Terminal::new(TestBackend::new(50, 12)).unwrap();
    let mut session = create_test_session();
    let mut tui = TuiState::new(&ResolvedConfig::default());

    frame(&mut terminal, &[], &mut tui, &mut session);
    for i in 0..20 {
        session.push_message(RoomId(0), ChatMessage::new("ben", format!("line {i}")));
    }
    frame(&mut terminal, &[], &mut tui, &mut session);

    let buffer = terminal.backend().buffer();
    assert_eq!(row(buffer, 2), "ben: line 13                  |ana");
    assert_eq!(row(buffer, 8), "ben: line 19                  |");
}

#[test]
fn test_resize_between_frames() {
    let mut terminal = Terminal::new(TestBackend::new(50, 12)).unwrap();
    let mut session = create_test_session();
    let mut tui = TuiState::new(&ResolvedConfig::default());

    frame(&mut terminal, &[], &mut tui, &mut session);
    terminal.backend_mut().resize(70, 8);
    frame(&mut terminal, &[TuiEvent::Resize], &mut tui, &mut session);

    let geometry = tui.geometry.unwrap();
    assert_eq!(geometry.chat_pane.width, 50);
    assert_eq!(geometry.chat_pane.height, 3);
    let buffer = terminal.backend().buffer();
    assert_eq!(
        row(buffer, 4),
        "ana: welcome to the general channel               |me"
    );
}

#[test]
fn test_quit_ends_loop() {
    let mut terminal = Terminal::new(TestBackend::new(50, 12)).unwrap();
    let mut session = create_test_session();
    let mut tui = TuiState::new(&ResolvedConfig::default());

    let flow = frame(&mut terminal, &[TuiEvent::Quit], &mut tui, &mut session);
    assert_eq!(flow, Flow::Quit);
}
