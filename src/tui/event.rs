use std::collections::VecDeque;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use log::{debug, warn};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    Submit,
    NextRoom,
    InputChar(char),
    Paste(String),
    Backspace,
    /// Left button press at terminal cell (column, row).
    MouseClick(u16, u16),
    Resize,
}

/// Where the frame loop pulls input from. Polling never blocks.
pub trait InputSource {
    fn poll_event(&mut self) -> Option<TuiEvent>;
}

/// Live terminal input through crossterm.
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn poll_event(&mut self) -> Option<TuiEvent> {
        poll_event_immediate()
    }
}

/// Scripted input, drained front to back.
impl InputSource for VecDeque<TuiEvent> {
    fn poll_event(&mut self) -> Option<TuiEvent> {
        self.pop_front()
    }
}

/// Poll for an event without blocking (returns immediately).
///
/// Events that map to nothing are skipped so a `None` always means the
/// queue is empty.
pub fn poll_event_immediate() -> Option<TuiEvent> {
    loop {
        match event::poll(Duration::ZERO) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(e) => {
                warn!("Input poll failed: {}", e);
                return None;
            }
        }
        match event::read() {
            Ok(event) => {
                if let Some(mapped) = map_event(event) {
                    return Some(mapped);
                }
            }
            Err(e) => {
                warn!("Input read failed: {}", e);
                return None;
            }
        }
    }
}

pub fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code, key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                    Some(TuiEvent::InputChar(c))
                }
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Tab | KeyCode::BackTab) => Some(TuiEvent::NextRoom),
                (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
