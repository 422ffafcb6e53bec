//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, draws the four screen
//! regions and translates keyboard/mouse input into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Frame Loop
//!
//! One iteration per frame, at a fixed cadence (16 ms by default):
//!
//! 1. drain every pending input event (never blocks)
//! 2. redraw all regions
//! 3. sleep for whatever is left of the frame interval
//!
//! The loop ends when the session reports it is no longer connected.

pub mod component;
pub mod components;
pub mod event;
pub mod layout;
pub mod text_wrap;
pub mod ui;

use log::{debug, info, warn};
use std::io::{self, stdout};
use std::time::{Duration, Instant};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, update};
use crate::core::config::{ResolvedConfig, Theme};
use crate::core::session::{ChatSession, LocalSession};
use crate::tui::component::EventHandler;
use crate::tui::components::tab_bar;
use crate::tui::components::{InputBar, InputEvent};
use crate::tui::event::{CrosstermInput, InputSource, TuiEvent};
use crate::tui::layout::ViewportGeometry;

/// State that survives between frames.
pub struct TuiState {
    pub input_bar: InputBar,
    /// Geometry of the last frame; `None` until the first draw.
    pub geometry: Option<ViewportGeometry>,
    pub userlist_width: u16,
    pub theme: Theme,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            input_bar: InputBar::new(),
            geometry: None,
            userlist_width: config.userlist_width,
            theme: config.theme,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Raw mode, alternate screen and mouse capture for as long as it lives.
/// Dropping it puts the terminal back, whichever way the loop exits.
pub struct TerminalDriver {
    terminal: DefaultTerminal,
}

impl TerminalDriver {
    pub fn acquire() -> io::Result<Self> {
        let terminal = ratatui::try_init()?;
        if let Err(e) = execute!(stdout(), EnableMouseCapture, EnableBracketedPaste) {
            ratatui::restore();
            return Err(e);
        }
        info!("Terminal modes enabled (raw, alternate screen, mouse, bracketed paste)");
        Ok(Self { terminal })
    }

    pub fn draw<S: ChatSession + ?Sized>(&mut self, session: &S, tui: &mut TuiState) -> io::Result<()> {
        self.terminal.draw(|f| ui::draw_ui(f, session, tui))?;
        Ok(())
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
        ratatui::restore();
        info!("Terminal restored");
    }
}

/// Drain every pending event from `input` and apply it.
///
/// Stops early on `Quit`; anything still queued is left for the caller.
pub fn dispatch_events<I, S>(input: &mut I, tui: &mut TuiState, session: &mut S) -> Flow
where
    I: InputSource + ?Sized,
    S: ChatSession + ?Sized,
{
    while let Some(event) = input.poll_event() {
        if dispatch_event(&event, tui, session) == Flow::Quit {
            return Flow::Quit;
        }
    }
    Flow::Continue
}

pub fn dispatch_event<S>(event: &TuiEvent, tui: &mut TuiState, session: &mut S) -> Flow
where
    S: ChatSession + ?Sized,
{
    match event {
        TuiEvent::Quit => return Flow::Quit,
        // Geometry is checked against the screen size on every draw
        TuiEvent::Resize => {}
        TuiEvent::NextRoom => update(session, Action::SelectNextRoom),
        TuiEvent::MouseClick(x, y) => {
            let tabs = tab_bar::layout(session.rooms());
            if let Some(room) = tab_bar::hit_test(*x, *y, &tabs) {
                info!("Tab clicked: {}", tabs[room.0].name);
                update(session, Action::SelectRoom(room));
            }
        }
        _ => {
            if let Some(InputEvent::SubmitRequested) = tui.input_bar.handle_event(event) {
                submit(tui, session);
            }
        }
    }
    Flow::Continue
}

fn submit<S: ChatSession + ?Sized>(tui: &mut TuiState, session: &mut S) {
    let Some(room) = session
        .selected_room()
        .filter(|id| session.room(*id).is_some())
    else {
        debug!("Submit ignored: no room selected");
        return;
    };
    let text = tui.input_bar.take();
    update(session, Action::SendMessage { room, text });
}

/// One frame: apply pending input, then draw unless the input asked to quit.
///
/// A failed draw is logged and the frame skipped; the next frame redraws
/// everything anyway.
pub fn run_frame<I, S, D>(input: &mut I, tui: &mut TuiState, session: &mut S, draw: D) -> Flow
where
    I: InputSource + ?Sized,
    S: ChatSession + ?Sized,
    D: FnOnce(&S, &mut TuiState) -> io::Result<()>,
{
    if dispatch_events(input, tui, session) == Flow::Quit {
        return Flow::Quit;
    }
    if let Err(e) = draw(&*session, tui) {
        warn!("Frame draw failed: {}", e);
    }
    Flow::Continue
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let mut session = LocalSession::from_config(&config);
    let mut tui = TuiState::new(&config);
    let mut input = CrosstermInput;
    let frame_interval = Duration::from_millis(config.frame_interval_ms);

    let mut driver = TerminalDriver::acquire()?;
    info!(
        "Frame loop starting ({} ms interval) as {}",
        config.frame_interval_ms,
        session.username()
    );

    while session.is_connected() {
        let frame_start = Instant::now();

        let flow = run_frame(&mut input, &mut tui, &mut session, |s, t| driver.draw(s, t));
        if flow == Flow::Quit {
            session.disconnect();
            break;
        }

        if let Some(remaining) = frame_interval.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    info!("Frame loop finished");
    Ok(())
}
