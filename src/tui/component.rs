use ratatui::Frame;
use ratatui::layout::Rect;

/// A screen region that knows how to draw itself.
///
/// Components follow the React pattern:
/// - They receive data via props (struct fields).
/// - They may hold internal state across frames (e.g. the input buffer).
/// - They render to a `Frame` within a given `Rect`, clearing it first.
///
/// `render` takes `&mut self` so stateful components can keep presentation
/// state in sync with the area they were last drawn into.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
