//! # TUI Components
//!
//! One component per screen region.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Created fresh each frame from borrowed session data:
//! - `TabBar`: room tabs along the top, plus the click layout
//! - `ChatPane`: bottom-anchored scrollback of the selected room
//! - `UserList`: users of the selected room
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputBar`: the line being typed; lives in `TuiState` across frames
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props", never by reaching into the
//! session themselves:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! UserList::new(room.map(|r| r.users.as_slice()), theme.accent).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── tab_bar.rs     (room tabs + hit-testing)
//! ├── chat_pane.rs   (scrollback assembly)
//! ├── input_bar.rs   (input buffer)
//! └── user_list.rs   (room members)
//! ```

pub mod chat_pane;
pub mod input_bar;
pub mod tab_bar;
pub mod user_list;

pub use chat_pane::ChatPane;
pub use input_bar::{InputBar, InputEvent};
pub use tab_bar::TabBar;
pub use user_list::UserList;
