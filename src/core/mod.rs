//! # Core Chat Logic
//!
//! Everything here is independent of the terminal: the session model, the
//! commands the UI can issue, entity decoding and configuration.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Session (rooms)      │
//!                    │  • Action (commands)    │
//!                    │  • update() (apply)     │
//!                    │                         │
//!                    │  No terminal. No draw.  │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`session`]: `ChatSession` trait, `Room`, `ChatMessage`, `LocalSession`
//! - [`action`]: The `Action` enum, every command the UI sends to the session
//! - [`entity`]: HTML entity decoding for message bodies
//! - [`config`]: Layered configuration (file, env, CLI)

pub mod action;
pub mod config;
pub mod entity;
pub mod session;
