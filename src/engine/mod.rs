//! Session engine: the interpreter between a rendering surface and a set
//! of commands.
//!
//! - **session**: `Session`, the per-keystroke dispatcher and executor
//! - **input**: classification of raw input chunks
//! - **line**: the in-progress line buffer
//! - **command** / **registry**: command descriptors and lookup
//! - **builtins**: `theme`, `help` and `clear`
//! - **output**: the `Surface` seam and the shared `Output` sink
//! - **titles** / **feedback**: host-owned state passed into each session
//!
//! # Data Flow
//!
//! ```text
//! Surface input ──> Session::handle_input ──> InputUnit
//!                                              ├── LineBuffer edit
//!                                              ├── CommandHistory recall
//!                                              └── submit ──> CommandRegistry ──> Handler
//!                                                                                   │
//! Surface <────────────────── Output <───────────────────────────────────────────────┘
//! ```

pub mod ansi;
pub mod builtins;
pub mod command;
pub mod feedback;
pub mod input;
pub mod line;
pub mod output;
pub mod registry;
pub mod session;
pub mod titles;

pub use command::{Command, Group, Handler, HandlerResult, Leaf};
pub use feedback::{Feedback, Silent};
pub use input::InputUnit;
pub use line::LineBuffer;
pub use output::{CaptureSurface, Output, Surface};
pub use registry::CommandRegistry;
pub use session::{Session, SessionOptions};
pub use titles::{SessionTitles, TitleLease};
