//! Terminal host for the session engine.
//!
//! - **renderer**: `TerminalSurface`, the crossterm-backed rendering surface
//! - **keymapper**: Keyboard input to raw input unit mapping
//! - **bell**: Terminal bell feedback

pub mod bell;
pub mod keymapper;
pub mod renderer;

pub use bell::Bell;
pub use keymapper::*;
pub use renderer::*;
