//! termo - an embeddable command session for terminal surfaces
//!
//! termo turns raw keystrokes from a rendering surface into line-edited
//! input, history recall and dispatch to registered async commands.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use termo::engine::{CaptureSurface, Command, Output, Session, SessionOptions, SessionTitles, Silent};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let greet = Command::leaf("greet", "Say hello", |out: Output, args: Vec<String>| async move {
//!     out.write(&format!("\r\nhello {}", args.join(" ")));
//!     Ok(())
//! });
//!
//! let surface = CaptureSurface::new(80);
//! let mut session = Session::open(
//!     Output::new(surface.clone()),
//!     SessionOptions::default(),
//!     vec![greet],
//!     &SessionTitles::new(),
//!     Arc::new(Silent),
//! )?;
//! session.feed("greet world").await;
//! session.feed("\r").await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod demo;
pub mod engine;
pub mod error;
pub mod history;
pub mod ui;

pub use error::{Result, SessionError};
