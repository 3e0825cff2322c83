//! Command descriptors
//!
//! A command is either a [`Leaf`] with an async handler, or a [`Group`] of
//! leaf subcommands. Groups cannot nest, so dispatch is at most two tokens
//! deep by construction.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use anyhow::anyhow;
use futures::future::{BoxFuture, FutureExt};

use super::output::Output;

/// What a handler resolves to
pub type HandlerResult = anyhow::Result<()>;

type HandlerFn = dyn Fn(Output, Vec<String>) -> BoxFuture<'static, HandlerResult> + Send + Sync;

/// Async command handler: receives the output sink and the argument tokens.
#[derive(Clone)]
pub struct Handler(Arc<HandlerFn>);

impl Handler {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(Output, Vec<String>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        Self(Arc::new(move |output, args| f(output, args).boxed()))
    }

    /// Start the handler inside a failure boundary.
    ///
    /// Errors and panics, whether raised while building the future or while
    /// polling it, all come back as `Err`.
    pub fn invoke(&self, output: Output, args: Vec<String>) -> BoxFuture<'static, HandlerResult> {
        let started = std::panic::catch_unwind(AssertUnwindSafe(|| (self.0)(output, args)));
        match started {
            Ok(future) => AssertUnwindSafe(future)
                .catch_unwind()
                .map(|polled| polled.unwrap_or_else(|panic| Err(panic_error(panic))))
                .boxed(),
            Err(panic) => futures::future::ready(Err(panic_error(panic))).boxed(),
        }
    }
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Handler(..)")
    }
}

fn panic_error(panic: Box<dyn Any + Send>) -> anyhow::Error {
    let message = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    anyhow!("handler panicked: {}", message)
}

/// A command that runs a handler
#[derive(Debug, Clone)]
pub struct Leaf {
    name: String,
    description: String,
    handler: Handler,
}

impl Leaf {
    pub fn new<F, Fut>(name: impl Into<String>, description: impl Into<String>, f: F) -> Self
    where
        F: Fn(Output, Vec<String>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            handler: Handler::new(f),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }
}

/// A command that only dispatches to subcommands
#[derive(Debug, Clone)]
pub struct Group {
    name: String,
    description: String,
    subcommands: Vec<Leaf>,
}

impl Group {
    pub fn new(name: impl Into<String>, description: impl Into<String>, subcommands: Vec<Leaf>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            subcommands,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Subcommands in declaration order
    pub fn subcommands(&self) -> &[Leaf] {
        &self.subcommands
    }

    /// First subcommand whose name matches exactly
    pub fn subcommand(&self, name: &str) -> Option<&Leaf> {
        self.subcommands.iter().find(|leaf| leaf.name == name)
    }
}

/// A registrable command
#[derive(Debug, Clone)]
pub enum Command {
    Leaf(Leaf),
    Group(Group),
}

impl Command {
    /// Shorthand for a leaf command
    pub fn leaf<F, Fut>(name: impl Into<String>, description: impl Into<String>, f: F) -> Self
    where
        F: Fn(Output, Vec<String>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        Command::Leaf(Leaf::new(name, description, f))
    }

    /// Shorthand for a group command
    pub fn group(name: impl Into<String>, description: impl Into<String>, subcommands: Vec<Leaf>) -> Self {
        Command::Group(Group::new(name, description, subcommands))
    }

    pub fn name(&self) -> &str {
        match self {
            Command::Leaf(leaf) => leaf.name(),
            Command::Group(group) => group.name(),
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Command::Leaf(leaf) => leaf.description(),
            Command::Group(group) => group.description(),
        }
    }
}
