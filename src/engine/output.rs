//! Rendering surface seam
//!
//! The engine never paints anything itself. It emits raw text and ANSI
//! control sequences into a [`Surface`] through a shared [`Output`] handle,
//! which command handlers also receive.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::ColorScheme;

/// Display side of the session: paints whatever the engine writes.
pub trait Surface: Send {
    /// Append raw text / control sequences.
    fn write(&mut self, text: &str);

    /// Current width in columns.
    fn columns(&self) -> u16;

    fn focus(&mut self) {}

    /// Apply a color scheme, if the surface supports it.
    fn set_theme(&mut self, _scheme: &ColorScheme) {}

    /// Release the display. Called once, at session teardown.
    fn dispose(&mut self) {}
}

fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Ordered, cloneable sink onto a [`Surface`].
///
/// Every clone writes to the same surface in call order. Once the session
/// is torn down the sink is closed and further writes are dropped.
#[derive(Clone)]
pub struct Output {
    surface: Arc<Mutex<Box<dyn Surface>>>,
    open: Arc<AtomicBool>,
}

impl Output {
    pub fn new(surface: impl Surface + 'static) -> Self {
        Self {
            surface: Arc::new(Mutex::new(Box::new(surface))),
            open: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Write raw text to the surface
    pub fn write(&self, text: &str) {
        if text.is_empty() || !self.is_open() {
            return;
        }
        lock(&self.surface).write(text);
    }

    /// Surface width in columns
    pub fn columns(&self) -> u16 {
        lock(&self.surface).columns()
    }

    /// Ask the surface to apply a color scheme
    pub fn set_theme(&self, scheme: &ColorScheme) {
        if self.is_open() {
            lock(&self.surface).set_theme(scheme);
        }
    }

    pub fn focus(&self) {
        if self.is_open() {
            lock(&self.surface).focus();
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Dispose the surface and stop accepting writes. Idempotent.
    pub(crate) fn close(&self) {
        if self.open.swap(false, Ordering::SeqCst) {
            lock(&self.surface).dispose();
        }
    }
}

impl std::fmt::Debug for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Output").field("open", &self.is_open()).finish()
    }
}

/// In-memory surface that records everything written to it.
///
/// Clones share the same transcript, so one clone can be handed to
/// [`Output::new`] while another is kept for inspection.
#[derive(Clone)]
pub struct CaptureSurface {
    transcript: Arc<Mutex<String>>,
    theme: Arc<Mutex<Option<String>>>,
    focused: Arc<AtomicBool>,
    disposed: Arc<AtomicBool>,
    columns: u16,
}

impl CaptureSurface {
    pub fn new(columns: u16) -> Self {
        Self {
            transcript: Arc::new(Mutex::new(String::new())),
            theme: Arc::new(Mutex::new(None)),
            focused: Arc::new(AtomicBool::new(false)),
            disposed: Arc::new(AtomicBool::new(false)),
            columns,
        }
    }

    /// Everything written so far
    pub fn contents(&self) -> String {
        lock(&self.transcript).clone()
    }

    /// Drain the transcript
    pub fn take(&self) -> String {
        std::mem::take(&mut *lock(&self.transcript))
    }

    /// Name of the last applied color scheme
    pub fn theme(&self) -> Option<String> {
        lock(&self.theme).clone()
    }

    pub fn is_focused(&self) -> bool {
        self.focused.load(Ordering::SeqCst)
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }
}

impl Default for CaptureSurface {
    fn default() -> Self {
        Self::new(80)
    }
}

impl Surface for CaptureSurface {
    fn write(&mut self, text: &str) {
        lock(&self.transcript).push_str(text);
    }

    fn columns(&self) -> u16 {
        self.columns
    }

    fn focus(&mut self) {
        self.focused.store(true, Ordering::SeqCst);
    }

    fn set_theme(&mut self, scheme: &ColorScheme) {
        *lock(&self.theme) = Some(scheme.name.clone());
    }

    fn dispose(&mut self) {
        self.disposed.store(true, Ordering::SeqCst);
    }
}
