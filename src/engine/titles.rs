//! Active session titles
//!
//! Titles identify sessions, so two live sessions may not share one. The set
//! is owned by the host and handed to every session it opens.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::{Result, SessionError};

/// Shared set of titles currently in use
#[derive(Debug, Clone, Default)]
pub struct SessionTitles {
    active: Arc<Mutex<HashSet<String>>>,
}

impl SessionTitles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `title` until the returned lease is dropped
    pub fn claim(&self, title: &str) -> Result<TitleLease> {
        let mut active = self.active.lock().unwrap_or_else(PoisonError::into_inner);
        if !active.insert(title.to_string()) {
            return Err(SessionError::DuplicateTitle(title.to_string()));
        }
        Ok(TitleLease {
            title: title.to_string(),
            titles: self.clone(),
        })
    }

    pub fn is_active(&self, title: &str) -> bool {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(title)
    }
}

/// A reserved title; releases it on drop
#[derive(Debug)]
pub struct TitleLease {
    title: String,
    titles: SessionTitles,
}

impl TitleLease {
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Drop for TitleLease {
    fn drop(&mut self) {
        self.titles
            .active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.title);
    }
}
