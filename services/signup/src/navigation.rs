//! Client-side navigation

use std::sync::{Mutex, PoisonError};

use tracing::debug;

/// Landing page, shown after a successful registration
pub const HOME_ROUTE: &str = "/";
/// Route of the sign-up form itself
pub const SIGN_UP_ROUTE: &str = "/sign-up";
/// Target of the "already have an account" link
pub const SIGN_IN_ROUTE: &str = "/sign-in";

/// Router operations the form relies on
pub trait Navigator {
    /// Return to the previous view
    fn go_back(&self);

    /// Replace the current route with `path`
    fn replace(&self, path: &str);

    /// Route currently displayed
    fn current(&self) -> String;
}

/// In-memory browser-style history
#[derive(Debug)]
pub struct HistoryNavigator {
    entries: Mutex<Vec<String>>,
}

impl HistoryNavigator {
    pub fn with_initial(path: impl Into<String>) -> Self {
        Self {
            entries: Mutex::new(vec![path.into()]),
        }
    }

    /// Push a new route on top of the history
    pub fn push(&self, path: impl Into<String>) {
        let path = path.into();
        debug!("Navigating to {}", path);
        self.lock().push(path);
    }

    /// Snapshot of the history, oldest first
    pub fn entries(&self) -> Vec<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::with_initial(HOME_ROUTE)
    }
}

impl Navigator for HistoryNavigator {
    fn go_back(&self) {
        let mut entries = self.lock();
        if entries.len() > 1 {
            let left = entries.pop();
            debug!("Navigating back from {:?}", left);
        }
    }

    fn replace(&self, path: &str) {
        debug!("Replacing current route with {}", path);
        let mut entries = self.lock();
        match entries.last_mut() {
            Some(current) => *current = path.to_string(),
            None => entries.push(path.to_string()),
        }
    }

    fn current(&self) -> String {
        self.lock().last().cloned().unwrap_or_else(|| HOME_ROUTE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_back_pops_until_first_entry() {
        let navigator = HistoryNavigator::default();
        navigator.push(SIGN_UP_ROUTE);
        assert_eq!(navigator.current(), SIGN_UP_ROUTE);

        navigator.go_back();
        assert_eq!(navigator.current(), HOME_ROUTE);

        navigator.go_back();
        assert_eq!(navigator.entries(), vec![HOME_ROUTE.to_string()]);
    }

    #[test]
    fn test_replace_keeps_history_length() {
        let navigator = HistoryNavigator::with_initial(SIGN_IN_ROUTE);
        navigator.push(SIGN_UP_ROUTE);
        navigator.replace(HOME_ROUTE);

        assert_eq!(
            navigator.entries(),
            vec![SIGN_IN_ROUTE.to_string(), HOME_ROUTE.to_string()]
        );
    }
}
