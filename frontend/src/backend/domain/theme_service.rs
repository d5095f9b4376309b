//! Theme state: a persisted dark-mode flag with synchronous broadcast.
//!
//! Constructed once at app start and owned by the app state (no ambient
//! singleton). Subscribers are notified in subscription order, inside
//! the `toggle` call itself, so there is no window where the UI can
//! observe a half-applied theme.

use crate::backend::storage::traits::SettingsStorage;
use log::warn;
use std::sync::Arc;

type ThemeListener = Box<dyn Fn(bool)>;

pub struct ThemeService<S: SettingsStorage> {
    repository: Arc<S>,
    dark: bool,
    listeners: Vec<ThemeListener>,
}

impl<S: SettingsStorage> ThemeService<S> {
    /// Load the persisted preference. An unreadable settings file falls
    /// back to light mode with a logged warning; it is not fatal.
    pub fn new(repository: Arc<S>) -> Self {
        let dark = repository.read_dark_mode().unwrap_or_else(|e| {
            warn!("could not read theme preference, defaulting to light: {}", e);
            false
        });
        Self {
            repository,
            dark,
            listeners: Vec::new(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Register a listener invoked synchronously on every toggle.
    pub fn subscribe(&mut self, listener: impl Fn(bool) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Flip the flag, persist it, and notify every listener in order.
    /// A persistence failure keeps the in-memory flip (the preference is
    /// simply not remembered across restarts).
    pub fn toggle(&mut self) -> bool {
        self.dark = !self.dark;
        if let Err(e) = self.repository.write_dark_mode(self.dark) {
            warn!("could not persist theme preference: {}", e);
        }
        for listener in &self.listeners {
            listener(self.dark);
        }
        self.dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::json::{JsonConnection, SettingsRepository};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn create_test_service() -> (ThemeService<SettingsRepository>, tempfile::TempDir) {
        let temp_dir = tempfile::tempdir().unwrap();
        let connection = Arc::new(JsonConnection::new(temp_dir.path()).unwrap());
        let repository = Arc::new(SettingsRepository::new(connection));
        (ThemeService::new(repository), temp_dir)
    }

    #[test]
    fn test_double_toggle_restores_original_value() {
        let (mut service, _dir) = create_test_service();
        let original = service.is_dark();
        service.toggle();
        assert_ne!(service.is_dark(), original);
        service.toggle();
        assert_eq!(service.is_dark(), original);
    }

    #[test]
    fn test_subscribers_observe_both_transitions_in_order() {
        let (mut service, _dir) = create_test_service();
        let seen: Rc<RefCell<Vec<(u8, bool)>>> = Rc::new(RefCell::new(Vec::new()));

        let first = seen.clone();
        service.subscribe(move |dark| first.borrow_mut().push((1, dark)));
        let second = seen.clone();
        service.subscribe(move |dark| second.borrow_mut().push((2, dark)));

        service.toggle();
        service.toggle();

        assert_eq!(
            *seen.borrow(),
            vec![(1, true), (2, true), (1, false), (2, false)]
        );
    }

    #[test]
    fn test_preference_survives_restart() {
        let temp_dir = tempfile::tempdir().unwrap();
        let connection = Arc::new(JsonConnection::new(temp_dir.path()).unwrap());
        {
            let repository = Arc::new(SettingsRepository::new(connection.clone()));
            let mut service = ThemeService::new(repository);
            service.toggle();
            assert!(service.is_dark());
        }
        let repository = Arc::new(SettingsRepository::new(connection));
        let service = ThemeService::new(repository);
        assert!(service.is_dark());
    }
}
