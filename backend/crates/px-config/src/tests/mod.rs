mod edge_cases;

use std::env;

use tempfile::TempDir;

pub(crate) const TEST_SECRET: &str = "test-secret-that-is-at-least-32-chars";

/// Restores every variable it touched, newest first, when dropped.
///
/// Only use from `#[serial]` tests: the process environment is shared.
#[derive(Default)]
pub(crate) struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        Self::default().and_set(key, value)
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        Self::default().and_remove(key)
    }

    pub(crate) fn and_set(mut self, key: &'static str, value: &str) -> Self {
        self.remember(key);
        unsafe { env::set_var(key, value) };
        self
    }

    pub(crate) fn and_remove(mut self, key: &'static str) -> Self {
        self.remember(key);
        unsafe { env::remove_var(key) };
        self
    }

    fn remember(&mut self, key: &'static str) {
        self.saved.push((key, env::var(key).ok()));
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, original) in self.saved.drain(..).rev() {
            unsafe {
                match original {
                    Some(value) => env::set_var(key, value),
                    None => env::remove_var(key),
                }
            }
        }
    }
}

/// Create a temp config directory and point PX_CONFIG_DIR at it
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("PX_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Config dir, a valid signing secret and the given overrides, so
/// `validate()` only trips on what a test changes
pub(crate) fn setup_valid_env(overrides: &[(&'static str, &str)]) -> (TempDir, EnvGuard) {
    let (temp, guard) = setup_config_dir();
    let guard = overrides.iter().fold(
        guard.and_set("PX_AUTH_JWT_SECRET", TEST_SECRET),
        |guard, &(key, value)| guard.and_set(key, value),
    );
    (temp, guard)
}
