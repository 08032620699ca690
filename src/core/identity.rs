//! Identity store: whose author-tagged messages are shown.

use std::fmt;
use std::sync::Arc;

use crate::core::prefs::PrefStore;

/// Preference key holding the configured identity.
pub const USER_PREF_KEY: &str = "CuteDebug_User";

/// Fallback identity when nothing is stored.
pub type DefaultIdentity = Arc<dyn Fn() -> String + Send + Sync>;

/// Operating-system account name, the default identity.
pub fn account_name() -> String {
    whoami::username()
}

#[derive(Clone)]
pub struct IdentityStore {
    prefs: Arc<dyn PrefStore>,
    default_identity: DefaultIdentity,
}

impl fmt::Debug for IdentityStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityStore").finish_non_exhaustive()
    }
}

impl IdentityStore {
    pub fn new(prefs: Arc<dyn PrefStore>, default_identity: DefaultIdentity) -> Self {
        Self { prefs, default_identity }
    }

    /// Store defaulting to the OS account name.
    pub fn with_account_default(prefs: Arc<dyn PrefStore>) -> Self {
        Self::new(prefs, Arc::new(account_name))
    }

    /// Store with a fixed fallback identity.
    pub fn with_fixed_default(prefs: Arc<dyn PrefStore>, default: impl Into<String>) -> Self {
        let default = default.into();
        Self::new(prefs, Arc::new(move || default.clone()))
    }

    /// Read fresh on every call; the provider only runs when nothing usable is stored.
    pub fn get_identity(&self) -> String {
        match self.stored_identity() {
            Some(stored) if !stored.is_empty() => stored,
            _ => self.default_identity(),
        }
    }

    pub fn set_identity(&self, value: &str) {
        self.prefs.set_string(USER_PREF_KEY, value);
    }

    pub fn stored_identity(&self) -> Option<String> {
        if !self.prefs.has_key(USER_PREF_KEY) {
            return None;
        }
        Some(self.prefs.get_string(USER_PREF_KEY, ""))
    }

    pub fn clear_identity(&self) {
        self.prefs.delete_key(USER_PREF_KEY);
    }

    pub fn default_identity(&self) -> String {
        (self.default_identity)()
    }

    /// Nothing stored and no default available.
    pub fn needs_setup(&self) -> bool {
        self.get_identity().is_empty()
    }
}
