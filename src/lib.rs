//! Per-author debug logging: messages tagged with an author are shown only
//! when that author matches the configured identity.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;

pub use crate::core::facade::{
    facade, format_message, install, resolve_author, scoped, should_show, Facade,
    DEFAULT_ASSERT_MESSAGE, ENABLED,
};
pub use crate::core::identity::{account_name, IdentityStore, USER_PREF_KEY};
pub use crate::core::prefs::{FilePrefs, MemoryPrefs, PrefStore};
pub use crate::core::record::{Named, SceneObject, Severity};
pub use crate::core::sink::{ConsoleSink, LogSink, MemorySink, PrintSink, Record};

/// `use cutedebug::prelude::*;` at call sites.
pub mod prelude {
    pub use crate::core::record::{SceneObject, Severity};
    pub use crate::{author, cute_assert, cute_error, cute_log, cute_log_each, cute_log_object, cute_warn};

    /// No author annotation; shadowed by `author!`.
    #[doc(hidden)]
    pub const CUTEDEBUG_AUTHOR: Option<&'static str> = None;
}
