//! Filtered logging facade.
//!
//! - `should_show(author, identity)` → the filter rule
//! - `Facade` → identity store + sink, one method per severity
//! - `install` / `facade` / `scoped` → the process-wide (or thread-scoped) instance
//!
//! Call sites normally go through the `cute_*!` macros, which check
//! `Facade::admits` before building the message.

use std::cell::RefCell;
use std::fmt::{self, Write as _};
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use crate::config::Config;
use crate::core::identity::IdentityStore;
use crate::core::record::{SceneObject, Severity};
use crate::core::sink::PrintSink;

/// True in a diagnostics-enabled build.
pub const ENABLED: bool = cfg!(feature = "diagnostics");

/// Message used by assertions that carry none.
pub const DEFAULT_ASSERT_MESSAGE: &str = "assertion failed";

/// An untagged message is always shown; a tagged one only to its author.
pub fn should_show(author: &str, identity: &str) -> bool {
    author.is_empty() || author == identity
}

/// Explicit non-empty author wins over the annotation; empty means untagged.
pub fn resolve_author<'a>(explicit: &'a str, annotated: Option<&'a str>) -> Option<&'a str> {
    if !explicit.is_empty() {
        return Some(explicit);
    }
    annotated.filter(|a| !a.is_empty())
}

/// A `Display` that fails leaves whatever it wrote so far; never panics.
pub fn format_message(author: Option<&str>, message: impl fmt::Display) -> String {
    let mut line = String::new();
    let written = match author {
        Some(author) => write!(line, "[{author}] {message}"),
        None => write!(line, "{message}"),
    };
    if let Err(e) = written {
        crate::debug_log!("message formatting failed, kept partial text: {e}");
    }
    line
}

pub struct Facade {
    identity: IdentityStore,
    sink: Arc<dyn PrintSink>,
}

impl fmt::Debug for Facade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Facade").field("identity", &self.identity).finish_non_exhaustive()
    }
}

impl Facade {
    pub fn new(identity: IdentityStore, sink: Arc<dyn PrintSink>) -> Self {
        Self { identity, sink }
    }

    pub fn identity(&self) -> &IdentityStore {
        &self.identity
    }

    /// Untagged calls never touch the identity store.
    pub fn admits(&self, author: Option<&str>) -> bool {
        if !ENABLED {
            return false;
        }
        match author {
            None => true,
            Some(author) => should_show(author, &self.identity.get_identity()),
        }
    }

    /// Format and forward without filtering; callers check `admits` first.
    pub fn emit(
        &self,
        severity: Severity,
        author: Option<&str>,
        message: fmt::Arguments<'_>,
        context: Option<&dyn SceneObject>,
    ) {
        if !ENABLED {
            return;
        }
        let line = match (author, message.as_str()) {
            (None, Some(literal)) => {
                self.sink.print(severity, literal, context);
                return;
            }
            _ => format_message(author, message),
        };
        self.sink.print(severity, &line, context);
    }

    /// One record per item, in order. The filter is applied once for the batch.
    pub fn emit_each<I>(&self, author: Option<&str>, items: I)
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        if !ENABLED {
            return;
        }
        for item in items {
            let line = format_message(author, &item);
            self.sink.print(Severity::Info, &line, None);
        }
    }

    pub fn emit_object(&self, author: Option<&str>, object: &dyn SceneObject) {
        self.emit(Severity::Info, author, format_args!("{}", object.name()), Some(object));
    }

    pub fn info(&self, message: &str, context: Option<&dyn SceneObject>, author: Option<&str>) {
        self.log(Severity::Info, message, context, author);
    }

    pub fn warn(&self, message: &str, context: Option<&dyn SceneObject>, author: Option<&str>) {
        self.log(Severity::Warning, message, context, author);
    }

    pub fn error(&self, message: &str, context: Option<&dyn SceneObject>, author: Option<&str>) {
        self.log(Severity::Error, message, context, author);
    }

    /// Reports only a failed condition; never panics.
    pub fn assert_log(
        &self,
        condition: bool,
        message: &str,
        context: Option<&dyn SceneObject>,
        author: Option<&str>,
    ) {
        if condition {
            return;
        }
        let message = if message.is_empty() { DEFAULT_ASSERT_MESSAGE } else { message };
        self.log(Severity::Assert, message, context, author);
    }

    pub fn log_each<I>(&self, items: I, author: Option<&str>)
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let author = resolve_author(author.unwrap_or(""), None);
        if self.admits(author) {
            self.emit_each(author, items);
        }
    }

    pub fn log_object(&self, object: &dyn SceneObject, author: Option<&str>) {
        let author = resolve_author(author.unwrap_or(""), None);
        if self.admits(author) {
            self.emit_object(author, object);
        }
    }

    fn log(&self, severity: Severity, message: &str, context: Option<&dyn SceneObject>, author: Option<&str>) {
        let author = resolve_author(author.unwrap_or(""), None);
        if self.admits(author) {
            self.emit(severity, author, format_args!("{message}"), context);
        }
    }
}

static GLOBAL: Lazy<RwLock<Option<Arc<Facade>>>> = Lazy::new(|| RwLock::new(None));

thread_local! {
    static LOCAL: RefCell<Option<Arc<Facade>>> = const { RefCell::new(None) };
}

/// Replace the process-wide facade.
pub fn install(facade: Facade) {
    let mut global = GLOBAL.write().unwrap_or_else(|p| p.into_inner());
    *global = Some(Arc::new(facade));
}

/// Thread-scoped facade first, then the installed one, else one built from
/// the default configuration on first use.
pub fn facade() -> Arc<Facade> {
    if let Some(local) = LOCAL.try_with(|l| l.borrow().clone()).ok().flatten() {
        return local;
    }
    if let Some(global) = GLOBAL.read().unwrap_or_else(|p| p.into_inner()).clone() {
        return global;
    }
    let built = Arc::new(Config::load_default().build_facade());
    let mut global = GLOBAL.write().unwrap_or_else(|p| p.into_inner());
    global.get_or_insert(built).clone()
}

struct Restore(Option<Arc<Facade>>);

impl Drop for Restore {
    fn drop(&mut self) {
        let prev = self.0.take();
        let _ = LOCAL.try_with(|l| *l.borrow_mut() = prev);
    }
}

/// Run `f` with `facade` active on the current thread only.
pub fn scoped<R>(facade: Facade, f: impl FnOnce() -> R) -> R {
    let prev = LOCAL.with(|l| l.borrow_mut().replace(Arc::new(facade)));
    let _restore = Restore(prev);
    f()
}
