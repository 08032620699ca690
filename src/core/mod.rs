//! Core of cutedebug: identity, filtering, sinks.

#[macro_use]
pub mod debug; // internal tracing (CUTEDEBUG_TRACE=1) provides debug_log! macro
#[macro_use]
pub mod macros; // cute_log!, cute_warn!, ... and author!

pub mod facade;
pub mod identity;
pub mod prefs;
pub mod record;
pub mod sink;
