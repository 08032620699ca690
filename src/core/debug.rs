//! Internal tracing for cutedebug itself, gated by CUTEDEBUG_TRACE=1.
//! Never routed through the filtered facade.
use std::sync::OnceLock;

static ENABLED: OnceLock<bool> = OnceLock::new();

pub fn is_enabled() -> bool {
    *ENABLED.get_or_init(|| std::env::var("CUTEDEBUG_TRACE").ok().as_deref() == Some("1"))
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        if $crate::core::debug::is_enabled() { eprintln!("[cutedebug] {}", format_args!($($arg)*)); }
    }};
}
