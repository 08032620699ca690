//! Call-site logging macros.
//!
//! ```rust,ignore
//! use cutedebug::prelude::*;
//!
//! fn spawn_wave(n: usize) {
//!     author!("carol");                       // every call below is carol's
//!     cute_log!("spawning {n} enemies");       // shown only when identity == "carol"
//!     cute_warn!(author: "alice", "wave {n}"); // explicit author wins
//!     cute_assert!(n > 0, "empty wave");
//! }
//! ```
//!
//! The filter runs before any message argument is evaluated. Without the
//! `diagnostics` feature the call sites compile to dead `if false` blocks: the
//! arguments are type-checked but never evaluated.
//!
//! `author!` works by shadowing the `CUTEDEBUG_AUTHOR` constant that
//! `cutedebug::prelude::*` brings into scope, so call sites need the prelude
//! glob (or their own `CUTEDEBUG_AUTHOR`).

#[doc(hidden)]
#[macro_export]
macro_rules! __cute_ctx {
    () => {
        ::core::option::Option::None
    };
    ($ctx:expr) => {
        ::core::option::Option::Some::<&dyn $crate::SceneObject>($ctx)
    };
}

#[cfg(feature = "diagnostics")]
#[doc(hidden)]
#[macro_export]
macro_rules! __cute_admit {
    ($facade:ident, $resolved:ident, $author:expr => $body:block) => {{
        let $facade = $crate::facade();
        let __cute_explicit = $author;
        let $resolved = $crate::resolve_author(
            ::core::convert::AsRef::<str>::as_ref(&__cute_explicit),
            CUTEDEBUG_AUTHOR,
        );
        if $facade.admits($resolved) $body
    }};
}

#[cfg(feature = "diagnostics")]
#[doc(hidden)]
#[macro_export]
macro_rules! __cute_message {
    ($sev:expr; context: $ctx:expr, author: $author:expr, $($arg:tt)+) => {
        $crate::__cute_admit!(__f, __a, $author => {
            __f.emit($sev, __a, ::core::format_args!($($arg)+), $crate::__cute_ctx!($ctx));
        })
    };
    ($sev:expr; author: $author:expr, $($arg:tt)+) => {
        $crate::__cute_admit!(__f, __a, $author => {
            __f.emit($sev, __a, ::core::format_args!($($arg)+), $crate::__cute_ctx!());
        })
    };
    ($sev:expr; context: $ctx:expr, $($arg:tt)+) => {
        $crate::__cute_admit!(__f, __a, "" => {
            __f.emit($sev, __a, ::core::format_args!($($arg)+), $crate::__cute_ctx!($ctx));
        })
    };
    ($sev:expr; $($arg:tt)+) => {
        $crate::__cute_admit!(__f, __a, "" => {
            __f.emit($sev, __a, ::core::format_args!($($arg)+), $crate::__cute_ctx!());
        })
    };
}

#[cfg(feature = "diagnostics")]
#[doc(hidden)]
#[macro_export]
macro_rules! __cute_assert {
    ($ctx:expr, $author:expr, $cond:expr) => {
        $crate::__cute_assert!($ctx, $author, $cond, "{}", $crate::DEFAULT_ASSERT_MESSAGE)
    };
    ($ctx:expr, $author:expr, $cond:expr, $($arg:tt)+) => {
        $crate::__cute_admit!(__f, __a, $author => {
            if !($cond) {
                __f.emit($crate::Severity::Assert, __a, ::core::format_args!($($arg)+), $ctx);
            }
        })
    };
}

/// Info message. `cute_log!([context: obj,] [author: name,] "fmt", args..)`
#[cfg(feature = "diagnostics")]
#[macro_export]
macro_rules! cute_log {
    ($($t:tt)+) => { $crate::__cute_message!($crate::Severity::Info; $($t)+) };
}

/// Warning message; same forms as `cute_log!`.
#[cfg(feature = "diagnostics")]
#[macro_export]
macro_rules! cute_warn {
    ($($t:tt)+) => { $crate::__cute_message!($crate::Severity::Warning; $($t)+) };
}

/// Error message; same forms as `cute_log!`.
#[cfg(feature = "diagnostics")]
#[macro_export]
macro_rules! cute_error {
    ($($t:tt)+) => { $crate::__cute_message!($crate::Severity::Error; $($t)+) };
}

/// Reports a failed condition. Never panics. The condition is only
/// evaluated for admitted call sites.
#[cfg(feature = "diagnostics")]
#[macro_export]
macro_rules! cute_assert {
    (context: $ctx:expr, author: $author:expr, $cond:expr $(,)?) => {
        $crate::__cute_assert!($crate::__cute_ctx!($ctx), $author, $cond)
    };
    (context: $ctx:expr, author: $author:expr, $cond:expr, $($arg:tt)+) => {
        $crate::__cute_assert!($crate::__cute_ctx!($ctx), $author, $cond, $($arg)+)
    };
    (author: $author:expr, $cond:expr $(,)?) => {
        $crate::__cute_assert!($crate::__cute_ctx!(), $author, $cond)
    };
    (author: $author:expr, $cond:expr, $($arg:tt)+) => {
        $crate::__cute_assert!($crate::__cute_ctx!(), $author, $cond, $($arg)+)
    };
    (context: $ctx:expr, $cond:expr $(,)?) => {
        $crate::__cute_assert!($crate::__cute_ctx!($ctx), "", $cond)
    };
    (context: $ctx:expr, $cond:expr, $($arg:tt)+) => {
        $crate::__cute_assert!($crate::__cute_ctx!($ctx), "", $cond, $($arg)+)
    };
    ($cond:expr $(,)?) => {
        $crate::__cute_assert!($crate::__cute_ctx!(), "", $cond)
    };
    ($cond:expr, $($arg:tt)+) => {
        $crate::__cute_assert!($crate::__cute_ctx!(), "", $cond, $($arg)+)
    };
}

/// Logs every item's `Display` form as its own message. The author filter is
/// applied once for the whole batch.
#[cfg(feature = "diagnostics")]
#[macro_export]
macro_rules! cute_log_each {
    (author: $author:expr, $items:expr $(,)?) => {
        $crate::__cute_admit!(__f, __a, $author => { __f.emit_each(__a, $items); })
    };
    ($items:expr $(,)?) => {
        $crate::__cute_admit!(__f, __a, "" => { __f.emit_each(__a, $items); })
    };
}

/// Logs an object's name with the object attached as context.
#[cfg(feature = "diagnostics")]
#[macro_export]
macro_rules! cute_log_object {
    (author: $author:expr, $obj:expr $(,)?) => {
        $crate::__cute_admit!(__f, __a, $author => {
            __f.emit_object(__a, $obj);
        })
    };
    ($obj:expr $(,)?) => {
        $crate::__cute_admit!(__f, __a, "" => {
            __f.emit_object(__a, $obj);
        })
    };
}

/// Default author for every `cute_*!` call in the enclosing block or module.
#[cfg(feature = "diagnostics")]
#[macro_export]
macro_rules! author {
    ($name:expr) => {
        #[allow(dead_code)]
        const CUTEDEBUG_AUTHOR: ::core::option::Option<&'static str> =
            ::core::option::Option::Some($name);
    };
}

// Stripped twins: arguments are type-checked inside `if false` so locals
// stay used, but nothing is evaluated.

#[cfg(not(feature = "diagnostics"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __cute_discard {
    (context: $ctx:expr, author: $author:expr, $($arg:tt)+) => {{
        if false {
            let _ = &$ctx;
            let _ = &$author;
            let _ = ::core::format_args!($($arg)+);
        }
    }};
    (author: $author:expr, $($arg:tt)+) => {{
        if false {
            let _ = &$author;
            let _ = ::core::format_args!($($arg)+);
        }
    }};
    (context: $ctx:expr, $($arg:tt)+) => {{
        if false {
            let _ = &$ctx;
            let _ = ::core::format_args!($($arg)+);
        }
    }};
    ($($arg:tt)+) => {{
        if false {
            let _ = ::core::format_args!($($arg)+);
        }
    }};
}

#[cfg(not(feature = "diagnostics"))]
#[macro_export]
macro_rules! cute_log {
    ($($t:tt)+) => { $crate::__cute_discard!($($t)+) };
}

#[cfg(not(feature = "diagnostics"))]
#[macro_export]
macro_rules! cute_warn {
    ($($t:tt)+) => { $crate::__cute_discard!($($t)+) };
}

#[cfg(not(feature = "diagnostics"))]
#[macro_export]
macro_rules! cute_error {
    ($($t:tt)+) => { $crate::__cute_discard!($($t)+) };
}

#[cfg(not(feature = "diagnostics"))]
#[macro_export]
macro_rules! cute_assert {
    (context: $ctx:expr, author: $author:expr, $cond:expr $(,)?) => {{
        if false {
            let _ = &$ctx;
            let _ = &$author;
            let _: bool = $cond;
        }
    }};
    (context: $ctx:expr, author: $author:expr, $cond:expr, $($arg:tt)+) => {{
        if false {
            let _: bool = $cond;
            $crate::__cute_discard!(context: $ctx, author: $author, $($arg)+);
        }
    }};
    (author: $author:expr, $cond:expr $(,)?) => {{
        if false {
            let _ = &$author;
            let _: bool = $cond;
        }
    }};
    (author: $author:expr, $cond:expr, $($arg:tt)+) => {{
        if false {
            let _: bool = $cond;
            $crate::__cute_discard!(author: $author, $($arg)+);
        }
    }};
    (context: $ctx:expr, $cond:expr $(,)?) => {{
        if false {
            let _ = &$ctx;
            let _: bool = $cond;
        }
    }};
    (context: $ctx:expr, $cond:expr, $($arg:tt)+) => {{
        if false {
            let _: bool = $cond;
            $crate::__cute_discard!(context: $ctx, $($arg)+);
        }
    }};
    ($cond:expr $(,)?) => {{
        if false {
            let _: bool = $cond;
        }
    }};
    ($cond:expr, $($arg:tt)+) => {{
        if false {
            let _: bool = $cond;
            $crate::__cute_discard!($($arg)+);
        }
    }};
}

#[cfg(not(feature = "diagnostics"))]
#[macro_export]
macro_rules! cute_log_each {
    (author: $author:expr, $items:expr $(,)?) => {{
        if false {
            let _ = &$author;
            let _ = &$items;
        }
    }};
    ($items:expr $(,)?) => {{
        if false {
            let _ = &$items;
        }
    }};
}

#[cfg(not(feature = "diagnostics"))]
#[macro_export]
macro_rules! cute_log_object {
    (author: $author:expr, $obj:expr $(,)?) => {{
        if false {
            let _ = &$author;
            let _ = &$obj;
        }
    }};
    ($obj:expr $(,)?) => {{
        if false {
            let _ = &$obj;
        }
    }};
}

#[cfg(not(feature = "diagnostics"))]
#[macro_export]
macro_rules! author {
    ($($t:tt)*) => {};
}
