//! Diagnostic logging hook.
//!
//! `fixvec` never prints on its own. Operations that report an error emit a
//! `Debug` record, panicking forms emit a `Warn` record just before they
//! panic, and ignored removals emit a `Trace` record. All of them go through
//! [`fv_log!`](crate::fv_log) and the convenience macros (`fv_warn!`,
//! `fv_debug!`, `fv_trace!`). Before
//! [`set_log_fn`] is called, records are silently discarded, so the hook
//! costs one atomic load and an empty call.
//!
//! ```
//! use core::fmt;
//! use fixvec::log::{self, LogLevel};
//!
//! fn sink(level: LogLevel, args: fmt::Arguments<'_>) {
//!     eprintln!("[{}] {}", level.name(), args);
//! }
//!
//! log::set_log_fn(sink);
//! ```

use core::fmt;
use core::sync::atomic::{AtomicPtr, Ordering};

// ---------------------------------------------------------------------------
// Log levels: lower is more severe
// ---------------------------------------------------------------------------

/// Severity of a diagnostic record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    /// Warning: a panicking operation is about to panic.
    Warn = 0,
    /// Debug: a fallible operation reported an error to its caller.
    Debug = 1,
    /// Trace: very verbose, per-operation tracing.
    Trace = 2,
}

impl LogLevel {
    /// Returns the human-readable name (fixed-width for aligned output).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Warn => "WARN ",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().trim_end())
    }
}

// ---------------------------------------------------------------------------
// Leveled log function (fv_log! and convenience macros)
// ---------------------------------------------------------------------------

/// The signature of the global leveled log function.
pub type LogFn = fn(LogLevel, fmt::Arguments<'_>);

fn null_log(_level: LogLevel, _args: fmt::Arguments<'_>) {}

static LOG_FN: AtomicPtr<()> = AtomicPtr::new(null_log as *mut ());

/// Registers the global leveled log function.
///
/// The function may be called from any context that operates on a
/// [`FixedVec`](crate::FixedVec), so it must not itself panic or block
/// indefinitely. May be called more than once; the latest sink wins.
pub fn set_log_fn(f: LogFn) {
    LOG_FN.store(f as *mut (), Ordering::Release);
}

/// Removes any registered sink; records are discarded again.
pub fn clear_log_fn() {
    set_log_fn(null_log);
}

#[inline]
fn load_log_fn() -> LogFn {
    let ptr = LOG_FN.load(Ordering::Acquire);
    // SAFETY: Only valid `LogFn` pointers (or `null_log`) are ever stored
    // into LOG_FN.
    unsafe { core::mem::transmute::<*mut (), LogFn>(ptr) }
}

/// Implementation detail for [`fv_log!`](crate::fv_log). Not public API.
#[doc(hidden)]
pub fn _log(level: LogLevel, args: fmt::Arguments<'_>) {
    load_log_fn()(level, args);
}

/// Logs a message at the given level.
#[macro_export]
macro_rules! fv_log {
    ($level:expr, $($arg:tt)*) => {
        $crate::log::_log($level, format_args!($($arg)*))
    };
}

/// Logs a warning-level message.
#[macro_export]
macro_rules! fv_warn {
    ($($arg:tt)*) => { $crate::fv_log!($crate::log::LogLevel::Warn, $($arg)*) };
}

/// Logs a debug-level message.
#[macro_export]
macro_rules! fv_debug {
    ($($arg:tt)*) => { $crate::fv_log!($crate::log::LogLevel::Debug, $($arg)*) };
}

/// Logs a trace-level message.
#[macro_export]
macro_rules! fv_trace {
    ($($arg:tt)*) => { $crate::fv_log!($crate::log::LogLevel::Trace, $($arg)*) };
}

#[cfg(all(test, feature = "std"))]
mod tests {
    extern crate std;

    use core::sync::atomic::AtomicUsize;

    use super::*;
    use crate::FixedVec;

    static WARN_RECORDS: AtomicUsize = AtomicUsize::new(0);
    static DEBUG_RECORDS: AtomicUsize = AtomicUsize::new(0);

    fn counting_sink(level: LogLevel, _args: fmt::Arguments<'_>) {
        match level {
            LogLevel::Warn => WARN_RECORDS.fetch_add(1, Ordering::SeqCst),
            LogLevel::Debug => DEBUG_RECORDS.fetch_add(1, Ordering::SeqCst),
            LogLevel::Trace => 0,
        };
    }

    #[test]
    fn level_names_are_fixed_width() {
        for level in [LogLevel::Warn, LogLevel::Debug, LogLevel::Trace] {
            assert_eq!(level.name().len(), 5);
        }
        assert!(LogLevel::Warn < LogLevel::Trace);
    }

    #[test]
    fn failures_reach_registered_sink() {
        set_log_fn(counting_sink);
        let before = DEBUG_RECORDS.load(Ordering::SeqCst);
        let warns_before = WARN_RECORDS.load(Ordering::SeqCst);

        let mut vec = FixedVec::<u8, 1>::new();
        vec.push(1);
        assert!(vec.try_push(2).is_err());
        assert!(vec.try_get(7).is_err());
        let overflow = std::panic::catch_unwind(move || {
            let mut vec = vec;
            vec.push(2);
        });
        assert!(overflow.is_err());

        assert!(DEBUG_RECORDS.load(Ordering::SeqCst) >= before + 2);
        assert!(WARN_RECORDS.load(Ordering::SeqCst) > warns_before);
        clear_log_fn();
    }

    #[test]
    fn unregistered_sink_discards() {
        _log(LogLevel::Trace, format_args!("dropped {}", 1));
    }
}
