//! Process-wide ANSI enable flag.
//!
//! The flag is lazily initialized from the `NO_COLOR` environment
//! variable on the first read: absent means enabled, present means
//! disabled. An explicit [`set_enabled`] call wins permanently and
//! the environment is never consulted again.
//!
//! The crate imposes no locking around the flag. Callers that flip
//! it while rendering on other threads own the serialization; a
//! render reads the flag exactly once and is not required to observe
//! a concurrent flip mid-call.

use std::sync::atomic::{AtomicU8, Ordering};

const UNSET: u8 = 0;
const ON: u8 = 1;
const OFF: u8 = 2;

static STATE: AtomicU8 = AtomicU8::new(UNSET);

/// Whether escape sequences are emitted at all.
pub fn enabled() -> bool {
    match STATE.load(Ordering::Relaxed) {
        ON => true,
        OFF => false,
        _ => {
            let on = std::env::var_os("NO_COLOR").is_none();
            STATE.store(if on { ON } else { OFF }, Ordering::Relaxed);
            tracing::debug!(enabled = on, "initialized from NO_COLOR probe");
            on
        }
    }
}

/// Override the flag explicitly; the environment probe is skipped
/// from now on.
pub fn set_enabled(on: bool) {
    STATE.store(if on { ON } else { OFF }, Ordering::Relaxed);
}
