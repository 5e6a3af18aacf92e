//! Terminal mode setup and teardown.
//!
//! Legacy Windows consoles need virtual terminal processing switched
//! on before raw escape bytes mean anything; everywhere else this is
//! a no-op. Mode probe failures are logged and otherwise ignored:
//! the renderer keeps producing plain ANSI bytes regardless of
//! whether this step succeeded.

use crate::enabled;

/// Guard that flips the console into ANSI mode and restores the
/// original mode when dropped, on every exit path.
#[derive(Debug)]
pub struct ConsoleMode {
    #[cfg(windows)]
    original_mode: Option<u32>,
}

impl ConsoleMode {
    /// Enable virtual terminal processing for the current process.
    ///
    /// Also force-enables the engine-wide flag, overriding any
    /// earlier `NO_COLOR` probe.
    pub fn enable() -> Self {
        let guard = Self {
            #[cfg(windows)]
            original_mode: sys::enable_virtual_terminal(),
        };
        enabled::set_enabled(true);
        guard
    }
}

impl Drop for ConsoleMode {
    fn drop(&mut self) {
        #[cfg(windows)]
        {
            if let Some(mode) = self.original_mode {
                sys::restore(mode);
            }
        }
    }
}

#[cfg(windows)]
mod sys {
    use tracing::warn;
    use windows_sys::Win32::System::Console::{
        GetConsoleMode, GetStdHandle, SetConsoleMode, CONSOLE_MODE, DISABLE_NEWLINE_AUTO_RETURN,
        ENABLE_VIRTUAL_TERMINAL_PROCESSING, STD_OUTPUT_HANDLE,
    };

    /// Returns the pre-existing mode when the console was switched,
    /// `None` when either probe failed.
    pub(super) fn enable_virtual_terminal() -> Option<u32> {
        // SAFETY: GetStdHandle has no preconditions; a failed lookup
        // yields an invalid handle which GetConsoleMode then rejects.
        let handle = unsafe { GetStdHandle(STD_OUTPUT_HANDLE) };
        let mut mode: CONSOLE_MODE = 0;
        // SAFETY: handle is whatever the OS handed back and mode is a
        // live stack slot for the out-parameter.
        if unsafe { GetConsoleMode(handle, &mut mode) } == 0 {
            warn!("failed to get output console mode");
            return None;
        }
        let wanted = mode | ENABLE_VIRTUAL_TERMINAL_PROCESSING | DISABLE_NEWLINE_AUTO_RETURN;
        // SAFETY: same handle, plain value argument.
        if unsafe { SetConsoleMode(handle, wanted) } == 0 {
            warn!(
                error = ?std::io::Error::last_os_error(),
                "failed to set output console mode"
            );
            return None;
        }
        Some(mode)
    }

    pub(super) fn restore(mode: u32) {
        // SAFETY: see enable_virtual_terminal.
        let handle = unsafe { GetStdHandle(STD_OUTPUT_HANDLE) };
        // SAFETY: restoring the exact mode read earlier.
        if unsafe { SetConsoleMode(handle, mode) } == 0 {
            warn!("failed to restore output console mode");
        }
    }
}
