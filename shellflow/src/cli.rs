//! CLI handler contracts.
//!
//! The actual SSH/telnet transport is out of scope for this crate; flows
//! talk to an injected handler that knows how to open a session in a
//! given mode and send commands through it. Sessions are scoped: the
//! boxed guard releases the underlying session when dropped, on every
//! exit path.

use std::fmt;

use crate::error::Result;

/// A named operational context on the device CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CliMode {
    /// Privileged exec mode for show/operational commands.
    Enable,
    /// Configuration mode for commands that change device state.
    Config,
}

impl fmt::Display for CliMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enable => write!(f, "enable"),
            Self::Config => write!(f, "config"),
        }
    }
}

/// An open CLI session in a particular mode.
pub trait CliSession {
    /// Send a command and return its output.
    fn send_command(&mut self, command: &str) -> Result<String>;
}

/// Mode-scoped session factory, injected into the flows.
pub trait CliHandler {
    /// Whether this handler has the given mode configured.
    fn supports_mode(&self, mode: CliMode) -> bool;

    /// Open a scoped session in the given mode. The session is released
    /// when the returned guard is dropped.
    fn open_session(&mut self, mode: CliMode) -> Result<Box<dyn CliSession + '_>>;
}

impl<T: CliHandler + ?Sized> CliHandler for &mut T {
    fn supports_mode(&self, mode: CliMode) -> bool {
        (**self).supports_mode(mode)
    }

    fn open_session(&mut self, mode: CliMode) -> Result<Box<dyn CliSession + '_>> {
        (**self).open_session(mode)
    }
}

impl<T: CliHandler + ?Sized> CliHandler for Box<T> {
    fn supports_mode(&self, mode: CliMode) -> bool {
        (**self).supports_mode(mode)
    }

    fn open_session(&mut self, mode: CliMode) -> Result<Box<dyn CliSession + '_>> {
        (**self).open_session(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_display() {
        assert_eq!(CliMode::Enable.to_string(), "enable");
        assert_eq!(CliMode::Config.to_string(), "config");
    }
}
