//! Run-command flow.

use log::debug;

use crate::cli::{CliHandler, CliMode};
use crate::error::{FlowError, Result};

/// Conversion into a command sequence.
///
/// A single string becomes a one-element sequence; slices and vectors
/// pass through, so callers can hand either form to the flow.
pub trait IntoCommands {
    /// Convert into the list of commands to send.
    fn into_commands(self) -> Vec<String>;
}

impl IntoCommands for &str {
    fn into_commands(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoCommands for String {
    fn into_commands(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoCommands for &[&str] {
    fn into_commands(self) -> Vec<String> {
        self.iter().map(|c| c.to_string()).collect()
    }
}

impl<const N: usize> IntoCommands for [&str; N] {
    fn into_commands(self) -> Vec<String> {
        self.iter().map(|c| c.to_string()).collect()
    }
}

impl IntoCommands for Vec<String> {
    fn into_commands(self) -> Vec<String> {
        self
    }
}

/// Custom-command execution over an injected CLI handler.
pub struct RunCommandFlow<H> {
    cli_handler: H,
}

impl<H: CliHandler> RunCommandFlow<H> {
    /// Create a flow around a CLI handler.
    pub fn new(cli_handler: H) -> Self {
        Self { cli_handler }
    }

    /// Execute one or more commands in enable mode; outputs are joined
    /// with newlines.
    pub fn run_custom_command(&mut self, commands: impl IntoCommands) -> Result<String> {
        self.run(commands, CliMode::Enable)
    }

    /// Execute one or more commands in configuration mode; outputs are
    /// joined with newlines.
    pub fn run_custom_config_command(&mut self, commands: impl IntoCommands) -> Result<String> {
        self.run(commands, CliMode::Config)
    }

    fn run(&mut self, commands: impl IntoCommands, mode: CliMode) -> Result<String> {
        if !self.cli_handler.supports_mode(mode) {
            return Err(FlowError::ModeNotConfigured { mode }.into());
        }

        let commands = commands.into_commands();
        let mut responses = Vec::with_capacity(commands.len());

        // Session is scoped to this block; the guard releases it on
        // every exit path, including errors.
        let mut session = self.cli_handler.open_session(mode)?;
        for command in &commands {
            debug!("Sending command '{command}' in {mode} mode");
            responses.push(session.send_command(command)?);
        }

        Ok(responses.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliSession;
    use crate::error::Error;

    struct EchoSession<'a> {
        sent: &'a mut Vec<String>,
    }

    impl CliSession for EchoSession<'_> {
        fn send_command(&mut self, command: &str) -> Result<String> {
            self.sent.push(command.to_string());
            Ok(format!("out:{command}"))
        }
    }

    struct FakeHandler {
        enable: bool,
        config: bool,
        sent: Vec<String>,
    }

    impl FakeHandler {
        fn with_modes(enable: bool, config: bool) -> Self {
            Self {
                enable,
                config,
                sent: vec![],
            }
        }
    }

    impl CliHandler for FakeHandler {
        fn supports_mode(&self, mode: CliMode) -> bool {
            match mode {
                CliMode::Enable => self.enable,
                CliMode::Config => self.config,
            }
        }

        fn open_session(&mut self, _mode: CliMode) -> Result<Box<dyn CliSession + '_>> {
            Ok(Box::new(EchoSession {
                sent: &mut self.sent,
            }))
        }
    }

    #[test]
    fn test_single_command() {
        let mut flow = RunCommandFlow::new(FakeHandler::with_modes(true, true));
        let output = flow.run_custom_command("show version").unwrap();
        assert_eq!(output, "out:show version");
    }

    #[test]
    fn test_multiple_commands_join_output() {
        let mut flow = RunCommandFlow::new(FakeHandler::with_modes(true, true));
        let output = flow
            .run_custom_config_command(["interface Gi0/1", "no shutdown"])
            .unwrap();
        assert_eq!(output, "out:interface Gi0/1\nout:no shutdown");
        assert_eq!(
            flow.cli_handler.sent,
            vec!["interface Gi0/1".to_string(), "no shutdown".to_string()]
        );
    }

    #[test]
    fn test_missing_enable_mode() {
        let mut flow = RunCommandFlow::new(FakeHandler::with_modes(false, true));
        let err = flow.run_custom_command("show version").unwrap_err();
        assert!(matches!(
            err,
            Error::Flow(FlowError::ModeNotConfigured {
                mode: CliMode::Enable
            })
        ));
        assert!(err.to_string().contains("enable"));
    }

    #[test]
    fn test_missing_config_mode() {
        let mut flow = RunCommandFlow::new(FakeHandler::with_modes(true, false));
        let err = flow.run_custom_config_command("hostname r1").unwrap_err();
        assert!(matches!(
            err,
            Error::Flow(FlowError::ModeNotConfigured {
                mode: CliMode::Config
            })
        ));
    }

    #[test]
    fn test_borrowed_handler() {
        // Flows can borrow a shared handler instead of owning it
        let mut handler = FakeHandler::with_modes(true, true);
        let output = RunCommandFlow::new(&mut handler)
            .run_custom_command("show clock")
            .unwrap();
        assert_eq!(output, "out:show clock");
        assert_eq!(handler.sent, vec!["show clock".to_string()]);
    }
}
