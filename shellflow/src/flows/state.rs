//! State flow: health check and shutdown.

use log::error;

use crate::api::{LiveStatus, StatusApi};
use crate::cli::CliHandler;
use crate::error::{FlowError, Result};
use crate::flows::command::RunCommandFlow;
use crate::resource::ResourceConfig;

/// Resource state operations, reporting through the platform API.
pub struct StateFlow<H, A> {
    cli_handler: H,
    api: A,
    resource_config: ResourceConfig,
}

impl<H: CliHandler, A: StatusApi> StateFlow<H, A> {
    /// Create a flow for one device, its API client and resource
    /// configuration.
    pub fn new(cli_handler: H, api: A, resource_config: ResourceConfig) -> Self {
        Self {
            cli_handler,
            api,
            resource_config,
        }
    }

    /// Verify the device is reachable over CLI by sending an empty
    /// command through an enable-mode session.
    ///
    /// Never fails: a check failure is logged, reported to the portal as
    /// `Error` status, and rendered into the returned message. A failure
    /// to report the status is logged and swallowed too.
    pub fn health_check(&mut self) -> String {
        let mut status = LiveStatus::Online;
        let mut result = format!("Health check on resource {}", self.resource_config.name);

        match RunCommandFlow::new(&mut self.cli_handler).run_custom_command("") {
            Ok(_) => result.push_str(" passed."),
            Err(e) => {
                error!("Health check on '{}' failed: {e}", self.resource_config.name);
                status = LiveStatus::Error;
                result.push_str(" failed.");
            }
        }

        if let Err(e) =
            self.api
                .set_resource_live_status(&self.resource_config.name, status, &result)
        {
            error!(
                "Cannot update {} resource status on portal: {e}",
                self.resource_config.name
            );
        }

        result
    }

    /// Shut the device down. Not available by default; device families
    /// that support it provide their own implementation.
    pub fn shutdown(&mut self) -> Result<()> {
        Err(FlowError::Unsupported {
            operation: "Shutdown".to_string(),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{CliMode, CliSession};
    use crate::error::{ApiError, CliError, Error};

    struct OkSession;

    impl CliSession for OkSession {
        fn send_command(&mut self, command: &str) -> Result<String> {
            assert_eq!(command, "");
            Ok(String::new())
        }
    }

    struct FakeHandler {
        healthy: bool,
    }

    impl CliHandler for FakeHandler {
        fn supports_mode(&self, _mode: CliMode) -> bool {
            true
        }

        fn open_session(&mut self, mode: CliMode) -> Result<Box<dyn CliSession + '_>> {
            if self.healthy {
                Ok(Box::new(OkSession))
            } else {
                Err(CliError::SessionFailed {
                    mode,
                    message: "connection refused".to_string(),
                }
                .into())
            }
        }
    }

    #[derive(Default)]
    struct RecordingApi {
        fail: bool,
        reported: Option<(String, LiveStatus, String)>,
    }

    impl StatusApi for RecordingApi {
        fn set_resource_live_status(
            &mut self,
            resource_name: &str,
            status: LiveStatus,
            description: &str,
        ) -> Result<()> {
            self.reported = Some((
                resource_name.to_string(),
                status,
                description.to_string(),
            ));
            if self.fail {
                return Err(ApiError::StatusUpdateFailed {
                    resource: resource_name.to_string(),
                    message: "portal unreachable".to_string(),
                }
                .into());
            }
            Ok(())
        }
    }

    #[test]
    fn test_health_check_passes() {
        let mut flow = StateFlow::new(
            FakeHandler { healthy: true },
            RecordingApi::default(),
            ResourceConfig::new("res-name"),
        );

        let result = flow.health_check();
        assert!(result.contains("passed"));

        let (name, status, description) = flow.api.reported.clone().unwrap();
        assert_eq!(name, "res-name");
        assert_eq!(status, LiveStatus::Online);
        assert_eq!(description, result);
    }

    #[test]
    fn test_health_check_fails_without_raising() {
        let mut flow = StateFlow::new(
            FakeHandler { healthy: false },
            RecordingApi::default(),
            ResourceConfig::new("res-name"),
        );

        let result = flow.health_check();
        assert!(result.contains("failed"));

        let (_, status, _) = flow.api.reported.clone().unwrap();
        assert_eq!(status, LiveStatus::Error);
    }

    #[test]
    fn test_health_check_swallows_reporting_failure() {
        let mut flow = StateFlow::new(
            FakeHandler { healthy: true },
            RecordingApi {
                fail: true,
                reported: None,
            },
            ResourceConfig::new("res-name"),
        );

        // Reporting fails but the check result is still returned
        let result = flow.health_check();
        assert!(result.contains("passed"));
        assert!(flow.api.reported.is_some());
    }

    #[test]
    fn test_shutdown_unsupported() {
        let mut flow = StateFlow::new(
            FakeHandler { healthy: true },
            RecordingApi::default(),
            ResourceConfig::new("res-name"),
        );

        let err = flow.shutdown().unwrap_err();
        assert!(matches!(
            err,
            Error::Flow(FlowError::Unsupported { .. })
        ));
        assert!(err.to_string().contains("Shutdown"));
    }
}
