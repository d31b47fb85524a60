//! Automation-platform API contract.

use std::fmt;

use crate::error::Result;

/// Live status values the platform understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveStatus {
    /// Resource is reachable and healthy.
    Online,
    /// Resource failed its health check.
    Error,
}

impl fmt::Display for LiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Online => write!(f, "Online"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// Status-reporting API exposed by the automation platform.
pub trait StatusApi {
    /// Set the live status shown for a resource on the portal.
    fn set_resource_live_status(
        &mut self,
        resource_name: &str,
        status: LiveStatus,
        description: &str,
    ) -> Result<()>;
}

impl<T: StatusApi + ?Sized> StatusApi for &mut T {
    fn set_resource_live_status(
        &mut self,
        resource_name: &str,
        status: LiveStatus,
        description: &str,
    ) -> Result<()> {
        (**self).set_resource_live_status(resource_name, status, description)
    }
}
