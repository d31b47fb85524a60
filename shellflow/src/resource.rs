//! Resource configuration supplied by the automation platform.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Read-only record describing the managed resource and its backup
/// defaults. Owned by the caller; flows only read it.
#[derive(Debug, Deserialize)]
pub struct ResourceConfig {
    /// Resource name as registered on the platform.
    pub name: String,

    /// Default backup location, a full URL or a bare host/path.
    #[serde(default)]
    pub backup_location: String,

    /// Default backup protocol, e.g. "ftp", or "File System" for the
    /// device's own storage. Empty means file system too.
    #[serde(default)]
    pub backup_type: String,

    /// Username for the backup server.
    #[serde(default)]
    pub backup_user: String,

    /// Password for the backup server.
    #[serde(default = "empty_secret")]
    pub backup_password: SecretString,

    /// Default VRF management name, when the device is reached through
    /// a dedicated routing context.
    #[serde(default)]
    pub vrf_management_name: Option<String>,
}

impl ResourceConfig {
    /// Create a config with only a name set, leaving backup defaults empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            backup_location: String::new(),
            backup_type: String::new(),
            backup_user: String::new(),
            backup_password: empty_secret(),
            vrf_management_name: None,
        }
    }

    /// Set the default backup location.
    pub fn with_backup_location(mut self, location: impl Into<String>) -> Self {
        self.backup_location = location.into();
        self
    }

    /// Set the default backup protocol.
    pub fn with_backup_type(mut self, backup_type: impl Into<String>) -> Self {
        self.backup_type = backup_type.into();
        self
    }

    /// Set the backup server credentials.
    pub fn with_backup_credentials(
        mut self,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.backup_user = user.into();
        self.backup_password = SecretString::from(password.into());
        self
    }

    /// Set the default VRF management name.
    pub fn with_vrf_management_name(mut self, vrf: impl Into<String>) -> Self {
        self.vrf_management_name = Some(vrf.into());
        self
    }

    pub(crate) fn backup_password_str(&self) -> &str {
        self.backup_password.expose_secret()
    }
}

impl Clone for ResourceConfig {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            backup_location: self.backup_location.clone(),
            backup_type: self.backup_type.clone(),
            backup_user: self.backup_user.clone(),
            backup_password: SecretString::from(self.backup_password.expose_secret().to_string()),
            vrf_management_name: self.vrf_management_name.clone(),
        }
    }
}

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ResourceConfig::new("res-name");
        assert_eq!(config.name, "res-name");
        assert!(config.backup_location.is_empty());
        assert!(config.backup_type.is_empty());
        assert!(config.backup_user.is_empty());
        assert!(config.backup_password_str().is_empty());
        assert!(config.vrf_management_name.is_none());
    }

    #[test]
    fn test_deserialize() {
        let config: ResourceConfig = serde_json::from_str(
            r#"{
                "name": "core-switch",
                "backup_location": "192.168.4.5",
                "backup_type": "ftp",
                "backup_user": "ftp_user",
                "backup_password": "pw",
                "vrf_management_name": "mgmt-vrf"
            }"#,
        )
        .unwrap();
        assert_eq!(config.name, "core-switch");
        assert_eq!(config.backup_type, "ftp");
        assert_eq!(config.backup_password_str(), "pw");
        assert_eq!(config.vrf_management_name.as_deref(), Some("mgmt-vrf"));
    }

    #[test]
    fn test_password_not_in_debug_output() {
        let config = ResourceConfig::new("r").with_backup_credentials("u", "s3cret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("s3cret"));
    }
}
