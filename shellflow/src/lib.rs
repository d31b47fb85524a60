//! # Shellflow
//!
//! Abstract device operation flows for network automation shells.
//!
//! Shellflow provides the orchestration layer between an automation
//! platform and device-specific command logic: configuration
//! save/restore, autoload (device discovery), custom command execution,
//! health check/shutdown, and firmware load. Each flow validates inputs,
//! resolves target URLs and CLI modes, and delegates the actual device
//! interaction to hook traits implemented per device family.
//!
//! The CLI transport itself is out of scope; flows talk to an injected
//! [`CliHandler`] and report through an injected [`StatusApi`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shellflow::{
//!     ConfigUrl, ConfigurationDevice, ConfigurationFlow, ConfigurationType, ResourceConfig,
//!     RestoreMethod, Result,
//! };
//!
//! struct MyDevice;
//!
//! impl ConfigurationDevice for MyDevice {
//!     fn file_system(&self) -> &str {
//!         "flash:/"
//!     }
//!
//!     fn save(
//!         &mut self,
//!         destination: &ConfigUrl,
//!         _configuration_type: ConfigurationType,
//!         _vrf: Option<&str>,
//!     ) -> Result<Option<String>> {
//!         // run the device's copy command against `destination`
//!         Ok(None)
//!     }
//!
//!     fn restore(
//!         &mut self,
//!         _source: &ConfigUrl,
//!         _configuration_type: ConfigurationType,
//!         _restore_method: RestoreMethod,
//!         _vrf: Option<&str>,
//!     ) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     let config = ResourceConfig::new("core-switch")
//!         .with_backup_location("ftp://192.168.4.5")
//!         .with_backup_credentials("backup", "secret");
//!
//!     let mut flow = ConfigurationFlow::new(MyDevice, config);
//!     let file_name = flow.save("", "running", None, false)?;
//!     println!("saved as {file_name}");
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod error;
pub mod flows;
pub mod resource;
pub mod url;

// Re-export main types for convenience
pub use api::{LiveStatus, StatusApi};
pub use cli::{CliHandler, CliMode, CliSession};
pub use error::{Error, Result};
pub use flows::{
    AutoloadDetails, AutoloadDevice, AutoloadFlow, ConfigurationDevice, ConfigurationFlow,
    ConfigurationType, FirmwareDevice, FirmwareFlow, IntoCommands, RestoreMethod, RunCommandFlow,
    StateFlow,
};
pub use resource::ResourceConfig;
pub use url::{ConfigUrl, LocalUrl, RemoteUrl};
