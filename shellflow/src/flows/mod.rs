//! Device operation flows.
//!
//! Each flow is a thin orchestration layer: it validates inputs,
//! resolves a target URL or CLI mode, and delegates the device-specific
//! work to a hook trait implemented per device family.

pub mod autoload;
pub mod command;
pub mod configuration;
pub mod firmware;
pub mod state;

pub use autoload::{AutoloadAttribute, AutoloadDetails, AutoloadDevice, AutoloadElement, AutoloadFlow};
pub use command::{IntoCommands, RunCommandFlow};
pub use configuration::{
    ConfigurationDevice, ConfigurationFlow, ConfigurationType, RestoreMethod,
};
pub use firmware::{FirmwareDevice, FirmwareFlow};
pub use state::StateFlow;
