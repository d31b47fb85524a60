//! Firmware load flow.

use log::{debug, info};

use crate::error::Result;
use crate::flows::configuration::{add_auth, resolve_source_url, resolve_vrf};
use crate::resource::ResourceConfig;
use crate::url::ConfigUrl;

/// Device-specific firmware hook.
pub trait FirmwareDevice {
    /// The device's default file-system identifier, e.g. "flash:/".
    /// Return an empty string when the device has no local storage.
    fn file_system(&self) -> &str;

    /// Load and apply the firmware image at the source URL.
    fn load_firmware(&mut self, source: &ConfigUrl, vrf_management_name: Option<&str>)
    -> Result<()>;
}

/// Firmware load orchestration, generic over the device hook.
pub struct FirmwareFlow<D> {
    device: D,
    resource_config: ResourceConfig,
}

impl<D: FirmwareDevice> FirmwareFlow<D> {
    /// Create a flow for one device and its resource configuration.
    pub fn new(device: D, resource_config: ResourceConfig) -> Self {
        Self {
            device,
            resource_config,
        }
    }

    /// Load a firmware image onto the device.
    ///
    /// `path` resolves like a restore source: remote URL, device
    /// file-system path, or a bare file name under the device's default
    /// file system. Stored backup credentials are filled in the same way.
    pub fn load_firmware(
        &mut self,
        path: &str,
        vrf_management_name: Option<&str>,
    ) -> Result<()> {
        debug!(
            "Load firmware on '{}' from '{path}'",
            self.resource_config.name
        );
        let vrf = resolve_vrf(vrf_management_name, &self.resource_config);
        let mut url = resolve_source_url(path, self.device.file_system())?;
        add_auth(&mut url, &self.resource_config);

        self.device.load_firmware(&url, vrf.as_deref())?;
        info!("Firmware loaded from {url}");
        Ok(())
    }
}
