//! Autoload (device discovery) flow.

use log::info;

use crate::error::Result;
use crate::resource::ResourceConfig;

/// One discovered attribute, addressed relative to the resource root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoloadAttribute {
    /// Address of the element carrying the attribute; empty for the root.
    pub relative_address: String,

    /// Attribute name, possibly namespaced ("Shell.Vendor").
    pub name: String,

    /// Attribute value.
    pub value: String,
}

impl AutoloadAttribute {
    /// Create an attribute on an element.
    pub fn new(
        relative_address: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            relative_address: relative_address.into(),
            name: name.into(),
            value: value.into(),
        }
    }

    /// The unqualified attribute name, i.e. the part after the last dot.
    pub fn base_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

/// One discovered element of the resource structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoloadElement {
    /// Element model, e.g. "GenericChassis" or "GenericPort".
    pub model: String,

    /// Address relative to the resource root, e.g. "CH1/M2/P3".
    pub relative_address: String,

    /// Unique identifier of the element on the device.
    pub unique_id: String,
}

/// Discovery result: the element tree plus a flat attribute list.
#[derive(Debug, Clone, Default)]
pub struct AutoloadDetails {
    /// Discovered elements, root first.
    pub elements: Vec<AutoloadElement>,

    /// Attributes of all elements, addressed relatively.
    pub attributes: Vec<AutoloadAttribute>,
}

impl AutoloadDetails {
    /// Vendor, model, and OS version from the root element's attributes.
    ///
    /// Only attributes with an empty relative address are considered;
    /// namespaced names are matched by their unqualified part, the first
    /// occurrence wins, and a missing value comes back as an empty
    /// string. The scan stops once all three are found.
    pub fn device_summary(&self) -> (&str, &str, &str) {
        let mut vendor = None;
        let mut model = None;
        let mut os_version = None;

        for attribute in &self.attributes {
            if !attribute.relative_address.is_empty() {
                continue;
            }
            match attribute.base_name() {
                "Vendor" => vendor = vendor.or(Some(attribute.value.as_str())),
                "Model" => model = model.or(Some(attribute.value.as_str())),
                "OS Version" => os_version = os_version.or(Some(attribute.value.as_str())),
                _ => {}
            }
            if vendor.is_some() && model.is_some() && os_version.is_some() {
                break;
            }
        }

        (
            vendor.unwrap_or(""),
            model.unwrap_or(""),
            os_version.unwrap_or(""),
        )
    }
}

/// Device-specific discovery hook.
///
/// The resource model is opaque to the flow; the hook populates it while
/// interrogating the device and builds the details from it.
pub trait AutoloadDevice {
    /// The platform-side resource model the hook populates.
    type ResourceModel;

    /// Interrogate the device and build the discovery details.
    fn autoload(
        &mut self,
        supported_os: &[String],
        resource_model: &mut Self::ResourceModel,
    ) -> Result<AutoloadDetails>;
}

/// Discovery orchestration, generic over the device hook.
pub struct AutoloadFlow<D> {
    device: D,
    resource_config: ResourceConfig,
}

impl<D: AutoloadDevice> AutoloadFlow<D> {
    /// Create a flow for one device and its resource configuration.
    pub fn new(device: D, resource_config: ResourceConfig) -> Self {
        Self {
            device,
            resource_config,
        }
    }

    /// Read the device structure and attributes: chassis, modules, ports,
    /// port channels and power supplies.
    ///
    /// Delegates to the device hook and logs a vendor/model/OS summary
    /// from the root element's attributes before returning the details
    /// untouched.
    pub fn discover(
        &mut self,
        supported_os: &[String],
        resource_model: &mut D::ResourceModel,
    ) -> Result<AutoloadDetails> {
        info!("Starting discovery of '{}'", self.resource_config.name);
        let details = self.device.autoload(supported_os, resource_model)?;
        self.log_device_details(&details);
        Ok(details)
    }

    fn log_device_details(&self, details: &AutoloadDetails) {
        let (vendor, model, os_version) = details.device_summary();
        info!(
            "Device Vendor: \"{vendor}\", Model: \"{model}\", OS Version: \"{os_version}\""
        );
    }
}
