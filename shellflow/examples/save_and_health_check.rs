//! Demonstrates the flow layer with an in-memory device.
//!
//! The CLI transport and the automation-platform API are stubbed so the
//! example runs without a real device:
//!
//! ```bash
//! cargo run --example save_and_health_check
//! ```

use shellflow::{
    CliHandler, CliMode, CliSession, ConfigUrl, ConfigurationDevice, ConfigurationFlow,
    ConfigurationType, LiveStatus, ResourceConfig, RestoreMethod, Result, StateFlow, StatusApi,
};

/// A device whose "copy" just prints what it would do.
struct DemoDevice;

impl ConfigurationDevice for DemoDevice {
    fn file_system(&self) -> &str {
        "flash:/"
    }

    fn save(
        &mut self,
        destination: &ConfigUrl,
        configuration_type: ConfigurationType,
        vrf: Option<&str>,
    ) -> Result<Option<String>> {
        println!(
            "device: copy {configuration_type}-config {destination} (vrf: {})",
            vrf.unwrap_or("-")
        );
        Ok(None)
    }

    fn restore(
        &mut self,
        source: &ConfigUrl,
        configuration_type: ConfigurationType,
        restore_method: RestoreMethod,
        _vrf: Option<&str>,
    ) -> Result<()> {
        println!("device: copy {source} {configuration_type}-config ({restore_method})");
        Ok(())
    }
}

struct DemoSession;

impl CliSession for DemoSession {
    fn send_command(&mut self, command: &str) -> Result<String> {
        Ok(format!("echo of '{command}'"))
    }
}

struct DemoHandler;

impl CliHandler for DemoHandler {
    fn supports_mode(&self, _mode: CliMode) -> bool {
        true
    }

    fn open_session(&mut self, _mode: CliMode) -> Result<Box<dyn CliSession + '_>> {
        Ok(Box::new(DemoSession))
    }
}

struct PrintingApi;

impl StatusApi for PrintingApi {
    fn set_resource_live_status(
        &mut self,
        resource_name: &str,
        status: LiveStatus,
        description: &str,
    ) -> Result<()> {
        println!("portal: {resource_name} -> {status} ({description})");
        Ok(())
    }
}

fn main() -> Result<()> {
    // Initialize logging (set RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ResourceConfig::new("demo switch")
        .with_backup_location("ftp://192.168.4.5/backups")
        .with_backup_credentials("backup", "secret");

    let mut configuration = ConfigurationFlow::new(DemoDevice, config.clone());
    let file_name = configuration.save("", "running", None, false)?;
    println!("saved as {file_name}");

    let path = configuration.orchestration_save("shallow", None)?;
    println!("orchestration save wrote {path}");

    let mut state = StateFlow::new(DemoHandler, PrintingApi, config);
    println!("{}", state.health_check());

    Ok(())
}
