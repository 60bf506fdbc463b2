// # dispidctl - Display Identity Tool
//
// Thin diagnostic front end over dispid-core. It:
// 1. Reads configuration from environment variables
// 2. Initializes logging
// 3. Queries the display topology once
// 4. Prints every path with its names and device identity
//
// All identity logic lives in dispid-core.
//
// ## Configuration
//
// - `DISPID_QUERY_SCOPE`: Which paths to query (active, all)
// - `DISPID_MAX_BUFFER_RETRIES`: Topology re-queries after a buffer race (1-64)
// - `DISPID_MAX_INTERFACES`: Monitor interfaces scanned per identity lookup
// - `DISPID_OUTPUT`: Output format (text, json)
// - `DISPID_LOG_LEVEL`: trace, debug, info, warn, error
//
// ## Example
//
// ```bash
// set DISPID_QUERY_SCOPE=all
// set DISPID_OUTPUT=json
// set DISPID_LOG_LEVEL=trace
//
// dispidctl
// ```

use anyhow::{Context, Result};
use dispid_core::config::{MAX_BUFFER_RETRIES_LIMIT, TopologyConfig};
use dispid_core::{
    DeviceEnumerator, DispIdConfig, DisplayConfigApi, DisplayDeviceLayer, DisplayPath,
    EnumerationConfig, QueryScope, Topology,
};
use serde_json::json;
use std::env;
use std::process::ExitCode;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for different termination scenarios
///
/// - 0: Topology printed
/// - 1: Configuration or startup error
/// - 2: Runtime error, including an unavailable topology
#[derive(Debug, Clone, Copy)]
enum DispIdExitCode {
    Success = 0,
    ConfigError = 1,
    RuntimeError = 2,
}

impl From<DispIdExitCode> for ExitCode {
    fn from(code: DispIdExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

/// Application configuration
struct Config {
    query_scope: String,
    max_buffer_retries: Option<usize>,
    max_interfaces: Option<u32>,
    output: String,
    log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        Ok(Self {
            query_scope: env::var("DISPID_QUERY_SCOPE").unwrap_or_else(|_| "active".to_string()),
            max_buffer_retries: env::var("DISPID_MAX_BUFFER_RETRIES")
                .ok()
                .map(|s| s.trim().parse())
                .transpose()
                .context("DISPID_MAX_BUFFER_RETRIES must be a number")?,
            max_interfaces: env::var("DISPID_MAX_INTERFACES")
                .ok()
                .map(|s| s.trim().parse())
                .transpose()
                .context("DISPID_MAX_INTERFACES must be a number")?,
            output: env::var("DISPID_OUTPUT").unwrap_or_else(|_| "text".to_string()),
            log_level: env::var("DISPID_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        match self.query_scope.to_lowercase().as_str() {
            "active" | "all" => {}
            _ => anyhow::bail!(
                "DISPID_QUERY_SCOPE '{}' is not supported. \
                Supported scopes: active, all",
                self.query_scope
            ),
        }

        if let Some(retries) = self.max_buffer_retries
            && (retries == 0 || retries > MAX_BUFFER_RETRIES_LIMIT)
        {
            anyhow::bail!(
                "DISPID_MAX_BUFFER_RETRIES must be between 1 and {}. Got: {}",
                MAX_BUFFER_RETRIES_LIMIT,
                retries
            );
        }

        if self.max_interfaces == Some(0) {
            anyhow::bail!("DISPID_MAX_INTERFACES must be at least 1");
        }

        match self.output.to_lowercase().as_str() {
            "text" | "json" => {}
            _ => anyhow::bail!(
                "DISPID_OUTPUT '{}' is not supported. \
                Supported formats: text, json",
                self.output
            ),
        }

        match self.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!(
                "DISPID_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            ),
        }

        Ok(())
    }

    fn scope(&self) -> QueryScope {
        if self.query_scope.eq_ignore_ascii_case("all") {
            QueryScope::All
        } else {
            QueryScope::Active
        }
    }

    fn output_format(&self) -> OutputFormat {
        if self.output.eq_ignore_ascii_case("json") {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    fn layer_config(&self) -> DispIdConfig {
        let mut config = DispIdConfig::default();
        if let Some(max_buffer_retries) = self.max_buffer_retries {
            config.topology = TopologyConfig { max_buffer_retries };
        }
        if let Some(max_interfaces) = self.max_interfaces {
            config.enumeration = EnumerationConfig { max_interfaces };
        }
        config
    }
}

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            return DispIdExitCode::ConfigError.into();
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {}", e);
        return DispIdExitCode::ConfigError.into();
    }

    let log_level = match config.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr so stdout stays parseable
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return DispIdExitCode::ConfigError.into();
    }

    let layer = match dispid_win32::display_layer(config.layer_config()) {
        Ok(layer) => layer,
        Err(e) => {
            eprintln!("Configuration validation error: {}", e);
            return DispIdExitCode::ConfigError.into();
        }
    };

    if !dispid_win32::is_supported() {
        info!("Display configuration APIs are not available on this platform");
    }

    match run(&layer, config.scope(), config.output_format()) {
        Ok(()) => DispIdExitCode::Success.into(),
        Err(e) => {
            error!("{:#}", e);
            DispIdExitCode::RuntimeError.into()
        }
    }
}

/// Query the topology once and print it
fn run<A, E>(
    layer: &DisplayDeviceLayer<A, E>,
    scope: QueryScope,
    output: OutputFormat,
) -> Result<()>
where
    A: DisplayConfigApi,
    E: DeviceEnumerator,
{
    let topology = layer
        .query_topology(scope)
        .ok_or(dispid_core::Error::TopologyUnavailable)?;

    info!(
        "Got {} path(s) and {} mode(s) for scope {}",
        topology.paths.len(),
        topology.modes.len(),
        scope.as_str()
    );

    match output {
        OutputFormat::Text => print_text(layer, &topology),
        OutputFormat::Json => print_json(layer, &topology)?,
    }

    Ok(())
}

fn print_text<A, E>(layer: &DisplayDeviceLayer<A, E>, topology: &Topology)
where
    A: DisplayConfigApi,
    E: DeviceEnumerator,
{
    for (index, path) in topology.paths.iter().enumerate() {
        let identity = layer.resolve_device_identity(path);
        println!("[{}] {}", index, describe_target(path));
        println!("  display name:   {}", layer.get_display_name(path));
        println!("  friendly name:  {}", layer.get_friendly_name(path));
        println!("  device path:    {}", layer.get_monitor_device_path(path));
        match identity {
            Some(identity) => {
                println!("  device id:      {}", identity.id);
                println!("  derived from:   {:?}", identity.source);
            }
            None => println!("  device id:      <unavailable>"),
        }
    }
}

fn print_json<A, E>(layer: &DisplayDeviceLayer<A, E>, topology: &Topology) -> Result<()>
where
    A: DisplayConfigApi,
    E: DeviceEnumerator,
{
    let report = json_report(layer, topology)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("Failed to serialize report")?
    );
    Ok(())
}

/// The topology snapshot with a `displays` entry per path
fn json_report<A, E>(
    layer: &DisplayDeviceLayer<A, E>,
    topology: &Topology,
) -> Result<serde_json::Value>
where
    A: DisplayConfigApi,
    E: DeviceEnumerator,
{
    let displays: Vec<_> = topology
        .paths
        .iter()
        .enumerate()
        .map(|(index, path)| {
            json!({
                "path_index": index,
                "display_name": layer.get_display_name(path),
                "friendly_name": layer.get_friendly_name(path),
                "device_path": layer.get_monitor_device_path(path),
                "identity": layer.resolve_device_identity(path),
            })
        })
        .collect();

    let mut report = topology.to_json_value()?;
    report["displays"] = serde_json::Value::Array(displays);
    Ok(report)
}

fn describe_target(path: &DisplayPath) -> String {
    let adapter_id = path.target.adapter_id;
    format!(
        "source {} -> target {} (adapter {:08X}{:08X})",
        path.source.id, path.target.id, adapter_id.high_part, adapter_id.low_part
    )
}
