//! Docker inspect wire types.
//!
//! Only the keys the translator reads are modelled; unknown keys are
//! ignored. Docker prints `null` for unset lists and maps, so every
//! collection field decodes `null` or a missing key as empty.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// One element of the array printed by `docker inspect`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerInspect {
    /// Container name with its leading `/`.
    #[serde(default)]
    pub name: String,
    /// Image-level configuration.
    #[serde(default, deserialize_with = "null_as_default")]
    pub config: ContainerConfig,
    /// Host-dependent configuration.
    #[serde(default, deserialize_with = "null_as_default")]
    pub host_config: HostConfig,
}

/// The `Config` object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerConfig {
    /// Container hostname.
    #[serde(default, deserialize_with = "null_as_default")]
    pub hostname: String,
    /// `KEY=VALUE` environment entries.
    #[serde(default, deserialize_with = "null_as_default")]
    pub env: Vec<String>,
    /// Image reference the container was started from.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
}

/// The `HostConfig` object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HostConfig {
    /// Remove the container when it exits. Absent before API 1.25.
    #[serde(default, deserialize_with = "null_as_default")]
    pub auto_remove: bool,
    /// Bind mounts.
    #[serde(default, deserialize_with = "null_as_default")]
    pub binds: Vec<String>,
    /// Custom DNS servers.
    #[serde(default, deserialize_with = "null_as_default")]
    pub dns: Vec<String>,
    /// Legacy container links.
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Vec<String>,
    /// Logging driver settings.
    #[serde(default, deserialize_with = "null_as_default")]
    pub log_config: LogConfig,
    /// Memory limit in bytes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub memory: i64,
    /// CPU quota in units of 10^-9 CPUs.
    #[serde(default, deserialize_with = "null_as_default")]
    pub nano_cpus: i64,
    /// Published ports keyed by `port/protocol`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub port_bindings: BTreeMap<String, Vec<HostPortBinding>>,
    /// Restart policy.
    #[serde(default, deserialize_with = "null_as_default")]
    pub restart_policy: RestartPolicy,
}

/// The `HostConfig.LogConfig` object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LogConfig {
    /// Logging driver name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub r#type: String,
    /// Driver options.
    #[serde(default, deserialize_with = "null_as_default")]
    pub config: BTreeMap<String, String>,
}

/// One host side of a published port.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HostPortBinding {
    /// Host address, empty for all interfaces.
    #[serde(default, deserialize_with = "null_as_default")]
    pub host_ip: String,
    /// Host port.
    #[serde(default, deserialize_with = "null_as_default")]
    pub host_port: String,
}

/// The `HostConfig.RestartPolicy` object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestartPolicy {
    /// Policy name such as `always` or `on-failure`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
