//! The flat inspection record the translator reads from.

use std::collections::BTreeMap;

use inspect2run_common::error::{Result, TranslateError};

use crate::inspect::ContainerInspect;

/// Host side of one published port.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortBinding {
    /// Host address, empty for all interfaces.
    pub host_ip: String,
    /// Host port.
    pub host_port: String,
}

/// Read-only snapshot of the container settings that map onto `docker run` flags.
///
/// Map-valued fields are kept sorted so repeated runs print the same line,
/// but callers must not rely on the relative order of `-p` or `--log-opt`
/// tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectRecord {
    /// Container name, including the leading `/` Docker prints.
    pub name: String,
    /// Image reference.
    pub image: String,
    /// Hostname; empty or hex-looking when Docker generated it.
    pub hostname: String,
    /// `KEY=VALUE` entries in declaration order.
    pub environment: Vec<String>,
    /// Restart policy name, possibly empty.
    pub restart_policy_name: String,
    /// Whether the container is removed on exit.
    pub auto_remove: bool,
    /// Memory limit in bytes, 0 when unset.
    pub memory_limit_bytes: i64,
    /// CPU limit in billionths of a CPU, 0 when unset.
    pub nano_cpus: i64,
    /// DNS servers in declaration order.
    pub dns_servers: Vec<String>,
    /// Links as `/source:/container/alias` paths.
    pub links: Vec<String>,
    /// Bind mounts as `host:container[:mode]`.
    pub binds: Vec<String>,
    /// Published ports keyed by `port/protocol`.
    pub port_bindings: BTreeMap<String, Vec<PortBinding>>,
    /// Logging driver options.
    pub log_config: BTreeMap<String, String>,
}

impl From<ContainerInspect> for InspectRecord {
    fn from(inspect: ContainerInspect) -> Self {
        let ContainerInspect {
            name,
            config,
            host_config,
        } = inspect;

        let port_bindings = host_config
            .port_bindings
            .into_iter()
            .map(|(port, bindings)| {
                let bindings = bindings
                    .into_iter()
                    .map(|b| PortBinding {
                        host_ip: b.host_ip,
                        host_port: b.host_port,
                    })
                    .collect();
                (port, bindings)
            })
            .collect();

        Self {
            name,
            image: config.image,
            hostname: config.hostname,
            environment: config.env,
            restart_policy_name: host_config.restart_policy.name,
            auto_remove: host_config.auto_remove,
            memory_limit_bytes: host_config.memory,
            nano_cpus: host_config.nano_cpus,
            dns_servers: host_config.dns,
            links: host_config.links,
            binds: host_config.binds,
            port_bindings,
            log_config: host_config.log_config.config,
        }
    }
}

/// Decodes a `docker inspect` document and returns its first record.
///
/// The document is a JSON array; every element after the first is ignored.
///
/// # Errors
///
/// Returns [`TranslateError::Decode`] if the input is not an array of
/// inspect objects, or [`TranslateError::EmptyInput`] if the array is empty.
pub fn decode_first(input: &[u8]) -> Result<InspectRecord> {
    let records: Vec<ContainerInspect> = serde_json::from_slice(input)?;
    tracing::debug!(count = records.len(), "decoded inspect document");

    let first = records
        .into_iter()
        .next()
        .ok_or(TranslateError::EmptyInput)?;
    Ok(InspectRecord::from(first))
}
