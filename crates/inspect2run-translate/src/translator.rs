//! Assembly of the `docker run` command line.
//!
//! Flags are emitted in a fixed order: name, `--rm`, restart policy,
//! hostname, memory, CPUs, DNS, environment, binds, ports, links, log
//! options, and finally the image. In multiline mode every emitted flag
//! group is followed by a line continuation; the image never is.

use inspect2run_common::config::TranslateOptions;
use inspect2run_common::constants::{
    COMMAND_PREFIX, EXCLUDED_ENV_PREFIXES, QUOTE_TRIGGERS, RESTART_POLICY_NONE,
};
use inspect2run_common::error::{Result, TranslateError};

use crate::memory::format_memory;
use crate::record::{InspectRecord, decode_first};

const NANOS_PER_CPU: f64 = 1_000_000_000.0;

/// Decodes a `docker inspect` document and translates its first record.
///
/// # Errors
///
/// Returns an error if the document cannot be decoded, holds no records,
/// or contains a malformed link entry.
pub fn translate_json(input: &[u8], options: &TranslateOptions) -> Result<String> {
    let record = decode_first(input)?;
    translate(&record, options)
}

/// Builds the `docker run` command that recreates `record`.
///
/// # Errors
///
/// Returns [`TranslateError::InvalidLink`] if a link entry does not have
/// the `/source:/container/alias` shape.
pub fn translate(record: &InspectRecord, options: &TranslateOptions) -> Result<String> {
    let mut cmd = CommandLine::new(options);

    cmd.push(format!("--name={}", strip_first_char(&record.name)));
    cmd.end_group();

    if record.auto_remove {
        cmd.push("--rm");
        cmd.end_group();
    }

    let restart = record.restart_policy_name.as_str();
    if !restart.is_empty() && restart != RESTART_POLICY_NONE {
        cmd.push(format!("--restart {restart}"));
        cmd.end_group();
    }

    if is_hex_encoded(&record.hostname) {
        tracing::debug!(hostname = %record.hostname, "hostname looks generated, omitting");
    } else {
        cmd.push(format!("--hostname={}", record.hostname));
        cmd.end_group();
    }

    if record.memory_limit_bytes > 0 {
        cmd.push(format!("-m {}", format_memory(record.memory_limit_bytes)));
        cmd.end_group();
    }

    if record.nano_cpus > 0 {
        cmd.push(format!("--cpus={}", format_cpus(record.nano_cpus)));
        cmd.end_group();
    }

    if !record.dns_servers.is_empty() {
        for dns in &record.dns_servers {
            cmd.push(format!("--dns={dns}"));
        }
        cmd.end_group();
    }

    for env in &record.environment {
        if is_excluded_env(env) {
            tracing::debug!(entry = %env, "skipping runtime-provided environment entry");
            continue;
        }
        cmd.push(format!("-e {}", quote_env(env)));
        cmd.end_group();
    }

    for bind in &record.binds {
        cmd.push(format!("-v {}", quote_value(bind)));
        cmd.end_group();
    }

    for (port, bindings) in &record.port_bindings {
        let container_port = port.split('/').next().unwrap_or_default();
        for binding in bindings {
            cmd.push(format!("-p {}:{container_port}", binding.host_port));
            cmd.end_group();
        }
    }

    for link in &record.links {
        cmd.push(format!("--link {}", link_target(link)?));
        cmd.end_group();
    }

    if !record.log_config.is_empty() {
        for (key, value) in &record.log_config {
            cmd.push(format!("--log-opt {key}={value}"));
        }
        cmd.end_group();
    }

    cmd.push(record.image.as_str());
    Ok(cmd.finish())
}

/// Accumulates tokens, each preceded by a single space.
struct CommandLine {
    buf: String,
    group_ending: &'static str,
}

impl CommandLine {
    fn new(options: &TranslateOptions) -> Self {
        Self {
            buf: String::from(COMMAND_PREFIX),
            group_ending: options.group_ending(),
        }
    }

    fn push(&mut self, token: impl AsRef<str>) {
        self.buf.push(' ');
        self.buf.push_str(token.as_ref());
    }

    fn end_group(&mut self) {
        self.buf.push_str(self.group_ending);
    }

    fn finish(self) -> String {
        self.buf
    }
}

fn strip_first_char(s: &str) -> &str {
    let mut chars = s.chars();
    let _ = chars.next();
    chars.as_str()
}

fn strip_last_char(s: &str) -> &str {
    let mut chars = s.chars();
    let _ = chars.next_back();
    chars.as_str()
}

/// Matches what a hex decoder accepts: an even number of hex digits.
///
/// Docker fills in the short container ID as hostname when none is given,
/// so a hex-looking value is treated as generated. The empty string also
/// decodes and is therefore omitted.
fn is_hex_encoded(value: &str) -> bool {
    value.len() % 2 == 0 && value.bytes().all(|b| b.is_ascii_hexdigit())
}

#[allow(clippy::cast_precision_loss)]
fn format_cpus(nano_cpus: i64) -> String {
    // f64 Display prints the shortest decimal that round-trips, never an exponent.
    format!("{}", nano_cpus as f64 / NANOS_PER_CPU)
}

fn is_excluded_env(entry: &str) -> bool {
    EXCLUDED_ENV_PREFIXES
        .iter()
        .any(|prefix| entry.starts_with(prefix))
}

fn needs_quotes(value: &str) -> bool {
    value.contains(QUOTE_TRIGGERS)
}

fn quote_value(value: &str) -> String {
    if needs_quotes(value) {
        format!("\"{value}\"")
    } else {
        value.to_owned()
    }
}

/// Quotes only the value half of a `KEY=VALUE` entry.
fn quote_env(entry: &str) -> String {
    if !needs_quotes(entry) {
        return entry.to_owned();
    }
    match entry.split_once('=') {
        Some((key, value)) => format!("{key}=\"{value}\""),
        None => quote_value(entry),
    }
}

/// Turns `/db:/web/alias` into `db:alias`, or `db` when the alias is the name.
fn link_target(link: &str) -> Result<String> {
    let segments: Vec<&str> = link.split('/').collect();
    let (Some(source), Some(alias)) = (segments.get(1), segments.get(3)) else {
        return Err(TranslateError::InvalidLink {
            link: link.to_owned(),
        });
    };

    let name = strip_last_char(source);
    if name == *alias {
        Ok(name.to_owned())
    } else {
        Ok(format!("{name}:{alias}"))
    }
}
