//! Command tokens, formatting markers, and filter tables.

/// Binary name for the CLI.
pub const BIN_NAME: &str = "inspect2run";

/// Leading tokens of every generated command.
pub const COMMAND_PREFIX: &str = "docker run -d";

/// Appended after a flag group when line-continuation output is enabled.
pub const LINE_CONTINUATION: &str = " \\\n";

/// Environment entries starting with one of these are never emitted.
///
/// The match is a plain prefix test, so `LANGUAGE=en` is dropped as well.
pub const EXCLUDED_ENV_PREFIXES: [&str; 3] = ["PATH", "LANG", "LC_ALL"];

/// Characters that force a value to be wrapped in double quotes.
pub const QUOTE_TRIGGERS: [char; 3] = [' ', '&', ';'];

/// Restart policy name that means "never restart" and is left implicit.
pub const RESTART_POLICY_NONE: &str = "no";

/// Environment variable that enables line-continuation output.
pub const FORMAT_ENV: &str = "INSPECT2RUN_FORMAT";
