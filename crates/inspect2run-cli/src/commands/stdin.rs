//! Translation of a document piped on standard input.

use std::io::{Read, Write};

use inspect2run_common::config::TranslateOptions;
use inspect2run_common::error::TranslateError;
use inspect2run_translate::translate_json;

use super::Outcome;
use crate::output;

/// Reads all of `input`, translates it, and writes the command to `out`.
///
/// Unlike file mode, any read or translation failure ends the run with
/// a failed outcome. Empty input prints the usage hint instead.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn execute(
    mut input: impl Read,
    options: &TranslateOptions,
    out: &mut impl Write,
) -> anyhow::Result<Outcome> {
    let mut data = Vec::new();
    if let Err(source) = input.read_to_end(&mut data) {
        let err = TranslateError::StdinRead { source };
        tracing::error!(error = %err, "failed to read standard input");
        writeln!(out, "{err}")?;
        return Ok(Outcome::Failure);
    }

    if data.iter().all(u8::is_ascii_whitespace) {
        tracing::debug!("standard input is empty");
        output::write_usage(out)?;
        return Ok(Outcome::Success);
    }

    tracing::info!(bytes = data.len(), "translating standard input");
    match translate_json(&data, options) {
        Ok(command) => {
            output::write_block(out, None, &command)?;
            Ok(Outcome::Success)
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to translate standard input");
            output::write_error(out, "Error obtaining command from json", &err)?;
            Ok(Outcome::Failure)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    const DOC: &[u8] = br#"[{ "Name": "/cache", "Config": { "Image": "redis:7", "Hostname": "cache" } }]"#;

    fn run(input: impl Read, multiline: bool) -> (Outcome, String) {
        let mut out = Vec::new();
        let code = execute(input, &TranslateOptions::new(multiline), &mut out)
            .expect("writing to vec cannot fail");
        (code, String::from_utf8(out).expect("utf-8 output"))
    }

    struct BrokenPipe;

    impl Read for BrokenPipe {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn translates_piped_document() {
        let (code, out) = run(DOC, false);
        assert_eq!(code, Outcome::Success);
        assert_eq!(out, "docker run -d --name=cache --hostname=cache redis:7\n");
    }

    #[test]
    fn multiline_piped_document() {
        let (code, out) = run(DOC, true);
        assert_eq!(code, Outcome::Success);
        assert_eq!(
            out,
            "docker run -d --name=cache \\\n --hostname=cache \\\n redis:7\n"
        );
    }

    #[test]
    fn malformed_json_fails_with_exit_one() {
        let (code, out) = run(&b"[{"[..], false);
        assert_eq!(code, Outcome::Failure);
        assert!(out.starts_with("Error obtaining command from json: Error parsing json:"));
    }

    #[test]
    fn empty_array_fails_with_exit_one() {
        let (code, out) = run(&b"[]"[..], false);
        assert_eq!(code, Outcome::Failure);
        assert!(out.contains("no container records"));
    }

    #[test]
    fn read_failure_fails_with_exit_one() {
        let (code, out) = run(BrokenPipe, false);
        assert_eq!(code, Outcome::Failure);
        assert_eq!(out, "Error reading stdin: pipe closed\n");
    }

    #[test]
    fn empty_input_prints_usage() {
        let (code, out) = run(&b"  \n"[..], false);
        assert_eq!(code, Outcome::Success);
        assert!(out.starts_with("Usage:"));
    }
}
