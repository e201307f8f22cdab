//! Translation of inspect documents given as file arguments.

use std::io::Write;
use std::path::{Path, PathBuf};

use inspect2run_common::config::TranslateOptions;
use inspect2run_common::error::{Result, TranslateError};
use inspect2run_translate::translate_json;

use crate::output;

/// Translates each file in order and writes one block per file.
///
/// A file that cannot be checked, read, or translated is reported and
/// skipped; the remaining files are still processed. Directories are
/// skipped silently. With more than one argument every block is headed
/// by the file name and followed by a blank line, except the last.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails.
pub fn execute(
    paths: &[PathBuf],
    options: &TranslateOptions,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let labelled = paths.len() > 1;

    for (i, arg) in paths.iter().enumerate() {
        let path = std::path::absolute(arg).unwrap_or_else(|_| arg.clone());

        let command = match translate_file(&path, options) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) if err.is_input_error() => {
                tracing::warn!(path = %path.display(), error = %err, "skipping file");
                let context = format!("Error obtaining command from file {}", path.display());
                output::write_error(out, &context, &err)?;
                continue;
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping file");
                writeln!(out, "{err}")?;
                continue;
            }
        };

        output::write_block(out, labelled.then_some(path.as_path()), &command)?;
        if labelled && i + 1 < paths.len() {
            output::write_separator(out)?;
        }
    }

    Ok(())
}

/// Reads and translates one file; `Ok(None)` means the path is a directory.
fn translate_file(path: &Path, options: &TranslateOptions) -> Result<Option<String>> {
    let metadata = std::fs::metadata(path).map_err(|source| TranslateError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    if metadata.is_dir() {
        tracing::debug!(path = %path.display(), "skipping directory");
        return Ok(None);
    }

    let content = std::fs::read(path).map_err(|source| TranslateError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), bytes = content.len(), "translating file");
    translate_json(&content, options).map(Some)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const WEB: &str = r#"[{ "Name": "/web", "Config": { "Image": "nginx", "Hostname": "web" } }]"#;
    const DB: &str = r#"[{
        "Name": "/db",
        "Config": { "Image": "postgres:16", "Hostname": "a1b2c3d4e5f6", "Env": ["PGDATA=/data"] },
        "HostConfig": { "RestartPolicy": { "Name": "always" } }
    }]"#;

    fn run(paths: &[PathBuf], multiline: bool) -> String {
        let mut out = Vec::new();
        execute(paths, &TranslateOptions::new(multiline), &mut out)
            .expect("writing to vec cannot fail");
        String::from_utf8(out).expect("utf-8 output")
    }

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).expect("write fixture");
        path
    }

    #[test]
    fn single_file_prints_bare_command() {
        let dir = tempfile::tempdir().expect("tempdir");
        let web = write(dir.path(), "web.json", WEB);

        assert_eq!(
            run(&[web], false),
            "docker run -d --name=web --hostname=web nginx\n"
        );
    }

    #[test]
    fn several_files_get_headers_and_separators() {
        let dir = tempfile::tempdir().expect("tempdir");
        let web = write(dir.path(), "web.json", WEB);
        let db = write(dir.path(), "db.json", DB);

        assert_eq!(
            run(&[web, db], false),
            "File: web.json\n\
             docker run -d --name=web --hostname=web nginx\n\
             \n\
             File: db.json\n\
             docker run -d --name=db --restart always -e PGDATA=/data postgres:16\n"
        );
    }

    #[test]
    fn missing_file_is_reported_and_skipped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("missing.json");
        let web = write(dir.path(), "web.json", WEB);

        let out = run(&[missing, web], false);
        assert!(out.starts_with("Error checking file "));
        assert!(out.contains("missing.json"));
        assert!(out.ends_with("File: web.json\ndocker run -d --name=web --hostname=web nginx\n"));
    }

    #[test]
    fn malformed_file_does_not_leak_into_next() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = write(dir.path(), "db.json", DB);
        let broken = write(dir.path(), "broken.json", "[{\"Name\": \"/half");
        let web = write(dir.path(), "web.json", WEB);

        let out = run(&[db, broken, web], false);
        assert!(out.contains("Error obtaining command from file "));
        assert!(out.contains("broken.json: Error parsing json:"));
        let web_block = out.split("File: web.json\n").nth(1).expect("web block");
        assert_eq!(web_block, "docker run -d --name=web --hostname=web nginx\n");
    }

    #[test]
    fn empty_array_file_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let empty = write(dir.path(), "empty.json", "[]");

        let out = run(&[empty], false);
        assert!(out.contains("empty.json: Error parsing json: no container records in input"));
    }

    #[test]
    fn directories_are_skipped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let web = write(dir.path(), "web.json", WEB);

        let out = run(&[dir.path().to_path_buf(), web], false);
        assert_eq!(out, "File: web.json\ndocker run -d --name=web --hostname=web nginx\n");
    }

    #[test]
    fn multiline_applies_to_every_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let web = write(dir.path(), "web.json", WEB);

        assert_eq!(
            run(&[web], true),
            "docker run -d --name=web \\\n --hostname=web \\\n nginx\n"
        );
    }
}
