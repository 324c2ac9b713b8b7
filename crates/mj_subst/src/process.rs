//! File-processing driver: the full preprocessor pass over a directory.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use mj_tables::MacroConfig;

use crate::emit::token_enum_export;
use crate::error::FileAccessError;
use crate::substitute::substitute;

/// Suffix of input files.
pub const SOURCE_SUFFIX: &str = ".source.js";

/// Input file name for a base name.
pub fn source_name(base: &str) -> String {
    format!("{base}{SOURCE_SUFFIX}")
}

/// Derive the output name by replacing the trailing `source.js` with `js`.
///
/// Returns `None` when the name does not end in `source.js`.
pub fn output_name(input: &str) -> Option<String> {
    input
        .strip_suffix("source.js")
        .map(|stem| format!("{stem}js"))
}

/// Process every configured file under `root`, then append the token enum.
///
/// Files are handled strictly in `config.files` order: read
/// `<base>.source.js` whole, substitute iff `config.replace`, overwrite
/// `<base>.js`. After the last file the `tokenEnum` export is appended to
/// the first base's output whether or not substitution ran. The first
/// failure aborts the run; outputs already written stay on disk.
///
/// Returns the output paths written, in processing order.
pub fn process_files(root: &Path, config: &MacroConfig) -> Result<Vec<PathBuf>, FileAccessError> {
    let mut written = Vec::with_capacity(config.files.len());

    for base in &config.files {
        let input_name = source_name(base);
        let out_name = output_name(&input_name).expect("source_name always ends in source.js");
        let input = root.join(&input_name);
        let output = root.join(&out_name);

        let text = fs::read_to_string(&input).map_err(|source| FileAccessError::Read {
            path: input.clone(),
            source,
        })?;

        let replaced = if config.replace {
            substitute(&text, &config.keywords, &config.properties)
        } else {
            text
        };

        fs::write(&output, replaced).map_err(|source| FileAccessError::Write {
            path: output.clone(),
            source,
        })?;
        written.push(output);
    }

    if let Some(target) = written.first() {
        append(target, &token_enum_export(&config.keywords))?;
    }

    Ok(written)
}

fn append(path: &Path, text: &str) -> Result<(), FileAccessError> {
    OpenOptions::new()
        .append(true)
        .open(path)
        .and_then(|mut file| file.write_all(text.as_bytes()))
        .map_err(|source| FileAccessError::Append {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mj_tables::MacroConfig;

    fn write_source(dir: &Path, base: &str, text: &str) {
        fs::write(dir.join(source_name(base)), text).unwrap();
    }

    #[test]
    fn output_name_drops_the_source_infix() {
        assert_eq!(
            output_name("expression_tokenizer.source.js").as_deref(),
            Some("expression_tokenizer.js")
        );
        assert_eq!(output_name("parse_string.js"), None);
    }

    #[test]
    fn passthrough_copies_bytes_and_appends_enum() {
        let dir = tempfile::tempdir().unwrap();
        let config = MacroConfig::default();
        write_source(dir.path(), "expression_tokenizer", "let a = { type: \"comma\" };");
        write_source(dir.path(), "parse_string", "parse();");

        let written = process_files(dir.path(), &config).unwrap();
        assert_eq!(written.len(), 2);

        // replace = false: no substitution, but the enum is still appended.
        let first = fs::read_to_string(dir.path().join("expression_tokenizer.js")).unwrap();
        let enum_line = token_enum_export(&config.keywords);
        assert_eq!(first, format!("let a = {{ type: \"comma\" }};{enum_line}"));

        let second = fs::read_to_string(dir.path().join("parse_string.js")).unwrap();
        assert_eq!(second, "parse();");
    }

    #[test]
    fn replace_rewrites_keywords_and_properties() {
        let dir = tempfile::tempdir().unwrap();
        let config = MacroConfig {
            replace: true,
            ..MacroConfig::default()
        };
        write_source(dir.path(), "expression_tokenizer", "type: \"number\", obj.value");
        write_source(dir.path(), "parse_string", "");

        process_files(dir.path(), &config).unwrap();

        let out = fs::read_to_string(dir.path().join("expression_tokenizer.js")).unwrap();
        let enum_line = token_enum_export(&config.keywords);
        assert_eq!(out, format!("t: 5, obj.v{enum_line}"));
    }

    #[test]
    fn missing_input_aborts_after_earlier_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let config = MacroConfig::default();
        write_source(dir.path(), "expression_tokenizer", "tokenize();");
        // parse_string.source.js deliberately absent.

        let err = process_files(dir.path(), &config).unwrap_err();
        assert!(matches!(err, FileAccessError::Read { .. }));
        assert!(err.path().ends_with("parse_string.source.js"));

        // The completed output stays on disk, without the enum append.
        let first = fs::read_to_string(dir.path().join("expression_tokenizer.js")).unwrap();
        assert_eq!(first, "tokenize();");
        assert!(!dir.path().join("parse_string.js").exists());
    }

    #[test]
    fn stale_output_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let config = MacroConfig {
            files: vec!["parse_string".to_string()],
            ..MacroConfig::default()
        };
        fs::write(dir.path().join("parse_string.js"), "old old old").unwrap();
        write_source(dir.path(), "parse_string", "new");

        process_files(dir.path(), &config).unwrap();

        let out = fs::read_to_string(dir.path().join("parse_string.js")).unwrap();
        assert_eq!(out, format!("new{}", token_enum_export(&config.keywords)));
    }
}
