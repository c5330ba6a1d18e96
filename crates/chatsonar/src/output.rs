//! Result serialization
//!
//! Results are written only after the whole classification pass has
//! succeeded. Existing files at the target path are overwritten.

use chatsonar_core::{Classification, Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Flattened rows: text, top_class and one confidence column per class
    #[default]
    Csv,
    /// Results as returned by the classifier, pretty-printed
    Json,
}

impl OutputFormat {
    /// Extension used for the default output file name
    pub fn default_extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "txt",
        }
    }
}

/// `<dir>/<stem>-processed.<ext>` next to the input file
pub fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(|stem| stem.to_os_string())
        .unwrap_or_default();
    name.push("-processed.");
    name.push(format.default_extension());

    input.with_file_name(name)
}

/// Explicit output path if given, otherwise the default derived from `input`
pub fn resolve_output_path(input: &Path, out: Option<&Path>, format: OutputFormat) -> PathBuf {
    match out {
        Some(path) => path.to_path_buf(),
        None => default_output_path(input, format),
    }
}

/// Write `results` to `path` in `format`
pub fn write_results(path: &Path, format: OutputFormat, results: &[Classification]) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(path, results),
        OutputFormat::Json => write_json(path, results),
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    text: &'a str,
    top_class: &'static str,
    hate_speech: f64,
    offensive_language: f64,
    neither: f64,
}

impl<'a> CsvRow<'a> {
    fn from_result(result: &'a Classification) -> Result<Self> {
        let scores = result.scores()?;
        Ok(Self {
            text: &result.text,
            top_class: result.top_class.as_str(),
            hate_speech: scores.hate_speech,
            offensive_language: scores.offensive_language,
            neither: scores.neither,
        })
    }
}

/// Write a header plus one row per result. An empty result set is an error
/// and leaves `path` untouched.
pub fn write_csv(path: &Path, results: &[Classification]) -> Result<()> {
    if results.is_empty() {
        return Err(Error::output("no results to write, refusing to create a header-only CSV"));
    }

    let rows = results
        .iter()
        .map(CsvRow::from_result)
        .collect::<Result<Vec<_>>>()?;

    let file = create(path)?;
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(file);

    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Write the results as a JSON array indented with four spaces
pub fn write_json(path: &Path, results: &[Classification]) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    results.serialize(&mut serializer)?;

    std::fs::write(path, buf)
        .map_err(|e| Error::output(format!("cannot write {}: {}", path.display(), e)))
}

fn create(path: &Path) -> Result<File> {
    File::create(path).map_err(|e| Error::output(format!("cannot create {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatsonar_core::{ClassScore, ClassScores, SonarClass};
    use tempfile::TempDir;

    fn result(text: &str, hate: f64, offensive: f64, neither: f64) -> Classification {
        Classification::from_scores(
            text,
            ClassScores {
                hate_speech: hate,
                offensive_language: offensive,
                neither,
            },
        )
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("chat.txt"), OutputFormat::Csv),
            PathBuf::from("chat-processed.csv")
        );
        assert_eq!(
            default_output_path(Path::new("chat.txt"), OutputFormat::Json),
            PathBuf::from("chat-processed.txt")
        );
    }

    #[test]
    fn test_default_output_path_uses_real_extension() {
        assert_eq!(
            default_output_path(Path::new("logs.txt.d/stream.txt"), OutputFormat::Csv),
            PathBuf::from("logs.txt.d/stream-processed.csv")
        );
        assert_eq!(
            default_output_path(Path::new("logs/chat"), OutputFormat::Csv),
            PathBuf::from("logs/chat-processed.csv")
        );
    }

    #[test]
    fn test_explicit_output_wins() {
        let out = Path::new("results.csv");
        assert_eq!(
            resolve_output_path(Path::new("chat.txt"), Some(out), OutputFormat::Json),
            PathBuf::from("results.csv")
        );
    }

    #[test]
    fn test_csv_row_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        write_csv(&path, &[result("you people", 0.7, 0.2, 0.1)]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines[0], "text,top_class,hate_speech,offensive_language,neither");
        assert_eq!(lines[1], "you people,hate_speech,0.7,0.2,0.1");
        assert!(content.ends_with("\r\n"));
    }

    #[test]
    fn test_csv_quotes_commas() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        write_csv(&path, &[result("hi, \"chat\"", 0.0, 0.0, 1.0)]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().nth(1), Some("\"hi, \"\"chat\"\"\",neither,0.0,0.0,1.0"));
    }

    #[test]
    fn test_csv_empty_results_fail_without_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        let err = write_csv(&path, &[]).unwrap_err();
        assert!(matches!(err, Error::Output(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_csv_missing_class_fails_without_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        let partial = Classification {
            text: "x".to_string(),
            top_class: SonarClass::Neither,
            classes: vec![ClassScore {
                class_name: SonarClass::Neither,
                confidence: 1.0,
            }],
        };

        assert!(write_csv(&path, &[partial]).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_json_empty_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        write_json(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_json_four_space_indent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        let results = vec![result("hello", 0.1, 0.2, 0.7)];
        write_json(&path, &results).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n    {\n        \"text\": \"hello\""));

        let parsed: Vec<Classification> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, results);
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.csv");
        std::fs::write(&path, "stale contents that are longer than the new file").unwrap();

        write_results(&path, OutputFormat::Csv, &[result("a", 0.0, 1.0, 0.0)]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_unwritable_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("out.txt");

        let err = write_json(&path, &[]).unwrap_err();
        assert!(matches!(err, Error::Output(_)));
    }
}
