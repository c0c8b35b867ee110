//! JSON Lines export of the training set, one address per line, for
//! inspecting exactly what the trainer sees.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use usaddr_core::{Corpus, FeatureSet};

use crate::error::{Result, TrainError};

#[derive(Serialize)]
struct ExportRecord<'a> {
    tokens: &'a [String],
    labels: &'a [String],
    features: Vec<FeatureSet>,
}

/// Write every corpus sequence with its features as one JSON object per line.
///
/// Returns the number of lines written. Failures of the sink itself are
/// reported as [`TrainError::Export`].
pub fn write_jsonl<W: Write>(corpus: &Corpus, mut writer: W) -> Result<usize> {
    for seq in corpus.sequences() {
        let record = ExportRecord {
            tokens: seq.tokens(),
            labels: seq.labels(),
            features: seq.features(),
        };
        serde_json::to_writer(&mut writer, &record).map_err(|e| {
            if e.is_io() {
                TrainError::Export(e.into())
            } else {
                TrainError::Serialization(e)
            }
        })?;
        writer.write_all(b"\n").map_err(TrainError::Export)?;
    }
    writer.flush().map_err(TrainError::Export)?;
    Ok(corpus.len())
}

/// Write the JSON Lines export to a file, creating or truncating it.
///
/// Write failures carry `path`.
pub fn write_jsonl_file(corpus: &Corpus, path: &Path) -> Result<usize> {
    let file = File::create(path).map_err(TrainError::io(path))?;
    write_jsonl(corpus, BufWriter::new(file)).map_err(|err| match err {
        TrainError::Export(source) => TrainError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_jsonl_lines() {
        let mut corpus = Corpus::new();
        corpus.add_source(
            "a.xml",
            "<Root>\
               <AddressString><StreetName>Dr.</StreetName><StreetName>Jones</StreetName></AddressString>\
               <AddressString><ZipCode>60601</ZipCode></AddressString>\
             </Root>",
        );

        let mut buf = Vec::new();
        assert_eq!(write_jsonl(&corpus, &mut buf).unwrap(), 2);

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["tokens"], serde_json::json!(["Dr.", "Jones"]));
        assert_eq!(lines[0]["features"][0]["word.endswithperiod"], serde_json::json!(1.0));
        assert_eq!(lines[1]["labels"], serde_json::json!(["ZipCode"]));
        assert_eq!(lines[1]["features"][0]["word.isdigit"], serde_json::json!(1.0));
    }

    #[test]
    fn test_write_jsonl_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("features.jsonl");
        let mut corpus = Corpus::new();
        corpus.add_source("a.xml", "<AddressString><PlaceName>Peoria</PlaceName></AddressString>");

        assert_eq!(write_jsonl_file(&corpus, &path).unwrap(), 1);
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"word=peoria\":1.0"));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("sink closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_jsonl_sink_failure() {
        let mut corpus = Corpus::new();
        corpus.add_source("a.xml", "<AddressString><PlaceName>Peoria</PlaceName></AddressString>");

        let err = write_jsonl(&corpus, FailingWriter).unwrap_err();
        match err {
            TrainError::Export(source) => assert_eq!(source.to_string(), "sink closed"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_write_jsonl_file_missing_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing").join("features.jsonl");
        let corpus = Corpus::new();

        match write_jsonl_file(&corpus, &path).unwrap_err() {
            TrainError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
