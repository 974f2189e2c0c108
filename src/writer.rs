//! Pretty, minified and gzip artifacts
//!
//! ```text
//! <output_dir>/
//! └── v1/
//!     ├── data-pp.json       4-space indent, sorted keys
//!     ├── data.json          no whitespace, sorted keys
//!     └── data-min.json.gz   data.json bytes, level 9, mtime 0
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::{Compression, GzBuilder};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::{debug, info};

use crate::document::LocaleDataDocument;
use crate::error::Result;

pub const PRETTY_FILE: &str = "data-pp.json";
pub const MINIFIED_FILE: &str = "data.json";
pub const GZIP_FILE: &str = "data-min.json.gz";

/// Paths of the files one write produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifacts {
    pub dir: PathBuf,
    pub pretty: PathBuf,
    pub minified: PathBuf,
    pub gzip: PathBuf,
}

/// Persists a validated document under `<output_dir>/<api_version>/`
#[derive(Debug, Clone)]
pub struct MultiFormatWriter {
    output_dir: PathBuf,
    api_version: String,
}

impl MultiFormatWriter {
    pub fn new(output_dir: impl Into<PathBuf>, api_version: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            api_version: api_version.into(),
        }
    }

    /// Versioned directory the artifacts land in
    pub fn version_dir(&self) -> PathBuf {
        self.output_dir.join(&self.api_version)
    }

    /// Write all three artifacts. Not transactional: a failure can leave
    /// earlier files in place.
    pub fn write(&self, document: &LocaleDataDocument) -> Result<WrittenArtifacts> {
        let dir = self.version_dir();
        fs::create_dir_all(&dir)?;

        let value = document.to_value()?;
        let minified = to_minified(&value)?;

        let artifacts = WrittenArtifacts {
            pretty: dir.join(PRETTY_FILE),
            minified: dir.join(MINIFIED_FILE),
            gzip: dir.join(GZIP_FILE),
            dir,
        };

        write_file(&artifacts.pretty, &to_pretty(&value)?)?;
        write_file(&artifacts.minified, &minified)?;
        write_file(&artifacts.gzip, &gzip(&minified)?)?;

        info!(dir = %artifacts.dir.display(), "Wrote locale data artifacts");
        Ok(artifacts)
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes)?;
    debug!(path = %path.display(), bytes = bytes.len(), "Wrote artifact");
    Ok(())
}

/// 4-space indented JSON
pub fn to_pretty(value: &Value) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    Ok(buf)
}

/// JSON without any whitespace between tokens
pub fn to_minified(value: &Value) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

/// Gzip at maximum compression with a zero timestamp, so equal input gives equal bytes
pub fn gzip(bytes: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzBuilder::new().mtime(0).write(Vec::new(), Compression::best());
    encoder.write_all(bytes)?;
    Ok(encoder.finish()?)
}
