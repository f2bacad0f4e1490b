//! JSON persistence of a release report

use crate::error::CoreError;
use crate::models::Output;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

impl Output {
    /// Serializes the report as JSON and writes it to `path`.
    ///
    /// An existing file is truncated and overwritten in place. Failures are
    /// logged and handed back to the caller; nothing is written if
    /// serialization fails.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CoreError> {
        let path = path.as_ref();

        let data = serde_json::to_vec(self).map_err(|err| {
            log::error!("Error marshaling json: {}", err);
            CoreError::Serialize(err)
        })?;

        write_report(path, &data).map_err(|err| {
            log::error!("Error writing to file {}: {}", path.display(), err);
            CoreError::Write {
                path: path.to_path_buf(),
                source: err,
            }
        })?;

        log::info!("Wrote {} releases to {}", self.len(), path.display());
        Ok(())
    }

    /// Reads a report previously written by [`Output::to_file`] or the upstream engine
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|err| CoreError::Read {
            path: path.to_path_buf(),
            source: err,
        })?;

        let output: Output =
            serde_json::from_str(&content).map_err(|err| CoreError::Decode {
                path: path.to_path_buf(),
                source: err,
            })?;

        log::info!("Loaded {} releases from {}", output.len(), path.display());
        Ok(output)
    }

    /// Decodes a report from a JSON string
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json).map_err(CoreError::Parse)
    }
}

// New files get rw-r--r--; existing files keep their mode.
fn write_report(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path)?;
    file.write_all(data)?;
    file.flush()
}
