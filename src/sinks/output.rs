//! Opened output destinations

use crate::core::{LoggerError, OutputTarget, Result};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};

/// A destination ready to receive whole lines
pub(crate) enum Output {
    Stdout,
    Stderr,
    File { name: String, file: Mutex<File> },
    Writer(Mutex<Box<dyn Write + Send>>),
}

impl Output {
    pub(crate) fn open(target: &OutputTarget) -> Result<Self> {
        match target {
            OutputTarget::Stdout => Ok(Output::Stdout),
            OutputTarget::Stderr => Ok(Output::Stderr),
            OutputTarget::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| {
                        LoggerError::io_operation(
                            "opening output",
                            path.display().to_string(),
                            e,
                        )
                    })?;
                Ok(Output::File {
                    name: path.display().to_string(),
                    file: Mutex::new(file),
                })
            }
        }
    }

    pub(crate) fn open_all(targets: &[OutputTarget]) -> Result<Vec<Self>> {
        targets.iter().map(Output::open).collect()
    }

    pub(crate) fn writer<W: Write + Send + 'static>(writer: W) -> Self {
        Output::Writer(Mutex::new(Box::new(writer)))
    }

    pub(crate) fn name(&self) -> &str {
        match self {
            Output::Stdout => "stdout",
            Output::Stderr => "stderr",
            Output::File { name, .. } => name,
            Output::Writer(_) => "writer",
        }
    }

    /// Write `line` in one call and flush
    pub(crate) fn write_line(&self, line: &[u8]) -> io::Result<()> {
        match self {
            Output::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(line)?;
                out.flush()
            }
            Output::Stderr => {
                let mut out = io::stderr().lock();
                out.write_all(line)?;
                out.flush()
            }
            Output::File { file, .. } => {
                let mut file = file.lock();
                file.write_all(line)
            }
            Output::Writer(writer) => {
                let mut writer = writer.lock();
                writer.write_all(line)?;
                writer.flush()
            }
        }
    }
}
