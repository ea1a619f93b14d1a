use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::FlipError;

/// Where the report goes. A file destination is created (or truncated) on open
/// and closed when the destination is finished.
pub enum Destination {
    Stdout(io::Stdout),
    File {
        path: PathBuf,
        writer: BufWriter<File>,
    },
}

impl Destination {
    pub fn open(path: Option<&Path>) -> Result<Self, FlipError> {
        match path {
            None => Ok(Destination::Stdout(io::stdout())),
            Some(p) => {
                let file = File::create(p).map_err(|source| FlipError::OpenOutput {
                    path: p.to_path_buf(),
                    source,
                })?;
                log::debug!("writing output to {}", p.display());
                Ok(Destination::File {
                    path: p.to_path_buf(),
                    writer: BufWriter::new(file),
                })
            }
        }
    }

    pub fn emit(&mut self, text: &str) -> Result<(), FlipError> {
        match self {
            Destination::Stdout(out) => out.lock().write_all(text.as_bytes())?,
            Destination::File { writer, .. } => writer.write_all(text.as_bytes())?,
        }
        Ok(())
    }

    /// Flush and close. Errors surfacing here would otherwise be lost on drop.
    pub fn finish(self) -> Result<(), FlipError> {
        match self {
            Destination::Stdout(out) => out.lock().flush()?,
            Destination::File { path, writer } => {
                let file = writer.into_inner().map_err(|e| e.into_error())?;
                drop(file);
                log::debug!("closed {}", path.display());
            }
        }
        Ok(())
    }
}
