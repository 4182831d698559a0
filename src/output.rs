// src/output.rs

//! Where the rendered PKGBUILD goes

use crate::config::STDOUT_MARKER;
use crate::error::{Error, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// An opened output destination
#[derive(Debug)]
pub enum Destination {
    Stdout(Stdout),
    File { path: PathBuf, file: File },
}

impl Destination {
    /// Open `output`, or stdout when it is `-`
    ///
    /// Files are created exclusively: an existing file is an error and is
    /// never truncated.
    pub fn open(output: &str) -> Result<Self> {
        if output == STDOUT_MARKER {
            return Ok(Self::Stdout(io::stdout()));
        }

        let path = Path::new(output);
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|source| Error::Destination {
                path: output.to_string(),
                source,
            })?;
        debug!("Created output file {}", path.display());

        Ok(Self::File {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn is_stdout(&self) -> bool {
        matches!(self, Self::Stdout(_))
    }

    /// Path of the output file, if writing to one
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdout(_) => None,
            Self::File { path, .. } => Some(path),
        }
    }
}

impl Write for Destination {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(out) => out.write(buf),
            Self::File { file, .. } => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(out) => out.flush(),
            Self::File { file, .. } => file.flush(),
        }
    }
}
