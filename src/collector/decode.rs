use std::{fs, io, path::Path};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How bytes that are not valid UTF-8 are handled when reading a file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Decode {
    /// Drop invalid byte sequences.
    #[default]
    Ignore,
    /// Substitute U+FFFD for each invalid sequence.
    Replace,
}

/// Read a file and decode it as UTF-8 without ever failing on bad bytes.
///
/// Only I/O errors are returned.
pub fn read_contents(path: &Path, decode: Decode) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(decode_bytes(bytes, decode))
}

pub fn decode_bytes(bytes: Vec<u8>, decode: Decode) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            let bytes = err.into_bytes();
            match decode {
                Decode::Replace => String::from_utf8_lossy(&bytes).into_owned(),
                Decode::Ignore => {
                    let mut text = String::with_capacity(bytes.len());
                    for chunk in bytes.utf8_chunks() {
                        text.push_str(chunk.valid());
                    }
                    text
                }
            }
        }
    }
}
