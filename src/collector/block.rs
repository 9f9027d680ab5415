//! The block format: two blank lines, a header naming the file, then the
//! file contents verbatim.

use std::io::{self, Write};

const HEADER_PREFIX: &str = "\n\n--- FILE: ";
const HEADER_SUFFIX: &str = " ---\n";

pub fn render_block(path: &str, contents: &str) -> String {
    let mut block = String::with_capacity(block_len(path, contents));
    block.push_str(HEADER_PREFIX);
    block.push_str(path);
    block.push_str(HEADER_SUFFIX);
    block.push_str(contents);
    block
}

/// Write one block and return the number of bytes written.
pub fn write_block<W: Write>(writer: &mut W, path: &str, contents: &str) -> io::Result<usize> {
    writer.write_all(HEADER_PREFIX.as_bytes())?;
    writer.write_all(path.as_bytes())?;
    writer.write_all(HEADER_SUFFIX.as_bytes())?;
    writer.write_all(contents.as_bytes())?;
    Ok(block_len(path, contents))
}

fn block_len(path: &str, contents: &str) -> usize {
    HEADER_PREFIX.len() + path.len() + HEADER_SUFFIX.len() + contents.len()
}
