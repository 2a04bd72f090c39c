//! Input loading
//!
//! The analysis consumes one read-only byte buffer. Files are memory-
//! mapped rather than copied; an empty file gets an owned empty buffer
//! since zero-length mappings are not portable.

use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::File;
use std::ops::Deref;
use std::path::Path;

/// A read-only input buffer.
pub enum InputBuffer {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl Deref for InputBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            InputBuffer::Mapped(map) => map,
            InputBuffer::Owned(vec) => vec,
        }
    }
}

/// Map the file at `path` into memory.
pub fn slurp(path: &Path) -> Result<InputBuffer> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    let len = file
        .metadata()
        .with_context(|| format!("Failed to stat input file: {}", path.display()))?
        .len();

    if len == 0 {
        return Ok(InputBuffer::Owned(Vec::new()));
    }

    let map = unsafe { Mmap::map(&file) }
        .with_context(|| format!("Failed to map input file: {}", path.display()))?;
    Ok(InputBuffer::Mapped(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("samf-input-test-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_slurp_roundtrip() {
        let path = temp_path("roundtrip");
        let content = b"some bytes\x00with a null";
        File::create(&path).unwrap().write_all(content).unwrap();

        let buffer = slurp(&path).unwrap();
        assert_eq!(&buffer[..], content);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_slurp_empty_file() {
        let path = temp_path("empty");
        File::create(&path).unwrap();

        let buffer = slurp(&path).unwrap();
        assert!(buffer.is_empty());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_slurp_missing_file() {
        assert!(slurp(Path::new("/nonexistent/samf-no-such-file")).is_err());
    }
}
