//! Plain-text file access.
//!
//! Reads decode UTF-8 first and fall back to Latin-1 when that fails, so a
//! legacy 8-bit file still opens instead of erroring. Writes are always
//! UTF-8 and overwrite the destination in place.

use std::path::Path;

use crate::CoreResult;

/// Reads a document, decoding UTF-8 with a Latin-1 fallback.
pub fn read_document(path: &Path) -> CoreResult<String> {
    let bytes = std::fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => {
            tracing::debug!(path = %path.display(), "read file as UTF-8");
            Ok(text)
        }
        Err(err) => {
            tracing::debug!(path = %path.display(), "not valid UTF-8, decoding as Latin-1");
            Ok(decode_latin1(err.as_bytes()))
        }
    }
}

/// Writes the entire buffer to `path` as UTF-8, overwriting any existing
/// content.
pub fn write_document(path: &Path, text: &str) -> CoreResult<()> {
    std::fs::write(path, text.as_bytes())?;
    tracing::info!(path = %path.display(), bytes = text.len(), "wrote file");
    Ok(())
}

/// Latin-1 maps each byte to the Unicode code point of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_open_round_trips_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        let text = "héllo wörld\nsecond line\n";

        write_document(&path, text).unwrap();
        assert_eq!(read_document(&path).unwrap(), text);
    }

    #[test]
    fn test_round_trip_is_byte_exact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bytes.txt");
        let text = "tabs\tand\r\nmixed line endings\n";

        write_document(&path, text).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), text.as_bytes());
    }

    #[test]
    fn test_invalid_utf8_falls_back_to_latin1() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legacy.txt");
        // "café" encoded as Latin-1; 0xE9 is invalid as UTF-8 here.
        std::fs::write(&path, b"caf\xe9").unwrap();

        assert_eq!(read_document(&path).unwrap(), "café");
    }

    #[test]
    fn test_missing_file_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        assert!(matches!(
            read_document(&path),
            Err(crate::CoreError::Io(_))
        ));
    }

    #[test]
    fn test_write_overwrites_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");

        write_document(&path, "a much longer original body\n").unwrap();
        write_document(&path, "short\n").unwrap();
        assert_eq!(read_document(&path).unwrap(), "short\n");
    }
}
