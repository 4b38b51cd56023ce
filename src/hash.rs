use crate::error::{FileToolsError, Result};
use crate::hex::bytes_to_hex;
use md5::{Digest, Md5};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const READ_BUFFER_SIZE: usize = 65536;

/// Computes the MD5 digest of a file, streaming its contents through a bounded
/// buffer so arbitrarily large files never have to fit in memory. Returns the
/// 32-character lowercase hex digest.
pub fn md5_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    log::debug!("computing MD5 checksum of {}", path.display());

    let file = File::open(path).map_err(|e| FileToolsError::from_io(e, path.to_path_buf()))?;
    let mut reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);
    let mut hasher = Md5::new();
    let mut buffer = [0u8; READ_BUFFER_SIZE];

    loop {
        let count = reader
            .read(&mut buffer)
            .map_err(|e| FileToolsError::from_io(e, path.to_path_buf()))?;
        if count == 0 {
            break;
        }
        hasher.update(&buffer[..count]);
    }

    let digest = bytes_to_hex(hasher.finalize().as_slice());
    log::debug!("MD5 checksum of {} is {}", path.display(), digest);

    Ok(digest)
}

/// One-shot MD5 of a byte slice, as lowercase hex.
pub fn md5_bytes(data: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(data);
    bytes_to_hex(hasher.finalize().as_slice())
}

/// MD5 of a string's UTF-8 bytes. Always UTF-8, so the digest is identical
/// across platforms.
pub fn md5_string(text: &str) -> String {
    md5_bytes(text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_md5_string_empty() {
        assert_eq!(md5_string(""), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_md5_string_known_vectors() {
        assert_eq!(md5_string("hello world"), "5eb63bbbe01eeed093cb22bb8f5acdc3");
        assert_eq!(md5_string("abc"), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_md5_string_unicode() {
        // UTF-8 encoding is fixed, so non-ASCII input hashes the same everywhere
        assert_eq!(md5_string("こんにちは"), "c0e89a293bd36c7a768e4e9d2c5475a8");
    }

    #[test]
    fn test_md5_consistency() {
        let hash1 = md5_bytes(b"test data");
        let hash2 = md5_bytes(b"test data");
        assert_eq!(hash1, hash2);
    }

    #[test]
    fn test_md5_file_matches_one_shot() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("data.bin");

        // Larger than the read buffer so the streaming loop takes several passes
        let content: Vec<u8> = (0..READ_BUFFER_SIZE * 3 + 17).map(|i| (i % 251) as u8).collect();
        fs::write(&file_path, &content).unwrap();

        assert_eq!(md5_file(&file_path).unwrap(), md5_bytes(&content));
    }

    #[test]
    fn test_md5_file_empty() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty");
        fs::write(&file_path, b"").unwrap();

        assert_eq!(md5_file(&file_path).unwrap(), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_md5_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.txt");

        match md5_file(&missing) {
            Err(crate::error::FileToolsError::FileNotFound(p)) => assert_eq!(p, missing),
            other => panic!("expected FileNotFound, got {:?}", other.map(|_| ())),
        }
    }
}
