//! # Hash Module
//!
//! Content digests for artifact subjects. Every subject in a provenance
//! statement is addressed by the SHA-256 of its bytes, encoded as lowercase hex.
//!
//! ## Examples
//!
//! ### Hashing bytes
//! ```
//! use actions_provenance::hash::calculate_hash;
//!
//! let hash = calculate_hash(b"Hello, World!");
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! ### File hashing
//! ```no_run
//! use actions_provenance::hash::calculate_file_hash;
//! use std::path::Path;
//!
//! let hash = calculate_file_hash(Path::new("target/release/app")).unwrap();
//! assert_eq!(hash.len(), 64);
//! ```

use crate::error::Result;
use crate::utils::safe_open_file;
use sha2::{Digest, Sha256};
use std::io::Read;
use std::path::Path;

/// Digest set key for subject digests.
pub const SHA256_ALG: &str = "sha256";

/// Length of a hex-encoded SHA-256 digest.
pub const SHA256_HEX_LEN: usize = 64;

/// Calculate the SHA-256 hash of the given data
///
/// # Examples
///
/// ```
/// use actions_provenance::hash::calculate_hash;
///
/// let hash = calculate_hash(b"");
/// assert_eq!(
///     hash,
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// ```
pub fn calculate_hash(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Calculate the SHA-256 hash of a file
///
/// The file is read in fixed-size chunks, so memory use does not grow with the
/// file size. Symlinks are followed; the digest covers the target's contents.
///
/// # Errors
///
/// Returns an error if the path does not resolve to a regular file or if
/// reading fails part way through.
pub fn calculate_file_hash(path: impl AsRef<Path>) -> Result<String> {
    let file = safe_open_file(path.as_ref(), true)?;
    hash_reader::<Sha256, _>(file)
}

/// Returns true if `hash` looks like a lowercase hex SHA-256 digest.
pub fn is_sha256_hex(hash: &str) -> bool {
    hash.len() == SHA256_HEX_LEN
        && hash
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

fn hash_reader<D: Digest, R: Read>(mut reader: R) -> Result<String> {
    let mut hasher = D::new();
    let mut buffer = [0; 8192];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::utils::safe_create_file;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_calculate_hash() {
        let hash = calculate_hash(b"test data");
        assert_eq!(hash.len(), SHA256_HEX_LEN);
        assert!(is_sha256_hex(&hash));
    }

    #[test]
    fn test_calculate_hash_known_vector() {
        assert_eq!(
            calculate_hash(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_calculate_file_hash() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("test.txt");

        {
            let mut file = safe_create_file(&file_path, false)?;
            file.write_all(b"test data")?;
        }

        let file_hash = calculate_file_hash(&file_path)?;
        assert_eq!(file_hash, calculate_hash(b"test data"));

        Ok(())
    }

    #[test]
    fn test_file_hash_spans_multiple_chunks() -> Result<()> {
        let dir = tempdir()?;
        let file_path = dir.path().join("large.bin");
        let data: Vec<u8> = (0..50_000u32).map(|i| (i % 251) as u8).collect();
        std::fs::write(&file_path, &data)?;

        assert_eq!(calculate_file_hash(&file_path)?, calculate_hash(&data));
        Ok(())
    }

    #[test]
    fn test_same_content_same_hash_regardless_of_name() -> Result<()> {
        let dir = tempdir()?;
        let a = dir.path().join("a.bin");
        std::fs::create_dir(dir.path().join("nested"))?;
        let b = dir.path().join("nested").join("b.other");
        std::fs::write(&a, b"identical")?;
        std::fs::write(&b, b"identical")?;

        assert_eq!(calculate_file_hash(&a)?, calculate_file_hash(&b)?);
        Ok(())
    }

    #[test]
    fn test_calculate_file_hash_missing_file() {
        let dir = tempdir().unwrap();
        let result = calculate_file_hash(dir.path().join("nope"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_is_sha256_hex() {
        assert!(is_sha256_hex(&"a".repeat(64)));
        assert!(!is_sha256_hex(&"A".repeat(64)));
        assert!(!is_sha256_hex(&"a".repeat(63)));
        assert!(!is_sha256_hex(&"g".repeat(64)));
    }
}
