//! Embedding image files into brand asset slots as `data:` URLs.

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Error type for asset encoding/decoding.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Failed to read asset file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a base64 data URL")]
    NotDataUrl,

    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Guess a media type from a file extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default().to_ascii_lowercase();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

pub fn encode_data_url(bytes: &[u8], mime: &str) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Read an image file and encode it as a data URL.
pub fn data_url_from_file(path: &Path) -> Result<String, AssetError> {
    let bytes =
        fs::read(path).map_err(|source| AssetError::Read { path: path.to_path_buf(), source })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Encoding asset");
    Ok(encode_data_url(&bytes, mime_for_path(path)))
}

/// Split a `data:<mime>;base64,<payload>` URL into its media type and bytes.
pub fn decode_data_url(url: &str) -> Result<(String, Vec<u8>), AssetError> {
    let rest = url.strip_prefix("data:").ok_or(AssetError::NotDataUrl)?;
    let (header, payload) = rest.split_once(',').ok_or(AssetError::NotDataUrl)?;
    let mime = header.strip_suffix(";base64").ok_or(AssetError::NotDataUrl)?;
    let bytes = STANDARD.decode(payload)?;
    Ok((mime.to_string(), bytes))
}

/// Short human-readable description of an embedded asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSummary {
    pub mime: String,
    pub len: usize,
    /// First 12 hex characters of the SHA-256 of the decoded bytes.
    pub fingerprint: String,
}

impl AssetSummary {
    pub fn from_data_url(url: &str) -> Result<Self, AssetError> {
        let (mime, bytes) = decode_data_url(url)?;
        let digest = format!("{:x}", Sha256::digest(&bytes));
        Ok(Self { mime, len: bytes.len(), fingerprint: digest[..12].to_string() })
    }
}

impl std::fmt::Display for AssetSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {} bytes, sha256 {}", self.mime, self.len, self.fingerprint)
    }
}
