//! Image payloads.
//!
//! An uploaded image travels through the pipeline as a self-describing
//! payload (media type + raw bytes) and crosses the wire as a base64 data
//! URI. Encoding is reversible: decoding a data URI yields byte-identical
//! original data.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// File extensions the upload control accepts.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Map a file extension to its media type. Returns `None` for extensions
/// outside the allowed set.
pub fn media_type_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

fn is_allowed_media_type(media_type: &str) -> bool {
    matches!(media_type, "image/jpeg" | "image/png" | "image/webp")
}

/// An encoded image ready for embedding in a request body.
///
/// Serializes as its data URI form, so records holding a payload stay
/// valid JSON without a separate binary channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ImagePayload {
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl ImagePayload {
    pub fn new(media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Encode as `data:{media_type};base64,{payload}`.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.media_type, BASE64.encode(&self.bytes))
    }

    /// Decode a data URI produced by [`to_data_uri`](Self::to_data_uri).
    pub fn from_data_uri(uri: &str) -> Result<Self, CoreError> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| CoreError::InvalidDataUri("missing data: scheme".to_string()))?;
        let (media_type, encoded) = rest
            .split_once(";base64,")
            .ok_or_else(|| CoreError::InvalidDataUri("missing ;base64, separator".to_string()))?;
        let bytes = BASE64
            .decode(encoded)
            .map_err(|e| CoreError::InvalidDataUri(e.to_string()))?;
        Ok(Self {
            media_type: media_type.to_string(),
            bytes,
        })
    }
}

impl From<ImagePayload> for String {
    fn from(payload: ImagePayload) -> String {
        payload.to_data_uri()
    }
}

impl TryFrom<String> for ImagePayload {
    type Error = CoreError;

    fn try_from(uri: String) -> Result<Self, Self::Error> {
        ImagePayload::from_data_uri(&uri)
    }
}

/// Validate an upload and produce its payload.
///
/// The declared media type wins when present; otherwise the type is derived
/// from the filename extension. The allowed-set check here is advisory —
/// the file picker already restricts extensions — so a bare filename with
/// no extension and no declared type falls back to `image/jpeg` rather
/// than failing the upload.
pub fn ingest(
    filename: &str,
    declared_type: Option<&str>,
    bytes: Vec<u8>,
) -> Result<ImagePayload, CoreError> {
    if let Some(declared) = declared_type {
        if !is_allowed_media_type(declared) {
            return Err(CoreError::UnsupportedImageType(declared.to_string()));
        }
        return Ok(ImagePayload::new(declared, bytes));
    }

    match filename.rsplit_once('.') {
        Some((_, ext)) => match media_type_for_extension(ext) {
            Some(media_type) => Ok(ImagePayload::new(media_type, bytes)),
            None => Err(CoreError::UnsupportedImageType(ext.to_ascii_lowercase())),
        },
        None => Ok(ImagePayload::new("image/jpeg", bytes)),
    }
}
