use alloc::{string::String, vec::Vec};
use base64::{engine::general_purpose::STANDARD, DecodeError, Engine as _};
use serde::{Deserialize, Serialize};

/// An image embedded in a survey, kept exactly as the base64 text that
/// travels over the wire.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Image(String);

impl Image {
    /// Encodes raw image bytes with the standard padded alphabet.
    pub fn encode(bytes: &[u8]) -> Self {
        Self(STANDARD.encode(bytes))
    }

    /// Decodes the payload back into raw bytes. Line breaks and other ASCII
    /// whitespace are tolerated since some encoders wrap at 76 columns.
    pub fn decode(&self) -> Result<Vec<u8>, DecodeError> {
        let compact: Vec<u8> = self.0.bytes().filter(|byte| !byte.is_ascii_whitespace()).collect();
        STANDARD.decode(compact)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Image {
    fn from(text: String) -> Self {
        Self(text)
    }
}
