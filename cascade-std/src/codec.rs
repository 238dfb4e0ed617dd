//! Base64 and opaque-object codec.
//!
//! Encoded text uses the standard alphabet without `=` padding or line
//! breaks. Decoding accepts both padded and unpadded input, wrapped or not.
//!
//! Opaque objects are serialized as JSON before the base64 step.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Errors from the codec helpers.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The text is not valid base64.
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The object could not be serialized or deserialized.
    #[error("invalid object encoding: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Encodes bytes as unpadded standard base64.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    let mut encoded = STANDARD.encode(bytes);
    let kept = encoded.trim_end_matches(['=', '\n']).len();
    encoded.truncate(kept);
    encoded
}

/// Decodes standard base64, restoring any missing `=` padding first.
///
/// ASCII whitespace anywhere in `text` is ignored, so line-wrapped input
/// decodes like the same text on one line.
pub fn decode(text: &str) -> Result<Vec<u8>, CodecError> {
    let mut compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let kept = compact.trim_end_matches('=').len();
    compact.truncate(kept);

    let padding = (4 - compact.len() % 4) % 4;
    compact.extend(std::iter::repeat_n('=', padding));

    Ok(STANDARD.decode(compact)?)
}

/// Serializes `value` and encodes the result.
pub fn encode_opaque<T: Serialize + ?Sized>(value: &T) -> Result<String, CodecError> {
    Ok(encode(serde_json::to_vec(value)?))
}

/// Decodes text produced by [`encode_opaque`].
pub fn decode_opaque<T: DeserializeOwned>(text: &str) -> Result<T, CodecError> {
    Ok(serde_json::from_slice(&decode(text)?)?)
}
