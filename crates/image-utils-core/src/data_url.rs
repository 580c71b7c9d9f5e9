//! Base64 `data:` URLs, the form browser upload widgets hand files over in.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

/// Errors from parsing a data URL.
#[derive(Debug, Error)]
pub enum DataUrlError {
    #[error("Not a data URL (missing \"data:\" prefix)")]
    MissingPrefix,

    #[error("Data URL has no payload separator")]
    MissingComma,

    #[error("Data URL is not base64-encoded")]
    NotBase64,

    #[error("Invalid base64 payload: {0}")]
    InvalidPayload(#[from] base64::DecodeError),
}

/// A decoded data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    /// Media type from the header, e.g. `image/png`. May be empty.
    ///
    /// Informational only: decoders sniff the format from `bytes`.
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Parse `data:<mime>[;param]*;base64,<payload>`.
///
/// Only base64 payloads are accepted. Whitespace inside the payload is
/// ignored, as browsers sometimes wrap long URLs.
pub fn parse_data_url(url: &str) -> Result<DataUrl, DataUrlError> {
    let rest = url.trim().strip_prefix("data:").ok_or(DataUrlError::MissingPrefix)?;
    let (header, payload) = rest.split_once(',').ok_or(DataUrlError::MissingComma)?;

    let mut params = header.split(';');
    let mime = params.next().unwrap_or_default().to_string();
    if !params.any(|p| p.eq_ignore_ascii_case("base64")) {
        return Err(DataUrlError::NotBase64);
    }

    let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = STANDARD.decode(compact)?;

    Ok(DataUrl { mime, bytes })
}

/// Render bytes as `data:<mime>;base64,<payload>`.
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}
