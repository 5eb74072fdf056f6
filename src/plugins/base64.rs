use base64::alphabet;
use base64::engine::{DecodePaddingMode, Engine, GeneralPurpose, GeneralPurposeConfig};

use crate::error::Result;
use crate::plugin::Plugin;

// Decoders accept input with missing or present padding alike.
const FORGIVING: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true);

const STANDARD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, FORGIVING);
const URL_SAFE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, FORGIVING);

pub struct Base64Encode;

impl Plugin for Base64Encode {
    fn name(&self) -> &str {
        "Base 64 encode"
    }

    fn description(&self) -> &str {
        "Returns a base 64 encoded string."
    }

    fn process(&self, data: &[u8], _options: &[String]) -> Result<Vec<u8>> {
        Ok(STANDARD.encode(data).into_bytes())
    }
}

pub struct Base64Decode;

impl Plugin for Base64Decode {
    fn name(&self) -> &str {
        "Base 64 decode"
    }

    fn description(&self) -> &str {
        "Returns a base 64 decoded string."
    }

    fn process(&self, data: &[u8], _options: &[String]) -> Result<Vec<u8>> {
        let trimmed: Vec<u8> = data
            .iter()
            .copied()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        STANDARD
            .decode(&trimmed)
            .map_err(|e| format!("invalid base 64 input: {e}").into())
    }
}

pub struct UrlSafeBase64Encode;

impl Plugin for UrlSafeBase64Encode {
    fn name(&self) -> &str {
        "Url safe base 64 encode"
    }

    fn description(&self) -> &str {
        "Returns a url safe base 64 encoded string."
    }

    fn process(&self, data: &[u8], _options: &[String]) -> Result<Vec<u8>> {
        Ok(URL_SAFE.encode(data).into_bytes())
    }
}

pub struct UrlSafeBase64Decode;

impl Plugin for UrlSafeBase64Decode {
    fn name(&self) -> &str {
        "Url safe base 64 decode"
    }

    fn description(&self) -> &str {
        "Returns a url safe base 64 decoded string."
    }

    fn process(&self, data: &[u8], _options: &[String]) -> Result<Vec<u8>> {
        let trimmed: Vec<u8> = data
            .iter()
            .copied()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        URL_SAFE
            .decode(&trimmed)
            .map_err(|e| format!("invalid url safe base 64 input: {e}").into())
    }
}
