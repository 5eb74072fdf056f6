use percent_encoding::{percent_decode, percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::Result;
use crate::plugin::Plugin;

// Everything except alphanumerics, '_', '.', '-' and '/' gets escaped.
const QUOTE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'/');

pub struct UrlEncode;

impl Plugin for UrlEncode {
    fn name(&self) -> &str {
        "Url encode"
    }

    fn description(&self) -> &str {
        "Returns a url encoded string. Ex: 'tom is cool' 'tom%20is%20cool'."
    }

    fn process(&self, data: &[u8], _options: &[String]) -> Result<Vec<u8>> {
        Ok(percent_encode(data, QUOTE_SET).to_string().into_bytes())
    }
}

pub struct UrlDecode;

impl Plugin for UrlDecode {
    fn name(&self) -> &str {
        "Url decode"
    }

    fn description(&self) -> &str {
        "Returns a url decoded string. Ex: 'tom%20is%20cool' 'tom is cool'."
    }

    fn process(&self, data: &[u8], _options: &[String]) -> Result<Vec<u8>> {
        Ok(percent_decode(data).collect())
    }
}
