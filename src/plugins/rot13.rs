use crate::error::Result;
use crate::plugin::Plugin;

// ROT-13 is its own inverse, so encode and decode share the transform.
fn rotate(data: &[u8]) -> Vec<u8> {
    data.iter()
        .map(|&b| match b {
            b'a'..=b'z' => b'a' + (b - b'a' + 13) % 26,
            b'A'..=b'Z' => b'A' + (b - b'A' + 13) % 26,
            other => other,
        })
        .collect()
}

pub struct Rot13Encode;

impl Plugin for Rot13Encode {
    fn name(&self) -> &str {
        "ROT-13 encode"
    }

    fn description(&self) -> &str {
        "Returns a ROT-13 encoded string."
    }

    fn process(&self, data: &[u8], _options: &[String]) -> Result<Vec<u8>> {
        Ok(rotate(data))
    }
}

pub struct Rot13Decode;

impl Plugin for Rot13Decode {
    fn name(&self) -> &str {
        "ROT-13 decode"
    }

    fn description(&self) -> &str {
        "Returns a ROT-13 decoded string."
    }

    fn process(&self, data: &[u8], _options: &[String]) -> Result<Vec<u8>> {
        Ok(rotate(data))
    }
}
