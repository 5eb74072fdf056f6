use crate::error::{Error, Result};
use crate::plugin::Plugin;

/// Parses a two-digit hex option into the XOR key byte.
fn parse_key(option: &str) -> Result<u8> {
    u8::from_str_radix(option.trim(), 16)
        .map_err(|_| Error::Msg(format!("invalid XOR key \"{option}\", expected a two digit hex value")))
}

pub struct Xor;

impl Plugin for Xor {
    fn name(&self) -> &str {
        "Xor"
    }

    fn description(&self) -> &str {
        "Expecting a two letter hex value to XOR, for example: BA or FE."
    }

    fn options(&self) -> &[&str] {
        &["XOR byte Ex: BA or FE"]
    }

    fn process(&self, data: &[u8], options: &[String]) -> Result<Vec<u8>> {
        let key = parse_key(&options[0])?;
        Ok(data.iter().map(|&b| b ^ key).collect())
    }
}

pub struct IncrementalXor;

impl Plugin for IncrementalXor {
    fn name(&self) -> &str {
        "Incremental Xor"
    }

    fn description(&self) -> &str {
        "Does an incremental XOR with the provided key. For example: BE or FF"
    }

    fn options(&self) -> &[&str] {
        &["XOR byte Ex: BA or FE"]
    }

    // The key advances by one per output byte, within this invocation only;
    // every call starts over from the option value.
    fn process(&self, data: &[u8], options: &[String]) -> Result<Vec<u8>> {
        let mut key = parse_key(&options[0])?;
        let mut out = Vec::with_capacity(data.len());
        for &byte in data {
            out.push(byte ^ key);
            key = key.wrapping_add(1);
        }
        Ok(out)
    }
}
