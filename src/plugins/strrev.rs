use crate::error::Result;
use crate::plugin::Plugin;

pub struct StrRev;

impl Plugin for StrRev {
    fn name(&self) -> &str {
        "String reverse"
    }

    fn description(&self) -> &str {
        "Returns a reversed string. Ex: 'tom' == 'mot'."
    }

    // Valid UTF-8 is reversed character-wise so multi-byte sequences stay
    // intact; anything else is reversed byte-wise.
    fn process(&self, data: &[u8], _options: &[String]) -> Result<Vec<u8>> {
        match std::str::from_utf8(data) {
            Ok(text) => Ok(text.chars().rev().collect::<String>().into_bytes()),
            Err(_) => Ok(data.iter().rev().copied().collect()),
        }
    }
}
