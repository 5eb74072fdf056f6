use crate::error::Result;
use crate::plugin::Plugin;

pub struct JsonPrettyPrint;

impl Plugin for JsonPrettyPrint {
    fn name(&self) -> &str {
        "JSON Pretty Print"
    }

    fn description(&self) -> &str {
        "Pretty Prints a JSON object"
    }

    // Object keys come back sorted because serde_json maps are ordered.
    fn process(&self, data: &[u8], _options: &[String]) -> Result<Vec<u8>> {
        let value: serde_json::Value = serde_json::from_slice(data)?;
        Ok(serde_json::to_vec_pretty(&value)?)
    }
}
