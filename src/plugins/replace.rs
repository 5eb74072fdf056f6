use percent_encoding::percent_decode_str;

use crate::error::Result;
use crate::plugin::Plugin;

pub struct Replace;

impl Plugin for Replace {
    fn name(&self) -> &str {
        "Replace"
    }

    fn description(&self) -> &str {
        "Simple replace, \"o\", \"i\", \"tommy\" == \"timmy\""
    }

    fn options(&self) -> &[&str] {
        &["Search for", "Replace with"]
    }

    // Both options are percent decoded first, so patterns with spaces or
    // special characters can be passed as e.g. %20.
    fn process(&self, data: &[u8], options: &[String]) -> Result<Vec<u8>> {
        let search: Vec<u8> = percent_decode_str(&options[0]).collect();
        let replace: Vec<u8> = percent_decode_str(&options[1]).collect();
        if search.is_empty() {
            return Err("the search pattern must not be empty".into());
        }

        let mut out = Vec::with_capacity(data.len());
        let mut cursor = 0;
        while cursor < data.len() {
            if data[cursor..].starts_with(&search) {
                out.extend_from_slice(&replace);
                cursor += search.len();
            } else {
                out.push(data[cursor]);
                cursor += 1;
            }
        }
        Ok(out)
    }
}
