use once_cell::sync::Lazy;
use regex::Regex;

use super::as_text;
use crate::error::Result;
use crate::plugin::Plugin;

static CHAR_CODE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+(?:,[0-9]{2,3})*").unwrap());

pub struct FromCharCode;

impl FromCharCode {
    pub fn new() -> Self {
        FromCharCode
    }
}

impl Default for FromCharCode {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for FromCharCode {
    fn name(&self) -> &str {
        "fromCharCode"
    }

    fn description(&self) -> &str {
        "Takes decimal and returns the ASCII letters equivalent."
    }

    fn process(&self, data: &[u8], _options: &[String]) -> Result<Vec<u8>> {
        let text = as_text(data)?;
        let mut decoded_runs = Vec::new();
        for run in CHAR_CODE_RUN.find_iter(text) {
            let mut chars = String::new();
            for code in run.as_str().split(',') {
                let value: u32 = code
                    .parse()
                    .map_err(|_| format!("invalid character code: {code}"))?;
                let ch = char::from_u32(value)
                    .ok_or_else(|| format!("character code out of range: {value}"))?;
                chars.push(ch);
            }
            decoded_runs.push(chars);
        }
        Ok(decoded_runs.join("\n").into_bytes())
    }
}
