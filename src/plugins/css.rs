use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::as_text;
use crate::error::Result;
use crate::plugin::Plugin;

// Only class and id rules are picked up, matching lines like ".foo {" or
// "div#bar{".
static SELECTOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"([.#][^{]*)\x20*\{$").unwrap());

const VENDOR_PREFIXES: [&str; 1] = ["-webkit-"];

pub struct FriendlyCss;

impl FriendlyCss {
    pub fn new() -> Self {
        FriendlyCss
    }

    /// Sort key for a declaration: vendor prefix stripped and hyphens
    /// removed, so `-webkit-border-radius` sorts next to `border-radius`.
    fn sort_key(declaration: &str) -> String {
        let mut key = declaration.trim();
        for prefix in VENDOR_PREFIXES {
            if let Some(stripped) = key.strip_prefix(prefix) {
                key = stripped;
                break;
            }
        }
        key.split(':').next().unwrap_or(key).replace('-', "")
    }

    /// Reads the rules into a selector -> declarations map, declarations
    /// sorted within each rule.
    fn read(&self, input: &str) -> BTreeMap<String, Vec<String>> {
        let mut rules: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut current: Option<String> = None;

        for line in input.lines() {
            let Some(selector) = current.take() else {
                if let Some(captures) = SELECTOR.captures(line.trim_end()) {
                    let selector = captures[1].trim_end().to_string();
                    rules.entry(selector.clone()).or_default();
                    current = Some(selector);
                }
                continue;
            };

            if line.contains('}') {
                if let Some(declarations) = rules.get_mut(&selector) {
                    declarations.sort_by(|a, b| Self::sort_key(a).cmp(&Self::sort_key(b)));
                }
                continue;
            }
            let declaration = line.trim();
            if !declaration.is_empty() {
                if let Some(declarations) = rules.get_mut(&selector) {
                    declarations.push(declaration.to_string());
                }
            }
            current = Some(selector);
        }
        rules
    }
}

impl Default for FriendlyCss {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for FriendlyCss {
    fn name(&self) -> &str {
        "Friendly CSS"
    }

    fn description(&self) -> &str {
        "Makes CSS happy."
    }

    fn process(&self, data: &[u8], _options: &[String]) -> Result<Vec<u8>> {
        let input = as_text(data)?;
        let mut out = String::new();
        for (selector, declarations) in self.read(input) {
            out.push_str(&selector);
            out.push_str("{\n");
            for declaration in declarations {
                out.push_str("  ");
                out.push_str(&declaration);
                out.push('\n');
            }
            out.push_str("}\n\n");
        }
        Ok(out.into_bytes())
    }
}
