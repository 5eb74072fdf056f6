use std::sync::Arc;

use crate::error::{Error, Result};
use crate::pipeline::Invocation;
use crate::plugin::Plugin;
use crate::registry::PluginRegistry;

/// Normalizes a raw command line token for matching: lower-case and
/// underscores turned into spaces, so `base_64_d` matches "Base 64 decode".
fn normalize(token: &str) -> String {
    token.to_lowercase().replace('_', " ")
}

/// Turns a flat token stream into a validated pipeline.
///
/// Tokens are plugin names interleaved with their option values. Each name
/// token is prefix-matched (case-insensitively, underscores as spaces)
/// against the registry; the matched plugin then consumes exactly as many
/// following tokens as it declares option prompts.
///
/// All failures here are structural and reported before any data transform
/// runs:
/// - no candidate: [`Error::PluginNotFound`]
/// - several candidates: [`Error::AmbiguousPlugin`], unless the token is an
///   exact full name, which wins over being a mere prefix of others
/// - tokens exhausted mid-options: [`Error::MissingOptions`]
/// - nothing resolved at all: [`Error::NoPluginsSpecified`]
///
/// # Returns
/// The ordered invocations ready to be run, or the first resolution failure
pub fn resolve(tokens: &[String], registry: &PluginRegistry) -> Result<Vec<Invocation>> {
    let mut pipeline = Vec::new();
    let mut cursor = 0;

    while cursor < tokens.len() {
        let token = &tokens[cursor];
        cursor += 1;

        let plugin = find_plugin(token, registry)?;
        let expected = plugin.options().len();
        let remaining = tokens.len() - cursor;
        if remaining < expected {
            return Err(Error::MissingOptions {
                plugin: plugin.name().to_string(),
                expected,
                found: remaining,
            });
        }
        let options = tokens[cursor..cursor + expected].to_vec();
        cursor += expected;

        pipeline.push(Invocation::new(plugin.name(), options));
    }

    if pipeline.is_empty() {
        return Err(Error::NoPluginsSpecified);
    }
    Ok(pipeline)
}

/// Resolves a single name token to the plugin it designates.
fn find_plugin<'a>(token: &str, registry: &'a PluginRegistry) -> Result<&'a Arc<dyn Plugin>> {
    let normalized = normalize(token);
    let candidates: Vec<&Arc<dyn Plugin>> = registry
        .plugins()
        .iter()
        .filter(|plugin| plugin.name().to_lowercase().starts_with(&normalized))
        .collect();

    if candidates.is_empty() {
        return Err(Error::PluginNotFound(token.to_string()));
    }
    if candidates.len() == 1 {
        return Ok(candidates[0]);
    }
    // An exact full name beats being a prefix of longer names.
    if let Some(exact) = candidates
        .iter()
        .find(|plugin| plugin.name().to_lowercase() == normalized)
    {
        return Ok(exact);
    }
    Err(Error::AmbiguousPlugin {
        token: token.to_string(),
        candidates: candidates.iter().map(|p| p.name().to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result as BabbageResult;
    use crate::plugin::Plugin;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn unique_prefix_resolves() {
        let registry = PluginRegistry::with_builtins();
        let pipeline = resolve(&tokens(&["base_64_d"]), &registry).unwrap();
        assert_eq!(pipeline.len(), 1);
        assert_eq!(pipeline[0].name, "Base 64 decode");
        assert!(pipeline[0].options.is_empty());
    }

    #[test]
    fn ambiguous_prefix_lists_the_candidates() {
        let registry = PluginRegistry::with_builtins();
        let err = resolve(&tokens(&["base_64"]), &registry).unwrap_err();
        match err {
            Error::AmbiguousPlugin { token, candidates } => {
                assert_eq!(token, "base_64");
                assert_eq!(candidates, vec!["Base 64 decode", "Base 64 encode"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_token_is_not_found() {
        let registry = PluginRegistry::with_builtins();
        let err = resolve(&tokens(&["morse"]), &registry).unwrap_err();
        assert!(matches!(err, Error::PluginNotFound(token) if token == "morse"));
    }

    #[test]
    fn no_tokens_means_no_plugins_specified() {
        let registry = PluginRegistry::with_builtins();
        let err = resolve(&[], &registry).unwrap_err();
        assert!(matches!(err, Error::NoPluginsSpecified));
    }

    #[test]
    fn options_are_sliced_in_order() {
        let registry = PluginRegistry::with_builtins();
        let pipeline = resolve(&tokens(&["replace", "o", "i", "hex2ascii"]), &registry).unwrap();
        assert_eq!(pipeline.len(), 2);
        assert_eq!(pipeline[0].name, "Replace");
        assert_eq!(pipeline[0].options, vec!["o", "i"]);
        assert_eq!(pipeline[1].name, "Hex2Ascii");
    }

    #[test]
    fn exhausted_options_are_a_hard_error() {
        let registry = PluginRegistry::with_builtins();
        let err = resolve(&tokens(&["replace", "o"]), &registry).unwrap_err();
        match err {
            Error::MissingOptions {
                plugin,
                expected,
                found,
            } => {
                assert_eq!(plugin, "Replace");
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    struct Named(&'static str);

    impl Plugin for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn description(&self) -> &str {
            "Test plugin."
        }

        fn process(&self, data: &[u8], _options: &[String]) -> BabbageResult<Vec<u8>> {
            Ok(data.to_vec())
        }
    }

    #[test]
    fn exact_full_name_beats_prefix_of_longer_name() {
        let mut registry = PluginRegistry::new();
        registry.register(Named("Cat"));
        registry.register(Named("Caterpillar"));

        let pipeline = resolve(&tokens(&["cat"]), &registry).unwrap();
        assert_eq!(pipeline[0].name, "Cat");

        // A strict prefix of both is still ambiguous.
        let err = resolve(&tokens(&["ca"]), &registry).unwrap_err();
        assert!(matches!(err, Error::AmbiguousPlugin { .. }));
    }

    #[test]
    fn underscores_match_spaces_in_names() {
        let registry = PluginRegistry::with_builtins();
        let pipeline = resolve(&tokens(&["incremental_xor", "0a"]), &registry).unwrap();
        assert_eq!(pipeline[0].name, "Incremental Xor");
        assert_eq!(pipeline[0].options, vec!["0a"]);
    }
}
