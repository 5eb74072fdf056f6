use crate::error::{Error, Result};
use crate::registry::PluginRegistry;

/// A plugin reference bound to concrete option values for one execution.
///
/// Invocations are only constructed against a registry (either by the
/// resolver or by the web host deserializing a request), so `name` is
/// expected to match a registered plugin exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub name: String,
    pub options: Vec<String>,
}

impl Invocation {
    pub fn new<S: Into<String>>(name: S, options: Vec<String>) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }
}

/// Folds the input through the pipeline, strictly left to right.
///
/// Each stage receives the previous stage's output. The first failing stage
/// aborts the whole run: later stages are never invoked and the data from
/// earlier stages is discarded. An empty pipeline returns the input
/// unchanged; rejecting it is a host policy, not an engine concern.
///
/// # Arguments
/// * `registry` - The registry to look plugins up in, by exact name
/// * `input` - The bytes to process
/// * `pipeline` - The ordered invocations to apply
///
/// # Returns
/// The fully transformed bytes, or the failure of the first failing stage
pub fn run(registry: &PluginRegistry, input: &[u8], pipeline: &[Invocation]) -> Result<Vec<u8>> {
    pipeline
        .iter()
        .try_fold(input.to_vec(), |data, invocation| {
            let plugin = registry
                .get(&invocation.name)
                .ok_or_else(|| Error::PluginNotFound(invocation.name.clone()))?;
            let expected = plugin.options().len();
            if invocation.options.len() != expected {
                return Err(Error::PluginFailed {
                    plugin: invocation.name.clone(),
                    cause: format!(
                        "expects {expected} option(s), received {}",
                        invocation.options.len()
                    ),
                });
            }
            crate::debug!("running plugin \"{}\"", invocation.name);
            plugin
                .process(&data, &invocation.options)
                .map_err(|e| Error::PluginFailed {
                    plugin: invocation.name.clone(),
                    cause: e.to_string(),
                })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::plugin::Plugin;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Failing;

    impl Plugin for Failing {
        fn name(&self) -> &str {
            "Always fails"
        }

        fn description(&self) -> &str {
            "Fails unconditionally."
        }

        fn process(&self, _data: &[u8], _options: &[String]) -> Result<Vec<u8>> {
            Err(Error::Msg("boom".to_string()))
        }
    }

    struct Recording(Arc<AtomicUsize>);

    impl Plugin for Recording {
        fn name(&self) -> &str {
            "Recorder"
        }

        fn description(&self) -> &str {
            "Counts its invocations."
        }

        fn process(&self, data: &[u8], _options: &[String]) -> Result<Vec<u8>> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(data.to_vec())
        }
    }

    fn invocation(name: &str) -> Invocation {
        Invocation::new(name, Vec::new())
    }

    #[test]
    fn empty_pipeline_is_identity() {
        let registry = PluginRegistry::with_builtins();
        let out = run(&registry, b"unchanged", &[]).unwrap();
        assert_eq!(out, b"unchanged");
    }

    #[test]
    fn base64_encode_of_tom() {
        let registry = PluginRegistry::with_builtins();
        let out = run(&registry, b"tom", &[invocation("Base 64 encode")]).unwrap();
        assert_eq!(out, b"dG9t");
    }

    #[test]
    fn encode_then_decode_round_trips() {
        let registry = PluginRegistry::with_builtins();
        let pipeline = [invocation("Base 64 encode"), invocation("Base 64 decode")];
        let input: Vec<u8> = (0u8..=255).collect();
        let out = run(&registry, &input, &pipeline).unwrap();
        assert_eq!(out, input);
    }

    #[test]
    fn rot13_twice_is_identity() {
        let registry = PluginRegistry::with_builtins();
        let pipeline = [invocation("ROT-13 encode"), invocation("ROT-13 encode")];
        let out = run(&registry, b"Hello, World!", &pipeline).unwrap();
        assert_eq!(out, b"Hello, World!");
    }

    #[test]
    fn incremental_xor_advances_and_resets_per_invocation() {
        let registry = PluginRegistry::with_builtins();
        let pipeline = [Invocation::new("Incremental Xor", vec!["01".to_string()])];
        let out = run(&registry, &[0x41, 0x41, 0x41], &pipeline).unwrap();
        assert_eq!(out, vec![0x40, 0x43, 0x42]);

        // A separate run starts over from the initial key.
        let again = run(&registry, &[0x41, 0x41, 0x41], &pipeline).unwrap();
        assert_eq!(again, vec![0x40, 0x43, 0x42]);
    }

    #[test]
    fn failure_short_circuits_and_names_the_stage() {
        let mut registry = PluginRegistry::new();
        let count = Arc::new(AtomicUsize::new(0));
        registry.register(Failing);
        registry.register(Recording(Arc::clone(&count)));

        let pipeline = [invocation("Always fails"), invocation("Recorder")];
        let err = run(&registry, b"data", &pipeline).unwrap_err();
        match err {
            Error::PluginFailed { plugin, cause } => {
                assert_eq!(plugin, "Always fails");
                assert_eq!(cause, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn stage_order_is_preserved() {
        let registry = PluginRegistry::with_builtins();
        // Reversing after encoding is not the same as encoding the reverse.
        let pipeline = [invocation("Base 64 encode"), invocation("String reverse")];
        let out = run(&registry, b"tom", &pipeline).unwrap();
        assert_eq!(out, b"t9Gd");
    }

    #[test]
    fn wrong_option_count_fails_before_the_plugin_runs() {
        let registry = PluginRegistry::with_builtins();
        let err = run(&registry, b"data", &[invocation("Xor")]).unwrap_err();
        match err {
            Error::PluginFailed { plugin, cause } => {
                assert_eq!(plugin, "Xor");
                assert!(cause.contains("expects 1 option(s)"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_name_fails_the_run() {
        let registry = PluginRegistry::with_builtins();
        let err = run(&registry, b"data", &[invocation("No such plugin")]).unwrap_err();
        assert!(matches!(err, Error::PluginNotFound(_)));
    }
}
