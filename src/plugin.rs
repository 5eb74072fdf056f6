use serde::Serialize;

use crate::error::Result;

/// Trait for the data transformations in the plugin chain
///
/// A plugin is a named, stateless transform over a byte sequence. Besides the
/// transform itself it exposes the metadata both hosts need to present it:
/// a human readable description and one prompt string per required option.
///
/// Plugins never see each other and never keep state across invocations, so
/// a registry of plugins can be shared freely between threads.
pub trait Plugin: Send + Sync {
    /// Unique display name of the plugin (e.g. "Base 64 decode"). Words are
    /// separated by spaces; the CLI accepts underscores in their place.
    fn name(&self) -> &str;

    /// One line description shown in the plugin listing.
    fn description(&self) -> &str;

    /// Prompt strings for the options this plugin consumes, in order.
    /// The length of the slice is the number of option tokens the resolver
    /// slices off the command line for this plugin.
    fn options(&self) -> &[&str] {
        &[]
    }

    /// Transforms the input bytes using the supplied option values.
    ///
    /// The option slice is guaranteed to have exactly `options().len()`
    /// entries; validating their content is up to the plugin.
    ///
    /// # Returns
    /// The transformed bytes or an error if the transformation fails
    fn process(&self, data: &[u8], options: &[String]) -> Result<Vec<u8>>;
}

/// Serializable record describing a plugin, as consumed by the presentation
/// layers (the web frontend builds one input field per entry in `options`).
#[derive(Debug, Clone, Serialize)]
pub struct PluginInfo {
    pub name: String,
    pub description: String,
    #[serde(rename = "optionsDesc")]
    pub options_desc: Vec<String>,
    pub options: Vec<String>,
}

impl PluginInfo {
    pub fn of(plugin: &dyn Plugin) -> Self {
        let options_desc: Vec<String> = plugin.options().iter().map(|s| s.to_string()).collect();
        PluginInfo {
            name: plugin.name().to_string(),
            description: plugin.description().to_string(),
            options: vec![String::new(); options_desc.len()],
            options_desc,
        }
    }
}
