use std::io::Write;

use nu_ansi_term::Color::{Cyan, Yellow};

use crate::error::Result;
use crate::registry::PluginRegistry;

/// Writes the full plugin listing to the given output.
///
/// Names are shown in their command line form (spaces as underscores),
/// followed by the description and the numbered option prompts, e.g.:
///
/// ```text
/// The available plugins include:
///  replace
///    - Simple replace, "o", "i", "tommy" == "timmy"
///    Arguments:
///      1: Search for
///      2: Replace with
/// ```
pub fn write_plugin_list(output: &mut dyn Write, registry: &PluginRegistry) -> Result<()> {
    writeln!(output, "The available plugins include:")?;
    for plugin in registry.plugins() {
        let cli_name = plugin.name().replace(' ', "_").to_lowercase();
        writeln!(output, " {}", Cyan.paint(cli_name))?;
        writeln!(output, "   - {}", plugin.description())?;
        if !plugin.options().is_empty() {
            writeln!(output, "   {}", Yellow.paint("Arguments:"))?;
            for (index, prompt) in plugin.options().iter().enumerate() {
                writeln!(output, "     {}: {}", index + 1, prompt)?;
            }
        }
    }
    Ok(())
}
