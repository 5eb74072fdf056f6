use std::fs;
use std::io::{IsTerminal, Read, Write};
use std::path::PathBuf;

use crate::clap_app;
use babbage::{
    display::write_plugin_list, error::*, pipeline, registry::PluginRegistry, resolver,
};
use clap::ArgMatches;

const ESCAPE_BYTE: u8 = 0x1b;

pub struct App {
    pub matches: ArgMatches,
}

impl App {
    pub fn new() -> Result<Self> {
        #[cfg(windows)]
        let _ = nu_ansi_term::enable_ansi_support();

        let interactive_output = std::io::stdout().is_terminal();

        Ok(App {
            matches: Self::matches(interactive_output)?,
        })
    }

    pub fn matches(interactive_output: bool) -> Result<ArgMatches> {
        let args = clap_app::normalize_args(std::env::args());
        Ok(clap_app::build_app(interactive_output).get_matches_from(args))
    }

    /// Runs the resolver and the pipeline over the selected input.
    ///
    /// Resolution failures are printed together with the full plugin listing
    /// and reported as `Ok(false)` so `main` maps them to a non-zero exit
    /// without a second diagnostic. Runtime failures bubble up as errors.
    pub fn start(&self) -> Result<bool> {
        let registry = PluginRegistry::with_builtins();

        let tokens: Vec<String> = self
            .matches
            .get_many::<String>("plugins")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        let chain = match resolver::resolve(&tokens, &registry) {
            Ok(chain) => chain,
            Err(error) => {
                let stderr = std::io::stderr();
                let mut stderr = stderr.lock();
                default_error_handler(&error, &mut stderr);
                writeln!(stderr)?;
                write_plugin_list(&mut stderr, &registry)?;
                return Ok(false);
            }
        };

        let input = self.read_input()?;
        let strip = !self.matches.get_flag("no-strip");

        let stdout = std::io::stdout();
        let mut stdout = stdout.lock();
        if self.matches.get_flag("lines") {
            let mut lines: Vec<&[u8]> = input.split(|&b| b == b'\n').collect();
            // A trailing newline does not introduce an extra empty line.
            if lines.last().is_some_and(|line| line.is_empty()) {
                lines.pop();
            }
            for line in lines {
                let line = trim_trailing_whitespace(line);
                let result = pipeline::run(&registry, line, &chain)?;
                self.write_unit(&mut stdout, &result, strip)?;
            }
        } else {
            let result = pipeline::run(&registry, &input, &chain)?;
            self.write_unit(&mut stdout, &result, strip)?;
        }

        Ok(true)
    }

    fn read_input(&self) -> Result<Vec<u8>> {
        match self.matches.get_one::<PathBuf>("file") {
            Some(path) => Ok(fs::read(path)?),
            None => {
                let mut buffer = Vec::new();
                std::io::stdin().lock().read_to_end(&mut buffer)?;
                Ok(buffer)
            }
        }
    }

    fn write_unit(&self, output: &mut dyn Write, data: &[u8], strip: bool) -> Result<()> {
        if strip {
            let cleaned: Vec<u8> = data
                .iter()
                .copied()
                .filter(|&b| b != ESCAPE_BYTE)
                .collect();
            output.write_all(&cleaned)?;
        } else {
            output.write_all(data)?;
        }
        output.write_all(b"\n")?;
        Ok(())
    }
}

/// Matches the per-line trim of the original line mode: trailing whitespace
/// (including the carriage return of CRLF input) is removed before the line
/// is processed.
fn trim_trailing_whitespace(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |pos| pos + 1);
    &line[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_cr_and_trailing_spaces() {
        assert_eq!(trim_trailing_whitespace(b"data\r"), b"data");
        assert_eq!(trim_trailing_whitespace(b"data  \t"), b"data");
        assert_eq!(trim_trailing_whitespace(b"  data"), b"  data");
        assert_eq!(trim_trailing_whitespace(b"\r\n"), b"");
    }

    #[test]
    fn lines_are_processed_independently() {
        let registry = PluginRegistry::with_builtins();
        let chain = resolver::resolve(&["incremental_xor".to_string(), "01".to_string()], &registry)
            .unwrap();

        // The key resets for every line, so identical lines give identical
        // output.
        let first = pipeline::run(&registry, &[0x41, 0x41, 0x41], &chain).unwrap();
        let second = pipeline::run(&registry, &[0x41, 0x41, 0x41], &chain).unwrap();
        assert_eq!(first, vec![0x40, 0x43, 0x42]);
        assert_eq!(first, second);
    }

    #[test]
    fn file_input_is_read_verbatim() {
        use std::io::Write as _;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"746f6d").unwrap();

        let registry = PluginRegistry::with_builtins();
        let chain = resolver::resolve(&["hex2ascii".to_string()], &registry).unwrap();
        let input = fs::read(file.path()).unwrap();
        let out = pipeline::run(&registry, &input, &chain).unwrap();
        assert_eq!(out, b"tom");
    }
}
