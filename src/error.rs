use std::io::Write;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("plugin not found: {0}")]
    PluginNotFound(String),
    // Candidates are shown in their command line form so a suggestion can be
    // pasted back as a token.
    #[error("ambiguous plugin name \"{token}\". Possible matches: {}", candidates
        .iter()
        .map(|name| name.replace(' ', "_").to_lowercase())
        .collect::<Vec<_>>()
        .join(", "))]
    AmbiguousPlugin {
        token: String,
        candidates: Vec<String>,
    },
    #[error("no plugins specified")]
    NoPluginsSpecified,
    #[error("plugin \"{plugin}\" expects {expected} option(s), only {found} left on the command line")]
    MissingOptions {
        plugin: String,
        expected: usize,
        found: usize,
    },
    #[error("plugin \"{plugin}\" failed. Cause : {cause}")]
    PluginFailed { plugin: String, cause: String },
    #[error("JSON parsing error: {0}")]
    JsonError(String),
    #[error(transparent)]
    Io(#[from] ::std::io::Error),
    #[error("{0}")]
    Msg(String),
}

impl From<&'static str> for Error {
    fn from(s: &'static str) -> Self {
        Error::Msg(s.to_owned())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Msg(s)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::JsonError(error.to_string())
    }
}

impl Error {
    /// True for failures produced while turning command line tokens into a
    /// pipeline, as opposed to failures raised by a running plugin.
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Error::PluginNotFound(_)
                | Error::AmbiguousPlugin { .. }
                | Error::NoPluginsSpecified
                | Error::MissingOptions { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn default_error_handler(error: &Error, output: &mut dyn Write) {
    use nu_ansi_term::Color::Red;

    match error {
        Error::Io(io_error) if io_error.kind() == ::std::io::ErrorKind::BrokenPipe => {
            ::std::process::exit(0);
        }
        Error::PluginFailed { .. } => {
            writeln!(output, "{}: {}", Red.paint("[plugin error]"), error).ok();
        }
        e if e.is_resolution_error() => {
            writeln!(output, "{}: {}", Red.paint("[usage error]"), error).ok();
        }
        _ => {
            writeln!(output, "{}: {}", Red.paint("[babbage error]"), error).ok();
        }
    };
}
