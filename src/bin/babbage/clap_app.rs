use clap::{
    arg,
    builder::{styling::AnsiColor, Styles},
    crate_description, crate_name, crate_version, value_parser, Arg, ArgAction, ColorChoice,
    Command,
};
use std::path::PathBuf;

fn env_no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|x| !x.is_empty())
}

/// Rewrites the historical single-dash `-ns` spelling to `--ns` so the
/// documented grammar keeps working; clap only knows single-dash flags of
/// one character. The rewrite stops at the first plugin token so a literal
/// `-ns` plugin option is handed over untouched.
pub fn normalize_args(args: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut normalized = Vec::new();
    let mut expect_value = false;
    let mut in_plugins = false;
    for arg in args {
        if expect_value {
            expect_value = false;
        } else if !in_plugins {
            if arg == "-ns" {
                normalized.push("--ns".to_string());
                continue;
            }
            if arg == "-f" || arg == "--file" {
                expect_value = true;
            } else if !normalized.is_empty() && !arg.starts_with('-') {
                in_plugins = true;
            }
        }
        normalized.push(arg);
    }
    normalized
}

// Builds the application command line interface defining the arguments.
// Everything after the first plugin name is handed over verbatim to the
// resolver, so plugin options never clash with the flags below.
pub fn build_app(interactive_output: bool) -> Command {
    let color_when = if interactive_output && !env_no_color() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default())
        .usage(AnsiColor::Green.on_default())
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default());

    Command::new(crate_name!())
        .styles(styles)
        .version(crate_version!())
        .about(crate_description!())
        .color(color_when)
        .arg(
            arg!(-f --file <FILE> "Input file to process")
                .long_help(
                    "Specifies an input file to process. When omitted, data is \
                     read from standard input.",
                )
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(-l --lines "Process each line individually")
                .long_help(
                    "Switch from full input processing to line by line processing. \
                     This has a dramatic effect on the output of some plugins, for \
                     example base_64_encode will return an encoding per line as \
                     opposed to a single encoding.",
                )
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-strip")
                .long("ns")
                .alias("no-strip")
                .help("Preserve terminal escape codes in the output")
                .long_help(
                    "Keeps the terminal escape byte (0x1B) in the output. By default \
                     it is stripped so decoded data cannot mangle the terminal.",
                )
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("plugins")
                .help("The list of plugins and their arguments")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags_and_plugin_tokens() {
        let matches = build_app(false)
            .try_get_matches_from(["babbage", "-f", "in.txt", "-l", "replace", "0", "3"])
            .unwrap();
        assert!(matches.get_flag("lines"));
        assert!(!matches.get_flag("no-strip"));
        let tokens: Vec<&String> = matches.get_many::<String>("plugins").unwrap().collect();
        assert_eq!(tokens, ["replace", "0", "3"]);
    }

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_dash_ns_sets_the_flag() {
        let matches = build_app(false)
            .try_get_matches_from(normalize_args(args(&["babbage", "-ns", "rot-13_e"])))
            .unwrap();
        assert!(matches.get_flag("no-strip"));
        let tokens: Vec<&String> = matches.get_many::<String>("plugins").unwrap().collect();
        assert_eq!(tokens, ["rot-13_e"]);
    }

    #[test]
    fn single_dash_ns_is_rewritten_after_a_file_value() {
        let normalized = normalize_args(args(&["babbage", "-f", "in.txt", "-ns", "hex2ascii"]));
        assert_eq!(normalized, ["babbage", "-f", "in.txt", "--ns", "hex2ascii"]);
    }

    #[test]
    fn ns_after_the_first_plugin_token_is_left_alone() {
        let normalized = normalize_args(args(&["babbage", "replace", "-ns", "x"]));
        assert_eq!(normalized, ["babbage", "replace", "-ns", "x"]);
    }

    #[test]
    fn plugin_list_may_be_empty() {
        let matches = build_app(false).try_get_matches_from(["babbage"]).unwrap();
        assert!(matches.get_many::<String>("plugins").is_none());
    }
}
