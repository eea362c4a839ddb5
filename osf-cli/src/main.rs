// Command-line interface for osf
//
// This binary previews, checks and formats OSF documents.
//
// Previewing reads the JSON block tree the OSF parser emits and renders it to one self-contained
// HTML page, the same page an editor webview shows. Checking and formatting work on the raw OSF
// source text.
//
// Usage:
//  osf preview <input> [-o <file>] [--theme <name>] [--nonce <n>] [--csp-source <src>]
//  osf check <input>                     - Report unbalanced braces and unknown block keywords
//  osf format <input> [--write]          - Re-indent the source by brace depth
//  osf generate-css                      - Print the baseline preview stylesheet
//  osf --list-themes                     - List available themes
//
// Extra Parameters:
//
// Configuration keys can be overridden with --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and applies the value over the loaded configuration.
// Example:
//  osf preview deck.json --extra-max-rows 200 --extra-resolve-includes false

use clap::{Arg, ArgAction, Command, ValueHint};
use osf_config::{Loader, OsfConfig};
use osf_render::theme::baseline_css;
use osf_render::{
    check, format_source, lint, publish, CheckOptions, Csp, IndentRules, JsonTreeParser, LogSink,
    PreviewSpec, PublishArtifact, RenderOptions, Theme,
};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("osf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for previewing, checking and formatting OSF documents")
        .long_about(
            "osf is a command-line tool for working with OSF documents.\n\n\
            Commands:\n  \
            - preview:      Render a parsed document to a standalone HTML page\n  \
            - check:        Report structural problems in OSF source\n  \
            - format:       Re-indent OSF source\n  \
            - generate-css: Print the baseline preview stylesheet\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override configuration keys.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            osf preview deck.json                   # HTML to stdout\n  \
            osf preview deck.json -o deck.html      # HTML to a file\n  \
            osf check deck.osf                      # Diagnostics, exit 1 on errors\n  \
            osf format deck.osf --write             # Re-indent in place",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-themes")
                .long("list-themes")
                .help("List available preview themes")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an osf.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("preview")
                .about("Render a parsed OSF document to HTML")
                .long_about(
                    "Render the JSON block tree produced by the OSF parser to one\n\
                    self-contained HTML page.\n\n\
                    When the input does not parse, the error page is written instead\n\
                    and the command exits with status 1.\n\n\
                    A content security policy is embedded only when --nonce is given.\n\n\
                    Examples:\n  \
                    osf preview deck.json                          # Print HTML\n  \
                    osf preview deck.json --theme corporate        # Pick a theme\n  \
                    osf preview deck.json --nonce abc --csp-source vscode-webview:",
                )
                .arg(
                    Arg::new("input")
                        .help("Path to the parsed document (JSON)")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("theme")
                        .long("theme")
                        .help("Theme name (unknown names fall back to default)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("nonce")
                        .long("nonce")
                        .help("Script nonce; enables the content security policy")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("csp-source")
                        .long("csp-source")
                        .help("Resource origin allowed for images and styles")
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Check OSF source for structural problems")
                .long_about(
                    "Report unbalanced braces and unknown @block keywords.\n\n\
                    Diagnostics are printed as <file>:<line>:<column>: <severity>: <message>.\n\
                    Exits with status 1 when any error is found; warnings alone pass.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Format an OSF source file")
                .long_about(
                    "Re-indent an OSF source file by brace depth, trim trailing\n\
                    whitespace and collapse runs of blank lines.\n\n\
                    Output is written to stdout unless --write is given.\n\n\
                    Examples:\n  \
                    osf format deck.osf                  # Format to stdout\n  \
                    osf format deck.osf --write          # Rewrite the file",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("write")
                        .long("write")
                        .short('w')
                        .help("Rewrite the file in place")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("generate-css")
                .about("Output the baseline CSS used for previews")
                .long_about(
                    "Outputs the baseline stylesheet embedded in every preview.\n\n\
                    Examples:\n  \
                    osf generate-css                    # Print CSS to stdout\n  \
                    osf generate-css > preview.css      # Save to file",
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);
    let matches = build_cli().get_matches_from(&cleaned_args);

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-themes") {
        handle_list_themes_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("preview", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                eprintln!("Missing input file. Use --help for usage information.");
                std::process::exit(1);
            };
            if let Some(theme) = sub_matches.get_one::<String>("theme") {
                config.preview.theme = theme.clone();
            }
            if let Some(source) = sub_matches.get_one::<String>("csp-source") {
                config.preview.csp_source = source.clone();
            }
            let nonce = sub_matches
                .get_one::<String>("nonce")
                .cloned()
                .or_else(|| extra_params.remove("nonce"));
            warn_unused_extras(&extra_params);

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_preview_command(input, output, nonce, &config);
        }
        Some(("check", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                eprintln!("Missing input file. Use --help for usage information.");
                std::process::exit(1);
            };
            warn_unused_extras(&extra_params);
            handle_check_command(input, &config);
        }
        Some(("format", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                eprintln!("Missing input file. Use --help for usage information.");
                std::process::exit(1);
            };
            warn_unused_extras(&extra_params);
            handle_format_command(input, sub_matches.get_flag("write"), &config);
        }
        Some(("generate-css", _)) => {
            handle_generate_css_command();
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

/// Handle the preview command
fn handle_preview_command(
    input: &str,
    output: Option<&str>,
    nonce: Option<String>,
    config: &OsfConfig,
) {
    if let Err(e) = fs::metadata(input) {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    }

    let parsed = JsonTreeParser.parse_file(Path::new(input), config.preview.resolve_includes);
    let failed = match &parsed {
        Ok(doc) => {
            log::debug!("parsed '{input}': {} blocks", doc.blocks.len());
            false
        }
        Err(err) => {
            log::error!("failed to parse '{input}': {err}");
            true
        }
    };

    let spec = PreviewSpec::new(parsed)
        .with_options(render_options_from_config(config, nonce))
        .with_sink(&LogSink);
    let spec = match output {
        Some(path) => spec.with_output_path(path),
        None => spec,
    };

    match publish(spec) {
        Ok(PublishArtifact::InMemory(html)) => print!("{html}"),
        Ok(PublishArtifact::File(path)) => log::info!("wrote {}", path.display()),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }

    if failed {
        std::process::exit(1);
    }
}

/// Handle the check command
fn handle_check_command(input: &str, config: &OsfConfig) {
    let source = read_source(input);
    let diagnostics = check(&source, &CheckOptions::from(&config.check));

    for diagnostic in &diagnostics {
        println!("{input}:{diagnostic}");
    }

    if lint::has_errors(&diagnostics) {
        std::process::exit(1);
    }
}

/// Handle the format command
fn handle_format_command(input: &str, write: bool, config: &OsfConfig) {
    let source = read_source(input);
    let formatted = format_source(&source, &IndentRules::from(&config.format));

    if !write {
        print!("{formatted}");
        return;
    }
    if formatted == source {
        log::debug!("'{input}' is already formatted");
        return;
    }
    fs::write(input, formatted).unwrap_or_else(|e| {
        eprintln!("Error writing file '{input}': {e}");
        std::process::exit(1);
    });
}

/// Handle the generate-css command
fn handle_generate_css_command() {
    print!("{}", baseline_css());
}

/// Handle the list-themes command
fn handle_list_themes_command() {
    println!("Available themes:\n");
    for theme in Theme::ALL {
        println!("  {}", theme.name());
    }
}

fn read_source(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

fn load_cli_config(explicit_path: Option<&str>) -> OsfConfig {
    let loader = Loader::new().with_optional_file("osf.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn render_options_from_config(config: &OsfConfig, nonce: Option<String>) -> RenderOptions {
    let options = RenderOptions::new(config.preview.theme())
        .with_sheet_limits((&config.preview.sheet).into());
    match nonce {
        Some(nonce) => options.with_csp(Csp::new(nonce, config.preview.csp_source.clone())),
        None => options,
    }
}

fn apply_config_overrides(config: &mut OsfConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["theme"]) {
        config.preview.theme = raw;
    }
    if let Some(raw) = take_override(extra_params, &["csp-source", "csp"]) {
        config.preview.csp_source = raw;
    }
    if let Some(raw) = take_override(extra_params, &["resolve-includes", "includes"]) {
        config.preview.resolve_includes = parse_bool_arg("resolve-includes", &raw);
    }
    if let Some(raw) = extra_params.remove("max-rows") {
        config.preview.sheet.max_rows = parse_count_arg("max-rows", &raw);
    }
    if let Some(raw) = extra_params.remove("max-cols") {
        config.preview.sheet.max_cols = parse_count_arg("max-cols", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["indent", "indent-string"]) {
        config.format.indent_string = parse_indent_arg(&raw);
    }
    if let Some(raw) = take_override(extra_params, &["max-blank-lines", "blank-lines"]) {
        config.format.max_blank_lines = parse_count_arg("max-blank-lines", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["warn-unknown-blocks"]) {
        config.check.warn_unknown_blocks = parse_bool_arg("warn-unknown-blocks", &raw);
    }
}

fn warn_unused_extras(extra_params: &HashMap<String, String>) {
    for key in extra_params.keys() {
        log::warn!("ignoring unknown parameter --extra-{key}");
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}

fn parse_count_arg(flag: &str, raw: &str) -> usize {
    raw.parse().unwrap_or_else(|_| {
        eprintln!("Invalid number '{raw}' for --extra-{flag}");
        std::process::exit(1);
    })
}

/// A number means that many spaces, `tab` means a tab, anything else is used verbatim.
fn parse_indent_arg(raw: &str) -> String {
    match raw {
        "tab" | "\\t" => "\t".to_string(),
        _ => match raw.parse::<usize>() {
            Ok(width) => " ".repeat(width),
            Err(_) => raw.to_string(),
        },
    }
}
