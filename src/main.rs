// SPDX-License-Identifier: AGPL-3.0-only
// SPDX-FileCopyrightText: 2025 Steve Clarke <stephenlclarke@mac.com> - https://xyzzy.tools

/// isomapper command-line entry point.
///
/// Each input file is converted independently: XML documents are decoded to
/// their flat model as JSON, or with `--encode` a JSON model is written out
/// as an XML document of the requested schema version.  Results are printed
/// in argument order and a failing file does not stop the others.
use anyhow::{Context, Result, bail};
use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};
use isomapper::engine::ValidationReport;
use isomapper::iso::{self, Message};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read, Write};
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

/// Build-time version information.  CI may bake in a release tag via
/// `ISOMAPPER_VERSION`; otherwise the package version is used.
const VERSION: &str = match option_env!("ISOMAPPER_VERSION") {
    Some(tag) => tag,
    None => env!("CARGO_PKG_VERSION"),
};

fn branch() -> &'static str {
    option_env!("ISOMAPPER_BRANCH").unwrap_or("main")
}

/// Short commit recorded by `build.rs`, or a placeholder outside a checkout.
fn sha() -> &'static str {
    option_env!("ISOMAPPER_COMMIT").unwrap_or("0000000")
}

fn git_url() -> &'static str {
    option_env!("ISOMAPPER_GIT_URL").unwrap_or("https://github.com/stephenlclarke/isomapper.git")
}

fn rust_version() -> &'static str {
    option_env!("RUSTC_VERSION").unwrap_or("unknown")
}

fn version_string() -> String {
    format!(
        "isomapper {VERSION} (branch:{}, commit:{}) [rust:{}]",
        branch(),
        sha(),
        rust_version()
    )
}

/// Cached version string with a 'static lifetime for clap metadata.
fn version_str() -> &'static str {
    static VERSION_STR: OnceLock<String> = OnceLock::new();
    VERSION_STR.get_or_init(version_string).as_str()
}

fn main() {
    std::process::exit(match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            1
        }
    });
}

fn run() -> Result<i32> {
    let matches = match build_cli().try_get_matches() {
        Ok(m) => m,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                if err.kind() == ErrorKind::DisplayHelp {
                    print_usage();
                }
                return Ok(0);
            }
            _ => err.exit(),
        },
    };

    let opts = CliOptions::from_matches(&matches)?;
    init_tracing(opts.verbose);

    if opts.show_version {
        println!("{}", version_string());
        print_git_clone();
        return Ok(0);
    }

    if opts.list {
        for namespace in iso::supported_namespaces() {
            println!("{namespace}");
        }
        return Ok(0);
    }

    let files = opts.input_files()?;
    let mode = opts.mode();
    tracing::debug!(files = files.len(), ?mode, "converting");

    let outcomes: Vec<Result<String>> = files.par_iter().map(|path| process(path, &mode)).collect();

    let mut stdout = io::stdout().lock();
    let mut failed = false;
    for (path, outcome) in files.iter().zip(outcomes) {
        match outcome {
            Ok(text) => writeln!(stdout, "{}", text.trim_end())?,
            Err(err) => {
                eprintln!("error: {}: {err:#}", display_name(path));
                failed = true;
            }
        }
    }
    Ok(if failed { 1 } else { 0 })
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn build_cli() -> Command {
    Command::new("isomapper")
        .about("ISO 20022 mapper - convert XML messages to and from flat models")
        .disable_version_flag(true)
        .version(version_str())
        .arg(
            Arg::new("encode")
                .long("encode")
                .value_name("NAMESPACE")
                .conflicts_with("validate")
                .help("Read JSON models and write XML documents of this schema version"),
        )
        .arg(
            Arg::new("validate")
                .long("validate")
                .action(ArgAction::SetTrue)
                .help("Check decoded documents against their type constraints"),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .action(ArgAction::SetTrue)
                .help("List supported message namespaces"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .help("Log mapping decisions to stderr"),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .action(ArgAction::SetTrue)
                .help("Print version information and exit"),
        )
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .num_args(0..)
                .action(ArgAction::Append)
                .trailing_var_arg(true),
        )
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Decode,
    Encode(String),
    Validate,
}

/// Structured view of the CLI flags.
struct CliOptions {
    encode: Option<String>,
    validate: bool,
    list: bool,
    verbose: bool,
    show_version: bool,
    files: Vec<String>,
}

impl CliOptions {
    fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let encode = match matches.get_one::<String>("encode") {
            Some(namespace) if namespace.trim().is_empty() => {
                print_usage();
                bail!("invalid value for --encode: namespace is empty");
            }
            Some(namespace) => Some(namespace.trim().to_string()),
            None => None,
        };
        let files: Vec<String> = matches
            .get_many::<String>("files")
            .map(|vals| vals.map(|v| v.to_string()).collect())
            .unwrap_or_default();
        Ok(Self {
            encode,
            validate: matches.get_flag("validate"),
            list: matches.get_flag("list"),
            verbose: matches.get_flag("verbose"),
            show_version: matches.get_flag("version"),
            files,
        })
    }

    fn mode(&self) -> Mode {
        match &self.encode {
            Some(namespace) => Mode::Encode(namespace.clone()),
            None if self.validate => Mode::Validate,
            None => Mode::Decode,
        }
    }

    /// Files to convert, defaulting to stdin. Stdin can only be read once.
    fn input_files(&self) -> Result<Vec<String>> {
        if self.files.is_empty() {
            return Ok(vec!["-".to_string()]);
        }
        if self.files.iter().filter(|f| f.as_str() == "-").count() > 1 {
            bail!("stdin ('-') may only be given once");
        }
        Ok(self.files.clone())
    }
}

/// Output of a decode: the schema version alongside its flat model.
#[derive(Debug, Serialize, Deserialize)]
struct Decoded {
    namespace: String,
    message: Message,
}

/// `--encode` accepts either a bare model or the output of a decode.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EncodeInput {
    Decoded(Decoded),
    Message(Message),
}

impl EncodeInput {
    fn into_message(self) -> Message {
        match self {
            EncodeInput::Decoded(decoded) => decoded.message,
            EncodeInput::Message(message) => message,
        }
    }
}

fn process(path: &str, mode: &Mode) -> Result<String> {
    let input = read_input(path)?;
    tracing::debug!(file = display_name(path), bytes = input.len(), "read input");
    match mode {
        Mode::Decode => {
            let (namespace, message) = iso::decode(&input)?;
            let decoded = Decoded { namespace, message };
            Ok(serde_json::to_string_pretty(&decoded)?)
        }
        Mode::Encode(namespace) => {
            let model: EncodeInput =
                serde_json::from_str(&input).context("input is not a JSON flat model")?;
            iso::encode(&model.into_message(), namespace)
        }
        Mode::Validate => {
            let (namespace, report) = iso::validate(&input)?;
            Ok(render_report(path, &namespace, &report))
        }
    }
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        return Ok(buffer);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
}

fn display_name(path: &str) -> &str {
    if path == "-" { "(stdin)" } else { path }
}

fn render_report(path: &str, namespace: &str, report: &ValidationReport) -> String {
    let name = display_name(path);
    if report.is_clean() {
        return format!("{name}: valid {namespace}");
    }
    let mut out = format!(
        "{name}: {} problem(s) in {namespace}",
        report.errors.len()
    );
    for err in &report.errors {
        out.push_str("\n  ");
        out.push_str(err);
    }
    out
}

fn print_git_clone() {
    println!("  git clone {}", git_url());
}

/// Print the condensed usage guide.
fn print_usage() {
    static USAGE: &str = include_str!("../resources/messages/usage_en.txt");
    println!("\n{USAGE}");
}
