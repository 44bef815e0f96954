// crates/guidfmt-cli/src/main.rs
// ============================================================================
// Module: guidfmt CLI Entry Point
// Description: Command dispatcher for rendering raw or random GUIDs.
// Purpose: Expose the bounded GUID encoder on the command line.
// Dependencies: clap, guidfmt-config, guidfmt-core, rand, thiserror.
// ============================================================================

//! ## Overview
//! The `guidfmt` binary renders 16 raw stored bytes, or freshly generated
//! version-4 identifiers, in any supported layout. The default layout comes
//! from `guidfmt.toml` when present; `--format` overrides it. Inputs are
//! untrusted and validated before rendering.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use guidfmt_config::ConfigError;
use guidfmt_config::GuidfmtConfig;
use guidfmt_core::EncodeError;
use guidfmt_core::Guid;
use guidfmt_core::GuidLayout;
use guidfmt_core::OutputEncoding;
use rand::Rng;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Hex digits expected for one identifier's stored bytes.
const STORED_HEX_DIGITS: usize = Guid::LEN * 2;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "guidfmt", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Render 16 stored bytes given as 32 hex digits.
    Format(FormatCommand),
    /// Generate and render random version-4 identifiers.
    New(NewCommand),
    /// List the supported layouts.
    Layouts,
}

/// Options shared by rendering commands.
#[derive(Args, Debug)]
struct RenderArgs {
    /// Layout symbol: G, D, N, B or P (defaults to the config value).
    #[arg(long, short = 'f', value_name = "SYMBOL")]
    format: Option<GuidLayout>,
    /// Path to a guidfmt.toml file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for `guidfmt format`.
#[derive(Args, Debug)]
struct FormatCommand {
    /// Stored bytes in memory order, as 32 hex digits.
    #[arg(value_name = "HEX")]
    bytes: String,
    /// Rendering options.
    #[command(flatten)]
    render: RenderArgs,
}

/// Arguments for `guidfmt new`.
#[derive(Args, Debug)]
struct NewCommand {
    /// Number of identifiers to print.
    #[arg(long, short = 'n', default_value_t = 1, value_name = "N")]
    count: usize,
    /// Rendering options.
    #[command(flatten)]
    render: RenderArgs,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for user-facing error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<EncodeError> for CliError {
    fn from(err: EncodeError) -> Self {
        Self::new(format!("failed to render guid: {err}"))
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&format!("guidfmt {version}"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Format(command) => command_format(&command),
        Commands::New(command) => command_new(&command),
        Commands::Layouts => command_layouts(),
    }
}

/// Prints top-level help.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Commands
// ============================================================================

/// Renders caller-supplied stored bytes.
fn command_format(command: &FormatCommand) -> CliResult<ExitCode> {
    let config = GuidfmtConfig::load(command.render.config.as_deref())?;
    let layout = resolve_layout(&command.render, &config);
    let guid = Guid::from_bytes(parse_stored_bytes(&command.bytes)?);
    write_guid(&guid, layout)?;
    Ok(ExitCode::SUCCESS)
}

/// Renders freshly generated identifiers.
fn command_new(command: &NewCommand) -> CliResult<ExitCode> {
    let config = GuidfmtConfig::load(command.render.config.as_deref())?;
    validate_count(command.count, config.output.max_count)?;
    let layout = resolve_layout(&command.render, &config);
    let mut rng = rand::thread_rng();
    for _ in 0 .. command.count {
        write_guid(&random_guid(&mut rng), layout)?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Lists each layout with its symbol and rendered length.
fn command_layouts() -> CliResult<ExitCode> {
    for layout in GuidLayout::ALL {
        let line = format!(
            "{}  {layout:<16}  {:>2} bytes  {}",
            layout.symbol(),
            layout.encoded_len(OutputEncoding::Utf8),
            Guid::NIL.display(layout)
        );
        write_stdout_line(&line).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Picks the command-line layout, falling back to the configured one.
fn resolve_layout(args: &RenderArgs, config: &GuidfmtConfig) -> GuidLayout {
    args.format.unwrap_or(config.output.format)
}

/// Rejects counts outside `1..=max_count`.
fn validate_count(count: usize, max_count: usize) -> CliResult<()> {
    if count == 0 || count > max_count {
        return Err(CliError::new(format!("--count must be between 1 and {max_count}")));
    }
    Ok(())
}

/// Parses 32 hex digits into 16 stored bytes, first pair first.
fn parse_stored_bytes(text: &str) -> CliResult<[u8; 16]> {
    let text = text.trim();
    if text.len() != STORED_HEX_DIGITS || !text.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(CliError::new(format!(
            "expected {STORED_HEX_DIGITS} hex digits of stored bytes, got '{text}'"
        )));
    }
    let mut bytes = [0u8; 16];
    for (slot, pair) in bytes.iter_mut().zip(text.as_bytes().chunks_exact(2)) {
        let pair = std::str::from_utf8(pair)
            .map_err(|_| CliError::new("stored bytes must be ascii".to_string()))?;
        *slot = u8::from_str_radix(pair, 16)
            .map_err(|err| CliError::new(format!("invalid hex pair '{pair}': {err}")))?;
    }
    Ok(bytes)
}

/// Generates a random RFC 4122 version-4 identifier.
fn random_guid<R: Rng>(rng: &mut R) -> Guid {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    // version lives in the high nibble of the little-endian third field
    bytes[7] = (bytes[7] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    Guid::from_bytes(bytes)
}

/// Renders one identifier into a stack buffer and prints it.
fn write_guid(guid: &Guid, layout: GuidLayout) -> CliResult<()> {
    let mut buffer = [0u8; Guid::MAX_ENCODED_LEN];
    let written = guid.encode(layout, &mut buffer)?;
    let text = std::str::from_utf8(&buffer[.. written])
        .map_err(|err| CliError::new(format!("rendered guid is not utf-8: {err}")))?;
    write_stdout_line(text).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write to {stream}: {error}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
