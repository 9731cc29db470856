use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use artsend_core::{
    ARTNET_PORT, ChannelMap, SendError, SendReport, encode_artdmx, parse_artdmx, send_artdmx,
};

#[derive(Parser, Debug)]
#[command(name = "artsend")]
#[command(version)]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("ARTSEND_BUILD_COMMIT"),
    " ",
    env!("ARTSEND_BUILD_DATE"),
    ")\ncommit: ",
    env!("ARTSEND_BUILD_COMMIT_FULL")
))]
#[command(
    about = "One-shot Art-Net DMX sender (fire-and-forget, one packet per run).",
    long_about = None,
    after_help = "Examples:\n  artsend dmx send 192.168.1.50 -u 0 -c 0,255\n  artsend dmx send 10.0.0.9 -u 1 -c 0,255 -c 4,7 --stdout\n  artsend dmx send node.local -u 0 -c 3,20 --dry-run --pretty --stdout"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on DMX universes.
    Dmx {
        #[command(subcommand)]
        command: DmxCommands,
    },
}

#[derive(Subcommand, Debug)]
enum DmxCommands {
    /// Encode one ArtDMX packet and send it to a device on UDP port 6454.
    #[command(
        after_help = "Examples:\n  artsend dmx send 192.168.1.50 -u 0 -c 0,255\n  artsend dmx send 10.0.0.9 -u 1 -c 0,255 -c 4,7 -o report.json"
    )]
    Send(SendArgs),
}

#[derive(Args, Debug)]
struct SendArgs {
    /// Hostname or IP address of the Art-Net device
    host: String,

    /// Art-Net universe (0-65535)
    #[arg(short = 'u', long)]
    universe: u16,

    /// Channel and value as '<0-based channel>,<value>'; repeatable
    #[arg(short = 'c', long = "channel", required = true)]
    channel: Vec<String>,

    /// Request zeroing of unset channels (reported only; the frame already
    /// zero-fills unset channels below the highest one)
    #[arg(short = 'z', long)]
    zero_out: bool,

    /// Encode and verify the packet without transmitting it
    #[arg(long)]
    dry_run: bool,

    /// Write the JSON send report to a file
    #[arg(short = 'o', long)]
    report: Option<PathBuf>,

    /// Write the JSON send report to stdout
    #[arg(long, conflicts_with = "report")]
    stdout: bool,

    /// Pretty-print JSON output
    #[arg(long, conflicts_with = "compact")]
    pretty: bool,

    /// Compact JSON output (default)
    #[arg(long)]
    compact: bool,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Dmx { command } => match command {
            DmxCommands::Send(args) => cmd_dmx_send(args),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

fn cmd_dmx_send(args: SendArgs) -> Result<(), CliError> {
    let channels = ChannelMap::from_tokens(&args.channel).map_err(|err| {
        CliError::new(
            err.to_string(),
            Some("channel tokens are '<0-based channel>,<value>' with values 0-255".to_string()),
        )
    })?;

    let report = if args.dry_run {
        dry_run_report(&args, &channels)?
    } else {
        send_artdmx(&args.host, args.universe, &channels, args.zero_out).map_err(|err| {
            let hint = match &err {
                SendError::Resolve { .. } => Some("check the device hostname or IP".to_string()),
                _ => None,
            };
            CliError::new(err.to_string(), hint)
        })?
    };

    let json = serialize_report(&report, args.pretty, args.compact)?;

    if args.stdout {
        print!("{}", json);
    }

    if let Some(path) = args.report.as_ref() {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
        }
        fs::write(path, &json)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        if !args.quiet {
            eprintln!("OK: report written -> {}", path.display());
        }
    }

    if !args.quiet && !args.stdout {
        let action = if report.dry_run { "encoded" } else { "sent" };
        let zero_note = if report.zero_out {
            ", zero-out requested"
        } else {
            ""
        };
        eprintln!(
            "OK: {} ArtDMX universe {} ({} channels) -> {}{}",
            action, report.universe, report.frame_length, report.target, zero_note
        );
        eprintln!("packet: {}", report.packet_hex);
    }

    Ok(())
}

/// Encode without transmitting, then decode the packet back as a self-check.
fn dry_run_report(args: &SendArgs, channels: &ChannelMap) -> Result<SendReport, CliError> {
    let frame = channels.to_frame();
    let packet = encode_artdmx(args.universe, &frame).context("ArtDMX encoding failed")?;

    let decoded = parse_artdmx(&packet).context("packet self-check failed")?;
    let matches = decoded
        .as_ref()
        .is_some_and(|artdmx| artdmx.universe == args.universe && artdmx.data == frame);
    if !matches {
        return Err(CliError::new(
            "packet self-check failed: decoded packet does not match input",
            None,
        ));
    }

    Ok(SendReport::dry_run(
        format!("{}:{}", args.host, ARTNET_PORT),
        args.universe,
        frame.len() as u16,
        args.zero_out,
        &packet,
    ))
}

fn serialize_report(rep: &SendReport, pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}
