//! trs2vtt - convert a Transcriber TRS file to WebVTT
//!
//! Usage:
//!   trs2vtt interview.trs -o interview.vtt -l fi --speakers --noise

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use trs2vtt_core::config::{ConfigManager, Settings};
use trs2vtt_core::logging::init_tracing;
use trs2vtt_core::{convert_file, vtt};

#[derive(Parser, Debug)]
#[command(name = "trs2vtt")]
#[command(about = "Convert a TRS subtitle file to the WebVTT format.")]
#[command(version)]
struct Cli {
    /// Path to the input file
    #[arg(value_name = "INPUTFILE")]
    input: PathBuf,

    /// Write output to PATH instead of STDOUT
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Add 'Language: LANG' header to output
    #[arg(short, long, value_name = "LANG")]
    language: Option<String>,

    /// Add speaker metadata to applicable lines
    #[arg(short, long)]
    speakers: bool,

    /// Preserve noise such as laughter or silence
    #[arg(short, long)]
    noise: bool,

    /// Read the input in ENCODING instead of the one declared in the XML header
    #[arg(short, long, value_name = "ENCODING")]
    encoding: Option<String>,

    /// Load settings from a TOML config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Save the effective settings to PATH
    #[arg(long, value_name = "PATH")]
    save_config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Settings from the config file (if any) with command-line flags applied.
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                let mut manager = ConfigManager::new(path);
                manager
                    .load()
                    .with_context(|| format!("loading config {}", path.display()))?;
                manager.into_settings()
            }
            None => Settings::default(),
        };

        let conversion = &mut settings.conversion;
        if let Some(language) = &self.language {
            conversion.language = Some(language.clone());
        }
        conversion.add_speakers |= self.speakers;
        conversion.preserve_noise |= self.noise;

        Ok(settings)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = cli.settings()?;

    init_tracing(settings.logging.level.more_verbose(cli.verbose));

    if let Some(path) = &cli.save_config {
        let mut manager = ConfigManager::new(path);
        *manager.settings_mut() = settings.clone();
        manager
            .save()
            .with_context(|| format!("saving config {}", path.display()))?;
        tracing::info!(path = %path.display(), "Saved config");
    }

    let document = convert_file(&cli.input, cli.encoding.as_deref(), &settings.conversion)
        .with_context(|| format!("converting {}", cli.input.display()))?;

    match &cli.output {
        Some(path) => vtt::write_file(&document, path)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(document.as_bytes())
                .context("writing to stdout")?;
            stdout.flush().context("writing to stdout")?;
        }
    }

    Ok(())
}
