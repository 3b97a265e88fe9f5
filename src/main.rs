use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use spectrum_to_rgb::colorimetry::{CmfReference, ColorError, spectral_locus};
use spectrum_to_rgb::config::{Config, OutputFormat};
use spectrum_to_rgb::pipeline::{self, ColorReport};

/// Exit status for usage errors, missing input and bad configuration.
const EXIT_USAGE: u8 = 1;
/// Exit status for conversion failures under `--strict`.
const EXIT_CONVERSION: u8 = 2;

/// Convert a spectral power distribution to CIE 1931 xy chromaticity and sRGB.
#[derive(Debug, Parser)]
#[command(name = "spectrum-to-rgb", version)]
struct Cli {
    /// Two-column (wavelength_nm, intensity) table; ',', tab or space separated
    spectrum: PathBuf,

    /// Four-column color matching table to use instead of the bundled CIE 1931 2° observer
    #[arg(long, value_name = "PATH")]
    cmf: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Treat the first data line as a column header
    #[arg(long)]
    skip_header: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Include the spectral locus in the JSON report
    #[arg(long)]
    locus: bool,

    /// Exit with status 2 when the conversion fails
    #[arg(long)]
    strict: bool,
}

impl Cli {
    fn settings(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(cmf) = &self.cmf {
            config.cmf_path = Some(cmf.clone());
        }
        config.skip_header |= self.skip_header;
        config.strict |= self.strict;
        config.locus |= self.locus;
        if self.json {
            config.format = OutputFormat::Json;
        }
        Ok(config)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli, config: &Config) -> Result<ColorReport, ColorError> {
    let options = config.load_options();
    let cmf = match &config.cmf_path {
        Some(path) => CmfReference::load(path, options)?,
        None => CmfReference::cie_1931()?,
    };

    let mut report = pipeline::convert_file(&cli.spectrum, options, &cmf)?;
    if config.locus {
        report.locus = Some(spectral_locus(cmf.table()));
    }
    Ok(report)
}

fn print_report(report: &ColorReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            let color = &report.color;
            println!("Computed XYZ: {}", color.xyz);
            println!(
                "Chromaticity (x, y): ({:.4}, {:.4})",
                color.chromaticity.x, color.chromaticity.y
            );
            println!("RGB Value (0-255): {}", color.rgb);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(EXIT_USAGE);
        }
    };

    init_tracing();

    let config = match cli.settings() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    if !cli.spectrum.exists() {
        println!("Error: {}", ColorError::MissingFile(cli.spectrum.clone()));
        return ExitCode::from(EXIT_USAGE);
    }

    match run(&cli, &config) {
        Ok(report) => match print_report(&report, config.format) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e:#}");
                ExitCode::from(EXIT_CONVERSION)
            }
        },
        // Raced with a delete between the early check and the load.
        Err(e @ ColorError::MissingFile(_)) => {
            println!("Error: {e}");
            ExitCode::from(EXIT_USAGE)
        }
        Err(e) => {
            println!("Error: {e}");
            if config.strict {
                ExitCode::from(EXIT_CONVERSION)
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}
