use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use fit_lib::{
    io::packages::{self as packages_io, Package},
    report::format_report,
    workout::Workout,
};
use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

#[derive(Parser)]
#[command(
    name = "fit",
    version,
    about = "Fit: distance, speed and calorie reports from workout sensor data"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Report the built-in sample workouts (default when no subcommand is given)
    Demo,
    /// Report workouts from a TOML package file read from --input or stdin
    Report {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => report_packages(&builtin_packages(), OutputFormat::Text)?,
        Commands::Report { input, format } => cmd_report(input.as_deref(), format)?,
    }
    Ok(())
}

fn builtin_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

fn read_packages(input: Option<&Path>) -> Result<Vec<Package>> {
    match input {
        Some(path) => packages_io::read_packages(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            packages_io::parse_packages(&buf)
        }
    }
}

fn cmd_report(input: Option<&Path>, format: OutputFormat) -> Result<()> {
    let packages = read_packages(input)?;
    log::info!("loaded {} workout packages", packages.len());
    report_packages(&packages, format)
}

fn report_packages(packages: &[Package], format: OutputFormat) -> Result<()> {
    for (idx, package) in packages.iter().enumerate() {
        let workout = package
            .build()
            .with_context(|| format!("package {} ({})", idx + 1, package.code))?;
        let report = workout.report();
        match format {
            OutputFormat::Text => println!("{}", format_report(&report)),
            OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
        }
    }
    Ok(())
}
