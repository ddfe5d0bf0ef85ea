// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;

use anyhow::{Context, Result};
use scalesmith::config::QueryFile;
use scalesmith::music::{
    build_profile, chords_from_scale, scales_from_chords, scales_from_semitones,
    semitones_from_scale, Quality,
};
use tracing::Level;

const LOG_ENV: &str = "SCALESMITH_LOG";

fn print_usage() {
    println!("Scalesmith - Scale and Chord Explorer");
    println!();
    println!("Usage: scalesmith [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --scale <TONIC> <QUALITY>    Print the notes of a scale");
    println!("  --chords <TONIC> <QUALITY>   Print the diatonic chords of a scale");
    println!("  --from-notes <NOTE>...       List scales containing every note");
    println!("  --from-chords <CHORD>...     List scales containing every chord");
    println!("  --profile <TONIC> <QUALITY>  Print the full profile of a scale as YAML");
    println!("  --batch <FILE>               Answer every query in a YAML or TOML file");
    println!("  --qualities                  List the supported scale qualities");
    println!("  --help                       Show this help message");
    println!();
    println!("Set {} to error, warn, info, debug or trace to adjust logging.", LOG_ENV);
}

/// Pick the log level: a valid environment value wins over the fallback
fn resolve_level(from_env: Option<&str>, fallback: &str) -> Level {
    from_env
        .and_then(|value| value.parse::<Level>().ok())
        .or_else(|| fallback.parse::<Level>().ok())
        .unwrap_or(Level::WARN)
}

/// Install the stderr logger. Called once per run.
fn init_logging(fallback: &str) {
    let from_env = env::var(LOG_ENV).ok();
    let level = resolve_level(from_env.as_deref(), fallback);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

/// Read `<TONIC> <QUALITY>` following an option, exiting on bad input
fn scale_args(args: &[String], option: &str) -> (String, Quality) {
    if args.len() < 4 {
        eprintln!("Error: {} requires a tonic and a quality", option);
        eprintln!("Use --qualities to see supported qualities");
        std::process::exit(1);
    }

    match args[3].parse::<Quality>() {
        Ok(quality) => (args[2].clone(), quality),
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!("Use --qualities to see supported qualities");
            std::process::exit(1);
        }
    }
}

fn print_list(items: &[String]) {
    for item in items {
        println!("{}", item);
    }
}

fn run_batch(path: &str) -> Result<()> {
    let file = QueryFile::load(path)?;
    init_logging(&file.settings.log_level);
    tracing::info!(queries = file.queries.len(), "running batch");

    let results = file.run();
    let yaml = serde_yaml::to_string(&results).context("Failed to serialize batch results")?;
    print!("{}", yaml);
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Scalesmith - Scale and Chord Explorer");
        println!("Run with --help for usage information");
        return Ok(());
    }

    if args[1] != "--batch" {
        init_logging("warn");
    }

    match args[1].as_str() {
        "--scale" => {
            let (tonic, quality) = scale_args(&args, "--scale");
            print_list(&semitones_from_scale(&tonic, quality));
        }
        "--chords" => {
            let (tonic, quality) = scale_args(&args, "--chords");
            print_list(&chords_from_scale(&tonic, quality));
        }
        "--from-notes" => {
            if args.len() < 3 {
                eprintln!("Error: --from-notes requires at least one note");
                std::process::exit(1);
            }
            print_list(&scales_from_semitones(&args[2..]));
        }
        "--from-chords" => {
            if args.len() < 3 {
                eprintln!("Error: --from-chords requires at least one chord");
                std::process::exit(1);
            }
            print_list(&scales_from_chords(&args[2..]));
        }
        "--profile" => {
            let (tonic, quality) = scale_args(&args, "--profile");
            match build_profile(&tonic, quality) {
                Some(profile) => {
                    let yaml =
                        serde_yaml::to_string(&profile).context("Failed to serialize profile")?;
                    print!("{}", yaml);
                }
                None => {
                    eprintln!("Error: unrecognized tonic: {}", tonic);
                    std::process::exit(1);
                }
            }
        }
        "--batch" => {
            if args.len() < 3 {
                eprintln!("Error: --batch requires a query file");
                std::process::exit(1);
            }
            run_batch(&args[2])?;
        }
        "--qualities" => {
            for quality in Quality::ALL {
                println!("{}", quality);
            }
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", args[1]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
