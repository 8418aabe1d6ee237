use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use fly_lessons::config::{load_config_from_file, Config, PairingPolicy};
use fly_lessons::{LessonAssembler, StenoDictionary};

#[derive(Parser, Debug)]
#[command(name = "fly-lessons", about = "Compile a steno lesson and its chord file")]
struct Cli {
    /// Lesson translation file
    #[arg(value_name = "FILE")]
    translation: PathBuf,
    /// Matching chord file
    #[arg(value_name = "FILE")]
    chords: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Overrides dictionary_path from the config
    #[arg(short, long, value_name = "FILE")]
    dictionary: Option<PathBuf>,
    #[arg(long)]
    no_compress: bool,
    /// Fail when chords and translations cannot be paired one to one
    #[arg(long)]
    strict: bool,
    #[arg(long)]
    pretty: bool,
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => load_config_from_file(path)?,
        None => Config::default(),
    };
    if cli.dictionary.is_some() {
        config.dictionary_path = cli.dictionary.clone();
    }
    if cli.no_compress {
        config.compress_chords = false;
    }
    if cli.strict {
        config.pairing = PairingPolicy::Strict;
    }
    log::debug!("config {:#?}", config);

    let dictionary = match (&config.dictionary_path, config.compress_chords) {
        (Some(path), true) => Some(StenoDictionary::load(path)?),
        _ => None,
    };

    let assembler = LessonAssembler::new(dictionary.as_ref(), config.pairing);
    let lesson = assembler.compile_files(&cli.translation, &cli.chords)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&lesson)?
    } else {
        serde_json::to_string(&lesson)?
    };
    println!("{}", json);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                log::error!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
