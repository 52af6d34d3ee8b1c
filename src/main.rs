use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::time::Duration;

use eyre::{Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

mod cli;

use cli::Cli;
use transcriptor::app::{self, Notifier, TranscriptResult};
use transcriptor::config::{self, Config};
use transcriptor::youtube::YouTubeCaptions;

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("transcriptor.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("transcriptor")
        .join("logs")
}

const INSTRUCTIONS: &str = "\
INSTRUCCIONES:
  1. Introduce la URL completa del video de YouTube o solo el ID del video (ej: dQw4w9WgXcQ)
     youtube.com/watch?v=ID, youtu.be/ID, youtube.com/embed/ID, youtube.com/v/ID
  2. Selecciona el idioma de la transcripción con --lang
  3. Usa --download para guardar el archivo transcripcion_<ID>.txt

  Nota: el video debe tener subtítulos en el idioma seleccionado para que la transcripción funcione.";

fn build_after_help() -> String {
    let languages = transcriptor::Language::ALL
        .iter()
        .map(|l| format!("  {}  {}", l.code(), l.display_name()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\n{INSTRUCTIONS}\n\nLANGUAGES:\n{languages}\n\nConfig file: {}\nLogs are written to: {}",
        config::config_path().display(),
        log_dir().join("transcriptor.log").display()
    )
}

/// Status messages on stderr so the preview on stdout stays clean
struct ConsoleNotifier {
    progress: ProgressBar,
}

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        self.progress.suspend(|| eprintln!("\x1b[32m✅\x1b[0m {message}"));
    }

    fn warning(&self, message: &str) {
        self.progress.suspend(|| eprintln!("\x1b[33m⚠️\x1b[0m  {message}"));
    }

    fn error(&self, message: &str) {
        self.progress.suspend(|| eprintln!("\x1b[31m❌\x1b[0m {message}"));
    }
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        .template("{spinner:.cyan} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn save(result: &TranscriptResult, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, &result.download.bytes)?;
    debug!("Wrote {} ({}) to {}", result.download.file_name, result.download.mime, path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let after_help = build_after_help();
    let cmd = <Cli as clap::CommandFactory>::command().after_help(after_help);
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    // Missing or broken config is not fatal
    let config = Config::load().unwrap_or_default();

    // CLI flags take priority over config
    let language = cli.lang.or_else(|| config.language()).unwrap_or_default();
    let dir = cli
        .dir
        .clone()
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    if cli.verbose {
        let config_path = config::config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
        eprintln!("Language: {language}");
    }

    let inputs = if let Some(ref url) = cli.url {
        vec![url.clone()]
    } else {
        let stdin = io::stdin();
        let lines = stdin.lock().lines().collect::<Result<Vec<_>, _>>()?;
        lines.into_iter().filter(|l| !l.trim().is_empty()).collect()
    };

    let provider = YouTubeCaptions::new(reqwest::Client::new());
    let mut failed = 0usize;

    for input in &inputs {
        let input = input.trim();

        let notifier = ConsoleNotifier {
            progress: create_spinner("Obteniendo transcripción..."),
        };
        let result = app::run(input, language, &provider, &notifier).await;
        notifier.progress.finish_and_clear();

        let Some(result) = result else {
            failed += 1;
            continue;
        };

        if cli.verbose {
            eprintln!(
                "Video: {}\nLanguage: {}\nBytes: {}",
                result.video_id,
                result.language,
                result.download.bytes.len()
            );
        }

        if !cli.quiet {
            print!("{}", result.document);
        }

        let target = match (&cli.output, cli.download) {
            (Some(path), _) => Some(path.clone()),
            (None, true) => Some(dir.join(&result.download.file_name)),
            (None, false) => None,
        };
        if let Some(path) = target {
            save(&result, &path)?;
            eprintln!("Transcript saved to: {}", path.display());
        }

        eprintln!("\nVideo original: {}", result.embed_url);
    }

    if inputs.is_empty() {
        let notifier = ConsoleNotifier {
            progress: ProgressBar::hidden(),
        };
        notifier.warning(app::MSG_EMPTY_INPUT);
        failed += 1;
    }

    if failed > 0 {
        bail!("{failed} of {} request(s) produced no transcript", inputs.len().max(1));
    }

    Ok(())
}
