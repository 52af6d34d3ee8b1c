use clap::Parser;
use std::path::PathBuf;

use transcriptor::Language;

#[derive(Parser)]
#[command(
    name = "transcriptor",
    about = "Fetch a YouTube video's captions as a timestamped text transcript",
    version = env!("GIT_DESCRIBE"),
)]
pub struct Cli {
    /// YouTube video URL or video ID (reads one per line from stdin if omitted)
    pub url: Option<String>,

    /// Caption language [default: config default_lang, else es]
    #[arg(short, long, value_enum)]
    pub lang: Option<Language>,

    /// Save the transcript as transcripcion_<video_id>.txt
    #[arg(short, long)]
    pub download: bool,

    /// Directory for downloaded transcripts [default: config output_dir, else .]
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Save the transcript to this exact path
    #[arg(short, long, conflicts_with = "dir")]
    pub output: Option<PathBuf>,

    /// Don't print the transcript preview
    #[arg(short, long)]
    pub quiet: bool,

    /// Show resolved video ID, language and output details
    #[arg(short, long)]
    pub verbose: bool,
}
