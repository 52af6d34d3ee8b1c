use crate::Cue;

pub const MIME_TYPE: &str = "text/plain";

/// A transcript ready to be saved to disk
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadFile {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl DownloadFile {
    pub fn new(video_id: &str, document: &str) -> Self {
        Self {
            file_name: file_name(video_id),
            mime: MIME_TYPE,
            bytes: document.as_bytes().to_vec(),
        }
    }
}

pub fn file_name(video_id: &str) -> String {
    format!("transcripcion_{video_id}.txt")
}

pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}")
}

/// Format a start offset.
///
/// A minute or more renders as `HH:MM:SS` with the fraction dropped; anything
/// shorter keeps two decimals and a `segundos` suffix.
pub fn format_time(seconds: f64) -> String {
    if seconds >= 60.0 {
        let hours = (seconds / 3600.0).floor() as u64;
        let minutes = ((seconds % 3600.0) / 60.0).floor() as u64;
        let secs = (seconds % 60.0).floor() as u64;
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{seconds:.2} segundos")
    }
}

/// Render a duration as its shortest round-trip form.
///
/// Whole numbers keep a trailing `.0`. Magnitudes below 1e-4 or from 1e16 up
/// switch to exponent notation with a signed, two-digit exponent (`1e-05`).
pub fn format_duration(duration: f64) -> String {
    let magnitude = duration.abs();
    if duration.is_finite() && duration != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let exp_form = format!("{duration:e}");
        if let Some((mantissa, exponent)) = exp_form.split_once('e') {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            return format!("{mantissa}e{sign}{digits:0>2}");
        }
    }

    let s = duration.to_string();
    if duration.is_finite() && !s.contains('.') {
        format!("{s}.0")
    } else {
        s
    }
}

/// Render cues as a transcript document: text, then timing, then a blank line
pub fn render_transcript(cues: &[Cue]) -> String {
    let mut out = String::new();
    for cue in cues {
        out.push_str(&cue.text);
        out.push('\n');
        out.push_str(&format!(
            "Start: {}, Duration: {}\n",
            format_time(cue.start),
            format_duration(cue.duration)
        ));
        out.push('\n');
    }
    out
}
