pub mod app;
pub mod config;
pub mod language;
pub mod output;
pub mod transcript;
pub mod youtube;

use std::sync::LazyLock;

use eyre::Result;
use regex::Regex;

pub use language::Language;

/// A single caption cue as returned by a captions provider
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Source of caption cues for a video
///
/// Implementations try `languages` in order and return the cues of the first
/// track that matches. Any failure carries a human-readable description.
#[allow(async_fn_in_trait)]
pub trait CaptionsProvider {
    async fn fetch(&self, video_id: &str, languages: &[&str]) -> Result<Vec<Cue>>;
}

static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:https?://)?(?:www\.)?(?:youtube\.com/(?:[^/\n\s]+/\S+/|(?:v|e(?:mbed)?)/|\S*?[?&]v=)|youtu\.be/)([a-zA-Z0-9_-]{11})",
    )
    .expect("video id pattern is valid")
});

/// Extract the 11-character video ID from a YouTube URL.
///
/// Inputs that don't look like a known URL shape are returned unchanged, on the
/// assumption that they already are a bare ID.
pub fn extract_video_id(input: &str) -> String {
    match VIDEO_ID_RE.captures(input) {
        Some(caps) => caps[1].to_string(),
        None => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_video_id() {
        assert_eq!(extract_video_id("dQw4w9WgXcQ"), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_watch_url_with_extra_params() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=120"),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_watch_url_without_scheme() {
        assert_eq!(extract_video_id("youtube.com/watch?v=dQw4w9WgXcQ"), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_short_url() {
        assert_eq!(extract_video_id("https://youtu.be/dQw4w9WgXcQ"), "dQw4w9WgXcQ");
        assert_eq!(extract_video_id("https://youtu.be/dQw4w9WgXcQ?t=5"), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_embed_and_v_urls() {
        assert_eq!(extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ"), "dQw4w9WgXcQ");
        assert_eq!(extract_video_id("https://www.youtube.com/v/dQw4w9WgXcQ"), "dQw4w9WgXcQ");
        assert_eq!(extract_video_id("https://www.youtube.com/e/dQw4w9WgXcQ"), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_user_path_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/user/SomeChannel#p/a/u/1/dQw4w9WgXcQ"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_id_with_dash_and_underscore() {
        assert_eq!(extract_video_id("https://youtu.be/a-b_c-d_e-f"), "a-b_c-d_e-f");
    }

    #[test]
    fn test_unrecognized_input_passes_through() {
        assert_eq!(extract_video_id("not-a-valid-id"), "not-a-valid-id");
        assert_eq!(extract_video_id("https://example.com/video"), "https://example.com/video");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_video_id(""), "");
    }

    #[test]
    fn test_no_trimming() {
        assert_eq!(extract_video_id("  dQw4w9WgXcQ  "), "  dQw4w9WgXcQ  ");
    }
}
