use log::{debug, error};

use crate::app::Notifier;
use crate::output::render_transcript;
use crate::CaptionsProvider;

/// Fetch captions for `video_id` and render them as a transcript document.
///
/// Provider failures are reported through `notifier` and come back as `None`;
/// a track with no cues is a valid, empty document.
pub async fn get_transcript<P, N>(provider: &P, video_id: &str, languages: &[&str], notifier: &N) -> Option<String>
where
    P: CaptionsProvider,
    N: Notifier + ?Sized,
{
    debug!("Fetching captions for {video_id} in {languages:?}");

    match provider.fetch(video_id, languages).await {
        Ok(cues) => {
            debug!("Got {} cues for {video_id}", cues.len());
            Some(render_transcript(&cues))
        }
        Err(e) => {
            error!("Caption fetch failed for {video_id}: {e:?}");
            notifier.error(&format!("Error: {e}"));
            None
        }
    }
}
