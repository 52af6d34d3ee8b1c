use log::info;

use crate::output::{DownloadFile, embed_url};
use crate::transcript::get_transcript;
use crate::{CaptionsProvider, Language, extract_video_id};

pub const MSG_EMPTY_INPUT: &str = "Por favor, introduce una URL de YouTube o un ID de video.";
pub const MSG_INVALID_ID: &str = "URL o ID de video no válido.";
pub const MSG_NO_TRANSCRIPT: &str =
    "No se pudo obtener la transcripción. Asegúrate de que el video tenga subtítulos en el idioma seleccionado.";
pub const MSG_SUCCESS: &str = "¡Transcripción obtenida con éxito!";

/// Where user-facing status messages go
pub trait Notifier {
    fn success(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

/// Everything the shell needs to preview, download and embed one transcript
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptResult {
    pub video_id: String,
    pub language: Language,
    pub document: String,
    pub download: DownloadFile,
    pub embed_url: String,
}

/// Handle one request: resolve the video ID, fetch and render its transcript.
pub async fn run<P, N>(input: &str, language: Language, provider: &P, notifier: &N) -> Option<TranscriptResult>
where
    P: CaptionsProvider,
    N: Notifier + ?Sized,
{
    if input.is_empty() {
        notifier.warning(MSG_EMPTY_INPUT);
        return None;
    }

    let video_id = extract_video_id(input);
    if video_id.is_empty() {
        notifier.error(MSG_INVALID_ID);
        return None;
    }
    info!("Resolved {input} to video {video_id}, language {}", language.code());

    let document = match get_transcript(provider, &video_id, &[language.code()], notifier).await {
        Some(doc) if !doc.is_empty() => doc,
        _ => {
            notifier.error(MSG_NO_TRANSCRIPT);
            return None;
        }
    };

    notifier.success(MSG_SUCCESS);

    Some(TranscriptResult {
        download: DownloadFile::new(&video_id, &document),
        embed_url: embed_url(&video_id),
        video_id,
        language,
        document,
    })
}
