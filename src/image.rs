use base64::{Engine as _, engine::general_purpose};

/// Where the bytes of a recipe image come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Image embedded in the URL itself as a base64 `data:` URI.
    Inline { mime_type: String, bytes: Vec<u8> },
    Remote(String),
    Missing,
}

impl ImageSource {
    pub fn from_url(url: &str) -> Self {
        if url.is_empty() {
            return ImageSource::Missing;
        }
        if !url.starts_with("data:image") {
            return ImageSource::Remote(url.to_string());
        }

        let Some((header, payload)) = url.split_once(',') else {
            return ImageSource::Remote(url.to_string());
        };
        let mime_type = header
            .trim_start_matches("data:")
            .split(';')
            .next()
            .unwrap_or("image/jpeg")
            .to_string();

        match general_purpose::STANDARD.decode(payload.trim()) {
            Ok(bytes) => ImageSource::Inline { mime_type, bytes },
            Err(err) => {
                tracing::warn!(error = %err, "failed to decode inline image, treating it as a URL");
                ImageSource::Remote(url.to_string())
            }
        }
    }
}
