/// Preview encoding for selected images
/// Turns a picked file into a transmittable data URI plus a displayable handle
use base64::{engine::general_purpose, Engine as _};
use iced::widget::image::Handle;
use std::path::PathBuf;

/// MIME type used when format sniffing fails
const FALLBACK_MIME: &str = "application/octet-stream";

/// A selected or generated image in transmittable and displayable form
#[derive(Debug, Clone)]
pub struct Preview {
    /// `data:<mime>;base64,<payload>` for the wire
    pub data_uri: String,
    /// The same bytes wrapped for the iced image widget
    pub handle: Handle,
}

impl Preview {
    /// Build a preview from raw file bytes, sniffing the MIME type
    /// from the image's magic bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let mime = image::guess_format(&bytes)
            .map(|format| format.to_mime_type())
            .unwrap_or(FALLBACK_MIME);

        let encoded = general_purpose::STANDARD.encode(&bytes);
        let data_uri = format!("data:{};base64,{}", mime, encoded);

        Preview {
            data_uri,
            handle: Handle::from_bytes(bytes),
        }
    }

    /// Build a preview from a data URI returned by the generation service
    pub fn from_data_uri(data_uri: String) -> Result<Self, String> {
        let bytes = general_purpose::STANDARD
            .decode(base64_payload(&data_uri))
            .map_err(|e| format!("Could not decode the generated image: {}", e))?;

        Ok(Preview {
            data_uri,
            handle: Handle::from_bytes(bytes),
        })
    }
}

/// Read a file and encode it as a displayable preview
/// Runs on the async runtime so the UI never blocks on disk
pub async fn encode_preview(path: PathBuf) -> Result<Preview, String> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    Ok(Preview::from_bytes(bytes))
}

/// Extract the base64 payload portion of a data URI
/// Falls back to the whole string when there is no comma-delimited prefix
pub fn base64_payload(data_uri: &str) -> &str {
    data_uri
        .split_once(',')
        .map(|(_, payload)| payload)
        .unwrap_or(data_uri)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal PNG magic so format sniffing has something to recognize
    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 1, 2, 3, 4];

    #[test]
    fn test_payload_after_comma() {
        assert_eq!(base64_payload("data:image/png;base64,AAAA"), "AAAA");
    }

    #[test]
    fn test_payload_fallback_without_prefix() {
        assert_eq!(base64_payload("AAAA"), "AAAA");
    }

    #[test]
    fn test_from_bytes_sniffs_mime() {
        let preview = Preview::from_bytes(PNG_MAGIC.to_vec());
        assert!(preview.data_uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_from_bytes_unknown_format_uses_fallback_mime() {
        let preview = Preview::from_bytes(vec![0, 1, 2, 3]);
        assert!(preview
            .data_uri
            .starts_with("data:application/octet-stream;base64,"));
    }

    #[test]
    fn test_encode_round_trip() {
        let preview = Preview::from_bytes(PNG_MAGIC.to_vec());
        let decoded = general_purpose::STANDARD
            .decode(base64_payload(&preview.data_uri))
            .unwrap();
        assert_eq!(decoded, PNG_MAGIC);
    }

    #[tokio::test]
    async fn test_encode_preview_reads_file() {
        let path = std::env::temp_dir().join("tryon_studio_preview_test.png");
        std::fs::write(&path, PNG_MAGIC).unwrap();

        let preview = encode_preview(path.clone()).await.unwrap();
        let decoded = general_purpose::STANDARD
            .decode(base64_payload(&preview.data_uri))
            .unwrap();
        assert_eq!(decoded, PNG_MAGIC);

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn test_encode_preview_missing_file_errors() {
        let path = std::env::temp_dir().join("tryon_studio_no_such_file.png");
        assert!(encode_preview(path).await.is_err());
    }

    #[test]
    fn test_from_data_uri_round_trip() {
        let preview = Preview::from_data_uri("data:image/png;base64,AAAA".to_string()).unwrap();
        assert_eq!(preview.data_uri, "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_from_data_uri_rejects_bad_payload() {
        assert!(Preview::from_data_uri("data:image/png;base64,???".to_string()).is_err());
    }
}
