//! Uploaded text files
//!
//! The press release tool accepts a `.txt` file whose UTF-8 content replaces
//! the pasted base information. Over HTTP the file travels as base64.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Deserialize;
use thiserror::Error;

use pr_assistant_core::ToolRequest;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Upload is not valid base64: {0}")]
    InvalidBase64(String),

    #[error("Upload is not UTF-8 text: {0}")]
    InvalidUtf8(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadedFile {
    #[serde(default)]
    pub file_name: Option<String>,
    pub content_base64: String,
}

impl UploadedFile {
    pub fn new(file_name: Option<String>, content: &[u8]) -> Self {
        Self {
            file_name,
            content_base64: BASE64.encode(content),
        }
    }

    pub fn decode(&self) -> Result<String, UploadError> {
        decode_text_upload(&self.content_base64)
    }

    /// Replace the request's free-text input with the file content.
    ///
    /// Returns `Ok(false)` when the tool does not take uploads; the request is
    /// left untouched in that case.
    pub fn apply_to(&self, request: &mut ToolRequest) -> Result<bool, UploadError> {
        if !request.kind.accepts_upload() {
            tracing::warn!(
                tool = %request.kind,
                file_name = ?self.file_name,
                "Ignoring upload for tool without file input"
            );
            return Ok(false);
        }

        let text = self.decode()?;
        tracing::debug!(
            tool = %request.kind,
            file_name = ?self.file_name,
            chars = text.chars().count(),
            "Using uploaded file as input"
        );
        request.free_text_fields.insert(request.kind.required_slot(), text);
        Ok(true)
    }
}

/// Decode base64 into UTF-8 text, dropping a leading byte-order mark
pub fn decode_text_upload(content_base64: &str) -> Result<String, UploadError> {
    let bytes = BASE64
        .decode(content_base64.trim())
        .map_err(|e| UploadError::InvalidBase64(e.to_string()))?;

    let text = String::from_utf8(bytes).map_err(|e| UploadError::InvalidUtf8(e.to_string()))?;

    Ok(match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pr_assistant_core::ToolKind;

    #[test]
    fn test_decode_text_upload() {
        let upload = UploadedFile::new(Some("nota.txt".into()), "La empresa Acme Corp lanza hoy Photon V2".as_bytes());
        assert_eq!(upload.decode().unwrap(), "La empresa Acme Corp lanza hoy Photon V2");
    }

    #[test]
    fn test_strips_bom() {
        let upload = UploadedFile::new(None, "\u{feff}Comunicado".as_bytes());
        assert_eq!(upload.decode().unwrap(), "Comunicado");
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(decode_text_upload("***"), Err(UploadError::InvalidBase64(_))));

        let latin1 = UploadedFile::new(None, &[0x43, 0x61, 0x66, 0xe9]);
        assert!(matches!(latin1.decode(), Err(UploadError::InvalidUtf8(_))));
    }

    #[test]
    fn test_upload_replaces_base_information() {
        let mut request = ToolRequest::new(ToolKind::PressRelease).with_text("base_information", "pegado");
        let upload = UploadedFile::new(Some("datos.txt".into()), b"desde archivo");

        assert!(upload.apply_to(&mut request).unwrap());
        assert_eq!(request.required_text(), Some("desde archivo"));
    }

    #[test]
    fn test_upload_ignored_for_other_tools() {
        let mut request = ToolRequest::new(ToolKind::Pitch).with_text("topic", "tema");
        let upload = UploadedFile::new(None, b"ignored");

        assert!(!upload.apply_to(&mut request).unwrap());
        assert_eq!(request.required_text(), Some("tema"));
    }
}
