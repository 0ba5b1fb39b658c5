// SPDX-License-Identifier: MPL-2.0
//! Turns dropped files, picked files and clipboard contents into
//! [`ImageCandidate`]s.
//!
//! The content type of a path comes from its extension. When the extension
//! is unknown the leading bytes are sniffed. Nothing here decides whether a
//! candidate is acceptable; that is [`crate::domain::upload::validate`]'s job.

use crate::domain::upload::{ImageCandidate, RejectedUpload, UploadLimit, UploadSource};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Content type used when neither the extension nor the bytes identify the file.
pub const UNKNOWN_MIME: &str = "application/octet-stream";

/// Name given to bitmaps pasted from the clipboard.
pub const PASTED_IMAGE_NAME: &str = "pasted-image.png";

/// Extensions offered by the file picker filter.
pub const PICKER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "webp", "tiff"];

/// Reads a file into an upload candidate.
///
/// Files above `limit` are refused before being read.
pub fn candidate_from_path(
    path: &Path,
    source: UploadSource,
    limit: UploadLimit,
) -> Result<ImageCandidate, RejectedUpload> {
    let metadata = fs::metadata(path).map_err(|e| RejectedUpload::Unreadable(e.to_string()))?;
    if !metadata.is_file() {
        return Err(RejectedUpload::Unreadable(format!(
            "{} is not a file",
            path.display()
        )));
    }
    if metadata.len() > limit.bytes() {
        return Err(RejectedUpload::TooLarge {
            size: metadata.len(),
            max: limit.bytes(),
        });
    }

    let bytes = fs::read(path).map_err(|e| RejectedUpload::Unreadable(e.to_string()))?;
    let mime = detect_mime(path, &bytes);
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(ImageCandidate::new(name, mime, bytes, source))
}

/// Detects the content type from the extension, falling back to sniffing.
pub fn detect_mime(path: &Path, bytes: &[u8]) -> String {
    if let Some(mime) = mime_guess::from_path(path).first() {
        return mime.essence_str().to_string();
    }
    image_rs::guess_format(bytes)
        .map(|format| format.to_mime_type().to_string())
        .unwrap_or_else(|_| UNKNOWN_MIME.to_string())
}

/// Reads the system clipboard.
///
/// A bitmap is encoded to PNG. Otherwise text naming an existing file is
/// read like a picked file.
pub fn candidate_from_clipboard(limit: UploadLimit) -> Result<ImageCandidate, RejectedUpload> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| RejectedUpload::Unreadable(e.to_string()))?;

    if let Ok(image) = clipboard.get_image() {
        let bytes = encode_png(image.width, image.height, image.bytes.into_owned())?;
        return Ok(ImageCandidate::new(
            PASTED_IMAGE_NAME,
            "image/png",
            bytes,
            UploadSource::Clipboard,
        ));
    }

    let text = clipboard.get_text().unwrap_or_default();
    match path_from_clipboard_text(&text) {
        Some(path) => candidate_from_path(&path, UploadSource::Clipboard, limit),
        None => Err(RejectedUpload::EmptyClipboard),
    }
}

/// Interprets clipboard text as a path to an existing file.
///
/// Accepts plain paths and `file://` URIs; only the first line is considered.
pub fn path_from_clipboard_text(text: &str) -> Option<PathBuf> {
    let line = text.lines().next()?.trim();
    let raw = line.strip_prefix("file://").unwrap_or(line);
    if raw.is_empty() {
        return None;
    }
    let path = PathBuf::from(raw);
    path.is_file().then_some(path)
}

/// Encodes raw RGBA pixels as PNG.
fn encode_png(width: usize, height: usize, rgba: Vec<u8>) -> Result<Vec<u8>, RejectedUpload> {
    let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) else {
        return Err(RejectedUpload::Unreadable("image dimensions too large".into()));
    };
    let buffer = image_rs::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| RejectedUpload::Unreadable("clipboard bitmap is truncated".into()))?;
    let mut encoded = Cursor::new(Vec::new());
    buffer
        .write_to(&mut encoded, image_rs::ImageFormat::Png)
        .map_err(|e| RejectedUpload::Unreadable(e.to_string()))?;
    Ok(encoded.into_inner())
}
