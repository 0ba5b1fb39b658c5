// SPDX-License-Identifier: MPL-2.0
//! Upload candidates and the validation applied before a scan cycle starts.

use std::fmt;

/// Default maximum upload size in MiB.
pub const DEFAULT_MAX_UPLOAD_MB: u32 = 25;
/// Minimum configurable upload size in MiB.
pub const MIN_MAX_UPLOAD_MB: u32 = 1;
/// Maximum configurable upload size in MiB.
pub const MAX_MAX_UPLOAD_MB: u32 = 200;

const BYTES_PER_MIB: u64 = 1024 * 1024;

/// Channel an upload candidate came through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadSource {
    DragDrop,
    FilePicker,
    Clipboard,
    CommandLine,
}

/// A file offered for scanning, not yet accepted.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    pub name: String,
    /// Content type, e.g. `image/png`.
    pub mime: String,
    pub bytes: Vec<u8>,
    pub source: UploadSource,
}

impl ImageCandidate {
    pub fn new(
        name: impl Into<String>,
        mime: impl Into<String>,
        bytes: Vec<u8>,
        source: UploadSource,
    ) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
            source,
        }
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

// Byte payloads can be megabytes; keep debug output readable.
impl fmt::Debug for ImageCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageCandidate")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("bytes", &self.bytes.len())
            .field("source", &self.source)
            .finish()
    }
}

/// Returns true if `mime` names an image content type.
#[must_use]
pub fn is_image_mime(mime: &str) -> bool {
    mime.trim()
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
}

/// Maximum accepted upload size, clamped to 1–200 MiB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadLimit(u32);

impl UploadLimit {
    #[must_use]
    pub fn from_mebibytes(mb: u32) -> Self {
        Self(mb.clamp(MIN_MAX_UPLOAD_MB, MAX_MAX_UPLOAD_MB))
    }

    #[must_use]
    pub fn mebibytes(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn bytes(self) -> u64 {
        u64::from(self.0) * BYTES_PER_MIB
    }
}

impl Default for UploadLimit {
    fn default() -> Self {
        Self(DEFAULT_MAX_UPLOAD_MB)
    }
}

/// Why an upload candidate was refused. State is never changed by a rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectedUpload {
    /// Content type is not `image/*`.
    NotAnImage { mime: String },
    /// File exceeds the configured limit.
    TooLarge { size: u64, max: u64 },
    /// File could not be read.
    Unreadable(String),
    /// A scan is running; wait for it or reset first.
    ScanInProgress,
    /// Paste found neither an image nor a file path.
    EmptyClipboard,
}

impl RejectedUpload {
    /// Returns the i18n message key for this rejection.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            RejectedUpload::NotAnImage { .. } => "notification-upload-not-image",
            RejectedUpload::TooLarge { .. } => "notification-upload-too-large",
            RejectedUpload::Unreadable(_) => "notification-upload-unreadable",
            RejectedUpload::ScanInProgress => "notification-upload-scan-in-progress",
            RejectedUpload::EmptyClipboard => "notification-upload-empty-clipboard",
        }
    }
}

impl fmt::Display for RejectedUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectedUpload::NotAnImage { mime } => {
                write!(f, "not an image (content type: {mime})")
            }
            RejectedUpload::TooLarge { size, max } => {
                write!(f, "file is too large ({size} bytes, limit {max} bytes)")
            }
            RejectedUpload::Unreadable(reason) => write!(f, "file could not be read: {reason}"),
            RejectedUpload::ScanInProgress => write!(f, "a scan is already in progress"),
            RejectedUpload::EmptyClipboard => write!(f, "clipboard holds no image"),
        }
    }
}

impl std::error::Error for RejectedUpload {}

/// Checks a candidate against content-type and size rules.
pub fn validate(candidate: &ImageCandidate, limit: UploadLimit) -> Result<(), RejectedUpload> {
    if !is_image_mime(&candidate.mime) {
        return Err(RejectedUpload::NotAnImage {
            mime: candidate.mime.clone(),
        });
    }
    if candidate.bytes.is_empty() {
        return Err(RejectedUpload::Unreadable("file is empty".to_string()));
    }
    if candidate.size() > limit.bytes() {
        return Err(RejectedUpload::TooLarge {
            size: candidate.size(),
            max: limit.bytes(),
        });
    }
    Ok(())
}
