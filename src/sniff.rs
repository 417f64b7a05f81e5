//! Magic-byte file-type sniffing
//!
//! Prefix checks only: content beyond the signature is never inspected,
//! so a positive result means "looks like", not "is valid".

/// gzip member header signature
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// PDF header signature (the version digits follow the dash)
pub const PDF_MAGIC: &[u8] = b"%PDF-";

/// Content kinds recognized by [`detect`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Gzip,
    Pdf,
}

/// Check whether a buffer starts with the gzip signature
///
/// Buffers shorter than the signature are never a match.
pub fn is_gzip(data: &[u8]) -> bool {
    data.starts_with(&GZIP_MAGIC)
}

/// Check whether a buffer starts with the PDF signature
pub fn is_pdf(data: &[u8]) -> bool {
    data.starts_with(PDF_MAGIC)
}

/// Identify a buffer by its leading magic bytes
///
/// # Examples
///
/// ```rust
/// use content_checks::sniff::{detect, ContentKind};
///
/// assert_eq!(detect(&[0x1f, 0x8b, 0x08]), Some(ContentKind::Gzip));
/// assert_eq!(detect(b"%PDF-1.7\n"), Some(ContentKind::Pdf));
/// assert_eq!(detect(b"plain text"), None);
/// ```
pub fn detect(data: &[u8]) -> Option<ContentKind> {
    if is_gzip(data) {
        Some(ContentKind::Gzip)
    } else if is_pdf(data) {
        Some(ContentKind::Pdf)
    } else {
        None
    }
}
