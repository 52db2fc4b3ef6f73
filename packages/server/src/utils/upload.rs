/// Extensions accepted for upload, matched case-insensitively.
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "webp", "gif"];

/// Maximum stored title length, in characters.
pub const MAX_TITLE_CHARS: usize = 200;

/// Owner used when no user id is supplied.
pub const DEFAULT_USER_ID: &str = "public";

/// Whether a MIME type names an image.
pub fn is_image_content_type(content_type: &str) -> bool {
    content_type.starts_with("image/")
}

/// Lowercased extension of `filename`, if it is in the allow-list.
pub fn image_extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();
    ALLOWED_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Normalize a submitted title: newlines removed, surrounding
/// whitespace trimmed, truncated to [`MAX_TITLE_CHARS`] characters.
/// Returns `None` when nothing printable remains.
pub fn normalize_title(raw: &str) -> Option<String> {
    let stripped: String = raw.chars().filter(|c| *c != '\n' && *c != '\r').collect();
    let title: String = stripped.trim().chars().take(MAX_TITLE_CHARS).collect();
    if title.is_empty() { None } else { Some(title) }
}

/// Storage key segment for a user id: trimmed, path-hostile characters
/// replaced, [`DEFAULT_USER_ID`] when nothing usable remains. Object
/// keys are path-structured; the database column stays free text and
/// receives the raw value.
pub fn user_segment(raw: &str) -> String {
    let segment: String = raw
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '-'
            }
        })
        .collect();

    if segment.is_empty() || segment.chars().all(|c| c == '.') {
        DEFAULT_USER_ID.to_string()
    } else {
        segment
    }
}

/// Message for an image larger than `max_bytes`.
pub fn size_limit_message(max_bytes: u64) -> String {
    format!(
        "Image exceeds the maximum size of {} MiB",
        max_bytes / (1024 * 1024)
    )
}
