//! Rendering of source identifiers for diagnostics.
//!
//! The first byte of a source identifier selects the form:
//!
//! - `=name`: shown verbatim (without the `=`)
//! - `@path`: a file name; long paths keep their tail behind `...`
//! - anything else: the chunk's own text, shown as `[string "..."]` and cut
//!   at the first newline

/// Room reserved around a file name: `` `...' `` plus terminator.
const FILE_OVERHEAD: usize = 8;
/// Room reserved around a string chunk: ` [string "..."] ` plus terminator.
const STRING_OVERHEAD: usize = 17;

/// Format `source` for display within `width` bytes.
pub fn chunk_id(source: &str, width: usize) -> String {
    let bytes = source.as_bytes();
    match bytes.first() {
        Some(b'=') => {
            let rest = &bytes[1..];
            let keep = rest.len().min(width.saturating_sub(1));
            String::from_utf8_lossy(&rest[..keep]).into_owned()
        }
        Some(b'@') => {
            let rest = &bytes[1..];
            let avail = width.saturating_sub(FILE_OVERHEAD);
            if rest.len() > avail {
                let tail = &rest[rest.len() - avail..];
                format!("...{}", String::from_utf8_lossy(tail))
            } else {
                String::from_utf8_lossy(rest).into_owned()
            }
        }
        _ => {
            let line_len = bytes
                .iter()
                .position(|&b| b == b'\n')
                .unwrap_or(bytes.len());
            let len = line_len.min(width.saturating_sub(STRING_OVERHEAD));
            let head = String::from_utf8_lossy(&bytes[..len]);
            if len < bytes.len() {
                format!("[string \"{head}...\"]")
            } else {
                format!("[string \"{head}\"]")
            }
        }
    }
}
