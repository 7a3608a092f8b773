//! Lexer limits and tuning knobs.

/// Largest line count accepted in one chunk by default.
pub const MAX_LINES: u32 = i32::MAX as u32 - 2;

/// Default display width for chunk identifiers in messages.
pub const CHUNK_ID_WIDTH: usize = 80;

/// Default minimum growth of the literal buffer, in bytes.
pub const MIN_BUFFER_GROWTH: usize = 32;

/// Configuration for one [`LexState`](crate::LexState).
///
/// ```
/// use moon_lexer::LexerConfig;
///
/// let config = LexerConfig {
///     max_lines: 10_000,
///     ..LexerConfig::default()
/// };
/// assert_eq!(config.chunk_id_width, 80);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerConfig {
    /// Line count past which scanning fails with "too many lines in a chunk".
    pub max_lines: u32,
    /// Width budget for the chunk identifier prefix of error messages.
    pub chunk_id_width: usize,
    /// Fixed increment added on top of doubling when the literal buffer grows.
    pub min_buffer_growth: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            max_lines: MAX_LINES,
            chunk_id_width: CHUNK_ID_WIDTH,
            min_buffer_growth: MIN_BUFFER_GROWTH,
        }
    }
}
