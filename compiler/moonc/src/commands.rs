//! Driver commands over a streamed chunk.

use std::fs::File;
use std::io::{self, Read, Write};

use moon_ir::{StringInterner, Token, TokenKind};
use moon_lexer::{LexError, LexState};
use moon_lexer_core::ReadSource;
use thiserror::Error;

type ChunkSource = ReadSource<Box<dyn Read>>;

/// Failure of a driver command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The chunk could not be opened or read to the end.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    /// Writing the report failed.
    #[error("cannot write output: {0}")]
    Output(#[source] io::Error),
    #[error(transparent)]
    Lex(#[from] LexError),
}

/// A chunk opened for streaming.
pub struct Chunk {
    /// Source identifier handed to the lexer (`@path`, `=stdin`, ...).
    name: String,
    /// Where the bytes come from, for I/O errors.
    path: String,
    source: ChunkSource,
}

impl Chunk {
    /// Open a file, or stdin when `path` is `-`.
    pub fn open(path: &str) -> Result<Self, CommandError> {
        if path == "-" {
            return Ok(Self::from_reader("=stdin", "<stdin>", io::stdin()));
        }
        let file = File::open(path).map_err(|source| CommandError::Io {
            path: path.to_owned(),
            source,
        })?;
        Ok(Self::from_reader(&format!("@{path}"), path, file))
    }

    pub fn from_reader(name: &str, path: &str, reader: impl Read + 'static) -> Self {
        Self {
            name: name.to_owned(),
            path: path.to_owned(),
            source: ReadSource::new(Box::new(reader)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Write one line per token, end of input included.
///
/// Returns the number of tokens before end of input.
pub fn dump_tokens(
    chunk: Chunk,
    interner: &StringInterner,
    out: &mut impl Write,
) -> Result<usize, CommandError> {
    drive(chunk, interner, |lexer, token| {
        writeln!(out, "{}", format_token(lexer, &token))
    })
}

/// Lex the whole chunk without printing anything.
pub fn check_chunk(chunk: Chunk, interner: &StringInterner) -> Result<usize, CommandError> {
    drive(chunk, interner, |_, _| Ok(()))
}

fn drive<F>(
    mut chunk: Chunk,
    interner: &StringInterner,
    mut on_token: F,
) -> Result<usize, CommandError>
where
    F: FnMut(&LexState<'_, &mut ChunkSource>, Token) -> io::Result<()>,
{
    let mut lexer = LexState::new(&chunk.name, &mut chunk.source, interner);
    let mut count = 0;
    let outcome = loop {
        let token = match lexer.advance() {
            Ok(token) => token,
            Err(err) => break Err(CommandError::Lex(err)),
        };
        if let Err(err) = on_token(&lexer, token) {
            break Err(CommandError::Output(err));
        }
        if token.kind == TokenKind::Eos {
            break Ok(count);
        }
        count += 1;
    };
    let pinned = lexer.into_pins().len();
    tracing::debug!(chunk = %chunk.name, tokens = count, pinned, "chunk finished");

    // A read error ends the stream early; report it over whatever the
    // truncated input made the lexer say.
    if let Some(source) = chunk.source.take_error() {
        return Err(CommandError::Io {
            path: chunk.path,
            source,
        });
    }
    outcome
}

/// `line  span  spelling  [text]`
fn format_token<S>(lexer: &LexState<'_, S>, token: &Token) -> String {
    let span = token.span.to_string();
    let spelling = token.kind.spelling();
    if token.kind.has_payload() {
        format!(
            "{:>5}  {span:<10} {spelling:<8} {:?}",
            token.line,
            lexer.token_text(token)
        )
    } else {
        format!("{:>5}  {span:<10} {spelling}", token.line)
    }
}
