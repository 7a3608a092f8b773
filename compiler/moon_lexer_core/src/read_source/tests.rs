use super::*;
use pretty_assertions::assert_eq;

fn drain(mut source: impl CharSource) -> Vec<u8> {
    let mut out = Vec::new();
    while let Some(b) = source.next_char() {
        out.push(b);
    }
    out
}

/// Reader that yields its data and then fails.
struct Failing<'a> {
    data: &'a [u8],
}

impl Read for Failing<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Err(io::Error::other("disk on fire"));
        }
        let n = buf.len().min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

#[test]
fn reads_across_block_boundaries() {
    let data = b"local function f() return 1 end";
    let source = ReadSource::with_block_size(&data[..], 3);
    assert_eq!(drain(source), data.to_vec());
}

#[test]
fn empty_reader_is_immediately_exhausted() {
    let mut source = ReadSource::new(io::empty());
    assert_eq!(source.next_char(), None);
    assert_eq!(source.next_char(), None);
    assert!(source.take_error().is_none());
}

#[test]
fn read_error_ends_stream_and_is_kept() {
    let mut source = ReadSource::with_block_size(Failing { data: b"ab" }, 1);
    assert_eq!(source.next_char(), Some(b'a'));
    assert_eq!(source.next_char(), Some(b'b'));
    assert_eq!(source.next_char(), None);
    let err = source.take_error();
    assert!(err.is_some());
    assert_eq!(err.map(|e| e.kind()), Some(io::ErrorKind::Other));
    assert_eq!(source.next_char(), None);
}

#[test]
fn skip_line_spans_blocks() {
    let data = b"-- a long comment\r\nx";
    let mut source = ReadSource::with_block_size(&data[..], 4);
    assert_eq!(source.skip_line(), (18, Some(b'\r')));
    assert_eq!(source.next_char(), Some(b'\n'));
    assert_eq!(source.next_char(), Some(b'x'));
    assert_eq!(source.skip_line(), (0, None));
}

mod proptest_read_source {
    use super::drain;
    use crate::{CharSource, ReadSource, SourceBuffer};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn agrees_with_cursor(
            bytes in proptest::collection::vec(any::<u8>(), 0..512),
            block in 1usize..64,
        ) {
            let buf = SourceBuffer::new(&bytes);
            let from_cursor = drain(buf.cursor());
            let from_reader = drain(ReadSource::with_block_size(&bytes[..], block));
            prop_assert_eq!(from_cursor, from_reader);
        }

        #[test]
        fn skip_line_agrees_with_cursor(
            bytes in proptest::collection::vec(
                prop_oneof![Just(b'a'), Just(b'\n'), Just(b'\r'), Just(b'-')],
                0..128,
            ),
            block in 1usize..16,
        ) {
            let buf = SourceBuffer::new(&bytes);
            let mut cursor = buf.cursor();
            let mut reader = ReadSource::with_block_size(&bytes[..], block);
            loop {
                let a = cursor.skip_line();
                let b = reader.skip_line();
                prop_assert_eq!(a, b);
                if a.1.is_none() {
                    break;
                }
                prop_assert_eq!(cursor.next_char(), reader.next_char());
            }
        }
    }
}
