use super::*;
use pretty_assertions::assert_eq;

#[test]
fn save_and_reset() {
    let mut buf = LiteralBuffer::new();
    assert!(buf.is_empty());
    for b in b"local" {
        buf.save(*b);
    }
    assert_eq!(buf.as_bytes(), b"local");
    assert_eq!(buf.len(), 5);
    buf.reset();
    assert!(buf.is_empty());
}

#[test]
fn first_growth_reserves_min_increment() {
    let mut buf = LiteralBuffer::with_min_growth(32);
    buf.save(b'x');
    assert!(buf.capacity() >= 32);
}

#[test]
fn growth_at_least_doubles_plus_increment() {
    let mut buf = LiteralBuffer::with_min_growth(32);
    let mut last_cap = 0;
    for i in 0..10_000u32 {
        let before = buf.capacity();
        buf.save(i.to_le_bytes()[0]);
        let after = buf.capacity();
        if after != before {
            assert!(after >= 2 * before + 32, "grew {before} -> {after}");
            last_cap = after;
        }
    }
    assert!(last_cap >= 10_000);
}

#[test]
fn reset_never_shrinks() {
    let mut buf = LiteralBuffer::new();
    for _ in 0..5_000 {
        buf.save(b'a');
    }
    let cap = buf.capacity();
    for _ in 0..100 {
        buf.reset();
        buf.save(b'b');
        buf.save(b'c');
    }
    assert_eq!(buf.capacity(), cap);
    assert_eq!(buf.as_bytes(), b"bc");
}

#[test]
fn trimmed_strips_both_ends() {
    let mut buf = LiteralBuffer::new();
    for b in b"[*[body]*]" {
        buf.save(*b);
    }
    assert_eq!(buf.trimmed(3), b"body");
    assert_eq!(buf.trimmed(5), b"");
    assert_eq!(buf.trimmed(6), b"");
}

#[test]
fn display_is_lossy() {
    let mut buf = LiteralBuffer::new();
    buf.save(b'"');
    buf.save(0xFF);
    assert_eq!(buf.to_display(), "\"\u{FFFD}");
}
