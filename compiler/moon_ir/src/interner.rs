//! Sharded string interner for byte strings.
//!
//! Provides O(1) interning and lookup with thread-safe concurrent access
//! via per-shard locking. Contents are arbitrary bytes: string literals may
//! hold any value a decimal escape can produce.
//!
//! The interner also carries the keyword table. Construction interns every
//! reserved spelling once and marks it; afterwards the marks are read-only,
//! so classifying an identifier is one interning plus one lock-free lookup.

use std::borrow::Cow;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::{Keyword, Name};

/// Per-shard storage for interned strings.
struct InternShard {
    /// Map from string content to local index.
    map: FxHashMap<&'static [u8], u32>,
    /// Storage for string contents.
    strings: Vec<&'static [u8]>,
}

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// Shard exceeded capacity (over 268 million strings).
    ShardOverflow { shard_idx: usize, count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::ShardOverflow { shard_idx, count } => write!(
                f,
                "interner shard {} exceeded capacity: {} strings, max is {} (0x{:X})",
                shard_idx,
                count,
                Name::MAX_LOCAL,
                Name::MAX_LOCAL
            ),
        }
    }
}

impl std::error::Error for InternError {}

impl InternShard {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(256),
        }
    }

    fn with_empty() -> Self {
        let mut shard = Self::new();
        // Pre-intern empty string at index 0
        let empty: &'static [u8] = b"";
        shard.map.insert(empty, 0);
        shard.strings.push(empty);
        shard
    }
}

/// Sharded string interner for concurrent access.
///
/// # Thread Safety
/// Uses `RwLock` per shard for concurrent read/write access. The reserved
/// marks are written only during construction.
pub struct StringInterner {
    shards: [RwLock<InternShard>; Name::NUM_SHARDS],
    /// Reserved-word marks, keyed by the interned spelling.
    reserved: FxHashMap<Name, Keyword>,
    /// Total count of interned strings across all shards (O(1) `len()`).
    total_count: AtomicUsize,
}

impl StringInterner {
    /// Create a new interner with the keyword table installed.
    pub fn new() -> Self {
        let shards = std::array::from_fn(|i| {
            if i == 0 {
                RwLock::new(InternShard::with_empty())
            } else {
                RwLock::new(InternShard::new())
            }
        });

        // Start with 1 for the empty string pre-interned in shard 0
        let mut interner = Self {
            shards,
            reserved: FxHashMap::default(),
            total_count: AtomicUsize::new(1),
        };
        for kw in Keyword::ALL {
            let name = interner.intern_str(kw.as_str());
            interner.mark_reserved(name, kw);
        }
        interner
    }

    /// Compute shard for a string based on its hash.
    #[inline]
    fn shard_for(s: &[u8]) -> usize {
        let mut hash = 0u32;
        for &byte in s.iter().take(8) {
            hash = hash.wrapping_mul(31).wrapping_add(u32::from(byte));
        }
        (hash as usize) % Name::NUM_SHARDS
    }

    /// Try to intern a byte string, returning its Name or an error on overflow.
    pub fn try_intern(&self, s: &[u8]) -> Result<Name, InternError> {
        let shard_idx = Self::shard_for(s);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "shard_idx is bounded by NUM_SHARDS (16)"
        )]
        let shard_idx_u32 = shard_idx as u32;
        let shard = &self.shards[shard_idx];

        // Fast path: check if already interned
        {
            let guard = shard.read();
            if let Some(&local) = guard.map.get(s) {
                return Ok(Name::new(shard_idx_u32, local));
            }
        }

        // Slow path: need to insert
        let mut guard = shard.write();

        // Double-check after acquiring write lock
        if let Some(&local) = guard.map.get(s) {
            return Ok(Name::new(shard_idx_u32, local));
        }

        let local = u32::try_from(guard.strings.len())
            .ok()
            .filter(|&local| local <= Name::MAX_LOCAL)
            .ok_or(InternError::ShardOverflow {
                shard_idx,
                count: guard.strings.len(),
            })?;

        // Leak the bytes to get 'static lifetime
        let leaked: &'static [u8] = Box::leak(s.to_vec().into_boxed_slice());
        guard.strings.push(leaked);
        guard.map.insert(leaked, local);

        // Relaxed is fine: the count is only a statistic
        self.total_count.fetch_add(1, Ordering::Relaxed);

        Ok(Name::new(shard_idx_u32, local))
    }

    /// Intern a byte string, returning its Name.
    ///
    /// # Panics
    /// Panics if a shard exceeds capacity. Use `try_intern` for fallible
    /// interning.
    #[inline]
    pub fn intern(&self, s: &[u8]) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Intern a UTF-8 string.
    #[inline]
    pub fn intern_str(&self, s: &str) -> Name {
        self.intern(s.as_bytes())
    }

    /// Look up the bytes for a Name.
    ///
    /// Interned strings are leaked, so the returned slice is `'static`.
    pub fn lookup(&self, name: Name) -> &'static [u8] {
        let shard = &self.shards[name.shard()];
        let guard = shard.read();
        guard.strings[name.local()]
    }

    /// Look up a Name for display, replacing invalid UTF-8.
    pub fn display(&self, name: Name) -> Cow<'static, str> {
        String::from_utf8_lossy(self.lookup(name))
    }

    /// The keyword a Name is reserved for, if any.
    #[inline]
    pub fn reserved(&self, name: Name) -> Option<Keyword> {
        self.reserved.get(&name).copied()
    }

    /// Mark an interned spelling as reserved. Only called while building
    /// the keyword table in [`new`](Self::new).
    fn mark_reserved(&mut self, name: Name, kw: Keyword) {
        debug_assert!(
            !self.reserved.contains_key(&name),
            "keyword {kw} marked twice"
        );
        self.reserved.insert(name, kw);
    }

    /// Get the number of interned strings (O(1)).
    pub fn len(&self) -> usize {
        self.total_count.load(Ordering::Relaxed)
    }

    /// Check if the interner is empty (only has the empty string).
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared interner for compilation units scanned on different threads.
///
/// Each unit still owns its own lexer state; only the interner (and the
/// keyword table inside it) is shared.
#[derive(Clone)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    /// Create a new shared interner.
    pub fn new() -> Self {
        SharedInterner(Arc::new(StringInterner::new()))
    }
}

impl Default for SharedInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
