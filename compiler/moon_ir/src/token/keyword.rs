//! The reserved-word table.
//!
//! The declaration order is significant: a keyword's position is its
//! dense index, and `FIRST_RESERVED + index` is its token code.

use std::fmt;

/// A reserved word.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Keyword {
    And,
    Break,
    Do,
    Else,
    Elseif,
    End,
    False,
    For,
    Function,
    If,
    In,
    Local,
    Nil,
    Not,
    Or,
    Repeat,
    Return,
    Then,
    True,
    Until,
    While,
}

impl Keyword {
    /// Every keyword, in code order.
    pub const ALL: [Keyword; 21] = [
        Keyword::And,
        Keyword::Break,
        Keyword::Do,
        Keyword::Else,
        Keyword::Elseif,
        Keyword::End,
        Keyword::False,
        Keyword::For,
        Keyword::Function,
        Keyword::If,
        Keyword::In,
        Keyword::Local,
        Keyword::Nil,
        Keyword::Not,
        Keyword::Or,
        Keyword::Repeat,
        Keyword::Return,
        Keyword::Then,
        Keyword::True,
        Keyword::Until,
        Keyword::While,
    ];

    /// Source spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::And => "and",
            Keyword::Break => "break",
            Keyword::Do => "do",
            Keyword::Else => "else",
            Keyword::Elseif => "elseif",
            Keyword::End => "end",
            Keyword::False => "false",
            Keyword::For => "for",
            Keyword::Function => "function",
            Keyword::If => "if",
            Keyword::In => "in",
            Keyword::Local => "local",
            Keyword::Nil => "nil",
            Keyword::Not => "not",
            Keyword::Or => "or",
            Keyword::Repeat => "repeat",
            Keyword::Return => "return",
            Keyword::Then => "then",
            Keyword::True => "true",
            Keyword::Until => "until",
            Keyword::While => "while",
        }
    }

    /// Dense index in `0..NUM_RESERVED`.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn from_index(index: u8) -> Option<Keyword> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Token code: `FIRST_RESERVED + index`.
    #[inline]
    pub const fn code(self) -> u16 {
        super::FIRST_RESERVED + self as u16
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
