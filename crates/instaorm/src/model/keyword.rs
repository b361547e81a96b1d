use std::fmt;

/// The closed set of SQL tokens the builders are allowed to emit.
///
/// Apart from caller-supplied identifiers, every piece of rendered SQL comes
/// from this enum (join flavours live in [`super::JoinType`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Insert,
    Select,
    Update,
    Delete,
    From,
    Where,
    Into,
    Values,
    Set,
    On,
    Equals,
    Placeholder,
    Column,
    Returning,
}

impl Keyword {
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Insert => "insert",
            Keyword::Select => "select",
            Keyword::Update => "update",
            Keyword::Delete => "delete",
            Keyword::From => "from",
            Keyword::Where => "where",
            Keyword::Into => "into",
            Keyword::Values => "values",
            Keyword::Set => "set",
            Keyword::On => "on",
            Keyword::Equals => "=",
            Keyword::Placeholder => "?",
            Keyword::Column => "column",
            Keyword::Returning => "returning",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Keyword {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
