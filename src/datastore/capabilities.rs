//! # Per-document capabilities
//!
//! Three independent rights a token can hold on one (namespace, document)
//! pair, packed into a byte.

use std::fmt;

/// Set of {Get, Put, Append} rights
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Capabilities(u8);

impl Capabilities {
    /// No rights at all
    pub const NONE: Capabilities = Capabilities(0);
    /// May read the document
    pub const GET: Capabilities = Capabilities(1);
    /// May replace the document
    pub const PUT: Capabilities = Capabilities(2);
    /// May append to the document
    pub const APPEND: Capabilities = Capabilities(4);
    /// Every right
    pub const ALL: Capabilities = Capabilities(7);

    /// Build a set from three flags
    pub fn from_flags(get: bool, put: bool, append: bool) -> Self {
        let mut caps = Self::NONE;
        if get {
            caps = caps.union(Self::GET);
        }
        if put {
            caps = caps.union(Self::PUT);
        }
        if append {
            caps = caps.union(Self::APPEND);
        }
        caps
    }

    pub fn union(self, other: Capabilities) -> Self {
        Capabilities(self.0 | other.0)
    }

    /// True when every right in `other` is also in `self`
    pub fn contains(self, other: Capabilities) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn can_get(self) -> bool {
        self.contains(Self::GET)
    }

    pub fn can_put(self) -> bool {
        self.contains(Self::PUT)
    }

    pub fn can_append(self) -> bool {
        self.contains(Self::APPEND)
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |on: bool, c: char| if on { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            flag(self.can_get(), 'g'),
            flag(self.can_put(), 'p'),
            flag(self.can_append(), 'a')
        )
    }
}
