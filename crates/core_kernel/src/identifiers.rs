//! Ledger keys and transaction identifiers
//!
//! Claim keys are plain strings owned by the caller; the only keys this
//! crate mints are the sequential `CLAIM<i>` keys used when seeding a ledger.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Prefix of keys written when seeding the ledger
pub const CLAIM_KEY_PREFIX: &str = "CLAIM";

/// A world-state key under which a claim record is stored
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimKey(String);

impl ClaimKey {
    /// Wraps a caller-supplied key as-is
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Key of the `index`-th seed record, e.g. `CLAIM0`
    pub fn seeded(index: usize) -> Self {
        Self(format!("{}{}", CLAIM_KEY_PREFIX, index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the key lies in the conventional claim namespace
    pub fn is_claim_namespace(&self) -> bool {
        self.0.starts_with(CLAIM_KEY_PREFIX)
    }

    /// Half-open range `[start, end)` covering every key starting with
    /// [`CLAIM_KEY_PREFIX`]
    pub fn namespace_range() -> (String, String) {
        prefix_range(CLAIM_KEY_PREFIX)
    }
}

impl fmt::Display for ClaimKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClaimKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ClaimKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl AsRef<str> for ClaimKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Computes the half-open key range holding every key with `prefix`.
///
/// The end bound is the prefix with its last character bumped to the next
/// scalar value. An empty prefix yields an unbounded range `("", "")`.
pub fn prefix_range(prefix: &str) -> (String, String) {
    let mut chars: Vec<char> = prefix.chars().collect();
    while let Some(last) = chars.pop() {
        if let Some(next) = next_char(last) {
            chars.push(next);
            return (prefix.to_string(), chars.into_iter().collect());
        }
    }
    (prefix.to_string(), String::new())
}

fn next_char(c: char) -> Option<char> {
    let mut code = c as u32 + 1;
    // skip the surrogate block
    if (0xD800..=0xDFFF).contains(&code) {
        code = 0xE000;
    }
    char::from_u32(code)
}

/// Identifier of a single invocation submitted through the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxId(Uuid);

impl TxId {
    /// Creates a new time-ordered identifier (v7)
    pub fn new_v7() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TxId {
    fn default() -> Self {
        Self::new_v7()
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TX-{}", self.0)
    }
}

impl FromStr for TxId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid_str = s.strip_prefix("TX-").unwrap_or(s);
        Ok(Self(Uuid::parse_str(uuid_str)?))
    }
}
