//! `group.item` addresses used to pick one todo item

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;

/// Shorthand accepted by `--goto` for the first item of the first group.
pub const FIRST: &str = "FIRST";

/// Two integers separated by exactly one non-digit character.
static ADDRESS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\D(\d+)$").expect("ADDRESS_PATTERN regex is invalid"));

/// Locates one item: the `item`-th match of the `group`-th file in a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    pub group: usize,
    pub item: usize,
}

impl Address {
    pub const FIRST: Address = Address { group: 1, item: 1 };

    pub fn new(group: usize, item: usize) -> Self {
        Self { group, item }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.group, self.item)
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(FIRST) {
            return Ok(Address::FIRST);
        }

        let invalid = || Error::InvalidAddress(s.to_string());
        let caps = ADDRESS_PATTERN.captures(trimmed).ok_or_else(invalid)?;
        let group = caps[1].parse().map_err(|_| invalid())?;
        let item = caps[2].parse().map_err(|_| invalid())?;
        Ok(Address { group, item })
    }
}
