//! Abbreviation alias table.
//!
//! Chat shorthand rarely spells a word out: `ench` asks for an
//! enchanter, `engi` for an engineer. The table groups equivalent
//! spellings; looking up any member of a group yields the other
//! members as candidate prefixes for the word matcher. The table is
//! configuration data, built once per process and never mutated.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Spelling-equivalence groups for the built-in table.
///
/// Every member is a valid lookup key; its aliases are the remaining
/// members of its group, in group order.
const DEFAULT_GROUPS: &[&[&str]] = &[
    &["enchanter", "enchant", "enchan", "ench"],
    &["alchemist", "alchem", "alch"],
    &["blacksmith", "blacksm", "bsmith"],
    &["engineer", "engin", "engi"],
    &["jewelcrafter", "jewelcraft", "jeweler", "jc"],
    &["warrior", "warri", "warr"],
    &["warlock", "wlock", "lock"],
    &["paladin", "pala", "pal"],
    &["priest", "pri"],
    &["shaman", "sham"],
    &["hunter", "hunt"],
    &["druid", "dru"],
    &["rogue", "rog"],
    &["healer", "heals", "heal"],
];

/// Static mapping from a token to its accepted abbreviation prefixes.
#[derive(Debug, Default)]
pub struct AliasTable {
    map: HashMap<String, Vec<String>>,
}

impl AliasTable {
    /// An empty table: every lookup yields no aliases.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from spelling-equivalence groups.
    ///
    /// Each group member becomes a key whose aliases are the other
    /// members, preserving group order.
    pub fn from_groups(groups: &[&[&str]]) -> Self {
        let mut map = HashMap::new();
        for group in groups {
            for member in *group {
                let aliases: Vec<String> = group
                    .iter()
                    .filter(|other| *other != member)
                    .map(|other| other.to_ascii_lowercase())
                    .collect();
                map.insert(member.to_ascii_lowercase(), aliases);
            }
        }
        Self { map }
    }

    /// The built-in group set.
    pub fn builtin() -> Self {
        Self::from_groups(DEFAULT_GROUPS)
    }

    /// Aliases registered for `token`, in table order. Case-insensitive.
    pub fn aliases_for(&self, token: &str) -> &[String] {
        let entry = if token.bytes().any(|b| b.is_ascii_uppercase()) {
            self.map.get(&token.to_ascii_lowercase())
        } else {
            self.map.get(token)
        };
        entry.map(Vec::as_slice).unwrap_or(&[])
    }
}

/// The process-wide default table, built on first use.
pub fn default_aliases() -> &'static AliasTable {
    static TABLE: OnceLock<AliasTable> = OnceLock::new();
    TABLE.get_or_init(AliasTable::builtin)
}

#[cfg(test)]
#[path = "alias_tests.rs"]
mod tests;
