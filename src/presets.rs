use std::collections::BTreeMap;

use crate::rule_set::RuleError;
use crate::rule_set::RuleSet;

/// Well known Life-like rules, in `born/survive` notation.
///
/// See: https://conwaylife.com/wiki/List_of_Life-like_rules
const BUILTIN: [(&str, &str); 19] = [
    ("life", "3/23"),
    ("highlife", "36/23"),
    ("assimilation", "345/4567"),
    ("2x2", "36/125"),
    ("day-and-night", "3678/34678"),
    ("amoeba", "357/1358"),
    ("move", "368/245"),
    ("pseudolife", "357/238"),
    ("diamoeba", "35678/5678"),
    ("34-life", "34/34"),
    ("longlife", "345/5"),
    ("stains", "3678/235678"),
    ("seeds", "2/"),
    ("maze", "3/12345"),
    ("coagulations", "378/235678"),
    ("walled-cities", "45678/2345"),
    ("gnarl", "1/1"),
    ("replicator", "1357/1357"),
    ("mystery", "3458/05678"),
];

/// Named rules, looked up case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    rules: BTreeMap<String, RuleSet>,
}

impl Registry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every builtin rule.
    pub fn builtin() -> Result<Self, RuleError> {
        let mut registry = Self::new();

        for (name, rule) in BUILTIN {
            registry.insert(name, rule.parse()?);
        }

        Ok(registry)
    }

    /// Add or replace a rule. Returns the rule previously registered under `name`, if any.
    pub fn insert(&mut self, name: &str, rule: RuleSet) -> Option<RuleSet> {
        self.rules.insert(name.to_ascii_lowercase(), rule)
    }

    pub fn get(&self, name: &str) -> Option<RuleSet> {
        self.rules.get(&name.to_ascii_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Every rule, sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, RuleSet)> {
        self.rules.iter().map(|(name, &rule)| (name.as_str(), rule))
    }
}
