use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// a fixed price and every origin -> destination pair it applies to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FareRule {
    /// price in whole rupees
    pub price: u32,
    pub rules: HashMap<String, HashSet<String>>,
}

impl FareRule {
    pub fn applies_to(&self, origin: &str, destination: &str) -> bool {
        self.rules
            .get(origin)
            .map(|destinations| destinations.contains(destination))
            .unwrap_or(false)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FareTable(Vec<FareRule>);

impl FareTable {
    pub fn new(rules: Vec<FareRule>) -> FareTable {
        FareTable(rules)
    }

    pub fn rules(&self) -> &[FareRule] {
        &self.0
    }

    /// price of the first rule covering the pair. `None` means no fare is
    /// published for it, which is not an error.
    pub fn lookup(&self, origin: &str, destination: &str) -> Option<u32> {
        self.0
            .iter()
            .find(|rule| rule.applies_to(origin, destination))
            .map(|rule| rule.price)
    }
}
