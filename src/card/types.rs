use serde::{Deserialize, Serialize};

/// A numeric attribute every card exposes, read through a fixed accessor
#[derive(Clone, Copy)]
pub struct Attribute {
    pub name: &'static str,
    extract: fn(&Card) -> i64,
}

impl Attribute {
    pub fn value(&self, card: &Card) -> i64 {
        (self.extract)(card)
    }
}

impl std::fmt::Debug for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Attribute({})", self.name)
    }
}

impl PartialEq for Attribute {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Attribute {}

/// Comparable attributes, in menu order
pub static ATTRIBUTES: [Attribute; 4] = [
    Attribute {
        name: "Number of engines",
        extract: |c| c.num_engines,
    },
    Attribute {
        name: "Maximum passenger count",
        extract: |c| c.max_pax,
    },
    Attribute {
        name: "Range",
        extract: |c| c.range,
    },
    Attribute {
        name: "Cost when new",
        extract: |c| c.cost,
    },
];

/// An aircraft card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Card {
    pub name: String,
    pub num_engines: i64,
    pub max_pax: i64,
    pub range: i64,
    pub cost: i64,
}

impl Card {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes() -> &'static [Attribute] {
        &ATTRIBUTES
    }

    pub fn attribute_names() -> Vec<&'static str> {
        ATTRIBUTES.iter().map(|a| a.name).collect()
    }

    /// Look up an attribute value by its display name
    pub fn attribute_value(&self, name: &str) -> Option<i64> {
        ATTRIBUTES
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value(self))
    }
}
