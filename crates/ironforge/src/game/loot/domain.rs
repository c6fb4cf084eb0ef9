use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

/// Rarity band controlling how often an item leaves the loot pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
    /// Catalog rows carrying a rarity this build does not recognize keep a
    /// modest weight instead of failing deserialization.
    #[serde(other)]
    Unclassified,
}

impl Rarity {
    /// Relative weight in the drop pool. Higher is more common.
    pub const fn drop_weight(self) -> u32 {
        match self {
            Rarity::Common => 60,
            Rarity::Rare => 30,
            Rarity::Epic => 8,
            Rarity::Legendary => 2,
            Rarity::Unclassified => 10,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
            Rarity::Unclassified => "unclassified",
        }
    }
}

/// Static catalog entry; immutable at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub rarity: Rarity,
    pub power: u32,
}
