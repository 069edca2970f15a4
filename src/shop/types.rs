//! Shop catalog: boats, rod skins, purchasable actions and their outcomes.

use crate::fishing::EnchantId;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Cosmetic hull the player fishes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoatType {
    #[default]
    Wooden,
    Fiberglass,
    Yacht,
}

impl BoatType {
    pub const ALL: [BoatType; 3] = [BoatType::Wooden, BoatType::Fiberglass, BoatType::Yacht];

    pub fn name(&self) -> &'static str {
        match self {
            BoatType::Wooden => "Old Rowboat",
            BoatType::Fiberglass => "Speedboat",
            BoatType::Yacht => "Luxury Yacht",
        }
    }

    pub fn price(&self) -> u64 {
        match self {
            BoatType::Wooden => 0,
            BoatType::Fiberglass => 1500,
            BoatType::Yacht => 8000,
        }
    }
}

/// Cosmetic rod appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RodSkin {
    #[default]
    Default,
    Carbon,
    Bamboo,
    Magma,
    Cyber,
    Samurai,
    Bone,
}

impl RodSkin {
    pub const ALL: [RodSkin; 7] = [
        RodSkin::Default,
        RodSkin::Carbon,
        RodSkin::Bamboo,
        RodSkin::Magma,
        RodSkin::Cyber,
        RodSkin::Samurai,
        RodSkin::Bone,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RodSkin::Default => "Standard",
            RodSkin::Carbon => "Carbon Fiber",
            RodSkin::Bamboo => "Zen Bamboo",
            RodSkin::Magma => "Magma Forged",
            RodSkin::Cyber => "Cyberpunk",
            RodSkin::Samurai => "Ronin Blade",
            RodSkin::Bone => "Leviathan Bone",
        }
    }

    pub fn price(&self) -> u64 {
        match self {
            RodSkin::Default => 0,
            RodSkin::Carbon => 500,
            RodSkin::Bamboo => 800,
            RodSkin::Magma => 2500,
            RodSkin::Cyber => 5000,
            RodSkin::Samurai => 3500,
            RodSkin::Bone => 4000,
        }
    }
}

/// Something the player can do at the shop counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopAction {
    UpgradeRod,
    /// Pay for a random enchant, replacing any equipped one.
    RollEnchant,
    /// Buys the boat if not owned, then equips it.
    Boat(BoatType),
    /// Buys the skin if not owned, then equips it.
    Skin(RodSkin),
    SellFish(Uuid),
}

/// What a successful shop action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopOutcome {
    RodUpgraded { level: u32, price: u64 },
    EnchantRolled(EnchantId),
    BoatBought(BoatType),
    BoatEquipped(BoatType),
    SkinBought(RodSkin),
    SkinEquipped(RodSkin),
    FishSold { name: String, value: u64 },
}

impl ShopOutcome {
    /// Player-facing confirmation line.
    pub fn toast(&self) -> String {
        match self {
            ShopOutcome::RodUpgraded { level, .. } => format!("Upgraded to Lvl {}", level),
            ShopOutcome::EnchantRolled(id) => format!("Got {} Enchant!", id.display_name()),
            ShopOutcome::BoatBought(_) => "Bought & Equipped!".to_string(),
            ShopOutcome::BoatEquipped(boat) => format!("Equipped {}", boat.name()),
            ShopOutcome::SkinBought(_) => "Purchased Skin!".to_string(),
            ShopOutcome::SkinEquipped(_) => "Equipped Skin".to_string(),
            ShopOutcome::FishSold { name, value } => format!("Sold {} (+{}G)", name, value),
        }
    }
}

/// Why the shop refused an action. The session turns these into toasts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    #[error("Not enough gold! (need {price}G)")]
    InsufficientGold { price: u64, gold: u64 },
    #[error("That fish is no longer in your bucket")]
    UnknownFish(Uuid),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prices_match_catalog() {
        let boats: Vec<u64> = BoatType::ALL.iter().map(|b| b.price()).collect();
        assert_eq!(boats, vec![0, 1500, 8000]);
        let skins: Vec<u64> = RodSkin::ALL.iter().map(|s| s.price()).collect();
        assert_eq!(skins, vec![0, 500, 800, 2500, 5000, 3500, 4000]);
    }

    #[test]
    fn test_serde_ids_are_lowercase() {
        assert_eq!(serde_json::to_string(&BoatType::Fiberglass).unwrap(), "\"fiberglass\"");
        assert_eq!(serde_json::to_string(&RodSkin::Samurai).unwrap(), "\"samurai\"");
        let skin: RodSkin = serde_json::from_str("\"default\"").unwrap();
        assert_eq!(skin, RodSkin::Default);
    }

    #[test]
    fn test_error_message() {
        let err = ShopError::InsufficientGold { price: 220, gold: 10 };
        assert_eq!(err.to_string(), "Not enough gold! (need 220G)");
    }
}
