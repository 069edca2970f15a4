//! Shop transactions against the player profile.

use super::types::{BoatType, RodSkin, ShopAction, ShopError, ShopOutcome};
use crate::core::constants::{ENCHANT_ROLL_PRICE, ROD_UPGRADE_BASE_PRICE, ROD_UPGRADE_PRICE_PER_LEVEL};
use crate::core::profile::PlayerProfile;
use crate::fishing::{EnchantId, ENCHANT_POOL};
use rand::Rng;
use tracing::debug;
use uuid::Uuid;

/// Price of the next rod level: `100 + (level - 1) * 120`.
pub fn rod_upgrade_price(rod_level: u32) -> u64 {
    ROD_UPGRADE_BASE_PRICE + rod_level.saturating_sub(1) as u64 * ROD_UPGRADE_PRICE_PER_LEVEL
}

/// Draws an enchant from the pool, weighted by rarity.
pub fn roll_enchant(rng: &mut impl Rng) -> EnchantId {
    let total: f64 = ENCHANT_POOL.iter().map(|e| e.rarity_weight).sum();
    let mut roll = rng.gen::<f64>() * total;
    for enchant in &ENCHANT_POOL {
        if roll < enchant.rarity_weight {
            return enchant.id;
        }
        roll -= enchant.rarity_weight;
    }
    ENCHANT_POOL[0].id
}

/// Applies one shop action. Nothing changes when an error is returned.
pub fn apply_shop_action(
    profile: &mut PlayerProfile,
    action: ShopAction,
    rng: &mut impl Rng,
) -> Result<ShopOutcome, ShopError> {
    let outcome = match action {
        ShopAction::UpgradeRod => {
            let price = rod_upgrade_price(profile.rod_level);
            spend(profile, price)?;
            profile.rod_level += 1;
            ShopOutcome::RodUpgraded {
                level: profile.rod_level,
                price,
            }
        }
        ShopAction::RollEnchant => {
            spend(profile, ENCHANT_ROLL_PRICE)?;
            let enchant = roll_enchant(rng);
            profile.equipped_enchant = Some(enchant);
            ShopOutcome::EnchantRolled(enchant)
        }
        ShopAction::Boat(boat) => buy_or_equip_boat(profile, boat)?,
        ShopAction::Skin(skin) => buy_or_equip_skin(profile, skin)?,
        ShopAction::SellFish(id) => sell_fish(profile, id)?,
    };
    debug!(?outcome, gold = profile.gold, "shop action applied");
    Ok(outcome)
}

fn spend(profile: &mut PlayerProfile, price: u64) -> Result<(), ShopError> {
    if profile.gold < price {
        return Err(ShopError::InsufficientGold {
            price,
            gold: profile.gold,
        });
    }
    profile.gold -= price;
    Ok(())
}

fn buy_or_equip_boat(profile: &mut PlayerProfile, boat: BoatType) -> Result<ShopOutcome, ShopError> {
    if profile.owned_boats.contains(&boat) {
        profile.boat = boat;
        return Ok(ShopOutcome::BoatEquipped(boat));
    }
    spend(profile, boat.price())?;
    profile.owned_boats.push(boat);
    profile.boat = boat;
    Ok(ShopOutcome::BoatBought(boat))
}

fn buy_or_equip_skin(profile: &mut PlayerProfile, skin: RodSkin) -> Result<ShopOutcome, ShopError> {
    if profile.owned_skins.contains(&skin) {
        profile.rod_skin = skin;
        return Ok(ShopOutcome::SkinEquipped(skin));
    }
    spend(profile, skin.price())?;
    profile.owned_skins.push(skin);
    profile.rod_skin = skin;
    Ok(ShopOutcome::SkinBought(skin))
}

fn sell_fish(profile: &mut PlayerProfile, id: Uuid) -> Result<ShopOutcome, ShopError> {
    let index = profile
        .inventory
        .iter()
        .position(|item| item.id == id)
        .ok_or(ShopError::UnknownFish(id))?;
    let item = profile.inventory.remove(index);
    profile.gold += item.value;
    Ok(ShopOutcome::FishSold {
        name: item.name,
        value: item.value,
    })
}
