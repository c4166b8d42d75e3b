//! Static catalog reference data: category and collection IDs as the
//! backend knows them, plus the material tier used for discount bands.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Returned for any name not in a table.
pub const UNKNOWN_ID: u32 = 0;

pub const CATEGORIES: &[(&str, u32)] = &[
    ("ring", 3),
    ("bracelet", 4),
    ("chains", 5),
    ("necklace", 6),
    ("set", 7),
    ("necklace set ring and bracelet", 8),
    ("earring", 9),
    ("bangles", 10),
    ("anklet", 11),
    ("studs", 12),
    ("pendant set", 13),
    ("chain pendant", 14),
    ("chain pendant set", 15),
    ("hoops", 16),
    ("pendant", 17),
    ("necklace set", 18),
];

pub const COLLECTIONS: &[(&str, u32)] = &[
    ("eclipse", 3),
    ("cascade", 4),
    ("embrace", 5),
    ("chromatic", 6),
    ("blush", 7),
    ("regalia", 8),
    ("crowns", 9),
    ("bands", 11),
    ("strings", 12),
    ("celestial sphere", 13),
    ("wild wristlets", 14),
    ("eternity", 15),
    ("charms", 16),
    ("lunar", 17),
    ("minimal", 18),
    ("negligee", 19),
    ("sautoir", 20),
    ("torsade", 21),
    ("hoops", 22),
    ("drop earrings", 23),
    ("charm drops", 24),
    ("artistic accents", 25),
    ("tiny treasures", 26),
    ("mini eclipse", 27),
    ("sweet charms", 28),
    ("flare", 29),
    ("lilac", 30),
    ("solitaire", 31),
    ("amethyst", 32),
    ("myriad", 33),
    ("coven", 34),
    ("lavender", 35),
    ("serenity", 36),
    ("elegance", 37),
    ("willow", 38),
    ("harmony duet", 39),
    ("moon light", 40),
    ("shrimm's authentic", 41),
    ("dazzle", 42),
    ("enigma", 43),
    ("allure", 44),
    ("cherie", 45),
    ("brilliance", 46),
    ("beads", 47),
];

fn lookup(table: &[(&str, u32)], name: &str) -> u32 {
    let key = name.trim().to_lowercase();
    table
        .iter()
        .find(|(entry, _)| *entry == key)
        .map(|(_, id)| *id)
        .unwrap_or(UNKNOWN_ID)
}

pub fn resolve_category_id(name: &str) -> u32 {
    lookup(CATEGORIES, name)
}

pub fn resolve_collection_id(name: &str) -> u32 {
    lookup(COLLECTIONS, name)
}

/// Which discount band family a product belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MaterialTier {
    GoldDiamond,
    Silver,
}

impl MaterialTier {
    /// 14 kt pieces are the gold/diamond line; everything else is silver.
    pub fn from_karat(karat: u32) -> Self {
        if karat == 14 {
            MaterialTier::GoldDiamond
        } else {
            MaterialTier::Silver
        }
    }

    pub fn from_precious(is_precious: bool) -> Self {
        if is_precious {
            MaterialTier::GoldDiamond
        } else {
            MaterialTier::Silver
        }
    }

    pub fn is_precious(self) -> bool {
        self == MaterialTier::GoldDiamond
    }

    /// Title staff see when picking a band for a line of this tier.
    pub fn band_title(self) -> &'static str {
        match self {
            MaterialTier::GoldDiamond => "Diamond Discount",
            MaterialTier::Silver => "Silver Discount",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_lookup_trims_and_ignores_case() {
        assert_eq!(resolve_category_id("  Ring  "), 3);
        assert_eq!(resolve_category_id("NECKLACE SET"), 18);
        assert_eq!(resolve_category_id("Necklace Set Ring and Bracelet"), 8);
    }

    #[test]
    fn unknown_category_maps_to_zero() {
        assert_eq!(resolve_category_id("unknown"), UNKNOWN_ID);
        assert_eq!(resolve_category_id(""), UNKNOWN_ID);
    }

    #[test]
    fn collection_lookup() {
        assert_eq!(resolve_collection_id("Eclipse"), 3);
        assert_eq!(resolve_collection_id(" Shrimm's Authentic "), 41);
        assert_eq!(resolve_collection_id("beads"), 47);
        // 10 is not assigned to any collection.
        assert!(COLLECTIONS.iter().all(|(_, id)| *id != 10));
    }

    #[test]
    fn hoops_differs_between_tables() {
        assert_eq!(resolve_category_id("hoops"), 16);
        assert_eq!(resolve_collection_id("hoops"), 22);
    }

    #[test]
    fn unknown_collection_maps_to_zero() {
        assert_eq!(resolve_collection_id("ring"), UNKNOWN_ID);
    }

    #[test]
    fn material_tier_from_karat() {
        assert_eq!(MaterialTier::from_karat(14), MaterialTier::GoldDiamond);
        assert_eq!(MaterialTier::from_karat(18), MaterialTier::Silver);
        assert!(MaterialTier::from_karat(14).is_precious());
        assert_eq!(MaterialTier::from_precious(false).band_title(), "Silver Discount");
    }
}
