//! Add-on packages: per-guest-per-night items and flat multi-packs.

use serde::{Deserialize, Serialize};

use super::reservation::DateRange;

/// An add-on charged per guest per night (breakfast, parking, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub visible: bool,
}

/// A flat-priced package bound to its own date window. The window also
/// feeds the availability classifier as a blocked range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPack {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub range: DateRange,
}

/// Combined per-guest-per-night price of the selected package items.
pub fn per_guest_price(selected: &[PackageItem]) -> f64 {
    selected.iter().map(|p| p.price).sum()
}

/// Combined flat price of the selected multi-packs.
pub fn flat_price(selected: &[MultiPack]) -> f64 {
    selected.iter().map(|p| p.price).sum()
}
