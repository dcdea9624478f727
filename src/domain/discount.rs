//! Room discounts. Only multi-night discounts participate in automatic
//! price reduction; promo discounts are surfaced elsewhere.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountKind {
    #[serde(rename = "multi-night")]
    MultiNight,
    #[serde(rename = "promo-discount")]
    Promo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueType {
    #[serde(rename = "% percentage")]
    Percentage,
    #[serde(rename = "- fixed value")]
    Fixed,
}

/// A discount record as stored. The `nights` threshold arrives either as a
/// number or as a digit string, depending on which editor wrote the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    #[serde(rename = "type")]
    pub kind: DiscountKind,
    /// Minimum stay length the discount requires. Absent for promo discounts.
    #[serde(
        rename = "nights",
        default,
        deserialize_with = "nights_threshold"
    )]
    pub min_nights: Option<u32>,
    pub value: f64,
    pub value_type: ValueType,
}

fn nights_threshold<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => s.trim().parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl Discount {
    /// Apply the reduction to a computed total.
    pub fn apply(&self, total: f64) -> f64 {
        match self.value_type {
            ValueType::Percentage => total - total * self.value / 100.0,
            ValueType::Fixed => total - self.value,
        }
    }
}

/// Pick the multi-night discount with the highest qualifying threshold.
///
/// A 5-night stay against thresholds {2, 4, 7} selects the 4-night discount.
/// At most one discount applies; there is no stacking.
pub fn best_multi_night(discounts: &[Discount], nights: u32) -> Option<&Discount> {
    discounts
        .iter()
        .filter(|d| d.kind == DiscountKind::MultiNight)
        .filter_map(|d| d.min_nights.map(|n| (n, d)))
        .filter(|(threshold, _)| *threshold <= nights)
        .max_by_key(|(threshold, _)| *threshold)
        .map(|(_, d)| d)
}
