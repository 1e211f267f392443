use serde::Serialize;

/// Per-component costs behind a quoted total. All amounts are EUR.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PriceBreakdown {
    pub base_price: f32,
    pub adults_cost: f32,
    pub children_cost: f32,
    pub seniors_cost: f32,
    pub transfer_cost: f32,
    pub ferry_cost: f32,
    pub kayak_cost: f32,
    pub total_guests: u32,
    pub total_eur: f32,
}

/// Derived price for a selection. Never stored; recomputed after every
/// mutation. `total_eur` is absent for sentinel-priced or unknown tours,
/// in which case `display_total` carries the localized contact label.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Clone)]
pub struct PriceQuote {
    pub price_on_request: bool,
    pub total_eur: Option<f32>,
    pub display_total: String,
    pub breakdown: Option<PriceBreakdown>,
}
