use serde::{Deserialize, Serialize};

/// Tours whose price already bundles the Shkoder transfer.
pub const TRANSFER_INCLUDED_SLUGS: [&str; 2] = ["boat-tour", "local-experience"];

/// Price markers that mean "contact us for pricing" instead of a number.
pub const ON_REQUEST_PRICES: [&str; 2] = ["Call", "Contact"];

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Tour {
    pub slug: String,
    pub price: String,
    pub currency: String,
    pub category: String,
}

impl Tour {
    /// A tour with a sentinel price has no numeric per-person rate.
    pub fn is_price_on_request(&self) -> bool {
        ON_REQUEST_PRICES.contains(&self.price.as_str())
    }

    /// Per-person base price. `None` for sentinel or malformed prices.
    pub fn numeric_price(&self) -> Option<f32> {
        if self.is_price_on_request() {
            return None;
        }
        self.price.trim().parse::<f32>().ok()
    }

    pub fn transfer_included(&self) -> bool {
        TRANSFER_INCLUDED_SLUGS.contains(&self.slug.as_str())
    }
}
