use crate::models::booking::BookingSelection;
use crate::models::quote::{PriceBreakdown, PriceQuote};
use crate::models::tour::Tour;
use crate::services::currency_service::CurrencyService;

/// Flat discount multiplier for children and seniors.
pub const GUEST_DISCOUNT_MULT: f32 = 0.7;
/// Fixed surcharge for the Local Experience extra day (base 100 -> 130).
pub const EXTRA_DAY_SURCHARGE: f32 = 30.0;
pub const TRANSFER_PRICE_PER_GUEST: f32 = 30.0;
pub const FERRY_PRICE_PER_GUEST: f32 = 10.0;
pub const KAYAK_PRICE_PER_GUEST: f32 = 20.0;

const EXTRA_DAY_TOUR_SLUG: &str = "local-experience";

pub struct PricingService;

impl PricingService {
    /// Per-person base price the guest categories are priced against.
    /// Malformed catalog prices degrade to 0 so a total can never be NaN.
    pub fn effective_base_price(selection: &BookingSelection, tour: &Tour) -> f32 {
        let mut base = tour.numeric_price().unwrap_or(0.0);
        if selection.tour == EXTRA_DAY_TOUR_SLUG && selection.add_extra_day {
            base += EXTRA_DAY_SURCHARGE;
        }
        base
    }

    /// Full cost breakdown for a selection. `None` means the tour has no
    /// numeric price (sentinel "Call"/"Contact") and the caller must render
    /// a contact affordance instead of an amount. The sentinel check comes
    /// before any arithmetic.
    pub fn compute_breakdown(selection: &BookingSelection, tour: &Tour) -> Option<PriceBreakdown> {
        if tour.is_price_on_request() {
            return None;
        }

        let base_price = Self::effective_base_price(selection, tour);

        let adults_cost = selection.adults as f32 * base_price;
        let children_cost = selection.children as f32 * base_price * GUEST_DISCOUNT_MULT;
        let seniors_cost = selection.seniors as f32 * base_price * GUEST_DISCOUNT_MULT;

        let total_guests = selection.total_guests();

        // Transfers are free/included for boat-tour and local-experience.
        let transfer_cost = if selection.add_transfer && !tour.transfer_included() {
            TRANSFER_PRICE_PER_GUEST * total_guests as f32
        } else {
            0.0
        };
        let ferry_cost = if selection.add_ferry {
            FERRY_PRICE_PER_GUEST * total_guests as f32
        } else {
            0.0
        };
        let kayak_cost = if selection.add_kayak {
            KAYAK_PRICE_PER_GUEST * total_guests as f32
        } else {
            0.0
        };

        let total_eur =
            adults_cost + children_cost + seniors_cost + transfer_cost + ferry_cost + kayak_cost;

        Some(PriceBreakdown {
            base_price,
            adults_cost,
            children_cost,
            seniors_cost,
            transfer_cost,
            ferry_cost,
            kayak_cost,
            total_guests,
            total_eur,
        })
    }

    /// Total in EUR, regardless of display locale.
    pub fn compute_total(selection: &BookingSelection, tour: &Tour) -> Option<f32> {
        Self::compute_breakdown(selection, tour).map(|breakdown| breakdown.total_eur)
    }

    /// Quote for rendering: EUR total plus the locale's display string.
    /// An unknown tour (lookup miss) renders the same contact state as a
    /// sentinel price instead of failing.
    pub fn quote(selection: &BookingSelection, tour: Option<&Tour>, locale: &str) -> PriceQuote {
        let breakdown = tour.and_then(|tour| Self::compute_breakdown(selection, tour));

        match breakdown {
            Some(breakdown) => PriceQuote {
                price_on_request: false,
                total_eur: Some(breakdown.total_eur),
                display_total: CurrencyService::format_total(breakdown.total_eur, locale),
                breakdown: Some(breakdown),
            },
            None => PriceQuote {
                price_on_request: true,
                total_eur: None,
                display_total: CurrencyService::on_request_label(locale).to_string(),
                breakdown: None,
            },
        }
    }

    /// Flat widget estimate: base price times guest count, no discounts or
    /// add-ons. `None` for sentinel-priced tours.
    pub fn quick_estimate(tour: &Tour, guests: u32) -> Option<f32> {
        let price = tour.numeric_price()?;
        Some(price * guests as f32)
    }
}
