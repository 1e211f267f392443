use std::collections::HashMap;
use std::env;

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::Serialize;
use tokio::time::Duration;
use validator::Validate;

use crate::models::booking::{
    BookingSelection, BookingUpdate, CountDirection, GuestCategory,
};
use crate::models::tour::Tour;

/// No payment gateway exists; payNow bookings settle by manual PayPal
/// transfer to this address.
pub const PAYPAL_RECIPIENT: &str = "mariomolla@outlook.com";

const DEFAULT_SUBMISSION_DELAY_MS: u64 = 2000;
const EXTRA_DAY_TOUR_SLUG: &str = "local-experience";
const REFERENCE_PREFIX: &str = "KT-";

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AddOn {
    ExtraDay,
    Transfer,
    Kayak,
    Ferry,
}

pub struct BookingService;

impl BookingService {
    /// Add-ons a guest can actually toggle for a tour. Transfer is absent
    /// (not merely forced on) for tours that bundle it; the extra day only
    /// exists on the Local Experience.
    pub fn selectable_add_ons(tour: &Tour) -> Vec<AddOn> {
        let mut add_ons = Vec::with_capacity(4);
        if tour.slug == EXTRA_DAY_TOUR_SLUG {
            add_ons.push(AddOn::ExtraDay);
        }
        if !tour.transfer_included() {
            add_ons.push(AddOn::Transfer);
        }
        add_ons.push(AddOn::Kayak);
        add_ons.push(AddOn::Ferry);
        add_ons
    }

    /// Counter transition for a guest category. Increments are unbounded;
    /// decrements floor at 0, except adults where a decrement below 1 is
    /// rejected outright (a booking always has at least one adult).
    pub fn adjust_guest_count(
        selection: &mut BookingSelection,
        category: GuestCategory,
        direction: CountDirection,
    ) -> u32 {
        let count = match category {
            GuestCategory::Adults => &mut selection.adults,
            GuestCategory::Children => &mut selection.children,
            GuestCategory::Seniors => &mut selection.seniors,
        };
        match direction {
            CountDirection::Increment => *count += 1,
            CountDirection::Decrement => {
                let floor = if category == GuestCategory::Adults { 1 } else { 0 };
                if *count > floor {
                    *count -= 1;
                }
            }
        }
        *count
    }

    /// Apply a partial update to an editing selection. Absent fields are
    /// left untouched.
    pub fn apply_update(selection: &mut BookingSelection, update: BookingUpdate) {
        if let Some(tour) = update.tour {
            selection.tour = tour;
        }
        if let Some(date) = update.date {
            selection.date = date;
        }
        if let Some(add_transfer) = update.add_transfer {
            selection.add_transfer = add_transfer;
        }
        if let Some(add_kayak) = update.add_kayak {
            selection.add_kayak = add_kayak;
        }
        if let Some(add_ferry) = update.add_ferry {
            selection.add_ferry = add_ferry;
        }
        if let Some(add_extra_day) = update.add_extra_day {
            selection.add_extra_day = add_extra_day;
        }
        if let Some(name) = update.name {
            selection.name = name;
        }
        if let Some(email) = update.email {
            selection.email = email;
        }
        if let Some(phone) = update.phone {
            selection.phone = phone;
        }
        if let Some(special_requests) = update.special_requests {
            selection.special_requests = special_requests;
        }
        if let Some(payment_method) = update.payment_method {
            selection.payment_method = payment_method;
        }
    }

    /// Run the whole validation schema and collect one message per violated
    /// field. `None` means the selection may enter the submission workflow.
    pub fn validation_errors(selection: &BookingSelection) -> Option<HashMap<String, String>> {
        let errors = match selection.validate() {
            Ok(()) => return None,
            Err(errors) => errors,
        };

        let mut messages = HashMap::new();
        for (field, violations) in errors.field_errors() {
            let message = violations
                .iter()
                .find_map(|violation| violation.message.as_ref())
                .map(|message| message.to_string())
                .unwrap_or_else(|| format!("Invalid value for {field}."));
            messages.insert(field.to_string(), message);
        }
        Some(messages)
    }

    /// Simulated processing time for a submission. Overridable for tests.
    pub fn submission_delay() -> Duration {
        let millis = env::var("SUBMISSION_DELAY_MS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(DEFAULT_SUBMISSION_DELAY_MS);
        Duration::from_millis(millis)
    }

    /// Short human-readable booking reference for the confirmation.
    pub fn generate_reference() -> String {
        let code: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(6)
            .map(char::from)
            .collect();
        format!("{}{}", REFERENCE_PREFIX, code.to_uppercase())
    }
}
