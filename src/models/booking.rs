use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

pub const DEFAULT_TOUR_SLUG: &str = "boat-tour";
pub const DEFAULT_ADULTS: u32 = 2;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum PaymentMethod {
    PayNow,
    #[default]
    PayInPerson,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GuestCategory {
    Adults,
    Children,
    Seniors,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CountDirection {
    Increment,
    Decrement,
}

/// The user's in-progress booking configuration. One adult minimum is a
/// business rule enforced at the mutation boundary, not just here.
#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct BookingSelection {
    #[validate(length(min = 1, message = "Please select a tour."))]
    pub tour: String,
    pub date: NaiveDate,
    #[validate(range(min = 1, message = "At least 1 adult is required."))]
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    #[serde(default)]
    pub seniors: u32,
    #[serde(default)]
    pub add_transfer: bool,
    #[serde(default)]
    pub add_kayak: bool,
    #[serde(default)]
    pub add_ferry: bool,
    #[serde(default)]
    pub add_extra_day: bool,
    #[serde(default)]
    #[validate(length(min = 2, message = "Name must be at least 2 characters."))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Invalid email address."))]
    pub email: String,
    #[serde(default)]
    #[validate(length(
        min = 8,
        message = "Please enter a valid phone number (including country code)."
    ))]
    pub phone: String,
    #[serde(default)]
    pub special_requests: String,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

impl Default for BookingSelection {
    fn default() -> Self {
        Self {
            tour: DEFAULT_TOUR_SLUG.to_string(),
            date: Utc::now().date_naive(),
            adults: DEFAULT_ADULTS,
            children: 0,
            seniors: 0,
            add_transfer: false,
            add_kayak: false,
            add_ferry: false,
            add_extra_day: false,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            special_requests: String::new(),
            payment_method: PaymentMethod::default(),
        }
    }
}

impl BookingSelection {
    pub fn total_guests(&self) -> u32 {
        self.adults + self.children + self.seniors
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Editing,
    Submitting,
    Success,
}

#[derive(Debug, Serialize, Clone)]
pub struct BookingSession {
    pub id: Uuid,
    pub selection: BookingSelection,
    pub status: BookingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookingSession {
    pub fn new(selection: BookingSelection) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            selection,
            status: BookingStatus::Editing,
            reference: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Query parameters accepted at booking-page entry, used only to seed the
/// initial selection. `guests` accepts the widget's "9+" sentinel.
#[derive(Debug, Deserialize, Default)]
pub struct BookingSeed {
    pub tour: Option<String>,
    pub date: Option<NaiveDate>,
    pub guests: Option<String>,
}

impl BookingSeed {
    pub fn into_selection(self) -> BookingSelection {
        let mut selection = BookingSelection::default();
        if let Some(tour) = self.tour {
            if !tour.is_empty() {
                selection.tour = tour;
            }
        }
        if let Some(date) = self.date {
            selection.date = date;
        }
        if let Some(adults) = self.guests.as_deref().and_then(parse_guest_count) {
            selection.adults = adults;
        }
        selection
    }
}

/// "9+" means 9; anything below 1 is not a usable seed.
pub fn parse_guest_count(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw == "9+" {
        return Some(9);
    }
    raw.parse::<u32>().ok().filter(|count| *count >= 1)
}

/// Partial update applied to an editing session. Guest counts are excluded:
/// they only change through the counter adjustment, which enforces the
/// one-adult minimum.
#[derive(Debug, Deserialize, Default)]
pub struct BookingUpdate {
    pub tour: Option<String>,
    pub date: Option<NaiveDate>,
    pub add_transfer: Option<bool>,
    pub add_kayak: Option<bool>,
    pub add_ferry: Option<bool>,
    pub add_extra_day: Option<bool>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub special_requests: Option<String>,
    pub payment_method: Option<PaymentMethod>,
}

#[derive(Debug, Deserialize)]
pub struct GuestAdjustment {
    pub category: GuestCategory,
    pub direction: CountDirection,
}
