/// Fixed EUR -> Albanian Lek exchange rate used for display only.
pub const EUR_TO_LEK: f32 = 106.0;

pub struct CurrencyService;

impl CurrencyService {
    /// Lek amount shown to Albanian-locale visitors. The EUR total itself is
    /// never converted in place; this is applied at render time only.
    pub fn eur_to_lek(total_eur: f32) -> i64 {
        (total_eur * EUR_TO_LEK).round() as i64
    }

    /// Locale display string for a numeric EUR total.
    pub fn format_total(total_eur: f32, locale: &str) -> String {
        if locale == "sq" {
            format!("{} Lek", group_thousands(Self::eur_to_lek(total_eur)))
        } else {
            format!("€{}", total_eur.round() as i64)
        }
    }

    /// Label rendered instead of an amount for sentinel-priced tours.
    pub fn on_request_label(locale: &str) -> &'static str {
        if locale == "sq" {
            "Kontakto"
        } else {
            "Call"
        }
    }
}

/// Dotted thousands grouping as used by the sq-AL number format.
fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
