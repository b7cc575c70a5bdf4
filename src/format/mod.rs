//! Locale-aware rendering of amounts, category labels, and reminder text.
//!
//! The domain stores canonical category codes and plain `f64` amounts;
//! translation and currency symbols are applied here, at the presentation
//! boundary, instead of being baked into stored data.

use crate::domain::{Bill, Category};

/// Presentation locales the application ships labels for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Pl,
}

impl Locale {
    /// Resolves a BCP-47-ish language tag, defaulting to English.
    pub fn from_tag(tag: &str) -> Locale {
        match tag.split(['-', '_']).next().unwrap_or("") {
            "pl" => Locale::Pl,
            _ => Locale::En,
        }
    }
}

/// Formats a monetary amount with the locale's currency convention.
pub fn format_amount(amount: f64, locale: Locale) -> String {
    match locale {
        Locale::En => format!("${amount:.2}"),
        Locale::Pl => format!("{amount:.2} zł"),
    }
}

/// Localized display label for a category code.
pub fn category_label(category: Category, locale: Locale) -> &'static str {
    match (category, locale) {
        (Category::Subscriptions, Locale::En) => "Subscriptions",
        (Category::Subscriptions, Locale::Pl) => "Subskrypcje",
        (Category::Utilities, Locale::En) => "Utilities",
        (Category::Utilities, Locale::Pl) => "Rachunki (Prąd/Gaz)",
        (Category::Insurance, Locale::En) => "Insurance",
        (Category::Insurance, Locale::Pl) => "Ubezpieczenia",
        (Category::RentMortgage, Locale::En) => "Rent/Mortgage",
        (Category::RentMortgage, Locale::Pl) => "Czynsz/Kredyt",
        (Category::Other, Locale::En) => "Other",
        (Category::Other, Locale::Pl) => "Inne",
    }
}

/// Builds the reminder title and body for a bill in the notice window.
pub fn reminder_text(bill: &Bill, locale: Locale) -> (String, String) {
    let amount = format_amount(bill.amount, locale);
    match locale {
        Locale::En => (
            format!("Bill due soon: {}", bill.name),
            format!("Amount due: {amount}"),
        ),
        Locale::Pl => (
            format!("Zbliża się termin: {}", bill.name),
            format!("Do zapłaty: {amount}"),
        ),
    }
}
