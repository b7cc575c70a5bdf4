//! Canonical bill categories.
//!
//! The category set is closed: each bill carries one of these codes and the
//! presentation layer maps codes to localized labels. Legacy data stored
//! locale-specific strings directly, so [`Category::from_raw`] accepts both the
//! English and Polish literals when importing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorises bills for reporting and presentation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Subscriptions,
    Utilities,
    Insurance,
    RentMortgage,
    Other,
}

impl Category {
    /// All canonical categories, in presentation order.
    pub const ALL: [Category; 5] = [
        Category::Subscriptions,
        Category::Utilities,
        Category::Insurance,
        Category::RentMortgage,
        Category::Other,
    ];

    /// Normalizes a raw stored token into a canonical category.
    ///
    /// Unrecognized tokens fall back to [`Category::Other`] rather than failing;
    /// imported data may contain arbitrary free text.
    pub fn from_raw(raw: &str) -> Category {
        match raw.trim() {
            "Subscriptions" | "Subskrypcje" => Category::Subscriptions,
            "Utilities" | "Rachunki (Prąd/Gaz)" => Category::Utilities,
            "Insurance" | "Ubezpieczenia" => Category::Insurance,
            "Rent/Mortgage" | "Czynsz/Kredyt" => Category::RentMortgage,
            _ => Category::Other,
        }
    }

    /// Canonical token used in serialized data and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Subscriptions => "Subscriptions",
            Category::Utilities => "Utilities",
            Category::Insurance => "Insurance",
            Category::RentMortgage => "Rent/Mortgage",
            Category::Other => "Other",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Other
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
