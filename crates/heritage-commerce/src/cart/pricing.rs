//! Cart aggregates.

use crate::money::Money;
use heritage_i18n::{lookup, Language};
use serde::{Deserialize, Serialize};

/// Derived cart aggregates, recomputed from the lines on every read.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CartTotals {
    /// Sum of line quantities (the header badge count).
    pub total_items: i64,
    /// Sum of price times quantity.
    pub total_price: Money,
}

impl CartTotals {
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    /// Total price with the localized currency label, e.g. "199.500 د.ك".
    pub fn display_total(&self, language: Language) -> String {
        self.total_price.display_with(lookup("currency", language))
    }
}
