//! Browse categories.

use crate::ids::CategoryId;
use heritage_i18n::Language;
use serde::{Deserialize, Serialize};

/// A browse category shown in the listing filter and on the home page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Category identifier, also used as the `?category=` URL value.
    pub id: CategoryId,
    /// English name.
    pub name: String,
    /// Arabic name.
    pub name_ar: String,
}

impl Category {
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        name_ar: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            name_ar: name_ar.into(),
        }
    }

    /// Name in the given language.
    pub fn display_name(&self, language: Language) -> &str {
        language.pick(&self.name, &self.name_ar)
    }

    /// Translation key for the home-page category tile.
    pub fn translation_key(&self) -> String {
        format!("category.{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names() {
        let cat = Category::new("stone", "Stone Art", "فن الحجر");
        assert_eq!(cat.display_name(Language::En), "Stone Art");
        assert_eq!(cat.display_name(Language::Ar), "فن الحجر");
        assert_eq!(cat.translation_key(), "category.stone");
    }
}
