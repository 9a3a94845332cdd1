//! Catalog products.
//!
//! Products are stored as one JSON array. The admin form builds a
//! [`NewProduct`], the backend assigns the id.

use super::require;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Image used by the admin form when no picture was chosen.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/600x400?text=No+Image";

/// Product line a catalog entry belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    /// Printed paper targets
    Paper,
    /// Steel targets
    Metal,
    /// Electronics and range software
    Tech,
    /// Range equipment (retrievers, traps)
    Range,
    /// Custom projects
    Custom,
}

impl ProductCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 5] = [Self::Paper, Self::Metal, Self::Tech, Self::Range, Self::Custom];

    /// Stored name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paper => "paper",
            Self::Metal => "metal",
            Self::Tech => "tech",
            Self::Range => "range",
            Self::Custom => "custom",
        }
    }

    /// Human label used in listings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Paper => "Paper Targets",
            Self::Metal => "Metal Targets",
            Self::Tech => "Electronics/Tech",
            Self::Range => "Range Equipment",
            Self::Custom => "Custom Solutions",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted) || c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownCategory {
                name: s.to_string(),
            })
    }
}

/// A catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: String,
    /// Product name
    pub title: String,
    /// Marketing description
    pub description: String,
    /// Product line
    pub category: ProductCategory,
    /// Ordered feature bullet points
    pub features: Vec<String>,
    /// Image URL or data URI
    pub image: String,
}

impl Product {
    /// Builds a product from form data and an id.
    #[must_use]
    pub fn from_new(id: String, new: NewProduct) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            category: new.category,
            features: new.features,
            image: new.image,
        }
    }

    /// Form data for editing this product.
    #[must_use]
    pub fn to_new(&self) -> NewProduct {
        NewProduct {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category,
            features: self.features.clone(),
            image: self.image.clone(),
        }
    }
}

/// Product fields as entered in the admin form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    /// Product name
    pub title: String,
    /// Marketing description
    pub description: String,
    /// Product line
    pub category: ProductCategory,
    /// Ordered feature bullet points
    pub features: Vec<String>,
    /// Image URL or data URI
    pub image: String,
}

impl Default for NewProduct {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: ProductCategory::Paper,
            features: Vec::new(),
            image: PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

impl NewProduct {
    /// Checks the required fields.
    ///
    /// # Errors
    /// Returns [`Error::MissingField`] for a blank title or description.
    pub fn validate(&self) -> Result<()> {
        require("title", &self.title)?;
        require("description", &self.description)
    }

    /// Drops blank feature lines and trims the rest.
    #[must_use]
    pub fn cleaned(mut self) -> Self {
        self.features = self
            .features
            .into_iter()
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect();
        self.title = self.title.trim().to_string();
        if self.image.trim().is_empty() {
            self.image = PLACEHOLDER_IMAGE.to_string();
        }
        self
    }
}

/// Splits a feature list typed as one line (`;` separated) or several lines.
#[must_use]
pub fn parse_features(raw: &str) -> Vec<String> {
    raw.split(['\n', ';'])
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&ProductCategory::Metal).unwrap();
        assert_eq!(json, "\"metal\"");
        let parsed: ProductCategory = serde_json::from_str("\"range\"").unwrap();
        assert_eq!(parsed, ProductCategory::Range);
    }

    #[test]
    fn test_category_from_str_accepts_names_and_labels() {
        assert_eq!("tech".parse::<ProductCategory>().unwrap(), ProductCategory::Tech);
        assert_eq!("PAPER".parse::<ProductCategory>().unwrap(), ProductCategory::Paper);
        assert_eq!(
            "Custom Solutions".parse::<ProductCategory>().unwrap(),
            ProductCategory::Custom
        );
        assert!(matches!(
            "wood".parse::<ProductCategory>(),
            Err(Error::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_unknown_category_in_stored_json_is_rejected() {
        let raw = r#"{"id":"x","title":"t","description":"d","category":"plastic","features":[],"image":""}"#;
        assert!(serde_json::from_str::<Product>(raw).is_err());
    }

    #[test]
    fn test_validate_requires_title_and_description() {
        let mut form = NewProduct {
            title: "  ".to_string(),
            description: "Steel gong".to_string(),
            ..NewProduct::default()
        };
        assert!(matches!(
            form.validate(),
            Err(Error::MissingField { field: "title" })
        ));

        form.title = "Gong".to_string();
        form.description = String::new();
        assert!(matches!(
            form.validate(),
            Err(Error::MissingField { field: "description" })
        ));

        form.description = "Steel gong".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_cleaned_drops_blank_features() {
        let form = NewProduct {
            title: " Gong ".to_string(),
            description: "d".to_string(),
            features: vec![" AR500 ".to_string(), String::new(), "   ".to_string()],
            image: String::new(),
            ..NewProduct::default()
        }
        .cleaned();

        assert_eq!(form.title, "Gong");
        assert_eq!(form.features, vec!["AR500".to_string()]);
        assert_eq!(form.image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_parse_features() {
        assert_eq!(
            parse_features("Laser Cut; Powder Coated\nMounting Holes;;"),
            vec!["Laser Cut", "Powder Coated", "Mounting Holes"]
        );
        assert!(parse_features("  ").is_empty());
    }
}
