//! Site images.
//!
//! Every page picture lives in a named [`ImageSlot`]. A slot shows its
//! compiled-in default until an admin uploads a replacement; only the
//! replacements are persisted.

use crate::errors::{Error, Result};
use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};

/// A named picture position on the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ImageSlot {
    /// Home page hero background
    #[serde(rename = "homeHero")]
    HomeHero,
    /// Home page equipment showcase
    #[serde(rename = "homeShowcase")]
    HomeShowcase,
    /// First testimonial avatar
    #[serde(rename = "testimonial1")]
    Testimonial1,
    /// Second testimonial avatar
    #[serde(rename = "testimonial2")]
    Testimonial2,
    /// Third testimonial avatar
    #[serde(rename = "testimonial3")]
    Testimonial3,
    /// About page workshop image
    #[serde(rename = "about1")]
    About1,
    /// About page engineering image
    #[serde(rename = "about2")]
    About2,
    /// Product line: paper targets
    #[serde(rename = "product_p1")]
    ProductP1,
    /// Product line: steel targets
    #[serde(rename = "product_p2")]
    ProductP2,
    /// Product line: smart scoring
    #[serde(rename = "product_p3")]
    ProductP3,
    /// Product line: auto-reset
    #[serde(rename = "product_p4")]
    ProductP4,
    /// Product line: track systems
    #[serde(rename = "product_p5")]
    ProductP5,
    /// Product line: bullet traps
    #[serde(rename = "product_p6")]
    ProductP6,
    /// Contact page map background
    #[serde(rename = "contactMap")]
    ContactMap,
}

impl ImageSlot {
    /// Every slot, in admin display order.
    pub const ALL: [Self; 14] = [
        Self::HomeHero,
        Self::HomeShowcase,
        Self::Testimonial1,
        Self::Testimonial2,
        Self::Testimonial3,
        Self::About1,
        Self::About2,
        Self::ProductP1,
        Self::ProductP2,
        Self::ProductP3,
        Self::ProductP4,
        Self::ProductP5,
        Self::ProductP6,
        Self::ContactMap,
    ];

    /// Key under which the slot is stored.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::HomeHero => "homeHero",
            Self::HomeShowcase => "homeShowcase",
            Self::Testimonial1 => "testimonial1",
            Self::Testimonial2 => "testimonial2",
            Self::Testimonial3 => "testimonial3",
            Self::About1 => "about1",
            Self::About2 => "about2",
            Self::ProductP1 => "product_p1",
            Self::ProductP2 => "product_p2",
            Self::ProductP3 => "product_p3",
            Self::ProductP4 => "product_p4",
            Self::ProductP5 => "product_p5",
            Self::ProductP6 => "product_p6",
            Self::ContactMap => "contactMap",
        }
    }

    /// Admin-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HomeHero => "Home: Hero Background",
            Self::HomeShowcase => "Home: Equipment Showcase",
            Self::Testimonial1 => "Testimonial: Police Avatar",
            Self::Testimonial2 => "Testimonial: Owner Avatar",
            Self::Testimonial3 => "Testimonial: Shooter Avatar",
            Self::About1 => "About: Workshop Image",
            Self::About2 => "About: Engineering Image",
            Self::ProductP1 => "Product: Paper Targets",
            Self::ProductP2 => "Product: Steel Targets",
            Self::ProductP3 => "Product: Smart Scoring",
            Self::ProductP4 => "Product: Auto-Reset",
            Self::ProductP5 => "Product: Track Systems",
            Self::ProductP6 => "Product: Bullet Traps",
            Self::ContactMap => "Contact: Map Background",
        }
    }

    /// Page section the slot belongs to.
    #[must_use]
    pub const fn group(self) -> &'static str {
        match self {
            Self::HomeHero | Self::HomeShowcase => "Home Page",
            Self::Testimonial1 | Self::Testimonial2 | Self::Testimonial3 => "Testimonials",
            Self::About1 | Self::About2 => "About Page",
            Self::ProductP1
            | Self::ProductP2
            | Self::ProductP3
            | Self::ProductP4
            | Self::ProductP5
            | Self::ProductP6 => "Products",
            Self::ContactMap => "Contact",
        }
    }

    /// Compiled-in picture shown while no override is stored.
    #[must_use]
    pub const fn default_url(self) -> &'static str {
        match self {
            Self::HomeHero => {
                "https://images.unsplash.com/photo-1572511443722-1d624b4f5351?auto=format&fit=crop&q=80&w=1920"
            }
            Self::HomeShowcase | Self::ProductP1 => {
                "https://images.unsplash.com/photo-1595590424283-b8f17842773f?auto=format&fit=crop&q=80&w=800"
            }
            Self::Testimonial1 => "https://randomuser.me/api/portraits/men/32.jpg",
            Self::Testimonial2 => "https://randomuser.me/api/portraits/women/44.jpg",
            Self::Testimonial3 => "https://randomuser.me/api/portraits/men/86.jpg",
            Self::About1 => {
                "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?auto=format&fit=crop&q=80&w=600"
            }
            Self::About2 => {
                "https://images.unsplash.com/photo-1504917595217-d4dc5ebe6122?auto=format&fit=crop&q=80&w=600"
            }
            Self::ProductP2 => {
                "https://images.unsplash.com/photo-1599313689439-d36d40c749b5?auto=format&fit=crop&q=80&w=800"
            }
            Self::ProductP3 => {
                "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?auto=format&fit=crop&q=80&w=800"
            }
            Self::ProductP4 => {
                "https://images.unsplash.com/photo-1533575677944-77e84ce43a85?auto=format&fit=crop&q=80&w=800"
            }
            Self::ProductP5 => {
                "https://images.unsplash.com/photo-1583307222340-988362d8544a?auto=format&fit=crop&q=80&w=800"
            }
            Self::ProductP6 => {
                "https://images.unsplash.com/photo-1516246342263-d30907474438?auto=format&fit=crop&q=80&w=800"
            }
            Self::ContactMap => {
                "https://images.unsplash.com/photo-1524661135-423995f22d0b?auto=format&fit=crop&q=80&w=1200"
            }
        }
    }
}

impl fmt::Display for ImageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ImageSlot {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|slot| slot.key() == wanted)
            .ok_or_else(|| Error::UnknownImageSlot {
                name: s.to_string(),
            })
    }
}

/// Resolved picture for every slot: the stored override if present,
/// otherwise the default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImageMap(BTreeMap<ImageSlot, String>);

impl ImageMap {
    /// Every slot at its default.
    #[must_use]
    pub fn defaults() -> Self {
        Self(
            ImageSlot::ALL
                .into_iter()
                .map(|slot| (slot, slot.default_url().to_string()))
                .collect(),
        )
    }

    /// Defaults with `overrides` laid over them. Keys that are not slots are ignored.
    #[must_use]
    pub fn merged(overrides: &BTreeMap<String, String>) -> Self {
        let mut map = Self::defaults();
        for (key, value) in overrides {
            if let Ok(slot) = key.parse::<ImageSlot>() {
                map.0.insert(slot, value.clone());
            }
        }
        map
    }

    /// Picture for `slot`.
    #[must_use]
    pub fn get(&self, slot: ImageSlot) -> &str {
        self.0
            .get(&slot)
            .map_or_else(|| slot.default_url(), String::as_str)
    }

    /// Whether `slot` currently shows something other than its default.
    #[must_use]
    pub fn is_overridden(&self, slot: ImageSlot) -> bool {
        self.get(slot) != slot.default_url()
    }

    /// Slots and pictures in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ImageSlot, &str)> {
        self.0.iter().map(|(slot, url)| (*slot, url.as_str()))
    }
}

impl Default for ImageMap {
    fn default() -> Self {
        Self::defaults()
    }
}

/// An uploaded picture, read fully into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageUpload {
    /// Original file name, used to guess the MIME type
    pub file_name: String,
    /// MIME type declared by the uploader
    pub content_type: Option<String>,
    /// File contents
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Wraps bytes that were already read.
    #[must_use]
    pub const fn new(file_name: String, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// MIME type: the declared one, else guessed from the file name.
    #[must_use]
    pub fn mime_type(&self) -> String {
        self.content_type
            .as_deref()
            .map(str::trim)
            .filter(|ct| !ct.is_empty())
            .map_or_else(
                || {
                    mime_guess::from_path(&self.file_name)
                        .first_or_octet_stream()
                        .essence_str()
                        .to_string()
                },
                ToString::to_string,
            )
    }

    /// Self-contained `data:` URI embedding the file.
    ///
    /// # Errors
    /// Returns [`Error::ImageRead`] for an empty file.
    pub fn to_data_uri(&self) -> Result<String> {
        if self.bytes.is_empty() {
            return Err(Error::ImageRead {
                message: format!("'{}' is empty", self.file_name),
            });
        }
        Ok(format!(
            "data:{};base64,{}",
            self.mime_type(),
            STANDARD.encode(&self.bytes)
        ))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_slot_keys_round_trip() {
        for slot in ImageSlot::ALL {
            assert_eq!(slot.key().parse::<ImageSlot>().unwrap(), slot);
            assert_eq!(serde_json::to_string(&slot).unwrap(), format!("\"{}\"", slot.key()));
        }
        assert!(matches!(
            "footerLogo".parse::<ImageSlot>(),
            Err(Error::UnknownImageSlot { .. })
        ));
    }

    #[test]
    fn test_defaults_cover_every_slot() {
        let map = ImageMap::defaults();
        assert_eq!(map.iter().count(), 14);
        for slot in ImageSlot::ALL {
            assert_eq!(map.get(slot), slot.default_url());
            assert!(!map.is_overridden(slot));
        }
    }

    #[test]
    fn test_merged_override_wins_and_unknown_keys_are_ignored() {
        let mut overrides = BTreeMap::new();
        overrides.insert("homeHero".to_string(), "data:image/png;base64,AAAA".to_string());
        overrides.insert("retiredSlot".to_string(), "https://example.com/x.png".to_string());

        let map = ImageMap::merged(&overrides);
        assert_eq!(map.get(ImageSlot::HomeHero), "data:image/png;base64,AAAA");
        assert!(map.is_overridden(ImageSlot::HomeHero));
        assert_eq!(map.get(ImageSlot::ContactMap), ImageSlot::ContactMap.default_url());
        assert_eq!(map.iter().count(), 14);
    }

    #[test]
    fn test_data_uri_uses_declared_type() {
        let upload = ImageUpload::new(
            "hero.bin".to_string(),
            Some("image/webp".to_string()),
            vec![1, 2, 3],
        );
        assert_eq!(upload.to_data_uri().unwrap(), "data:image/webp;base64,AQID");
    }

    #[test]
    fn test_data_uri_guesses_type_from_name() {
        let upload = ImageUpload::new("hero.png".to_string(), None, b"png".to_vec());
        assert_eq!(upload.to_data_uri().unwrap(), "data:image/png;base64,cG5n");

        let upload = ImageUpload::new("hero".to_string(), None, b"png".to_vec());
        assert!(upload.to_data_uri().unwrap().starts_with("data:application/octet-stream;base64,"));
    }

    #[test]
    fn test_empty_upload_is_a_read_failure() {
        let upload = ImageUpload::new("empty.jpg".to_string(), None, Vec::new());
        assert!(matches!(upload.to_data_uri(), Err(Error::ImageRead { .. })));
    }
}
