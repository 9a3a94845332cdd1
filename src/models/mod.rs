//! Domain types persisted by the catalog and shown by the front desk.

/// Site image slots, defaults, overrides and uploads
pub mod image;
/// Contact inquiries
pub mod inquiry;
/// Catalog products and categories
pub mod product;
/// Admin session
pub mod session;

pub use image::{ImageMap, ImageSlot, ImageUpload};
pub use inquiry::{Inquiry, NewInquiry};
pub use product::{NewProduct, Product, ProductCategory};
pub use session::Session;

use crate::errors::{Error, Result};

/// Fails with [`Error::MissingField`] when `value` is blank.
pub(crate) fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::MissingField { field });
    }
    Ok(())
}
