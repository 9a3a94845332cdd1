//! Product and inquiry collections.
//!
//! Every mutator calls the backend, then re-fetches the whole collection and
//! replaces the snapshot. A failed re-fetch is logged and the previous
//! snapshot stays in place.

use crate::{
    core::{Backend, inquiry, product},
    errors::Result,
    models::{Inquiry, NewInquiry, NewProduct, Product, ProductCategory},
    storage::StoragePort,
};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::error;

/// Cached products and inquiries.
#[derive(Debug)]
pub struct ContentState<S> {
    backend: Arc<Backend<S>>,
    products: watch::Sender<Vec<Product>>,
    inquiries: watch::Sender<Vec<Inquiry>>,
}

impl<S: StoragePort> ContentState<S> {
    /// Loads both collections.
    pub async fn init(backend: Arc<Backend<S>>) -> Self {
        let (products, _) = watch::channel(Vec::new());
        let (inquiries, _) = watch::channel(Vec::new());
        let state = Self {
            backend,
            products,
            inquiries,
        };
        state.refresh().await;
        state
    }

    /// Current product snapshot.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.products.borrow().clone()
    }

    /// The product with `product_id` in the current snapshot.
    #[must_use]
    pub fn product_by_id(&self, product_id: &str) -> Option<Product> {
        self.products
            .borrow()
            .iter()
            .find(|p| p.id == product_id)
            .cloned()
    }

    /// Products of `category` in catalog order, or every product for `None`.
    #[must_use]
    pub fn products_in(&self, category: Option<ProductCategory>) -> Vec<Product> {
        self.products
            .borrow()
            .iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .cloned()
            .collect()
    }

    /// Current inquiry snapshot, newest first.
    #[must_use]
    pub fn inquiries(&self) -> Vec<Inquiry> {
        self.inquiries.borrow().clone()
    }

    /// Receiver notified whenever the product snapshot is replaced.
    #[must_use]
    pub fn subscribe_products(&self) -> watch::Receiver<Vec<Product>> {
        self.products.subscribe()
    }

    /// Receiver notified whenever the inquiry snapshot is replaced.
    #[must_use]
    pub fn subscribe_inquiries(&self) -> watch::Receiver<Vec<Inquiry>> {
        self.inquiries.subscribe()
    }

    /// Re-fetches both collections.
    pub async fn refresh(&self) {
        self.fetch_products().await;
        self.fetch_inquiries().await;
    }

    async fn fetch_products(&self) {
        match product::get_all_products(&self.backend).await {
            Ok(products) => {
                self.products.send_replace(products);
            }
            Err(e) => error!("Error fetching products: {e}"),
        }
    }

    async fn fetch_inquiries(&self) {
        match inquiry::get_all_inquiries(&self.backend).await {
            Ok(inquiries) => {
                self.inquiries.send_replace(inquiries);
            }
            Err(e) => error!("Error fetching inquiries: {e}"),
        }
    }

    /// Adds a product and refreshes the catalog.
    pub async fn add_product(&self, new_product: NewProduct) -> Result<Product> {
        let created = product::create_product(&self.backend, new_product).await?;
        self.fetch_products().await;
        Ok(created)
    }

    /// Replaces a product by id and refreshes. Returns whether it existed.
    pub async fn update_product(&self, updated: Product) -> Result<bool> {
        let found = product::update_product(&self.backend, updated).await?;
        self.fetch_products().await;
        Ok(found)
    }

    /// Deletes a product and refreshes. Returns whether it existed.
    pub async fn delete_product(&self, product_id: &str) -> Result<bool> {
        let removed = product::delete_product(&self.backend, product_id).await?;
        self.fetch_products().await;
        Ok(removed)
    }

    /// Records a contact inquiry and refreshes.
    pub async fn add_inquiry(&self, new_inquiry: NewInquiry) -> Result<Inquiry> {
        let created = inquiry::create_inquiry(&self.backend, new_inquiry).await?;
        self.fetch_inquiries().await;
        Ok(created)
    }

    /// Deletes an inquiry and refreshes. Returns whether it existed.
    pub async fn delete_inquiry(&self, inquiry_id: &str) -> Result<bool> {
        let removed = inquiry::delete_inquiry(&self.backend, inquiry_id).await?;
        self.fetch_inquiries().await;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::seed,
        test_utils::{FlakyStore, init_test_tracing, memory_backend, sample_new_inquiry, sample_new_product},
    };

    #[tokio::test]
    async fn test_init_loads_seeded_catalog() {
        let state = ContentState::init(Arc::new(memory_backend())).await;
        assert_eq!(state.products(), seed::default_products());
        assert!(state.inquiries().is_empty());
    }

    #[tokio::test]
    async fn test_mutations_refresh_snapshots() -> Result<()> {
        let state = ContentState::init(Arc::new(memory_backend())).await;
        let mut products_rx = state.subscribe_products();

        let created = state.add_product(sample_new_product("X")).await?;
        assert!(products_rx.has_changed().unwrap_or(false));
        assert_eq!(products_rx.borrow_and_update().len(), 7);
        assert_eq!(state.products().last(), Some(&created));

        let mut edited = created.clone();
        edited.title = "X2".to_string();
        assert!(state.update_product(edited).await?);
        assert_eq!(state.products()[6].title, "X2");

        assert!(state.delete_product(&created.id).await?);
        assert_eq!(state.products(), seed::default_products());
        Ok(())
    }

    #[tokio::test]
    async fn test_snapshot_lookups() -> Result<()> {
        let state = ContentState::init(Arc::new(memory_backend())).await;

        assert_eq!(state.product_by_id("seed-2").map(|p| p.category), Some(ProductCategory::Metal));
        assert!(state.product_by_id("missing").is_none());

        let metal: Vec<_> = state
            .products_in(Some(ProductCategory::Metal))
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(metal, vec!["seed-2", "seed-3"]);
        assert!(state.products_in(Some(ProductCategory::Custom)).is_empty());
        assert_eq!(state.products_in(None), state.products());

        let custom = state
            .add_product(NewProduct {
                category: ProductCategory::Custom,
                ..sample_new_product("Custom Rig")
            })
            .await?;
        assert_eq!(state.products_in(Some(ProductCategory::Custom)), vec![custom.clone()]);
        assert_eq!(state.product_by_id(&custom.id), Some(custom));
        Ok(())
    }

    #[tokio::test]
    async fn test_inquiry_mutations_refresh_snapshot() -> Result<()> {
        let state = ContentState::init(Arc::new(memory_backend())).await;
        let mut inquiries_rx = state.subscribe_inquiries();

        let a = state.add_inquiry(sample_new_inquiry("A")).await?;
        let b = state.add_inquiry(sample_new_inquiry("B")).await?;
        assert_eq!(*inquiries_rx.borrow_and_update(), vec![b.clone(), a.clone()]);
        assert_eq!(state.inquiries(), vec![b.clone(), a.clone()]);

        assert!(state.delete_inquiry(&a.id).await?);
        assert_eq!(state.inquiries(), vec![b]);
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_snapshot() {
        init_test_tracing();
        let backend = Arc::new(Backend::new(FlakyStore::default()));
        let state = ContentState::init(Arc::clone(&backend)).await;
        assert_eq!(state.products().len(), 6);

        backend.store().set_failing(true);
        state.refresh().await;
        assert_eq!(state.products().len(), 6);

        // The mutation itself reports the failure
        assert!(state.add_product(sample_new_product("X")).await.is_err());
        assert_eq!(state.products().len(), 6);
    }

    #[tokio::test]
    async fn test_init_on_failing_store_starts_empty() {
        init_test_tracing();
        let store = FlakyStore::default();
        store.set_failing(true);

        let state = ContentState::init(Arc::new(Backend::new(store))).await;
        assert!(state.products().is_empty());
        assert!(state.inquiries().is_empty());
    }
}
