//! Product business logic - the catalog collection.
//!
//! The collection is one JSON array under [`keys::PRODUCTS`]. Reading an
//! empty or absent collection writes the demo seed first, so the public
//! catalog is never blank.

use super::{Backend, fresh_id, seed};
use crate::{
    errors::Result,
    models::{NewProduct, Product},
    storage::{StoragePort, keys, read_json, write_json},
};
use tracing::{debug, info};

/// Returns the whole catalog, seeding it when it is empty or absent.
///
/// Seeding is idempotent: an empty collection always becomes the same six
/// products.
pub async fn get_all_products<S: StoragePort>(backend: &Backend<S>) -> Result<Vec<Product>> {
    backend.simulate_latency().await;
    let _writes = backend.lock_writes().await;
    load_or_seed(backend.store()).await
}

/// Callers must hold the backend's write gate.
async fn load_or_seed<S: StoragePort>(store: &S) -> Result<Vec<Product>> {
    match read_json::<_, Vec<Product>>(store, keys::PRODUCTS).await? {
        Some(products) if !products.is_empty() => Ok(products),
        _ => {
            let products = seed::default_products();
            write_json(store, keys::PRODUCTS, &products).await?;
            info!("Seeded product catalog with {} products", products.len());
            Ok(products)
        }
    }
}

/// Appends a product under a freshly generated id.
pub async fn create_product<S: StoragePort>(
    backend: &Backend<S>,
    new_product: NewProduct,
) -> Result<Product> {
    backend.simulate_latency().await;
    let _writes = backend.lock_writes().await;
    let mut products = load_or_seed(backend.store()).await?;

    let id = fresh_id(products.iter().map(|p| p.id.as_str()));
    let product = Product::from_new(id, new_product);
    products.push(product.clone());

    write_json(backend.store(), keys::PRODUCTS, &products).await?;
    info!("Created product '{}' ({})", product.title, product.id);
    Ok(product)
}

/// Replaces the product with the same id in place.
///
/// Returns `false` and leaves the catalog untouched when no product has that id.
pub async fn update_product<S: StoragePort>(
    backend: &Backend<S>,
    product: Product,
) -> Result<bool> {
    backend.simulate_latency().await;
    let _writes = backend.lock_writes().await;
    let mut products = load_or_seed(backend.store()).await?;

    let Some(slot) = products.iter_mut().find(|p| p.id == product.id) else {
        debug!("Update skipped, no product with id {}", product.id);
        return Ok(false);
    };
    info!("Updated product '{}' ({})", product.title, product.id);
    *slot = product;

    write_json(backend.store(), keys::PRODUCTS, &products).await?;
    Ok(true)
}

/// Removes the product with `product_id`. Returns whether one was removed.
pub async fn delete_product<S: StoragePort>(
    backend: &Backend<S>,
    product_id: &str,
) -> Result<bool> {
    backend.simulate_latency().await;
    let _writes = backend.lock_writes().await;
    let mut products = load_or_seed(backend.store()).await?;

    let before = products.len();
    products.retain(|p| p.id != product_id);
    let removed = products.len() != before;

    write_json(backend.store(), keys::PRODUCTS, &products).await?;
    if removed {
        info!("Deleted product {product_id}");
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{create_test_product, memory_backend, sample_new_product, sqlite_backend};
    use std::{collections::HashSet, sync::Arc};

    #[tokio::test]
    async fn test_get_all_seeds_empty_store() -> Result<()> {
        let backend = memory_backend();

        let products = get_all_products(&backend).await?;
        assert_eq!(products, seed::default_products());

        // The seed was persisted
        let stored: Option<Vec<Product>> = read_json(backend.store(), keys::PRODUCTS).await?;
        assert_eq!(stored.unwrap().len(), 6);
        Ok(())
    }

    #[tokio::test]
    async fn test_seeding_is_idempotent() -> Result<()> {
        let backend = memory_backend();

        let first = get_all_products(&backend).await?;
        let second = get_all_products(&backend).await?;
        let third = get_all_products(&backend).await?;

        assert_eq!(first.len(), 6);
        assert_eq!(first, second);
        assert_eq!(second, third);
        Ok(())
    }

    #[tokio::test]
    async fn test_stored_empty_array_is_reseeded() -> Result<()> {
        let backend = memory_backend();
        backend.store().set(keys::PRODUCTS, "[]".to_string()).await?;

        assert_eq!(get_all_products(&backend).await?.len(), 6);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_then_delete_restores_seed() -> Result<()> {
        let backend = memory_backend();
        assert_eq!(get_all_products(&backend).await?.len(), 6);

        let created = create_test_product(&backend, "X").await?;
        let products = get_all_products(&backend).await?;
        assert_eq!(products.len(), 7);
        assert_eq!(products[6].title, "X");
        assert_eq!(products[6].id, created.id);
        assert!(!created.id.starts_with("seed-"));

        assert!(delete_product(&backend, &created.id).await?);
        assert_eq!(get_all_products(&backend).await?, seed::default_products());
        Ok(())
    }

    #[tokio::test]
    async fn test_create_on_empty_store_appends_after_seed() -> Result<()> {
        let backend = memory_backend();

        create_test_product(&backend, "First Custom").await?;
        let products = get_all_products(&backend).await?;
        assert_eq!(products.len(), 7);
        assert_eq!(products[0].id, "seed-1");
        Ok(())
    }

    #[tokio::test]
    async fn test_ids_stay_unique() -> Result<()> {
        let backend = memory_backend();
        for i in 0..20 {
            create_test_product(&backend, &format!("Product {i}")).await?;
        }

        let products = get_all_products(&backend).await?;
        let ids: HashSet<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), products.len());
        Ok(())
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() -> Result<()> {
        let backend = memory_backend();
        let mut gong = get_all_products(&backend).await?.remove(1);
        assert_eq!(gong.id, "seed-2");
        gong.title = "AR500 Steel Gong (12\")".to_string();
        gong.features.push("Chain Hangers".to_string());

        assert!(update_product(&backend, gong.clone()).await?);

        let products = get_all_products(&backend).await?;
        assert_eq!(products.len(), 6);
        assert_eq!(products[1], gong);
        Ok(())
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_silent_noop() -> Result<()> {
        let backend = memory_backend();
        let before = get_all_products(&backend).await?;

        let ghost = Product::from_new("missing".to_string(), sample_new_product("Ghost"));
        assert!(!update_product(&backend, ghost).await?);

        assert_eq!(get_all_products(&backend).await?, before);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_unknown_id() -> Result<()> {
        let backend = memory_backend();
        assert!(!delete_product(&backend, "missing").await?);
        assert_eq!(get_all_products(&backend).await?.len(), 6);
        Ok(())
    }

    #[tokio::test]
    async fn test_sequence_of_operations() -> Result<()> {
        let backend = memory_backend();

        let a = create_test_product(&backend, "A").await?;
        let b = create_test_product(&backend, "B").await?;
        assert!(delete_product(&backend, "seed-3").await?);

        let mut b_edited = b.clone();
        b_edited.description = "Edited".to_string();
        assert!(update_product(&backend, b_edited.clone()).await?);
        assert!(delete_product(&backend, &a.id).await?);

        let ids: Vec<_> = get_all_products(&backend)
            .await?
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["seed-1", "seed-2", "seed-4", "seed-5", "seed-6", b.id.as_str()]);

        let products = get_all_products(&backend).await?;
        assert_eq!(products.last(), Some(&b_edited));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_on_fresh_store_seed_once() -> Result<()> {
        let backend = Arc::new(sqlite_backend().await?);

        let mut handles = Vec::new();
        for i in 0..10 {
            let backend = Arc::clone(&backend);
            handles.push(tokio::spawn(async move {
                create_test_product(&backend, &format!("Rack {i}")).await
            }));
        }
        for handle in handles {
            assert!(handle.await.is_ok_and(|created| created.is_ok()));
        }

        let products = get_all_products(&backend).await?;
        assert_eq!(products.len(), 16);
        assert_eq!(products.iter().filter(|p| p.id.starts_with("seed-")).count(), 6);
        Ok(())
    }

    #[tokio::test]
    async fn test_catalog_persists_in_sqlite() -> Result<()> {
        let backend = sqlite_backend().await?;

        let created = create_test_product(&backend, "Steel Plate Rack").await?;
        let products = get_all_products(&backend).await?;
        assert_eq!(products.len(), 7);
        assert_eq!(products.last(), Some(&created));
        Ok(())
    }
}
