//! Inquiry business logic - messages from the contact form.
//!
//! Inquiries are stored newest-first: creating one prepends it. They are never
//! edited, only deleted.

use super::{Backend, fresh_id};
use crate::{
    errors::Result,
    models::{Inquiry, NewInquiry},
    storage::{StoragePort, keys, read_json, write_json},
};
use chrono::Utc;
use tracing::info;

/// Returns every inquiry, newest first. An absent collection is empty.
pub async fn get_all_inquiries<S: StoragePort>(backend: &Backend<S>) -> Result<Vec<Inquiry>> {
    backend.simulate_latency().await;
    load(backend.store()).await
}

async fn load<S: StoragePort>(store: &S) -> Result<Vec<Inquiry>> {
    Ok(read_json(store, keys::INQUIRIES).await?.unwrap_or_default())
}

/// Stamps the inquiry with a fresh id and the current time and puts it first.
pub async fn create_inquiry<S: StoragePort>(
    backend: &Backend<S>,
    new_inquiry: NewInquiry,
) -> Result<Inquiry> {
    backend.simulate_latency().await;
    let _writes = backend.lock_writes().await;
    let mut inquiries = load(backend.store()).await?;

    let inquiry = Inquiry {
        id: fresh_id(inquiries.iter().map(|i| i.id.as_str())),
        name: new_inquiry.name,
        email: new_inquiry.email,
        subject: new_inquiry.subject,
        message: new_inquiry.message,
        date: Utc::now(),
    };
    inquiries.insert(0, inquiry.clone());

    write_json(backend.store(), keys::INQUIRIES, &inquiries).await?;
    info!("Received inquiry {} from {}", inquiry.id, inquiry.email);
    Ok(inquiry)
}

/// Removes the inquiry with `inquiry_id`. Returns whether one was removed.
pub async fn delete_inquiry<S: StoragePort>(
    backend: &Backend<S>,
    inquiry_id: &str,
) -> Result<bool> {
    backend.simulate_latency().await;
    let _writes = backend.lock_writes().await;
    let mut inquiries = load(backend.store()).await?;

    let before = inquiries.len();
    inquiries.retain(|i| i.id != inquiry_id);
    let removed = inquiries.len() != before;

    write_json(backend.store(), keys::INQUIRIES, &inquiries).await?;
    if removed {
        info!("Deleted inquiry {inquiry_id}");
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_inquiry, memory_backend, sample_new_inquiry, sqlite_backend};
    use std::{collections::HashSet, sync::Arc};

    #[tokio::test]
    async fn test_empty_store_has_no_inquiries() -> Result<()> {
        let backend = memory_backend();
        assert!(get_all_inquiries(&backend).await?.is_empty());
        // Reading does not seed anything
        assert!(backend.store().get(keys::INQUIRIES).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_newest_first() -> Result<()> {
        let backend = memory_backend();

        let a = create_inquiry(
            &backend,
            NewInquiry::new(
                "A".to_string(),
                "a@x.com".to_string(),
                Some("S".to_string()),
                "M".to_string(),
            ),
        )
        .await?;
        let b = create_test_inquiry(&backend, "B").await?;

        let inquiries = get_all_inquiries(&backend).await?;
        assert_eq!(inquiries, vec![b, a]);
        Ok(())
    }

    #[tokio::test]
    async fn test_creation_stamps_id_and_date() -> Result<()> {
        let backend = memory_backend();
        let before = Utc::now();

        let inquiry = create_test_inquiry(&backend, "Range Officer").await?;
        assert_eq!(inquiry.id.len(), 9);
        assert!(inquiry.date >= before);
        assert!(inquiry.date <= Utc::now());
        Ok(())
    }

    #[tokio::test]
    async fn test_order_follows_creation_not_fields() -> Result<()> {
        let backend = memory_backend();

        let mut created = Vec::new();
        for name in ["Zed", "Alice", "Mike"] {
            created.push(create_test_inquiry(&backend, name).await?);
        }

        let names: Vec<_> = get_all_inquiries(&backend)
            .await?
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["Mike", "Alice", "Zed"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete() -> Result<()> {
        let backend = memory_backend();
        let a = create_test_inquiry(&backend, "A").await?;
        let b = create_test_inquiry(&backend, "B").await?;

        assert!(delete_inquiry(&backend, &a.id).await?);
        assert!(!delete_inquiry(&backend, &a.id).await?);
        assert_eq!(get_all_inquiries(&backend).await?, vec![b]);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_submissions_are_all_kept() -> Result<()> {
        let backend = Arc::new(sqlite_backend().await?);
        create_test_inquiry(&backend, "First").await?;

        let mut handles = Vec::new();
        for i in 0..20 {
            let backend = Arc::clone(&backend);
            handles.push(tokio::spawn(async move {
                create_inquiry(&backend, sample_new_inquiry(&format!("Sender {i}"))).await
            }));
        }
        for handle in handles {
            assert!(handle.await.is_ok_and(|created| created.is_ok()));
        }

        let inquiries = get_all_inquiries(&backend).await?;
        assert_eq!(inquiries.len(), 21);
        let ids: HashSet<_> = inquiries.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), 21);
        assert_eq!(inquiries.last().map(|i| i.name.as_str()), Some("First"));
        Ok(())
    }

    #[tokio::test]
    async fn test_inquiries_persist_in_sqlite() -> Result<()> {
        let backend = sqlite_backend().await?;
        let a = create_test_inquiry(&backend, "A").await?;
        let b = create_test_inquiry(&backend, "B").await?;
        assert_eq!(get_all_inquiries(&backend).await?, vec![b, a]);
        Ok(())
    }
}
