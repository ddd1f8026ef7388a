mod common;

use std::collections::HashSet;
use std::sync::Arc;

use short_url::application::services::MappingService;
use short_url::domain::repositories::MappingRepository;
use short_url::error::RepositoryError;
use short_url::infrastructure::dns::HostResolver;
use short_url::infrastructure::persistence::MemoryMappingRepository;

#[tokio::test]
async fn test_concurrent_inserts_get_dense_unique_ids() {
    let repo = Arc::new(MemoryMappingRepository::new());

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let repo = repo.clone();
            tokio::spawn(async move {
                repo.insert_next(&format!("https://example.com/{}", i))
                    .await
                    .unwrap()
                    .short_id
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }

    assert_eq!(ids, (1..=32).collect::<HashSet<i64>>());
    assert_eq!(repo.count().await.unwrap(), 32);
}

#[tokio::test]
async fn test_duplicate_insert_is_conflict() {
    let repo = MemoryMappingRepository::new();

    repo.insert_next("https://example.com").await.unwrap();
    let result = repo.insert_next("https://example.com").await;

    assert!(matches!(result, Err(RepositoryError::Conflict)));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_concurrent_create_or_get_same_url_yields_one_mapping() {
    let repo = Arc::new(MemoryMappingRepository::new());
    let resolver: Arc<dyn HostResolver> = Arc::new(common::TestResolver);
    let service = Arc::new(MappingService::new(repo.clone(), resolver));

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .create_or_get("https://www.freecodecamp.org")
                    .await
                    .unwrap()
                    .short_id
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), 1);
    }

    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_lookup_by_both_keys() {
    let repo = MemoryMappingRepository::new();
    let created = repo.insert_next("https://example.com/a").await.unwrap();

    let by_id = repo.find_by_short_id(created.short_id).await.unwrap().unwrap();
    let by_url = repo
        .find_by_original_url("https://example.com/a")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(by_id, by_url);
    assert!(repo.find_by_short_id(2).await.unwrap().is_none());
    assert!(repo.find_by_short_id(0).await.unwrap().is_none());
}
