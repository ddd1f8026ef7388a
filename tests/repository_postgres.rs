use sqlx::PgPool;
use std::collections::HashSet;
use std::sync::Arc;

use short_url::application::services::MappingService;
use short_url::domain::repositories::MappingRepository;
use short_url::error::RepositoryError;
use short_url::infrastructure::dns::{HostResolver, NoopResolver};
use short_url::infrastructure::persistence::PgMappingRepository;

/// A URL longer than a btree index entry may be, with a non-repeating path.
fn long_url(seed: u64) -> String {
    let mut state = seed;
    let path: String = (0..3200)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (b'a' + ((state >> 33) % 26) as u8) as char
        })
        .collect();

    format!("https://example.com/{}", path)
}

#[sqlx::test]
async fn test_insert_next_starts_at_one(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));

    let first = repo.insert_next("https://example.com/a").await.unwrap();
    let second = repo.insert_next("https://example.com/b").await.unwrap();

    assert_eq!(first.short_id, 1);
    assert_eq!(second.short_id, 2);
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[sqlx::test]
async fn test_duplicate_original_url_is_conflict(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));

    repo.insert_next("https://example.com").await.unwrap();
    let result = repo.insert_next("https://example.com").await;

    assert!(matches!(result, Err(RepositoryError::Conflict)));
}

#[sqlx::test]
async fn test_find_by_both_keys(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));
    let created = repo.insert_next("https://www.freecodecamp.org").await.unwrap();

    let by_id = repo.find_by_short_id(created.short_id).await.unwrap().unwrap();
    assert_eq!(by_id.original_url, "https://www.freecodecamp.org");

    let by_url = repo
        .find_by_original_url("https://www.freecodecamp.org")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_url.short_id, created.short_id);

    assert!(repo.find_by_short_id(999).await.unwrap().is_none());
    assert!(
        repo.find_by_original_url("https://unknown.example.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test]
async fn test_concurrent_inserts_get_unique_ids(pool: PgPool) {
    let repo = Arc::new(PgMappingRepository::new(Arc::new(pool)));

    let handles: Vec<_> = (0..10)
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

    assert_eq!(ids, (1..=10).collect::<HashSet<i64>>());
}

#[sqlx::test]
async fn test_long_url_is_stored_and_deduplicated(pool: PgPool) {
    let repo = PgMappingRepository::new(Arc::new(pool));
    let url = long_url(7);

    let created = repo.insert_next(&url).await.unwrap();
    assert_eq!(created.short_id, 1);
    assert_eq!(created.original_url, url);

    let found = repo.find_by_original_url(&url).await.unwrap().unwrap();
    assert_eq!(found.short_id, 1);

    let duplicate = repo.insert_next(&url).await;
    assert!(matches!(duplicate, Err(RepositoryError::Conflict)));

    let other = repo.insert_next(&long_url(8)).await.unwrap();
    assert_eq!(other.short_id, 2);
}

#[sqlx::test]
async fn test_concurrent_create_or_get_same_url_yields_one_mapping(pool: PgPool) {
    let repo = Arc::new(PgMappingRepository::new(Arc::new(pool)));
    let resolver: Arc<dyn HostResolver> = Arc::new(NoopResolver::new());
    let service = Arc::new(MappingService::new(repo.clone(), resolver));

    let handles: Vec<_> = (0..8)
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
