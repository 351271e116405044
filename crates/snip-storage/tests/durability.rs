//! End-to-end durability checks: everything a restart must survive.

use snip_core::{Repository, ShortId};
use snip_storage::FileRepository;
use std::fs;

#[tokio::test]
async fn saved_mapping_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.txt");

    {
        let repo = FileRepository::open(&path).unwrap();
        assert_eq!(repo.save("https://a").await.unwrap(), ShortId::new(1));
    }

    // Simulated process restart: a fresh open replays the log.
    let repo = FileRepository::open(&path).unwrap();
    assert_eq!(repo.get(ShortId::new(1)).await.unwrap(), "https://a");
}

#[tokio::test]
async fn restart_preserves_index_and_allocator() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.txt");

    let urls = [
        "https://stackoverflow.com/",
        "https://stepik.org/",
        "https://hh.ru/",
    ];

    {
        let repo = FileRepository::open(&path).unwrap();
        for (i, url) in urls.iter().enumerate() {
            assert_eq!(repo.save(url).await.unwrap(), ShortId::new(i as u64 + 1));
        }
    }

    let repo = FileRepository::open(&path).unwrap();
    assert_eq!(repo.current_max().await, 3);
    assert_eq!(repo.len().await, 3);
    for (i, url) in urls.iter().enumerate() {
        assert_eq!(repo.get(ShortId::new(i as u64 + 1)).await.unwrap(), *url);
    }
}

#[tokio::test]
async fn save_appends_without_rewriting_earlier_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.txt");

    let repo = FileRepository::open(&path).unwrap();
    repo.save("https://stackoverflow.com/").await.unwrap();
    let after_first = fs::read_to_string(&path).unwrap();

    repo.save("https://stepik.org/").await.unwrap();
    let after_second = fs::read_to_string(&path).unwrap();

    // Append-only: the earlier bytes are a strict prefix.
    assert!(after_second.starts_with(&after_first));
    assert_eq!(
        after_second.lines().last().unwrap(),
        r#"{"id":2,"url":"https://stepik.org/"}"#
    );
}

#[tokio::test]
async fn double_restart_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.txt");

    {
        let repo = FileRepository::open(&path).unwrap();
        repo.save("https://a").await.unwrap();
        repo.save("https://b").await.unwrap();
    }

    let before = fs::read_to_string(&path).unwrap();
    {
        let repo = FileRepository::open(&path).unwrap();
        assert_eq!(repo.current_max().await, 2);
    }
    // Opening without saving must not touch the log.
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}
