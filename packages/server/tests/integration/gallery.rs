use std::sync::atomic::Ordering;

use crate::common::{BASE_URL, RecordingCatalog, RecordingStore, TestApp, routes, row};

mod gallery_listing {
    use super::*;

    #[tokio::test]
    async fn rows_are_listed_in_id_order() {
        let catalog = RecordingCatalog::with_rows(vec![
            row(2, "Second", "alice"),
            row(1, "First", "bob"),
            row(3, "Third", "alice"),
        ]);
        let app = TestApp::spawn_with(RecordingStore::new(), catalog, true).await;

        let res = app.get(routes::ARTWORKS).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["total"].as_u64().unwrap(), 3);
        assert_eq!(res.body["source"].as_str().unwrap(), "database");
        let ids: Vec<i64> = res.body["artworks"]
            .as_array()
            .unwrap()
            .iter()
            .map(|artwork| artwork["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn empty_table_checks_the_bucket_before_declaring_empty() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::ARTWORKS).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["total"].as_u64().unwrap(), 0);
        assert!(app.store.list_count() >= 1, "bucket listing never attempted");
    }

    #[tokio::test]
    async fn bucket_fallback_synthesizes_records_from_object_names() {
        let store = RecordingStore::with_objects(&["alice/abc.png", "bob/def.jpg"]);
        let app = TestApp::spawn_with(store, RecordingCatalog::new(), true).await;

        let res = app.get(routes::ARTWORKS).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["source"].as_str().unwrap(), "storage");
        let artworks = res.body["artworks"].as_array().unwrap();
        assert_eq!(artworks.len(), 2);

        let first = &artworks[0];
        assert!(first["id"].is_null());
        assert_eq!(first["title"].as_str().unwrap(), "abc");
        assert_eq!(first["user_id"].as_str().unwrap(), "alice");
        assert_eq!(
            first["image_url"].as_str().unwrap(),
            format!("{BASE_URL}/storage/v1/object/public/showcase-images/alice/abc.png")
        );
    }

    #[tokio::test]
    async fn table_failure_falls_back_to_the_bucket() {
        let store = RecordingStore::with_objects(&["carol/pic.webp"]);
        let catalog = RecordingCatalog::new();
        catalog.fail_lists.store(true, Ordering::SeqCst);
        let app = TestApp::spawn_with(store, catalog, true).await;

        let res = app.get(routes::ARTWORKS).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["source"].as_str().unwrap(), "storage");
        assert_eq!(res.body["total"].as_u64().unwrap(), 1);
    }

    #[tokio::test]
    async fn failing_table_and_bucket_surface_an_upstream_error() {
        let store = RecordingStore::new();
        store.fail_lists.store(true, Ordering::SeqCst);
        let catalog = RecordingCatalog::new();
        catalog.fail_lists.store(true, Ordering::SeqCst);
        let app = TestApp::spawn_with(store, catalog, true).await;

        let res = app.get(routes::ARTWORKS).await;

        assert_eq!(res.status, 502);
        assert_eq!(res.body["code"].as_str().unwrap(), "UPSTREAM_ERROR");
    }
}
