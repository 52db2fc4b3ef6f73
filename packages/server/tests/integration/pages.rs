use crate::common::{RecordingCatalog, RecordingStore, TestApp, routes, row};

mod gallery_page {
    use super::*;

    #[tokio::test]
    async fn page_renders_the_empty_state() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::PAGE).await;

        assert_eq!(res.status, 200);
        assert!(res.text.contains("Creative Showcase"));
        assert!(res.text.contains("No artworks found."));
    }

    #[tokio::test]
    async fn page_renders_cards_and_the_upload_form() {
        let catalog = RecordingCatalog::with_rows(vec![
            row(1, "Sunrise", "alice"),
            row(2, "Sunset", "bob"),
            row(3, "Noon", "alice"),
            row(4, "Midnight", "carol"),
        ]);
        let app = TestApp::spawn_with(RecordingStore::new(), catalog, true).await;

        let res = app.get(routes::PAGE).await;

        assert_eq!(res.status, 200);
        for title in ["Sunrise", "Sunset", "Noon", "Midnight"] {
            assert!(res.text.contains(title), "missing card for {title}");
        }
        assert!(res.text.contains("upload-form"));
        assert!(res.text.contains("Refresh gallery"));
        assert!(res.text.contains("Open full image"));
    }

    #[tokio::test]
    async fn page_notes_when_uploads_are_disabled() {
        let app = TestApp::spawn_read_only().await;

        let res = app.get(routes::PAGE).await;

        assert_eq!(res.status, 200);
        assert!(res.text.contains("Uploads are disabled"));
        assert!(!res.text.contains("upload-form"));
    }

    #[tokio::test]
    async fn listing_failure_renders_inline_and_keeps_the_page_up() {
        let store = RecordingStore::new();
        store
            .fail_lists
            .store(true, std::sync::atomic::Ordering::SeqCst);
        let catalog = RecordingCatalog::new();
        catalog
            .fail_lists
            .store(true, std::sync::atomic::Ordering::SeqCst);
        let app = TestApp::spawn_with(store, catalog, true).await;

        let res = app.get(routes::PAGE).await;

        assert_eq!(res.status, 200);
        assert!(res.text.contains("Error fetching artworks"));
        assert!(res.text.contains("upload-form"));
    }
}
