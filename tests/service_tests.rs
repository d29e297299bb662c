mod common;

#[cfg(test)]
pub mod service_tests {
    use std::fs;

    use super::common::*;

    use schoolpress::common::UploadError;
    use schoolpress::services::*;

    #[test]
    fn test_auth_events_reach_subscribers() {
        let hub = AuthEventHub::new();
        let mut subscription = hub.subscribe();

        hub.publish(AuthEvent::SignedIn {
            user_id: test_id(1),
        });

        assert_eq!(
            subscription.try_recv(),
            Some(AuthEvent::SignedIn {
                user_id: test_id(1)
            })
        );
        assert_eq!(subscription.try_recv(), None);
    }

    #[test]
    fn test_signed_out_event_is_delivered() {
        let hub = AuthEventHub::new();
        let mut subscription = hub.subscribe();

        hub.publish(AuthEvent::SignedOut {
            user_id: test_id(2),
        });

        assert_eq!(
            subscription.try_recv(),
            Some(AuthEvent::SignedOut {
                user_id: test_id(2)
            })
        );
    }

    // Repeated subscribe/unsubscribe cycles must not leak listeners.
    #[test]
    fn test_unsubscribe_releases_listener() {
        let hub = AuthEventHub::new();
        assert_eq!(hub.listener_count(), 0);

        for _ in 0..10 {
            let subscription = hub.subscribe();
            assert_eq!(hub.listener_count(), 1);
            subscription.unsubscribe();
        }

        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_publish_without_listeners_is_harmless() {
        let hub = AuthEventHub::new();
        hub.publish(AuthEvent::SignedIn {
            user_id: test_id(3),
        });
    }

    fn temp_upload_store() -> (UploadStore, std::path::PathBuf) {
        let root = std::env::temp_dir().join(format!("schoolpress-test-{}", uuid::Uuid::new_v4()));
        (
            UploadStore::new(root.clone(), "/static/uploads"),
            root,
        )
    }

    #[test]
    fn test_upload_store_writes_file_and_returns_public_url() {
        let (store, root) = temp_upload_store();

        let url = store
            .store("images", "photo.JPG", b"not-really-a-jpeg")
            .expect("Upload should succeed");

        assert!(url.starts_with("/static/uploads/images/"));
        assert!(url.ends_with(".jpg"));

        let name = url.rsplit('/').next().unwrap();
        let bytes = fs::read(root.join("images").join(name)).expect("File should exist");
        assert_eq!(bytes, b"not-really-a-jpeg");

        fs::remove_dir_all(root).ok();
    }

    #[test]
    fn test_upload_store_rejects_unknown_bucket() {
        let (store, root) = temp_upload_store();

        let result = store.store("secrets", "photo.jpg", b"data");
        assert!(matches!(result, Err(UploadError::UnknownBucket(_))));

        fs::remove_dir_all(root).ok();
    }

    #[test]
    fn test_upload_store_rejects_unsupported_extension() {
        let (store, root) = temp_upload_store();

        let result = store.store("files", "malware.exe", b"data");
        assert!(matches!(result, Err(UploadError::BadFileName(_))));

        let result = store.store("files", "no-extension", b"data");
        assert!(matches!(result, Err(UploadError::BadFileName(_))));

        fs::remove_dir_all(root).ok();
    }

    #[test]
    fn test_password_hash_and_verify() {
        let hash = hash_password("correct horse battery 9").expect("Hashing should succeed");

        assert!(verify_password("correct horse battery 9", &hash).unwrap());
        assert!(!verify_password("wrong password", &hash).unwrap());
    }
}
