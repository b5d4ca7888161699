use chrono::Utc;
use uuid::Uuid;

use wishwell_types::models::{ANONYMOUS_FULFILLER, Comment, Like, Wish, WishStatus};

use crate::Store;
use crate::error::StoreError;

impl Store {
    // -- Wishes --

    pub fn list_wishes(&self) -> Result<Vec<Wish>, StoreError> {
        self.read(|doc| doc.wishes.clone())
    }

    pub fn get_wish(&self, id: Uuid) -> Result<Wish, StoreError> {
        self.read(|doc| doc.wishes.iter().find(|w| w.id == id).cloned())?
            .ok_or(StoreError::NotFound)
    }

    pub fn create_wish(
        &self,
        title: String,
        description: String,
        image_url: Option<String>,
    ) -> Result<Wish, StoreError> {
        self.update(|doc| {
            let wish = Wish {
                id: Uuid::new_v4(),
                title,
                description,
                image_url,
                status: WishStatus::Pending,
                fulfilled_by: None,
                created_at: Utc::now(),
            };
            doc.wishes.push(wish.clone());
            Ok(wish)
        })
    }

    /// Mark a wish fulfilled. Fulfillment is terminal: anything other than a
    /// pending wish rejects, including archived and legacy-boolean records.
    pub fn fulfill_wish(&self, id: Uuid, name: Option<String>) -> Result<Wish, StoreError> {
        self.update(|doc| {
            let wish = doc
                .wishes
                .iter_mut()
                .find(|w| w.id == id)
                .ok_or(StoreError::NotFound)?;

            if wish.status != WishStatus::Pending {
                return Err(StoreError::AlreadyFulfilled);
            }

            wish.status = WishStatus::Fulfilled;
            wish.fulfilled_by = Some(name.unwrap_or_else(|| ANONYMOUS_FULFILLER.to_string()));
            Ok(wish.clone())
        })
    }

    // -- Likes --

    /// Toggle the like row for `(wish_id, user)`: insert if absent, remove
    /// if present. Returns the wish's new total like count across all users.
    /// The wish itself is not validated.
    pub fn toggle_like(&self, wish_id: Uuid, user: &str) -> Result<usize, StoreError> {
        self.update(|doc| {
            match doc
                .likes
                .iter()
                .position(|l| l.wish_id == wish_id && l.user == user)
            {
                Some(idx) => {
                    doc.likes.remove(idx);
                }
                None => doc.likes.push(Like {
                    id: Uuid::new_v4(),
                    wish_id,
                    user: user.to_string(),
                    created_at: Utc::now(),
                }),
            }

            Ok(doc.likes.iter().filter(|l| l.wish_id == wish_id).count())
        })
    }

    /// Current like count for a wish. An unknown id counts zero.
    pub fn like_count(&self, wish_id: Uuid) -> Result<usize, StoreError> {
        self.read(|doc| doc.likes.iter().filter(|l| l.wish_id == wish_id).count())
    }

    // -- Comments --

    pub fn add_comment(
        &self,
        wish_id: Uuid,
        user: &str,
        text: &str,
    ) -> Result<Comment, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyComment);
        }

        self.update(|doc| {
            let comment = Comment {
                id: Uuid::new_v4(),
                wish_id,
                user: user.to_string(),
                text: text.to_string(),
                created_at: Utc::now(),
            };
            doc.comments.push(comment.clone());
            Ok(comment)
        })
    }

    pub fn list_comments(&self, wish_id: Uuid) -> Result<Vec<Comment>, StoreError> {
        self.read(|doc| {
            let mut comments: Vec<Comment> = doc
                .comments
                .iter()
                .filter(|c| c.wish_id == wish_id)
                .cloned()
                .collect();
            comments.sort_by_key(|c| c.created_at);
            comments
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "wishwell_store_{}_{}.json",
            name,
            std::process::id()
        ))
    }

    fn open_store(name: &str) -> (Store, PathBuf) {
        let path = temp_path(name);
        let _ = fs::remove_file(&path);
        let store = Store::open(&path).unwrap();
        (store, path)
    }

    fn raw_document(path: &PathBuf) -> serde_json::Value {
        serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
    }

    #[test]
    fn create_then_get_and_list() {
        let (store, path) = open_store("create");

        let wish = store
            .create_wish("Shoes".into(), "Need running shoes".into(), None)
            .unwrap();
        assert_eq!(wish.status, WishStatus::Pending);
        assert_eq!(wish.fulfilled_by, None);

        let fetched = store.get_wish(wish.id).unwrap();
        assert_eq!(fetched.title, "Shoes");

        assert_eq!(store.list_wishes().unwrap().len(), 1);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn get_unknown_wish_is_not_found() {
        let (store, path) = open_store("get_unknown");

        assert!(matches!(
            store.get_wish(Uuid::new_v4()),
            Err(StoreError::NotFound)
        ));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn fulfill_is_terminal_and_keeps_fulfiller() {
        let (store, path) = open_store("fulfill");

        let wish = store
            .create_wish("Shoes".into(), "Need running shoes".into(), None)
            .unwrap();

        let fulfilled = store.fulfill_wish(wish.id, Some("Alice".into())).unwrap();
        assert_eq!(fulfilled.status, WishStatus::Fulfilled);
        assert_eq!(fulfilled.fulfilled_by.as_deref(), Some("Alice"));

        // A second attempt must fail and must not touch the fulfiller.
        assert!(matches!(
            store.fulfill_wish(wish.id, Some("Bob".into())),
            Err(StoreError::AlreadyFulfilled)
        ));
        let after = store.get_wish(wish.id).unwrap();
        assert_eq!(after.fulfilled_by.as_deref(), Some("Alice"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn fulfill_unknown_wish_is_not_found() {
        let (store, path) = open_store("fulfill_unknown");

        assert!(matches!(
            store.fulfill_wish(Uuid::new_v4(), None),
            Err(StoreError::NotFound)
        ));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn fulfill_defaults_to_anonymous() {
        let (store, path) = open_store("fulfill_anon");

        let wish = store
            .create_wish("Shoes".into(), "Need running shoes".into(), None)
            .unwrap();
        let fulfilled = store.fulfill_wish(wish.id, None).unwrap();
        assert_eq!(fulfilled.fulfilled_by.as_deref(), Some(ANONYMOUS_FULFILLER));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn archived_and_legacy_boolean_records_reject_fulfillment() {
        let path = temp_path("legacy_fulfill");
        let archived_id = Uuid::new_v4();
        let legacy_id = Uuid::new_v4();
        fs::write(
            &path,
            serde_json::to_vec_pretty(&json!({
                "wishes": [
                    {
                        "id": archived_id,
                        "title": "Shelved",
                        "description": "No longer wanted",
                        "status": "archived",
                        "fulfilled": false,
                        "fulfilledBy": null,
                        "createdAt": 1_700_000_000_000_i64,
                    },
                    {
                        "id": legacy_id,
                        "title": "Old",
                        "description": "Pre-status record",
                        "fulfilled": true,
                        "fulfilledBy": "Bob",
                        "createdAt": 1_700_000_000_000_i64,
                    },
                ],
            }))
            .unwrap(),
        )
        .unwrap();

        let store = Store::open(&path).unwrap();
        assert!(matches!(
            store.fulfill_wish(archived_id, Some("Alice".into())),
            Err(StoreError::AlreadyFulfilled)
        ));
        assert!(matches!(
            store.fulfill_wish(legacy_id, Some("Alice".into())),
            Err(StoreError::AlreadyFulfilled)
        ));

        // The legacy fulfiller is untouched by the failed attempts.
        let legacy = store.get_wish(legacy_id).unwrap();
        assert_eq!(legacy.fulfilled_by.as_deref(), Some("Bob"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn double_toggle_restores_count_without_duplicates() {
        let (store, path) = open_store("toggle");
        let wish_id = Uuid::new_v4();

        assert_eq!(store.toggle_like(wish_id, "bob").unwrap(), 1);
        assert_eq!(store.toggle_like(wish_id, "carol").unwrap(), 2);

        // bob unlikes, then likes again: count moves by exactly one each way.
        assert_eq!(store.toggle_like(wish_id, "bob").unwrap(), 1);
        assert_eq!(store.toggle_like(wish_id, "bob").unwrap(), 2);

        let likes = raw_document(&path)["likes"].as_array().unwrap().clone();
        let bob_rows = likes
            .iter()
            .filter(|l| l["user"] == "bob" && l["wishId"] == json!(wish_id))
            .count();
        assert_eq!(bob_rows, 1);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn like_count_is_zero_for_unknown_wish() {
        let (store, path) = open_store("count_unknown");

        assert_eq!(store.like_count(Uuid::new_v4()).unwrap(), 0);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn likes_are_scoped_to_their_wish() {
        let (store, path) = open_store("like_scope");
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        store.toggle_like(first, "bob").unwrap();
        store.toggle_like(second, "bob").unwrap();
        store.toggle_like(second, "carol").unwrap();

        assert_eq!(store.like_count(first).unwrap(), 1);
        assert_eq!(store.like_count(second).unwrap(), 2);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn whitespace_comment_is_rejected_and_not_appended() {
        let (store, path) = open_store("empty_comment");
        let wish_id = Uuid::new_v4();

        assert!(matches!(
            store.add_comment(wish_id, "bob", "   "),
            Err(StoreError::EmptyComment)
        ));
        assert!(store.list_comments(wish_id).unwrap().is_empty());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn comments_are_listed_ascending_and_stored_trimmed() {
        let (store, path) = open_store("comments");
        let wish_id = Uuid::new_v4();

        store.add_comment(wish_id, "bob", "  first  ").unwrap();
        thread::sleep(Duration::from_millis(5));
        store.add_comment(wish_id, "carol", "second").unwrap();
        thread::sleep(Duration::from_millis(5));
        store.add_comment(wish_id, "bob", "third").unwrap();

        // Unrelated wish, must not show up.
        store.add_comment(Uuid::new_v4(), "dave", "elsewhere").unwrap();

        let comments = store.list_comments(wish_id).unwrap();
        assert_eq!(comments.len(), 3);
        assert_eq!(comments[0].text, "first");
        for pair in comments.windows(2) {
            assert!(pair[0].created_at <= pair[1].created_at);
        }

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn absent_collections_default_and_persist_back() {
        let path = temp_path("lazy_default");
        fs::write(&path, serde_json::to_vec_pretty(&json!({ "wishes": [] })).unwrap()).unwrap();

        let store = Store::open(&path).unwrap();
        let wish_id = Uuid::new_v4();
        assert_eq!(store.like_count(wish_id).unwrap(), 0);
        assert_eq!(store.toggle_like(wish_id, "bob").unwrap(), 1);

        // The defaulted collections are written back on the first save.
        let doc = raw_document(&path);
        assert!(doc["likes"].is_array());
        assert!(doc["comments"].is_array());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn concurrent_creates_are_both_persisted() {
        let (store, path) = open_store("concurrent");
        let store = Arc::new(store);

        let handles: Vec<_> = (0..2)
            .map(|i| {
                let store = store.clone();
                thread::spawn(move || {
                    store
                        .create_wish(format!("Wish {i}"), "desc".into(), None)
                        .unwrap()
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.list_wishes().unwrap().len(), 2);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn malformed_document_is_fatal_to_the_operation() {
        let (store, path) = open_store("malformed");

        fs::write(&path, b"not json").unwrap();
        assert!(matches!(
            store.list_wishes(),
            Err(StoreError::Malformed(_))
        ));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_document_is_fatal_to_the_operation() {
        let (store, path) = open_store("missing");

        fs::remove_file(&path).unwrap();
        assert!(matches!(store.list_wishes(), Err(StoreError::Io(_))));
    }
}
