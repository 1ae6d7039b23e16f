//! Property tests: insert→get roundtrip, dense id assignment.

use proptest::prelude::*;

use skillmatch_core::models::NewUser;
use skillmatch_core::traits::IUserDirectory;
use skillmatch_storage::StorageEngine;

fn new_user(name: &str, interests: Vec<String>) -> NewUser {
    NewUser {
        name: name.to_string(),
        date_of_birth: "1999-09-09".to_string(),
        city: "Quito".to_string(),
        interests,
        country: None,
        gender: None,
    }
}

proptest! {
    #[test]
    fn prop_insert_get_roundtrip(
        name in "[a-zA-Z][a-zA-Z0-9 ]{0,30}",
        interests in prop::collection::vec("[a-z]{1,12}", 1..8)
    ) {
        let engine = StorageEngine::open_in_memory().unwrap();
        let created = engine.create_user(new_user(&name, interests.clone())).unwrap();
        let fetched = engine.get_user(created.id).unwrap().unwrap();

        prop_assert_eq!(&fetched, &created);
        prop_assert_eq!(fetched.profile_text, interests.join(" "));
    }

    #[test]
    fn prop_ids_match_positions(count in 1usize..25) {
        let engine = StorageEngine::open_in_memory().unwrap();
        for i in 0..count {
            engine.create_user(new_user(&format!("u{i}"), vec!["x".to_string()])).unwrap();
        }
        let users = engine.list_users().unwrap();
        prop_assert_eq!(users.len(), count);
        for (pos, user) in users.iter().enumerate() {
            prop_assert_eq!(user.id, pos as i64);
        }
    }
}
