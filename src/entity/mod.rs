//! Table mappings for the social schema.
//!
//! Every `Model` exposes `serialize`, which flattens the row's own columns
//! into an ordered [`Row`], and `hydrate`, which rebuilds the model from one.

pub mod comment;
pub mod follower;
pub mod media;
pub mod post;
pub mod user;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::AppError;

pub use media::MediaType;

/// Flat column name -> value mapping, in column declaration order.
pub type Row = Map<String, Value>;

/// Table names in dependency order, parents first.
pub const TABLE_NAMES: [&str; 5] = ["User", "Follower", "Post", "Comment", "Media"];

pub(crate) fn hydrate_row<T: DeserializeOwned>(row: Row) -> Result<T, AppError> {
    Ok(serde_json::from_value(Value::Object(row))?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn as_row(value: Value) -> Row {
        match value {
            Value::Object(row) => row,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn user_serialize_has_exactly_its_columns() {
        let alice = user::Model {
            id: 1,
            username: "alice".to_string(),
            firstname: "A".to_string(),
            lastname: "L".to_string(),
            email: "a@x.com".to_string(),
        };
        let row = alice.serialize();
        let keys: Vec<&str> = row.keys().map(String::as_str).collect();
        assert_eq!(keys, ["id", "username", "firstname", "lastname", "email"]);
        assert_eq!(
            Value::Object(row),
            json!({"id": 1, "username": "alice", "firstname": "A", "lastname": "L", "email": "a@x.com"})
        );
    }

    #[test]
    fn comment_keeps_capitalised_keys_and_null_text() {
        let comment = comment::Model {
            id: 3,
            commenttext: None,
            user_id: 1,
            post_id: 2,
        };
        let row = comment.serialize();
        let keys: Vec<&str> = row.keys().map(String::as_str).collect();
        assert_eq!(keys, ["id", "commenttext", "User_id", "Post_id"]);
        assert_eq!(row["commenttext"], Value::Null);
    }

    #[test]
    fn serialize_hydrate_is_idempotent() {
        let user_row = user::Model {
            id: 7,
            username: "bob".to_string(),
            firstname: "B".to_string(),
            lastname: "O".to_string(),
            email: "b@x.com".to_string(),
        }
        .serialize();
        assert_eq!(user::Model::hydrate(user_row.clone()).unwrap().serialize(), user_row);

        let follower_row = follower::Model { id: 1, user_from_id: 7, user_to_id: 8 }.serialize();
        assert_eq!(follower::Model::hydrate(follower_row.clone()).unwrap().serialize(), follower_row);

        let post_row = post::Model { id: 4, user_id: 7 }.serialize();
        assert_eq!(post::Model::hydrate(post_row.clone()).unwrap().serialize(), post_row);

        let comment_row = comment::Model {
            id: 2,
            commenttext: Some("nice".to_string()),
            user_id: 7,
            post_id: 4,
        }
        .serialize();
        assert_eq!(comment::Model::hydrate(comment_row.clone()).unwrap().serialize(), comment_row);

        let media_row = media::Model {
            id: 9,
            media_type: MediaType::Three,
            url: None,
            post_id: 4,
        }
        .serialize();
        assert_eq!(media::Model::hydrate(media_row.clone()).unwrap().serialize(), media_row);
    }

    #[test]
    fn hydrate_reports_missing_columns() {
        let row = as_row(json!({"id": 1, "username": "alice"}));
        assert!(matches!(user::Model::hydrate(row), Err(AppError::Hydrate(_))));
    }

    #[test]
    fn hydrate_reads_capitalised_foreign_keys() {
        let row = as_row(json!({"id": 5, "commenttext": "hi", "User_id": 1, "Post_id": 2}));
        let comment = comment::Model::hydrate(row).unwrap();
        assert_eq!(comment.user_id, 1);
        assert_eq!(comment.post_id, 2);
    }
}
