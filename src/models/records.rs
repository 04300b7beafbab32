//! Stored records
//!
//! The two entity types kept by the [`Store`](crate::store::Store).

use chrono::NaiveDate;
use serde::Serialize;

/// Record id, unique within its collection.
pub type RecordId = u64;

/// A user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub age: u32,
}

/// A post record. `author_id` is never checked against the users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    pub author_id: RecordId,
    /// Day the post was created, serialized as `YYYY-MM-DD`
    pub created_at: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_serializes_camel_case() {
        let post = Post {
            id: 7,
            title: "t".into(),
            content: "c".into(),
            author_id: 2,
            created_at: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        };
        assert_eq!(
            serde_json::to_value(&post).unwrap(),
            json!({
                "id": 7,
                "title": "t",
                "content": "c",
                "authorId": 2,
                "createdAt": "2024-03-09"
            })
        );
    }
}
