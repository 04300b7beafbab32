//! Record Collections
//!
//! Owns the user and post collections together with their id counters.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::{ApiError, Result};
use crate::models::{CreatePostRequest, CreateUserRequest, Post, RecordId, UpdateUserRequest, User};

pub const USER_NOT_FOUND: &str = "User not found";
pub const POST_NOT_FOUND: &str = "Post not found";

// == Store ==
/// In-memory storage for users and posts.
///
/// Each collection is an ordered map keyed by id. Ids come from counters
/// that only ever grow, so a deleted id is never handed out again.
#[derive(Debug, Clone)]
pub struct Store {
    users: BTreeMap<RecordId, User>,
    posts: BTreeMap<RecordId, Post>,
    next_user_id: RecordId,
    next_post_id: RecordId,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    // == Constructor ==
    /// Creates an empty store. The first record of each kind gets id 1.
    pub fn new() -> Self {
        Self {
            users: BTreeMap::new(),
            posts: BTreeMap::new(),
            next_user_id: 1,
            next_post_id: 1,
        }
    }

    /// Creates a store holding the given records.
    ///
    /// Counters resume after the highest seeded id.
    pub fn with_records(users: Vec<User>, posts: Vec<Post>) -> Self {
        let users: BTreeMap<_, _> = users.into_iter().map(|u| (u.id, u)).collect();
        let posts: BTreeMap<_, _> = posts.into_iter().map(|p| (p.id, p)).collect();
        let next_user_id = users.keys().next_back().map_or(1, |id| id + 1);
        let next_post_id = posts.keys().next_back().map_or(1, |id| id + 1);

        Self {
            users,
            posts,
            next_user_id,
            next_post_id,
        }
    }

    // == Users ==
    /// Returns every user in ascending id order.
    pub fn list_users(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }

    /// Looks up a user by id.
    pub fn get_user(&self, id: RecordId) -> Result<User> {
        self.users
            .get(&id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(USER_NOT_FOUND.to_string()))
    }

    /// Validates and appends a new user.
    pub fn create_user(&mut self, req: CreateUserRequest) -> Result<User> {
        if let Some(error_msg) = req.validate() {
            return Err(ApiError::InvalidRequest(error_msg));
        }

        let age = req.effective_age();
        let user = User {
            id: self.next_user_id,
            name: req.name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            age,
        };
        self.next_user_id += 1;
        self.users.insert(user.id, user.clone());

        Ok(user)
    }

    /// Overwrites the fields present in `req`; absent fields keep their value.
    pub fn update_user(&mut self, id: RecordId, req: UpdateUserRequest) -> Result<User> {
        let user = self
            .users
            .get_mut(&id)
            .ok_or_else(|| ApiError::NotFound(USER_NOT_FOUND.to_string()))?;

        if let Some(name) = req.name {
            user.name = name;
        }
        if let Some(email) = req.email {
            user.email = email;
        }
        if let Some(age) = req.age {
            user.age = age;
        }

        Ok(user.clone())
    }

    /// Removes a user. Posts referring to it are left untouched.
    pub fn delete_user(&mut self, id: RecordId) -> Result<User> {
        self.users
            .remove(&id)
            .ok_or_else(|| ApiError::NotFound(USER_NOT_FOUND.to_string()))
    }

    // == Posts ==
    /// Returns every post in ascending id order.
    pub fn list_posts(&self) -> Vec<Post> {
        self.posts.values().cloned().collect()
    }

    pub fn get_post(&self, id: RecordId) -> Result<Post> {
        self.posts
            .get(&id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(POST_NOT_FOUND.to_string()))
    }

    /// Validates and appends a new post dated `today`.
    pub fn create_post(&mut self, req: CreatePostRequest, today: NaiveDate) -> Result<Post> {
        if let Some(error_msg) = req.validate() {
            return Err(ApiError::InvalidRequest(error_msg));
        }

        let author_id = req.effective_author_id();
        let post = Post {
            id: self.next_post_id,
            title: req.title.unwrap_or_default(),
            content: req.content.unwrap_or_default(),
            author_id,
            created_at: today,
        };
        self.next_post_id += 1;
        self.posts.insert(post.id, post.clone());

        Ok(post)
    }

    // == Length ==
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
    }
}
