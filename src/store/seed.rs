//! Sample data loaded at startup.

use chrono::NaiveDate;

use crate::models::{Post, User};
use crate::store::Store;

fn user(id: u64, name: &str, email: &str, age: u32) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        age,
    }
}

fn post(id: u64, title: &str, content: &str, author_id: u64, created_at: NaiveDate) -> Post {
    Post {
        id,
        title: title.to_string(),
        content: content.to_string(),
        author_id,
        created_at,
    }
}

pub fn sample_users() -> Vec<User> {
    vec![
        user(1, "张三", "zhangsan@example.com", 25),
        user(2, "李四", "lisi@example.com", 30),
        user(3, "王五", "wangwu@example.com", 28),
    ]
}

pub fn sample_posts() -> Vec<Post> {
    let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap_or(NaiveDate::MIN);
    vec![
        post(
            1,
            "第一篇文章",
            "这是第一篇文章的内容",
            1,
            day(1),
        ),
        post(
            2,
            "第二篇文章",
            "这是第二篇文章的内容",
            2,
            day(2),
        ),
    ]
}

impl Store {
    /// Store pre-filled with the sample users and posts.
    pub fn seeded() -> Self {
        Self::with_records(sample_users(), sample_posts())
    }
}
