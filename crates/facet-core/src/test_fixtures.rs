//! Minimal record graph used by engine unit tests.

use crate::{
    registry::{EntityShape, ShapeRegistry},
    traits::Record,
    value::FieldValue,
};
use chrono::{DateTime, TimeZone, Utc};

///
/// Viewer
/// Caller context threaded through predicates and transforms.
///

pub(crate) struct Viewer {
    pub user_id: u64,
}

///
/// Vote
///

pub(crate) struct Vote {
    pub user_id: u64,
}

impl Record for Vote {
    fn path(&self) -> &'static str {
        "test::Vote"
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "user_id" => Some(FieldValue::Scalar(self.user_id.into())),
            _ => None,
        }
    }
}

///
/// Author
///

pub(crate) struct Author {
    pub id: u64,
    pub name: String,
}

impl Record for Author {
    fn path(&self) -> &'static str {
        "test::Author"
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Scalar(self.id.into())),
            "name" => Some(FieldValue::Scalar(self.name.as_str().into())),
            _ => None,
        }
    }
}

///
/// Reply
///

pub(crate) struct Reply {
    pub id: u64,
    pub text: String,
    pub author: Option<Author>,
}

impl Record for Reply {
    fn path(&self) -> &'static str {
        "test::Reply"
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Scalar(self.id.into())),
            "text" => Some(FieldValue::Scalar(self.text.as_str().into())),
            "author" => Some(FieldValue::One(
                self.author.as_ref().map(|a| a as &dyn Record),
            )),
            _ => None,
        }
    }
}

///
/// Post
///

pub(crate) struct Post {
    pub id: u64,
    pub name: String,
    pub posted_at: DateTime<Utc>,
    pub author: Option<Author>,
    pub replies: Vec<Reply>,
    pub votes: Vec<Vote>,
}

impl Record for Post {
    fn path(&self) -> &'static str {
        "test::Post"
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Scalar(self.id.into())),
            "name" => Some(FieldValue::Scalar(self.name.as_str().into())),
            "posted_at" => Some(FieldValue::Timestamp(self.posted_at)),
            "author" => Some(FieldValue::One(
                self.author.as_ref().map(|a| a as &dyn Record),
            )),
            "replies" => Some(FieldValue::Many(
                self.replies.iter().map(|r| r as &dyn Record).collect(),
            )),
            "votes" => Some(FieldValue::Many(
                self.votes.iter().map(|v| v as &dyn Record).collect(),
            )),
            "reply_count" => Some(FieldValue::Scalar((self.replies.len() as u64).into())),
            _ => None,
        }
    }
}

/// Registry covering the whole test graph.
pub(crate) fn registry() -> ShapeRegistry<Viewer> {
    let mut registry = ShapeRegistry::new();
    registry
        .register("test::Post", EntityShape::new(["id", "name", "posted_at"]))
        .expect("test post shape should register");
    registry
        .register("test::Author", EntityShape::new(["id", "name"]))
        .expect("test author shape should register");
    registry
        .register("test::Reply", EntityShape::new(["id", "text"]))
        .expect("test reply shape should register");
    registry
        .register("test::Vote", EntityShape::new(["user_id"]))
        .expect("test vote shape should register");
    registry
}

/// Post 7 with three replies (one authored), three votes, 2024-01-01 UTC.
pub(crate) fn sample_post() -> Post {
    Post {
        id: 7,
        name: "hello".to_string(),
        posted_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        author: Some(Author {
            id: 11,
            name: "ada".to_string(),
        }),
        replies: vec![
            Reply {
                id: 1,
                text: "first".to_string(),
                author: None,
            },
            Reply {
                id: 2,
                text: "second".to_string(),
                author: Some(Author {
                    id: 12,
                    name: "grace".to_string(),
                }),
            },
            Reply {
                id: 3,
                text: "third".to_string(),
                author: None,
            },
        ],
        votes: vec![
            Vote { user_id: 1 },
            Vote { user_id: 2 },
            Vote { user_id: 3 },
        ],
    }
}
