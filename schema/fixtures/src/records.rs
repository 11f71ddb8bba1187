//! Record implementations over the community domain.
//!
//! Each record owns its prefetched relations, so one borrowed record is a
//! complete projectable subtree.

use chrono::{DateTime, Utc};
use facet::prelude::*;

///
/// User
///

#[derive(Clone, Debug)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub avatar: String,
    pub cover: String,
    pub is_admin: bool,
    pub is_moderator: bool,
}

impl User {
    pub const PATH: &'static str = "app::User";
}

impl Record for User {
    fn path(&self) -> &'static str {
        Self::PATH
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Scalar(self.id.into())),
            "username" => Some(FieldValue::Scalar(self.username.as_str().into())),
            "avatar" => Some(FieldValue::Scalar(self.avatar.as_str().into())),
            "cover" => Some(FieldValue::Scalar(self.cover.as_str().into())),
            "is_admin" => Some(FieldValue::Scalar(self.is_admin.into())),
            "is_moderator" => Some(FieldValue::Scalar(self.is_moderator.into())),
            _ => None,
        }
    }
}

///
/// Beatmap
///

#[derive(Clone, Debug)]
pub struct Beatmap {
    pub id: u64,
    pub artist: String,
    pub version: String,
    pub title: String,
    pub cover: String,
    pub star_rating: f64,
}

impl Beatmap {
    pub const PATH: &'static str = "app::Beatmap";
}

impl Record for Beatmap {
    fn path(&self) -> &'static str {
        Self::PATH
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Scalar(self.id.into())),
            "artist" => Some(FieldValue::Scalar(self.artist.as_str().into())),
            "version" => Some(FieldValue::Scalar(self.version.as_str().into())),
            "title" => Some(FieldValue::Scalar(self.title.as_str().into())),
            "cover" => Some(FieldValue::Scalar(self.cover.as_str().into())),
            "star_rating" => Some(FieldValue::Scalar(self.star_rating.into())),
            _ => None,
        }
    }
}

///
/// Player
///

#[derive(Clone, Debug)]
pub struct Player {
    pub id: u64,
    pub user: User,
}

impl Player {
    pub const PATH: &'static str = "app::Player";
}

impl Record for Player {
    fn path(&self) -> &'static str {
        Self::PATH
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Scalar(self.id.into())),
            "user_id" => Some(FieldValue::Scalar(self.user.id.into())),
            "user" => Some(FieldValue::One(Some(&self.user))),
            _ => None,
        }
    }
}

///
/// Team
///

#[derive(Clone, Debug)]
pub struct Team {
    pub id: u64,
    pub name: String,
    pub icon: Option<String>,
    pub invite: String,
    pub points: u64,
    pub players: Vec<Player>,
}

impl Team {
    pub const PATH: &'static str = "app::Team";
}

impl Record for Team {
    fn path(&self) -> &'static str {
        Self::PATH
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Scalar(self.id.into())),
            "name" => Some(FieldValue::Scalar(self.name.as_str().into())),
            "icon" => Some(FieldValue::Scalar(
                self.icon.as_ref().map(String::as_str).into(),
            )),
            "invite" => Some(FieldValue::Scalar(self.invite.as_str().into())),
            "points" => Some(FieldValue::Scalar(self.points.into())),
            "players" => Some(FieldValue::Many(
                self.players.iter().map(|p| p as &dyn Record).collect(),
            )),
            _ => None,
        }
    }
}

///
/// Placement
///

#[derive(Clone, Debug)]
pub struct Placement {
    pub value: i64,
    pub place: u64,
}

impl Placement {
    pub const PATH: &'static str = "app::Placement";
}

impl Record for Placement {
    fn path(&self) -> &'static str {
        Self::PATH
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "value" => Some(FieldValue::Scalar(self.value.into())),
            "place" => Some(FieldValue::Scalar(self.place.into())),
            _ => None,
        }
    }
}

///
/// Completion
///

#[derive(Clone, Debug)]
pub struct Completion {
    pub player: Player,
    pub time_completed: DateTime<Utc>,
    pub placement: Option<Placement>,
}

impl Completion {
    pub const PATH: &'static str = "app::Completion";

    #[must_use]
    pub fn player_id(&self) -> u64 {
        self.player.id
    }
}

impl Record for Completion {
    fn path(&self) -> &'static str {
        Self::PATH
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "player" => Some(FieldValue::One(Some(&self.player))),
            "time_completed" => Some(FieldValue::Timestamp(self.time_completed)),
            "placement" => Some(FieldValue::One(
                self.placement.as_ref().map(|p| p as &dyn Record),
            )),
            _ => None,
        }
    }
}

///
/// Comment
///

#[derive(Clone, Debug)]
pub struct Comment {
    pub text: String,
    pub posted_at: DateTime<Utc>,
    pub user: User,
}

impl Comment {
    pub const PATH: &'static str = "app::Comment";
}

impl Record for Comment {
    fn path(&self) -> &'static str {
        Self::PATH
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "text" => Some(FieldValue::Scalar(self.text.as_str().into())),
            "posted_at" => Some(FieldValue::Timestamp(self.posted_at)),
            "user" => Some(FieldValue::One(Some(&self.user))),
            _ => None,
        }
    }
}

///
/// Vote
///

#[derive(Clone, Debug)]
pub struct Vote {
    pub user_id: u64,
}

impl Vote {
    pub const PATH: &'static str = "app::Vote";
}

impl Record for Vote {
    fn path(&self) -> &'static str {
        Self::PATH
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "user_id" => Some(FieldValue::Scalar(self.user_id.into())),
            _ => None,
        }
    }
}

///
/// Achievement
///

#[derive(Clone, Debug)]
pub struct Achievement {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub description: String,
    pub audio: String,
    pub tags: String,
    pub beatmap: Option<Beatmap>,
    pub completions: Vec<Completion>,
    pub comments: Vec<Comment>,
    pub votes: Vec<Vote>,
}

impl Achievement {
    pub const PATH: &'static str = "app::Achievement";

    /// Comma-separated tag membership test, case-insensitive.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .to_lowercase()
            .split(',')
            .any(|t| t.trim() == tag)
    }
}

impl Record for Achievement {
    fn path(&self) -> &'static str {
        Self::PATH
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Scalar(self.id.into())),
            "name" => Some(FieldValue::Scalar(self.name.as_str().into())),
            "category" => Some(FieldValue::Scalar(self.category.as_str().into())),
            "description" => Some(FieldValue::Scalar(self.description.as_str().into())),
            "audio" => Some(FieldValue::Scalar(self.audio.as_str().into())),
            "tags" => Some(FieldValue::Scalar(self.tags.as_str().into())),
            "beatmap" => Some(FieldValue::One(
                self.beatmap.as_ref().map(|b| b as &dyn Record),
            )),
            "completions" => Some(FieldValue::Many(
                self.completions.iter().map(|c| c as &dyn Record).collect(),
            )),
            "completion_count" => {
                Some(FieldValue::Scalar((self.completions.len() as u64).into()))
            }
            "comments" => Some(FieldValue::Many(
                self.comments.iter().map(|c| c as &dyn Record).collect(),
            )),
            "votes" => Some(FieldValue::Many(
                self.votes.iter().map(|v| v as &dyn Record).collect(),
            )),
            _ => None,
        }
    }
}
