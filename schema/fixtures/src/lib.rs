//! Community-domain records and seed data shared by facet test surfaces.
//!
//! The graph mirrors the production application this engine shapes
//! responses for: users play on teams, complete achievements, and staff
//! moderate unreleased achievements through comments and votes. Records
//! arrive fully loaded — relations included — exactly as the query layer
//! would hand them to a handler.

pub mod records;
pub mod seed;

use facet::prelude::*;

///
/// ViewerCtx
///
/// Request-scoped context threaded into predicates and transforms: who is
/// looking, and which players share their team. Replaces the original
/// handlers' habit of closing over ambient request state.
///

#[derive(Clone, Debug, Default)]
pub struct ViewerCtx {
    pub viewer_id: Option<u64>,
    pub team_player_ids: Vec<u64>,
}

impl ViewerCtx {
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_team(&self, player_id: u64) -> bool {
        self.team_player_ids.contains(&player_id)
    }
}

/// Shape registry covering every fixture record, mirroring the production
/// registrations.
#[must_use]
pub fn registry() -> ShapeRegistry<ViewerCtx> {
    let mut registry = ShapeRegistry::new();

    registry
        .register(
            records::User::PATH,
            EntityShape::new([
                "id",
                "username",
                "avatar",
                "cover",
                "is_admin",
                "is_moderator",
            ]),
        )
        .expect("user shape should register");
    registry
        .register(
            records::Beatmap::PATH,
            EntityShape::new(["id", "artist", "version", "title", "cover", "star_rating"]),
        )
        .expect("beatmap shape should register");
    registry
        .register(
            records::Team::PATH,
            EntityShape::new(["id", "name", "icon", "invite", "points"]),
        )
        .expect("team shape should register");
    registry
        .register(records::Player::PATH, EntityShape::new(["id", "user_id"]))
        .expect("player shape should register");
    registry
        .register(
            records::Achievement::PATH,
            EntityShape::new([
                "id",
                "name",
                "category",
                "description",
                "audio",
                "tags",
                "beatmap",
            ]),
        )
        .expect("achievement shape should register");
    registry
        .register(
            records::Completion::PATH,
            EntityShape::new(["time_completed"]),
        )
        .expect("completion shape should register");
    registry
        .register(records::Placement::PATH, EntityShape::new(["value", "place"]))
        .expect("placement shape should register");
    registry
        .register(
            records::Comment::PATH,
            EntityShape::new(["text", "posted_at"]).with_rename("text", "content"),
        )
        .expect("comment shape should register");
    registry
        .register(records::Vote::PATH, EntityShape::new(["user_id"]))
        .expect("vote shape should register");

    registry
}
