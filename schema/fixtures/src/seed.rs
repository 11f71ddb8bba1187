//! Canonical seed graph: two teams, four players, two achievements in
//! moderation-visible state. Timestamps are fixed so rendered output is
//! stable across runs.

use crate::records::*;
use chrono::{DateTime, TimeZone, Utc};

#[must_use]
pub fn ts(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 9, hour, minute, 0).unwrap()
}

#[must_use]
pub fn user(id: u64, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        avatar: format!("https://a.example/{id}"),
        cover: format!("https://c.example/{id}"),
        is_admin: id == 1,
        is_moderator: id == 1,
    }
}

#[must_use]
pub fn player(id: u64, user_id: u64, username: &str) -> Player {
    Player {
        id,
        user: user(user_id, username),
    }
}

/// Team Alpha: alice (admin) and bob.
#[must_use]
pub fn team_alpha() -> Team {
    Team {
        id: 10,
        name: "Alpha".to_string(),
        icon: Some("alpha.png".to_string()),
        invite: "ALPHA-1".to_string(),
        points: 120,
        players: vec![player(101, 1, "alice"), player(102, 2, "bob")],
    }
}

/// Team Beta: cora and dan.
#[must_use]
pub fn team_beta() -> Team {
    Team {
        id: 20,
        name: "Beta".to_string(),
        icon: None,
        invite: "BETA-9".to_string(),
        points: 80,
        players: vec![player(103, 3, "cora"), player(104, 4, "dan")],
    }
}

#[must_use]
pub fn completion(p: Player, hour: u32, place: Option<u64>) -> Completion {
    Completion {
        player: p,
        time_completed: ts(hour, 0),
        placement: place.map(|place| Placement {
            value: 9_000 + place as i64,
            place,
        }),
    }
}

/// Competition-tagged achievement with a beatmap and three completions:
/// alice (team Alpha, place 1), cora (team Beta, place 7), dan (team Beta,
/// unplaced).
#[must_use]
pub fn speed_demon() -> Achievement {
    Achievement {
        id: 1,
        name: "Speed Demon".to_string(),
        category: "skill".to_string(),
        description: "Clear the map above 1.5x rate".to_string(),
        audio: String::new(),
        tags: "competition,speed".to_string(),
        beatmap: Some(Beatmap {
            id: 771,
            artist: "t+pazolite".to_string(),
            version: "Extra".to_string(),
            title: "Oshama Scramble!".to_string(),
            cover: "https://b.example/771".to_string(),
            star_rating: 6.31,
        }),
        completions: vec![
            completion(player(101, 1, "alice"), 10, Some(1)),
            completion(player(103, 3, "cora"), 11, Some(7)),
            completion(player(104, 4, "dan"), 12, None),
        ],
        comments: vec![Comment {
            text: "placement window looks fine".to_string(),
            posted_at: ts(9, 30),
            user: user(1, "alice"),
        }],
        votes: vec![Vote { user_id: 1 }, Vote { user_id: 3 }],
    }
}

/// Untagged achievement with a single off-team, unplaced completion and no
/// beatmap.
#[must_use]
pub fn marathon() -> Achievement {
    Achievement {
        id: 2,
        name: "Marathon".to_string(),
        category: "stamina".to_string(),
        description: "Clear every map in the pool back to back".to_string(),
        audio: String::new(),
        tags: String::new(),
        beatmap: None,
        completions: vec![completion(player(104, 4, "dan"), 14, None)],
        comments: Vec::new(),
        votes: Vec::new(),
    }
}

/// Viewer context for bob, a member of team Alpha.
#[must_use]
pub fn alpha_viewer() -> crate::ViewerCtx {
    crate::ViewerCtx {
        viewer_id: Some(2),
        team_player_ids: vec![101, 102],
    }
}
