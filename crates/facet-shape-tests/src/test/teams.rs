//! Team page scenarios: roster expansion for members, invite redaction for
//! everyone else.

use crate::fixtures::{ViewerCtx, registry, seed};
use facet::prelude::*;

#[test]
fn members_see_the_full_roster_with_users() {
    let registry = registry();
    let viewer = seed::alpha_viewer();
    let projector = Projector::new(&registry, &viewer);

    let data = projector
        .project(&seed::team_alpha(), &[FieldSpec::new("players.user")], &[])
        .expect("team should project");

    assert_eq!(
        data.get("invite").and_then(Projected::as_str),
        Some("ALPHA-1")
    );
    let players = data
        .get("players")
        .and_then(Projected::as_list)
        .expect("players should project as a list");
    assert_eq!(players.len(), 2);
    assert_eq!(
        players[0]
            .get("user")
            .and_then(|user| user.get("username"))
            .and_then(Projected::as_str),
        Some("alice")
    );
    assert_eq!(
        players[1].get("user_id").and_then(Projected::as_u64),
        Some(2)
    );
}

#[test]
fn outsiders_never_receive_the_invite() {
    let registry = registry();
    let viewer = ViewerCtx::anonymous();
    let projector = Projector::new(&registry, &viewer);

    let data = projector
        .project(
            &seed::team_beta(),
            &[FieldSpec::new("players.user")],
            &["invite"],
        )
        .expect("team should project");

    assert!(!data.contains_key("invite"));
    assert_eq!(data.get("name").and_then(Projected::as_str), Some("Beta"));
    assert!(
        data.get("icon").is_some_and(Projected::is_null),
        "missing icon projects as null, not as an absent key"
    );
    assert_eq!(data.get("points").and_then(Projected::as_u64), Some(80));
}

#[test]
fn roster_excludes_thread_into_the_user() {
    let registry = registry();
    let viewer = seed::alpha_viewer();
    let projector = Projector::new(&registry, &viewer);

    let data = projector
        .project(
            &seed::team_alpha(),
            &[FieldSpec::new("players.user")],
            &["players.user.avatar", "players.user.cover"],
        )
        .expect("team should project");

    let players = data
        .get("players")
        .and_then(Projected::as_list)
        .expect("players should project as a list");
    let user = players[0].get("user").expect("user relation included");
    assert_eq!(
        user.get("username").and_then(Projected::as_str),
        Some("alice")
    );
    assert!(user.get("avatar").is_none());
    assert!(user.get("cover").is_none());
    assert!(user.get("is_admin").is_some());
}
