use crate::field::FieldSpec;
use std::collections::HashMap;

/// Segment separator in field references, e.g. `completions.player.user`.
/// Reserved: never valid inside a field name.
pub const SEPARATOR: char = '.';

/// Split a reference into its head segment and the deferred remainder.
///
/// `"a.b.c"` → `("a", Some("b.c"))`, `"a"` → `("a", None)`. A trailing
/// separator yields an empty remainder, which downstream grouping treats as
/// a no-op segment.
#[must_use]
pub fn split(reference: &str) -> (&str, Option<&str>) {
    match reference.split_once(SEPARATOR) {
        Some((head, rest)) => (head, Some(rest)),
        None => (reference, None),
    }
}

///
/// SplitRefs
///
/// Grouped form of a reference list: `now` holds the specs to resolve at
/// this record, `later` holds deferred remainders keyed by head segment.
///

pub(crate) struct SplitRefs<C> {
    pub now: Vec<FieldSpec<C>>,
    pub later: HashMap<String, Vec<FieldSpec<C>>>,
}

impl<C> SplitRefs<C> {
    fn empty() -> Self {
        Self {
            now: Vec::new(),
            later: HashMap::new(),
        }
    }
}

/// Group a reference list into current-level and deferred parts.
///
/// Every dotted reference contributes its remainder to `later[head]`. The
/// head lands in `now` unless `whole_only` is set and the reference has a
/// remainder — exclude lists use that mode, so that excluding `a.b` does
/// not remove field `a` itself. Empty references are skipped; duplicate
/// heads collapse into one `now` entry but keep accumulating remainders.
pub(crate) fn separate<C>(refs: &[FieldSpec<C>], whole_only: bool) -> SplitRefs<C> {
    let mut out = SplitRefs::empty();

    for spec in refs {
        if spec.path().is_empty() {
            continue;
        }

        let (head, remainder) = spec.split_head();
        let deferred = remainder.is_some();
        if let Some(rest) = remainder {
            out.later.entry(head.path().to_string()).or_default().push(rest);
        }

        if whole_only && deferred {
            continue;
        }
        // Duplicate heads collapse, with the same replacement rule the plan
        // builder applies: a non-passive spec wins over a passive head.
        if let Some(seen) = out.now.iter_mut().find(|seen| seen.identity_matches(&head)) {
            if !head.is_passive() {
                *seen = head;
            }
        } else {
            out.now.push(head);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    type Spec = FieldSpec<()>;

    fn specs(refs: &[&str]) -> Vec<Spec> {
        refs.iter().map(|r| Spec::new(*r)).collect()
    }

    #[test]
    fn split_peels_one_segment_at_a_time() {
        assert_eq!(split("a.b.c"), ("a", Some("b.c")));
        assert_eq!(split("a"), ("a", None));
        assert_eq!(split("a."), ("a", Some("")));
    }

    #[test]
    fn duplicate_heads_collapse_in_now_but_accumulate_in_later() {
        let grouped = separate(&specs(&["a.b", "a.c"]), false);

        assert_eq!(grouped.now.len(), 1);
        assert_eq!(grouped.now[0].path(), "a");

        let deferred = grouped.later.get("a").expect("head 'a' should defer");
        let paths: Vec<_> = deferred.iter().map(FieldSpec::path).collect();
        assert_eq!(paths, ["b", "c"]);
    }

    #[test]
    fn whole_only_keeps_dotted_heads_out_of_now() {
        let grouped = separate(&specs(&["invite", "players.user"]), true);

        let now: Vec<_> = grouped.now.iter().map(FieldSpec::path).collect();
        assert_eq!(now, ["invite"]);
        assert!(grouped.later.contains_key("players"));
    }

    #[test]
    fn empty_references_are_ignored() {
        let grouped = separate(&specs(&["", "name"]), false);
        let now: Vec<_> = grouped.now.iter().map(FieldSpec::path).collect();
        assert_eq!(now, ["name"]);
        assert!(grouped.later.is_empty());
    }

    #[test]
    fn non_passive_duplicate_head_wins_over_passive() {
        let refs = vec![
            Spec::new("completions.player"),
            Spec::new("completions").filter(|_, _| true),
        ];
        let grouped = separate(&refs, false);

        assert_eq!(grouped.now.len(), 1);
        assert!(
            !grouped.now[0].is_passive(),
            "filtered spec should replace the passive head split off earlier"
        );
    }

    #[test]
    fn first_seen_order_is_preserved() {
        let grouped = separate(&specs(&["c", "a", "b", "a"]), false);
        let now: Vec<_> = grouped.now.iter().map(FieldSpec::path).collect();
        assert_eq!(now, ["c", "a", "b"]);
    }
}
