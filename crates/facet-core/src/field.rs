use crate::{path, traits::Record, value::Projected};
use std::{fmt, sync::Arc};

/// Inclusion predicate, evaluated against the record whose field list
/// carries the descriptor (never against the related value).
pub type Condition<C> = Arc<dyn Fn(&dyn Record, &C) -> bool + Send + Sync>;

/// Per-item predicate applied to raw collection members before projection.
pub type ItemFilter<C> = Arc<dyn Fn(&dyn Record, &C) -> bool + Send + Sync>;

/// Per-item predicate applied to already-projected collection members.
pub type PostFilter<C> = Arc<dyn Fn(&Projected, &C) -> bool + Send + Sync>;

/// Replacement applied to the fully resolved value.
pub type Transform<C> = Arc<dyn Fn(Projected, &C) -> Projected + Send + Sync>;

///
/// FieldSpec
///
/// Immutable description of one projected field: source path, optional
/// output-key override, and the optional gating/filter/transform behavior.
/// A spec with none of the optional behavior is *passive* and
/// interchangeable with a bare field reference.
///
/// Identity is the `(path, key override)` pair; see [`identity_matches`]
/// (`FieldSpec::identity_matches`) for how the plan builder uses it.
///

pub struct FieldSpec<C> {
    path: String,
    key: Option<String>,
    condition: Option<Condition<C>>,
    filter: Option<ItemFilter<C>>,
    post_filter: Option<PostFilter<C>>,
    transform: Option<Transform<C>>,
}

impl<C> FieldSpec<C> {
    #[must_use]
    pub fn new(field_path: impl Into<String>) -> Self {
        Self {
            path: field_path.into(),
            key: None,
            condition: None,
            filter: None,
            post_filter: None,
            transform: None,
        }
    }

    //
    // Builders
    //

    /// Override the output key (source path stays the lookup name).
    #[must_use]
    pub fn keyed(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Gate the whole field on a predicate over the carrying record.
    #[must_use]
    pub fn when<F>(self, condition: F) -> Self
    where
        F: Fn(&dyn Record, &C) -> bool + Send + Sync + 'static,
    {
        self.when_shared(Arc::new(condition))
    }

    /// Gate on an already-shared predicate. Clones of one `Arc` count as the
    /// same predicate for condition memoization.
    #[must_use]
    pub fn when_shared(mut self, condition: Condition<C>) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Drop raw collection members that fail the predicate before they are
    /// projected.
    #[must_use]
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&dyn Record, &C) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Arc::new(filter));
        self
    }

    /// Drop already-projected collection members that fail the predicate.
    #[must_use]
    pub fn post_filter<F>(mut self, post_filter: F) -> Self
    where
        F: Fn(&Projected, &C) -> bool + Send + Sync + 'static,
    {
        self.post_filter = Some(Arc::new(post_filter));
        self
    }

    /// Replace the resolved value, e.g. to derive a count or a membership
    /// flag from a projected collection.
    #[must_use]
    pub fn transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(Projected, &C) -> Projected + Send + Sync + 'static,
    {
        self.transform = Some(Arc::new(transform));
        self
    }

    //
    // Accessors
    //

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub(crate) const fn condition(&self) -> Option<&Condition<C>> {
        self.condition.as_ref()
    }

    pub(crate) const fn item_filter(&self) -> Option<&ItemFilter<C>> {
        self.filter.as_ref()
    }

    pub(crate) const fn post_item_filter(&self) -> Option<&PostFilter<C>> {
        self.post_filter.as_ref()
    }

    pub(crate) const fn post_transform(&self) -> Option<&Transform<C>> {
        self.transform.as_ref()
    }

    /// True when the spec carries no behavior and is pure passthrough.
    #[must_use]
    pub const fn is_passive(&self) -> bool {
        self.condition.is_none()
            && self.filter.is_none()
            && self.post_filter.is_none()
            && self.transform.is_none()
    }

    /// Same-field test used for include replacement: source path and
    /// output-key override both match.
    #[must_use]
    pub fn identity_matches(&self, other: &Self) -> bool {
        self.path == other.path && self.key == other.key
    }

    /// Split off the head segment. The head is a nameless passive spec; the
    /// remainder (if any) keeps the key override and all behavior, deferred
    /// to the nested projection.
    pub(crate) fn split_head(&self) -> (Self, Option<Self>) {
        match path::split(&self.path) {
            (_, None) => (self.clone(), None),
            (head, Some(rest)) => {
                let mut remainder = self.clone();
                remainder.path = rest.to_string();
                (Self::new(head), Some(remainder))
            }
        }
    }
}

// Manual impl: `Arc<dyn Fn>` is always cloneable, no `C: Clone` needed.
impl<C> Clone for FieldSpec<C> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            key: self.key.clone(),
            condition: self.condition.clone(),
            filter: self.filter.clone(),
            post_filter: self.post_filter.clone(),
            transform: self.transform.clone(),
        }
    }
}

impl<C> fmt::Debug for FieldSpec<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("path", &self.path)
            .field("key", &self.key)
            .field("passive", &self.is_passive())
            .finish()
    }
}

impl<C> From<&str> for FieldSpec<C> {
    fn from(reference: &str) -> Self {
        Self::new(reference)
    }
}

impl<C> From<String> for FieldSpec<C> {
    fn from(reference: String) -> Self {
        Self::new(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Spec = FieldSpec<()>;

    #[test]
    fn passivity_flips_with_any_behavior() {
        assert!(Spec::new("name").is_passive());
        assert!(Spec::new("name").keyed("label").is_passive());
        assert!(!Spec::new("name").when(|_, _| true).is_passive());
        assert!(!Spec::new("name").filter(|_, _| true).is_passive());
        assert!(!Spec::new("name").post_filter(|_, _| true).is_passive());
        assert!(!Spec::new("name").transform(|v, _| v).is_passive());
    }

    #[test]
    fn identity_compares_path_and_key_override() {
        let bare = Spec::new("votes");
        let has_voted = Spec::new("votes").keyed("has_voted");
        let vote_count = Spec::new("votes").keyed("vote_count");

        assert!(bare.identity_matches(&Spec::new("votes")));
        assert!(!bare.identity_matches(&has_voted));
        assert!(!has_voted.identity_matches(&vote_count));
        assert!(has_voted.identity_matches(&Spec::new("votes").keyed("has_voted")));
    }

    #[test]
    fn split_head_defers_behavior_to_the_remainder() {
        let spec = Spec::new("completions.player")
            .keyed("visible_player")
            .when(|_, _| false);

        let (head, remainder) = spec.split_head();
        assert_eq!(head.path(), "completions");
        assert_eq!(head.key(), None);
        assert!(head.is_passive());

        let remainder = remainder.expect("dotted reference should split");
        assert_eq!(remainder.path(), "player");
        assert_eq!(remainder.key(), Some("visible_player"));
        assert!(!remainder.is_passive());
    }

    #[test]
    fn single_segment_spec_does_not_split() {
        let (head, remainder) = Spec::new("points").split_head();
        assert_eq!(head.path(), "points");
        assert!(remainder.is_none());
    }
}
