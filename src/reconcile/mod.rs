//! Cross-view reconciliation rules.
//!
//! A single ad can be held by `browse`, `mine`, and `detail` at the same
//! time. Whenever a mutation settles, these helpers bring every copy of
//! that ad to the same value within one reducer step, so no view keeps
//! stale field state after a confirmed change elsewhere.
//!
//! Rules:
//! - create prepends to the head of both list views, regardless of the
//!   views' server-side sort order; pagination totals are left untouched
//! - full update replaces by id wherever the id is present
//! - toggle patches only the `active` flag, leaving all other fields as-is
//! - delete removes from the list views at request start (optimistic) and
//!   never auto-clears `detail`

use crate::model::Ad;
use crate::store::AdsState;

/// Insert a freshly created ad at the head of `browse` and `mine`.
///
/// Totals in the pagination descriptors are intentionally not bumped; they
/// stay stale until the next full list refresh.
pub fn prepend_ad(state: &mut AdsState, ad: Ad) {
    state.browse.items.insert(0, ad.clone());
    state.mine.items.insert(0, ad);
}

/// Replace every copy of `ad` (matched by id) wholesale. Views that do not
/// hold the id are untouched.
pub fn replace_ad(state: &mut AdsState, ad: &Ad) {
    for view in [&mut state.browse, &mut state.mine] {
        if let Some(existing) = view.items.iter_mut().find(|a| a.id == ad.id) {
            *existing = ad.clone();
        }
    }
    if let Some(detail) = &mut state.detail.ad {
        if detail.id == ad.id {
            *detail = ad.clone();
        }
    }
}

/// Overwrite only the `active` flag on every copy of the ad.
pub fn patch_active(state: &mut AdsState, id: &str, active: bool) {
    for view in [&mut state.browse, &mut state.mine] {
        if let Some(existing) = view.items.iter_mut().find(|a| a.id == id) {
            existing.active = active;
        }
    }
    if let Some(detail) = &mut state.detail.ad {
        if detail.id == id {
            detail.active = active;
        }
    }
}

/// Drop the ad from both list views. `detail` is left alone; the caller
/// navigates away from a deleted ad instead.
pub fn remove_ad(state: &mut AdsState, id: &str) {
    state.browse.items.retain(|a| a.id != id);
    state.mine.items.retain(|a| a.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Ad, AdOwner, Pagination};
    use crate::store::{AdsState, ViewStatus};
    use chrono::Utc;

    fn ad(id: &str, title: &str) -> Ad {
        Ad {
            id: id.to_string(),
            title: title.to_string(),
            description: "A description long enough to be valid.".to_string(),
            price: 50.0,
            location: "Krakow".to_string(),
            category: Some("home".to_string()),
            photos: Vec::new(),
            owner: AdOwner {
                id: "u1".to_string(),
                name: "Jan".to_string(),
                avatar_url: None,
            },
            active: true,
            created_at: Utc::now(),
        }
    }

    fn populated_state() -> AdsState {
        let mut state = AdsState::default();
        state.browse.items = vec![ad("a1", "First"), ad("a2", "Second")];
        state.browse.status = ViewStatus::Loaded;
        state.mine.items = vec![ad("a1", "First")];
        state.mine.status = ViewStatus::Loaded;
        state.detail.ad = Some(ad("a1", "First"));
        state.detail.status = ViewStatus::Loaded;
        state
    }

    #[test]
    fn prepend_goes_to_both_heads() {
        let mut state = populated_state();
        state.browse.pagination = Pagination {
            current: 1,
            pages: 3,
            total: 30,
        };
        prepend_ad(&mut state, ad("a3", "Third"));

        assert_eq!(state.browse.items[0].id, "a3");
        assert_eq!(state.mine.items[0].id, "a3");
        // totals stay stale until the next list refresh
        assert_eq!(state.browse.pagination.total, 30);
    }

    #[test]
    fn replace_touches_every_copy_and_nothing_else() {
        let mut state = populated_state();
        let mut updated = ad("a1", "Renamed");
        updated.price = 75.0;
        replace_ad(&mut state, &updated);

        assert_eq!(state.browse.items[0].title, "Renamed");
        assert_eq!(state.mine.items[0].title, "Renamed");
        assert_eq!(state.detail.ad.as_ref().unwrap().price, 75.0);
        // unrelated entry untouched
        assert_eq!(state.browse.items[1].title, "Second");
    }

    #[test]
    fn replace_skips_views_without_the_id() {
        let mut state = populated_state();
        state.detail.ad = Some(ad("a2", "Second"));
        replace_ad(&mut state, &ad("a1", "Renamed"));
        assert_eq!(state.detail.ad.as_ref().unwrap().title, "Second");
    }

    #[test]
    fn patch_active_leaves_other_fields_alone() {
        let mut state = populated_state();
        let before = state.browse.items[0].clone();
        patch_active(&mut state, "a1", false);

        let after = &state.browse.items[0];
        assert!(!after.active);
        assert_eq!(after.title, before.title);
        assert_eq!(after.price, before.price);
        assert_eq!(after.photos, before.photos);
        assert!(!state.mine.items[0].active);
        assert!(!state.detail.ad.as_ref().unwrap().active);
    }

    #[test]
    fn remove_spares_detail() {
        let mut state = populated_state();
        remove_ad(&mut state, "a1");

        assert!(state.browse.items.iter().all(|a| a.id != "a1"));
        assert!(state.mine.items.is_empty());
        assert!(state.detail.ad.is_some());
    }
}
