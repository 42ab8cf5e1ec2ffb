use crate::event::AdsEvent;
use crate::reconcile;

use super::state::AdsState;
use super::view::ViewStatus;

/// Apply one lifecycle event to the state, returning the next state.
///
/// Pure: no IO, no locking, no awaiting. List views are replaced wholesale
/// by their own load events and patched in place by mutation settlements
/// via the reconciliation rules; a view is never touched by another view's
/// failure.
///
/// Mutation `*Started`/`*Failed` arms are deliberate no-ops (the caller
/// receives the failure directly), with one exception: `DeleteStarted`
/// applies the optimistic removal, and a later `DeleteFailed` does not
/// restore the entries.
pub fn reduce(mut state: AdsState, event: AdsEvent) -> AdsState {
    match event {
        AdsEvent::BrowseStarted => {
            state.browse.status = ViewStatus::Loading;
            state.browse.items.clear();
        }
        AdsEvent::BrowseLoaded(page) => {
            state.browse.status = ViewStatus::Loaded;
            state.browse.items = page.ads;
            state.browse.pagination = page.pagination;
        }
        AdsEvent::BrowseFailed(_) => {
            state.browse.status = ViewStatus::Error;
            state.browse.items.clear();
        }

        AdsEvent::MineStarted => {
            state.mine.status = ViewStatus::Loading;
            state.mine.items.clear();
        }
        AdsEvent::MineLoaded(page) => {
            state.mine.status = ViewStatus::Loaded;
            state.mine.items = page.ads;
            state.mine.pagination = page.pagination;
        }
        AdsEvent::MineFailed(_) => {
            state.mine.status = ViewStatus::Error;
            state.mine.items.clear();
        }

        AdsEvent::DetailStarted => {
            state.detail.status = ViewStatus::Loading;
            state.detail.ad = None;
        }
        AdsEvent::DetailLoaded(ad) => {
            state.detail.status = ViewStatus::Loaded;
            state.detail.ad = Some(ad);
        }
        AdsEvent::DetailFailed(_) => {
            state.detail.status = ViewStatus::Error;
            state.detail.ad = None;
        }
        AdsEvent::DetailCleared => {
            state.detail.status = ViewStatus::Idle;
            state.detail.ad = None;
        }

        AdsEvent::Created(ad) => reconcile::prepend_ad(&mut state, ad),
        AdsEvent::Updated(ad) => reconcile::replace_ad(&mut state, &ad),
        AdsEvent::Toggled(toggle) => {
            reconcile::patch_active(&mut state, &toggle.id, toggle.active)
        }
        AdsEvent::DeleteStarted { id } => reconcile::remove_ad(&mut state, &id),

        AdsEvent::CategoriesStarted => {
            state.categories.status = ViewStatus::Loading;
            state.categories.items.clear();
        }
        AdsEvent::CategoriesLoaded(categories) => {
            state.categories.status = ViewStatus::Loaded;
            state.categories.items = categories;
        }
        AdsEvent::CategoriesFailed(_) => {
            state.categories.status = ViewStatus::Error;
            state.categories.items.clear();
        }

        // In-place mutations never force a view-wide loading state, and
        // their failures are surfaced to the caller, not absorbed here.
        AdsEvent::CreateStarted
        | AdsEvent::CreateFailed(_)
        | AdsEvent::UpdateStarted { .. }
        | AdsEvent::UpdateFailed { .. }
        | AdsEvent::ToggleStarted { .. }
        | AdsEvent::ToggleFailed { .. }
        | AdsEvent::Deleted { .. }
        | AdsEvent::DeleteFailed { .. }
        | AdsEvent::UploadStarted
        | AdsEvent::Uploaded { .. }
        | AdsEvent::UploadFailed(_) => {}
    }
    state
}
