//! Listing view-model
//!
//! Holds the last page the server returned plus the active filter, and
//! applies the two filter stages in their required order: species and
//! location narrow the query server-side, the age bucket narrows the
//! returned page client-side on every read of [`ListingView::visible`].
//!
//! A server-side criterion change only marks the view stale; the owner
//! decides when to call [`ListingView::refresh_if_stale`], mirroring an
//! effect loop that re-fetches after filter edits. Changing the age bucket
//! never triggers a fetch.

use crate::api::PetApi;
use crate::error::Result;
use paws_types::{AgeBucket, Pet, PetFilter, SpeciesFilter};

/// Page size the home listing asks for.
pub const HOME_PAGE_LIMIT: u32 = 100;

#[derive(Debug)]
pub struct ListingView {
    filter: PetFilter,
    pets: Vec<Pet>,
    total: u64,
    loading: bool,
    error: Option<String>,
    stale: bool,
}

impl Default for ListingView {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingView {
    /// A fresh view is stale by construction, so the first
    /// `refresh_if_stale` performs the mount fetch.
    pub fn new() -> Self {
        Self {
            filter: PetFilter {
                limit: Some(HOME_PAGE_LIMIT),
                ..PetFilter::default()
            },
            pets: Vec::new(),
            total: 0,
            loading: false,
            error: None,
            stale: true,
        }
    }

    // ── read side ──────────────────────────────────────────────

    pub fn filter(&self) -> &PetFilter {
        &self.filter
    }

    /// Pets of the current page that pass the age bucket, in server order.
    pub fn visible(&self) -> Vec<&Pet> {
        self.pets
            .iter()
            .filter(|pet| self.filter.age.matches(pet.age))
            .collect()
    }

    pub fn result_count(&self) -> usize {
        self.visible().len()
    }

    /// Server-side total for the species/location query, before the age
    /// bucket is applied.
    pub fn server_total(&self) -> u64 {
        self.total
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    // ── filter edits ───────────────────────────────────────────

    pub fn set_species(&mut self, species: SpeciesFilter) {
        if self.filter.species != species {
            self.filter.species = species;
            self.stale = true;
        }
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        let location = location.into();
        if self.filter.location != location {
            self.filter.location = location;
            self.stale = true;
        }
    }

    /// Client-side only; takes effect on the next [`ListingView::visible`]
    /// without touching the server.
    pub fn set_age_bucket(&mut self, bucket: AgeBucket) {
        self.filter.age = bucket;
    }

    /// Page window for the next fetch. The home view keeps the default
    /// window; embedders paginating the listing move it explicitly.
    pub fn set_page_window(&mut self, limit: Option<u32>, skip: Option<u32>) {
        if self.filter.limit != limit || self.filter.skip != skip {
            self.filter.limit = limit;
            self.filter.skip = skip;
            self.stale = true;
        }
    }

    /// Back to the unfiltered listing. Stale only if a server-side
    /// criterion actually changed.
    pub fn clear_filters(&mut self) {
        self.set_species(SpeciesFilter::All);
        self.set_location("");
        self.set_age_bucket(AgeBucket::All);
    }

    // ── fetching ───────────────────────────────────────────────

    /// Fetch the current page if a server-side criterion changed since the
    /// last fetch (or nothing was ever fetched).
    pub async fn refresh_if_stale(&mut self, api: &dyn PetApi) -> Result<()> {
        if self.stale {
            self.refresh(api).await
        } else {
            Ok(())
        }
    }

    /// Unconditionally fetch the current page. On failure the previous
    /// page stays on screen and the message is kept for display.
    pub async fn refresh(&mut self, api: &dyn PetApi) -> Result<()> {
        self.loading = true;
        let result = api.list_pets(&self.filter).await;
        self.loading = false;

        match result {
            Ok(page) => {
                self.pets = page.pets;
                self.total = page.total;
                self.error = None;
                self.stale = false;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.message().to_string());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{page, pet, StubApi};
    use crate::error::ApiError;

    #[tokio::test]
    async fn mount_fetch_happens_once() {
        let api = StubApi::new();
        api.push_page(Ok(page(vec![pet("p-1", 2)])));
        let mut view = ListingView::new();

        view.refresh_if_stale(&api).await.unwrap();
        view.refresh_if_stale(&api).await.unwrap();

        assert_eq!(api.calls(), vec!["list_pets"]);
        assert_eq!(view.result_count(), 1);
        assert!(!view.is_stale());
    }

    #[tokio::test]
    async fn species_change_triggers_refetch() {
        let api = StubApi::new();
        api.push_page(Ok(page(vec![pet("p-1", 2), pet("p-2", 4)])));
        api.push_page(Ok(page(vec![pet("p-2", 4)])));
        let mut view = ListingView::new();
        view.refresh_if_stale(&api).await.unwrap();

        view.set_species(SpeciesFilter::Dog);
        assert!(view.is_stale());
        view.refresh_if_stale(&api).await.unwrap();

        assert_eq!(api.calls(), vec!["list_pets", "list_pets"]);
        assert_eq!(view.result_count(), 1);
    }

    #[tokio::test]
    async fn same_species_is_not_a_change() {
        let api = StubApi::new();
        api.push_page(Ok(page(vec![])));
        let mut view = ListingView::new();
        view.refresh_if_stale(&api).await.unwrap();

        view.set_species(SpeciesFilter::All);
        assert!(!view.is_stale());
    }

    #[tokio::test]
    async fn age_bucket_filters_locally_without_refetch() {
        // Two dogs aged 1 and 8; the 0-2 bucket keeps only the age-1 one.
        let api = StubApi::new();
        api.push_page(Ok(page(vec![pet("p-1", 1), pet("p-2", 8)])));
        let mut view = ListingView::new();
        view.refresh_if_stale(&api).await.unwrap();

        view.set_age_bucket(AgeBucket::ZeroToTwo);
        assert!(!view.is_stale());

        let visible = view.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "p-1");
        assert_eq!(view.server_total(), 2);
        assert_eq!(api.calls(), vec!["list_pets"]);
    }

    #[tokio::test]
    async fn clear_filters_resets_and_marks_stale_only_on_change() {
        let api = StubApi::new();
        api.push_page(Ok(page(vec![])));
        let mut view = ListingView::new();
        view.refresh_if_stale(&api).await.unwrap();

        // Only the age bucket set: clearing must not force a refetch.
        view.set_age_bucket(AgeBucket::SixPlus);
        view.clear_filters();
        assert!(!view.is_stale());

        view.set_location("Porto");
        view.clear_filters();
        assert!(view.is_stale());
        assert_eq!(view.filter().location, "");
        assert_eq!(view.filter().species, SpeciesFilter::All);
        assert_eq!(view.filter().age, AgeBucket::All);
    }

    #[tokio::test]
    async fn failed_fetch_keeps_previous_page_and_records_message() {
        let api = StubApi::new();
        api.push_page(Ok(page(vec![pet("p-1", 2)])));
        api.push_page(Err(ApiError::Network("connection refused".into())));
        let mut view = ListingView::new();
        view.refresh_if_stale(&api).await.unwrap();

        view.set_location("Porto");
        let result = view.refresh_if_stale(&api).await;
        assert!(result.is_err());
        assert_eq!(view.error(), Some("connection refused"));
        assert_eq!(view.result_count(), 1);
        assert!(view.is_stale());
        assert!(!view.loading());
    }

    #[tokio::test]
    async fn home_page_limit_is_requested() {
        let view = ListingView::new();
        assert_eq!(view.filter().limit, Some(HOME_PAGE_LIMIT));
        assert!(view
            .filter()
            .server_query()
            .contains(&("limit", "100".to_string())));
    }
}
