use super::*;

fn page(n: u32, items: Vec<u32>, total: Option<u32>) -> Page<u32> {
    Page { items, page: n, limit: 2, total_pages: total }
}

#[test]
fn begin_next_guards_overlapping_fetches() {
    let mut listing = Listing::<u32>::default();
    assert_eq!(listing.begin_next(), Some(1));
    assert!(listing.is_initial_load());
    assert_eq!(listing.begin_next(), None, "second trigger while loading must be ignored");
    listing.finish(page(1, vec![1, 2], Some(3)));
    assert_eq!(listing.begin_next(), Some(2));
}

#[test]
fn finish_appends_and_tracks_exhaustion() {
    let mut listing = Listing::<u32>::default();
    listing.begin_next();
    listing.finish(page(1, vec![1, 2], Some(2)));
    listing.begin_next();
    listing.finish(page(2, vec![3], Some(2)));
    assert_eq!(listing.items, vec![1, 2, 3]);
    assert!(!listing.has_more);
    assert_eq!(listing.begin_next(), None);
}

#[test]
fn short_page_without_meta_ends_listing() {
    let mut listing = Listing::<u32>::default();
    listing.begin_next();
    listing.finish(page(1, vec![1], None));
    assert!(!listing.has_more);
}

#[test]
fn out_of_order_page_is_dropped() {
    let mut listing = Listing::<u32>::default();
    listing.begin_next();
    listing.finish(page(3, vec![9], Some(5)));
    assert!(listing.items.is_empty());
    assert_eq!(listing.page, 0);
    assert!(!listing.loading_more);
}

#[test]
fn failure_allows_retry_of_same_page() {
    let mut listing = Listing::<u32>::default();
    listing.begin_next();
    listing.fail("offline".to_owned());
    assert_eq!(listing.error.as_deref(), Some("offline"));
    assert_eq!(listing.begin_next(), Some(1));
    assert_eq!(listing.error, None);
}

#[test]
fn empty_result_is_reported() {
    let mut listing = Listing::<u32>::default();
    assert!(!listing.is_empty());
    listing.begin_next();
    listing.finish(page(1, Vec::new(), Some(0)));
    assert!(listing.is_empty());
}

#[test]
fn landing_a_page_reopens_the_gate_for_a_still_visible_sentinel() {
    let mut listing = Listing::<u32>::default();
    assert!(listing.wants_more());
    listing.begin_next();
    assert!(!listing.wants_more(), "closed while page 1 is in flight");
    listing.finish(page(1, vec![1, 2], Some(3)));
    assert!(listing.wants_more(), "page 1 did not exhaust the listing");
    assert_eq!(listing.begin_next(), Some(2));
}

#[test]
fn gate_stays_closed_after_failure_or_last_page() {
    let mut listing = Listing::<u32>::default();
    listing.begin_next();
    listing.fail("offline".to_owned());
    assert!(!listing.wants_more());

    listing.begin_next();
    listing.finish(page(1, vec![1], Some(1)));
    assert!(!listing.wants_more());
}
