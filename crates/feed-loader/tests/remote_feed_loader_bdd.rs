//! Behavioural tests for remote feed loading.
//!
//! These tests validate the loader against Gherkin scenarios covering request
//! issuance and outcome classification.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use feed_loader::domain::ports::{HttpClient, HttpClientError, HttpResponse};
use feed_loader::test_support::fixtures::{FeedItemFixture, items_json};
use feed_loader::{FeedItem, FeedLoader, LoadError, LoadResult, RemoteFeedLoader};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use tokio::runtime::Builder;
use url::Url;
use uuid::Uuid;

// ============================================================================
// Test doubles and fixtures
// ============================================================================

const FEED_URL: &str = "https://a-given-url.test/feed";

/// HTTP client answering requests from a scripted queue.
#[derive(Default)]
struct ScriptedHttpClient {
    scripted: Mutex<VecDeque<Result<HttpResponse, HttpClientError>>>,
    requested: Mutex<Vec<Url>>,
}

impl ScriptedHttpClient {
    fn push(&self, outcome: Result<HttpResponse, HttpClientError>) {
        self.scripted
            .lock()
            .expect("script mutex")
            .push_back(outcome);
    }

    fn requested_urls(&self) -> Vec<Url> {
        self.requested.lock().expect("requests mutex").clone()
    }
}

#[async_trait]
impl HttpClient for ScriptedHttpClient {
    async fn get(&self, url: &Url) -> Result<HttpResponse, HttpClientError> {
        self.requested
            .lock()
            .expect("requests mutex")
            .push(url.clone());
        self.scripted
            .lock()
            .expect("script mutex")
            .pop_front()
            .unwrap_or_else(|| Err(HttpClientError::transport("script exhausted unexpectedly")))
    }
}

/// Test world holding the loader, its transport, and observed outcomes.
#[derive(Default, ScenarioState)]
struct FeedLoaderWorld {
    client: Slot<Arc<ScriptedHttpClient>>,
    loader: Slot<Arc<RemoteFeedLoader<ScriptedHttpClient>>>,
    served_items: Slot<Vec<FeedItem>>,
    results: Slot<Vec<LoadResult>>,
}

impl FeedLoaderWorld {
    fn client(&self) -> Arc<ScriptedHttpClient> {
        self.client.get().expect("client should be set")
    }

    fn results(&self) -> Vec<LoadResult> {
        self.results.get().expect("results should be recorded")
    }

    fn single_result(&self) -> LoadResult {
        let results = self.results();
        assert_eq!(results.len(), 1, "expected exactly one load result");
        results.into_iter().next().expect("one result")
    }
}

#[fixture]
fn world() -> FeedLoaderWorld {
    FeedLoaderWorld::default()
}

fn image_url(name: &str) -> Url {
    Url::parse(&format!("https://cdn.example.test/{name}.png")).expect("fixture url")
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a feed loader for the feed URL")]
fn a_feed_loader_for_the_feed_url(world: &FeedLoaderWorld) {
    let client = Arc::new(ScriptedHttpClient::default());
    let url = Url::parse(FEED_URL).expect("fixture url");
    let loader = RemoteFeedLoader::new(url, Arc::clone(&client));
    world.client.set(client);
    world.loader.set(Arc::new(loader));
}

#[given("the transport fails")]
fn the_transport_fails(world: &FeedLoaderWorld) {
    world
        .client()
        .push(Err(HttpClientError::transport("no connectivity")));
}

#[given("the transport answers status {status} with an empty item list")]
fn the_transport_answers_with_an_empty_item_list(world: &FeedLoaderWorld, status: u16) {
    world
        .client()
        .push(Ok(HttpResponse::new(status, items_json(&[]))));
}

#[given("the transport answers status {status} with two valid items")]
fn the_transport_answers_with_two_valid_items(world: &FeedLoaderWorld, status: u16) {
    let (first, first_json) = FeedItemFixture::new(Uuid::new_v4(), image_url("first"))
        .with_explicit_nulls()
        .build();
    let (second, second_json) = FeedItemFixture::new(Uuid::new_v4(), image_url("second"))
        .with_description("a description")
        .with_location("a location")
        .build();
    world.client().push(Ok(HttpResponse::new(
        status,
        items_json(&[first_json, second_json]),
    )));
    world.served_items.set(vec![first, second]);
}

#[given("the transport answers status 200 with a malformed body")]
fn the_transport_answers_with_a_malformed_body(world: &FeedLoaderWorld) {
    world
        .client()
        .push(Ok(HttpResponse::new(200, "invalid json")));
}

// ============================================================================
// When steps
// ============================================================================

fn load_times(world: &FeedLoaderWorld, count: usize) {
    let loader = world.loader.get().expect("loader should be set");
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("create runtime");
    let results = runtime.block_on(async {
        let mut results = Vec::with_capacity(count);
        for _ in 0..count {
            results.push(loader.load().await);
        }
        results
    });
    world.results.set(results);
}

#[when("the feed is loaded once")]
fn the_feed_is_loaded_once(world: &FeedLoaderWorld) {
    load_times(world, 1);
}

#[when("the feed is loaded {count} times")]
fn the_feed_is_loaded_times(world: &FeedLoaderWorld, count: usize) {
    load_times(world, count);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("no request has been issued")]
fn no_request_has_been_issued(world: &FeedLoaderWorld) {
    assert!(world.client().requested_urls().is_empty());
}

#[then("the feed URL was requested {count} times")]
fn the_feed_url_was_requested_times(world: &FeedLoaderWorld, count: usize) {
    let url = Url::parse(FEED_URL).expect("fixture url");
    assert_eq!(world.client().requested_urls(), vec![url; count]);
}

#[then("every load produced exactly one result")]
fn every_load_produced_exactly_one_result(world: &FeedLoaderWorld) {
    let requests = world.client().requested_urls().len();
    assert_eq!(world.results().len(), requests);
}

#[then("the load fails with a connectivity error")]
fn the_load_fails_with_a_connectivity_error(world: &FeedLoaderWorld) {
    assert_eq!(world.single_result(), Err(LoadError::Connectivity));
}

#[then("the load fails with an invalid data error")]
fn the_load_fails_with_an_invalid_data_error(world: &FeedLoaderWorld) {
    assert_eq!(world.single_result(), Err(LoadError::InvalidData));
}

#[then("the load succeeds with no items")]
fn the_load_succeeds_with_no_items(world: &FeedLoaderWorld) {
    assert_eq!(world.single_result(), Ok(Vec::new()));
}

#[then("the load succeeds with the served items in order")]
fn the_load_succeeds_with_the_served_items_in_order(world: &FeedLoaderWorld) {
    let served = world.served_items.get().expect("served items should be set");
    assert_eq!(world.single_result(), Ok(served));
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/remote_feed_loader.feature",
    name = "Constructing a loader issues no request"
)]
fn constructing_a_loader_issues_no_request(world: FeedLoaderWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/remote_feed_loader.feature",
    name = "Each load issues its own request"
)]
fn each_load_issues_its_own_request(world: FeedLoaderWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/remote_feed_loader.feature",
    name = "Transport failure surfaces as a connectivity error"
)]
fn transport_failure_surfaces_as_a_connectivity_error(world: FeedLoaderWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/remote_feed_loader.feature",
    name = "Non-200 status surfaces as invalid data"
)]
fn non_200_status_surfaces_as_invalid_data(world: FeedLoaderWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/remote_feed_loader.feature",
    name = "Malformed body surfaces as invalid data"
)]
fn malformed_body_surfaces_as_invalid_data(world: FeedLoaderWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/remote_feed_loader.feature",
    name = "Empty item list loads successfully"
)]
fn empty_item_list_loads_successfully(world: FeedLoaderWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/remote_feed_loader.feature",
    name = "Valid items load in payload order"
)]
fn valid_items_load_in_payload_order(world: FeedLoaderWorld) {
    drop(world);
}
