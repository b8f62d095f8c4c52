//! Behavioural tests for batch review sessions.

#[path = "review_session_bdd/mod.rs"]
mod review_session_bdd_support;

use culler::{Ledger, Score, SessionController, SessionState};
use review_session_bdd_support::ReviewState;
use review_session_bdd_support::state::create_image_directory;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[fixture]
fn review_state() -> ReviewState {
    ReviewState::default()
}

// Given steps

#[given("a directory with {count:usize} image files")]
fn given_directory_with_files(review_state: &ReviewState, count: usize) {
    let (dir, path) = create_image_directory(count);
    review_state.dir.set(dir);
    review_state.directory.set(path);
}

#[given("a persisted ledger marking every file reviewed")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn given_fully_reviewed_ledger(review_state: &ReviewState) {
    let directory = review_state
        .directory
        .with_ref(Clone::clone)
        .expect("directory not initialised");

    let mut ledger = Ledger::initialise(&directory).expect("initialise ledger");
    let batch = ledger.unreviewed_batch(ledger.len());
    ledger.commit_batch(&batch);
    ledger.persist(&directory).expect("persist ledger");
}

#[given("a review session with a {rows:usize}x{cols:usize} grid")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn given_review_session(review_state: &ReviewState, rows: usize, cols: usize) {
    let directory = review_state
        .directory
        .with_ref(Clone::clone)
        .expect("directory not initialised");

    let ledger = Ledger::initialise(&directory).expect("initialise ledger");
    review_state
        .session
        .set(SessionController::start(ledger, directory, rows, cols));
}

// When steps

#[when("item {id:usize} is toggled")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn when_item_toggled(review_state: &ReviewState, id: usize) {
    review_state
        .session
        .with_mut(|session| {
            session.toggle_item(id);
        })
        .expect("session not initialised");
}

#[when("the session advances")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn when_session_advances(review_state: &ReviewState) {
    review_state
        .session
        .with_mut(|session| {
            session.advance();
        })
        .expect("session not initialised");
}

#[when("the session exits")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn when_session_exits(review_state: &ReviewState) {
    review_state
        .session
        .with_mut(SessionController::exit)
        .expect("session not initialised")
        .expect("exit persists the ledger");
}

// Then steps

#[then("ledger row {id:usize} is flagged")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn then_row_flagged(review_state: &ReviewState, id: usize) {
    let score = review_state
        .session
        .with_ref(|session| session.ledger().row(id).map(|row| row.score))
        .expect("session not initialised")
        .expect("row exists");

    assert_eq!(score, Score::Flagged, "row {id} should be flagged");
}

#[then("ledger row {id:usize} is kept")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn then_row_kept(review_state: &ReviewState, id: usize) {
    let score = review_state
        .session
        .with_ref(|session| session.ledger().row(id).map(|row| row.score))
        .expect("session not initialised")
        .expect("row exists");

    assert_eq!(score, Score::Keep, "row {id} should be kept");
}

#[then("the current batch contains rows {first:usize} and {second:usize}")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn then_batch_contains(review_state: &ReviewState, first: usize, second: usize) {
    let ids: Vec<usize> = review_state
        .session
        .with_ref(|session| session.batch().iter().map(|item| item.id).collect())
        .expect("session not initialised");

    assert_eq!(ids, vec![first, second], "batch row ids mismatch");
}

#[then("the persisted ledger lists {total:usize} rows with {reviewed:usize} reviewed and {flagged:usize} flagged")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn then_persisted_ledger_counts(
    review_state: &ReviewState,
    total: usize,
    reviewed: usize,
    flagged: usize,
) {
    let directory = review_state
        .directory
        .with_ref(Clone::clone)
        .expect("directory not initialised");

    let reloaded = Ledger::initialise(&directory).expect("reload ledger");
    assert_eq!(reloaded.len(), total, "total row count mismatch");
    assert_eq!(reloaded.reviewed_count(), reviewed, "reviewed count mismatch");
    assert_eq!(reloaded.flagged_count(), flagged, "flagged count mismatch");
}

#[then("the session is done")]
#[expect(clippy::expect_used, reason = "BDD test step; panics are acceptable")]
fn then_session_done(review_state: &ReviewState) {
    let state = review_state
        .session
        .with_ref(SessionController::state)
        .expect("session not initialised");

    assert_eq!(state, SessionState::Done, "session should be done");
}

// Scenario bindings

#[scenario(path = "tests/features/review_session.feature", index = 0)]
fn toggling_and_advancing_applies_decisions(review_state: ReviewState) {
    let _ = review_state;
}

#[scenario(path = "tests/features/review_session.feature", index = 1)]
fn exiting_commits_and_persists(review_state: ReviewState) {
    let _ = review_state;
}

#[scenario(path = "tests/features/review_session.feature", index = 2)]
fn resuming_fully_reviewed_directory(review_state: ReviewState) {
    let _ = review_state;
}
