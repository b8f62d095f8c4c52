//! Scenario state for review session BDD tests.

use camino::Utf8PathBuf;
use culler::SessionController;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tempfile::TempDir;

/// State shared across steps in a review session scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct ReviewState {
    /// Guard keeping the temporary review directory alive.
    pub(crate) dir: Slot<TempDir>,
    /// UTF-8 path of the review directory.
    pub(crate) directory: Slot<Utf8PathBuf>,
    /// The session controller under test.
    pub(crate) session: Slot<SessionController>,
}

/// Creates a temporary directory containing `count` image files named so
/// that creation order matches lexicographic order.
#[expect(clippy::expect_used, reason = "BDD test fixture; panics are acceptable")]
pub(crate) fn create_image_directory(count: usize) -> (TempDir, Utf8PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("UTF-8 temp dir");
    for index in 0..count {
        std::fs::write(path.join(format!("img_{index:03}.png")), b"png").expect("write image file");
    }
    (dir, path)
}
