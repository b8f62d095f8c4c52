//! Support modules for the review session BDD tests.

pub(crate) mod state;

pub(crate) use state::ReviewState;
