//! Support modules for the ledger persistence BDD tests.

pub(crate) mod state;

pub(crate) use state::PersistenceState;
