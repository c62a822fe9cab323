//! Core modules for TrustGate

pub mod api;
pub mod lifecycle;
pub mod phrases;
pub mod seal;
pub mod store;
pub mod trust;

pub use api::{create_router, create_router_with_state, run_server, AppState};
pub use lifecycle::{start_session, submit_session, StartOutcome, SubmitError, SubmitOutcome};
pub use phrases::{draw_phrase, PHRASES};
pub use seal::seal_digest;
pub use store::{SessionStore, StoreError};
pub use trust::evaluate;
