//! HTTP transport for the TaskDeck service.
//!
//! # Responsibility
//! - Route task CRUD requests to the core task service.
//! - Own process-level wiring: shared store handle, request translation.
//!
//! # Invariants
//! - Domain semantics live in `taskdeck_core`; this crate only translates
//!   between HTTP and service calls.

pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppContext;
