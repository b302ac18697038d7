//! Reply providers for the ClawChat gateway.
//!
//! The gateway treats the hosted model as an opaque collaborator: one
//! message in, one reply string (or an error) out.

pub mod mock;
pub mod openrouter;

pub use mock::MockProvider;
pub use openrouter::OpenRouterProvider;
