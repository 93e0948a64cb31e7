//! State-machine primitives.
//!
//! Unidirectional flow: events are validated into intents, intents are
//! reduced into the next state, and all side effects happen around the
//! dispatch — never inside the reducer.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;
