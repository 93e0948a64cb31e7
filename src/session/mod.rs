//! The session core: phase state machine plus the effectful machine
//! that validates input and drives the serial link.

mod intent;
mod machine;
mod reducer;
mod state;

pub use intent::SessionIntent;
pub use machine::{Flow, SessionMachine};
pub use reducer::SessionReducer;
pub use state::SessionPhase;
