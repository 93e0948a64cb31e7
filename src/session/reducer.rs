//! Pure phase transitions.

use crate::fsm::Reducer;

use super::intent::SessionIntent;
use super::state::SessionPhase;

/// Reducer for session phase transitions.
///
/// Pure function — opening ports, applying baud rates and printing are
/// all handled by the machine around the dispatch call. An intent the
/// current phase does not accept leaves the phase unchanged.
pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionPhase;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SessionIntent::OfferPorts { candidates } => match state {
                SessionPhase::Initializing => {
                    SessionPhase::AwaitingPortSelection { candidates }
                }
                other => other,
            },

            SessionIntent::ChannelOpened => match state {
                SessionPhase::AwaitingPortSelection { .. } => SessionPhase::AwaitingBaudRate,
                other => other,
            },

            SessionIntent::BaudRateApplied => match state {
                SessionPhase::AwaitingBaudRate => SessionPhase::Interactive,
                other => other,
            },
        }
    }
}
