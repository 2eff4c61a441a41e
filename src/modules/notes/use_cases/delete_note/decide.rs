// Pure decision function for the two-phase delete.
//
// Idle or Pending(other) + request(id) -> DeleteRequested(id)
// Pending(id)            + request(id) -> NoteDeleted(id)

use crate::modules::notes::core::events::NoteEvent;
use crate::modules::notes::core::state::DeleteConfirmation;

pub fn decide_delete(confirmation: &DeleteConfirmation, id: &str) -> NoteEvent {
    if confirmation.is_pending_for(id) {
        NoteEvent::NoteDeleted { id: id.to_string() }
    } else {
        NoteEvent::DeleteRequested { id: id.to_string() }
    }
}
