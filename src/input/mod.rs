pub mod commit;
pub mod events;

pub use commit::CommitPressTracker;
pub use events::{map_event, InputEvent};
