pub mod controller;
pub mod messages;
pub mod sequence;
pub mod state;
pub mod timer;
pub mod worker;

// Re-export key components
pub use controller::TabController;
pub use messages::{LoadJob, LoadOrigin, LoadRequest, LoadResult, Payload};
pub use sequence::{RequestId, RequestSequencer};
pub use state::ViewState;
pub use timer::RefreshTimer;
