//! Quiz session core: state machine, grading, timer and render snapshots.

pub mod grading;
pub mod session;
pub mod snapshot;
pub mod timer;

pub use session::{Phase, QuizSession};
pub use snapshot::SessionSnapshot;
pub use timer::{TimerCycle, TokioTimer};
