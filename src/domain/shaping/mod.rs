pub mod aggregate;
pub mod ratio;
pub mod units;

pub use aggregate::{skill_series, task_series, total_xp};
pub use ratio::audit_ratio;
pub use units::{to_human_size, to_kilobytes};
