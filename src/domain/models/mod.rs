pub mod audit;
pub mod chart;
pub mod profile;
pub mod session;
pub mod size;
pub mod transaction;
