pub mod dashboard;
pub mod services;

pub use dashboard::Dashboard;
