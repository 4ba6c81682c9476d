mod dashboard;
mod error;

pub use dashboard::DashboardPage;
pub use error::ErrorPage;
