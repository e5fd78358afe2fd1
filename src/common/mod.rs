pub mod http;
mod state;

pub use state::DashboardState;
