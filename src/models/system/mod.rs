pub mod entities;
pub mod responses;

pub use entities::AppStartTime;
