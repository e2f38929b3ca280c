pub mod lifetime;
pub mod scheduler;
