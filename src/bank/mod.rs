pub mod avatar;
pub mod mock;
pub mod models;
