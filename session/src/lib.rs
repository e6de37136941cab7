pub mod kv;
pub mod model;
pub mod reducer;
pub mod store;
