pub mod cache;
pub mod model;
pub mod text;
pub mod validate;
