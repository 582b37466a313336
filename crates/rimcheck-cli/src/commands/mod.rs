pub mod check_mod;
pub mod format;
pub mod schema;
pub mod stats;
pub mod validate;
