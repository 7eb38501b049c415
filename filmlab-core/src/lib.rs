pub mod analysis;
pub mod error;
pub mod library;
pub mod logger;
pub mod timing;
pub mod validation;
