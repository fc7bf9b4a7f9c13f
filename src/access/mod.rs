pub mod error;
pub mod field;
pub mod locator;
pub mod navigator;
pub mod record;
