pub mod error;
pub mod loader;
pub mod request;

#[cfg(test)]
pub(crate) mod testing;
