pub mod config;
pub mod domain;
pub mod error;

#[cfg(test)]
pub mod test_helpers;
