pub mod config;
pub mod indicator;
pub mod surface;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
