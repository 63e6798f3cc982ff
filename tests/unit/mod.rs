//! Unit test modules.

mod cache_test;
mod file_store_test;
mod persistence_test;
mod profile_hydration_test;
mod session_test;
mod theme_test;
