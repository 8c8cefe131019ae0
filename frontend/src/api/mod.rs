//! Browser-side services used by the result view.

pub mod browser_api;
