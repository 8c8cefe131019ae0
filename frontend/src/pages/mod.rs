//! Routed pages.

pub mod result_view_page;
