//! UI components.

pub mod action_bar;
pub mod error_boundary;
pub mod navbar;
