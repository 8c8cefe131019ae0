//! Framework-independent core of the OCR result action bar, shared with the frontend.

extern crate serde;


pub mod action;
pub mod action_bar_flags;
pub mod action_handlers;
pub mod control;
pub mod layout;
pub mod style;
pub mod theme;
pub mod extraction;
