//! Data carried by the router.

pub mod url_param;
