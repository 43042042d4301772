//! Settings for the smart filter controller.

pub use smart_filters_conf::*;
