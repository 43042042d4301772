//! Admin change list support
//!
//! This module provides the filter-remembering change list controller
//! through unified imports from the `smart_filters::admin` namespace.
//!
//! ## Example
//!
//! ```rust
//! use smart_filters::admin::*;
//!
//! let model = ModelMeta::new("Order")
//!     .with_field(FieldMeta::new("status", FieldType::Char).with_choices([("open", "Open")]));
//!
//! let resolution = resolve_filters(&model, [("status__exact", "open")]);
//! assert_eq!(filters::default_filter_msg(&resolution.filters), "Status: Open");
//! ```

pub use smart_filters_admin::*;
