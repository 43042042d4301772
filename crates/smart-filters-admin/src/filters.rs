//! Filter parameter resolution
//!
//! Turns change list query parameters such as `status__exact=open` into
//! human-readable `field label -> value label` pairs and collects the
//! exact-match parameters worth remembering.

use crate::model::{FieldMeta, ModelMeta};
use crate::text::title_case;
use indexmap::IndexMap;
use serde::Serialize;
use smart_filters_http::{Result, querystring};

/// Separator between a field name and its lookup (`status__exact`)
pub const LOOKUP_SEP: &str = "__";

/// Marker of an exact-match lookup
pub const EXACT_LOOKUP: &str = "__exact";

/// Label used when a filter value cannot be described
pub const FILTERED_PLACEHOLDER: &str = "(filtered)";

/// A query parameter that addresses a model field through a lookup
///
/// # Examples
///
/// ```
/// use smart_filters_admin::filters::FilterParam;
///
/// let param = FilterParam::parse("customer__name__exact", "Jane").unwrap();
/// assert_eq!(param.field_name(), "customer");
/// assert!(param.is_exact());
///
/// assert!(FilterParam::parse("page", "2").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterParam<'a> {
	key: &'a str,
	value: &'a str,
}

impl<'a> FilterParam<'a> {
	/// `None` unless the key contains the lookup separator
	pub fn parse(key: &'a str, value: &'a str) -> Option<Self> {
		key.contains(LOOKUP_SEP).then_some(Self { key, value })
	}

	pub fn key(&self) -> &'a str {
		self.key
	}

	pub fn value(&self) -> &'a str {
		self.value
	}

	/// The first path segment, which names a field on the model
	pub fn field_name(&self) -> &'a str {
		self.key.split(LOOKUP_SEP).next().unwrap_or(self.key)
	}

	pub fn is_exact(&self) -> bool {
		self.key.contains(EXACT_LOOKUP)
	}
}

/// Human-readable filters, keyed by field verbose name, in query order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedFilters(IndexMap<String, String>);

impl ResolvedFilters {
	pub fn new() -> Self {
		Self::default()
	}

	/// Record a filter; a repeated label keeps its position and takes the new value
	pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
		self.0.insert(label.into(), value.into());
	}

	pub fn get(&self, label: &str) -> Option<&str> {
		self.0.get(label).map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ResolvedFilters {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut filters = Self::new();
		for (label, value) in iter {
			filters.insert(label, value);
		}
		filters
	}
}

/// Outcome of scanning a request's query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterResolution {
	pub filters: ResolvedFilters,
	/// Exact-match parameters on known fields, verbatim and in query order
	pub saved: Vec<(String, String)>,
}

impl FilterResolution {
	/// The saved parameters encoded as a querystring
	pub fn saved_querystring(&self) -> Result<String> {
		querystring::encode(&self.saved)
	}
}

/// Resolve filter parameters against model metadata
///
/// Parameters without a lookup separator are ignored. Parameters whose field
/// does not exist are skipped. Only exact-match parameters are saved, and only
/// they get a value label; every other lookup is shown as
/// [`FILTERED_PLACEHOLDER`].
///
/// # Examples
///
/// ```
/// use smart_filters_admin::{FieldMeta, FieldType, ModelMeta};
/// use smart_filters_admin::filters::resolve_filters;
///
/// let model = ModelMeta::new("Order").with_field(
///     FieldMeta::new("status", FieldType::Char).with_choices([("open", "Open")]),
/// );
///
/// let resolution = resolve_filters(
///     &model,
///     [("status__exact", "open"), ("ghost__exact", "x"), ("page", "2")],
/// );
///
/// assert_eq!(resolution.filters.get("status"), Some("Open"));
/// assert_eq!(resolution.filters.len(), 1);
/// assert_eq!(resolution.saved_querystring().unwrap(), "status__exact=open");
/// ```
pub fn resolve_filters<'a, I>(model: &ModelMeta, params: I) -> FilterResolution
where
	I: IntoIterator<Item = (&'a str, &'a str)>,
{
	let mut resolution = FilterResolution::default();

	for (key, value) in params {
		let Some(param) = FilterParam::parse(key, value) else {
			continue;
		};
		let field = match model.get_field(param.field_name()) {
			Ok(field) => field,
			Err(e) => {
				tracing::debug!(param = key, error = %e, "skipping filter parameter");
				continue;
			}
		};

		let label = if param.is_exact() {
			resolution.saved.push((key.to_string(), value.to_string()));
			value_label(field, value)
		} else {
			FILTERED_PLACEHOLDER.to_string()
		};
		resolution.filters.insert(field.verbose_name(), label);
	}

	resolution
}

/// Describe a raw exact-match value
///
/// Tries the field's choices, then its native conversion, then falls back to
/// [`FILTERED_PLACEHOLDER`].
pub fn value_label(field: &FieldMeta, raw: &str) -> String {
	field
		.choice_label(raw)
		.or_else(|_| field.to_native(raw).map(|value| value.to_string()))
		.unwrap_or_else(|e| {
			tracing::trace!(field = field.name(), error = %e, "no label for filter value");
			FILTERED_PLACEHOLDER.to_string()
		})
}

/// Default filter summary: `Label: Value` pairs joined by `, `
///
/// # Examples
///
/// ```
/// use smart_filters_admin::filters::{ResolvedFilters, default_filter_msg};
///
/// let filters: ResolvedFilters = [("status", "Open"), ("is paid", "Yes")].into_iter().collect();
/// assert_eq!(default_filter_msg(&filters), "Status: Open, Is Paid: Yes");
/// ```
pub fn default_filter_msg(filters: &ResolvedFilters) -> String {
	filters
		.iter()
		.map(|(label, value)| format!("{}: {}", title_case(label), value))
		.collect::<Vec<_>>()
		.join(", ")
}
