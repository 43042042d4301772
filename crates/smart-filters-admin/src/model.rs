//! Model field metadata
//!
//! Describes just enough of a model for the change list to turn raw filter
//! parameters into human-readable labels: field names, verbose names, field
//! types and enumerated choices.

use crate::error::AdminError;
use crate::text::{field_verbose_name, model_verbose_name};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use std::borrow::Cow;
use std::fmt;
use uuid::Uuid;

/// Storage type of a model field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
	Char,
	Text,
	Integer,
	Float,
	/// Fixed-point number, kept as text
	Decimal,
	Boolean,
	Date,
	DateTime,
	Uuid,
	/// Relation stored as the integer primary key of `to`
	ForeignKey { to: String },
}

/// A raw filter value converted to its field's native type
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
	Text(String),
	Integer(i64),
	Float(f64),
	Decimal(String),
	Boolean(bool),
	Date(NaiveDate),
	DateTime(NaiveDateTime),
	Uuid(Uuid),
}

impl fmt::Display for FieldValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FieldValue::Text(s) | FieldValue::Decimal(s) => f.write_str(s),
			FieldValue::Integer(i) => write!(f, "{}", i),
			FieldValue::Float(v) => write!(f, "{}", v),
			FieldValue::Boolean(true) => f.write_str("Yes"),
			FieldValue::Boolean(false) => f.write_str("No"),
			FieldValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
			FieldValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
			FieldValue::Uuid(u) => write!(f, "{}", u.hyphenated()),
		}
	}
}

const DATETIME_FORMATS: [&str; 4] = [
	"%Y-%m-%d %H:%M:%S",
	"%Y-%m-%d %H:%M",
	"%Y-%m-%dT%H:%M:%S",
	"%Y-%m-%dT%H:%M",
];

/// Metadata for one model field
///
/// # Examples
///
/// ```
/// use smart_filters_admin::{FieldMeta, FieldType};
///
/// let field = FieldMeta::new("status", FieldType::Char)
///     .with_choices([("open", "Open"), ("closed", "Closed")]);
///
/// assert_eq!(field.verbose_name(), "status");
/// assert_eq!(field.choice_label("closed").unwrap(), "Closed");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMeta {
	name: String,
	verbose_name: String,
	field_type: FieldType,
	choices: Vec<(String, String)>,
}

impl FieldMeta {
	/// Create a field; its verbose name is derived from `name`
	pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
		let name = name.into();
		Self {
			verbose_name: field_verbose_name(&name),
			name,
			field_type,
			choices: Vec::new(),
		}
	}

	pub fn with_verbose_name(mut self, verbose_name: impl Into<String>) -> Self {
		self.verbose_name = verbose_name.into();
		self
	}

	/// Set the enumerated `(value, label)` choices
	pub fn with_choices<I, V, L>(mut self, choices: I) -> Self
	where
		I: IntoIterator<Item = (V, L)>,
		V: Into<String>,
		L: Into<String>,
	{
		self.choices = choices
			.into_iter()
			.map(|(value, label)| (value.into(), label.into()))
			.collect();
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn verbose_name(&self) -> &str {
		&self.verbose_name
	}

	pub fn field_type(&self) -> &FieldType {
		&self.field_type
	}

	pub fn choices(&self) -> &[(String, String)] {
		&self.choices
	}

	/// Label of the choice whose value is `raw`
	pub fn choice_label(&self, raw: &str) -> Result<String, AdminError> {
		if self.choices.is_empty() {
			return Err(AdminError::NoChoices(self.name.clone()));
		}
		self.choices
			.iter()
			.find(|(value, _)| value == raw)
			.map(|(_, label)| label.clone())
			.ok_or_else(|| AdminError::UnknownChoice {
				field: self.name.clone(),
				value: raw.to_string(),
			})
	}

	/// Convert a raw query value to this field's native type
	///
	/// # Examples
	///
	/// ```
	/// use smart_filters_admin::{FieldMeta, FieldType, FieldValue};
	///
	/// let field = FieldMeta::new("is_paid", FieldType::Boolean);
	/// assert_eq!(field.to_native("1").unwrap(), FieldValue::Boolean(true));
	/// assert_eq!(field.to_native("False").unwrap().to_string(), "No");
	/// assert!(field.to_native("perhaps").is_err());
	/// ```
	pub fn to_native(&self, raw: &str) -> Result<FieldValue, AdminError> {
		let trimmed = raw.trim();
		match &self.field_type {
			FieldType::Char | FieldType::Text => Ok(FieldValue::Text(raw.to_string())),
			FieldType::Integer | FieldType::ForeignKey { .. } => trimmed
				.parse::<i64>()
				.map(FieldValue::Integer)
				.map_err(|e| self.invalid(raw, e)),
			FieldType::Float => self.parse_finite(raw).map(FieldValue::Float),
			FieldType::Decimal => self
				.parse_finite(raw)
				.map(|_| FieldValue::Decimal(trimmed.to_string())),
			FieldType::Boolean => match trimmed {
				"1" | "t" => Ok(FieldValue::Boolean(true)),
				"0" | "f" => Ok(FieldValue::Boolean(false)),
				word if word.eq_ignore_ascii_case("true") => Ok(FieldValue::Boolean(true)),
				word if word.eq_ignore_ascii_case("false") => Ok(FieldValue::Boolean(false)),
				_ => Err(self.invalid(raw, "expected true or false")),
			},
			FieldType::Date => NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
				.map(FieldValue::Date)
				.map_err(|e| self.invalid(raw, e)),
			FieldType::DateTime => self.parse_datetime(raw).map(FieldValue::DateTime),
			FieldType::Uuid => Uuid::parse_str(trimmed)
				.map(FieldValue::Uuid)
				.map_err(|e| self.invalid(raw, e)),
		}
	}

	fn parse_finite(&self, raw: &str) -> Result<f64, AdminError> {
		let value = raw
			.trim()
			.parse::<f64>()
			.map_err(|e| self.invalid(raw, e))?;
		if value.is_finite() {
			Ok(value)
		} else {
			Err(self.invalid(raw, "not a finite number"))
		}
	}

	fn parse_datetime(&self, raw: &str) -> Result<NaiveDateTime, AdminError> {
		let trimmed = raw.trim();
		if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
			return Ok(dt.naive_local());
		}
		for format in DATETIME_FORMATS {
			if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
				return Ok(dt);
			}
		}
		NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
			.map(|d| d.and_time(NaiveTime::MIN))
			.map_err(|e| self.invalid(raw, e))
	}

	fn invalid(&self, raw: &str, reason: impl fmt::Display) -> AdminError {
		AdminError::InvalidValue {
			field: self.name.clone(),
			value: raw.to_string(),
			reason: reason.to_string(),
		}
	}
}

/// Metadata for a model shown in a change list
///
/// # Examples
///
/// ```
/// use smart_filters_admin::{FieldMeta, FieldType, ModelMeta};
///
/// let model = ModelMeta::new("PurchaseOrder")
///     .with_field(FieldMeta::new("status", FieldType::Char));
///
/// assert_eq!(model.verbose_name(), "purchase order");
/// assert_eq!(model.verbose_name_plural(), "purchase orders");
/// assert!(model.get_field("status").is_ok());
/// assert!(model.get_field("owner").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ModelMeta {
	model_name: String,
	verbose_name: String,
	verbose_name_plural: Option<String>,
	fields: Vec<FieldMeta>,
}

impl ModelMeta {
	pub fn new(model_name: impl Into<String>) -> Self {
		let model_name = model_name.into();
		Self {
			verbose_name: model_verbose_name(&model_name),
			model_name,
			verbose_name_plural: None,
			fields: Vec::new(),
		}
	}

	pub fn with_verbose_name(mut self, verbose_name: impl Into<String>) -> Self {
		self.verbose_name = verbose_name.into();
		self
	}

	/// Override the plural name (defaults to the verbose name plus `s`)
	pub fn with_verbose_name_plural(mut self, plural: impl Into<String>) -> Self {
		self.verbose_name_plural = Some(plural.into());
		self
	}

	/// Add a field, replacing any field with the same name
	pub fn with_field(mut self, field: FieldMeta) -> Self {
		self.fields.retain(|f| f.name != field.name);
		self.fields.push(field);
		self
	}

	pub fn model_name(&self) -> &str {
		&self.model_name
	}

	pub fn verbose_name(&self) -> &str {
		&self.verbose_name
	}

	pub fn verbose_name_plural(&self) -> Cow<'_, str> {
		match &self.verbose_name_plural {
			Some(plural) => Cow::Borrowed(plural),
			None => Cow::Owned(format!("{}s", self.verbose_name)),
		}
	}

	pub fn fields(&self) -> &[FieldMeta] {
		&self.fields
	}

	/// Look up a field by name
	pub fn get_field(&self, name: &str) -> Result<&FieldMeta, AdminError> {
		self.fields
			.iter()
			.find(|f| f.name == name)
			.ok_or_else(|| AdminError::FieldNotFound {
				model: self.model_name.clone(),
				field: name.to_string(),
			})
	}
}
