//! Field resolution errors
//!
//! None of these reach the client. The change list controller turns each of
//! them into a skipped filter or a less precise label.

/// Error type for model metadata lookups
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdminError {
	#[error("Field not found: {model}.{field}")]
	FieldNotFound { model: String, field: String },

	#[error("Field '{0}' has no choices")]
	NoChoices(String),

	#[error("'{value}' is not a choice of field '{field}'")]
	UnknownChoice { field: String, value: String },

	#[error("Invalid value '{value}' for field '{field}': {reason}")]
	InvalidValue {
		field: String,
		value: String,
		reason: String,
	},
}
