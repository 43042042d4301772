//! Label formatting helpers

/// Title-case text: the first letter of each run of letters is upper-cased,
/// the rest lower-cased
///
/// Any non-letter starts a new word, so `"o'neil"` becomes `"O'Neil"` and
/// `"2nd"` becomes `"2Nd"`.
///
/// # Examples
///
/// ```
/// use smart_filters_admin::text::title_case;
///
/// assert_eq!(title_case("purchase orders"), "Purchase Orders");
/// assert_eq!(title_case("SHIPPING status"), "Shipping Status");
/// ```
pub fn title_case(value: &str) -> String {
	let mut result = String::with_capacity(value.len());
	let mut previous_is_letter = false;
	for c in value.chars() {
		if c.is_alphabetic() {
			if previous_is_letter {
				result.extend(c.to_lowercase());
			} else {
				result.extend(c.to_uppercase());
			}
			previous_is_letter = true;
		} else {
			result.push(c);
			previous_is_letter = false;
		}
	}
	result
}

/// Default verbose name of a field: underscores become spaces
pub fn field_verbose_name(name: &str) -> String {
	name.replace('_', " ")
}

/// Default verbose name of a model: `OrderItem` becomes `order item`
///
/// # Examples
///
/// ```
/// use smart_filters_admin::text::model_verbose_name;
///
/// assert_eq!(model_verbose_name("OrderItem"), "order item");
/// assert_eq!(model_verbose_name("HTTPLog"), "http log");
/// ```
pub fn model_verbose_name(name: &str) -> String {
	let chars: Vec<char> = name.chars().collect();
	let mut result = String::with_capacity(name.len() + 4);
	for (i, &c) in chars.iter().enumerate() {
		if c.is_uppercase() && i > 0 {
			let prev = chars[i - 1];
			let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
			if prev.is_lowercase() || (prev.is_uppercase() && next_is_lower) {
				result.push(' ');
			}
		}
		result.extend(c.to_lowercase());
	}
	result.trim().to_string()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("status", "Status")]
	#[case("order status", "Order Status")]
	#[case("o'neil", "O'Neil")]
	#[case("2nd place", "2Nd Place")]
	#[case("ÉTAT actuel", "État Actuel")]
	#[case("", "")]
	fn test_title_case(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(title_case(input), expected);
	}

	#[rstest]
	#[case("is_active", "is active")]
	#[case("status", "status")]
	fn test_field_verbose_name(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(field_verbose_name(input), expected);
	}

	#[rstest]
	#[case("Order", "order")]
	#[case("OrderItem", "order item")]
	#[case("HTTPLog", "http log")]
	#[case("purchase", "purchase")]
	fn test_model_verbose_name(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(model_verbose_name(input), expected);
	}
}
