//! `application/x-www-form-urlencoded` bodies with Discord-client truthiness filtering.
//!
//! Parameters are kept in insertion order. At encode time every pair whose value is falsy
//! (`None`, `""`, `0`, `false`) is dropped without notice, so callers cannot send an explicit
//! zero or empty string. Existing integrations depend on that wire behavior and it is kept.

// std
use std::borrow::Cow;
// crates.io
use url::form_urlencoded::Serializer;
// self
use crate::_prelude::*;

/// A single form parameter value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormValue {
	/// Absent value; always omitted.
	Null,
	/// Boolean; only `true` is sent.
	Bool(bool),
	/// Integer; `0` is omitted.
	Int(i64),
	/// String; `""` is omitted.
	Text(String),
}
impl FormValue {
	/// Returns true when the value survives encoding.
	pub fn is_truthy(&self) -> bool {
		match self {
			FormValue::Null => false,
			FormValue::Bool(value) => *value,
			FormValue::Int(value) => *value != 0,
			FormValue::Text(value) => !value.is_empty(),
		}
	}

	fn render(&self) -> Cow<'_, str> {
		match self {
			FormValue::Null => Cow::Borrowed("null"),
			FormValue::Bool(value) => Cow::Borrowed(if *value { "true" } else { "false" }),
			FormValue::Int(value) => Cow::Owned(value.to_string()),
			FormValue::Text(value) => Cow::Borrowed(value),
		}
	}
}
impl From<&str> for FormValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_owned())
	}
}
impl From<String> for FormValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}
impl From<&String> for FormValue {
	fn from(value: &String) -> Self {
		Self::Text(value.clone())
	}
}
impl From<bool> for FormValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}
impl From<i64> for FormValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}
impl From<i32> for FormValue {
	fn from(value: i32) -> Self {
		Self::Int(value.into())
	}
}
impl From<u32> for FormValue {
	fn from(value: u32) -> Self {
		Self::Int(value.into())
	}
}
impl<T> From<Option<T>> for FormValue
where
	T: Into<FormValue>,
{
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}
impl Display for FormValue {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.render())
	}
}

/// Ordered form parameters.
///
/// Re-inserting a key replaces its value in place, so the original position is kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormParams(Vec<(String, FormValue)>);
impl FormParams {
	/// Creates an empty parameter list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts or replaces `key`.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FormValue>) -> &mut Self {
		let key = key.into();
		let value = value.into();

		match self.0.iter_mut().find(|(existing, _)| *existing == key) {
			Some((_, slot)) => *slot = value,
			None => self.0.push((key, value)),
		}

		self
	}

	/// Builder-style [`insert`](Self::insert).
	pub fn with(mut self, key: impl Into<String>, value: impl Into<FormValue>) -> Self {
		self.insert(key, value);

		self
	}

	/// Looks up the value stored for `key`.
	pub fn get(&self, key: &str) -> Option<&FormValue> {
		self.0.iter().find(|(existing, _)| existing == key).map(|(_, value)| value)
	}

	/// Iterates over parameters in insertion order, falsy values included.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &FormValue)> {
		self.0.iter().map(|(key, value)| (key.as_str(), value))
	}

	/// Number of stored parameters, falsy values included.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when no parameters are stored.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Encodes the parameters with [`form_encode`].
	pub fn encode(&self) -> String {
		form_encode(self.iter())
	}
}
impl<K, V> FromIterator<(K, V)> for FormParams
where
	K: Into<String>,
	V: Into<FormValue>,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		let mut params = Self::new();

		for (key, value) in iter {
			params.insert(key, value);
		}

		params
	}
}
impl<K, V> Extend<(K, V)> for FormParams
where
	K: Into<String>,
	V: Into<FormValue>,
{
	fn extend<I>(&mut self, iter: I)
	where
		I: IntoIterator<Item = (K, V)>,
	{
		for (key, value) in iter {
			self.insert(key, value);
		}
	}
}

/// Encodes truthy pairs as `key=value` joined by `&`, with no leading separator.
///
/// Falsy values are skipped entirely; see the module docs.
pub fn form_encode<'a, I>(pairs: I) -> String
where
	I: IntoIterator<Item = (&'a str, &'a FormValue)>,
{
	let mut serializer = Serializer::new(String::new());

	for (key, value) in pairs {
		if value.is_truthy() {
			serializer.append_pair(key, &value.render());
		}
	}

	serializer.finish()
}

#[cfg(test)]
mod tests {
	// crates.io
	use url::form_urlencoded;
	// self
	use super::*;

	#[test]
	fn falsy_values_are_dropped() {
		let params = FormParams::new()
			.with("empty", "")
			.with("zero", 0_i64)
			.with("none", None::<String>)
			.with("no", false)
			.with("keep", "yes")
			.with("one", 1_i64)
			.with("flag", true);

		assert_eq!(params.len(), 7);
		assert_eq!(params.encode(), "keep=yes&one=1&flag=true");
	}

	#[test]
	fn all_falsy_encodes_to_empty_string() {
		let params = FormParams::from_iter([("a", ""), ("b", "")]);

		assert_eq!(params.encode(), "");
	}

	#[test]
	fn insertion_order_is_preserved_and_reinsert_replaces_in_place() {
		let mut params = FormParams::new();

		params.insert("grant_type", "authorization_code");
		params.insert("redirect_uri", "https://old.example.com");
		params.insert("code", "abc");
		params.insert("redirect_uri", "https://new.example.com");

		assert_eq!(
			params.encode(),
			"grant_type=authorization_code&redirect_uri=https%3A%2F%2Fnew.example.com&code=abc",
		);
	}

	#[test]
	fn truthy_pairs_round_trip_through_form_decoding() {
		let pairs = [
			("scope", "identify email guilds"),
			("redirect_uri", "https://app.example.com/cb?x=1&y=2"),
			("weird key=&", "ünïcødé + 100%"),
		];
		let params = FormParams::from_iter(pairs);
		let encoded = params.encode();

		assert!(!encoded.starts_with('&'));

		let decoded = form_urlencoded::parse(encoded.as_bytes()).into_owned().collect::<Vec<_>>();
		let expected = pairs
			.iter()
			.map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
			.collect::<Vec<_>>();

		assert_eq!(decoded, expected);
	}

	#[test]
	fn optional_values_follow_inner_truthiness() {
		assert!(FormValue::from(Some("x")).is_truthy());
		assert!(!FormValue::from(Some("")).is_truthy());
		assert!(!FormValue::from(Some(0_i64)).is_truthy());
		assert!(!FormValue::from(None::<bool>).is_truthy());
		assert_eq!(FormParams::new().with("a", "1").get("a"), Some(&FormValue::Text("1".into())));
	}
}
