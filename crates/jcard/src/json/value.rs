//! The value portion of a jCard property tuple.

use serde_json::Value;

use super::datatype::JCardDataType;
use crate::error::ParseFailure;

/// The trailing elements of a property tuple (everything after the data
/// type slot).
///
/// A tuple carries at least one value element; the empty representation is
/// a single empty string, and every constructor normalizes to that. The
/// coercion accessors return a [`ParseFailure`] instead of guessing when
/// the JSON shape does not match what a scribe expects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JCardValue {
    values: Vec<Value>,
}

impl JCardValue {
    /// The empty value: a single empty string.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_values(Vec::new())
    }

    /// A single value element.
    #[must_use]
    pub fn single(value: impl Into<Value>) -> Self {
        Self::from_values(vec![value.into()])
    }

    /// Multiple value elements (multi-valued properties such as
    /// CATEGORIES).
    #[must_use]
    pub fn multi<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::from_values(values.into_iter().map(Into::into).collect())
    }

    /// A structured value: one nested array whose elements are the
    /// components. An empty component becomes `""`, a single-valued one a
    /// string, a multi-valued one an array of strings.
    #[must_use]
    pub fn structured(components: Vec<Vec<String>>) -> Self {
        let nested: Vec<Value> = components
            .into_iter()
            .map(|component| match component.len() {
                0 => Value::String(String::new()),
                1 => Value::String(component.into_iter().next().unwrap_or_default()),
                _ => Value::Array(component.into_iter().map(Value::String).collect()),
            })
            .collect();
        Self {
            values: vec![Value::Array(nested)],
        }
    }

    /// Wraps raw tuple elements, normalizing the empty case.
    #[must_use]
    pub fn from_values(values: Vec<Value>) -> Self {
        if values.is_empty() {
            return Self {
                values: vec![Value::String(String::new())],
            };
        }
        Self { values }
    }

    /// The raw value elements.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Consumes the value, returning the raw elements.
    #[must_use]
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Coerces to a single string.
    ///
    /// Scalars coerce by JSON rendering (`null` to the empty string);
    /// additional elements beyond the first are ignored, matching lenient
    /// readers of multi-valued input.
    ///
    /// ## Errors
    /// Fails if the first element is an array or object.
    pub fn as_single(&self) -> Result<String, ParseFailure> {
        self.values.first().and_then(scalar).ok_or_else(|| {
            ParseFailure::invalid_value("expected a scalar value, found a nested structure")
        })
    }

    /// Coerces every element to a string.
    ///
    /// ## Errors
    /// Fails if any element is an array or object.
    pub fn as_multi(&self) -> Result<Vec<String>, ParseFailure> {
        self.values
            .iter()
            .map(|v| {
                scalar(v).ok_or_else(|| {
                    ParseFailure::invalid_value(
                        "expected scalar list elements, found a nested structure",
                    )
                })
            })
            .collect()
    }

    /// Coerces to structured components.
    ///
    /// A single nested array is read as the component list (the canonical
    /// encoding); otherwise each top-level element is one single-valued
    /// component, which tolerates producers that flatten singleton
    /// structures.
    ///
    /// ## Errors
    /// Fails if a component holds anything but scalars.
    pub fn as_structured(&self) -> Result<Vec<Vec<String>>, ParseFailure> {
        if let [Value::Array(nested)] = &self.values[..] {
            return nested.iter().map(component).collect();
        }
        self.values.iter().map(component).collect()
    }
}

/// Reads one structured component: a scalar or an array of scalars. The
/// empty string denotes an absent component.
fn component(value: &Value) -> Result<Vec<String>, ParseFailure> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| {
                scalar(item).ok_or_else(|| {
                    ParseFailure::structured("component elements must be scalars")
                })
            })
            .collect(),
        _ => {
            let s = scalar(value)
                .ok_or_else(|| ParseFailure::structured("components must be scalars or arrays"))?;
            if s.is_empty() {
                Ok(Vec::new())
            } else {
                Ok(vec![s])
            }
        }
    }
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// The literal wire form of a property no scribe could (or should)
/// interpret: the data type tag exactly as received plus the untouched
/// value elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawValue {
    /// Data type tag from the entry.
    pub data_type: JCardDataType,
    /// Literal value elements.
    pub value: JCardValue,
}

impl RawValue {
    /// Creates a raw value.
    #[must_use]
    pub fn new(data_type: JCardDataType, value: JCardValue) -> Self {
        Self { data_type, value }
    }
}
