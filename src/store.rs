use crate::{delegate::Delegate, log::Error, pipe::Pipe};
use serde::Serialize;
use serde_json::{to_value, Value};
use std::collections::HashMap;

/// Provides storage for data that templates can be rendered against.
///
/// `Store` doubles as a composite [`Delegate`]: field names resolve to the
/// stored value formatted as text, and item names resolve to stored arrays,
/// each element becoming a child delegate. Unknown field names echo the name
/// back; unknown item names yield no children.
///
/// # Examples
///
/// ```
/// use folio::{Engine, Store};
/// use serde_json::json;
///
/// let store = Store::new()
///     .with_must("Budget", "500 €")
///     .with_must("Costs", json!([
///         {"Name": "tiles", "Amount": "20 €"},
///         {"Name": "paint", "Amount": "35 €"},
///     ]));
///
/// let source = r#"<region name="Costs"><li><field name="Name"/></li></region>
/// <ul><item name="Costs"/></ul>"#;
/// let result = Engine::new().render(source, &store);
///
/// assert_eq!(
///     result.unwrap(),
///     "\n<ul><li>tiles</li><li>paint</li></ul>"
/// );
/// ```
pub struct Store {
    data: HashMap<String, Value>,
}

impl Store {
    /// Create a new Store.
    #[inline]
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Insert the value into the Store.
    ///
    /// # Errors
    ///
    /// Returns an error if the serialization fails.
    pub fn insert<S, T>(&mut self, key: S, value: T) -> Result<(), Error>
    where
        S: Into<String>,
        T: Serialize,
    {
        let key = key.into();
        let serialized = to_value(&value)
            .map_err(|_| Error::build(format!("value for key `{key}` is unserializable")))?;

        self.data.insert(key, serialized);
        Ok(())
    }

    /// Insert the value into the Store.
    ///
    /// # Panics
    ///
    /// Will panic if the serialization fails.
    #[inline]
    pub fn insert_must<S, T>(&mut self, key: S, value: T)
    where
        S: Into<String>,
        T: Serialize,
    {
        self.data.insert(key.into(), to_value(value).unwrap());
    }

    /// Insert the value into the Store.
    ///
    /// Returns the Store, so additional methods may be chained.
    ///
    /// # Errors
    ///
    /// Returns an error if the serialization fails.
    pub fn with<S, T>(mut self, key: S, value: T) -> Result<Self, Error>
    where
        S: Into<String>,
        T: Serialize,
    {
        self.insert(key, value)?;
        Ok(self)
    }

    /// Insert the value into the Store.
    ///
    /// Returns the Store, so additional methods may be chained.
    ///
    /// # Panics
    ///
    /// Will panic if the serialization fails.
    #[inline]
    pub fn with_must<S, T>(mut self, key: S, value: T) -> Self
    where
        S: Into<String>,
        T: Serialize,
    {
        self.insert_must(key, value);
        self
    }

    /// Get the value of the given key, if any.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Delegate for Store {
    fn value_for_parameter(&self, parameter: &str, _index: usize) -> String {
        match self.data.get(parameter) {
            Some(value) => scalar(value),
            None => parameter.to_owned(),
        }
    }

    fn items_for_parameter(&self, parameter: &str, _index: usize) -> Vec<Box<dyn Delegate + '_>> {
        children(self.data.get(parameter))
    }
}

/// A child delegate borrowing one element of a stored array.
struct Item<'store> {
    value: &'store Value,
}

impl Delegate for Item<'_> {
    fn value_for_parameter(&self, parameter: &str, _index: usize) -> String {
        match self.value.get(parameter) {
            Some(value) => scalar(value),
            None => parameter.to_owned(),
        }
    }

    fn items_for_parameter(&self, parameter: &str, _index: usize) -> Vec<Box<dyn Delegate + '_>> {
        children(self.value.get(parameter))
    }
}

/// Format a stored value as scalar field text.
fn scalar(value: &Value) -> String {
    let mut buffer = String::new();
    let mut pipe = Pipe::new(&mut buffer);

    // Writing to a String cannot fail.
    let _ = pipe.write_value(value);
    buffer
}

/// Wrap each element of a stored array in a child delegate.
fn children(value: Option<&Value>) -> Vec<Box<dyn Delegate + '_>> {
    match value {
        Some(Value::Array(elements)) => elements
            .iter()
            .map(|element| Box::new(Item { value: element }) as _)
            .collect(),
        _ => Vec::new(),
    }
}
