/// The decoded value tree's tagged union. Every variant except `Null` and
/// `Bool`/`Number` carries a reference into the document's arena; the
/// lifetime parameter ties every reachable value to that arena's lifetime,
/// so a value can never outlive the memory it was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'arena> {
    Null,
    Bool(bool),
    Number(f64),
    String(&'arena str),
    Array(&'arena [Value<'arena>]),
    Object(&'arena [(&'arena str, Value<'arena>)]),
}

impl<'arena> Value<'arena> {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&'arena str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&'arena [Value<'arena>]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&'arena [(&'arena str, Value<'arena>)]> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a key in an object, returning the first entry in insertion
    /// order whose key equals `key`. Duplicate keys are preserved on
    /// insertion; only the first match is ever visible through this lookup.
    pub fn object_get(&self, key: &str) -> Option<&Value<'arena>> {
        self.as_object()?
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Index into an array. `None` if `self` is not an array or `index`
    /// is out of bounds.
    pub fn array_get(&self, index: usize) -> Option<&Value<'arena>> {
        self.as_array()?.get(index)
    }

    /// Number of elements if `self` is an array, else `None`.
    pub fn array_size(&self) -> Option<usize> {
        self.as_array().map(|items| items.len())
    }
}
