use crate::types::property_key::PropertyKey;

/// A positionally indexable input with a length, plus an optional view of
/// non-positional properties.
///
/// The two views stay separate on purpose: positions drive the alignment,
/// named keys only ever contribute trailing entries to the change-list.
/// `property` returning `None` means the key is absent on that side; a key
/// listed by `property_keys` may still have no value.
pub trait SequenceLike<T> {
    fn len(&self) -> usize;

    /// The item at `index`.
    ///
    /// # Panics
    ///
    /// May panic when `index >= self.len()`.
    fn item(&self, index: usize) -> &T;

    fn is_empty(&self) -> bool { self.len() == 0 }

    /// Non-positional keys in insertion order.
    fn property_keys(&self) -> Vec<PropertyKey> { Vec::new() }

    /// The value stored under a non-positional key, if any.
    fn property(&self, _key: &PropertyKey) -> Option<&T> { None }
}

impl<T> SequenceLike<T> for [T] {
    fn len(&self) -> usize { <[T]>::len(self) }

    fn item(&self, index: usize) -> &T { &self[index] }
}

impl<T> SequenceLike<T> for Vec<T> {
    fn len(&self) -> usize { Vec::len(self) }

    fn item(&self, index: usize) -> &T { &self[index] }
}

/// A sequence bundled with an ordered set of named properties, mirroring
/// array-like values that carry extra fields.
///
/// A property may be registered with no value (`None`); such a key shows up
/// during discovery but behaves as absent when the two sides are compared.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnnotatedSequence<T> {
    items: Vec<T>,
    properties: Vec<(PropertyKey, Option<T>)>,
}

impl<T> AnnotatedSequence<T> {
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            properties: Vec::new(),
        }
    }

    /// Registers a property, replacing the value of an already-registered
    /// key while keeping its original discovery position.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<PropertyKey>, value: Option<T>) -> Self {
        let key = key.into();
        if let Some(entry) = self
            .properties
            .iter_mut()
            .find(|(existing, _)| *existing == key)
        {
            entry.1 = value;
        } else {
            self.properties.push((key, value));
        }

        self
    }
}

impl<T> SequenceLike<T> for AnnotatedSequence<T> {
    fn len(&self) -> usize { self.items.len() }

    fn item(&self, index: usize) -> &T { &self.items[index] }

    fn property_keys(&self) -> Vec<PropertyKey> {
        self.properties.iter().map(|(key, _)| key.clone()).collect()
    }

    fn property(&self, key: &PropertyKey) -> Option<&T> {
        self.properties
            .iter()
            .find(|(existing, _)| existing == key)
            .and_then(|(_, value)| value.as_ref())
    }
}
