//! Tracked attribute values
//!
//! Every configurable mapping attribute records where its value came from.
//! Explicit values always win: default-setters are no-ops over them.

use serde::{Deserialize, Serialize};

/// A mapping attribute that is unset, defaulted, or explicitly specified
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "value", rename_all = "camelCase")]
pub enum Attribute<T> {
    /// No value yet
    Unset,
    /// Value supplied by auto-mapping or a convention
    Default(T),
    /// Value supplied by the user
    Explicit(T),
}

impl<T> Default for Attribute<T> {
    fn default() -> Self {
        Attribute::Unset
    }
}

impl<T> Attribute<T> {
    /// Current value, whichever layer it came from
    pub fn value(&self) -> Option<&T> {
        match self {
            Attribute::Unset => None,
            Attribute::Default(v) | Attribute::Explicit(v) => Some(v),
        }
    }

    /// Whether the value was explicitly specified
    pub fn is_specified(&self) -> bool {
        matches!(self, Attribute::Explicit(_))
    }

    pub fn is_set(&self) -> bool {
        !matches!(self, Attribute::Unset)
    }

    /// Set a default value. Returns `false` if an explicit value is kept.
    pub fn set_default(&mut self, value: T) -> bool {
        if self.is_specified() {
            return false;
        }
        *self = Attribute::Default(value);
        true
    }

    /// Set an explicit value, replacing anything present
    pub fn set_explicit(&mut self, value: T) {
        *self = Attribute::Explicit(value);
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Attribute::Unset => None,
            Attribute::Default(v) | Attribute::Explicit(v) => Some(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fills_unset() {
        let mut attr: Attribute<String> = Attribute::Unset;
        assert!(attr.set_default("Age".to_string()));
        assert_eq!(attr.value().map(String::as_str), Some("Age"));
        assert!(!attr.is_specified());
    }

    #[test]
    fn test_default_never_overwrites_explicit() {
        let mut attr = Attribute::Explicit(10);
        assert!(!attr.set_default(20));
        assert_eq!(attr, Attribute::Explicit(10));
    }

    #[test]
    fn test_explicit_overwrites_default() {
        let mut attr = Attribute::Default(1);
        attr.set_explicit(2);
        assert!(attr.is_specified());
        assert_eq!(attr.into_value(), Some(2));
    }

    #[test]
    fn test_serialized_shape() {
        let attr = Attribute::Default("Age".to_string());
        let json = serde_json::to_value(&attr).unwrap();
        assert_eq!(json["source"], "default");
        assert_eq!(json["value"], "Age");
    }
}
