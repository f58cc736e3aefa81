//! Acceptance criteria for conventions
//!
//! A convention declares its criteria once through the builder methods on
//! [`AcceptanceCriteria`]; the engine then evaluates them against concrete
//! inspectors. All declared criteria must match (AND). An empty set of
//! criteria matches everything.

use std::fmt;

use regex::Regex;

use super::inspector::Inspector;
use crate::models::TypeRef;

type Predicate<I> = Box<dyn Fn(&I) -> bool + Send + Sync>;

/// A single predicate over an inspector
pub enum Criterion<I> {
    /// Arbitrary predicate
    Expect(Predicate<I>),
    /// Inspected name equals the given name
    NameIs(String),
    /// Inspected name matches the given pattern
    NameMatches(Regex),
    /// Value type is exactly the given type
    TypeIs(TypeRef),
    /// Value type is the given type or a subtype of it
    TypeAssignableTo(TypeRef),
    /// Owning entity is exactly the given type
    EntityIs(TypeRef),
    /// Owning entity is the given type or a subtype of it
    EntityAssignableTo(TypeRef),
    /// At least one nested criterion matches
    Any(Vec<Criterion<I>>),
    /// The nested criterion does not match
    Not(Box<Criterion<I>>),
}

impl<I: Inspector> Criterion<I> {
    /// Evaluate against an inspector
    pub fn matches(&self, target: &I) -> bool {
        match self {
            Criterion::Expect(predicate) => predicate(target),
            Criterion::NameIs(name) => target.name() == name,
            Criterion::NameMatches(pattern) => pattern.is_match(target.name()),
            Criterion::TypeIs(expected) => target.value_type() == Some(expected),
            Criterion::TypeAssignableTo(expected) => target
                .value_type()
                .is_some_and(|t| t.is_assignable_to(expected)),
            Criterion::EntityIs(expected) => target.entity_type() == expected,
            Criterion::EntityAssignableTo(expected) => {
                target.entity_type().is_assignable_to(expected)
            }
            Criterion::Any(nested) => nested.iter().any(|c| c.matches(target)),
            Criterion::Not(nested) => !nested.matches(target),
        }
    }
}

impl<I> fmt::Debug for Criterion<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Expect(_) => write!(f, "Expect(<fn>)"),
            Criterion::NameIs(name) => write!(f, "NameIs({name})"),
            Criterion::NameMatches(pattern) => write!(f, "NameMatches({})", pattern.as_str()),
            Criterion::TypeIs(t) => write!(f, "TypeIs({t})"),
            Criterion::TypeAssignableTo(t) => write!(f, "TypeAssignableTo({t})"),
            Criterion::EntityIs(t) => write!(f, "EntityIs({t})"),
            Criterion::EntityAssignableTo(t) => write!(f, "EntityAssignableTo({t})"),
            Criterion::Any(nested) => f.debug_tuple("Any").field(nested).finish(),
            Criterion::Not(nested) => f.debug_tuple("Not").field(nested).finish(),
        }
    }
}

/// Criteria a convention declares, combined with AND
pub struct AcceptanceCriteria<I> {
    criteria: Vec<Criterion<I>>,
}

impl<I> Default for AcceptanceCriteria<I> {
    fn default() -> Self {
        Self {
            criteria: Vec::new(),
        }
    }
}

impl<I> fmt::Debug for AcceptanceCriteria<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.criteria).finish()
    }
}

impl<I: Inspector> AcceptanceCriteria<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a criterion
    pub fn push(&mut self, criterion: Criterion<I>) -> &mut Self {
        self.criteria.push(criterion);
        self
    }

    /// Require an arbitrary predicate
    pub fn expect<F>(&mut self, predicate: F) -> &mut Self
    where
        F: Fn(&I) -> bool + Send + Sync + 'static,
    {
        self.push(Criterion::Expect(Box::new(predicate)))
    }

    /// Require the inspected name to equal `name`
    pub fn name_is(&mut self, name: impl Into<String>) -> &mut Self {
        self.push(Criterion::NameIs(name.into()))
    }

    /// Require the inspected name to match `pattern`
    pub fn name_matches(&mut self, pattern: Regex) -> &mut Self {
        self.push(Criterion::NameMatches(pattern))
    }

    /// Require the value type to be exactly `value_type`
    pub fn type_is(&mut self, value_type: TypeRef) -> &mut Self {
        self.push(Criterion::TypeIs(value_type))
    }

    /// Require the value type to be `value_type` or a subtype
    pub fn type_assignable_to(&mut self, value_type: TypeRef) -> &mut Self {
        self.push(Criterion::TypeAssignableTo(value_type))
    }

    /// Require the owning entity to be exactly `entity_type`
    pub fn entity_is(&mut self, entity_type: TypeRef) -> &mut Self {
        self.push(Criterion::EntityIs(entity_type))
    }

    /// Require the owning entity to be `entity_type` or a subtype
    pub fn entity_assignable_to(&mut self, entity_type: TypeRef) -> &mut Self {
        self.push(Criterion::EntityAssignableTo(entity_type))
    }

    /// Require at least one of the criteria declared by `build` to match
    pub fn any<F>(&mut self, build: F) -> &mut Self
    where
        F: FnOnce(&mut AcceptanceCriteria<I>),
    {
        let mut nested = AcceptanceCriteria::new();
        build(&mut nested);
        self.push(Criterion::Any(nested.criteria))
    }

    /// Require `criterion` not to match
    pub fn not(&mut self, criterion: Criterion<I>) -> &mut Self {
        self.push(Criterion::Not(Box::new(criterion)))
    }

    /// Whether every declared criterion matches `target`
    pub fn matches(&self, target: &I) -> bool {
        let matched = self.criteria.iter().all(|c| c.matches(target));
        tracing::trace!(
            target_name = target.name(),
            criteria = self.criteria.len(),
            matched,
            "Evaluated acceptance criteria"
        );
        matched
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conventions::inspector::{ProbeMapping, PropertyInspector};
    use crate::models::PropertyDescriptor;

    fn inspect(name: &str, value_type: TypeRef) -> PropertyInspector {
        let property = PropertyDescriptor::new(TypeRef::new("shop", "Customer"), name, value_type);
        PropertyInspector::from_probe(&ProbeMapping::new(&property))
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        let criteria = AcceptanceCriteria::<PropertyInspector>::new();
        assert!(criteria.is_empty());
        assert!(criteria.matches(&inspect("Name", TypeRef::string())));
    }

    #[test]
    fn test_all_criteria_must_match() {
        let mut criteria = AcceptanceCriteria::<PropertyInspector>::new();
        criteria.type_is(TypeRef::string()).name_is("Email");

        assert!(criteria.matches(&inspect("Email", TypeRef::string())));
        assert!(!criteria.matches(&inspect("Name", TypeRef::string())));
        assert!(!criteria.matches(&inspect("Email", TypeRef::int32())));
    }

    #[test]
    fn test_subtype_filter() {
        let money = TypeRef::new("shop", "Money");
        let euro = TypeRef::with_base("shop", "Euro", money.clone());

        let mut exact = AcceptanceCriteria::<PropertyInspector>::new();
        exact.type_is(money.clone());
        let mut assignable = AcceptanceCriteria::<PropertyInspector>::new();
        assignable.type_assignable_to(money);

        let target = inspect("Balance", euro);
        assert!(!exact.matches(&target));
        assert!(assignable.matches(&target));
    }

    #[test]
    fn test_name_pattern_and_any() {
        let mut criteria = AcceptanceCriteria::<PropertyInspector>::new();
        criteria
            .name_matches(Regex::new("^(Created|Updated)At$").unwrap())
            .any(|c| {
                c.type_is(TypeRef::date_time());
                c.type_is(TypeRef::int64());
            });

        assert!(criteria.matches(&inspect("CreatedAt", TypeRef::date_time())));
        assert!(criteria.matches(&inspect("UpdatedAt", TypeRef::int64())));
        assert!(!criteria.matches(&inspect("UpdatedAt", TypeRef::string())));
        assert!(!criteria.matches(&inspect("DeletedAt", TypeRef::date_time())));
    }

    #[test]
    fn test_not_and_expect() {
        let mut criteria = AcceptanceCriteria::<PropertyInspector>::new();
        criteria
            .not(Criterion::NameIs("Id".to_string()))
            .expect(|i: &PropertyInspector| !i.is_read_only());

        assert!(criteria.matches(&inspect("Code", TypeRef::string())));
        assert!(!criteria.matches(&inspect("Id", TypeRef::string())));
        assert_eq!(criteria.len(), 2);
    }

    #[test]
    fn test_entity_filters() {
        let mut criteria = AcceptanceCriteria::<PropertyInspector>::new();
        criteria.entity_is(TypeRef::new("shop", "Customer"));
        assert!(criteria.matches(&inspect("Name", TypeRef::string())));

        let mut other = AcceptanceCriteria::<PropertyInspector>::new();
        other.entity_assignable_to(TypeRef::new("shop", "Order"));
        assert!(!other.matches(&inspect("Name", TypeRef::string())));
    }
}
