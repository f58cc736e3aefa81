//! Applying property conventions to finished mappings

use super::convention::Capability;
use super::finder::ConventionFinder;
use super::inspector::PropertyInspector;
use super::instance::PropertyInstance;
use crate::models::PropertyMapping;

/// Run every accepting property convention against `mapping`
///
/// Conventions are evaluated in registration order, each against the
/// mapping as left by the previous ones. Returns the number applied.
pub fn apply_property_conventions<F>(finder: &F, mapping: &mut PropertyMapping) -> usize
where
    F: ConventionFinder + ?Sized,
{
    let mut applied = 0;
    for convention in finder.find(Capability::Property) {
        let inspector = PropertyInspector::from_mapping(mapping);
        if !convention.accepts(&inspector) {
            continue;
        }
        convention.apply(&mut PropertyInstance::new(mapping));
        applied += 1;
        tracing::debug!(
            convention = convention.name(),
            property = mapping.property.name(),
            "Applied convention"
        );
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conventions::{
        AcceptanceCriteria, ConventionRegistry, PropertyConvention, UserType,
    };
    use crate::models::{Attribute, ColumnMapping, PropertyDescriptor, TypeRef};

    struct StringLength;

    impl PropertyConvention for StringLength {
        fn accept(&self, criteria: &mut AcceptanceCriteria<PropertyInspector>) {
            criteria.type_is(TypeRef::string());
        }

        fn apply(&self, instance: &mut PropertyInstance<'_>) {
            instance.length(255);
        }
    }

    struct TrimmedString;

    impl UserType for TrimmedString {
        fn type_ref(&self) -> TypeRef {
            TypeRef::new("shop.types", "TrimmedString")
        }

        fn returned_type(&self) -> TypeRef {
            TypeRef::string()
        }
    }

    fn name_mapping() -> PropertyMapping {
        let customer = TypeRef::new("shop", "Customer");
        let property = PropertyDescriptor::new(customer.clone(), "Name", TypeRef::string());
        let mut mapping = PropertyMapping::new(customer, property);
        mapping.add_default_column(ColumnMapping::named("Name"));
        mapping.value_type.set_default(TypeRef::string());
        mapping
    }

    #[test]
    fn test_conventions_apply_in_order() {
        let mut registry = ConventionRegistry::new();
        registry
            .add_property_convention(StringLength)
            .unwrap()
            .add_user_type(TrimmedString)
            .unwrap();

        let mut mapping = name_mapping();
        let applied = apply_property_conventions(&registry, &mut mapping);

        assert_eq!(applied, 2);
        assert_eq!(mapping.columns()[0].length, Attribute::Default(255));
        assert_eq!(
            mapping.value_type,
            Attribute::Default(TypeRef::new("shop.types", "TrimmedString"))
        );
    }

    #[test]
    fn test_later_conventions_see_earlier_changes() {
        // Once the user type is applied the value type no longer matches core.String
        let mut registry = ConventionRegistry::new();
        registry
            .add_user_type(TrimmedString)
            .unwrap()
            .add_property_convention(StringLength)
            .unwrap();

        let mut mapping = name_mapping();
        assert_eq!(apply_property_conventions(&registry, &mut mapping), 1);
        assert!(mapping.columns()[0].length.value().is_none());
    }

    #[test]
    fn test_explicit_type_is_not_replaced() {
        let mut registry = ConventionRegistry::new();
        registry.add_user_type(TrimmedString).unwrap();

        let mut mapping = name_mapping().with_type(TypeRef::string());
        apply_property_conventions(&registry, &mut mapping);
        assert_eq!(mapping.value_type, Attribute::Explicit(TypeRef::string()));
    }
}
