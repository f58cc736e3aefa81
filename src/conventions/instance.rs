//! Mutable convention view of a property mapping

use super::inspector::PropertyInspector;
use crate::models::column::normalize_sql_type;
use crate::models::{ColumnMapping, PropertyDescriptor, PropertyMapping, TypeRef};

/// Handle through which a convention alters a property mapping
///
/// Every setter writes at default level, so values the user specified
/// explicitly are left untouched.
#[derive(Debug)]
pub struct PropertyInstance<'a> {
    mapping: &'a mut PropertyMapping,
}

impl<'a> PropertyInstance<'a> {
    pub fn new(mapping: &'a mut PropertyMapping) -> Self {
        Self { mapping }
    }

    pub fn property(&self) -> &PropertyDescriptor {
        &self.mapping.property
    }

    /// Snapshot of the mapping as it currently stands
    pub fn inspect(&self) -> PropertyInspector {
        PropertyInspector::from_mapping(&*self.mapping)
    }

    /// Persist the property through a custom user type
    pub fn custom_type(&mut self, user_type: TypeRef) -> &mut Self {
        self.mapping.value_type.set_default(user_type);
        self
    }

    /// Rename the property's single column
    pub fn column_name(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        match self.mapping.columns_mut().first_mut() {
            Some(column) => {
                column.name.set_default(name);
            }
            None => self.mapping.add_default_column(ColumnMapping::named(name)),
        }
        self
    }

    pub fn sql_type(&mut self, sql_type: impl AsRef<str>) -> &mut Self {
        let sql_type = normalize_sql_type(sql_type.as_ref());
        for column in self.mapping.columns_mut() {
            column.sql_type.set_default(sql_type.clone());
        }
        self
    }

    pub fn nullable(&mut self, nullable: bool) -> &mut Self {
        for column in self.mapping.columns_mut() {
            column.nullable.set_default(nullable);
        }
        self
    }

    pub fn length(&mut self, length: u32) -> &mut Self {
        for column in self.mapping.columns_mut() {
            column.length.set_default(length);
        }
        self
    }

    pub fn unique(&mut self, unique: bool) -> &mut Self {
        for column in self.mapping.columns_mut() {
            column.unique.set_default(unique);
        }
        self
    }

    pub fn access(&mut self, strategy: impl Into<String>) -> &mut Self {
        self.mapping.access.set_default(strategy.into());
        self
    }

    pub fn lazy(&mut self, lazy: bool) -> &mut Self {
        self.mapping.lazy.set_default(lazy);
        self
    }

    /// Exclude the column from INSERT and UPDATE statements
    pub fn read_only(&mut self) -> &mut Self {
        self.mapping.insert.set_default(false);
        self.mapping.update.set_default(false);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Attribute, PropertyAttribute};

    fn mapping() -> PropertyMapping {
        let person = TypeRef::new("shop", "Person");
        let mut mapping = PropertyMapping::new(
            person.clone(),
            PropertyDescriptor::new(person, "Email", TypeRef::string()),
        );
        mapping.add_default_column(ColumnMapping::named("Email"));
        mapping
    }

    #[test]
    fn test_setters_fill_defaults() {
        let mut mapping = mapping();
        PropertyInstance::new(&mut mapping)
            .column_name("email_address")
            .length(320)
            .nullable(false)
            .read_only();

        let column = &mapping.columns()[0];
        assert_eq!(column.name(), Some("email_address"));
        assert_eq!(column.length, Attribute::Default(320));
        assert!(!column.is_nullable());
        assert_eq!(mapping.insert, Attribute::Default(false));
        assert!(!mapping.is_specified(PropertyAttribute::Update));
    }

    #[test]
    fn test_setters_keep_explicit_values() {
        let mut mapping = mapping()
            .with_type(TypeRef::new("shop.types", "EmailType"))
            .with_column(ColumnMapping::explicit("contact_email").with_length(100));

        PropertyInstance::new(&mut mapping)
            .custom_type(TypeRef::new("shop.types", "TrimmedString"))
            .column_name("ignored")
            .length(320);

        assert_eq!(mapping.value_type().map(TypeRef::name), Some("EmailType"));
        let column = &mapping.columns()[0];
        assert_eq!(column.name(), Some("contact_email"));
        assert_eq!(column.length, Attribute::Explicit(100));
    }

    #[test]
    fn test_inspect_reflects_changes() {
        let mut mapping = mapping();
        let mut instance = PropertyInstance::new(&mut mapping);
        instance
            .sql_type("nvarchar(320)")
            .unique(true)
            .access("field")
            .custom_type(TypeRef::new("shop.types", "EmailType"));

        assert_eq!(instance.inspect().property_type().name(), "EmailType");
        assert_eq!(mapping.access, Attribute::Default("field".to_string()));
        assert!(mapping.columns()[0].is_unique());
        assert_eq!(mapping.columns()[0].sql_type(), Some("NVARCHAR(320)"));
    }

    #[test]
    fn test_column_name_adds_missing_column() {
        let person = TypeRef::new("shop", "Person");
        let mut mapping = PropertyMapping::new(
            person.clone(),
            PropertyDescriptor::new(person, "Nickname", TypeRef::string()),
        );
        PropertyInstance::new(&mut mapping).column_name("nick");
        assert_eq!(mapping.columns().len(), 1);
        assert_eq!(mapping.columns()[0].name(), Some("nick"));
    }
}
