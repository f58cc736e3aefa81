//! Convention types
//!
//! A [`Convention`] wraps a [`PropertyConvention`] together with an explicit
//! kind discriminator. User-type conventions are recognised by that
//! discriminator alone, so finding them never depends on names or on
//! inspecting concrete Rust types.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::criteria::AcceptanceCriteria;
use super::inspector::PropertyInspector;
use super::instance::PropertyInstance;
use crate::models::TypeRef;

/// A rule that adjusts property mappings it accepts
pub trait PropertyConvention: Send + Sync {
    /// Name used for registration and logging
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Declare the criteria under which this convention applies.
    /// Declaring nothing applies the convention to every property.
    fn accept(&self, _criteria: &mut AcceptanceCriteria<PropertyInspector>) {}

    /// Adjust an accepted property mapping
    fn apply(&self, instance: &mut PropertyInstance<'_>);
}

/// A custom type that persists values of another type
///
/// ```rust
/// use orm_automap::conventions::UserType;
/// use orm_automap::models::TypeRef;
///
/// struct MoneyType;
///
/// impl UserType for MoneyType {
///     fn type_ref(&self) -> TypeRef {
///         TypeRef::new("shop.types", "MoneyType")
///     }
///
///     fn returned_type(&self) -> TypeRef {
///         TypeRef::new("shop", "Money")
///     }
/// }
/// ```
pub trait UserType: Send + Sync + 'static {
    /// The user type itself
    fn type_ref(&self) -> TypeRef;

    /// The value type this user type persists
    fn returned_type(&self) -> TypeRef;

    /// Additional criteria, on top of the implicit value-type filter
    fn accept(&self, _criteria: &mut AcceptanceCriteria<PropertyInspector>) {}
}

/// Convention mapping every property of `T::returned_type()` through `T`
pub struct UserTypeConvention<T: UserType> {
    user_type: T,
    name: String,
}

impl<T: UserType> UserTypeConvention<T> {
    pub fn new(user_type: T) -> Self {
        let name = format!("user-type:{}", user_type.type_ref());
        Self { user_type, name }
    }

    pub fn user_type(&self) -> &T {
        &self.user_type
    }
}

impl<T: UserType> PropertyConvention for UserTypeConvention<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn accept(&self, criteria: &mut AcceptanceCriteria<PropertyInspector>) {
        criteria.type_is(self.user_type.returned_type());
        self.user_type.accept(criteria);
    }

    fn apply(&self, instance: &mut PropertyInstance<'_>) {
        instance.custom_type(self.user_type.type_ref());
    }
}

/// Discriminator for the variants of [`Convention`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConventionKind {
    /// Plain property convention
    Property,
    /// User-type convention over a specific value type
    UserType,
}

/// Capability requested from a convention finder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Everything that applies to properties, user-type conventions included
    Property,
    /// User-type conventions only
    UserType,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Property => write!(f, "property"),
            Capability::UserType => write!(f, "user_type"),
        }
    }
}

/// A registered convention
#[derive(Clone)]
pub struct Convention {
    kind: ConventionKind,
    inner: Arc<dyn PropertyConvention>,
}

impl Convention {
    /// Wrap a plain property convention
    pub fn property<C: PropertyConvention + 'static>(convention: C) -> Self {
        Self {
            kind: ConventionKind::Property,
            inner: Arc::new(convention),
        }
    }

    /// Wrap a user type in a [`UserTypeConvention`]
    pub fn user_type<T: UserType>(user_type: T) -> Self {
        Self {
            kind: ConventionKind::UserType,
            inner: Arc::new(UserTypeConvention::new(user_type)),
        }
    }

    pub fn kind(&self) -> ConventionKind {
        self.kind
    }

    pub fn is_user_type(&self) -> bool {
        self.kind == ConventionKind::UserType
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Whether this convention is found when `capability` is requested
    pub fn provides(&self, capability: Capability) -> bool {
        match capability {
            Capability::Property => true,
            Capability::UserType => self.is_user_type(),
        }
    }

    /// Collect the criteria the convention declares
    pub fn criteria(&self) -> AcceptanceCriteria<PropertyInspector> {
        let mut criteria = AcceptanceCriteria::new();
        self.inner.accept(&mut criteria);
        criteria
    }

    /// Whether the convention's criteria accept `inspector`
    pub fn accepts(&self, inspector: &PropertyInspector) -> bool {
        self.criteria().matches(inspector)
    }

    pub fn apply(&self, instance: &mut PropertyInstance<'_>) {
        self.inner.apply(instance);
    }
}

impl fmt::Debug for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Convention")
            .field("kind", &self.kind)
            .field("name", &self.name())
            .finish()
    }
}
