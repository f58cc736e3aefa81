//! Convention lookup
//!
//! Conventions are registered once at configuration time, either into a
//! per-session [`ConventionRegistry`] or into the process-wide registry
//! installed with [`install_global`]. Lookups only read.

use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};

use super::convention::{Capability, Convention, PropertyConvention, UserType};
use crate::error::{AutomapError, AutomapResult};

/// Source of registered conventions
pub trait ConventionFinder {
    /// All conventions providing `capability`, in registration order
    fn find(&self, capability: Capability) -> Box<dyn Iterator<Item = &Convention> + '_>;
}

impl<F: ConventionFinder + ?Sized> ConventionFinder for &F {
    fn find(&self, capability: Capability) -> Box<dyn Iterator<Item = &Convention> + '_> {
        (**self).find(capability)
    }
}

impl<F: ConventionFinder + ?Sized> ConventionFinder for Arc<F> {
    fn find(&self, capability: Capability) -> Box<dyn Iterator<Item = &Convention> + '_> {
        (**self).find(capability)
    }
}

/// Ordered set of conventions with unique names
#[derive(Debug, Clone, Default)]
pub struct ConventionRegistry {
    conventions: Vec<Convention>,
}

impl ConventionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from conventions in order
    pub fn from_conventions(
        conventions: impl IntoIterator<Item = Convention>,
    ) -> AutomapResult<Self> {
        let mut registry = Self::new();
        for convention in conventions {
            registry.register(convention)?;
        }
        Ok(registry)
    }

    /// Builder-style [`register`](Self::register)
    pub fn with(mut self, convention: Convention) -> AutomapResult<Self> {
        self.register(convention)?;
        Ok(self)
    }

    /// Append a convention; names must be unique
    pub fn register(&mut self, convention: Convention) -> AutomapResult<&mut Self> {
        if self.conventions.iter().any(|c| c.name() == convention.name()) {
            return Err(AutomapError::DuplicateConvention(
                convention.name().to_string(),
            ));
        }
        tracing::debug!(
            convention = convention.name(),
            kind = ?convention.kind(),
            position = self.conventions.len(),
            "Registered convention"
        );
        self.conventions.push(convention);
        Ok(self)
    }

    /// Register a plain property convention
    pub fn add_property_convention<C: PropertyConvention + 'static>(
        &mut self,
        convention: C,
    ) -> AutomapResult<&mut Self> {
        self.register(Convention::property(convention))
    }

    /// Register a user-type convention
    pub fn add_user_type<T: UserType>(&mut self, user_type: T) -> AutomapResult<&mut Self> {
        self.register(Convention::user_type(user_type))
    }

    pub fn len(&self) -> usize {
        self.conventions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conventions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Convention> {
        self.conventions.iter()
    }
}

impl ConventionFinder for ConventionRegistry {
    fn find(&self, capability: Capability) -> Box<dyn Iterator<Item = &Convention> + '_> {
        Box::new(
            self.conventions
                .iter()
                .filter(move |c| c.provides(capability)),
        )
    }
}

static GLOBAL_REGISTRY: OnceCell<ConventionRegistry> = OnceCell::new();
static EMPTY_REGISTRY: Lazy<ConventionRegistry> = Lazy::new(ConventionRegistry::new);

/// Install the process-wide registry. Can only be done once.
pub fn install_global(registry: ConventionRegistry) -> AutomapResult<()> {
    let count = registry.len();
    GLOBAL_REGISTRY
        .set(registry)
        .map_err(|_| AutomapError::GlobalRegistryInstalled)?;
    tracing::info!(conventions = count, "Installed global convention registry");
    Ok(())
}

/// The process-wide registry, or an empty one if none is installed
pub fn global() -> &'static ConventionRegistry {
    GLOBAL_REGISTRY.get().unwrap_or(&EMPTY_REGISTRY)
}
