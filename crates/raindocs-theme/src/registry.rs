//! Theme component registration.
//!
//! The rendering framework extends its default theme with custom UI
//! components referenced by name from page content. The registry is a
//! flat name-to-source table: the framework resolves each source path
//! itself, raindocs only guarantees the names are unique and hands the
//! table over in the site manifest.

use serde::{Deserialize, Serialize};

/// One theme component: the name pages use and the source file that
/// implements it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentEntry {
    /// Component name as referenced from page content.
    pub name: String,
    /// Source path the rendering framework loads the component from.
    pub source: String,
}

impl ComponentEntry {
    /// Create an entry.
    #[must_use]
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}

/// Error raised while registering theme components.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// Component name registered more than once.
    #[error("Duplicate theme component '{0}'")]
    DuplicateComponent(String),
    /// Component name is empty.
    #[error("Theme component name cannot be empty")]
    EmptyComponentName,
}

/// Name-to-source table of theme components, in registration order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ComponentRegistry {
    components: Vec<ComponentEntry>,
}

impl ComponentRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the components the rainy-toolkit docs
    /// reference from generated API pages.
    #[must_use]
    pub fn builtin() -> Self {
        let components = [
            "DeclarationTable",
            "ParameterSection",
            "ReturnValueSection",
            "DescriptSection",
            "AttentionSection",
            "RemarkSection",
            "InnerMemberDefine",
        ]
        .into_iter()
        .map(|name| ComponentEntry::new(name, format!("components/{name}.vue")))
        .collect();
        Self { components }
    }

    /// Register a component, keeping registration order.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::DuplicateComponent`] if the name is already
    /// registered, or [`ThemeError::EmptyComponentName`] for an empty
    /// name.
    pub fn register(&mut self, entry: ComponentEntry) -> Result<(), ThemeError> {
        if entry.name.is_empty() {
            return Err(ThemeError::EmptyComponentName);
        }
        if self.get(&entry.name).is_some() {
            return Err(ThemeError::DuplicateComponent(entry.name));
        }
        self.components.push(entry);
        Ok(())
    }

    /// Entry registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ComponentEntry> {
        self.components.iter().find(|entry| entry.name == name)
    }

    /// All entries, in registration order.
    #[must_use]
    pub fn components(&self) -> &[ComponentEntry] {
        &self.components
    }

    /// Number of registered components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
