//! Component descriptor model
//!
//! A [`Component`] is the unit being described: a named, versioned artifact with a
//! provider and an ordered list of [`Resource`]s. Resources are only ever appended.
//! Components are wrapped into a [`ComponentConstructor`] document for output.

pub mod render;
pub mod resource;
pub mod spec;

pub use render::{OutputFormat, render, write_to_dir};
pub use resource::{
    PLACEHOLDER_IMAGE_VERSION, Relation, Resource, ResourceMeta, ResourceSpec, ResourceType,
};
pub use spec::{AccessSpec, HelmInput, InputSpec, OciArtifactAccess, ToUnstructured, Unstructured};

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::error::{Result, component_name_missing};

/// Component version used when none is given.
pub const DEFAULT_COMPONENT_VERSION: &str = "0.1.0";

/// Provider used when none is given.
pub const DEFAULT_PROVIDER: &str = "ocm";

/// Name, version and provider of a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentIdentity {
    pub name: String,
    pub version: String,
    pub provider: String,
}

impl ComponentIdentity {
    /// Create an identity; the name must not be empty.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        provider: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(component_name_missing());
        }
        Ok(Self {
            name,
            version: version.into(),
            provider: provider.into(),
        })
    }

    /// Identity with the default version and provider.
    pub fn with_defaults(name: impl Into<String>) -> Result<Self> {
        Self::new(name, DEFAULT_COMPONENT_VERSION, DEFAULT_PROVIDER)
    }
}

/// One component version and its resources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    identity: ComponentIdentity,
    resources: Vec<Resource>,
}

impl Component {
    pub fn new(identity: ComponentIdentity) -> Self {
        Self {
            identity,
            resources: Vec::new(),
        }
    }

    pub fn identity(&self) -> &ComponentIdentity {
        &self.identity
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Append a resource. Name collisions are not checked.
    pub fn push_resource(&mut self, resource: Resource) {
        self.resources.push(resource);
    }
}

struct ProviderRef<'a>(&'a str);

impl Serialize for ProviderRef<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("name", self.0)?;
        map.end()
    }
}

impl Serialize for Component {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("name", &self.identity.name)?;
        map.serialize_entry("version", &self.identity.version)?;
        map.serialize_entry("provider", &ProviderRef(&self.identity.provider))?;
        map.serialize_entry("resources", &self.resources)?;
        map.end()
    }
}

/// Top-level document listing the components to construct
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComponentConstructor {
    pub components: Vec<Component>,
}

impl ComponentConstructor {
    pub fn new(components: Vec<Component>) -> Self {
        Self { components }
    }
}
