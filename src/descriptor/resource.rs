//! Resources attached to a component.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use super::spec::{AccessSpec, HelmInput, InputSpec, OciArtifactAccess};

/// Version given to image resources; templates carry no usable image version.
pub const PLACEHOLDER_IMAGE_VERSION: &str = "0.0.1";

/// Whether an artifact is shipped with the component or referenced externally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Local,
    External,
}

/// Resource type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    HelmChart,
    OciArtifact,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HelmChart => "helmChart",
            Self::OciArtifact => "ociArtifact",
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity and classification of a resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceMeta {
    pub name: String,
    pub version: String,
    pub resource_type: ResourceType,
    pub relation: Relation,
}

/// How the resource's content is obtained. Exactly one of the two, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceSpec {
    Input(InputSpec),
    Access(AccessSpec),
}

/// One artifact or reference attached to a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub meta: ResourceMeta,
    pub spec: ResourceSpec,
}

impl Resource {
    /// The chart itself, embedded from `input.path`.
    pub fn helm_chart(name: impl Into<String>, input: HelmInput) -> Self {
        Self {
            meta: ResourceMeta {
                name: name.into(),
                version: input.version.clone(),
                resource_type: ResourceType::HelmChart,
                relation: Relation::Local,
            },
            spec: ResourceSpec::Input(InputSpec::Helm(input)),
        }
    }

    /// The `index`-th image found in a chart, named `image<index>`.
    pub fn image(index: usize, access: OciArtifactAccess) -> Self {
        Self {
            meta: ResourceMeta {
                name: format!("image{index}"),
                version: PLACEHOLDER_IMAGE_VERSION.to_string(),
                resource_type: ResourceType::OciArtifact,
                relation: Relation::External,
            },
            spec: ResourceSpec::Access(AccessSpec::OciArtifact(access)),
        }
    }

    pub fn name(&self) -> &str {
        &self.meta.name
    }

    pub fn version(&self) -> &str {
        &self.meta.version
    }

    pub fn input(&self) -> Option<&InputSpec> {
        match &self.spec {
            ResourceSpec::Input(input) => Some(input),
            ResourceSpec::Access(_) => None,
        }
    }

    pub fn access(&self) -> Option<&AccessSpec> {
        match &self.spec {
            ResourceSpec::Access(access) => Some(access),
            ResourceSpec::Input(_) => None,
        }
    }
}

impl Serialize for Resource {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(5))?;
        map.serialize_entry("name", &self.meta.name)?;
        map.serialize_entry("version", &self.meta.version)?;
        map.serialize_entry("type", self.meta.resource_type.as_str())?;
        map.serialize_entry("relation", &self.meta.relation)?;
        match &self.spec {
            ResourceSpec::Input(input) => map.serialize_entry("input", &input.to_unstructured())?,
            ResourceSpec::Access(access) => {
                map.serialize_entry("access", &access.to_unstructured())?;
            }
        }
        map.end()
    }
}
