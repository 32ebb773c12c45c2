//! Input and access specifications attached to resources.
//!
//! Both are closed unions over the variants this tool produces. Each variant
//! converts its own fields into an [`Unstructured`] mapping; the union puts its
//! discriminator in front as `type`. That mapping is what gets written into the
//! descriptor.

use serde::ser::{Serialize, SerializeMap, Serializer};

const TYPE_KEY: &str = "type";

/// Flat, insertion-ordered mapping from a declared field key to its scalar value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Unstructured(Vec<(&'static str, String)>);

impl Unstructured {
    /// Build a mapping from `(key, value)` pairs, keeping their order.
    pub fn from_pairs<I, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, V)>,
        V: Into<String>,
    {
        Self(pairs.into_iter().map(|(k, v)| (k, v.into())).collect())
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Prepend the `type` discriminator to a variant's fields.
    pub fn tagged(kind: &'static str, fields: Self) -> Self {
        let mut pairs = Vec::with_capacity(fields.0.len() + 1);
        pairs.push((TYPE_KEY, kind.to_string()));
        pairs.extend(fields.0);
        Self(pairs)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Unstructured {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Conversion of a variant's own fields into a flat mapping, without its `type`.
pub trait ToUnstructured {
    fn to_unstructured(&self) -> Unstructured;
}

/// Input that embeds a Helm chart from the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelmInput {
    /// Chart version, as resolved from Chart.yaml
    pub version: String,

    /// Location the chart was harvested from, as passed by the caller
    pub path: String,
}

impl HelmInput {
    pub const TYPE: &'static str = "helm";

    const KEY_VERSION: &'static str = "version";
    const KEY_PATH: &'static str = "path";

    pub fn new(version: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            path: path.into(),
        }
    }
}

impl ToUnstructured for HelmInput {
    fn to_unstructured(&self) -> Unstructured {
        Unstructured::from_pairs([
            (Self::KEY_VERSION, self.version.clone()),
            (Self::KEY_PATH, self.path.clone()),
        ])
    }
}

/// Access to an image living in an OCI registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OciArtifactAccess {
    pub image_reference: String,
}

impl OciArtifactAccess {
    pub const TYPE: &'static str = "ociArtifact";

    const KEY_IMAGE_REFERENCE: &'static str = "imageReference";

    pub fn new(image_reference: impl Into<String>) -> Self {
        Self {
            image_reference: image_reference.into(),
        }
    }

    /// Actionable stub for an image found in a template.
    ///
    /// Templated image values cannot be resolved statically, so the reference
    /// carries the raw match and its file for an operator to replace by hand.
    pub fn placeholder(raw_image: &str, file: &str) -> Self {
        Self::new(format!(
            "# replace reference for image value: {raw_image} in file {file}"
        ))
    }
}

impl ToUnstructured for OciArtifactAccess {
    fn to_unstructured(&self) -> Unstructured {
        Unstructured::from_pairs([
            (Self::KEY_IMAGE_REFERENCE, self.image_reference.clone()),
        ])
    }
}

/// Artifacts embedded into the component from local content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSpec {
    Helm(HelmInput),
}

impl InputSpec {
    /// Discriminator written as the input's `type`.
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Helm(_) => HelmInput::TYPE,
        }
    }

    pub fn to_unstructured(&self) -> Unstructured {
        let fields = match self {
            Self::Helm(input) => input.to_unstructured(),
        };
        Unstructured::tagged(self.input_type(), fields)
    }
}

/// References to artifacts that stay where they are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessSpec {
    OciArtifact(OciArtifactAccess),
}

impl AccessSpec {
    /// Discriminator written as the access' `type`.
    pub fn access_type(&self) -> &'static str {
        match self {
            Self::OciArtifact(_) => OciArtifactAccess::TYPE,
        }
    }

    pub fn to_unstructured(&self) -> Unstructured {
        let fields = match self {
            Self::OciArtifact(access) => access.to_unstructured(),
        };
        Unstructured::tagged(self.access_type(), fields)
    }
}
