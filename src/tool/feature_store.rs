//! Abstract access to feature collections.

use crate::tool::ToolError;

/// A geometry with an identifier and opaque attributes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Feature<G, A> {
    /// The identifier of this feature in its collection.
    pub id: u64,
    /// The geometry of this feature.
    pub geometry: G,
    /// The attributes of this feature, copied as-is to the features derived from it.
    pub attributes: A,
}

/// A read-only collection of features.
pub trait FeatureSource<G> {
    /// The attributes attached to each feature.
    type Attributes;

    /// The number of features of this collection.
    fn count(&self) -> usize;

    /// An iterator through all the features of this collection.
    fn features(&self) -> Box<dyn Iterator<Item = &Feature<G, Self::Attributes>> + '_>;
}

/// A collection features can be written to.
pub trait FeatureSink<G, A> {
    /// The name of this collection, used in error messages.
    fn name(&self) -> &str;

    /// Does this collection already exist?
    ///
    /// Tools refuse to write to an existing collection.
    fn exists(&self) -> bool;

    /// Appends a feature to this collection.
    fn insert(&mut self, geometry: G, attributes: A) -> Result<(), ToolError>;
}

/// An in-memory feature collection.
///
/// A memory layer exists as soon as it holds a feature.
#[derive(Clone, Debug, PartialEq)]
pub struct MemoryLayer<G, A> {
    name: String,
    features: Vec<Feature<G, A>>,
}

impl<G, A> MemoryLayer<G, A> {
    /// Creates an empty layer.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            features: Vec::new(),
        }
    }

    /// Creates a layer from geometries and their attributes, numbered from 1.
    pub fn from_features(
        name: impl Into<String>,
        features: impl IntoIterator<Item = (G, A)>,
    ) -> Self {
        let mut result = Self::new(name);
        for (geometry, attributes) in features {
            let _ = result.push(geometry, attributes);
        }
        result
    }

    /// Appends a feature and returns its identifier.
    pub fn push(&mut self, geometry: G, attributes: A) -> u64 {
        let id = self.features.len() as u64 + 1;
        self.features.push(Feature {
            id,
            geometry,
            attributes,
        });
        id
    }

    /// The features of this layer.
    pub fn as_slice(&self) -> &[Feature<G, A>] {
        &self.features
    }

    /// The number of features of this layer.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Does this layer hold no feature?
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl<G, A> FeatureSource<G> for MemoryLayer<G, A> {
    type Attributes = A;

    fn count(&self) -> usize {
        self.features.len()
    }

    fn features(&self) -> Box<dyn Iterator<Item = &Feature<G, A>> + '_> {
        Box::new(self.features.iter())
    }
}

impl<G, A> FeatureSink<G, A> for MemoryLayer<G, A> {
    fn name(&self) -> &str {
        &self.name
    }

    fn exists(&self) -> bool {
        !self.features.is_empty()
    }

    fn insert(&mut self, geometry: G, attributes: A) -> Result<(), ToolError> {
        let _ = self.push(geometry, attributes);
        Ok(())
    }
}
