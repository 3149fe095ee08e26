//! Typed lookups over a template's resources
//!
//! Lookups treat typed and generic entries alike: a generic entry whose
//! `Type` matches the requested kind is decoded on demand, so kinds that were
//! unknown when the template was loaded can still be read back typed.

use super::Template;
use crate::error::{Error, Result};
use crate::resource::ResourceKind;
use indexmap::IndexMap;

impl Template {
    /// All resources of kind `T`, keyed by logical id.
    ///
    /// Generic entries of this kind that do not decode are left out.
    /// Use [`try_resources_of`](Self::try_resources_of) to see those failures.
    pub fn resources_of<T: ResourceKind>(&self) -> IndexMap<String, T> {
        let mut found = IndexMap::new();
        for (logical_id, resource) in &self.resources {
            match resource.resolve::<T>() {
                Ok(Some(value)) => {
                    found.insert(logical_id.clone(), value);
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::debug!("Skipping {} as {}: {}", logical_id, T::KIND, err);
                }
            }
        }
        found
    }

    /// Like [`resources_of`](Self::resources_of), but the first entry of
    /// kind `T` that fails to decode is returned as an error.
    pub fn try_resources_of<T: ResourceKind>(&self) -> Result<IndexMap<String, T>> {
        let mut found = IndexMap::new();
        for (logical_id, resource) in &self.resources {
            let resolved = resource.resolve::<T>().map_err(|source| Error::Decode {
                logical_id: logical_id.clone(),
                kind: T::KIND.to_string(),
                source,
            })?;
            if let Some(value) = resolved {
                found.insert(logical_id.clone(), value);
            }
        }
        Ok(found)
    }

    /// The resource `name` as kind `T`.
    ///
    /// [`Error::NotFound`] when there is no such entry or it is of another
    /// kind; [`Error::Decode`] when it is of kind `T` but does not decode.
    pub fn resource<T: ResourceKind>(&self, name: &str) -> Result<T> {
        let Some(resource) = self.resources.get(name) else {
            return Err(Error::not_found(name, T::KIND));
        };

        match resource.resolve::<T>() {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Err(Error::not_found(name, T::KIND)),
            Err(source) => Err(Error::Decode {
                logical_id: name.to_string(),
                kind: T::KIND.to_string(),
                source,
            }),
        }
    }

    /// Logical ids whose `Type` is `kind`, typed or not
    pub fn resource_ids_of(&self, kind: &str) -> Vec<&str> {
        self.resources
            .iter()
            .filter(|(_, resource)| resource.kind() == kind)
            .map(|(logical_id, _)| logical_id.as_str())
            .collect()
    }

    /// Resource count per kind, in order of first appearance
    pub fn kinds(&self) -> IndexMap<&str, usize> {
        let mut counts = IndexMap::new();
        for resource in self.resources.values() {
            *counts.entry(resource.kind()).or_insert(0) += 1;
        }
        counts
    }
}
