//! Resources for a single language.

use std::collections::{BTreeMap, HashMap};

use super::error::LoadError;
use super::parser::{ResourceBody, ResourceDefinition};
use crate::resolver::{PluralCategory, ResourceKind};
use crate::types::{PluralResourceId, ResourceId};

/// String and plural resources for one language, indexed by id.
///
/// Names are kept alongside ids so collisions, duplicate definitions and
/// typo suggestions can be reported by name.
#[derive(Debug, Clone, Default)]
pub(crate) struct ResourceBundle {
    language: String,
    strings: HashMap<ResourceId, String>,
    plurals: HashMap<PluralResourceId, BTreeMap<PluralCategory, String>>,
    names: BTreeMap<String, ResourceKind>,
    /// Raw id hash to defining name.
    ids: HashMap<u64, String>,
}

impl ResourceBundle {
    pub(crate) fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
            ..Self::default()
        }
    }

    /// Build a bundle from parsed definitions.
    pub(crate) fn from_definitions(
        language: &str,
        definitions: Vec<ResourceDefinition>,
    ) -> Result<Self, LoadError> {
        let mut bundle = Self::new(language);
        for definition in definitions {
            bundle.insert(definition)?;
        }
        Ok(bundle)
    }

    pub(crate) fn insert(&mut self, definition: ResourceDefinition) -> Result<(), LoadError> {
        let ResourceDefinition { name, body } = definition;
        let kind = match &body {
            ResourceBody::String(_) => ResourceKind::String,
            ResourceBody::Plural(forms) if forms.is_empty() => {
                return Err(LoadError::EmptyPlural {
                    language: self.language.clone(),
                    name,
                });
            }
            ResourceBody::Plural(_) => ResourceKind::Plural,
        };
        self.claim(&name, kind)?;
        match body {
            ResourceBody::String(template) => {
                self.strings.insert(ResourceId::from_name(&name), template);
            }
            ResourceBody::Plural(forms) => {
                self.plurals.insert(PluralResourceId::from_name(&name), forms);
            }
        }
        Ok(())
    }

    /// Reserve `name` and its id, rejecting duplicates and hash collisions.
    fn claim(&mut self, name: &str, kind: ResourceKind) -> Result<(), LoadError> {
        if self.names.contains_key(name) {
            return Err(LoadError::DuplicateName {
                language: self.language.clone(),
                name: name.to_string(),
            });
        }
        let hash = ResourceId::from_name(name).as_u64();
        if let Some(existing) = self.ids.get(&hash) {
            return Err(LoadError::HashCollision {
                existing: existing.clone(),
                name: name.to_string(),
            });
        }
        self.ids.insert(hash, name.to_string());
        self.names.insert(name.to_string(), kind);
        Ok(())
    }

    pub(crate) fn string(&self, id: ResourceId) -> Option<&str> {
        self.strings.get(&id).map(String::as_str)
    }

    /// The form for `category`, falling back to `other`.
    pub(crate) fn plural(&self, id: PluralResourceId, category: PluralCategory) -> Option<&str> {
        let forms = self.plurals.get(&id)?;
        forms
            .get(&category)
            .or_else(|| forms.get(&PluralCategory::Other))
            .map(String::as_str)
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = (&str, ResourceKind)> {
        self.names.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    pub(crate) fn kind(&self, name: &str) -> Option<ResourceKind> {
        self.names.get(name).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }
}
