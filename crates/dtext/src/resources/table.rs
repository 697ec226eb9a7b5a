//! Per-language resource tables.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use bon::Builder;
use strsim::levenshtein;
use tracing::debug;

use super::bundle::ResourceBundle;
use super::error::{LoadError, ParseError};
use super::parser::{ResourceBody, ResourceDefinition, parse_resources};
use crate::resolver::{PluralCategory, ResourceKind, TextContext};
use crate::types::{PluralResourceId, ResourceId};

/// A [`TextContext`] backed by resource files.
///
/// A table owns one bundle of string and plural resources per language and
/// resolves against the bundle for its current language. Loading a language
/// again **replaces** its bundle; a failed load leaves the previous bundle
/// in place. The current language is read through [`TextContext::language`].
///
/// # Example
///
/// ```
/// use dtext::{DeferredText, Quantity, ResourceTable};
///
/// let mut table = ResourceTable::builder().language("ru").build();
/// table
///     .load_str("ru", r#"files = { one: "%d файл", few: "%d файла", many: "%d файлов" };"#)
///     .unwrap();
///
/// let text = DeferredText::plural("files", Quantity::with_cardinal(3));
/// assert_eq!(text.resolve(&table).unwrap().content, "3 файла");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct ResourceTable {
    /// Current language code (e.g. "en", "ru", "de").
    #[builder(default = "en".to_string())]
    language: String,

    #[builder(skip)]
    bundles: HashMap<String, ResourceBundle>,

    /// Source files of file-loaded languages, for [`ResourceTable::reload`].
    #[builder(skip)]
    loaded_paths: HashMap<String, PathBuf>,
}

impl Default for ResourceTable {
    fn default() -> Self {
        ResourceTable::builder().build()
    }
}

impl ResourceTable {
    /// Create an empty table with language "en".
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with the given language.
    pub fn with_language(language: impl Into<String>) -> Self {
        ResourceTable::builder().language(language).build()
    }

    /// Change the language used for resolution. Loaded bundles are kept.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Load resources for `language` from a file, remembering the path for
    /// [`ResourceTable::reload`].
    ///
    /// Returns the number of resources loaded.
    pub fn load_file(&mut self, language: &str, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let count = self.load(language, &content, Some(path))?;
        self.loaded_paths
            .insert(language.to_string(), path.to_path_buf());
        Ok(count)
    }

    /// Load resources for `language` from a string.
    ///
    /// Languages loaded this way cannot be reloaded.
    pub fn load_str(&mut self, language: &str, content: &str) -> Result<usize, LoadError> {
        let count = self.load(language, content, None)?;
        self.loaded_paths.remove(language);
        Ok(count)
    }

    /// Re-read the file `language` was loaded from.
    pub fn reload(&mut self, language: &str) -> Result<usize, LoadError> {
        let path =
            self.loaded_paths
                .get(language)
                .cloned()
                .ok_or_else(|| LoadError::NoPathForReload {
                    language: language.to_string(),
                })?;
        self.load_file(language, path)
    }

    /// Add a single string resource.
    pub fn insert_string(
        &mut self,
        language: &str,
        name: &str,
        template: impl Into<String>,
    ) -> Result<(), LoadError> {
        self.bundle_mut(language).insert(ResourceDefinition {
            name: name.to_string(),
            body: ResourceBody::String(template.into()),
        })
    }

    /// Add a single plural resource.
    pub fn insert_plural<S: Into<String>>(
        &mut self,
        language: &str,
        name: &str,
        forms: impl IntoIterator<Item = (PluralCategory, S)>,
    ) -> Result<(), LoadError> {
        let forms: BTreeMap<_, _> = forms
            .into_iter()
            .map(|(category, template)| (category, template.into()))
            .collect();
        self.bundle_mut(language).insert(ResourceDefinition {
            name: name.to_string(),
            body: ResourceBody::Plural(forms),
        })
    }

    /// Names and kinds of the resources loaded for `language`, sorted by name.
    pub fn names(&self, language: &str) -> Vec<(&str, ResourceKind)> {
        self.bundles
            .get(language)
            .map(|bundle| bundle.names().collect())
            .unwrap_or_default()
    }

    /// Number of resources loaded for `language`.
    pub fn len(&self, language: &str) -> usize {
        self.bundles.get(language).map_or(0, ResourceBundle::len)
    }

    /// Whether the current language defines a resource called `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.kind(name).is_some()
    }

    /// The kind of the resource called `name` in the current language.
    pub fn kind(&self, name: &str) -> Option<ResourceKind> {
        self.current()?.kind(name)
    }

    /// Resource names in the current language similar to `name`.
    ///
    /// Up to three names are returned, closest first. Short names (three
    /// characters or fewer) only match at edit distance 1, longer names at
    /// distance 2.
    pub fn suggestions(&self, name: &str) -> Vec<String> {
        let Some(bundle) = self.bundles.get(&self.language) else {
            return Vec::new();
        };
        let max_distance = if name.chars().count() <= 3 { 1 } else { 2 };
        let mut suggestions: Vec<(usize, &str)> = bundle
            .names()
            .filter_map(|(candidate, _)| {
                let distance = levenshtein(name, candidate);
                (distance > 0 && distance <= max_distance).then_some((distance, candidate))
            })
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);
        suggestions
            .into_iter()
            .take(3)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }

    /// Replace the bundle for `language` with already parsed definitions.
    ///
    /// Returns the number of resources loaded. On error the previous bundle
    /// is kept.
    pub fn load_definitions(
        &mut self,
        language: &str,
        definitions: Vec<ResourceDefinition>,
    ) -> Result<usize, LoadError> {
        let bundle = ResourceBundle::from_definitions(language, definitions)?;
        let count = bundle.len();
        self.bundles.insert(language.to_string(), bundle);
        Ok(count)
    }

    fn bundle_mut(&mut self, language: &str) -> &mut ResourceBundle {
        self.bundles
            .entry(language.to_string())
            .or_insert_with(|| ResourceBundle::new(language))
    }

    fn load(&mut self, language: &str, content: &str, path: Option<&Path>) -> Result<usize, LoadError> {
        let source_path = || {
            path.map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(format!("<{language}>")))
        };
        let definitions = parse_resources(content).map_err(|error| match error {
            ParseError::Syntax {
                line,
                column,
                message,
            } => LoadError::Parse {
                path: source_path(),
                line,
                column,
                message,
            },
        })?;
        let count = self.load_definitions(language, definitions)?;
        debug!(language, count, path = ?path, "loaded resources");
        Ok(count)
    }

    fn current(&self) -> Option<&ResourceBundle> {
        self.bundles.get(&self.language)
    }
}

impl TextContext for ResourceTable {
    fn language(&self) -> &str {
        &self.language
    }

    fn lookup_template(&self, id: ResourceId) -> Option<Cow<'_, str>> {
        self.current()?.string(id).map(Cow::Borrowed)
    }

    fn lookup_plural_template(
        &self,
        id: PluralResourceId,
        category: PluralCategory,
    ) -> Option<Cow<'_, str>> {
        self.current()?.plural(id, category).map(Cow::Borrowed)
    }
}
