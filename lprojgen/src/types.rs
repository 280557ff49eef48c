//! Term records as exported by the translation service.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// Standard CLDR plural categories, in their conventional order.
pub const QUANTITY_TAGS: [&str; 6] = ["zero", "one", "two", "few", "many", "other"];

/// Returns `true` when `tag` is one of the CLDR plural categories.
pub fn is_quantity_tag(tag: &str) -> bool {
    QUANTITY_TAGS.contains(&tag)
}

/// Quantity tag → pluralized text, in export order.
pub type PluralForms = IndexMap<String, String>;

/// Literal token → replacement, applied in order.
pub type Substitutions = IndexMap<String, String>;

/// The text of a term: either one string, or one string per plural category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawDefinition")]
pub enum Definition {
    Singular(String),
    Plural(PluralForms),
}

// Exports occasionally carry `null` for plural categories nobody translated yet.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDefinition {
    Singular(String),
    Plural(IndexMap<String, Option<String>>),
}

impl From<RawDefinition> for Definition {
    fn from(raw: RawDefinition) -> Self {
        match raw {
            RawDefinition::Singular(text) => Definition::Singular(text),
            RawDefinition::Plural(forms) => Definition::Plural(
                forms
                    .into_iter()
                    .filter_map(|(tag, text)| text.map(|text| (tag, text)))
                    .collect(),
            ),
        }
    }
}

impl Definition {
    pub fn plural<K: Into<String>, V: Into<String>>(
        forms: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        Definition::Plural(
            forms
                .into_iter()
                .map(|(tag, text)| (tag.into(), text.into()))
                .collect(),
        )
    }

    /// An empty string, or a plural mapping without any entry.
    pub fn is_empty(&self) -> bool {
        match self {
            Definition::Singular(text) => text.is_empty(),
            Definition::Plural(forms) => forms.is_empty(),
        }
    }

    /// The text used where only one form fits.
    ///
    /// Plural definitions yield the `one` form, or their first form for languages that
    /// make no singular/plural distinction.
    pub fn singular_text(&self) -> Option<&str> {
        match self {
            Definition::Singular(text) => Some(text),
            Definition::Plural(forms) => forms
                .get("one")
                .or_else(|| forms.first().map(|(_, text)| text))
                .map(String::as_str),
        }
    }

    pub fn as_plural(&self) -> Option<&PluralForms> {
        match self {
            Definition::Singular(_) => None,
            Definition::Plural(forms) => Some(forms),
        }
    }
}

impl From<&str> for Definition {
    fn from(text: &str) -> Self {
        Definition::Singular(text.to_string())
    }
}

impl From<String> for Definition {
    fn from(text: String) -> Self {
        Definition::Singular(text)
    }
}

/// One translatable string, as listed by the translation service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct TermRecord {
    /// Identifier of the string, used as the key in generated files.
    #[serde(default, deserialize_with = "null_as_default")]
    pub term: String,

    #[serde(default)]
    pub definition: Option<Definition>,

    /// Note for translators.
    #[serde(default, deserialize_with = "null_as_default")]
    pub comment: String,

    /// Destination of the term in the `.strings` output, e.g. `en.lproj/Localizable.strings`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub context: String,

    /// Key used in `.stringsdict` output instead of `term`, when set.
    #[serde(default)]
    pub term_plural: Option<String>,
}

impl TermRecord {
    pub fn new(term: impl Into<String>, definition: impl Into<Definition>) -> Self {
        TermRecord {
            term: term.into(),
            definition: Some(definition.into()),
            ..Default::default()
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    pub fn with_term_plural(mut self, term_plural: impl Into<String>) -> Self {
        self.term_plural = Some(term_plural.into());
        self
    }

    /// Whether the record lacks a term or a usable definition.
    pub fn is_incomplete(&self) -> bool {
        self.term.is_empty() || self.definition.as_ref().is_none_or(Definition::is_empty)
    }

    /// The key under which this term appears in a `.stringsdict` file.
    pub fn plural_key(&self) -> &str {
        match self.term_plural.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => &self.term,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
