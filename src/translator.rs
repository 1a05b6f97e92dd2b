/*!
 * Country name translation backed by a JSON dataset.
 *
 * The dataset is a JSON array with one object per country. Each object carries
 * the `alpha3` country code plus one string field per language, keyed by the
 * language identifier. The `id` and `alpha2` fields are identity data and are
 * not treated as translations.
 */

use std::collections::HashMap;
use std::io::Read;

use log::{debug, trace, warn};
use serde_json::{Map, Value};

use crate::errors::{LoadError, TranslatorError};
use crate::resources::{BundledResources, DEFAULT_RESOURCE, ResourceProvider};

/// Text reported when a known country has no translation for a language
pub const NOT_FOUND: &str = "Not Found.";

/// Field holding the country code used as lookup key
const COUNTRY_CODE_FIELD: &str = "alpha3";

/// Fields that never count as translations
const RESERVED_FIELDS: [&str; 3] = ["id", "alpha2", COUNTRY_CODE_FIELD];

/// Outcome of a translation lookup
///
/// The two absence cases stay distinguishable: an unknown country has no
/// textual form at all, while a known country without the requested language
/// reads as [`NOT_FOUND`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    /// The translated country name
    Found(String),
    /// The country is known but has no entry for the language
    LanguageNotFound,
    /// The country code is not in the dataset
    CountryNotFound,
}

impl Translation {
    /// Text of the lookup, `None` for an unknown country
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Found(name) => Some(name),
            Self::LanguageNotFound => Some(NOT_FOUND),
            Self::CountryNotFound => None,
        }
    }

    /// Owned variant of [`Translation::as_text`]
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Found(name) => Some(name),
            Self::LanguageNotFound => Some(NOT_FOUND.to_string()),
            Self::CountryNotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Read-only lookups over country name translations
pub trait Translator {
    /// Country codes in dataset order
    fn get_countries(&self) -> Vec<String>;

    /// Language identifiers available for a country, empty if the country is unknown
    fn get_country_languages(&self, country: &str) -> Vec<String>;

    /// Translate a country's name into a language
    fn translate(&self, country: &str, language: &str) -> Translation;
}

/// Translator populated once from a JSON dataset
#[derive(Debug, Clone)]
pub struct JsonTranslator {
    /// Country codes in the order they appear in the dataset
    country_codes: Vec<String>,

    /// Country code to (language identifier to translated name)
    country_translations: HashMap<String, HashMap<String, String>>,
}

impl JsonTranslator {
    /// Build a translator from the bundled default dataset
    pub fn new() -> Result<Self, TranslatorError> {
        Self::from_resource(&BundledResources, DEFAULT_RESOURCE)
    }

    /// Build a translator from a named resource
    pub fn from_resource<P>(provider: &P, name: &str) -> Result<Self, TranslatorError>
    where
        P: ResourceProvider + ?Sized,
    {
        let reader = provider
            .open(name)
            .map_err(|e| TranslatorError::initialization(name, e))?;
        Self::from_reader(name, reader)
    }

    /// Build a translator from a stream of JSON data
    ///
    /// `resource` only labels errors and log lines.
    pub fn from_reader<R: Read>(resource: &str, reader: R) -> Result<Self, TranslatorError> {
        let translator =
            Self::parse(reader).map_err(|e| TranslatorError::initialization(resource, e))?;

        debug!(
            "Loaded {} countries from '{}'",
            translator.country_codes.len(),
            resource
        );
        Ok(translator)
    }

    /// Build a translator from an in-memory JSON string
    pub fn from_json_str(resource: &str, json: &str) -> Result<Self, TranslatorError> {
        Self::from_reader(resource, json.as_bytes())
    }

    fn parse<R: Read>(mut reader: R) -> Result<Self, LoadError> {
        // Read errors are reported as Io, parse errors as Format
        let mut contents = Vec::new();
        reader.read_to_end(&mut contents)?;
        let records: Vec<Map<String, Value>> = serde_json::from_slice(&contents)?;

        let mut country_codes = Vec::with_capacity(records.len());
        let mut country_translations = HashMap::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            let (code, translations) = extract_record(index, record)?;
            trace!("Record {}: '{}' with {} languages", index, code, translations.len());

            if country_translations.insert(code.clone(), translations).is_some() {
                warn!("Duplicate country code '{}' at record {}, later entry wins", code, index);
            }
            country_codes.push(code);
        }

        Ok(Self {
            country_codes,
            country_translations,
        })
    }

    /// Number of records loaded, duplicates included
    pub fn len(&self) -> usize {
        self.country_codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.country_codes.is_empty()
    }
}

/// Split one record into its country code and language map
fn extract_record(
    index: usize,
    record: Map<String, Value>,
) -> Result<(String, HashMap<String, String>), LoadError> {
    let invalid = |reason: String| LoadError::InvalidRecord { index, reason };

    let code = match record.get(COUNTRY_CODE_FIELD) {
        Some(Value::String(code)) => code.clone(),
        Some(other) => {
            return Err(invalid(format!(
                "field '{}' must be a string, found {}",
                COUNTRY_CODE_FIELD, other
            )));
        }
        None => {
            return Err(invalid(format!(
                "missing required field '{}'",
                COUNTRY_CODE_FIELD
            )));
        }
    };

    let mut translations = HashMap::with_capacity(record.len());
    for (key, value) in record {
        if RESERVED_FIELDS.contains(&key.as_str()) {
            continue;
        }
        match value {
            Value::String(name) => {
                translations.insert(key, name);
            }
            other => {
                return Err(invalid(format!(
                    "translation '{}' for '{}' must be a string, found {}",
                    key, code, other
                )));
            }
        }
    }

    Ok((code, translations))
}

impl Translator for JsonTranslator {
    fn get_countries(&self) -> Vec<String> {
        self.country_codes.clone()
    }

    fn get_country_languages(&self, country: &str) -> Vec<String> {
        self.country_translations
            .get(country)
            .map(|translations| translations.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn translate(&self, country: &str, language: &str) -> Translation {
        match self.country_translations.get(country) {
            Some(translations) => translations
                .get(language)
                .map_or(Translation::LanguageNotFound, |name| {
                    Translation::Found(name.clone())
                }),
            None => Translation::CountryNotFound,
        }
    }
}
