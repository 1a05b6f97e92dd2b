/*!
 * # country-translator
 *
 * Look up translated country names from a JSON dataset.
 *
 * ## Features
 *
 * - Load a dataset of countries keyed by their ISO 3166 alpha-3 code
 * - List countries in dataset order
 * - List the languages a country name is available in
 * - Translate a country name into a language, with distinct results for an
 *   unknown country and an unknown language
 * - Resolve datasets from bundled resources or a data directory
 *
 * ## Architecture
 *
 * - `translator`: the `Translator` trait and the JSON-backed `JsonTranslator`
 * - `resources`: `ResourceProvider` and its bundled / directory implementations
 * - `app_config`: configuration management
 * - `language_utils`: ISO 639 language code utilities for display
 * - `errors`: custom error types
 *
 * ## Example
 *
 * ```
 * use country_translator::{JsonTranslator, Translation, Translator};
 *
 * let json = r#"[{"id": 1, "alpha2": "ca", "alpha3": "can", "en": "Canada", "fr": "Canada"}]"#;
 * let translator = JsonTranslator::from_json_str("inline", json).unwrap();
 *
 * assert_eq!(translator.get_countries(), vec!["can"]);
 * assert_eq!(translator.translate("can", "fr"), Translation::Found("Canada".into()));
 * assert_eq!(translator.translate("can", "de").as_text(), Some("Not Found."));
 * assert_eq!(translator.translate("usa", "en"), Translation::CountryNotFound);
 * ```
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

#![allow(clippy::uninlined_format_args)]

pub mod app_config;
pub mod errors;
pub mod language_utils;
pub mod resources;
pub mod translator;

pub use app_config::Config;
pub use errors::{AppError, LoadError, TranslatorError};
pub use resources::{BundledResources, DEFAULT_RESOURCE, DirectoryResources, ResourceProvider};
pub use translator::{JsonTranslator, NOT_FOUND, Translation, Translator};
