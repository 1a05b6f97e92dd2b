/*!
 * Integration tests over bundled and on-disk datasets
 */

use anyhow::Result;
use country_translator::{
    DirectoryResources, JsonTranslator, LoadError, NOT_FOUND, Translation, Translator,
};
use std::collections::HashSet;

use crate::common::{self, NORTH_AMERICA_JSON, sorted};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_bundledDataset_withDefaultConstructor_shouldLoad() -> Result<()> {
    init_logging();
    let translator = JsonTranslator::new()?;

    let countries = translator.get_countries();
    assert_eq!(countries.len(), 15);
    assert_eq!(countries[0], "can");
    assert!(countries.contains(&"deu".to_string()));

    let unique: HashSet<&String> = countries.iter().collect();
    assert_eq!(unique.len(), countries.len());
    Ok(())
}

#[test]
fn test_bundledDataset_shouldTranslateKnownNames() -> Result<()> {
    let translator = JsonTranslator::new()?;

    assert_eq!(translator.translate("can", "fr").as_text(), Some("Canada"));
    assert_eq!(translator.translate("deu", "de").as_text(), Some("Deutschland"));
    assert_eq!(translator.translate("jpn", "ja").as_text(), Some("日本"));
    assert_eq!(translator.translate("esp", "es").as_text(), Some("España"));
    assert_eq!(translator.translate("can", "tlh").as_text(), Some(NOT_FOUND));
    assert_eq!(translator.translate("atl", "en"), Translation::CountryNotFound);
    Ok(())
}

#[test]
fn test_bundledDataset_everyCountry_shouldHaveSameLanguages() -> Result<()> {
    let translator = JsonTranslator::new()?;
    let expected = vec!["de", "en", "es", "fr", "it", "ja", "nl", "pl", "pt", "ru", "zh"];

    for country in translator.get_countries() {
        assert_eq!(sorted(translator.get_country_languages(&country)), expected);
        for language in translator.get_country_languages(&country) {
            assert!(translator.translate(&country, &language).is_found());
        }
    }
    Ok(())
}

#[test]
fn test_directoryDataset_shouldMatchInlineLoad() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "north_america.json", NORTH_AMERICA_JSON)?;

    let from_disk = JsonTranslator::from_resource(
        &DirectoryResources::new(temp_dir.path()),
        "north_america.json",
    )?;
    let inline = JsonTranslator::from_json_str("inline", NORTH_AMERICA_JSON)?;

    assert_eq!(from_disk.get_countries(), inline.get_countries());
    for country in inline.get_countries() {
        assert_eq!(
            sorted(from_disk.get_country_languages(&country)),
            sorted(inline.get_country_languages(&country))
        );
        for language in inline.get_country_languages(&country) {
            assert_eq!(
                from_disk.translate(&country, &language),
                inline.translate(&country, &language)
            );
        }
    }
    Ok(())
}

#[test]
fn test_directoryDataset_withMalformedFile_shouldFailAtomically() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(
        temp_dir.path(),
        "broken.json",
        r#"[{"alpha3": "can", "en": "Canada"}, {"alpha3": "usa", "en": ["United", "States"]}]"#,
    )?;

    let result = JsonTranslator::from_resource(&DirectoryResources::new(temp_dir.path()), "broken.json");
    let error = result.unwrap_err();
    assert!(matches!(error.load_error(), LoadError::InvalidRecord { index: 1, .. }));
    Ok(())
}

#[test]
fn test_translator_sharedAcrossThreads_shouldAnswerConsistently() -> Result<()> {
    let translator = std::sync::Arc::new(JsonTranslator::new()?);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let translator = translator.clone();
            std::thread::spawn(move || translator.translate("fra", "it"))
        })
        .collect();

    for handle in handles {
        let result = handle.join().expect("reader thread panicked");
        assert_eq!(result, Translation::Found("Francia".to_string()));
    }
    Ok(())
}
