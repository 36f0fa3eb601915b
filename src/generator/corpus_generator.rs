// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{
    collections::BTreeSet,
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use log::{debug, info, warn};

use super::errors::{FakerError, GenerateError};
use crate::{
    constants::{DEFAULT_CORPUS_DIR, DEFAULT_EXCLUDED_LOCALES, DEFAULT_RECORDS_PER_LOCALE},
    interfaces::{FakerProvider, PhoneNumberFaker},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub corpus_dir: PathBuf,
    pub records_per_locale: usize,
    pub excluded_locales: BTreeSet<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            corpus_dir: PathBuf::from(DEFAULT_CORPUS_DIR),
            records_per_locale: DEFAULT_RECORDS_PER_LOCALE,
            excluded_locales: DEFAULT_EXCLUDED_LOCALES
                .iter()
                .map(|locale| locale.to_string())
                .collect(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_corpus_dir(mut self, corpus_dir: impl Into<PathBuf>) -> Self {
        self.corpus_dir = corpus_dir.into();
        self
    }

    pub fn with_records_per_locale(mut self, records_per_locale: usize) -> Self {
        self.records_per_locale = records_per_locale;
        self
    }

    /// Replaces the exclusion set.
    pub fn with_excluded_locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_locales = locales.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_excluded(&self, locale: &str) -> bool {
        self.excluded_locales.contains(locale)
    }

    pub fn locale_path(&self, locale: &str) -> PathBuf {
        self.corpus_dir.join(locale)
    }
}

/// What happened to a single locale during generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleOutcome {
    /// File written with this many records.
    Written(usize),
    /// The locale has no phone number support.
    Skipped,
    Excluded,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
    pub excluded: Vec<String>,
}

/// Fills a corpus directory with one file of phone numbers per locale.
///
/// Each locale file is truncated and rewritten from scratch, so running the
/// generator again leaves the same set of files with the same number of
/// lines. Locales in the exclusion set and locales without phone number
/// support produce no file at all.
pub struct CorpusGenerator<P> {
    provider: P,
    config: GeneratorConfig,
}

impl<P: FakerProvider> CorpusGenerator<P> {
    pub fn new(provider: P, config: GeneratorConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn run(&self) -> Result<GenerationReport, GenerateError> {
        let corpus_dir = &self.config.corpus_dir;
        fs::create_dir_all(corpus_dir).map_err(|source| GenerateError::CreateDir {
            path: corpus_dir.clone(),
            source,
        })?;

        let mut report = GenerationReport::default();
        for locale in self.provider.available_locales() {
            match self.generate_locale(&locale)? {
                LocaleOutcome::Written(_) => report.written.push(locale),
                LocaleOutcome::Skipped => report.skipped.push(locale),
                LocaleOutcome::Excluded => report.excluded.push(locale),
            }
        }

        info!(
            "Corpus in {}: {} locales written, {} skipped, {} excluded",
            corpus_dir.display(),
            report.written.len(),
            report.skipped.len(),
            report.excluded.len()
        );
        Ok(report)
    }

    /// Generates the file of a single locale. The corpus directory must exist.
    pub fn generate_locale(&self, locale: &str) -> Result<LocaleOutcome, GenerateError> {
        if self.config.is_excluded(locale) {
            debug!("Locale {locale} is excluded");
            return Ok(LocaleOutcome::Excluded);
        }

        let mut faker = self.provider.faker_for(locale)?;
        if !supports_phone_numbers(&mut faker)? {
            warn!("Skipped locale {locale}: no phone number support");
            return Ok(LocaleOutcome::Skipped);
        }

        let path = self.config.locale_path(locale);
        let written = write_locale_file(&path, &mut faker, self.config.records_per_locale)?;
        info!("Locale {locale}: wrote {written} numbers to {}", path.display());
        Ok(LocaleOutcome::Written(written))
    }
}

/// Asks the faker first and falls back to a trial call when it can't tell.
/// The trial result is thrown away.
fn supports_phone_numbers<F: PhoneNumberFaker>(faker: &mut F) -> Result<bool, FakerError> {
    if let Some(supported) = faker.supports_phone_numbers() {
        return Ok(supported);
    }
    match faker.phone_number() {
        Ok(_) => Ok(true),
        Err(FakerError::CapabilityMissing(_)) => Ok(false),
        Err(err) => Err(err),
    }
}

fn write_locale_file<F: PhoneNumberFaker>(
    path: &Path,
    faker: &mut F,
    count: usize,
) -> Result<usize, GenerateError> {
    let write_err = |source: io::Error| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(write_err)?);
    for _ in 0..count {
        let number = faker.phone_number()?;
        writeln!(writer, "{number}").map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use std::{
        cell::Cell,
        collections::BTreeMap,
        fs,
        path::Path,
        rc::Rc,
    };

    use tempfile::TempDir;

    use super::{CorpusGenerator, GeneratorConfig, LocaleOutcome};
    use crate::{
        generator::{FakerError, GenerateError},
        interfaces::{FakerProvider, PhoneNumberFaker},
    };

    #[derive(Debug, Clone, Copy)]
    enum Capability {
        /// Generates numbers, does not declare it.
        Undeclared,
        /// Trial call fails with `CapabilityMissing`.
        Missing,
        /// Declares no support up front.
        DeclaredUnsupported,
        /// Trial call fails with an unexpected error.
        Broken,
    }

    #[derive(Default)]
    struct MockProvider {
        locales: BTreeMap<&'static str, Capability>,
        calls: Rc<Cell<usize>>,
    }

    impl MockProvider {
        fn with(mut self, locale: &'static str, capability: Capability) -> Self {
            self.locales.insert(locale, capability);
            self
        }
    }

    struct MockFaker {
        locale: String,
        capability: Capability,
        counter: usize,
        calls: Rc<Cell<usize>>,
    }

    impl PhoneNumberFaker for MockFaker {
        fn supports_phone_numbers(&self) -> Option<bool> {
            match self.capability {
                Capability::DeclaredUnsupported => Some(false),
                _ => None,
            }
        }

        fn phone_number(&mut self) -> Result<String, FakerError> {
            self.calls.set(self.calls.get() + 1);
            match self.capability {
                Capability::Missing | Capability::DeclaredUnsupported => {
                    Err(FakerError::CapabilityMissing(self.locale.clone()))
                }
                Capability::Broken => Err(FakerError::Failed {
                    locale: self.locale.clone(),
                    reason: "provider crashed".to_owned(),
                }),
                Capability::Undeclared => {
                    self.counter += 1;
                    Ok(format!("+1 555 {:04}", self.counter))
                }
            }
        }
    }

    impl FakerProvider for MockProvider {
        type Faker = MockFaker;

        fn available_locales(&self) -> Vec<String> {
            self.locales.keys().map(|locale| locale.to_string()).collect()
        }

        fn faker_for(&self, locale: &str) -> Result<Self::Faker, FakerError> {
            let capability = *self
                .locales
                .get(locale)
                .ok_or_else(|| FakerError::UnknownLocale(locale.to_owned()))?;
            Ok(MockFaker {
                locale: locale.to_owned(),
                capability,
                counter: 0,
                calls: self.calls.clone(),
            })
        }
    }

    fn config(dir: &Path, records: usize) -> GeneratorConfig {
        GeneratorConfig::default()
            .with_corpus_dir(dir)
            .with_records_per_locale(records)
    }

    fn line_count(path: &Path) -> usize {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .filter(|line| !line.is_empty())
            .count()
    }

    #[test]
    fn default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.records_per_locale, 100_000);
        assert_eq!(config.corpus_dir, Path::new("data"));
        assert!(config.is_excluded("en_PH"));
        assert!(config.is_excluded("fil_PH"));
        assert!(!config.is_excluded("en_US"));
    }

    #[test]
    fn excluded_locale_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let provider = MockProvider::default()
            .with("en_US", Capability::Undeclared)
            .with("en_PH", Capability::Undeclared);
        let generator = CorpusGenerator::new(
            provider,
            config(dir.path(), 25).with_excluded_locales(["en_PH"]),
        );

        let report = generator.run().unwrap();

        assert_eq!(report.written, vec!["en_US"]);
        assert_eq!(report.excluded, vec!["en_PH"]);
        assert!(report.skipped.is_empty());
        assert_eq!(line_count(&dir.path().join("en_US")), 25);
        assert!(!dir.path().join("en_PH").exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn locale_without_phone_numbers_is_skipped() {
        let dir = TempDir::new().unwrap();
        let provider = MockProvider::default()
            .with("de_DE", Capability::Undeclared)
            .with("la_VA", Capability::Missing)
            .with("tlh_KL", Capability::DeclaredUnsupported);
        let calls = provider.calls.clone();
        let generator = CorpusGenerator::new(provider, config(dir.path(), 10));

        let report = generator.run().unwrap();

        assert_eq!(report.written, vec!["de_DE"]);
        assert_eq!(report.skipped, vec!["la_VA", "tlh_KL"]);
        assert!(!dir.path().join("la_VA").exists());
        assert!(!dir.path().join("tlh_KL").exists());
        // de_DE: one trial call and ten records, la_VA: one trial call,
        // tlh_KL: declared unsupported so never called
        assert_eq!(calls.get(), 12);
    }

    #[test]
    fn unexpected_faker_error_aborts() {
        let dir = TempDir::new().unwrap();
        let provider = MockProvider::default().with("fr_FR", Capability::Broken);
        let generator = CorpusGenerator::new(provider, config(dir.path(), 10));

        let result = generator.run();

        assert!(matches!(
            result,
            Err(GenerateError::Faker(FakerError::Failed { .. }))
        ));
        assert!(!dir.path().join("fr_FR").exists());
    }

    #[test]
    fn rerun_overwrites_with_same_line_count() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("en_US");
        fs::write(&path, "stale\n".repeat(500)).unwrap();

        let generator = CorpusGenerator::new(
            MockProvider::default().with("en_US", Capability::Undeclared),
            config(dir.path(), 40),
        );
        generator.run().unwrap();
        assert_eq!(line_count(&path), 40);
        generator.run().unwrap();
        assert_eq!(line_count(&path), 40);

        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("stale"));
        assert!(contents.ends_with('\n'));
    }

    #[test]
    fn creates_missing_corpus_dir() {
        let dir = TempDir::new().unwrap();
        let corpus = dir.path().join("nested").join("data");
        let generator = CorpusGenerator::new(
            MockProvider::default().with("ja_JP", Capability::Undeclared),
            config(&corpus, 3),
        );

        // a single locale expects the directory to be there already
        assert!(matches!(
            generator.generate_locale("ja_JP"),
            Err(GenerateError::Write { .. })
        ));
        generator.run().unwrap();
        assert_eq!(line_count(&corpus.join("ja_JP")), 3);
    }

    #[test]
    fn generate_single_locale() {
        let dir = TempDir::new().unwrap();
        let generator = CorpusGenerator::new(
            MockProvider::default().with("pt_BR", Capability::Undeclared),
            config(dir.path(), 5).with_excluded_locales(["en_PH"]),
        );

        assert_eq!(generator.generate_locale("pt_BR").unwrap(), LocaleOutcome::Written(5));
        assert_eq!(generator.generate_locale("en_PH").unwrap(), LocaleOutcome::Excluded);
        assert!(matches!(
            generator.generate_locale("xx_XX"),
            Err(GenerateError::Faker(FakerError::UnknownLocale(_)))
        ));
    }
}
