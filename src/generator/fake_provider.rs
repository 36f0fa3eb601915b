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

use rand::{SeedableRng, rngs::StdRng};
use strum::IntoEnumIterator;

use super::{enums::FakeLocale, errors::FakerError};
use crate::{
    interfaces::{FakerProvider, PhoneNumberFaker},
    macros::fake_phone_number,
};

/// [`FakerProvider`] backed by the `fake` crate.
#[derive(Debug, Default, Clone)]
pub struct FakeRsProvider {
    seed: Option<u64>,
}

impl FakeRsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes generation reproducible. Every locale gets its own stream
    /// derived from `seed`, so two runs with the same seed write identical
    /// files.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

impl FakerProvider for FakeRsProvider {
    type Faker = FakeRsFaker;

    fn available_locales(&self) -> Vec<String> {
        FakeLocale::iter().map(|locale| locale.to_string()).collect()
    }

    fn faker_for(&self, locale: &str) -> Result<Self::Faker, FakerError> {
        let locale: FakeLocale = locale
            .parse()
            .map_err(|_| FakerError::UnknownLocale(locale.to_owned()))?;
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(locale as u64)),
            None => StdRng::from_os_rng(),
        };
        Ok(FakeRsFaker { locale, rng })
    }
}

pub struct FakeRsFaker {
    locale: FakeLocale,
    rng: StdRng,
}

impl FakeRsFaker {
    pub fn locale(&self) -> FakeLocale {
        self.locale
    }
}

impl PhoneNumberFaker for FakeRsFaker {
    // every bundled locale carries phone number formats
    fn supports_phone_numbers(&self) -> Option<bool> {
        Some(true)
    }

    fn phone_number(&mut self) -> Result<String, FakerError> {
        let rng = &mut self.rng;
        Ok(fake_phone_number!(self.locale, rng, {
            ArSa => AR_SA,
            CyGb => CY_GB,
            DeDe => DE_DE,
            EnUs => EN,
            FrFr => FR_FR,
            ItIt => IT_IT,
            JaJp => JA_JP,
            PtBr => PT_BR,
            PtPt => PT_PT,
            ZhCn => ZH_CN,
            ZhTw => ZH_TW,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::FakeRsProvider;
    use crate::{
        generator::FakerError,
        interfaces::{FakerProvider, PhoneNumberFaker},
    };

    #[test]
    fn every_locale_produces_numbers() {
        let provider = FakeRsProvider::with_seed(7);
        let locales = provider.available_locales();
        assert!(locales.contains(&"en_US".to_owned()));
        assert!(locales.contains(&"de_DE".to_owned()));

        for locale in locales {
            let mut faker = provider.faker_for(&locale).unwrap();
            assert_eq!(faker.supports_phone_numbers(), Some(true));
            for _ in 0..20 {
                let number = faker.phone_number().unwrap();
                assert!(!number.trim().is_empty(), "{locale}");
                assert!(!number.contains('\n'), "{locale}: {number:?}");
                assert!(number.chars().any(char::is_numeric), "{locale}: {number:?}");
            }
        }
    }

    #[test]
    fn exposes_every_bundled_locale() {
        assert_eq!(
            FakeRsProvider::new().available_locales(),
            vec![
                "ar_SA", "cy_GB", "de_DE", "en_US", "fr_FR", "it_IT", "ja_JP", "pt_BR", "pt_PT",
                "zh_CN", "zh_TW",
            ]
        );
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let sample = |seed| {
            let mut faker = FakeRsProvider::with_seed(seed).faker_for("fr_FR").unwrap();
            (0..10).map(|_| faker.phone_number().unwrap()).collect::<Vec<_>>()
        };
        assert_eq!(sample(42), sample(42));
    }

    #[test]
    fn unknown_locale_is_an_error() {
        let result = FakeRsProvider::new().faker_for("xx_XX");
        assert_eq!(result.err(), Some(FakerError::UnknownLocale("xx_XX".to_owned())));
    }
}
