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

//! Seams between the harness and the two libraries it drives. The fake data
//! generator sits behind [`FakerProvider`] and the library being benchmarked
//! behind [`PhoneNumberLibrary`], so either can be swapped without touching
//! the generation or replay loops.

use crate::{
    generator::errors::FakerError,
    runner::{PhoneNumberFormat, errors::LibraryError},
};

/// Produces synthetic phone numbers for a single locale.
pub trait PhoneNumberFaker {
    /// Whether this faker can produce phone numbers at all.
    ///
    /// `None` means the backend does not know in advance; the generator then
    /// makes one trial [`phone_number`](Self::phone_number) call and treats
    /// [`FakerError::CapabilityMissing`] as "not supported".
    fn supports_phone_numbers(&self) -> Option<bool> {
        None
    }

    fn phone_number(&mut self) -> Result<String, FakerError>;
}

/// Enumerates locales and builds a [`PhoneNumberFaker`] for each of them.
pub trait FakerProvider {
    type Faker: PhoneNumberFaker;

    /// Every locale identifier the backend ships, e.g. `en_US`.
    fn available_locales(&self) -> Vec<String>;

    fn faker_for(&self, locale: &str) -> Result<Self::Faker, FakerError>;
}

/// The phone number library under test.
///
/// Only [`LibraryError::NumberParse`] returned by [`parse`](Self::parse) is
/// treated as an expected outcome by the replay loop. Every other error
/// stops the run.
pub trait PhoneNumberLibrary {
    type Number;

    fn name(&self) -> &str;

    /// Parses `text` using `region` as the default region for numbers written
    /// without a country calling code.
    fn parse(&self, text: &str, region: &str) -> Result<Self::Number, LibraryError>;

    fn is_valid_number(&self, number: &Self::Number) -> Result<bool, LibraryError>;

    fn format_number(
        &self,
        number: &Self::Number,
        format: PhoneNumberFormat,
    ) -> Result<String, LibraryError>;
}
