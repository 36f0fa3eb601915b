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

use phonenumber::{Mode, PhoneNumber, country};

use super::{
    enums::{LibraryKind, PhoneNumberFormat},
    errors::LibraryError,
};
use crate::interfaces::PhoneNumberLibrary;

/// Drives the `phonenumber` crate.
///
/// The region hint is uppercased and looked up as a `country::Id`; a hint
/// that names no known country is reported as a parse error, the same as
/// text that is not a phone number.
#[derive(Debug, Default, Clone, Copy)]
pub struct PhonenumberCrate;

impl PhonenumberCrate {
    pub fn new() -> Self {
        Self
    }
}

fn mode_for(format: PhoneNumberFormat) -> Mode {
    match format {
        PhoneNumberFormat::E164 => Mode::E164,
        PhoneNumberFormat::International => Mode::International,
        PhoneNumberFormat::National => Mode::National,
        PhoneNumberFormat::RFC3966 => Mode::Rfc3966,
    }
}

impl PhoneNumberLibrary for PhonenumberCrate {
    type Number = PhoneNumber;

    fn name(&self) -> &str {
        LibraryKind::Phonenumber.into()
    }

    fn parse(&self, text: &str, region: &str) -> Result<PhoneNumber, LibraryError> {
        let country = region
            .to_uppercase()
            .parse::<country::Id>()
            .map_err(|_| LibraryError::NumberParse(format!("invalid region '{region}'")))?;
        phonenumber::parse(Some(country), text)
            .map_err(|err| LibraryError::NumberParse(err.to_string()))
    }

    fn is_valid_number(&self, number: &PhoneNumber) -> Result<bool, LibraryError> {
        Ok(phonenumber::is_valid(number))
    }

    fn format_number(
        &self,
        number: &PhoneNumber,
        format: PhoneNumberFormat,
    ) -> Result<String, LibraryError> {
        Ok(phonenumber::format(number).mode(mode_for(format)).to_string())
    }
}
