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

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Locales the `fake` crate ships phone number data for.
///
/// Identifiers follow the `language_REGION` convention so that the last two
/// characters of a corpus file name are the region the numbers belong to.
/// `fake` has a single English locale; its numbers are North American, so it
/// is exposed as `en_US`.
#[derive(Debug, EnumIter, EnumString, Display, AsRefStr, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FakeLocale {
    #[strum(serialize = "ar_SA")]
    ArSa,
    #[strum(serialize = "cy_GB")]
    CyGb,
    #[strum(serialize = "de_DE")]
    DeDe,
    #[strum(serialize = "en_US")]
    EnUs,
    #[strum(serialize = "fr_FR")]
    FrFr,
    #[strum(serialize = "it_IT")]
    ItIt,
    #[strum(serialize = "ja_JP")]
    JaJp,
    #[strum(serialize = "pt_BR")]
    PtBr,
    #[strum(serialize = "pt_PT")]
    PtPt,
    #[strum(serialize = "zh_CN")]
    ZhCn,
    #[strum(serialize = "zh_TW")]
    ZhTw,
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::FakeLocale;
    use crate::i18n::RegionTag;

    #[test]
    fn identifiers_round_trip_and_end_in_region() {
        for locale in FakeLocale::iter() {
            let id = locale.to_string();
            assert_eq!(id.parse::<FakeLocale>().unwrap(), locale);
            assert!(RegionTag::from_file_name(&id).is_well_formed(), "{id}");
        }
        assert!("en_PH".parse::<FakeLocale>().is_err());
    }
}
