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

use std::{fmt, path::Path};

use crate::{constants::REGION_TAG_LEN, string_util::last_chars};

/// Default region hint handed to the library under test together with every
/// record of a corpus file.
///
/// The tag is taken from the file name alone: the name is uppercased and its
/// last two characters are kept, so `fake_en_US` gives `US` and `de_DE` gives
/// `DE`. Nothing checks that the result is a real region code; a file named
/// `numbers.txt` produces `XT` and that is what the library receives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionTag(String);

impl RegionTag {
    pub fn from_file_name(file_name: &str) -> Self {
        let upper = file_name.to_uppercase();
        Self(last_chars(&upper, REGION_TAG_LEN).to_owned())
    }

    /// Derives the tag from the final component of `path`. Non UTF-8 names
    /// are converted lossily.
    pub fn from_path(path: &Path) -> Self {
        match path.file_name() {
            Some(name) => Self::from_file_name(&name.to_string_lossy()),
            None => Self::from_file_name(""),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the tag at least looks like an ISO 3166 alpha-2 code.
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == REGION_TAG_LEN && self.0.bytes().all(|b| b.is_ascii_uppercase())
    }
}

impl AsRef<str> for RegionTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for RegionTag {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RegionTag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
