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

use thiserror::Error;

use crate::{corpus::CorpusError, i18n::RegionTag};

/// Errors reported by a [`PhoneNumberLibrary`](crate::interfaces::PhoneNumberLibrary).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    /// The text is not a phone number under the given region. Expected for
    /// part of any synthetic corpus; the record is dropped.
    #[error("Number parse error: {0}")]
    NumberParse(String),
    #[error("{0}")]
    Failure(String),
}

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("{0}")]
    Corpus(#[from] CorpusError),

    #[error("Library '{library}' failed on '{text}' with region {region}: {source}")]
    Library {
        library: String,
        region: RegionTag,
        text: String,
        #[source]
        source: LibraryError,
    },

    #[error("Unknown library '{0}'")]
    UnknownLibrary(String),
}
