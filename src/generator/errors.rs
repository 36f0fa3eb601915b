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

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum FakerError {
    /// The locale exists but has no phone number data. Generation skips it.
    #[error("Locale '{0}' has no phone number provider")]
    CapabilityMissing(String),

    #[error("Unknown locale '{0}'")]
    UnknownLocale(String),

    #[error("Failed to generate phone number for locale '{locale}': {reason}")]
    Failed { locale: String, reason: String },
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("{0}")]
    Faker(#[from] FakerError),

    #[error("Failed to create corpus directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write corpus file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
