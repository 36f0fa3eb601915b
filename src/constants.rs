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

// Directory the generator writes to and the runner reads from when no other
// location is given. Relative to the working directory.
pub const DEFAULT_CORPUS_DIR: &'static str = "data";

// Number of phone numbers written to each locale file.
pub const DEFAULT_RECORDS_PER_LOCALE: usize = 100_000;

// Locales whose generated numbers duplicate another locale or are not
// usable as benchmark input. Checked before any generator is constructed.
pub const DEFAULT_EXCLUDED_LOCALES: &'static [&'static str] = &["en_PH", "fil_PH"];

// Number of trailing characters of a corpus file name used as the region hint.
pub const REGION_TAG_LEN: usize = 2;

// Library replayed by the `replay_corpus` binary.
pub const DEFAULT_LIBRARY: &'static str = "phonenumber";
