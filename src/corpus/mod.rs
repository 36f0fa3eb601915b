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

//! Read side of the on-disk corpus.
//!
//! A corpus is a directory tree of plain text files, one phone number per
//! line. Every file is named after the locale that produced it and the last
//! two characters of that name are used as the default region when the
//! numbers are parsed.

pub mod errors;
mod reader;

pub use errors::CorpusError;
pub use reader::{CandidateRecord, CorpusReader};
