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

//! Replays a corpus through a phone number library.

pub mod enums;
pub mod errors;
mod phonenumber_crate;
mod replay;

pub use enums::{LibraryKind, PhoneNumberFormat};
pub use errors::{LibraryError, ReplayError};
pub use phonenumber_crate::PhonenumberCrate;
pub use replay::{ReplayOutcome, replay, replay_corpus, replay_named, replay_record};
