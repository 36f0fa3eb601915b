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

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Output formats a library under test is asked for.
///
/// `International` and `National` follow ITU-T E.123 with local separator
/// conventions. The replay loop only ever asks for `International`, the
/// rest exist so adapters map the whole format family of their library.
///
/// For the Google Switzerland office:
/// - **E164**: `+41446681800`
/// - **International**: `+41 44 668 1800`
/// - **National**: `044 668 1800`
/// - **RFC3966**: `tel:+41-44-668-1800`
#[derive(Debug, EnumIter, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    E164,
    International,
    National,
    RFC3966,
}

/// Libraries that can be replayed by name.
#[derive(Debug, EnumIter, EnumString, Display, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibraryKind {
    /// The `phonenumber` crate.
    #[strum(serialize = "phonenumber")]
    Phonenumber,
}
