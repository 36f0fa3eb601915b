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

use std::{hint::black_box, path::Path};

use log::{info, trace};

use super::{
    enums::{LibraryKind, PhoneNumberFormat},
    errors::{LibraryError, ReplayError},
    phonenumber_crate::PhonenumberCrate,
};
use crate::{
    corpus::{CandidateRecord, CorpusError, CorpusReader},
    interfaces::PhoneNumberLibrary,
};

/// How many records made it past `parse` and how many the library rejected.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplayOutcome {
    pub parsed: usize,
    pub rejected: usize,
}

impl ReplayOutcome {
    pub fn records(&self) -> usize {
        self.parsed + self.rejected
    }
}

/// Runs a single record through the library.
///
/// Returns `Ok(false)` when `parse` rejects the text with
/// [`LibraryError::NumberParse`]. Otherwise the parsed number is checked for
/// validity and formatted internationally; both results are discarded.
pub fn replay_record<L>(library: &L, record: &CandidateRecord) -> Result<bool, ReplayError>
where
    L: PhoneNumberLibrary + ?Sized,
{
    let fail = |source: LibraryError| ReplayError::Library {
        library: library.name().to_owned(),
        region: record.region.clone(),
        text: record.text.clone(),
        source,
    };

    let number = match library.parse(&record.text, record.region.as_str()) {
        Ok(number) => number,
        Err(LibraryError::NumberParse(reason)) => {
            trace!("Rejected '{}' for region {}: {reason}", record.text, record.region);
            return Ok(false);
        }
        Err(err) => return Err(fail(err)),
    };
    black_box(library.is_valid_number(&number).map_err(fail)?);
    black_box(
        library
            .format_number(&number, PhoneNumberFormat::International)
            .map_err(fail)?,
    );
    Ok(true)
}

/// Feeds every record into the library. The first error that isn't a
/// rejected parse stops the replay and is returned.
pub fn replay<L, I>(library: &L, records: I) -> Result<ReplayOutcome, ReplayError>
where
    L: PhoneNumberLibrary + ?Sized,
    I: IntoIterator<Item = Result<CandidateRecord, CorpusError>>,
{
    let mut outcome = ReplayOutcome::default();
    for record in records {
        if replay_record(library, &record?)? {
            outcome.parsed += 1;
        } else {
            outcome.rejected += 1;
        }
    }
    info!(
        "Replayed {} records through {}: {} parsed, {} rejected",
        outcome.records(),
        library.name(),
        outcome.parsed,
        outcome.rejected
    );
    Ok(outcome)
}

pub fn replay_corpus<L>(library: &L, root: impl AsRef<Path>) -> Result<ReplayOutcome, ReplayError>
where
    L: PhoneNumberLibrary + ?Sized,
{
    replay(library, CorpusReader::open(root)?)
}

/// Replays the corpus at `root` through the library registered as `name`.
pub fn replay_named(name: &str, root: impl AsRef<Path>) -> Result<ReplayOutcome, ReplayError> {
    let kind: LibraryKind = name
        .parse()
        .map_err(|_| ReplayError::UnknownLibrary(name.to_owned()))?;
    match kind {
        LibraryKind::Phonenumber => replay_corpus(&PhonenumberCrate::new(), root),
    }
}
