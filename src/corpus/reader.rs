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

use std::{
    fs::{self, File},
    io::{BufRead, BufReader, Lines},
    path::{Path, PathBuf},
};

use log::{debug, warn};
use walkdir::WalkDir;

use super::errors::CorpusError;
use crate::{i18n::RegionTag, string_util::non_empty_trimmed_end};

/// One line of the corpus paired with the region hint of the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    pub region: RegionTag,
    pub text: String,
}

impl CandidateRecord {
    pub fn new(region: RegionTag, text: impl Into<String>) -> Self {
        Self { region, text: text.into() }
    }
}

/// File currently being streamed. Dropping it closes the handle.
struct CorpusFile {
    path: PathBuf,
    region: RegionTag,
    lines: Lines<BufReader<File>>,
    line_number: usize,
}

impl CorpusFile {
    fn open(path: &Path) -> Result<Self, CorpusError> {
        let file = File::open(path).map_err(|source| CorpusError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let region = RegionTag::from_path(path);
        if !region.is_well_formed() {
            warn!(
                "Corpus file {} gives region hint '{}' which is not a two letter code",
                path.display(),
                region
            );
        }
        debug!("Streaming corpus file {} as region {}", path.display(), region);

        Ok(Self {
            path: path.to_path_buf(),
            region,
            lines: BufReader::new(file).lines(),
            line_number: 0,
        })
    }

    fn next_record(&mut self) -> Option<Result<CandidateRecord, CorpusError>> {
        for line in self.lines.by_ref() {
            self.line_number += 1;
            let line = match line {
                Ok(line) => line,
                Err(source) => {
                    return Some(Err(CorpusError::Read {
                        path: self.path.clone(),
                        line: self.line_number,
                        source,
                    }));
                }
            };
            if let Some(text) = non_empty_trimmed_end(&line) {
                return Some(Ok(CandidateRecord::new(self.region.clone(), text)));
            }
        }
        None
    }
}

/// Lazy, single pass stream over every record of a corpus directory.
///
/// Files are discovered recursively under the root and read one at a time,
/// line by line, so memory use does not depend on the corpus size. Lines
/// within a file keep their order and every non-empty line is yielded once;
/// blank lines are dropped. To read the corpus again open a new reader.
///
/// Errors (unreadable directories, files that cannot be opened, invalid
/// UTF-8) are yielded as items and are meant to end the replay.
pub struct CorpusReader {
    root: PathBuf,
    files: walkdir::IntoIter,
    current: Option<CorpusFile>,
}

impl CorpusReader {
    pub fn open(root: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let root = root.as_ref();
        let metadata = fs::metadata(root).map_err(|source| CorpusError::Open {
            path: root.to_path_buf(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(CorpusError::NotADirectory(root.to_path_buf()));
        }

        Ok(Self {
            root: root.to_path_buf(),
            files: WalkDir::new(root).sort_by_file_name().into_iter(),
            current: None,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Iterator for CorpusReader {
    type Item = Result<CandidateRecord, CorpusError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(file) = self.current.as_mut() {
                match file.next_record() {
                    Some(record) => return Some(record),
                    None => self.current = None,
                }
            }

            let entry = match self.files.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Err(err.into())),
            };
            // symlinked files are read, symlinked directories are not entered
            if !entry.path().is_file() {
                continue;
            }
            match CorpusFile::open(entry.path()) {
                Ok(file) => self.current = Some(file),
                Err(err) => return Some(Err(err)),
            }
        }
    }
}
