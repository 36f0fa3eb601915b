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

/// Returns the last `count` chars of given string as a slice.
///
/// Counts unicode scalar values, not bytes, so the returned slice never
/// splits a multibyte char. If string is shorter than `count` chars
/// the whole string is returned.
pub fn last_chars(s: &str, count: usize) -> &str {
    if count == 0 {
        return &s[s.len()..];
    }
    match s.char_indices().rev().nth(count - 1) {
        Some((start, _)) => &s[start..],
        None => s,
    }
}

/// Strips trailing whitespace including line terminators. Returns `None`
/// if nothing is left.
pub fn non_empty_trimmed_end(line: &str) -> Option<&str> {
    let trimmed = line.trim_end();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
