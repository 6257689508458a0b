// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io;
use std::io::Write;

/// The console mirror: writes formatted lines to stdout.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Stdout {}

impl Stdout {
    /// Write one line to stdout.
    pub fn write_line(&self, formatted: &str) -> io::Result<()> {
        let mut bytes = Vec::with_capacity(formatted.len() + 1);
        bytes.extend_from_slice(formatted.as_bytes());
        bytes.push(b'\n');
        io::stdout().lock().write_all(&bytes)
    }
}
