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

//! Sinks that format entries and append them somewhere.

use std::fmt;
use std::path::Path;

use crate::Error;
use crate::record::Entry;

mod file;
mod stdio;
mod testing;

pub use self::file::FileAppender;
pub use self::stdio::Stdout;
pub use self::testing::Testing;

/// A sink that can format entries and append formatted lines.
///
/// [`FileAppender`] is the production implementation; [`Testing`] keeps lines in memory.
pub trait Append: fmt::Debug + Send + Sync + 'static {
    /// Render an entry as text, with no side effect.
    fn format_message(&self, entry: &Entry) -> String;

    /// Append one formatted line.
    fn append(&self, formatted: &str) -> Result<(), Error>;

    /// The file this sink appends to, if any.
    fn file_path(&self) -> Option<&Path> {
        None
    }
}

impl<T: Append> From<T> for Box<dyn Append> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}
