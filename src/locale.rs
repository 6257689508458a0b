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

use std::fmt;
use std::str::FromStr;

use jiff::tz::TimeZone;

use crate::Error;
use crate::ErrorKind;

/// The calendar locale and time zone used for timestamps and file dates.
///
/// A logger cannot be built while the profile is [`LocaleProfile::Unset`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocaleProfile {
    /// No profile chosen yet.
    #[default]
    Unset,
    /// Japanese locale, `Asia/Tokyo`.
    Jp,
    /// US English POSIX locale, `America/New_York`.
    Us,
}

impl LocaleProfile {
    /// The locale identifier of the profile.
    pub fn locale_identifier(&self) -> Option<&'static str> {
        match self {
            LocaleProfile::Unset => None,
            LocaleProfile::Jp => Some("ja_JP"),
            LocaleProfile::Us => Some("en_US_POSIX"),
        }
    }

    /// The IANA time zone name of the profile.
    pub fn time_zone_name(&self) -> Option<&'static str> {
        match self {
            LocaleProfile::Unset => None,
            LocaleProfile::Jp => Some("Asia/Tokyo"),
            LocaleProfile::Us => Some("America/New_York"),
        }
    }

    /// Resolve the time zone of the profile.
    ///
    /// # Errors
    ///
    /// Return [`ErrorKind::LocaleUnset`] for [`LocaleProfile::Unset`], or
    /// [`ErrorKind::InvalidConfig`] if the time zone database does not know the zone.
    pub fn time_zone(&self) -> Result<TimeZone, Error> {
        let name = self.time_zone_name().ok_or_else(|| {
            Error::new(
                ErrorKind::LocaleUnset,
                "locale profile must be chosen before the logger is used",
            )
        })?;
        TimeZone::get(name).map_err(|err| {
            Error::new(ErrorKind::InvalidConfig, "failed to load time zone")
                .with_context("time_zone", name)
                .with_source(err)
        })
    }
}

impl fmt::Display for LocaleProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleProfile::Unset => f.write_str("unset"),
            LocaleProfile::Jp => f.write_str("JP"),
            LocaleProfile::Us => f.write_str("US"),
        }
    }
}

impl FromStr for LocaleProfile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("jp") {
            Ok(LocaleProfile::Jp)
        } else if s.eq_ignore_ascii_case("us") {
            Ok(LocaleProfile::Us)
        } else {
            Err(Error::new(ErrorKind::InvalidConfig, "unknown locale profile")
                .with_context("profile", s))
        }
    }
}
