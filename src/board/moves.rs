// Copyright 2026 Tobin Edwards
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::place::{Offset, Place};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MoveError {
    #[error("Expecting a move of the form `a1->b3` (source then destination)")]
    Malformed,
}

/// An intended transition of whatever piece stands on `from`. A `Move`
/// carries no legality information of its own.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    pub from: Place,
    pub to: Place,
}

impl Move {
    #[inline]
    pub const fn new(from: Place, to: Place) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn offset(&self) -> Offset {
        self.to - self.from
    }

    /// Parses a move typed by a player. Accepts `a1->b3`, `a1-b3` and
    /// `a1 b3`.
    pub fn try_from_string(text: &str) -> Result<Self> {
        let normalized = text.replace("->", " ").replace(['-', ','], " ");
        let mut names = normalized.split_whitespace();
        let (Some(from), Some(to), None) = (names.next(), names.next(), names.next()) else {
            return Err(MoveError::Malformed.into());
        };
        let from = Place::try_from_string(from).ok_or(MoveError::Malformed)?;
        let to = Place::try_from_string(to).ok_or(MoveError::Malformed)?;
        Ok(Self::new(from, to))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_string(s)
    }
}
