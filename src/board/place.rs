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

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;
use strum_macros::EnumIter;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlaceError {
    #[error("Expecting a column letter followed by a row number (e.g. c3)")]
    Malformed,
}

/// Coordinates of a single cell. `x` is the column (named by a letter,
/// starting at `a`) and `y` is the row (named by a number, starting at 1).
///
/// A `Place` is not tied to a board size: candidate moves are allowed to
/// point outside the board and it is up to the rules to reject them.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Place {
    x: i32,
    y: i32,
}

impl Place {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
    #[inline]
    pub const fn x(&self) -> i32 {
        self.x
    }
    #[inline]
    pub const fn y(&self) -> i32 {
        self.y
    }
    #[inline]
    pub const fn is_within(&self, size: usize) -> bool {
        let size = size as i32;
        self.x >= 0 && self.x < size && self.y >= 0 && self.y < size
    }
    #[inline]
    pub fn from_string(name: &str) -> Self {
        Self::try_from_string(name).expect("Place::from_string: invalid format")
    }
    pub fn try_from_string(name: &str) -> Option<Self> {
        let name = name.trim();
        let mut chars = name.chars();
        let file = chars.next()?;
        if !file.is_ascii_alphabetic() {
            return None;
        }
        let x = (file.to_ascii_lowercase() as i32) - ('a' as i32);
        let rank: i32 = chars.as_str().parse().ok()?;
        if rank < 1 {
            return None;
        }
        Some(Self::new(x, rank - 1))
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..26).contains(&self.x) && self.y >= 0 {
            let file = (b'a' + self.x as u8) as char;
            write!(f, "{}{}", file, self.y + 1)
        } else {
            write!(f, "({},{})", self.x, self.y)
        }
    }
}

impl FromStr for Place {
    type Err = PlaceError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_string(s).ok_or(PlaceError::Malformed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Unit step along a row or column, or `None` if the offset is zero or
    /// leaves the line.
    pub fn to_unit(self) -> Option<Self> {
        if !self.is_orthogonal() {
            return None;
        }
        Some(Self::new(self.x.signum(), self.y.signum()))
    }

    #[inline]
    pub fn is_orthogonal(&self) -> bool {
        (self.x == 0) != (self.y == 0)
    }

    #[inline]
    pub fn is_knight_shape(&self) -> bool {
        matches!((self.x.abs(), self.y.abs()), (1, 2) | (2, 1))
    }

    /// Chebyshev distance.
    #[inline]
    pub fn distance(&self) -> i32 {
        self.x.abs().max(self.y.abs())
    }
}

impl Add<Offset> for Place {
    type Output = Place;
    fn add(self, rhs: Offset) -> Self::Output {
        Place::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<&Offset> for Place {
    type Output = Place;
    fn add(self, rhs: &Offset) -> Self::Output {
        Place::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Place {
    type Output = Offset;
    fn sub(self, rhs: Self) -> Self::Output {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    UpLeft,
    Up,
    UpRight,
    Left,
    Right,
    DownLeft,
    Down,
    DownRight,
}

use Direction::{Down, DownLeft, DownRight, Left, Right, Up, UpLeft, UpRight};

impl Direction {
    pub fn orthogonals() -> impl Iterator<Item = Self> {
        [Up, Left, Right, Down].into_iter()
    }
}

impl From<Direction> for Offset {
    fn from(value: Direction) -> Self {
        match value {
            UpLeft => Self::new(-1, 1),
            Up => Self::new(0, 1),
            UpRight => Self::new(1, 1),
            Left => Self::new(-1, 0),
            Right => Self::new(1, 0),
            DownLeft => Self::new(-1, -1),
            Down => Self::new(0, -1),
            DownRight => Self::new(1, -1),
        }
    }
}

impl Add<Direction> for Place {
    type Output = Place;
    fn add(self, rhs: Direction) -> Self::Output {
        let offset: Offset = rhs.into();
        self + offset
    }
}

/// Places strictly between `from` and `to` when they share a row or column.
/// Empty otherwise.
pub fn between(from: Place, to: Place) -> Vec<Place> {
    let mut result = Vec::new();
    if let Some(step) = (to - from).to_unit() {
        let mut place = from + step;
        while place != to {
            result.push(place);
            place = place + step;
        }
    }
    result
}
