use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of every plate, in ASCII characters.
pub const PLATE_LEN: usize = 8;

#[derive(Debug, Clone, Copy)]
enum CharClass {
    Upper,
    Digit,
}

impl CharClass {
    fn sample<R: Rng>(self, rng: &mut R) -> char {
        match self {
            CharClass::Upper => char::from(rng.random_range(b'A'..=b'Z')),
            CharClass::Digit => char::from(rng.random_range(b'0'..=b'9')),
        }
    }

    fn matches(self, c: char) -> bool {
        match self {
            CharClass::Upper => c.is_ascii_uppercase(),
            CharClass::Digit => c.is_ascii_digit(),
        }
    }
}

use CharClass::{Digit, Upper};

const GRAMMAR: [CharClass; PLATE_LEN] = [Upper, Upper, Digit, Digit, Digit, Digit, Upper, Upper];

/// Returns whether `s` is two uppercase letters, four digits and two uppercase letters.
pub fn is_valid_plate(s: &str) -> bool {
    s.len() == PLATE_LEN && s.chars().zip(GRAMMAR).all(|(c, class)| class.matches(c))
}

/// A license plate like identifier, e.g. `AB1234CD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Plate(String);

impl Plate {
    /// Draws every position independently and uniformly from its character class.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let plate = GRAMMAR.iter().map(|class| class.sample(rng)).collect();
        Self(plate)
    }

    /// Returns `None` if `s` doesn't follow the plate grammar.
    pub fn parse(s: &str) -> Option<Self> {
        is_valid_plate(s).then(|| Self(s.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Plate {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_valid_plate(&value) {
            Ok(Self(value))
        } else {
            Err(format!("{value:?} is not a valid plate"))
        }
    }
}

impl From<Plate> for String {
    fn from(value: Plate) -> Self {
        value.0
    }
}
