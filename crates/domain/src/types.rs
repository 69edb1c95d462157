// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Implements the string plumbing shared by every validated text wrapper:
/// `Display`, `FromStr`, `TryFrom<String>` (used by serde) and `From<Self> for String`.
macro_rules! text_value {
    ($ty:ident) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.value)
            }
        }

        impl FromStr for $ty {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(&value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.value
            }
        }
    };
}

/// A member's full name.
///
/// Must start with a letter (any script) and may then contain letters,
/// spaces, periods, apostrophes and hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name {
    value: String,
}

impl Name {
    /// Creates a validated `Name`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidName` if the value is blank, starts with
    /// anything but a letter, or contains digits or other symbols.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let mut chars = value.chars();
        let starts_with_letter: bool = chars.next().is_some_and(char::is_alphabetic);
        let rest_allowed: bool =
            chars.all(|c| c.is_alphabetic() || matches!(c, ' ' | '.' | '\'' | '-'));

        if !starts_with_letter || !rest_allowed {
            return Err(DomainError::InvalidName(value.to_string()));
        }

        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the name as entered.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

text_value!(Name);

/// A member's phone number. Digits only, at least three of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone {
    value: String,
}

impl Phone {
    /// The minimum number of digits in a phone number.
    pub const MIN_DIGITS: usize = 3;

    /// Creates a validated `Phone`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPhone` for anything other than three or
    /// more ASCII digits.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if value.len() < Self::MIN_DIGITS || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidPhone(value.to_string()));
        }

        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the phone number.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

text_value!(Phone);

/// A member's email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email {
    value: String,
}

impl Email {
    const LOCAL_SPECIALS: [char; 4] = ['+', '_', '.', '-'];

    /// Creates a validated `Email`.
    ///
    /// The local part may contain alphanumerics and `+`, `_`, `.`, `-` but may
    /// not start or end with one of those specials. The domain is a list of
    /// dot-separated alphanumeric labels (hyphens allowed inside a label) whose
    /// last label is at least two characters long.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEmail` if either part is malformed.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidEmail(value.to_string());

        let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
        if !Self::is_valid_local(local) || !Self::is_valid_domain(domain) {
            return Err(invalid());
        }

        Ok(Self {
            value: value.to_string(),
        })
    }

    fn is_valid_local(local: &str) -> bool {
        let (Some(first), Some(last)) = (local.chars().next(), local.chars().last()) else {
            return false;
        };
        first.is_ascii_alphanumeric()
            && last.is_ascii_alphanumeric()
            && local
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || Self::LOCAL_SPECIALS.contains(&c))
    }

    fn is_valid_domain(domain: &str) -> bool {
        let labels: Vec<&str> = domain.split('.').collect();
        let labels_valid: bool = labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        });
        let tld_long_enough: bool = labels.last().is_some_and(|tld| tld.len() >= 2);
        labels.len() >= 2 && labels_valid && tld_long_enough
    }

    /// Returns the email address.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

text_value!(Email);

/// A member's matriculation number, the sole identity of a member.
///
/// Normalized to uppercase so identity comparison is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MatriculationNumber {
    value: String,
}

impl MatriculationNumber {
    /// The maximum length of a matriculation number.
    pub const MAX_LEN: usize = 20;

    /// Creates a validated `MatriculationNumber`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMatriculationNumber` if the value is blank,
    /// longer than [`Self::MAX_LEN`], or contains non-alphanumeric characters.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if value.is_empty()
            || value.len() > Self::MAX_LEN
            || !value.bytes().all(|b| b.is_ascii_alphanumeric())
        {
            return Err(DomainError::InvalidMatriculationNumber {
                value: value.to_string(),
                max: Self::MAX_LEN,
            });
        }

        Ok(Self {
            value: value.to_ascii_uppercase(),
        })
    }

    /// Returns the normalized (uppercase) matriculation number.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

text_value!(MatriculationNumber);

/// A free-form label attached to a member (e.g. `committee`, `exco`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag {
    value: String,
}

impl Tag {
    /// Creates a validated `Tag`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTag` if the value is blank or not
    /// ASCII alphanumeric.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(DomainError::InvalidTag(value.to_string()));
        }

        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the tag name.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

text_value!(Tag);
