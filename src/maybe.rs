// Copyright 2025 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//

use std::fmt::{self, Display};

use enum_as_inner::EnumAsInner;

use crate::{display::short_type_name, error::Error, outcome::Outcome};

/// A value of type `T`, or nothing.
///
/// The tag is fixed at construction and a `Some` always holds a present value:
/// building one from a nullable input goes through [`Maybe::try_some`], which
/// rejects absence. Besides native Rust `match`, the derived `is_some`/`is_none`
/// queries and the closure-based [`Maybe::r#match`] are available.
///
/// The `unwrap` accessor is meant for tests and debugging. Production code should
/// use `r#match`, `unwrap_or` or `unwrap_or_else`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
pub enum Maybe<T> {
    None,
    Some(T),
}

impl<T> Maybe<T> {
    pub const fn none() -> Self {
        Self::None
    }

    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Build a `Some` from a possibly absent value, failing with
    /// [`Error::InvalidConstruction`] if it is absent.
    pub fn try_some(value: Option<T>) -> Result<Self, Error> {
        value
            .map(Self::Some)
            .ok_or_else(|| Error::invalid_construction("Maybe", "Some"))
    }

    /// Call exactly one of the handlers depending on the tag, and return its result.
    pub fn r#match<R>(self, some: impl FnOnce(T) -> R, none: impl FnOnce() -> R) -> R {
        match self {
            Self::Some(value) => some(value),
            Self::None => none(),
        }
    }

    /// Return the held value, panicking on `None`.
    ///
    /// For tests and debugging only, see [`Maybe::try_unwrap`] for the checked form.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{}", Error::EmptyUnwrap),
        }
    }

    pub fn try_unwrap(self) -> Result<T, Error> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(Error::EmptyUnwrap),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Return the held value, or compute one; `default` is only called on `None`.
    pub fn unwrap_or_else(self, default: impl FnOnce() -> T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default(),
        }
    }

    /// Whether this is a `Some` holding a value equal to `value`, by [`PartialEq`].
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Self::Some(held) => held == value,
            Self::None => false,
        }
    }

    /// `other` if both are `Some`, `None` otherwise.
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Maybe::None,
        }
    }

    /// `self` if it is `Some`, `other` otherwise.
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => other,
        }
    }

    /// `Some` if exactly one of `self` and `other` is `Some`.
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(value), Self::None) | (Self::None, Self::Some(value)) => Self::Some(value),
            _ => Self::None,
        }
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        match self {
            Self::Some(value) => Maybe::Some(f(value)),
            Self::None => Maybe::None,
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
        match self {
            Self::Some(value) => f(value),
            Self::None => Maybe::None,
        }
    }

    pub fn or_else(self, f: impl FnOnce() -> Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => f(),
        }
    }

    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(error),
        }
    }

    pub fn ok_or_else<E>(self, error: impl FnOnce() -> E) -> Outcome<T, E> {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(error()),
        }
    }

    /// Convert to the nullable representation, absence becoming `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Remove one level of nesting, `Some(None)` becoming `None`.
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Self::Some(inner) => inner,
            Self::None => Maybe::None,
        }
    }
}

impl<T, E> Maybe<Outcome<T, E>> {
    /// `None` becomes `Ok(None)`, `Some(Ok(v))` becomes `Ok(Some(v))` and `Some(Err(e))` becomes `Err(e)`.
    pub fn transpose(self) -> Outcome<Maybe<T>, E> {
        match self {
            Self::None => Outcome::Ok(Maybe::None),
            Self::Some(Outcome::Ok(value)) => Outcome::Ok(Maybe::Some(value)),
            Self::Some(Outcome::Err(error)) => Outcome::Err(error),
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<T: Display> Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(f, "Option<{}>({value})", short_type_name::<T>()),
            Self::None => write!(f, "Option<None>"),
        }
    }
}
