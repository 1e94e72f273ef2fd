// Copyright 2025 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//

use std::fmt::{self, Debug, Display};

use enum_as_inner::EnumAsInner;

use crate::{display::short_type_name, error::Error, maybe::Maybe};

/// Success holding a `T`, or failure holding an `E`.
///
/// Exactly one payload is present, and the tag never changes after construction.
/// The checked constructors [`Outcome::try_ok`] and [`Outcome::try_err`] follow the
/// same absence policy as [`Maybe::try_some`]: an absent input is an
/// [`Error::InvalidConstruction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
pub enum Outcome<T, E> {
    Ok(T),
    Err(E),
}

impl<T, E> Outcome<T, E> {
    pub const fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    pub const fn err(error: E) -> Self {
        Self::Err(error)
    }

    pub fn try_ok(value: Option<T>) -> Result<Self, Error> {
        value
            .map(Self::Ok)
            .ok_or_else(|| Error::invalid_construction("Outcome", "Ok"))
    }

    pub fn try_err(error: Option<E>) -> Result<Self, Error> {
        error
            .map(Self::Err)
            .ok_or_else(|| Error::invalid_construction("Outcome", "Err"))
    }

    /// Call exactly one of the handlers depending on the tag, and return its result.
    pub fn r#match<R>(self, ok: impl FnOnce(T) -> R, err: impl FnOnce(E) -> R) -> R {
        match self {
            Self::Ok(value) => ok(value),
            Self::Err(error) => err(error),
        }
    }

    /// Return the success value, panicking on `Err` with the debug text of the error.
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: Debug,
    {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Return the error value, panicking on `Ok` with the debug text of the value.
    #[track_caller]
    pub fn unwrap_err(self) -> E
    where
        T: Debug,
    {
        match self.try_unwrap_err() {
            Ok(error) => error,
            Err(error) => panic!("{error}"),
        }
    }

    pub fn try_unwrap(self) -> Result<T, Error>
    where
        E: Debug,
    {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(Error::UnwrapOnErr(format!("{error:?}"))),
        }
    }

    pub fn try_unwrap_err(self) -> Result<E, Error>
    where
        T: Debug,
    {
        match self {
            Self::Ok(value) => Err(Error::UnwrapOnOk(format!("{value:?}"))),
            Self::Err(error) => Ok(error),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Return the success value, or compute one from the error; `f` is only called on `Err`.
    pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => f(error),
        }
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Self::Ok(held) => held == value,
            Self::Err(_) => false,
        }
    }

    pub fn contains_err(&self, error: &E) -> bool
    where
        E: PartialEq,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(held) => held == error,
        }
    }

    /// `self` if it is `Err`, `other` otherwise.
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// `self` if it is `Ok`, `other` otherwise.
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(_) => other,
        }
    }

    /// The success value, if any, discarding the error.
    pub fn success(self) -> Maybe<T> {
        match self {
            Self::Ok(value) => Maybe::Some(value),
            Self::Err(_) => Maybe::None,
        }
    }

    pub fn failure(self) -> Maybe<E> {
        match self {
            Self::Ok(_) => Maybe::None,
            Self::Err(error) => Maybe::Some(error),
        }
    }

    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(f(error)),
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    pub fn or_else<F>(self, f: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => f(error),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }
}

impl<T, E> Outcome<Maybe<T>, E> {
    /// `Ok(None)` becomes `None`, `Ok(Some(v))` becomes `Some(Ok(v))` and `Err(e)` becomes `Some(Err(e))`.
    pub fn transpose(self) -> Maybe<Outcome<T, E>> {
        match self {
            Self::Ok(Maybe::None) => Maybe::None,
            Self::Ok(Maybe::Some(value)) => Maybe::Some(Outcome::Ok(value)),
            Self::Err(error) => Maybe::Some(Outcome::Err(error)),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(value: Outcome<T, E>) -> Self {
        value.into_result()
    }
}

impl<T: Display, E: Display> Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(f, "Result<Ok, {}>({value})", short_type_name::<T>()),
            Self::Err(error) => write!(f, "Result<Err, {}>({error})", short_type_name::<E>()),
        }
    }
}
