// Copyright 2025 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//

use std::fmt::{self, Display};

/// The kind of an [`Error`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidConstruction,
    EmptyUnwrap,
    UnwrapOnErr,
    UnwrapOnOk,
}

/// Errors raised by the checked constructors and the `try_unwrap` family.
///
/// The panicking `unwrap` accessors panic with the [`Display`] of the
/// matching variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A constructor requiring a present value received an absent one.
    InvalidConstruction {
        wrapper: &'static str,
        variant: &'static str,
    },
    /// Unwrapping a `None`.
    EmptyUnwrap,
    /// Unwrapping the value of an `Err`, holds the debug text of the error.
    UnwrapOnErr(String),
    /// Unwrapping the error of an `Ok`, holds the debug text of the value.
    UnwrapOnOk(String),
}

impl Error {
    pub(crate) fn invalid_construction(wrapper: &'static str, variant: &'static str) -> Self {
        log::debug!("Rejected absent value when constructing {wrapper}::{variant}");
        Self::InvalidConstruction { wrapper, variant }
    }

    pub fn kind(&self) -> ErrorKind {
        use Error::*;
        match self {
            InvalidConstruction { .. } => ErrorKind::InvalidConstruction,
            EmptyUnwrap => ErrorKind::EmptyUnwrap,
            UnwrapOnErr(_) => ErrorKind::UnwrapOnErr,
            UnwrapOnOk(_) => ErrorKind::UnwrapOnOk,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;
        match self {
            InvalidConstruction { wrapper, variant } => {
                write!(f, "Invalid construction: {wrapper}::{variant} requires a present value")
            }
            EmptyUnwrap => write!(f, "Called unwrap on a None value"),
            UnwrapOnErr(error) => write!(f, "Called unwrap on an Err value: {error}"),
            UnwrapOnOk(value) => write!(f, "Called unwrap_err on an Ok value: {value}"),
        }
    }
}

impl std::error::Error for Error {}
