// Copyright 2025 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//

//! Optional-value ([`Maybe`]) and fallible-result ([`Outcome`]) wrapper types.
//!
//! Both are immutable sum types whose tag is fixed at construction. Callers are expected
//! to use exhaustive matching or the `unwrap_or` family; the panicking `unwrap` accessors
//! are an escape hatch for tests and debugging, with checked `try_unwrap` siblings.
//!
//! Constructors taking a possibly absent input (`Option<T>`) reject absence with
//! [`Error::InvalidConstruction`] instead of silently producing an empty value.

mod display;
pub mod error;
pub mod maybe;
pub mod outcome;

pub use error::{Error, ErrorKind};
pub use maybe::Maybe;
pub use outcome::Outcome;
