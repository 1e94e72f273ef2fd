// Copyright 2025 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//
#![allow(dead_code)]

use std::cell::Cell;

use optres::{Maybe, Outcome};

/// Counts how many times the closures it hands out are called
#[derive(Default)]
pub struct CallCounter {
    count: Cell<usize>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Record a call and return `value`
    pub fn hit<T>(&self, value: T) -> T {
        self.count.set(self.count.get() + 1);
        value
    }
}

/// All four tag combinations of two `Maybe<i32>`, the left one holding 1 and the right one 2
pub fn maybe_pairs() -> [(Maybe<i32>, Maybe<i32>); 4] {
    [
        (Maybe::some(1), Maybe::some(2)),
        (Maybe::some(1), Maybe::none()),
        (Maybe::none(), Maybe::some(2)),
        (Maybe::none(), Maybe::none()),
    ]
}

/// All four tag combinations of two `Outcome<i32, &str>`
pub fn outcome_pairs() -> [(Outcome<i32, &'static str>, Outcome<i32, &'static str>); 4] {
    [
        (Outcome::ok(1), Outcome::ok(2)),
        (Outcome::ok(1), Outcome::err("right")),
        (Outcome::err("left"), Outcome::ok(2)),
        (Outcome::err("left"), Outcome::err("right")),
    ]
}
