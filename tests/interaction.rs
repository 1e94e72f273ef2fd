// Copyright 2025 Enlightware GmbH
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except in compliance with the License. You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied. See the License for the specific language governing permissions and limitations under the License.
//
use test_log::test;

use optres::{Error, Maybe, Outcome};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::*;

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn outcome_wrapped_in_maybe() {
    let wrapped: Maybe<Outcome<i32, &str>> = Maybe::some(Outcome::ok(5));
    assert_eq!(wrapped.transpose(), Outcome::ok(Maybe::some(5)));

    let wrapped: Maybe<Outcome<i32, &str>> = Maybe::some(Outcome::err("boom"));
    assert_eq!(wrapped.transpose(), Outcome::err("boom"));

    let wrapped: Maybe<Outcome<i32, &str>> = Maybe::none();
    assert_eq!(wrapped.transpose(), Outcome::ok(Maybe::none()));
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn maybe_wrapped_in_outcome() {
    let wrapped: Outcome<Maybe<i32>, &str> = Outcome::ok(Maybe::some(5));
    assert_eq!(wrapped.transpose(), Maybe::some(Outcome::ok(5)));

    let wrapped: Outcome<Maybe<i32>, &str> = Outcome::ok(Maybe::none());
    assert_eq!(wrapped.transpose(), Maybe::none());

    let wrapped: Outcome<Maybe<i32>, &str> = Outcome::err("boom");
    assert_eq!(wrapped.transpose(), Maybe::some(Outcome::err("boom")));
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn transpose_twice_is_identity() {
    let values: [Outcome<Maybe<i32>, &str>; 3] = [
        Outcome::ok(Maybe::some(1)),
        Outcome::ok(Maybe::none()),
        Outcome::err("x"),
    ];
    for value in values {
        assert_eq!(value.transpose().transpose(), value);
    }
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn checked_construction_propagates() {
    fn build(
        value: Option<i32>,
        error: Option<&'static str>,
    ) -> Result<Outcome<i32, &'static str>, Error> {
        let fallback = Outcome::try_err(error)?;
        Ok(Outcome::<i32, ()>::try_ok(value)?.or(fallback))
    }
    assert_eq!(build(Some(1), Some("x")), Ok(Outcome::ok(1)));
    assert!(build(None, Some("x")).is_err());
    assert!(build(Some(1), None).is_err());
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn absent_values_inside_payloads() {
    // Absence nested in a payload is a value like any other.
    let ok: Outcome<Option<i32>, &str> = Outcome::ok(None);
    assert!(ok.is_ok());
    assert!(ok.contains(&None));
    let some: Maybe<Maybe<i32>> = Maybe::some(Maybe::none());
    assert!(some.contains(&Maybe::none()));
    assert_eq!(some.to_string(), "Option<Maybe<i32>>(Option<None>)");
}

#[test]
#[cfg(not(target_arch = "wasm32"))]
fn shared_across_threads() {
    let value = Maybe::some(String::from("shared"));
    let outcome: Outcome<u32, String> = Outcome::err("bad".into());
    let handle = std::thread::spawn(move || {
        (
            value.as_ref().map(|s| s.len()).unwrap_or(0),
            outcome.is_err(),
        )
    });
    assert_eq!(handle.join().ok(), Some((6, true)));
}
