//! JSON test vector loader shared by filter tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::fs;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use enumguard_core::Filter;

#[derive(Debug, Deserialize)]
pub struct VectorFile {
    pub description: String,
    pub cases: Vec<TestCase>,
}

#[derive(Debug, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub input: Value,
    pub expect: Value,
}

pub fn load(name: &str) -> VectorFile {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

/// Run every case of `file` through `filter`, comparing JSON forms.
pub fn run<F>(filter: &F, file: &str)
where
    F: Filter,
    F::Input: DeserializeOwned,
    F::Output: Serialize,
{
    let v = load(file);
    assert!(!v.cases.is_empty(), "vector file {file} has no cases");
    for case in v.cases {
        let input: F::Input = serde_json::from_value(case.input)
            .unwrap_or_else(|e| panic!("{}: bad input in {}: {e}", v.description, case.name));
        let got = serde_json::to_value(filter.apply(input)).unwrap();
        assert_eq!(got, case.expect, "{}: {}", v.description, case.name);
    }
}
