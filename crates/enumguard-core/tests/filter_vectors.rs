//! Filter behaviour driven by JSON vectors.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use enumguard_core::filters::{
    AuthErrorNormalizer, BodyClassFilter, RedirectGuard, RestUserArgs, RestUserSanitizer,
};
use enumguard_core::Filter;

mod vector_loader;

#[test]
fn redirect_canonical_vectors() {
    vector_loader::run(&RedirectGuard::new(), "redirect_canonical.json");
}

#[test]
fn body_class_vectors() {
    vector_loader::run(&BodyClassFilter::new(), "body_class.json");
}

#[test]
fn rest_prepare_user_vectors() {
    vector_loader::run(&RestUserSanitizer::new(), "rest_prepare_user.json");
}

#[test]
fn authenticate_vectors() {
    vector_loader::run(&AuthErrorNormalizer::new(), "authenticate.json");
}

#[test]
fn rest_sanitizer_is_idempotent() {
    let f = RestUserSanitizer::new();
    for case in vector_loader::load("rest_prepare_user.json").cases {
        let args: RestUserArgs = serde_json::from_value(case.input).unwrap();
        let once = f.apply(args.clone());
        let twice = f.apply(RestUserArgs { response: once.clone(), ..args });
        assert_eq!(once, twice, "{}", case.name);
        assert!(once.get("slug").map_or(true, |s| s.is_null() || s.as_str() == Some("")), "{}", case.name);
    }
}
