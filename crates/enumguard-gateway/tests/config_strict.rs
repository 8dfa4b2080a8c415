#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use enumguard_core::HookPoint;
use enumguard_gateway::{config, policy::compile_hook_rules};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
site:
  root: "https://example.com/"
hooks:
  enabld: ["*"] # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
site:
  root: "https://example.com"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.gateway.listen, "127.0.0.1:8088");
    assert_eq!(cfg.hooks.enabled, vec!["*".to_string()]);
    assert_eq!(cfg.site.site_root().unwrap().as_str(), "https://example.com/");
}

#[test]
fn rejects_wrong_version() {
    let bad = r#"
version: 2
site:
  root: "/"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn rejects_missing_or_relative_site_root() {
    let missing = "version: 1\n";
    assert!(config::load_from_str(missing).is_err());

    let relative = r#"
version: 1
site:
  root: "example.com"
"#;
    let err = config::load_from_str(relative).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
    let msg = err.to_string();
    assert!(msg.starts_with("bad request: site.root: "), "{msg}");
    assert_eq!(msg.matches("bad request").count(), 1, "{msg}");

    let no_host = r#"
version: 1
site:
  root: "http://"
"#;
    let err = config::load_from_str(no_host).expect_err("must fail");
    assert!(err.to_string().contains("no host"));
}

#[test]
fn rejects_bad_listen_and_body_limit() {
    let bad_listen = r#"
version: 1
gateway:
  listen: "localhost"
site:
  root: "/"
"#;
    assert!(config::load_from_str(bad_listen).is_err());

    let bad_limit = r#"
version: 1
gateway:
  max_body_bytes: 10
site:
  root: "/"
"#;
    assert!(config::load_from_str(bad_limit).is_err());
}

#[test]
fn rejects_unknown_hook_name() {
    let bad = r#"
version: 1
site:
  root: "/"
hooks:
  enabled: ["redirect_canonical", "login_errors"]
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("login_errors"));
}

#[test]
fn hook_rules_wildcard_and_subset() {
    let all = compile_hook_rules(&["*".into()]).unwrap();
    assert!(HookPoint::ALL.iter().all(|p| all.is_enabled(*p)));

    let some = compile_hook_rules(&["body_class".into(), " authenticate ".into()]).unwrap();
    assert_eq!(
        some.points().collect::<Vec<_>>(),
        vec![HookPoint::BodyClass, HookPoint::Authenticate]
    );
    assert!(!some.is_enabled(HookPoint::AuthorLink));

    assert!(compile_hook_rules(&[]).unwrap().is_empty());
}
