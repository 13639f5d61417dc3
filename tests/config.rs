use postdeck::config::{self, get_config_template, Config, Error};
use std::io::ErrorKind;

#[test]
fn init_config_writes_the_template_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("postdeck").join("config.yml");

    let created = config::init_config(Some(path.clone())).unwrap();
    assert_eq!(created, path);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), get_config_template());

    match config::init_config(Some(path)) {
        Err(Error::Io(e)) => assert_eq!(e.kind(), ErrorKind::AlreadyExists),
        other => panic!("expected an existing file error, got {other:?}"),
    }
}

#[test]
fn every_key_has_an_environment_override() {
    let template = get_config_template();
    for key in [
        "POSTDECK_API_URL",
        "POSTDECK_IDENTITY_PATH",
        "POSTDECK_REQUEST_TIMEOUT_SECS",
    ] {
        assert!(template.contains(key), "{key} missing from:\n{template}");
    }
}

#[test]
fn environment_overrides_the_request_timeout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yml");
    std::fs::write(&path, "api_url: http://posts.test\nrequest_timeout_secs: 30\n").unwrap();

    std::env::set_var("POSTDECK_REQUEST_TIMEOUT_SECS", "5");
    let config = Config::load(Some(path)).unwrap();
    std::env::remove_var("POSTDECK_REQUEST_TIMEOUT_SECS");

    assert_eq!(config.api_url, "http://posts.test");
    assert_eq!(config.request_timeout_secs, Some(5));
}
