use config::config_file::*;
use std::io::Write;

fn write_config(dir: &tempdir::TempDir, data: &str) -> std::path::PathBuf {
    let path = dir.path().join(DEFAULT_FILE);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(data.as_bytes()).unwrap();
    path
}

#[test]
fn test_lookup_auth_config_with_no_config_file() {
    let config_dir = tempdir::TempDir::new("faas-cli-file-test");
    assert!(config_dir.is_ok());
    let config_dir = config_dir.unwrap();

    std::env::set_var(
        CONFIG_LOCATION_ENV,
        config_dir.path().to_string_lossy().into_owned(),
    );

    let res = lookup_auth_config("http://openfaas.test1");
    assert!(res.is_err());
    let err = res.err().unwrap();
    assert!(format!("{:?}", err).contains("config file is not found"));
}

#[test]
fn test_read_auth_config_basic() {
    let config_dir = tempdir::TempDir::new("faas-cli-file-test").unwrap();
    let token = encode_auth("admin", "some pass");
    let data = format!(
        "auths:\n- gateway: http://openfaas.test\n  auth: basic\n  token: {}\n- gateway: http://other.test\n  auth: oauth2\n  token: abc\n",
        token
    );
    let path = write_config(&config_dir, data.as_str());

    let res = read_auth_config(&path, "http://openfaas.test");
    assert!(res.is_ok());
    let auth_config = res.unwrap();
    assert_eq!(auth_config.auth, BASIC_AUTH_TYPE);

    let (user, pass) = decode_auth(auth_config.token.as_str()).unwrap();
    assert!(user == "admin" && pass == "some pass");

    let other = read_auth_config(&path, "http://other.test").unwrap();
    assert_eq!(other.auth, OAUTH_2AUTH_TYPE);
    assert_eq!(other.token, "abc");
}

#[test]
fn test_read_auth_config_gateway_with_no_entry() {
    let config_dir = tempdir::TempDir::new("faas-cli-file-test").unwrap();
    let path = write_config(
        &config_dir,
        "auths:\n- gateway: http://openfaas.test\n  auth: oauth2\n  token: abc\n",
    );

    let res = read_auth_config(&path, "http://openfaas.com");
    assert!(res.is_ok());
    assert_eq!(res.unwrap(), AuthConfig::default());
}

#[test]
fn test_read_auth_config_empty_file() {
    let config_dir = tempdir::TempDir::new("faas-cli-file-test").unwrap();
    let path = write_config(&config_dir, "");

    let res = read_auth_config(&path, "http://openfaas.test");
    assert_eq!(res.unwrap(), AuthConfig::default());
}

#[test]
fn test_read_auth_config_malformed_file() {
    let config_dir = tempdir::TempDir::new("faas-cli-file-test").unwrap();
    let path = write_config(&config_dir, "auths: [not: closed");

    let res = read_auth_config(&path, "http://openfaas.test");
    assert!(res.is_err());
    assert!(format!("{}", res.unwrap_err()).contains("can't parse config file"));
}
