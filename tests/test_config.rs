use std::io::Write;
use std::path::PathBuf;

use kiosk::config::Config;

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.static_files.root, PathBuf::from("www"));
    assert_eq!(cfg.static_files.index_file, "index.html");
    assert_eq!(cfg.static_files.read_buffer_size, 4096);
}

#[test]
fn test_config_from_yaml() {
    let cfg = Config::from_yaml(
        "server:\n  listen_addr: \"0.0.0.0:3000\"\nstatic_files:\n  root: \"public\"\n  index_file: \"home.html\"\n  read_buffer_size: 8192\n",
    )
    .unwrap();

    assert_eq!(cfg.server.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.static_files.root, PathBuf::from("public"));
    assert_eq!(cfg.static_files.index_file, "home.html");
    assert_eq!(cfg.static_files.read_buffer_size, 8192);
}

#[test]
fn test_config_partial_yaml_uses_defaults() {
    let cfg = Config::from_yaml("server:\n  listen_addr: \"127.0.0.1:9000\"\n").unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:9000");
    assert_eq!(cfg.static_files.root, PathBuf::from("www"));
    assert_eq!(cfg.static_files.read_buffer_size, 4096);

    let cfg = Config::from_yaml("static_files:\n  root: \"site\"\n").unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.static_files.root, PathBuf::from("site"));
    assert_eq!(cfg.static_files.index_file, "index.html");
}

#[test]
fn test_config_rejects_malformed_yaml() {
    assert!(Config::from_yaml("server: [not, a, mapping]").is_err());
}

#[test]
fn test_config_load_env_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "static_files:\n  root: \"from-file\"").unwrap();

    unsafe {
        std::env::set_var("KIOSK_CONFIG", file.path());
        std::env::set_var("LISTEN", "0.0.0.0:9090");
    }
    let cfg = Config::load().unwrap();
    unsafe {
        std::env::remove_var("KIOSK_CONFIG");
        std::env::remove_var("LISTEN");
    }

    // LISTEN wins over both the file and the default
    assert_eq!(cfg.server.listen_addr, "0.0.0.0:9090");
    assert_eq!(cfg.static_files.root, PathBuf::from("from-file"));
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.server.listen_addr, cfg2.server.listen_addr);
    assert_eq!(cfg1.static_files, cfg2.static_files);
}
