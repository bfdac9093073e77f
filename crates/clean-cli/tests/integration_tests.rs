//! Integration tests for the `clean` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Isolated home, record and project root for one test.
struct Sandbox {
    tmp: TempDir,
    root: PathBuf,
}

impl Sandbox {
    fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("go/src/shop");
        fs::create_dir_all(&root).unwrap();
        Self { tmp, root }
    }

    fn record(&self) -> PathBuf {
        self.tmp.path().join("home/.clean/cleanrc")
    }

    fn clean_in(&self, dir: &Path) -> Command {
        let mut cmd = cargo::cargo_bin_cmd!("clean");
        cmd.current_dir(dir)
            .env("HOME", self.tmp.path().join("home"))
            .env("XDG_CONFIG_HOME", self.tmp.path().join("xdg"))
            .env("CLEAN_PROJECT__RECORD", self.record())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("CLEAN_CONFIG");
        cmd
    }

    fn clean(&self) -> Command {
        self.clean_in(&self.root)
    }

    fn init(&self) {
        self.clean().args(["init", "--yes"]).assert().success();
    }

    fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.root.join(rel)).unwrap()
    }
}

#[test]
fn help_mentions_commands() {
    let sandbox = Sandbox::new();
    sandbox
        .clean()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("set"));
}

#[test]
fn version_flag() {
    Sandbox::new()
        .clean()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn init_creates_tree_and_record() {
    let sandbox = Sandbox::new();
    sandbox
        .clean()
        .args(["init", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialised Clean project"));

    for rel in [
        "clean/entity",
        "clean/ifadapter/controller/test",
        "clean/ifadapter/view/viewmodel",
        "clean/usecase/reqmodel/validator/test",
        "lib",
        "cmd",
    ] {
        assert!(sandbox.root.join(rel).is_dir(), "{rel}");
    }

    let record = fs::read_to_string(sandbox.record()).unwrap();
    assert!(record.starts_with("directory="));
    assert!(record.ends_with("/go/src/shop/\n"));
}

#[test]
fn declare_and_attach() {
    let sandbox = Sandbox::new();
    sandbox.init();

    sandbox
        .clean()
        .args(["add", "interactor", "OrderHandler"])
        .assert()
        .success()
        .stdout(predicate::str::contains("created"));

    sandbox
        .clean()
        .args(["add", "usecase", "AddItemToOrder", "TO", "OrderHandler"])
        .assert()
        .success()
        .stdout(predicate::str::contains("extended"));

    let interactor = sandbox.read("clean/usecase/interactor/orderHandler.go");
    assert!(interactor.contains("\t\"shop/clean/ifadapter/presenter\"\n"));
    assert!(interactor.contains("\tAddItemToOrder(rqm *reqmodel.AddItemToOrder)\n"));

    let respmodel = sandbox.read("clean/usecase/respmodel/orderHandler.go");
    assert!(respmodel.contains("type AddItemToOrderErrVal struct {"));
}

#[test]
fn attaching_twice_changes_nothing() {
    let sandbox = Sandbox::new();
    sandbox.init();
    sandbox.clean().args(["add", "interactor", "Order"]).assert().success();
    sandbox
        .clean()
        .args(["add", "usecase", "AddItem", "to", "Order"])
        .assert()
        .success();
    let before = sandbox.read("clean/ifadapter/view/order.go");

    sandbox
        .clean()
        .args(["add", "usecase", "AddItem", "to", "Order"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already-present"))
        .stdout(predicate::str::contains("Nothing to do"));

    assert_eq!(sandbox.read("clean/ifadapter/view/order.go"), before);
}

#[test]
fn go_extension_is_stripped() {
    let sandbox = Sandbox::new();
    sandbox.init();
    sandbox
        .clean()
        .args(["add", "interactor", "Order.go"])
        .assert()
        .success();
    assert!(sandbox.root.join("clean/ifadapter/controller/order.go").is_file());
}

#[test]
fn json_output_lists_every_step() {
    let sandbox = Sandbox::new();
    sandbox.init();

    let out = sandbox
        .clean()
        .args(["--output-format", "json", "add", "interactor", "Order"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let steps: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let steps = steps.as_array().unwrap();
    assert_eq!(steps.len(), 5);
    assert_eq!(steps[0]["kind"], "controller");
    assert_eq!(steps[0]["outcome"], "created");
}

#[test]
fn set_folder_rewrites_record() {
    let sandbox = Sandbox::new();
    sandbox.init();

    let other = sandbox.tmp.path().join("go/src/billing");
    fs::create_dir_all(&other).unwrap();
    sandbox
        .clean_in(&other)
        .args(["set", "folder"])
        .assert()
        .success();

    let record = fs::read_to_string(sandbox.record()).unwrap();
    assert!(record.ends_with("/go/src/billing/\n"));
    assert!(!other.join("clean").exists());
}

#[test]
fn config_get_shows_record_location() {
    let sandbox = Sandbox::new();
    sandbox
        .clean()
        .args(["config", "get", "project.record"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cleanrc"));
}

#[test]
fn completions_name_the_binary() {
    Sandbox::new()
        .clean()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clean"));
}
