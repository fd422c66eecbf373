use assert_cmd::Command;
use demo_kit::{driver, Greeter, CONSTANT_VALUE};

#[test]
fn test_driver_prints_greeting_then_result() {
    let mut cmd = Command::cargo_bin("demo-kit").unwrap();
    cmd.env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("Hello, AST Explorer!\nResult: 25\n")
        .stderr("");
}

#[test]
fn test_driver_composes_library_parts() {
    assert_eq!(driver::calculate(), 5 * CONSTANT_VALUE);
    assert_eq!(
        Greeter::new(driver::GREETER_NAME).greet(),
        "Hello, AST Explorer!"
    );
}
