use assert_cmd::Command;

#[test]
fn prints_greetings_in_call_order() {
    let mut cmd = Command::cargo_bin("say_hello").expect("binary");
    cmd.assert()
        .success()
        .stdout("Hello, World!\nHello, Alice!\n");
}

#[test]
fn verbose_logging_stays_off_stdout() {
    let mut cmd = Command::cargo_bin("say_hello").expect("binary");
    cmd.env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout("Hello, World!\nHello, Alice!\n");
}
