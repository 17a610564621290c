use assert_cmd::Command;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

macro_rules! borg_test {
    ($name:tt, $code:expr) => {
        #[test]
        fn $name() {
            let path = Path::new("test_data").join(stringify!($name));
            let mut stdout_file =
                File::open(path.join("stdout")).expect("Failed to read stdout file");

            let mut expected_stdout = String::new();
            stdout_file
                .read_to_string(&mut expected_stdout)
                .expect("Failed to read stdout file");

            let mut stderr_file =
                File::open(path.join("stderr")).expect("Failed to read stderr file");
            let mut expected_stderr = String::new();
            stderr_file
                .read_to_string(&mut expected_stderr)
                .expect("Failed to read stderr file");

            Command::cargo_bin(env!("CARGO_PKG_NAME"))
                .unwrap()
                .env_remove("RUST_LOG")
                .arg(path.join("input.borg").to_str().unwrap())
                .assert()
                .code($code)
                .stdout(expected_stdout)
                .stderr(expected_stderr);
        }
    };

    ($name:tt) => {
        borg_test!($name, 0);
    };
}

borg_test!(worked_example);
borg_test!(shadowing);
borg_test!(undefined);
borg_test!(statement_errors);
borg_test!(operators);
borg_test!(global_scope);

#[test]
fn missing_file() {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .env_remove("RUST_LOG")
        .arg(Path::new("test_data").join("no_such_script.borg"))
        .assert()
        .code(1)
        .stdout("");
}

#[test]
fn repl_keeps_state_between_lines() {
    Command::cargo_bin(env!("CARGO_PKG_NAME"))
        .unwrap()
        .env_remove("RUST_LOG")
        .write_stdin("START\nVAR X = 3\nX++\nPRINT X * 2\nFINISH\nPRINT X\n")
        .assert()
        .code(0)
        .stdout("> > > > X * 2 IS 8\n> > X IS UNDEFINED\n> \n");
}
