use std::process::{Command, Output};

fn life_bench(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_life_bench"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn seconds(stdout: &str) -> f64 {
    let line = stdout
        .strip_prefix("This took: ")
        .and_then(|s| s.strip_suffix('\n'))
        .unwrap_or_else(|| panic!("unexpected output {stdout:?}"));
    assert!(line.chars().all(|c| c.is_ascii_digit() || c == '.'), "{line:?}");
    line.parse().unwrap()
}

#[test]
fn run_prints_one_timing_line() {
    let out = life_bench(&["-n", "3", "-x", "8", "-y", "8", "--seed", "1"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(seconds(&String::from_utf8(out.stdout).unwrap()) > 0.0);
}

#[test]
fn logging_goes_to_stderr() {
    let out = Command::new(env!("CARGO_BIN_EXE_life_bench"))
        .args(["-n", "5", "-x", "20", "-y", "20", "-s", "4"])
        .env("RUST_LOG", "life_bench=info")
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    seconds(&String::from_utf8(out.stdout).unwrap());
    assert!(String::from_utf8_lossy(&out.stderr).contains("starting run"));
}

#[test]
fn help_exits_cleanly() {
    let out = life_bench(&["-h"]);
    assert!(out.status.success());
    let usage = String::from_utf8(out.stdout).unwrap();
    assert!(usage.contains("-n <INT>"), "{usage}");
    assert!(usage.contains("-p <0-100>"), "{usage}");
}

#[test]
fn show_prints_each_generation() {
    let out = life_bench(&["-n", "2", "-x", "3", "-y", "2", "-p", "0", "--show"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8(out.stdout).unwrap();
    let frame = "------\n      \n      \n------\n";
    let (frames, timing) = stdout.split_at(stdout.rfind("This took: ").unwrap());
    assert_eq!(
        frames,
        format!("Generation #0\n{frame}Generation #1\n{frame}")
    );
    seconds(timing);
}

#[test]
fn pattern_file_sets_the_board() {
    let path = std::env::temp_dir().join(format!("life_bench_blinker_{}.txt", std::process::id()));
    std::fs::write(&path, ".....\n..#..\n..#..\n..#..\n.....\n").unwrap();

    let out = life_bench(&["-n", "2", "--show", "--pattern", path.to_str().unwrap()]);
    std::fs::remove_file(&path).unwrap();

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("Generation #0\n----------\n          \n    []    \n"), "{stdout}");
    assert!(stdout.contains("Generation #1\n----------\n          \n          \n  [][][]  \n"), "{stdout}");
}

#[test]
fn invalid_percent_fails() {
    let out = life_bench(&["-p", "150"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}
