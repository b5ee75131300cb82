//! Drive the built binary with canned `df -P -m` listings on stdin.

use std::io::Write;
use std::process::{Command, Output, Stdio};

const HEADER: &str = "Filesystem 1048576-blocks Used Available Capacity Mounted on\n";

fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_diskcheck"))
        .args(args)
        .env_remove("DISKCHECK_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn diskcheck");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write listing");
    child.wait_with_output().expect("wait for diskcheck")
}

fn check(listing: &str, debug: bool) -> (i32, String) {
    let mut args = vec!["--input", "-"];
    if debug {
        args.push("--debug");
    }
    let out = run(&args, &format!("{}{}", HEADER, listing));
    (
        out.status.code().expect("exit code"),
        String::from_utf8(out.stdout).expect("utf8 stdout"),
    )
}

#[test]
fn all_ok() {
    let (code, out) = check("/dev/sda1 20000 10000 10000 50% /\n", false);
    assert_eq!(code, 0);
    assert_eq!(out, "Disks OK | /=10000MB;17000;18000;0;20000\n");
}

#[test]
fn warning_shows_only_the_warning() {
    let listing = "\
/dev/sda1 20000 10000 10000 50% /
/dev/sda2 20000 17600 2400 88% /var
";
    let (code, out) = check(listing, false);
    assert_eq!(code, 1);
    assert_eq!(
        out,
        "Warning: 12% left on /var | /=10000MB;17000;18000;0;20000 /var=17600MB;17000;18000;0;20000\n"
    );
}

#[test]
fn critical_dominates() {
    let listing = "\
/dev/sda2 20000 17600 2400 88% /var
/dev/mapper/vg0-data 500000 480000 20000 96% /data
tmpfs 1000 1 999 1% /run
";
    let (code, out) = check(listing, false);
    assert_eq!(code, 2);
    assert!(out.starts_with("Warning: 12% left on /var, Critical: 4% left on /data | "), "{}", out);
    assert!(out.ends_with("/data=480000MB;450000;475000;0;500000\n"), "{}", out);
    assert!(!out.contains("/run"));
}

#[test]
fn debug_lists_everything_with_the_same_exit_code() {
    let listing = "\
/dev/sda1 20000 10000 10000 50% /
/dev/sda2 20000 17600 2400 88% /var
";
    let (quiet_code, _) = check(listing, false);
    let (code, out) = check(listing, true);
    assert_eq!(code, quiet_code);
    assert!(out.starts_with("OK: 50% left on /, Warning: 12% left on /var | "), "{}", out);
}

#[test]
fn no_matching_filesystems() {
    let (code, out) = check("tmpfs 1000 1 999 1% /run\n", false);
    assert_eq!(code, 3);
    assert!(out.starts_with("UNKNOWN: no matching filesystems found"));
    assert!(!out.contains('|'));
}

#[test]
fn malformed_percent_names_the_device() {
    let listing = "\
/dev/sda1 20000 10000 10000 50% /
/dev/sdb1 20000 10000 10000 N/A /broken
/dev/sdc1 20000 19900 100 99% /full
";
    let (code, out) = check(listing, false);
    assert_eq!(code, 5);
    assert!(out.starts_with("UNKNOWN: "), "{}", out);
    assert!(out.contains("/dev/sdb1"), "{}", out);
    assert!(!out.contains('|'), "{}", out);
}

#[test]
fn missing_capacity_column_fails_closed() {
    let listing = "\
/dev/sda1 20000 10000 10000 50% /
/dev/sdb1 20000 19900 100 /full
";
    let (code, out) = check(listing, false);
    assert_eq!(code, 5);
    assert!(out.starts_with("UNKNOWN: "), "{}", out);
    assert!(out.contains("/dev/sdb1"), "{}", out);

    let (code, _) = check("/dev/sdb1 20000 19900 100 /full\n", false);
    assert_eq!(code, 5);
}

#[test]
fn mount_point_with_space_is_one_perfdata_token() {
    let (code, out) = check("/dev/sdb1 20000 10000 10000 50% /mnt/big disk\n", false);
    assert_eq!(code, 0);
    assert_eq!(out, "Disks OK | '/mnt/big disk'=10000MB;17000;18000;0;20000\n");
}

#[test]
fn invalid_flag() {
    let out = run(&["--no-such-flag"], "");
    assert_eq!(out.status.code(), Some(4));
    assert!(out.stdout.is_empty());
}

#[test]
fn help_exits_zero() {
    let out = run(&["--help"], "");
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("--debug"));
}
