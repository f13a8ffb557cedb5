use anyhow::Result;
use assert_cmd::Command;
use filetime::{FileTime, set_file_mtime};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn bfix(temp: &TempDir) -> Result<Command> {
    let mut cmd = Command::cargo_bin("bfix")?;
    cmd.env("BUILDFIX_CONFIG_PATH", temp.path().join("config.toml"));
    Ok(cmd)
}

#[test]
fn test_excluded_files_are_byte_identical() -> Result<()> {
    let temp = TempDir::new()?;
    let root = temp.path().join("build");
    fs::create_dir_all(&root)?;

    // Token plus non-UTF-8 bytes inside every default-excluded extension
    let payload: &[u8] = b"QtPie \x00\xff\xfe payload";
    let names = [
        "a.obj",
        "b.tlog",
        "c.pdb",
        "d.lib",
        "e.exe",
        "f.bin",
        "g.recipe",
        "h.stamp",
        "i.lastbuildstate",
        "UPPER.OBJ",
    ];
    for name in &names {
        fs::write(root.join(name), payload)?;
    }

    bfix(&temp)?
        .args(["fix", root.to_str().unwrap()])
        .assert()
        .success();

    for name in &names {
        assert_eq!(fs::read(root.join(name))?, payload, "{name} was touched");
    }
    Ok(())
}

#[test]
fn test_untouched_files_keep_their_mtime() -> Result<()> {
    let temp = TempDir::new()?;
    let root = temp.path().join("build");
    fs::create_dir_all(&root)?;

    let path = root.join("plain.txt");
    fs::write(&path, "no token here")?;
    let stamp = FileTime::from_unix_time(1_600_000_000, 0);
    set_file_mtime(&path, stamp)?;

    bfix(&temp)?
        .args(["fix", root.to_str().unwrap()])
        .assert()
        .success();

    let after = FileTime::from_last_modification_time(&fs::metadata(&path)?);
    assert_eq!(after, stamp);
    assert_eq!(fs::read_to_string(&path)?, "no token here");
    Ok(())
}

#[test]
fn test_fix_is_idempotent() -> Result<()> {
    let temp = TempDir::new()?;
    let root = temp.path().join("build");
    fs::create_dir_all(&root)?;
    fs::write(root.join("x.txt"), "QtPie and QtPie again")?;

    bfix(&temp)?
        .args(["fix", root.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated:"));

    // Second run finds nothing to do
    bfix(&temp)?
        .args(["fix", root.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated:").not());

    assert_eq!(
        fs::read_to_string(root.join("x.txt"))?,
        "FURRY and FURRY again"
    );
    Ok(())
}

#[test]
fn test_lossy_decode_drops_malformed_bytes_on_update() -> Result<()> {
    let temp = TempDir::new()?;
    let root = temp.path().join("build");
    fs::create_dir_all(&root)?;

    let path = root.join("mixed.log");
    fs::write(&path, b"Hello \xffQtPie")?;

    bfix(&temp)?
        .args(["fix", root.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated:"));

    // The malformed byte is dropped, the token replaced
    assert_eq!(fs::read(&path)?, b"Hello FURRY");
    Ok(())
}

#[test]
fn test_zero_byte_file_is_untouched() -> Result<()> {
    let temp = TempDir::new()?;
    let root = temp.path().join("build");
    fs::create_dir_all(&root)?;

    let path = root.join("empty.txt");
    fs::write(&path, "")?;
    let stamp = FileTime::from_unix_time(1_600_000_000, 0);
    set_file_mtime(&path, stamp)?;

    bfix(&temp)?
        .args(["fix", root.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(
        FileTime::from_last_modification_time(&fs::metadata(&path)?),
        stamp
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_is_reported_but_does_not_abort() -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new()?;
    let root = temp.path().join("build");
    fs::create_dir_all(&root)?;

    let locked = root.join("locked.txt");
    fs::write(&locked, "QtPie")?;
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

    if fs::read(&locked).is_ok() {
        // Permission bits are not enforced for root, nothing to test
        return Ok(());
    }

    let open = root.join("open.txt");
    fs::write(&open, "QtPie")?;

    bfix(&temp)?
        .args(["fix", root.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error processing"))
        .stdout(predicate::str::contains(format!(
            "Updated: {}",
            open.display()
        )));

    // Restore permissions so the temp dir can be cleaned up
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644))?;
    assert_eq!(fs::read_to_string(&open)?, "FURRY");
    Ok(())
}
