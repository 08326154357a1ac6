use std::env;
use std::process::Command;
use time::OffsetDateTime;

// Compile-time strings read with env!() by the CLI and the GUI:
//   APP_BUILD_YEAR      footer copyright year (honours SOURCE_DATE_EPOCH)
//   APP_VERSION_DISPLAY package version, with "-dev" unless HEAD carries the release tag
fn main() {
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
    println!("cargo:rustc-env=APP_BUILD_YEAR={}", build_year());

    let version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());
    println!("cargo:rustc-env=APP_VERSION_DISPLAY={}", display_version(&version));
}

fn build_year() -> i32 {
    env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|raw| raw.parse::<i64>().ok())
        .and_then(|epoch| OffsetDateTime::from_unix_timestamp(epoch).ok())
        .unwrap_or_else(OffsetDateTime::now_utc)
        .year()
}

fn display_version(version: &str) -> String {
    // Release builds never shell out to git
    if env::var("PROFILE").as_deref() == Ok("release") {
        return version.to_string();
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/tags");

    let tagged = Command::new("git")
        .args(["describe", "--tags", "--exact-match"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .is_some_and(|tag| tag.trim() == format!("v{version}"));

    if tagged {
        version.to_string()
    } else {
        format!("{version}-dev")
    }
}
