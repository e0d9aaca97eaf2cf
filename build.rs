use std::process::Command;

fn main() {
  embed_build_info();
  set_rerun_conditions();
}

fn embed_build_info() {
  // Capture the current Git commit hash for version identification.
  // Nothing is set when Git is unavailable or this is not a repository.
  if let Some(git_hash) = git_output(&["rev-parse", "--short", "HEAD"]) {
    println!("cargo:rustc-env=GIT_HASH={git_hash}");
  }

  // Commit date in YYYY-MM-DD format.
  if let Some(git_date) = git_output(&["log", "-1", "--format=%cs"]) {
    println!("cargo:rustc-env=GIT_DATE={git_date}");
  }
}

fn git_output(args: &[&str]) -> Option<String> {
  let output = Command::new("git").args(args).output().ok()?;
  if !output.status.success() {
    return None;
  }
  let text = String::from_utf8(output.stdout).ok()?.trim().to_string();
  (!text.is_empty()).then_some(text)
}

fn set_rerun_conditions() {
  println!("cargo:rerun-if-changed=build.rs");
  println!("cargo:rerun-if-changed=.git/HEAD");
}
