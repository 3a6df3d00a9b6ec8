fn git(args: &[&str]) -> Option<String> {
    let output = std::process::Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_owned())
}

fn main() {
    println!("cargo:rerun-if-changed=.config/config.json5");

    // Rebuild when the head or any relevant refs change
    if let Some(git_dir) = git(&["rev-parse", "--git-dir"]) {
        let git_path = std::path::Path::new(&git_dir);
        let refs_path = git_path.join("refs");
        for watched in [
            git_path.join("HEAD"),
            git_path.join("packed-refs"),
            refs_path.join("heads"),
            refs_path.join("tags"),
        ] {
            if watched.exists() {
                println!("cargo:rerun-if-changed={}", watched.display());
            }
        }
    }

    if let Some(git_info) = git(&["describe", "--always", "--tags", "--long", "--dirty"]) {
        println!("cargo:rustc-env=_GIT_INFO={git_info}");
    }
}
