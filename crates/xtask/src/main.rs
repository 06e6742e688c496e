//! Workspace maintenance tasks. Run with `cargo xtask <command>`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

/// Internal crates each workspace crate may depend on.
const ALLOWED_INTERNAL: &[(&str, &[&str])] = &[
    ("pokedex-domain", &[]),
    ("pokedex-shared", &["pokedex-domain"]),
    ("pokedex-engine", &["pokedex-domain", "pokedex-shared"]),
    ("pokedex-player", &["pokedex-domain", "pokedex-engine"]),
];

/// External crates that must stay out of a layer.
const FORBIDDEN_EXTERNAL: &[(&str, &[&str])] = &[
    ("pokedex-domain", &["reqwest", "tokio", "dioxus", "axum", "serde_json"]),
    ("pokedex-shared", &["reqwest", "tokio", "dioxus", "axum"]),
    ("pokedex-engine", &["dioxus"]),
];

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
    workspace_root: PathBuf,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    /// `None` for normal dependencies, `dev` or `build` otherwise
    kind: Option<String>,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata output")?;

    let mut violations = check_dependencies(&metadata);
    violations.extend(check_domain_sources(&metadata.workspace_root)?);

    if violations.is_empty() {
        println!("arch-check: OK ({} packages)", metadata.packages.len());
        return Ok(());
    }

    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("arch-check failed with {} violation(s)", violations.len())
}

/// Normal (non-dev) dependency rules per package.
fn check_dependencies(metadata: &Metadata) -> Vec<String> {
    let allowed: BTreeMap<&str, &[&str]> = ALLOWED_INTERNAL.iter().copied().collect();
    let forbidden: BTreeMap<&str, &[&str]> = FORBIDDEN_EXTERNAL.iter().copied().collect();
    let mut violations = Vec::new();

    for package in &metadata.packages {
        let Some(allowed_internal) = allowed.get(package.name.as_str()) else {
            continue;
        };
        let forbidden_external = forbidden.get(package.name.as_str()).copied().unwrap_or(&[]);

        for dep in package.dependencies.iter().filter(|d| d.kind.is_none()) {
            if dep.name.starts_with("pokedex-") && !allowed_internal.contains(&dep.name.as_str()) {
                violations.push(format!("{} must not depend on {}", package.name, dep.name));
            }
            if forbidden_external.contains(&dep.name.as_str()) {
                violations.push(format!("{} must not depend on {}", package.name, dep.name));
            }
        }
    }

    violations
}

/// The domain crate stays free of I/O even through fully qualified paths.
fn check_domain_sources(workspace_root: &Path) -> anyhow::Result<Vec<String>> {
    let pattern = regex_lite::Regex::new(r"\b(reqwest|tokio|dioxus|std::fs|std::net)::")
        .context("compiling domain source pattern")?;
    let mut violations = Vec::new();

    for file in rust_files(&workspace_root.join("crates/domain/src"))? {
        let source = std::fs::read_to_string(&file)
            .with_context(|| format!("reading {}", file.display()))?;
        for (number, line) in source.lines().enumerate() {
            if let Some(found) = pattern.find(line) {
                violations.push(format!(
                    "{}:{} uses {} in the domain crate",
                    file.display(),
                    number + 1,
                    found.as_str()
                ));
            }
        }
    }

    Ok(violations)
}

fn rust_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if !dir.exists() {
        return Ok(files);
    }
    for entry in std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(rust_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
