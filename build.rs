use clap::CommandFactory;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[allow(dead_code)]
#[path = "src/cli/args.rs"]
mod args;

fn main() -> io::Result<()> {
    emit_build_metadata();
    write_man_pages(&args::Cli::command())?;

    println!("cargo:rerun-if-changed=src/cli/args.rs");
    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}

/// Expose the target triple and profile to the binary's startup log.
fn emit_build_metadata() {
    let target = env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());
    let profile = env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());
    println!("cargo:rustc-env=TTIR_SYNC_TARGET={}", target);
    println!("cargo:rustc-env=TTIR_SYNC_BUILD_PROFILE={}", profile);
}

/// Render one page per visible command into `man/man1`, or into `OUT_DIR`
/// when the source tree is read-only.
fn write_man_pages(root: &clap::Command) -> io::Result<()> {
    let pages = collect_pages(root);
    let preferred = Path::new("man").join("man1");

    match render_pages(&pages, &preferred) {
        Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
            let fallback = PathBuf::from(env::var("OUT_DIR").unwrap_or_else(|_| "target".into()))
                .join("man1");
            println!(
                "cargo:warning=man pages go to {} ({} is not writable)",
                fallback.display(),
                preferred.display()
            );
            render_pages(&pages, &fallback)
        }
        other => other,
    }
}

/// Flatten the command tree into `(page name, command)` pairs.
fn collect_pages(root: &clap::Command) -> Vec<(String, clap::Command)> {
    let mut pages = Vec::new();
    let mut pending = vec![(root.get_name().to_string(), root.clone())];

    while let Some((name, cmd)) = pending.pop() {
        for sub in cmd.get_subcommands().filter(|sub| !sub.is_hide_set()) {
            pending.push((format!("{}-{}", name, sub.get_name()), sub.clone()));
        }
        pages.push((name, cmd));
    }
    pages
}

fn render_pages(pages: &[(String, clap::Command)], dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    for (name, cmd) in pages {
        let mut page = Vec::new();
        clap_mangen::Man::new(cmd.clone()).render(&mut page)?;
        fs::write(dir.join(format!("{}.1", name)), page)?;
    }
    Ok(())
}
