use std::path::{Path, PathBuf};

use console::style;

pub fn get_descriptor(descriptor: &Path) -> PathBuf {
    let descriptor = Path::new(&std::env::current_dir().unwrap()).join(descriptor);
    let descriptor = std::fs::canonicalize(&descriptor).unwrap_or_else(|_| {
        println!(
            "{}: {}",
            style("descriptor path does not exist").red(),
            descriptor.display()
        );
        std::process::exit(-1);
    });
    if !descriptor.is_file() {
        println!(
            "{}: {}",
            style("descriptor path is not a file").red(),
            descriptor.display()
        );
        std::process::exit(-1);
    }
    descriptor
}

pub fn get_version(version: &str) -> String {
    let version = version.trim();
    if version.is_empty() {
        println!("{}", style("version string is empty").red());
        std::process::exit(-1);
    }
    version.to_owned()
}
