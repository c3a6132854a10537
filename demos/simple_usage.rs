//! Simple example demonstrating how to use the file_comfort library

use anyhow::Result;
use file_comfort::core::tree::print_tree;
use file_comfort::utils::logging::{configure_logger, LogLevel};
use file_comfort::{rename_with_substitution, replace_in_file, FileTarget};
use std::fs;
use std::path::Path;

fn main() -> Result<()> {
    configure_logger(LogLevel::Debug, None)?;

    // Scratch folder for the demo
    let root = Path::new("demos/sample_data");
    fs::create_dir_all(root.join("drafts"))?;
    fs::write(root.join("draft_intro.md"), "Hello NAME, welcome!\n")?;
    fs::write(root.join("draft_outro.md"), "Bye NAME.\n")?;
    fs::write(root.join("drafts").join("notes.txt"), "todo\n")?;

    println!("Before:");
    print_tree(root, None, "", true)?;

    // Fill in the placeholder
    replace_in_file(&root.join("draft_intro.md"), "NAME", "Ada", None)?;

    // Promote every draft in the folder
    let target = FileTarget::from_path(root)?;
    for renamed in rename_with_substitution(&target, "draft_", "draft_", "final_")? {
        println!("{} -> {}", renamed.from.display(), renamed.to.display());
    }

    println!("\nAfter:");
    print_tree(root, None, "", true)?;

    fs::remove_dir_all(root)?;
    Ok(())
}
