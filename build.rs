#![allow(missing_docs)]
use std::error::Error;
use vergen_git2::{Emitter, Git2Builder};

// only describe and commit timestamp are needed by `get_version()`
pub fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=build.rs");
    let git = Git2Builder::default()
        .describe(true, true, None)
        .commit_timestamp(true)
        .build()?;
    Emitter::default().add_instructions(&git)?.emit()?;
    Ok(())
}
