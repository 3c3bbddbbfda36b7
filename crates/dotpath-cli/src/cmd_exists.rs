use anyhow::Result;
use dotpath::v1::exists;
use std::path::PathBuf;

use crate::input::read_document;

pub fn run(input: Option<PathBuf>, path: String) -> Result<()> {
    let doc = read_document(input.as_ref())?;
    println!("{}", exists(&doc, &path));
    Ok(())
}
