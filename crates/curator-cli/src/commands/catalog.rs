//! Catalog command - print every known title.

use std::path::PathBuf;
use std::sync::Arc;

use curator::Curator;

use crate::store;

pub fn run(library_path: PathBuf, _verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let library = Arc::new(store::load_library(&library_path)?);
    let curator = Curator::new(library);

    print!("{}", curator.render_catalog()?);

    Ok(())
}
