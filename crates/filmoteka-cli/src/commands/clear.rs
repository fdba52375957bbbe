use super::{open_storage, prompts};
use crate::i18n;
use crate::output::Output;
use color_eyre::Result;
use filmoteka_core::{load_language, MovieStore};

pub fn run_clear(yes: bool, output: &Output) -> Result<()> {
    let storage = open_storage()?;
    let language = load_language(&storage);
    let strings = i18n::strings(language);
    let mut store = MovieStore::open(storage);

    if store.movies().is_empty() {
        output.warn("The list is already empty");
        return Ok(());
    }

    if !yes && !prompts::prompt_yes_no(strings.confirm_clear, Some(false))? {
        output.info("Clear cancelled");
        return Ok(());
    }

    let removed = store.movies().len();
    store
        .clear_all()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save the movie list: {}", e))?;
    output.success(&format!("Removed {} movie(s)", removed));
    Ok(())
}
