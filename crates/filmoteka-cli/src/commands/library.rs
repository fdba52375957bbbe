use super::{open_library, open_storage, prompts, resolve_id, short_id};
use crate::i18n;
use crate::output::Output;
use color_eyre::Result;
use filmoteka_core::{load_language, MovieStore};

pub fn run_add(title: &str, output: &Output) -> Result<()> {
    let mut store = open_library()?;
    let before = store.movies().len();
    store
        .add(title)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save the movie list: {}", e))?;

    if store.movies().len() > before {
        let added = &store.movies()[0];
        output.success(&format!("Added {:?} ({})", added.title, short_id(&added.id)));
    } else {
        output.warn("Nothing to add, the title was empty");
    }
    Ok(())
}

pub fn run_toggle(id: &str, output: &Output) -> Result<()> {
    let mut store = open_library()?;
    let id = match resolve_id(store.movies(), id) {
        Ok(id) => id,
        Err(e) => {
            output.error(e.to_string());
            return Ok(());
        }
    };

    store
        .toggle_status(&id)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save the movie list: {}", e))?;

    if let Some(movie) = store.movies().iter().find(|m| m.id == id) {
        output.success(&format!("{:?} is now {}", movie.title, movie.status.label()));
    }
    Ok(())
}

pub fn run_rate(id: &str, value: &str, output: &Output) -> Result<()> {
    let mut store = open_library()?;
    let id = match resolve_id(store.movies(), id) {
        Ok(id) => id,
        Err(e) => {
            output.error(e.to_string());
            return Ok(());
        }
    };

    store
        .set_rating(&id, value)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save the movie list: {}", e))?;

    if let Some(movie) = store.movies().iter().find(|m| m.id == id) {
        output.success(&format!("Rated {:?} {}/10", movie.title, movie.rating));
    }
    Ok(())
}

pub fn run_rename(id: &str, new_title: &str, output: &Output) -> Result<()> {
    let storage = open_storage()?;
    let language = load_language(&storage);
    let strings = i18n::strings(language);
    let mut store = MovieStore::open(storage);

    let id = match resolve_id(store.movies(), id) {
        Ok(id) => id,
        Err(e) => {
            output.error(e.to_string());
            return Ok(());
        }
    };
    let current = match store.movies().iter().find(|m| m.id == id) {
        Some(movie) => movie.title.clone(),
        None => return Ok(()),
    };

    // Without a title argument, ask for one with the current title prefilled.
    let new_title = if new_title.trim().is_empty() {
        prompts::prompt_string(strings.prompt_edit, Some(&current))?
    } else {
        new_title.to_string()
    };

    store
        .rename(&id, &new_title)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save the movie list: {}", e))?;

    if let Some(movie) = store.movies().iter().find(|m| m.id == id) {
        if movie.title == current {
            output.info("Title unchanged");
        } else {
            output.success(&format!("Renamed {:?} to {:?}", current, movie.title));
        }
    }
    Ok(())
}

pub fn run_remove(id: &str, output: &Output) -> Result<()> {
    let mut store = open_library()?;
    let id = match resolve_id(store.movies(), id) {
        Ok(id) => id,
        Err(e) => {
            output.error(e.to_string());
            return Ok(());
        }
    };
    let title = store.movies().iter().find(|m| m.id == id).map(|m| m.title.clone());

    store
        .remove(&id)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save the movie list: {}", e))?;

    if let Some(title) = title {
        output.success(&format!("Removed {:?}", title));
    }
    Ok(())
}
