use super::open_storage;
use crate::i18n;
use crate::output::Output;
use color_eyre::Result;
use filmoteka_core::{load_language, save_language};
use filmoteka_models::Language;
use owo_colors::OwoColorize;
use serde_json::json;

pub fn run_lang(code: Option<&str>, output: &Output) -> Result<()> {
    let mut storage = open_storage()?;

    let Some(code) = code else {
        return show_language(&storage, output);
    };

    match Language::from_code(code) {
        Some(language) => {
            save_language(&mut storage, language)
                .map_err(|e| color_eyre::eyre::eyre!("Failed to save the language: {}", e))?;
            let strings = i18n::strings(language);
            output.success(&format!("{} {}", strings.language, strings.language_name(language)));
        }
        None => {
            let supported: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
            output.error(&format!(
                "Unknown language code '{}'. Supported: {}",
                code,
                supported.join(", ")
            ));
        }
    }
    Ok(())
}

fn show_language(storage: &filmoteka_config::FileStore, output: &Output) -> Result<()> {
    let current = load_language(storage);
    let strings = i18n::strings(current);

    match output.format() {
        crate::output::OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }

            println!("{} {} ({})", strings.language, strings.language_name(current).bold(), current.code());
            println!();
            for language in Language::ALL {
                let marker = if language == current {
                    "✓".green().to_string()
                } else {
                    " ".to_string()
                };
                println!("  {} {:<4} {}", marker, language.code(), strings.language_name(language));
            }
        }
        crate::output::OutputFormat::Json | crate::output::OutputFormat::JsonPretty => {
            let json_lang = json!({
                "current": current.code(),
                "available": Language::ALL.iter().map(|l| l.code()).collect::<Vec<_>>(),
            });
            output.json(&json_lang);
        }
    }
    Ok(())
}
