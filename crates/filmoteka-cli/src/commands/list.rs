use super::{open_storage, short_id};
use crate::i18n::{self, Strings};
use crate::output::Output;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use filmoteka_core::{load_language, project, status_counts, MovieStore};
use filmoteka_models::{MovieRecord, SortMode};
use owo_colors::OwoColorize;
use serde_json::json;

pub fn run_list(search: &str, sort: SortMode, output: &Output) -> Result<()> {
    let storage = open_storage()?;
    let language = load_language(&storage);
    let strings = i18n::strings(language);
    let store = MovieStore::open(storage);

    let view = project(store.movies(), search, sort);
    let counts = status_counts(store.movies());

    match output.format() {
        crate::output::OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }

            println!("\n{}", strings.app_title.bright_cyan().bold());
            println!();
            print_panel(strings.planned_list_title, &view.planned, strings.empty_planned, strings);
            print_panel(strings.watched_list_title, &view.watched, strings.empty_watched, strings);
            output.println(&format!(
                "{} {} • {} {}",
                strings.stats_planned,
                counts.planned.to_string().bold(),
                strings.stats_watched,
                counts.watched.to_string().bold()
            ));
        }
        crate::output::OutputFormat::Json | crate::output::OutputFormat::JsonPretty => {
            let json_view = json!({
                "planned": view.planned.iter().map(movie_json).collect::<Vec<_>>(),
                "watched": view.watched.iter().map(movie_json).collect::<Vec<_>>(),
                "counts": {
                    "planned": counts.planned,
                    "watched": counts.watched,
                },
            });
            output.json(&json_view);
        }
    }

    Ok(())
}

fn print_panel(title: &str, movies: &[MovieRecord], empty: &str, strings: &Strings) {
    let mut table = Table::new();
    table.set_header(vec![Cell::new(format!("{} ({})", title, movies.len()))
        .fg(comfy_table::Color::Cyan)
        .add_attribute(comfy_table::Attribute::Bold)]);

    if movies.is_empty() {
        table.add_row(vec![Cell::new(empty)]);
    } else {
        for movie in movies {
            table.add_row(vec![
                Cell::new(short_id(&movie.id)),
                Cell::new(&movie.title),
                Cell::new(format!("{} {}/10", strings.rating, movie.rating)),
            ]);
        }
    }

    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    println!("{}", table);
    println!();
}

fn movie_json(movie: &MovieRecord) -> serde_json::Value {
    json!({
        "id": movie.id,
        "title": movie.title,
        "status": movie.status.label(),
        "rating": movie.rating,
        "createdAt": movie.created_at.timestamp_millis(),
    })
}
