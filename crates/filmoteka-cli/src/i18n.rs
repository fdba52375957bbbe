use filmoteka_models::Language;

/// One language's worth of display text.
///
/// Every language defines every field, so a missing translation is a compile
/// error rather than a runtime fallback.
pub struct Strings {
    pub app_title: &'static str,
    pub planned_list_title: &'static str,
    pub watched_list_title: &'static str,
    pub empty_planned: &'static str,
    pub empty_watched: &'static str,
    pub stats_planned: &'static str,
    pub stats_watched: &'static str,
    pub rating: &'static str,
    pub confirm_clear: &'static str,
    pub prompt_edit: &'static str,
    pub language: &'static str,
    pub lang_uk: &'static str,
    pub lang_en: &'static str,
    pub lang_fr: &'static str,
    pub lang_ru: &'static str,
}

impl Strings {
    pub fn language_name(&self, language: Language) -> &'static str {
        match language {
            Language::Ukrainian => self.lang_uk,
            Language::English => self.lang_en,
            Language::French => self.lang_fr,
            Language::Russian => self.lang_ru,
        }
    }
}

const UK: Strings = Strings {
    app_title: "🎬 Міні Кінопоіск",
    planned_list_title: "👀 Хочу подивитись",
    watched_list_title: "✅ Переглянуто",
    empty_planned: "Додай фільм у “Хочу подивитись”.",
    empty_watched: "Поки переглянутих фільмів немає.",
    stats_planned: "👀 Хочу:",
    stats_watched: "✅ Переглянуто:",
    rating: "Оцінка:",
    confirm_clear: "Очистити всю фільмотеку?",
    prompt_edit: "Нова назва фільму",
    language: "Мова:",
    lang_uk: "Українська",
    lang_en: "English",
    lang_fr: "Français",
    lang_ru: "Русский",
};

const EN: Strings = Strings {
    app_title: "🎬 Mini Movie List",
    planned_list_title: "👀 Want to watch",
    watched_list_title: "✅ Watched",
    empty_planned: "Add a movie to “Want to watch”.",
    empty_watched: "No watched movies yet.",
    stats_planned: "👀 Want:",
    stats_watched: "✅ Watched:",
    rating: "Rating:",
    confirm_clear: "Clear the whole list?",
    prompt_edit: "New movie title",
    language: "Language:",
    lang_uk: "Ukrainian",
    lang_en: "English",
    lang_fr: "French",
    lang_ru: "Russian",
};

const FR: Strings = Strings {
    app_title: "🎬 Mini Cinéma",
    planned_list_title: "👀 À voir",
    watched_list_title: "✅ Vus",
    empty_planned: "Ajoute un film dans “À voir”.",
    empty_watched: "Aucun film vu pour l’instant.",
    stats_planned: "👀 À voir :",
    stats_watched: "✅ Vus :",
    rating: "Note :",
    confirm_clear: "Effacer toute la liste ?",
    prompt_edit: "Nouveau titre du film",
    language: "Langue :",
    lang_uk: "Ukrainien",
    lang_en: "Anglais",
    lang_fr: "Français",
    lang_ru: "Russe",
};

const RU: Strings = Strings {
    app_title: "🎬 Мини Кинопоиск",
    planned_list_title: "👀 Хочу посмотреть",
    watched_list_title: "✅ Просмотрено",
    empty_planned: "Добавь фильм в “Хочу посмотреть”.",
    empty_watched: "Пока нет просмотренных фильмов.",
    stats_planned: "👀 Хочу:",
    stats_watched: "✅ Просмотрено:",
    rating: "Оценка:",
    confirm_clear: "Очистить всю фильмотеку?",
    prompt_edit: "Новое название фильма",
    language: "Язык:",
    lang_uk: "Украинский",
    lang_en: "Английский",
    lang_fr: "Французский",
    lang_ru: "Русский",
};

pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::Ukrainian => &UK,
        Language::English => &EN,
        Language::French => &FR,
        Language::Russian => &RU,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_names_every_language() {
        for language in Language::ALL {
            let table = strings(language);
            for named in Language::ALL {
                assert!(!table.language_name(named).is_empty());
            }
        }
    }

    #[test]
    fn test_tables_are_actually_translated() {
        assert_ne!(
            strings(Language::English).planned_list_title,
            strings(Language::French).planned_list_title
        );
        assert!(strings(Language::English).planned_list_title.contains("Want to watch"));
        assert!(strings(Language::Ukrainian).confirm_clear.contains("фільмотеку"));
    }
}
