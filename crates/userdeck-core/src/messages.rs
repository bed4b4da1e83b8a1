//! Static user-facing strings, one table per locale.

use crate::config::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub list_loading: &'static str,
    pub list_error: &'static str,
    pub detail_loading: &'static str,
    pub detail_error: &'static str,
    pub select_prompt: &'static str,
}

const ENGLISH: Messages = Messages {
    list_loading: "Loading users...",
    list_error: "Failed to load the user list",
    detail_loading: "Loading...",
    detail_error: "Failed to load user details",
    select_prompt: "Select a user",
};

const RUSSIAN: Messages = Messages {
    list_loading: "Загрузка списка...",
    list_error: "Ошибка загрузки списка",
    detail_loading: "Загрузка...",
    detail_error: "Ошибка загрузки данных",
    select_prompt: "Выберите пользователя",
};

impl Messages {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => ENGLISH,
            Locale::Ru => RUSSIAN,
        }
    }

    pub fn english() -> Self {
        ENGLISH
    }
}

impl Default for Messages {
    fn default() -> Self {
        ENGLISH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_locale() {
        assert_eq!(Messages::for_locale(Locale::En), Messages::english());
        assert_eq!(Messages::for_locale(Locale::Ru).detail_error, "Ошибка загрузки данных");
        assert_eq!(Messages::for_locale(Locale::Ru).list_error, "Ошибка загрузки списка");
    }
}
