//! Fixed `ru-RU` display strings for the feed.
//!
//! The feed renders in one locale only; these helpers are the single place
//! where user-facing text is produced.

use chrono::{Datelike, NaiveDate};

/// Heading shown when the filtered feed is empty.
pub const EMPTY_STATE_TITLE: &str = "Новостей не найдено";
/// Hint shown under the empty-state heading.
pub const EMPTY_STATE_HINT: &str = "Попробуйте изменить параметры фильтрации";
/// Label of the reset action.
pub const RESET_FILTERS_LABEL: &str = "Сбросить фильтры";

const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Long-form date, e.g. `30 октября 2025 г.`.
pub fn format_date_ru(date: NaiveDate) -> String {
    let month = MONTHS_GENITIVE[date.month0() as usize];
    format!("{} {} {} г.", date.day(), month, date.year())
}

/// Result counter line, e.g. `Найдено новостей: 2`.
pub fn result_summary(count: usize) -> String {
    format!("Найдено новостей: {count}")
}

#[cfg(test)]
mod tests {
    use super::{format_date_ru, result_summary};
    use chrono::NaiveDate;

    #[test]
    fn formats_long_russian_dates() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 30).expect("valid date");
        assert_eq!(format_date_ru(date), "30 октября 2025 г.");

        let date = NaiveDate::from_ymd_opt(2024, 1, 5).expect("valid date");
        assert_eq!(format_date_ru(date), "5 января 2024 г.");
    }

    #[test]
    fn summary_includes_count() {
        assert_eq!(result_summary(0), "Найдено новостей: 0");
    }
}
