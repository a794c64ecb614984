use chrono::NaiveDate;

/// Earliest year accepted for an extracted date
pub const MIN_YEAR: i32 = 1900;
/// Latest year accepted for an extracted date
pub const MAX_YEAR: i32 = 2100;

/// Calendar helpers for turning matched date fields into canonical dates
pub struct LegalCalendar;

impl LegalCalendar {
    /// Build a canonical date from numeric fields.
    ///
    /// Returns `None` for impossible dates (month 13, February 30, ...) and
    /// for years outside `[MIN_YEAR, MAX_YEAR]`.
    pub fn make_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Build a canonical date from the raw string fields of a regex capture
    pub fn from_fields(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
        let year = year.trim().parse::<i32>().ok()?;
        let month = month.trim().parse::<u32>().ok()?;
        let day = day.trim().parse::<u32>().ok()?;
        Self::make_date(year, month, day)
    }

    /// Look up a month by full name or abbreviation ("Sept.", "november", "Jan")
    pub fn month_from_name(name: &str) -> Option<u32> {
        let cleaned = name.trim().trim_end_matches('.').to_lowercase();
        let month = match cleaned.as_str() {
            "january" | "jan" => 1,
            "february" | "feb" => 2,
            "march" | "mar" => 3,
            "april" | "apr" => 4,
            "may" => 5,
            "june" | "jun" => 6,
            "july" | "jul" => 7,
            "august" | "aug" => 8,
            "september" | "sep" | "sept" => 9,
            "october" | "oct" => 10,
            "november" | "nov" => 11,
            "december" | "dec" => 12,
            _ => return None,
        };
        Some(month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_date_valid() {
        assert_eq!(
            LegalCalendar::make_date(2020, 11, 4),
            NaiveDate::from_ymd_opt(2020, 11, 4)
        );
    }

    #[test]
    fn test_make_date_rejects_impossible_days() {
        assert_eq!(LegalCalendar::make_date(2021, 2, 29), None);
        assert_eq!(LegalCalendar::make_date(2020, 13, 1), None);
        assert_eq!(LegalCalendar::make_date(2020, 4, 31), None);
        assert_eq!(LegalCalendar::make_date(2020, 0, 10), None);
    }

    #[test]
    fn test_leap_day() {
        assert!(LegalCalendar::make_date(2020, 2, 29).is_some());
        assert!(LegalCalendar::make_date(1900, 2, 29).is_none());
        assert!(LegalCalendar::make_date(2000, 2, 29).is_some());
    }

    #[test]
    fn test_year_bounds() {
        assert!(LegalCalendar::make_date(1899, 12, 31).is_none());
        assert!(LegalCalendar::make_date(1900, 1, 1).is_some());
        assert!(LegalCalendar::make_date(2100, 12, 31).is_some());
        assert!(LegalCalendar::make_date(2101, 1, 1).is_none());
    }

    #[test]
    fn test_from_fields_rejects_garbage() {
        assert!(LegalCalendar::from_fields("2020", "11", "04").is_some());
        assert!(LegalCalendar::from_fields("20x0", "11", "04").is_none());
        assert!(LegalCalendar::from_fields("2020", "", "04").is_none());
    }

    #[test]
    fn test_month_names() {
        assert_eq!(LegalCalendar::month_from_name("November"), Some(11));
        assert_eq!(LegalCalendar::month_from_name("sept."), Some(9));
        assert_eq!(LegalCalendar::month_from_name("SEP"), Some(9));
        assert_eq!(LegalCalendar::month_from_name("May"), Some(5));
        assert_eq!(LegalCalendar::month_from_name("Mayo"), None);
    }
}
