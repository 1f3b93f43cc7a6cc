//! Calendar domain logic for the agenda.
//!
//! This module derives the visible week from a reference date, decides which
//! days offer the ministración slot, and produces the Spanish labels shown
//! in the grid. The UI only handles presentation; every date computation
//! lives here.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use log::{debug, info};
use shared::WeekDay;

/// Calendar service that handles all week-related date logic
#[derive(Debug, Clone, Default)]
pub struct CalendarService;

impl CalendarService {
    /// Create a new CalendarService instance
    pub fn new() -> Self {
        Self
    }

    /// Derive the seven days of the week containing `reference`, Monday first.
    /// Days past the end of the supported date range are left out.
    pub fn derive_week(&self, reference: NaiveDate, today: NaiveDate) -> Vec<WeekDay> {
        let start = self.start_of_week(reference);
        debug!("📅 CALENDAR: Deriving week starting {} for reference {}", start, reference);

        (0..7)
            .filter_map(|offset| start.checked_add_signed(Duration::days(offset)))
            .map(|date| {
                WeekDay {
                    date,
                    label: self.day_label(date),
                    short_weekday: self.short_weekday_es(date.weekday()).to_string(),
                    is_today: date == today,
                    is_available_day: self.is_available_day(date),
                }
            })
            .collect()
    }

    /// Monday on or before `date`, or `date` itself at the start of the date range
    pub fn start_of_week(&self, date: NaiveDate) -> NaiveDate {
        let days_since_monday = date.weekday().num_days_from_monday() as i64;
        date.checked_sub_signed(Duration::days(days_since_monday))
            .unwrap_or(date)
    }

    /// Only Mondays and Tuesdays offer the slot
    pub fn is_available_day(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Mon | Weekday::Tue)
    }

    /// Same weekday one week earlier
    pub fn previous_week(&self, date: NaiveDate) -> NaiveDate {
        let previous = date.checked_sub_signed(Duration::days(7)).unwrap_or(date);
        info!("📅 Navigated to previous week: {}", previous);
        previous
    }

    /// Same weekday one week later
    pub fn next_week(&self, date: NaiveDate) -> NaiveDate {
        let next = date.checked_add_signed(Duration::days(7)).unwrap_or(date);
        info!("📅 Navigated to next week: {}", next);
        next
    }

    /// Short grid label, e.g. "lun 12"
    pub fn day_label(&self, date: NaiveDate) -> String {
        format!("{} {}", self.short_weekday_es(date.weekday()), date.day())
    }

    /// Navigation title, e.g. "octubre 2026"
    pub fn month_year_label(&self, date: NaiveDate) -> String {
        format!("{} {}", self.month_name_es(date.month()), date.year())
    }

    /// Booking dialog heading, e.g. "lunes 12 de octubre • 21:00"
    pub fn slot_heading(&self, date: NaiveDate, start_time: &str) -> String {
        format!(
            "{} {} de {} • {}",
            self.weekday_name_es(date.weekday()),
            date.day(),
            self.month_name_es(date.month()),
            start_time
        )
    }

    pub fn weekday_name_es(&self, weekday: Weekday) -> &'static str {
        match weekday {
            Weekday::Mon => "lunes",
            Weekday::Tue => "martes",
            Weekday::Wed => "miércoles",
            Weekday::Thu => "jueves",
            Weekday::Fri => "viernes",
            Weekday::Sat => "sábado",
            Weekday::Sun => "domingo",
        }
    }

    pub fn short_weekday_es(&self, weekday: Weekday) -> &'static str {
        match weekday {
            Weekday::Mon => "lun",
            Weekday::Tue => "mar",
            Weekday::Wed => "mié",
            Weekday::Thu => "jue",
            Weekday::Fri => "vie",
            Weekday::Sat => "sáb",
            Weekday::Sun => "dom",
        }
    }

    /// Get the Spanish name for a month number
    pub fn month_name_es(&self, month: u32) -> &'static str {
        match month {
            1 => "enero", 2 => "febrero", 3 => "marzo", 4 => "abril",
            5 => "mayo", 6 => "junio", 7 => "julio", 8 => "agosto",
            9 => "septiembre", 10 => "octubre", 11 => "noviembre", 12 => "diciembre",
            _ => "mes inválido",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_week_starts_on_monday_for_every_weekday() {
        let service = CalendarService::new();
        let monday = date(2026, 10, 12);

        for offset in 0..7 {
            let reference = monday + Duration::days(offset);
            let week = service.derive_week(reference, reference);

            assert_eq!(week.len(), 7);
            assert_eq!(week[0].date, monday, "reference {}", reference);
            for (i, day) in week.iter().enumerate() {
                assert_eq!(day.date, monday + Duration::days(i as i64));
            }
        }
    }

    #[test]
    fn test_week_from_wednesday_flags_monday_and_tuesday() {
        let service = CalendarService::new();
        let wednesday = date(2026, 10, 14);

        let week = service.derive_week(wednesday, wednesday);
        let available: Vec<NaiveDate> = week
            .iter()
            .filter(|d| d.is_available_day)
            .map(|d| d.date)
            .collect();

        assert_eq!(available, vec![date(2026, 10, 12), date(2026, 10, 13)]);
        assert_eq!(week[6].date, date(2026, 10, 18));
        assert_eq!(week[6].date.weekday(), Weekday::Sun);
    }

    #[test]
    fn test_is_today_marks_only_matching_date() {
        let service = CalendarService::new();
        let today = date(2026, 10, 14);

        let week = service.derive_week(today, today);
        let todays: Vec<&WeekDay> = week.iter().filter(|d| d.is_today).collect();
        assert_eq!(todays.len(), 1);
        assert_eq!(todays[0].date, today);

        let other_week = service.derive_week(date(2026, 10, 21), today);
        assert!(other_week.iter().all(|d| !d.is_today));
    }

    #[test]
    fn test_week_spanning_month_and_year_boundaries() {
        let service = CalendarService::new();

        // 2026-11-01 is a Sunday
        let week = service.derive_week(date(2026, 11, 1), date(2026, 11, 1));
        assert_eq!(week[0].date, date(2026, 10, 26));
        assert_eq!(week[6].date, date(2026, 11, 1));

        // 2027-01-01 is a Friday
        let week = service.derive_week(date(2027, 1, 1), date(2027, 1, 1));
        assert_eq!(week[0].date, date(2026, 12, 28));
        assert_eq!(week[0].label, "lun 28");
        assert_eq!(week[4].label, "vie 1");
    }

    #[test]
    fn test_is_available_day() {
        let service = CalendarService::new();

        assert!(service.is_available_day(date(2026, 10, 12)));
        assert!(service.is_available_day(date(2026, 10, 13)));
        for day in 14..=18 {
            assert!(!service.is_available_day(date(2026, 10, day)));
        }
    }

    #[test]
    fn test_navigation_moves_by_seven_days() {
        let service = CalendarService::new();

        assert_eq!(service.previous_week(date(2026, 10, 14)), date(2026, 10, 7));
        assert_eq!(service.next_week(date(2026, 10, 14)), date(2026, 10, 21));
        assert_eq!(service.next_week(date(2026, 12, 30)), date(2027, 1, 6));
    }

    #[test]
    fn test_spanish_labels() {
        let service = CalendarService::new();
        let week = service.derive_week(date(2026, 10, 14), date(2026, 10, 14));

        let shorts: Vec<&str> = week.iter().map(|d| d.short_weekday.as_str()).collect();
        assert_eq!(shorts, vec!["lun", "mar", "mié", "jue", "vie", "sáb", "dom"]);
        assert_eq!(week[0].label, "lun 12");

        assert_eq!(service.month_year_label(date(2026, 10, 14)), "octubre 2026");
        assert_eq!(
            service.slot_heading(date(2026, 10, 12), "21:00"),
            "lunes 12 de octubre • 21:00"
        );
        assert_eq!(service.month_name_es(13), "mes inválido");
    }

    #[test]
    fn test_date_range_edges_do_not_overflow() {
        let service = CalendarService::new();

        let last_week = service.derive_week(NaiveDate::MAX, NaiveDate::MAX);
        assert!(!last_week.is_empty() && last_week.len() <= 7);
        assert_eq!(last_week.last().unwrap().date, NaiveDate::MAX);
        assert_eq!(last_week[0].date.weekday(), Weekday::Mon);

        assert_eq!(service.next_week(NaiveDate::MAX), NaiveDate::MAX);
        assert_eq!(service.previous_week(NaiveDate::MIN), NaiveDate::MIN);

        let first_week = service.derive_week(NaiveDate::MIN, NaiveDate::MIN);
        assert_eq!(first_week.len(), 7);
        assert!(first_week[0].date >= NaiveDate::MIN);
    }
}
