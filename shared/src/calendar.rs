//! Calendar projections for the Programs page.
//!
//! Everything here is a pure function of the normalized event list, the
//! current [`Selection`] and a time zone that decides which calendar day an
//! instant belongs to.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::events::DisplayEvent;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid month '{0}', expected YYYY-MM")]
pub struct InvalidMonthError(pub String);

/// A calendar month, stored as its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub fn next(&self) -> Self {
        self.0
            .checked_add_months(Months::new(1))
            .map(Self)
            .unwrap_or(*self)
    }

    pub fn prev(&self) -> Self {
        self.0
            .checked_sub_months(Months::new(1))
            .map(Self)
            .unwrap_or(*self)
    }

    pub fn days_in_month(&self) -> u32 {
        match self.0.checked_add_months(Months::new(1)) {
            Some(next) => (next - self.0).num_days() as u32,
            None => 31,
        }
    }

    /// Iterate over every day of the month.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let first = self.0;
        (0..self.days_in_month()).filter_map(move |offset| first.with_day(offset + 1))
    }

    /// Heading form, e.g. "November 2025".
    pub fn label(&self) -> String {
        self.0.format("%B %Y").to_string()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = InvalidMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| InvalidMonthError(s.to_string()))?;

        let year = year.parse::<i32>().map_err(|_| InvalidMonthError(s.to_string()))?;
        let month = month.parse::<u32>().map_err(|_| InvalidMonthError(s.to_string()))?;

        Self::new(year, month).ok_or_else(|| InvalidMonthError(s.to_string()))
    }
}

impl TryFrom<String> for YearMonth {
    type Error = InvalidMonthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(month: YearMonth) -> Self {
        month.to_string()
    }
}

/// What the visitor has picked on the calendar widget.
///
/// A selected day narrows the list to that day. Without one, the visible
/// month governs. Moving to another month always drops the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub selected_date: Option<NaiveDate>,
    pub visible_month: YearMonth,
}

impl Selection {
    pub fn new(visible_month: YearMonth) -> Self {
        Self {
            selected_date: None,
            visible_month,
        }
    }

    /// Initial state: the month containing `today`, no day selected.
    pub fn starting_at(today: NaiveDate) -> Self {
        Self::new(YearMonth::of(today))
    }

    pub fn select_month(&mut self, month: YearMonth) {
        self.visible_month = month;
        self.selected_date = None;
    }

    pub fn select_day(&mut self, day: NaiveDate) {
        self.selected_date = Some(day);
    }

    pub fn clear_day(&mut self) {
        self.selected_date = None;
    }

    pub fn heading(&self) -> String {
        match self.selected_date {
            Some(day) => format!("Events on {}", day.format("%B %-d, %Y")),
            None => format!("Events in {}", self.visible_month.label()),
        }
    }
}

/// Read-only projections over a normalized event list.
pub struct CalendarView<'a, Tz: TimeZone> {
    events: &'a [DisplayEvent],
    tz: Tz,
}

impl<'a, Tz: TimeZone> CalendarView<'a, Tz> {
    pub fn new(events: &'a [DisplayEvent], tz: Tz) -> Self {
        Self { events, tz }
    }

    fn day_of(&self, event: &DisplayEvent) -> NaiveDate {
        event.day_in(&self.tz)
    }

    /// Current calendar day in this view's time zone.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }

    /// Days that carry at least one event.
    pub fn highlight_dates(&self) -> BTreeSet<NaiveDate> {
        self.events.iter().map(|event| self.day_of(event)).collect()
    }

    pub fn events_on(&self, day: NaiveDate) -> Vec<&'a DisplayEvent> {
        self.events
            .iter()
            .filter(|event| self.day_of(event) == day)
            .collect()
    }

    pub fn events_in_month(&self, month: YearMonth) -> Vec<&'a DisplayEvent> {
        self.events
            .iter()
            .filter(|event| month.contains(self.day_of(event)))
            .collect()
    }

    /// Events for the selected day if there is one, otherwise for the
    /// visible month. Input order is kept.
    pub fn selected_events(&self, selection: &Selection) -> Vec<&'a DisplayEvent> {
        match selection.selected_date {
            Some(day) => self.events_on(day),
            None => self.events_in_month(selection.visible_month),
        }
    }

    /// Events from `today` onwards, earliest first. Events sharing an instant
    /// keep their input order.
    pub fn future_events(&self, today: NaiveDate) -> Vec<&'a DisplayEvent> {
        let mut upcoming: Vec<&'a DisplayEvent> = self
            .events
            .iter()
            .filter(|event| self.day_of(event) >= today)
            .collect();
        upcoming.sort_by_key(|event| event.date);
        upcoming
    }
}

/// Cells of a Sunday-first month grid, padded with `None` to whole weeks.
pub fn month_grid(month: YearMonth) -> Vec<Option<NaiveDate>> {
    let leading = month.first_day().weekday().num_days_from_sunday() as usize;

    let mut cells: Vec<Option<NaiveDate>> = vec![None; leading];
    cells.extend(month.days().map(Some));

    let trailing = (7 - cells.len() % 7) % 7;
    cells.extend(std::iter::repeat(None).take(trailing));
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{normalize_events, RawEventRecord};
    use crate::models::EventStatus;
    use chrono::FixedOffset;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn month(y: i32, m: u32) -> YearMonth {
        YearMonth::new(y, m).unwrap()
    }

    fn raw(id: &str, title: &str, start_date: &str, category: Option<&str>) -> RawEventRecord {
        RawEventRecord {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            start_date: start_date.to_string(),
            category: category.map(str::to_string),
            status: EventStatus::Published,
        }
    }

    fn programme() -> Vec<DisplayEvent> {
        let records = vec![
            raw("1", "Career Exploration Workshop", "2025-10-15T14:00:00Z", Some("Career")),
            raw("2", "Math Tutoring Session", "2025-10-20T15:00:00Z", Some("Academic")),
            raw("3", "Study Skills Workshop", "2025-10-25T14:00:00Z", Some("Academic")),
            raw("4", "Mental Health Awareness Day", "2025-11-05T13:00:00Z", Some("Wellness")),
            raw("5", "Science Fair", "2025-11-10T10:00:00Z", Some("Academic")),
            raw("6", "Sports Tournament", "2025-11-15T09:00:00Z", Some("Sports")),
            raw("7", "University Application Workshop", "2025-11-20T15:00:00Z", Some("Career")),
            raw("8", "Peer Counseling Session", "2025-11-25T14:00:00Z", Some("Wellness")),
            raw("9", "Basketball Skills Training", "2025-12-05T16:00:00Z", Some("Sports")),
            raw("10", "English Literature Study Group", "2025-12-08T15:00:00Z", Some("Academic")),
            raw("11", "Career Mentorship Program Launch", "2025-12-12T13:00:00Z", Some("Career")),
            raw("12", "Mindfulness and Meditation", "2025-12-18T14:00:00Z", Some("Wellness")),
            raw("13", "Soccer Match", "2025-12-22T15:00:00Z", Some("Sports")),
            raw("14", "STEM Workshop", "2025-12-28T10:00:00Z", Some("Academic")),
        ];
        normalize_events(&records, &Utc)
    }

    fn titles(events: &[&DisplayEvent]) -> Vec<String> {
        events.iter().map(|e| e.title.clone()).collect()
    }

    #[test]
    fn test_single_event_month_view() {
        let events = normalize_events(
            &[raw("5", "Science Fair", "2025-11-10T10:00:00Z", Some("Academic"))],
            &Utc,
        );
        let view = CalendarView::new(&events, Utc);
        let selection = Selection::new(month(2025, 11));

        let selected = view.selected_events(&selection);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].title, "Science Fair");
        assert_eq!(selected[0].badge, "Academic");

        let highlights: Vec<_> = view.highlight_dates().into_iter().collect();
        assert_eq!(highlights, vec![date(2025, 11, 10)]);
    }

    #[test]
    fn test_two_events_same_day() {
        let events = normalize_events(
            &[
                raw("a", "Morning Drill", "2025-12-05T08:00:00Z", Some("Sports")),
                raw("b", "Basketball Skills Training", "2025-12-05T16:00:00Z", Some("Sports")),
            ],
            &Utc,
        );
        let view = CalendarView::new(&events, Utc);

        assert_eq!(view.highlight_dates().len(), 1);

        let mut selection = Selection::new(month(2025, 12));
        selection.select_day(date(2025, 12, 5));
        assert_eq!(
            titles(&view.selected_events(&selection)),
            vec!["Morning Drill", "Basketball Skills Training"]
        );
    }

    #[test]
    fn test_empty_input_yields_empty_projections() {
        let events: Vec<DisplayEvent> = Vec::new();
        let view = CalendarView::new(&events, Utc);
        let mut selection = Selection::new(month(2025, 11));

        assert!(view.highlight_dates().is_empty());
        assert!(view.selected_events(&selection).is_empty());
        selection.select_day(date(2025, 11, 10));
        assert!(view.selected_events(&selection).is_empty());
        assert!(view.future_events(date(2025, 1, 1)).is_empty());
    }

    #[test]
    fn test_month_buckets_partition_events() {
        let events = programme();
        let view = CalendarView::new(&events, Utc);

        let total: usize = [month(2025, 9), month(2025, 10), month(2025, 11), month(2025, 12)]
            .into_iter()
            .map(|m| view.events_in_month(m).len())
            .sum();
        assert_eq!(total, events.len());
        assert_eq!(view.events_in_month(month(2025, 10)).len(), 3);
        assert_eq!(view.events_in_month(month(2025, 11)).len(), 5);
        assert_eq!(view.events_in_month(month(2025, 12)).len(), 6);
    }

    #[test]
    fn test_same_month_of_different_years_is_kept_apart() {
        let events = normalize_events(
            &[
                raw("old", "Science Fair 2024", "2024-11-10T10:00:00Z", Some("Academic")),
                raw("new", "Science Fair 2025", "2025-11-10T10:00:00Z", Some("Academic")),
            ],
            &Utc,
        );
        let view = CalendarView::new(&events, Utc);

        assert_eq!(titles(&view.events_in_month(month(2024, 11))), vec!["Science Fair 2024"]);
        assert_eq!(titles(&view.events_in_month(month(2025, 11))), vec!["Science Fair 2025"]);

        let mut selection = Selection::new(month(2025, 11));
        selection.select_day(date(2024, 11, 10));
        assert_eq!(titles(&view.selected_events(&selection)), vec!["Science Fair 2024"]);
    }

    #[test]
    fn test_highlights_match_event_count_when_days_distinct() {
        let events = programme();
        let view = CalendarView::new(&events, Utc);
        assert_eq!(view.highlight_dates().len(), events.len());
    }

    #[test]
    fn test_month_view_keeps_input_order() {
        let events = normalize_events(
            &[
                raw("late", "Late", "2025-11-28T10:00:00Z", None),
                raw("early", "Early", "2025-11-02T10:00:00Z", None),
            ],
            &Utc,
        );
        let view = CalendarView::new(&events, Utc);

        let selected = view.selected_events(&Selection::new(month(2025, 11)));
        assert_eq!(titles(&selected), vec!["Late", "Early"]);
    }

    #[test]
    fn test_selected_day_without_events_is_empty() {
        let events = programme();
        let view = CalendarView::new(&events, Utc);

        let mut selection = Selection::new(month(2025, 11));
        selection.select_day(date(2025, 11, 11));
        assert!(view.selected_events(&selection).is_empty());
        assert!(view.events_in_month(month(2026, 2)).is_empty());
    }

    #[test]
    fn test_future_events_from_today_sorted() {
        let events = programme();
        let view = CalendarView::new(&events, Utc);

        let upcoming = view.future_events(date(2025, 11, 20));
        assert_eq!(upcoming.len(), 8);
        assert_eq!(upcoming[0].title, "University Application Workshop");
        assert!(upcoming.windows(2).all(|pair| pair[0].date <= pair[1].date));
        assert!(upcoming
            .iter()
            .all(|event| event.day_in(&Utc) >= date(2025, 11, 20)));
    }

    #[test]
    fn test_future_events_ignores_selection_and_sorts_stably() {
        let events = normalize_events(
            &[
                raw("1", "Second", "2026-03-01T09:00:00Z", None),
                raw("2", "Tie A", "2026-02-01T09:00:00Z", None),
                raw("3", "Tie B", "2026-02-01T09:00:00Z", None),
                raw("4", "Past", "2025-01-01T09:00:00Z", None),
            ],
            &Utc,
        );
        let view = CalendarView::new(&events, Utc);

        assert_eq!(
            titles(&view.future_events(date(2026, 1, 1))),
            vec!["Tie A", "Tie B", "Second"]
        );
    }

    #[test]
    fn test_event_earlier_today_still_upcoming() {
        let events = normalize_events(&[raw("1", "Breakfast", "2025-11-20T06:00:00Z", None)], &Utc);
        let view = CalendarView::new(&events, Utc);

        assert_eq!(view.future_events(date(2025, 11, 20)).len(), 1);
        assert!(view.future_events(date(2025, 11, 21)).is_empty());
    }

    #[test]
    fn test_day_matching_uses_view_zone() {
        let events = normalize_events(&[raw("1", "Late Night", "2025-11-30T23:30:00Z", None)], &Utc);
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();

        let utc_view = CalendarView::new(&events, Utc);
        let local_view = CalendarView::new(&events, plus_two);

        assert_eq!(utc_view.events_in_month(month(2025, 11)).len(), 1);
        assert_eq!(local_view.events_in_month(month(2025, 11)).len(), 0);
        assert_eq!(local_view.events_on(date(2025, 12, 1)).len(), 1);
    }

    #[test]
    fn test_select_month_clears_day() {
        let mut selection = Selection::starting_at(date(2025, 11, 10));
        selection.select_day(date(2025, 11, 10));
        assert_eq!(selection.heading(), "Events on November 10, 2025");

        selection.select_month(month(2025, 12));
        assert_eq!(selection.selected_date, None);
        assert_eq!(selection.heading(), "Events in December 2025");
    }

    #[test]
    fn test_year_month_navigation_wraps() {
        assert_eq!(month(2025, 12).next(), month(2026, 1));
        assert_eq!(month(2026, 1).prev(), month(2025, 12));
        assert_eq!(month(2024, 2).days_in_month(), 29);
        assert_eq!(month(2025, 2).days().count(), 28);
    }

    #[test]
    fn test_year_month_parse_and_display() {
        let parsed: YearMonth = "2025-11".parse().unwrap();
        assert_eq!(parsed, month(2025, 11));
        assert_eq!(parsed.to_string(), "2025-11");
        assert_eq!(parsed.label(), "November 2025");
        assert!("2025-13".parse::<YearMonth>().is_err());
        assert!("November".parse::<YearMonth>().is_err());

        let json = serde_json::to_string(&parsed).unwrap();
        assert_eq!(json, "\"2025-11\"");
    }

    #[test]
    fn test_month_grid_pads_to_weeks() {
        let grid = month_grid(month(2025, 11));

        assert_eq!(grid.len(), 42);
        assert!(grid[..6].iter().all(Option::is_none));
        assert_eq!(grid[6], Some(date(2025, 11, 1)));
        assert_eq!(grid[35], Some(date(2025, 11, 30)));
        assert!(grid[36..].iter().all(Option::is_none));
    }
}
