//! Message counts over time.
//!
//! Grouping uses a `BTreeMap` keyed on calendar values so output is always
//! chronological, independent of record order in the export.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::filter::{Selection, select};
use crate::record::{ChatRecord, MONTH_NAMES};

/// Messages in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyPoint {
    pub year: i32,
    pub month_num: u32,
    /// `"<MonthName> <Year>"`, e.g. `"January 2023"`.
    pub label: String,
    pub messages: usize,
}

/// Messages on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub messages: usize,
}

/// Per-month message counts in chronological order. Months without
/// messages are absent.
pub fn monthly_timeline(selection: &Selection, records: &[ChatRecord]) -> Vec<MonthlyPoint> {
    let mut months: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for record in select(records, selection) {
        let parts = record.parts();
        *months.entry((parts.year, parts.month_num)).or_default() += 1;
    }

    months
        .into_iter()
        .map(|((year, month_num), messages)| MonthlyPoint {
            year,
            month_num,
            label: format!("{} {}", MONTH_NAMES[(month_num - 1) as usize], year),
            messages,
        })
        .collect()
}

/// Per-day message counts in chronological order. Days without messages
/// are absent.
pub fn daily_timeline(selection: &Selection, records: &[ChatRecord]) -> Vec<DailyPoint> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in select(records, selection) {
        *days.entry(record.parts().date).or_default() += 1;
    }

    days.into_iter()
        .map(|(date, messages)| DailyPoint { date, messages })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn records() -> Vec<ChatRecord> {
        parse(
            "5/2/23, 10:00 - Alice: february\n\
             30/12/22, 10:00 - Bob: december\n\
             1/1/23, 10:00 - Alice: january\n\
             1/1/23, 11:00 - Bob: january again\n\
             6/2/23, 10:00 - Bob: february again\n",
        )
    }

    #[test]
    fn test_monthly_timeline_is_chronological() {
        let timeline = monthly_timeline(&Selection::Overall, &records());
        let labels: Vec<_> = timeline.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["December 2022", "January 2023", "February 2023"]);

        let counts: Vec<_> = timeline.iter().map(|p| p.messages).collect();
        assert_eq!(counts, vec![1, 2, 2]);
        assert_eq!(timeline[2].month_num, 2);
        assert_eq!(timeline[2].year, 2023);
    }

    #[test]
    fn test_monthly_timeline_for_user() {
        let timeline = monthly_timeline(&Selection::user("Alice"), &records());
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].label, "January 2023");
    }

    #[test]
    fn test_daily_timeline() {
        let timeline = daily_timeline(&Selection::Overall, &records());
        assert_eq!(timeline.len(), 4);
        assert_eq!(timeline[0].date, NaiveDate::from_ymd_opt(2022, 12, 30).unwrap());
        assert_eq!(timeline[1].date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(timeline[1].messages, 2);
        assert_eq!(timeline.iter().map(|p| p.messages).sum::<usize>(), 5);
    }

    #[test]
    fn test_empty_timelines() {
        assert!(monthly_timeline(&Selection::Overall, &[]).is_empty());
        assert!(daily_timeline(&Selection::Overall, &[]).is_empty());
    }
}
