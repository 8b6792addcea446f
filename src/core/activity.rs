//! When people talk: weekday, month and weekday-by-hour activity.

use chrono::Weekday;
use serde::Serialize;

use super::filter::{Selection, select};
use crate::record::{ChatRecord, MONTH_NAMES, WEEKDAY_NAMES};

const HOURS: usize = 24;
const DAYS: usize = 7;

/// A label with a message count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NamedCount {
    pub name: &'static str,
    pub messages: usize,
}

/// Messages per weekday, busiest first. Weekdays with no messages are
/// absent; equal counts keep Monday-to-Sunday order.
pub fn weekday_activity(selection: &Selection, records: &[ChatRecord]) -> Vec<NamedCount> {
    let mut counts = [0usize; DAYS];
    for record in select(records, selection) {
        counts[record.parts().weekday.num_days_from_monday() as usize] += 1;
    }
    ranked(&WEEKDAY_NAMES, &counts)
}

/// Messages per month name (all years folded together), busiest first.
/// Months with no messages are absent; equal counts keep calendar order.
pub fn month_activity(selection: &Selection, records: &[ChatRecord]) -> Vec<NamedCount> {
    let mut counts = [0usize; 12];
    for record in select(records, selection) {
        counts[(record.parts().month_num - 1) as usize] += 1;
    }
    ranked(&MONTH_NAMES, &counts)
}

fn ranked(names: &[&'static str], counts: &[usize]) -> Vec<NamedCount> {
    let mut out: Vec<NamedCount> = names
        .iter()
        .zip(counts)
        .filter(|&(_, &messages)| messages > 0)
        .map(|(&name, &messages)| NamedCount { name, messages })
        .collect();
    out.sort_by(|a, b| b.messages.cmp(&a.messages));
    out
}

/// Label for the hour bucket starting at `hour`: `"23-0"`, `"0-1"`, ...
pub fn period_label(hour: usize) -> String {
    format!("{}-{}", hour, (hour + 1) % HOURS)
}

/// Message counts on a fixed 7×24 grid.
///
/// Rows are weekdays Monday…Sunday, columns are hours 0…23 labelled with
/// [`period_label`]. Every cell is present; empty slots hold zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityHeatmap {
    rows: [&'static str; DAYS],
    columns: Vec<String>,
    cells: [[usize; HOURS]; DAYS],
}

impl ActivityHeatmap {
    /// All-zero grid.
    pub fn empty() -> Self {
        Self {
            rows: WEEKDAY_NAMES,
            columns: (0..HOURS).map(period_label).collect(),
            cells: [[0; HOURS]; DAYS],
        }
    }

    fn add(&mut self, weekday: Weekday, hour: u32) {
        self.cells[weekday.num_days_from_monday() as usize][hour as usize] += 1;
    }

    /// Weekday names, Monday first.
    pub fn rows(&self) -> &[&'static str; DAYS] {
        &self.rows
    }

    /// Hour bucket labels, `"0-1"` first.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn cells(&self) -> &[[usize; HOURS]; DAYS] {
        &self.cells
    }

    /// Count for one weekday and hour (0–23). Out-of-range hours read as 0.
    pub fn get(&self, weekday: Weekday, hour: u32) -> usize {
        self.cells[weekday.num_days_from_monday() as usize]
            .get(hour as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    /// The busiest (weekday, hour, count), or `None` if the grid is empty.
    /// Ties resolve to the earliest weekday, then the earliest hour.
    pub fn peak(&self) -> Option<(&'static str, usize, usize)> {
        let mut best: Option<(&'static str, usize, usize)> = None;
        for (day, row) in self.cells.iter().enumerate() {
            for (hour, &count) in row.iter().enumerate() {
                if count > best.map_or(0, |(_, _, c)| c) {
                    best = Some((self.rows[day], hour, count));
                }
            }
        }
        best
    }
}

impl Default for ActivityHeatmap {
    fn default() -> Self {
        Self::empty()
    }
}

/// Builds the weekday-by-hour grid for `selection`.
pub fn activity_heatmap(selection: &Selection, records: &[ChatRecord]) -> ActivityHeatmap {
    let mut heatmap = ActivityHeatmap::empty();
    for record in select(records, selection) {
        let parts = record.parts();
        heatmap.add(parts.weekday, parts.hour);
    }
    heatmap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    // 2/1/23 is a Monday, 8/1/23 a Sunday
    fn records() -> Vec<ChatRecord> {
        parse(
            "2/1/23, 09:15 - Alice: monday morning\n\
             2/1/23, 09:45 - Bob: monday morning too\n\
             2/1/23, 23:30 - Alice: monday night\n\
             8/1/23, 00:05 - Bob: sunday just after midnight\n\
             3/2/23, 12:00 - Alice: friday in february\n",
        )
    }

    #[test]
    fn test_weekday_activity() {
        let activity = weekday_activity(&Selection::Overall, &records());
        assert_eq!(
            activity,
            vec![
                NamedCount { name: "Monday", messages: 3 },
                NamedCount { name: "Friday", messages: 1 },
                NamedCount { name: "Sunday", messages: 1 },
            ]
        );
    }

    #[test]
    fn test_month_activity() {
        let activity = month_activity(&Selection::Overall, &records());
        assert_eq!(activity[0], NamedCount { name: "January", messages: 4 });
        assert_eq!(activity[1], NamedCount { name: "February", messages: 1 });
        assert_eq!(activity.len(), 2);
    }

    #[test]
    fn test_period_labels() {
        assert_eq!(period_label(0), "0-1");
        assert_eq!(period_label(9), "9-10");
        assert_eq!(period_label(23), "23-0");
    }

    #[test]
    fn test_heatmap_shape() {
        let heatmap = activity_heatmap(&Selection::Overall, &records());
        assert_eq!(heatmap.rows().len(), 7);
        assert_eq!(heatmap.rows()[0], "Monday");
        assert_eq!(heatmap.rows()[6], "Sunday");
        assert_eq!(heatmap.columns().len(), 24);
        assert_eq!(heatmap.columns()[23], "23-0");
        assert!(heatmap.cells().iter().all(|row| row.len() == 24));
    }

    #[test]
    fn test_heatmap_cells() {
        let heatmap = activity_heatmap(&Selection::Overall, &records());
        assert_eq!(heatmap.get(Weekday::Mon, 9), 2);
        assert_eq!(heatmap.get(Weekday::Mon, 23), 1);
        assert_eq!(heatmap.get(Weekday::Sun, 0), 1);
        assert_eq!(heatmap.get(Weekday::Fri, 12), 1);
        assert_eq!(heatmap.get(Weekday::Tue, 9), 0);
        assert_eq!(heatmap.get(Weekday::Tue, 99), 0);
        assert_eq!(heatmap.total(), 5);
        assert_eq!(heatmap.peak(), Some(("Monday", 9, 2)));
    }

    #[test]
    fn test_heatmap_for_user() {
        let heatmap = activity_heatmap(&Selection::user("Bob"), &records());
        assert_eq!(heatmap.total(), 2);
        assert_eq!(heatmap.get(Weekday::Mon, 9), 1);
    }

    #[test]
    fn test_empty_views() {
        assert!(weekday_activity(&Selection::Overall, &[]).is_empty());
        assert!(month_activity(&Selection::Overall, &[]).is_empty());

        let heatmap = activity_heatmap(&Selection::Overall, &[]);
        assert_eq!(heatmap, ActivityHeatmap::empty());
        assert_eq!(heatmap.total(), 0);
        assert_eq!(heatmap.peak(), None);
    }
}
