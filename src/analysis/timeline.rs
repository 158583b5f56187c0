//! Message counts over time.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::filter::UserFilter;
use crate::record::{ChatRecord, month_name};

/// Messages in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub year: i32,
    pub month_num: u32,
    /// `"{MonthName}-{Year}"`, e.g. `"January-2024"`.
    pub label: String,
    pub count: usize,
}

/// Messages on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Monthly message counts in calendar order. Months without messages are
/// omitted.
pub fn monthly_timeline(records: &[ChatRecord], filter: &UserFilter) -> Vec<MonthlyCount> {
    let mut months: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for record in filter.select(records) {
        let cal = record.calendar();
        *months.entry((cal.year, cal.month_num)).or_default() += 1;
    }

    months
        .into_iter()
        .map(|((year, month_num), count)| MonthlyCount {
            year,
            month_num,
            label: format!("{}-{}", month_name(month_num), year),
            count,
        })
        .collect()
}

/// Daily message counts sorted by date. Dates without messages are omitted.
pub fn daily_timeline(records: &[ChatRecord], filter: &UserFilter) -> Vec<DailyCount> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in filter.select(records) {
        *days.entry(record.date()).or_default() += 1;
    }

    days.into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_transcript;

    fn records() -> Vec<ChatRecord> {
        parse_transcript(
            "12/30/23, 10:00 - Alice: a\n\
             1/2/24, 10:00 - Bob: b\n\
             1/2/24, 11:00 - Alice: c\n\
             12/31/23, 10:00 - Bob: out of order\n\
             3/1/24, 10:00 - Alice: d\n",
        )
        .unwrap()
    }

    #[test]
    fn test_monthly_calendar_order() {
        let timeline = monthly_timeline(&records(), &UserFilter::Overall);
        let labels: Vec<_> = timeline.iter().map(|m| (m.label.as_str(), m.count)).collect();
        assert_eq!(
            labels,
            [("December-2023", 2), ("January-2024", 2), ("March-2024", 1)]
        );
    }

    #[test]
    fn test_daily_sorted_by_date() {
        let timeline = daily_timeline(&records(), &UserFilter::Overall);
        let days: Vec<_> = timeline
            .iter()
            .map(|d| (d.date.to_string(), d.count))
            .collect();
        assert_eq!(
            days,
            [
                ("2023-12-30".to_string(), 1),
                ("2023-12-31".to_string(), 1),
                ("2024-01-02".to_string(), 2),
                ("2024-03-01".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_filtered_timeline() {
        let timeline = monthly_timeline(&records(), &UserFilter::user("Bob"));
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline.iter().map(|m| m.count).sum::<usize>(), 2);
    }

    #[test]
    fn test_empty() {
        assert!(monthly_timeline(&[], &UserFilter::Overall).is_empty());
        assert!(daily_timeline(&[], &UserFilter::Overall).is_empty());
    }
}
