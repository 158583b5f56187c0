//! Per-author activity ranking.

use serde::Serialize;

use crate::analysis::tally::Tally;
use crate::core::filter::UserFilter;
use crate::record::ChatRecord;

/// Message count of one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserActivity {
    pub user: String,
    pub count: usize,
}

/// One author's share of all messages in scope, in percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserShare {
    pub user: String,
    pub percent: f64,
}

/// Ranks authors by message count, descending; ties keep first appearance.
///
/// Notifications are never ranked. Returns the full ranking.
pub fn busiest_users(records: &[ChatRecord], filter: &UserFilter) -> Vec<UserActivity> {
    ranked(records, filter)
        .into_ranked()
        .into_iter()
        .map(|(user, count)| UserActivity {
            user: user.to_string(),
            count,
        })
        .collect()
}

/// Percentage of messages per author, rounded to two decimals.
///
/// Same order as [`busiest_users`].
pub fn user_share(records: &[ChatRecord], filter: &UserFilter) -> Vec<UserShare> {
    let tally = ranked(records, filter);
    let total = tally.total();
    tally
        .into_ranked()
        .into_iter()
        .map(|(user, count)| UserShare {
            user: user.to_string(),
            percent: (count as f64 / total as f64 * 10_000.0).round() / 100.0,
        })
        .collect()
}

fn ranked<'a>(records: &'a [ChatRecord], filter: &'a UserFilter) -> Tally<&'a str> {
    filter
        .select(records)
        .filter(|r| !r.is_notification())
        .map(ChatRecord::author)
        .collect()
}
