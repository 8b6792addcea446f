//! Restrict records to one sender.
//!
//! Every aggregation view starts with the same step: keep all records for
//! [`Selection::Overall`], or only those sent by one user. [`select`] is that
//! step, shared by all views.
//!
//! # Examples
//!
//! ```
//! use chatstats::core::filter::{Selection, select};
//! use chatstats::parser::parse;
//!
//! let records = parse("1/1/23, 09:00 - Alice: hi\n1/1/23, 09:01 - Bob: hey\n");
//!
//! assert_eq!(select(&records, &Selection::Overall).len(), 2);
//! assert_eq!(select(&records, &"Bob".parse().unwrap()).len(), 1);
//! ```
//!
//! # Behavior Notes
//!
//! - Sender matching is exact (case-sensitive)
//! - The literal name `"Overall"` always means "no filtering"

use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::record::ChatRecord;

/// Selector value meaning "all senders".
pub const OVERALL: &str = "Overall";

/// Which records a view should look at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    /// All records, including group notifications.
    #[default]
    Overall,
    /// Only records whose sender equals this name.
    User(String),
}

impl Selection {
    /// Selection for a single sender.
    pub fn user(name: impl Into<String>) -> Self {
        Selection::User(name.into())
    }

    /// Maps a picker value to a selection; `"Overall"` selects everything.
    pub fn from_name(name: &str) -> Self {
        if name == OVERALL {
            Selection::Overall
        } else {
            Selection::User(name.to_string())
        }
    }

    pub fn is_overall(&self) -> bool {
        matches!(self, Selection::Overall)
    }

    /// Name as shown in a user picker.
    pub fn label(&self) -> &str {
        match self {
            Selection::Overall => OVERALL,
            Selection::User(name) => name,
        }
    }

    /// Returns `true` if `record` belongs to this selection.
    pub fn matches(&self, record: &ChatRecord) -> bool {
        match self {
            Selection::Overall => true,
            Selection::User(name) => record.sender() == name,
        }
    }
}

impl FromStr for Selection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Selection::from_name(s))
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Borrows the records matching `selection`, in original order.
pub fn select<'a>(records: &'a [ChatRecord], selection: &Selection) -> Vec<&'a ChatRecord> {
    records.iter().filter(|r| selection.matches(r)).collect()
}

/// Values for a user picker: `"Overall"` followed by every human sender,
/// sorted and de-duplicated. Group notifications are never listed.
pub fn selectable_users(records: &[ChatRecord]) -> Vec<String> {
    let senders: BTreeSet<&str> = records
        .iter()
        .filter(|r| !r.is_notification())
        .map(ChatRecord::sender)
        .collect();

    std::iter::once(OVERALL)
        .chain(senders)
        .map(str::to_string)
        .collect()
}
