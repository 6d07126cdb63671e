//! Committed date range applied to the chart's date axis.

use chrono::NaiveDate;

/// Start/end bounds of the chart's date axis. Either bound may be absent,
/// in which case that end of the axis auto-scales from the data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRangeFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DateRangeFilter {
    pub fn new(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// True when neither bound is set.
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }
}

/// Holds the committed [`DateRangeFilter`].
///
/// Every `commit` or `clear` replaces the filter wholesale and bumps the
/// revision, even when the new bounds equal the old ones. Each revision is
/// one chart rebuild.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRangeState {
    filter: DateRangeFilter,
    revision: u64,
}

impl DateRangeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> DateRangeFilter {
        self.filter
    }

    /// Number of commits/clears so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the filter with the given bounds.
    pub fn commit(&mut self, start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) {
        self.replace(DateRangeFilter::new(start_date, end_date));
    }

    /// Reset both bounds to absent.
    pub fn clear(&mut self) {
        self.replace(DateRangeFilter::default());
    }

    fn replace(&mut self, filter: DateRangeFilter) {
        self.filter = filter;
        self.revision += 1;
        log::debug!(
            "date range revision {}: {:?} .. {:?}",
            self.revision,
            filter.start_date,
            filter.end_date
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_starts_empty() {
        let state = DateRangeState::new();
        assert!(state.filter().is_empty());
        assert_eq!(state.revision(), 0);
    }

    #[test]
    fn test_commit_replaces_both_bounds() {
        let mut state = DateRangeState::new();
        state.commit(Some(ymd(2021, 3, 1)), Some(ymd(2021, 6, 30)));
        assert_eq!(state.filter().start_date, Some(ymd(2021, 3, 1)));
        assert_eq!(state.filter().end_date, Some(ymd(2021, 6, 30)));

        state.commit(None, Some(ymd(2022, 1, 31)));
        assert_eq!(state.filter().start_date, None);
        assert_eq!(state.filter().end_date, Some(ymd(2022, 1, 31)));
    }

    #[test]
    fn test_clear_empties_filter() {
        let mut state = DateRangeState::new();
        state.commit(Some(ymd(2021, 3, 1)), Some(ymd(2021, 6, 30)));
        state.clear();
        assert!(state.filter().is_empty());
    }

    #[test]
    fn test_each_call_is_a_new_revision() {
        let mut state = DateRangeState::new();
        state.clear();
        state.clear();
        assert_eq!(state.revision(), 2);

        state.commit(Some(ymd(2021, 3, 1)), None);
        state.commit(Some(ymd(2021, 3, 1)), None);
        assert_eq!(state.revision(), 4);
    }
}
