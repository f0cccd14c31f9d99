use chrono::NaiveDate;
use contracts::domain::common::Farm;

/// Farm and date-range filter for one resource screen.
///
/// Dates are kept as the raw `<input type="date">` strings. A range only
/// takes effect when both ends parse and start <= end; anything else is
/// treated as "no date filter", never as an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFilter {
    pub farm: Option<Farm>,
    pub start_date: String,
    pub end_date: String,
}

impl ListFilter {
    pub fn effective_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let start = NaiveDate::parse_from_str(self.start_date.trim(), "%Y-%m-%d").ok()?;
        let end = NaiveDate::parse_from_str(self.end_date.trim(), "%Y-%m-%d").ok()?;
        (start <= end).then_some((start, end))
    }

    /// Number of active criteria, for the filter badge.
    pub fn active_count(&self) -> usize {
        usize::from(self.farm.is_some()) + usize::from(self.effective_range().is_some())
    }

    /// Query string for the list endpoint: `page`/`limit` always, dates only
    /// as a valid pair, `farm` only when selected.
    pub fn list_query(&self, page: u32, limit: u32) -> String {
        let mut query = format!("page={page}&limit={limit}");
        if let Some(params) = self.filter_params() {
            query.push('&');
            query.push_str(&params);
        }
        query
    }

    /// Query string for the summary endpoint, without pagination. Empty when
    /// no criterion is active, otherwise starts with `?`.
    pub fn summary_query(&self) -> String {
        match self.filter_params() {
            Some(params) => format!("?{params}"),
            None => String::new(),
        }
    }

    fn filter_params(&self) -> Option<String> {
        let mut parts: Vec<String> = Vec::new();
        if let Some((start, end)) = self.effective_range() {
            parts.push(format!("startDate={start}&endDate={end}"));
        }
        if let Some(farm) = self.farm {
            parts.push(format!("farm={}", urlencoding::encode(farm.as_str())));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_sends_only_pagination() {
        let f = ListFilter::default();
        assert_eq!(f.list_query(1, 10), "page=1&limit=10");
        assert_eq!(f.summary_query(), "");
        assert_eq!(f.active_count(), 0);
    }

    #[test]
    fn valid_range_and_farm_are_included() {
        let f = ListFilter {
            farm: Some(Farm::Matital),
            start_date: "2024-05-01".into(),
            end_date: "2024-05-10".into(),
        };
        assert_eq!(
            f.list_query(2, 10),
            "page=2&limit=10&startDate=2024-05-01&endDate=2024-05-10&farm=MATITAL"
        );
        assert_eq!(
            f.summary_query(),
            "?startDate=2024-05-01&endDate=2024-05-10&farm=MATITAL"
        );
        assert_eq!(f.active_count(), 2);
    }

    #[test]
    fn inverted_range_is_dropped_but_farm_kept() {
        // start after end: the date pair silently does not apply
        let f = ListFilter {
            farm: Some(Farm::Matital),
            start_date: "2024-05-10".into(),
            end_date: "2024-05-01".into(),
        };
        assert_eq!(f.effective_range(), None);
        assert_eq!(f.list_query(1, 10), "page=1&limit=10&farm=MATITAL");
        assert_eq!(f.summary_query(), "?farm=MATITAL");
    }

    #[test]
    fn half_open_range_is_dropped() {
        let f = ListFilter {
            farm: None,
            start_date: "2024-05-01".into(),
            end_date: String::new(),
        };
        assert_eq!(f.effective_range(), None);
        assert_eq!(f.list_query(1, 10), "page=1&limit=10");
    }

    #[test]
    fn single_day_range_is_valid() {
        let f = ListFilter {
            farm: None,
            start_date: "2024-05-01".into(),
            end_date: "2024-05-01".into(),
        };
        assert!(f.effective_range().is_some());
    }
}
