//! Dividend board core: the feed data model, response normalization,
//! filter/sort pipeline, full-feed aggregates and the fetch lifecycle.

use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::*, utils::text::contains_ignore_case};

/// The one user-facing message every fetch failure collapses to.
pub static FETCH_ERROR_MESSAGE: &str = "Failed to fetch dividend data. Please try again later.";

/// One dividend declaration from the PSE disclosure feed. Immutable once
/// fetched; the whole set is replaced on refetch.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DividendRecord {
    pub company_name: String,
    pub stock_symbol: String,
    pub dividend_type: String,
    #[serde(deserialize_with = "deserialize_dps")]
    pub dividend_per_share: f64,
    pub ex_dividend_date: String,
    pub record_date: String,
    pub payment_date: String,
    pub circular_number: String,
}

/// The feed envelope. `count` is advisory and not required to equal
/// `data.len()`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct DividendFeed {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub count: u64,

    #[serde(default)]
    pub last_updated: String,

    pub data: Vec<DividendRecord>,
}

impl DividendFeed {
    /// The webhook responds with either a single-element array wrapping the
    /// feed object or the bare object. Both normalize to one feed; any
    /// other shape is rejected.
    pub fn from_json(json: &serde_json::Value) -> FolioResult<Self> {
        let object = match json {
            serde_json::Value::Array(items) => items.first().ok_or(FolioError::Invalid {
                code: "EMPTY_RESPONSE",
                message: "Response array has no feed object".to_string(),
            })?,
            serde_json::Value::Object(_) => json,
            _ => {
                return Err(FolioError::Invalid {
                    code: "UNEXPECTED_RESPONSE",
                    message: "Expected a feed object or an array wrapping one".to_string(),
                });
            }
        };

        serde_json::from_value(object.clone()).map_err(Into::into)
    }
}

fn deserialize_dps<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;

    match &value {
        serde_json::Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom("dividend_per_share out of range")),
        serde_json::Value::String(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
        _ => Err(serde::de::Error::custom(
            "dividend_per_share must be a number or a numeric string",
        )),
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, strum::Display, strum::EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "snake_case")]
pub enum SortField {
    CompanyName,
    StockSymbol,
    DividendPerShare,
    #[default]
    ExDividendDate,
    PaymentDate,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, strum::Display, strum::EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn flip(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

pub fn sort_field_from_str(s: &str) -> FolioResult<SortField> {
    SortField::from_str(s).map_err(Into::into)
}

/// Search and sort state of the dividends table. Defaults mirror the page:
/// empty query, ex-dividend date descending.
#[derive(Clone, Debug, Default)]
pub struct BoardState {
    pub query: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl BoardState {
    /// Header-click semantics: the active field flips direction, a new
    /// field becomes active descending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.flip();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Descending;
        }
    }

    /// Filtered and sorted view over `records`. The underlying feed is
    /// never mutated.
    pub fn select<'a>(&self, records: &'a [DividendRecord]) -> Vec<&'a DividendRecord> {
        let mut view = filter_records(records, &self.query);
        sort_records(&mut view, self.sort_field, self.sort_direction);

        view
    }
}

/// Retain records whose company name OR stock symbol contains `query`
/// case-insensitively. An empty query retains everything.
pub fn filter_records<'a>(records: &'a [DividendRecord], query: &str) -> Vec<&'a DividendRecord> {
    records
        .iter()
        .filter(|record| {
            contains_ignore_case(&record.company_name, query)
                || contains_ignore_case(&record.stock_symbol, query)
        })
        .collect()
}

/// Order a view by `field`. DPS compares numerically, everything else by
/// the ISO string representation.
pub fn sort_records(view: &mut [&DividendRecord], field: SortField, direction: SortDirection) {
    view.sort_by(|a, b| {
        let ordering = match field {
            SortField::CompanyName => a.company_name.cmp(&b.company_name),
            SortField::StockSymbol => a.stock_symbol.cmp(&b.stock_symbol),
            SortField::DividendPerShare => a
                .dividend_per_share
                .partial_cmp(&b.dividend_per_share)
                .unwrap_or(Ordering::Equal),
            SortField::ExDividendDate => a.ex_dividend_date.cmp(&b.ex_dividend_date),
            SortField::PaymentDate => a.payment_date.cmp(&b.payment_date),
        };

        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Sum of dividend-per-share across the whole feed, independent of any
/// active filter.
pub fn dps_sum(records: &[DividendRecord]) -> f64 {
    records.iter().map(|record| record.dividend_per_share).sum()
}

/// The record with the highest dividend-per-share over the whole feed.
/// Ties keep the first record encountered.
pub fn top_dividend(records: &[DividendRecord]) -> Option<&DividendRecord> {
    records.iter().reduce(|max, record| {
        if record.dividend_per_share > max.dividend_per_share {
            record
        } else {
            max
        }
    })
}

pub fn format_peso(value: f64) -> String {
    format!("₱{value:.2}")
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum FeedPhase {
    #[default]
    Idle,
    Loading,
    Failed(String),
    Ready,
}

/// Fetch lifecycle of the board. The render states loading / error / data
/// are mutually exclusive; a refetch failure keeps the previous feed
/// visible and surfaces the message as a warning instead.
#[derive(Debug, Default)]
pub struct FeedState {
    phase: FeedPhase,
    feed: Option<DividendFeed>,
    warning: Option<String>,
}

impl FeedState {
    pub fn phase(&self) -> &FeedPhase {
        &self.phase
    }

    pub fn feed(&self) -> Option<&DividendFeed> {
        self.feed.as_ref()
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == FeedPhase::Loading
    }

    /// Move to the loading phase. Returns false while a fetch is already
    /// outstanding so overlapping requests never start.
    pub fn begin_fetch(&mut self) -> bool {
        if self.phase == FeedPhase::Loading {
            return false;
        }

        self.phase = FeedPhase::Loading;
        self.warning = None;

        true
    }

    pub fn resolve(&mut self, outcome: Result<DividendFeed, String>) {
        match outcome {
            Ok(feed) => {
                self.feed = Some(feed);
                self.warning = None;
                self.phase = FeedPhase::Ready;
            }
            Err(message) => {
                if self.feed.is_some() {
                    self.warning = Some(message);
                    self.phase = FeedPhase::Ready;
                } else {
                    self.phase = FeedPhase::Failed(message);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(
        company_name: &str,
        stock_symbol: &str,
        dividend_per_share: f64,
        ex_dividend_date: &str,
        payment_date: &str,
    ) -> DividendRecord {
        DividendRecord {
            company_name: company_name.to_string(),
            stock_symbol: stock_symbol.to_string(),
            dividend_type: "Cash".to_string(),
            dividend_per_share,
            ex_dividend_date: ex_dividend_date.to_string(),
            record_date: ex_dividend_date.to_string(),
            payment_date: payment_date.to_string(),
            circular_number: format!("C{stock_symbol}-{ex_dividend_date}"),
        }
    }

    fn sample_records() -> Vec<DividendRecord> {
        vec![
            record("Ayala Corporation", "AC", 1.50, "2025-03-05", "2025-03-20"),
            record("BDO Unibank, Inc.", "BDO", 3.25, "2025-02-14", "2025-03-01"),
            record("Jollibee Foods", "JFC", 0.75, "2025-04-01", "2025-04-15"),
        ]
    }

    #[test]
    fn test_filter_records() {
        let records = sample_records();

        let view = filter_records(&records, "ayala");
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].stock_symbol, "AC");

        // matches the symbol too
        let view = filter_records(&records, "bdo");
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].company_name, "BDO Unibank, Inc.");

        let view = filter_records(&records, "JOLLIBEE");
        assert_eq!(view.len(), 1);

        assert!(filter_records(&records, "pldt").is_empty());

        // empty query keeps the whole feed, in order
        let view = filter_records(&records, "");
        assert_eq!(view.len(), records.len());
        assert!(view.iter().zip(records.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_sort_records_is_permutation() {
        let records = sample_records();

        let mut view = filter_records(&records, "");
        sort_records(&mut view, SortField::CompanyName, SortDirection::Ascending);

        assert_eq!(view.len(), records.len());
        for record in &records {
            assert!(view.iter().any(|r| *r == record));
        }
    }

    #[test]
    fn test_sort_records_reversal() {
        let records = sample_records();

        let mut ascending = filter_records(&records, "");
        sort_records(
            &mut ascending,
            SortField::ExDividendDate,
            SortDirection::Ascending,
        );
        let mut descending = filter_records(&records, "");
        sort_records(
            &mut descending,
            SortField::ExDividendDate,
            SortDirection::Descending,
        );

        let reversed: Vec<_> = descending.into_iter().rev().collect();
        assert_eq!(
            ascending
                .iter()
                .map(|r| r.stock_symbol.as_str())
                .collect::<Vec<_>>(),
            reversed
                .iter()
                .map(|r| r.stock_symbol.as_str())
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_sort_records_numeric_dps() {
        let records = vec![
            record("A", "AAA", 0.5, "2025-01-01", "2025-01-10"),
            record("B", "BBB", 10.0, "2025-01-02", "2025-01-11"),
            record("C", "CCC", 2.0, "2025-01-03", "2025-01-12"),
        ];

        let mut view = filter_records(&records, "");
        sort_records(
            &mut view,
            SortField::DividendPerShare,
            SortDirection::Ascending,
        );

        // numeric order, not the lexicographic "0.5" < "10.0" < "2.0"
        assert_eq!(
            view.iter()
                .map(|r| r.stock_symbol.as_str())
                .collect::<Vec<_>>(),
            ["AAA", "CCC", "BBB"]
        );
    }

    #[test]
    fn test_toggle_sort() {
        let mut state = BoardState::default();
        assert_eq!(state.sort_field, SortField::ExDividendDate);
        assert_eq!(state.sort_direction, SortDirection::Descending);

        // same field flips the direction
        state.toggle_sort(SortField::ExDividendDate);
        assert_eq!(state.sort_field, SortField::ExDividendDate);
        assert_eq!(state.sort_direction, SortDirection::Ascending);

        // a new field resets to descending
        state.toggle_sort(SortField::StockSymbol);
        assert_eq!(state.sort_field, SortField::StockSymbol);
        assert_eq!(state.sort_direction, SortDirection::Descending);

        state.toggle_sort(SortField::StockSymbol);
        assert_eq!(state.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn test_aggregates_over_full_feed() {
        let records = sample_records();

        assert_eq!(dps_sum(&records), 5.50);
        assert_eq!(top_dividend(&records).unwrap().stock_symbol, "BDO");

        // aggregates ignore the active filter
        let state = BoardState {
            query: "ayala".to_string(),
            ..Default::default()
        };
        assert_eq!(state.select(&records).len(), 1);
        assert_eq!(dps_sum(&records), 5.50);
    }

    #[test]
    fn test_top_dividend_first_wins_on_ties() {
        let records = vec![
            record("First", "FST", 2.0, "2025-01-01", "2025-01-10"),
            record("Second", "SND", 2.0, "2025-01-02", "2025-01-11"),
        ];

        assert_eq!(top_dividend(&records).unwrap().stock_symbol, "FST");
        assert!(top_dividend(&[]).is_none());
    }

    #[test]
    fn test_feed_from_json_both_shapes() {
        let feed_json = json!({
            "success": true,
            "count": 2,
            "last_updated": "2025-03-05T09:00:00Z",
            "data": [
                {
                    "company_name": "Ayala Corporation",
                    "stock_symbol": "AC",
                    "dividend_type": "Cash",
                    "dividend_per_share": 1.5,
                    "ex_dividend_date": "2025-03-05",
                    "record_date": "2025-03-06",
                    "payment_date": "2025-03-20",
                    "circular_number": "C01234-2025"
                }
            ]
        });

        let from_object = DividendFeed::from_json(&feed_json).unwrap();
        let from_array = DividendFeed::from_json(&json!([feed_json])).unwrap();
        assert_eq!(from_object, from_array);
        assert!(from_object.success);
        assert_eq!(from_object.data.len(), 1);
        assert_eq!(from_object.data[0].dividend_per_share, 1.5);

        // the advisory count does not have to match the data length
        assert_eq!(from_object.count, 2);
    }

    #[test]
    fn test_feed_from_json_rejects_other_shapes() {
        assert!(DividendFeed::from_json(&json!([])).is_err());
        assert!(DividendFeed::from_json(&json!(42)).is_err());
        assert!(DividendFeed::from_json(&json!("feed")).is_err());
        assert!(DividendFeed::from_json(&json!([1, 2])).is_err());
        assert!(DividendFeed::from_json(&json!({"success": true})).is_err());
    }

    #[test]
    fn test_deserialize_dps_lenient() {
        let record_json = json!({
            "company_name": "San Miguel",
            "stock_symbol": "SMC",
            "dividend_type": "Cash",
            "dividend_per_share": "0.3500",
            "ex_dividend_date": "2025-05-02",
            "record_date": "2025-05-05",
            "payment_date": "2025-05-20",
            "circular_number": "C04567-2025"
        });

        let record: DividendRecord = serde_json::from_value(record_json).unwrap();
        assert_eq!(record.dividend_per_share, 0.35);

        let bad = json!({
            "company_name": "San Miguel",
            "stock_symbol": "SMC",
            "dividend_type": "Cash",
            "dividend_per_share": [1.0],
            "ex_dividend_date": "2025-05-02",
            "record_date": "2025-05-05",
            "payment_date": "2025-05-20",
            "circular_number": "C04567-2025"
        });
        assert!(serde_json::from_value::<DividendRecord>(bad).is_err());
    }

    #[test]
    fn test_feed_state_lifecycle() {
        let mut state = FeedState::default();
        assert_eq!(*state.phase(), FeedPhase::Idle);
        assert!(state.feed().is_none());

        // first fetch fails: full error state
        assert!(state.begin_fetch());
        assert!(state.is_loading());
        state.resolve(Err(FETCH_ERROR_MESSAGE.to_string()));
        assert_eq!(
            *state.phase(),
            FeedPhase::Failed(FETCH_ERROR_MESSAGE.to_string())
        );
        assert!(state.feed().is_none());

        // retry succeeds: data replaces the error
        assert!(state.begin_fetch());
        state.resolve(Ok(DividendFeed {
            count: 1,
            ..Default::default()
        }));
        assert_eq!(*state.phase(), FeedPhase::Ready);
        assert!(state.feed().is_some());
        assert!(state.warning().is_none());

        // refetch failure keeps the previous feed visible with a warning
        assert!(state.begin_fetch());
        assert!(state.feed().is_some());
        state.resolve(Err(FETCH_ERROR_MESSAGE.to_string()));
        assert_eq!(*state.phase(), FeedPhase::Ready);
        assert!(state.feed().is_some());
        assert_eq!(state.warning(), Some(FETCH_ERROR_MESSAGE));

        // a successful refetch clears the warning
        assert!(state.begin_fetch());
        assert!(state.warning().is_none());
        state.resolve(Ok(DividendFeed::default()));
        assert!(state.warning().is_none());
    }

    #[test]
    fn test_feed_state_guards_overlapping_fetches() {
        let mut state = FeedState::default();

        assert!(state.begin_fetch());
        assert!(!state.begin_fetch());
        assert!(state.is_loading());

        state.resolve(Ok(DividendFeed::default()));
        assert!(state.begin_fetch());
    }

    #[test]
    fn test_sort_field_from_str() {
        assert_eq!(
            sort_field_from_str("ex_dividend_date").unwrap(),
            SortField::ExDividendDate
        );
        assert_eq!(
            sort_field_from_str("Company_Name").unwrap(),
            SortField::CompanyName
        );
        assert!(sort_field_from_str("record_date").is_err());

        assert_eq!(SortField::DividendPerShare.to_string(), "dividend_per_share");
        assert_eq!(SortDirection::Descending.to_string(), "descending");
    }

    #[test]
    fn test_format_peso() {
        assert_eq!(format_peso(5.5), "₱5.50");
        assert_eq!(format_peso(0.0), "₱0.00");
        assert_eq!(format_peso(10.0), "₱10.00");
    }
}
