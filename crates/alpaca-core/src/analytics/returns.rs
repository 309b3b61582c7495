use std::cmp::Ordering;

use time::Date;

use crate::PriceSeries;

/// Fractional close-to-close change attributed to the later date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyReturn {
    pub date: Date,
    pub value: f64,
}

/// Day-over-day returns of one price series, ascending by date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReturnSeries {
    returns: Vec<DailyReturn>,
}

impl ReturnSeries {
    /// One return per consecutive bar pair; empty with fewer than two bars.
    ///
    /// A pair whose previous close is zero has no finite return and is skipped.
    pub fn from_prices(series: &PriceSeries) -> Self {
        let returns = series
            .bars()
            .windows(2)
            .filter_map(|pair| {
                let (previous, current) = (pair[0], pair[1]);
                if previous.close == 0.0 {
                    return None;
                }
                Some(DailyReturn {
                    date: current.date,
                    value: current.close / previous.close - 1.0,
                })
            })
            .collect();

        Self { returns }
    }

    pub fn returns(&self) -> &[DailyReturn] {
        &self.returns
    }

    pub fn len(&self) -> usize {
        self.returns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }
}

/// One date on which both the security and the market have a return.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignedReturn {
    pub date: Date,
    pub security: f64,
    pub market: f64,
}

/// Security and market returns restricted to their common dates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignedReturns {
    rows: Vec<AlignedReturn>,
}

impl AlignedReturns {
    /// Inner join on date. Both inputs are ascending, so a single merge pass suffices.
    pub fn inner_join(security: &ReturnSeries, market: &ReturnSeries) -> Self {
        let (left, right) = (security.returns(), market.returns());
        let mut rows = Vec::with_capacity(left.len().min(right.len()));
        let (mut i, mut j) = (0, 0);

        while i < left.len() && j < right.len() {
            match left[i].date.cmp(&right[j].date) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    rows.push(AlignedReturn {
                        date: left[i].date,
                        security: left[i].value,
                        market: right[j].value,
                    });
                    i += 1;
                    j += 1;
                }
            }
        }

        Self { rows }
    }

    pub fn rows(&self) -> &[AlignedReturn] {
        &self.rows
    }

    pub fn security(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.security).collect()
    }

    pub fn market(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.market).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
