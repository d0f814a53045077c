//! Executive analytics dashboard.

use ecorp_core::AnalyticsData;

/// `$12.5M` style amount.
pub fn format_millions(amount: f64) -> String {
    format!("${:.1}M", amount / 1_000_000.0)
}

/// Growth from year-to-date to projected, e.g. `+44%`. `None` when there is
/// no year-to-date base to compare against.
pub fn projection_percentage(ytd: f64, projected: f64) -> Option<String> {
    if ytd <= 0.0 {
        return None;
    }
    Some(format!("+{:.0}%", (projected - ytd) / ytd * 100.0))
}

/// `(sales - cost) / sales` as a percentage.
pub fn margin_percent(sales: f64, cost: f64) -> Option<f64> {
    (sales > 0.0).then(|| (sales - cost) / sales * 100.0)
}

/// One bar of the monthly sales chart.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthBar {
    pub month: String,
    pub amount: f64,
    /// Height relative to the best month, `0.0..=100.0`.
    pub percent_of_peak: f64,
    /// The last point is the month in progress.
    pub is_current: bool,
}

pub fn monthly_bars(data: &AnalyticsData) -> Vec<MonthBar> {
    let peak = data.peak_month_amount();
    let last = data.monthly_sales.len().saturating_sub(1);

    data.monthly_sales
        .iter()
        .enumerate()
        .map(|(i, m)| MonthBar {
            month: m.month.clone(),
            amount: m.amount,
            percent_of_peak: if peak > 0.0 { m.amount / peak * 100.0 } else { 0.0 },
            is_current: i == last,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExecutiveSummary {
    pub sales_ytd: String,
    pub sales_growth: Option<String>,
    pub parts_cost_ytd: String,
    pub parts_cost_growth: Option<String>,
    pub company_margin: Option<f64>,
    pub dealership_count: usize,
    /// Average year-to-date sales per dealership, formatted.
    pub average_per_dealership: Option<String>,
    pub bars: Vec<MonthBar>,
}

impl ExecutiveSummary {
    pub fn build(data: &AnalyticsData) -> Self {
        let dealership_count = data.dealerships.len();
        Self {
            sales_ytd: format_millions(data.total_sales_ytd),
            sales_growth: projection_percentage(data.total_sales_ytd, data.total_sales_projected),
            parts_cost_ytd: format_millions(data.total_parts_cost_ytd),
            parts_cost_growth: projection_percentage(
                data.total_parts_cost_ytd,
                data.total_parts_cost_projected,
            ),
            company_margin: margin_percent(data.total_sales_ytd, data.total_parts_cost_ytd),
            dealership_count,
            average_per_dealership: (dealership_count > 0)
                .then(|| format_millions(data.total_sales_ytd / dealership_count as f64)),
            bars: monthly_bars(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecorp_core::{MonthlySales, fixtures};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn bars_stay_within_chart(amounts in prop::collection::vec(0.0f64..5_000_000.0, 0..12)) {
            let mut data = fixtures::analytics();
            data.monthly_sales = amounts
                .iter()
                .map(|&amount| MonthlySales { month: "M".into(), amount })
                .collect();

            let bars = monthly_bars(&data);
            prop_assert_eq!(bars.len(), amounts.len());
            prop_assert!(bars.iter().all(|b| (0.0..=100.0).contains(&b.percent_of_peak)));
            prop_assert!(bars.iter().filter(|b| b.is_current).count() <= 1);
        }
    }

    #[test]
    fn formats_match_dashboard_cards() {
        assert_eq!(format_millions(12_500_000.0), "$12.5M");
        assert_eq!(format_millions(0.0), "$0.0M");
        assert_eq!(projection_percentage(12_500_000.0, 18_000_000.0).as_deref(), Some("+44%"));
        assert_eq!(projection_percentage(0.0, 1.0), None);
    }

    #[test]
    fn bars_are_relative_to_peak_month() {
        let data = fixtures::analytics();
        let bars = monthly_bars(&data);

        assert_eq!(bars.len(), 10);
        let sep = bars.iter().find(|b| b.month == "Sep").unwrap();
        assert_eq!(sep.percent_of_peak, 100.0);
        assert!(bars.last().unwrap().is_current);
        assert!(bars.iter().all(|b| (0.0..=100.0).contains(&b.percent_of_peak)));
    }

    #[test]
    fn empty_analytics_do_not_divide_by_zero() {
        let mut data = fixtures::analytics();
        data.monthly_sales.clear();
        data.dealerships.clear();
        data.total_sales_ytd = 0.0;

        let summary = ExecutiveSummary::build(&data);
        assert!(summary.bars.is_empty());
        assert_eq!(summary.company_margin, None);
        assert_eq!(summary.average_per_dealership, None);
    }

    #[test]
    fn summary_over_fallback_data() {
        let summary = ExecutiveSummary::build(&fixtures::analytics());
        assert_eq!(summary.sales_ytd, "$12.5M");
        assert_eq!(summary.sales_growth.as_deref(), Some("+44%"));
        assert_eq!(summary.parts_cost_ytd, "$2.8M");
        assert_eq!(summary.parts_cost_growth.as_deref(), Some("+50%"));
        assert_eq!(summary.dealership_count, 3);
        assert_eq!(summary.average_per_dealership.as_deref(), Some("$4.2M"));
    }
}
