//! Salesperson dashboard.

use ecorp_core::Sale;
use ecorp_core::sale::total_price;

#[derive(Debug, Clone, PartialEq)]
pub struct SalesSummary {
    /// Sales credited to the logged-in salesperson.
    pub my_sales: Vec<Sale>,
    pub my_total: f64,
    /// Every sale the hook returned.
    pub all_count: usize,
}

impl SalesSummary {
    /// Attribution is by exact display-name match.
    pub fn for_user(sales: &[Sale], user_name: &str) -> Self {
        let my_sales: Vec<Sale> = sales
            .iter()
            .filter(|s| s.sales_person == user_name)
            .cloned()
            .collect();
        Self {
            my_total: total_price(&my_sales),
            my_sales,
            all_count: sales.len(),
        }
    }
}

/// `$107K` style amount.
pub fn format_thousands(amount: f64) -> String {
    format!("${:.0}K", amount / 1_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecorp_core::fixtures;

    #[test]
    fn attributes_by_display_name() {
        let sales = fixtures::sales();

        let sarah = SalesSummary::for_user(&sales, "Sarah Sales");
        assert_eq!(sarah.my_sales.len(), 2);
        assert_eq!(sarah.my_total, 107_000.0);
        assert_eq!(format_thousands(sarah.my_total), "$107K");

        // The login picker's default name matches nobody in the fallback data.
        let picker = SalesSummary::for_user(&sales, "Sales Person");
        assert!(picker.my_sales.is_empty());
        assert_eq!(picker.my_total, 0.0);
        assert_eq!(picker.all_count, 2);
    }
}
