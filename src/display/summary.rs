//! Summary and configuration display formatting

use crate::models::PriceConfig;
use crate::reports::Summary;

/// Headline totals panel
pub fn format_summary(summary: &Summary, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Total Meals:    {} ({} morning, {} evening)\n",
        summary.meal_count, summary.morning_count, summary.evening_count
    ));
    output.push_str(&format!(
        "Total Cost:     {}\n",
        summary.total_cost.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Advance Given:  {}\n",
        summary.advance.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Balance:        {}",
        summary.balance.format_with_symbol(currency_symbol)
    ));
    if summary.is_overdrawn() {
        output.push_str("  (advance used up)");
    }
    output.push('\n');

    output
}

/// Current meal prices, or a setup hint if none are saved
pub fn format_prices(prices: Option<PriceConfig>, currency_symbol: &str) -> String {
    match prices {
        Some(prices) => format!(
            "Morning: {}\nEvening: {}\n",
            prices.morning.format_with_symbol(currency_symbol),
            prices.evening.format_with_symbol(currency_symbol)
        ),
        None => "Meal prices are not set. Run 'tiffin prices set <morning> <evening>'.\n"
            .to_string(),
    }
}
