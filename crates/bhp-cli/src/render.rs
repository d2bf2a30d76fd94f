//! Plain-text rendering of command output

use bhp_estimator::market::{
    self, group_thousands, LocationComparison, Pair, PropertyTypeComparison, Timeframe,
};
use bhp_estimator::{EstimateBreakdown, MetricKind, ModelMetric, PricePoint};
use std::fmt::Display;

/// Format a price as rupees with thousands separators, e.g. `₹11,466,000`
#[must_use]
pub fn rupees(price: f64) -> String {
    // prices are non-negative and far below u64::MAX
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = price.max(0.0).round() as u64;
    format!("₹{}", group_thousands(whole))
}

/// Price, optional breakdown, optional history
#[must_use]
pub fn prediction(
    source: &str,
    price: f64,
    breakdown: Option<&EstimateBreakdown>,
    history: &[PricePoint],
) -> String {
    let mut out = String::new();
    out.push_str(&format!("Estimated price ({source}): {}\n", rupees(price)));

    if let Some(b) = breakdown {
        out.push_str("\nFactors:\n");
        out.push_str(&format!("  location       {:>8.2}\n", b.location_factor));
        out.push_str(&format!("  bedrooms       {:>8.2}\n", b.bedroom_factor));
        out.push_str(&format!("  bathrooms      {:>8.2}\n", b.bathroom_factor));
        out.push_str(&format!("  property type  {:>8.2}\n", b.property_type_factor));
        out.push_str("Components:\n");
        out.push_str(&format!("  area           {:>12.2}\n", b.area_component));
        out.push_str(&format!("  location       {:>12.2}\n", b.location_component));
        out.push_str(&format!("  bedrooms       {:>12.2}\n", b.bedroom_component));
        out.push_str(&format!("  bathrooms      {:>12.2}\n", b.bathroom_component));
        out.push_str(&format!("Raw price: {:.2}\n", b.raw_price));
    }

    if !history.is_empty() {
        out.push_str("\nPrice history:\n");
        for point in history {
            out.push_str(&format!("  {}  {}\n", point.month, rupees(point.price)));
        }
    }

    out
}

/// Model metrics table, marking the best row for `highlight`
#[must_use]
pub fn metrics(rows: &[&ModelMetric], highlight: MetricKind) -> String {
    let best = bhp_estimator::best_by(highlight).name;
    let mut out = String::new();
    out.push_str(&format!(
        "  {:<18} {:>10} {:>10} {:>8} {:>10} {:>10}\n",
        "Model", "MAE", "RMSE", "R2", "CV R2", "CV std"
    ));
    for m in rows {
        let marker = if m.name == best { '*' } else { ' ' };
        out.push_str(&format!(
            "{marker} {:<18} {:>10.4} {:>10.4} {:>8.4} {:>10.4} {:>10.4}\n",
            m.name, m.mae, m.rmse, m.r2, m.cv_r2_mean, m.cv_r2_std
        ));
    }
    out.push_str(&format!("(* best by {highlight})\n"));
    out
}

/// Market overview for a trend window
#[must_use]
pub fn market_overview(timeframe: Timeframe) -> String {
    let mut out = String::new();

    out.push_str("Price per sq.ft by area:\n");
    for row in &market::AREA_PRICES {
        out.push_str(&format!("  {:<18} {}\n", row.area, rupees(f64::from(row.price))));
    }

    out.push_str(&format!("\nPrice trend ({timeframe}):\n"));
    for row in market::price_trend(timeframe) {
        out.push_str(&format!("  {:<4} {}\n", row.month, rupees(f64::from(row.price))));
    }

    out.push_str("\nLocation popularity:\n");
    for row in &market::LOCATION_TRENDS {
        out.push_str(&format!(
            "  {:<18} {:>3}  growth {:>5.1}%\n",
            row.location, row.popularity, row.growth
        ));
    }

    out.push_str("\nListings by property type:\n");
    for row in &market::PROPERTY_TYPE_COUNTS {
        out.push_str(&format!(
            "  {:<18} {:>6}\n",
            row.property_type.as_str(),
            group_thousands(u64::from(row.count))
        ));
    }

    out.push_str("\nBHK distribution:\n");
    for row in &market::BHK_DISTRIBUTION {
        out.push_str(&format!("  {:<18} {:>3}%\n", row.name, row.value));
    }

    out.push_str("\nDemand vs supply:\n");
    for row in &market::DEMAND_SUPPLY {
        out.push_str(&format!(
            "  {:<18} demand {:>3}  supply {:>3}\n",
            row.name, row.demand, row.supply
        ));
    }

    out
}

fn pair_line<T: Display>(out: &mut String, label: &str, pair: &Pair<T>) {
    out.push_str(&format!(
        "  {:<14} {:>12} {:>12}\n",
        label, pair.first.value, pair.second.value
    ));
}

/// Two-locality comparison
#[must_use]
pub fn location_comparison(cmp: &LocationComparison) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "  {:<14} {:>12} {:>12}\n",
        "", cmp.price.first.name, cmp.price.second.name
    ));
    pair_line(&mut out, "Price/sq.ft", &cmp.price);
    pair_line(&mut out, "Growth %", &cmp.growth);
    for row in &cmp.radar {
        out.push_str(&format!(
            "  {:<14} {:>12} {:>12}\n",
            row.subject, row.first, row.second
        ));
    }
    out
}

/// Two-property-type comparison
#[must_use]
pub fn property_type_comparison(cmp: &PropertyTypeComparison) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "  {:<14} {:>18} {:>18}\n",
        "", cmp.price.first.name, cmp.price.second.name
    ));
    pair_line(&mut out, "Price/sq.ft", &cmp.price);
    pair_line(&mut out, "Growth %", &cmp.growth);
    pair_line(&mut out, "Demand", &cmp.demand);
    pair_line(&mut out, "Supply", &cmp.supply);
    pair_line(&mut out, "ROI %", &cmp.roi);
    out
}
