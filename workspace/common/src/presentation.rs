//! Values derived from the plan for display.

use crate::plan::{FinancialData, Investment, Location, Phase};

/// Locations opening in `phase`, in plan order.
pub fn locations_in_phase(locations: &[Location], phase: Phase) -> Vec<&Location> {
    locations.iter().filter(|location| location.phase == phase).collect()
}

/// Heading shown above the location cards of a phase.
pub fn phase_heading(phase: Phase) -> &'static str {
    match phase {
        Phase::One => "Faz 1 Lokasyonlar (İlk 6 ay)",
        Phase::Two => "Faz 2 Lokasyonlar (6-12 ay)",
    }
}

/// One row of the ROI table: the year label and the projected return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoiRow {
    pub label: String,
    pub value: String,
}

impl RoiRow {
    pub fn text(&self) -> String {
        format!("{} {}", self.label, self.value)
    }
}

pub fn roi_rows(investment: &Investment) -> Vec<RoiRow> {
    investment
        .roi_projection
        .iter()
        .map(|roi| RoiRow {
            label: format!("{}. Yıl:", roi.year),
            value: roi.roi.clone(),
        })
        .collect()
}

/// `6300000` → `"6,300,000"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `6300000, 1` → `"6.3M"`.
pub fn format_millions(value: u64, decimals: usize) -> String {
    format!("{:.*}M", decimals, value as f64 / 1_000_000.0)
}

/// Share of revenue consumed by operating costs, in percent.
pub fn cost_ratio(margin: u32) -> u32 {
    100u32.saturating_sub(margin)
}

/// Sum of the initial investment breakdown in RMB.
pub fn initial_investment_total(financial: &FinancialData) -> u64 {
    financial.initial_investment.iter().map(|item| item.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::static_plan::static_plan;
    use crate::wire::LocationsResponse;
    use serde_json::json;

    #[test]
    fn test_locations_partition_by_phase() {
        let response: LocationsResponse = serde_json::from_value(json!({
            "locations": [
                {"name": "A", "area": "1", "capacity": "1", "features": [], "phase": 1},
                {"name": "B", "area": "1", "capacity": "1", "features": [], "phase": 2},
                {"name": "C", "area": "1", "capacity": "1", "features": [], "phase": 1},
                {"name": "D", "area": "1", "capacity": "1", "features": [], "phase": 2}
            ]
        }))
        .unwrap();

        let phase_one: Vec<_> = locations_in_phase(&response.locations, Phase::One)
            .into_iter()
            .map(|l| l.name.as_str())
            .collect();
        let phase_two: Vec<_> = locations_in_phase(&response.locations, Phase::Two)
            .into_iter()
            .map(|l| l.name.as_str())
            .collect();

        assert_eq!(phase_one, vec!["A", "C"]);
        assert_eq!(phase_two, vec!["B", "D"]);
    }

    #[test]
    fn test_location_without_phase_never_lands_in_phase_one() {
        let response = serde_json::from_value::<LocationsResponse>(json!({
            "locations": [
                {"name": "A", "phase": 1},
                {"name": "NoPhase"},
                {"name": "B", "phase": 2}
            ]
        }));

        assert!(response.is_err());
    }

    #[test]
    fn test_roi_row_text() {
        let investment: Investment = serde_json::from_value(json!({
            "amount": "1,500,000 RMB",
            "usage": [{"purpose": "A", "percentage": 60}],
            "roi_projection": [{"year": 2, "roi": "150%"}]
        }))
        .unwrap();

        let rows = roi_rows(&investment);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].text(), "2. Yıl: 150%");
        assert_eq!(investment.amount, "1,500,000 RMB");
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(6_300_000), "6,300,000");
        assert_eq!(format_millions(6_300_000, 1), "6.3M");
        assert_eq!(format_millions(5_040_000, 2), "5.04M");
        assert_eq!(format_millions(1_260_000, 2), "1.26M");
    }

    #[test]
    fn test_cost_ratio_and_total() {
        assert_eq!(cost_ratio(20), 80);
        assert_eq!(cost_ratio(120), 0);
        assert_eq!(initial_investment_total(&static_plan().financial_data), 1_000_000);
    }
}
