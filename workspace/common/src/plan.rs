//! Business-plan content model.
//!
//! Nested records use the backend's snake_case field names on the wire. Every
//! record deserializes leniently: a missing field takes its `Default` value and
//! is later filled in by [`BusinessPlan::apply_defaults`].

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Company header shown in the hero section.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Company {
    pub name: String,
    pub subtitle: String,
    pub tagline: String,
    pub vision: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ExecutiveSummary {
    pub vision: String,
    pub target_market: String,
    pub business_model: String,
    pub financial_target: String,
}

/// Headline sizing figures of the Shanghai delivery market.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct MarketSizing {
    pub size: String,
    pub growth: String,
    pub penetration: String,
    pub average_order: String,
}

/// One year of the traditional vs cloud-kitchen growth series.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct GrowthPoint {
    pub year: u32,
    pub traditional: u32,
    pub cloud_kitchen: u32,
    pub market_share: u32,
}

/// Cost index of one category, traditional restaurant = 100.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CostComparison {
    pub category: String,
    pub traditional: u32,
    pub cloud_kitchen: u32,
    pub savings: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Demographic {
    pub age: String,
    pub percentage: u32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct MarketData {
    pub shanghai_market: MarketSizing,
    pub cloud_kitchen_growth: Vec<GrowthPoint>,
    pub cost_comparison: Vec<CostComparison>,
    pub target_demographics: Vec<Demographic>,
}

/// One line of the initial investment breakdown (amounts in RMB).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct InvestmentItem {
    pub category: String,
    pub amount: u64,
    pub percentage: u32,
}

/// Revenue projection for one quarter of the first year.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct RevenuePoint {
    pub month: String,
    pub orders: u64,
    pub avg_value: u64,
    pub revenue: u64,
    pub cumulative: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Profitability {
    pub yearly_revenue: u64,
    pub operation_costs: u64,
    pub net_profit: u64,
    /// Net margin in percent.
    pub margin: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct FinancialData {
    pub initial_investment: Vec<InvestmentItem>,
    pub revenue_projection: Vec<RevenuePoint>,
    pub profitability: Profitability,
}

/// A priced dish (signature bowl or pita).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct MenuItem {
    pub name: String,
    pub price: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Menu {
    pub signature_bowls: Vec<MenuItem>,
    pub pita_options: Vec<MenuItem>,
    pub proteins: Vec<String>,
    pub toppings: Vec<String>,
    pub sides: Vec<String>,
}

/// Rollout phase of a kitchen location. Serialized as the integer 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Phase {
    /// Opened within the first six months.
    One,
    /// Opened between months six and twelve.
    Two,
}

impl Phase {
    pub const ALL: [Phase; 2] = [Phase::One, Phase::Two];

    pub fn number(self) -> u8 {
        match self {
            Phase::One => 1,
            Phase::Two => 2,
        }
    }
}

impl TryFrom<u8> for Phase {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Phase::One),
            2 => Ok(Phase::Two),
            other => Err(format!("invalid location phase {other}, expected 1 or 2")),
        }
    }
}

impl From<Phase> for u8 {
    fn from(phase: Phase) -> Self {
        phase.number()
    }
}

/// A kitchen site. `phase` is required; an entry without one is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Location {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub capacity: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[schema(value_type = u8)]
    pub phase: Phase,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UsageItem {
    pub purpose: String,
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct RoiProjection {
    pub year: u32,
    pub roi: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SuccessMetrics {
    pub six_months: Vec<String>,
    pub twelve_months: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Investment {
    /// Amount sought, already formatted (e.g. "1,500,000 RMB").
    pub amount: String,
    pub usage: Vec<UsageItem>,
    pub roi_projection: Vec<RoiProjection>,
    pub success_metrics: SuccessMetrics,
}

/// The view-model consumed by the presentation layer.
///
/// Top-level keys serialize in camelCase (`executiveSummary`, `marketData`,
/// `financialData`); nested values keep their wire names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct BusinessPlan {
    pub company: Company,
    pub executive_summary: ExecutiveSummary,
    pub market_data: MarketData,
    pub menu: Menu,
    pub financial_data: FinancialData,
    pub locations: Vec<Location>,
    pub investment: Investment,
}

impl BusinessPlan {
    pub fn target_demographics(&self) -> &[Demographic] {
        &self.market_data.target_demographics
    }

    /// Fill every field that carries a presentation fallback from `fallback`.
    ///
    /// An empty string or a zero counts as missing. Lists are left alone: a
    /// missing list is already empty after deserialization.
    pub fn apply_defaults(mut self, fallback: &BusinessPlan) -> Self {
        let sizing = &mut self.market_data.shanghai_market;
        let fallback_sizing = &fallback.market_data.shanghai_market;
        fill_text(&mut sizing.size, &fallback_sizing.size);
        fill_text(&mut sizing.growth, &fallback_sizing.growth);
        fill_text(&mut sizing.penetration, &fallback_sizing.penetration);
        fill_text(&mut sizing.average_order, &fallback_sizing.average_order);

        let profitability = &mut self.financial_data.profitability;
        let fallback_profitability = &fallback.financial_data.profitability;
        fill_number(&mut profitability.yearly_revenue, fallback_profitability.yearly_revenue);
        fill_number(&mut profitability.operation_costs, fallback_profitability.operation_costs);
        fill_number(&mut profitability.net_profit, fallback_profitability.net_profit);
        fill_number(&mut profitability.margin, fallback_profitability.margin);

        fill_text(&mut self.investment.amount, &fallback.investment.amount);

        self
    }
}

fn fill_text(value: &mut String, fallback: &str) {
    if value.trim().is_empty() {
        *value = fallback.to_string();
    }
}

fn fill_number<T: Copy + Default + PartialEq>(value: &mut T, fallback: T) {
    if *value == T::default() {
        *value = fallback;
    }
}
