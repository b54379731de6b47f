//! The hard-coded Shanghai Cloud Kitchen business plan.
//!
//! Built once on first access and never mutated. The backend seeds its store
//! from this value and the frontend renders it when no API is used.

use std::sync::LazyLock;

use crate::plan::{
    BusinessPlan, Company, CostComparison, Demographic, ExecutiveSummary, FinancialData,
    GrowthPoint, Investment, InvestmentItem, Location, MarketData, MarketSizing, Menu, MenuItem,
    Phase, Profitability, RevenuePoint, RoiProjection, SuccessMetrics, UsageItem,
};

/// Identifier the backend stores the seeded plan under.
pub const PLAN_ID: &str = "shanghai-cloud-kitchen-2024";

static STATIC_PLAN: LazyLock<BusinessPlan> = LazyLock::new(build_plan);

pub fn static_plan() -> &'static BusinessPlan {
    &STATIC_PLAN
}

fn text(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn growth(year: u32, traditional: u32, cloud_kitchen: u32, market_share: u32) -> GrowthPoint {
    GrowthPoint { year, traditional, cloud_kitchen, market_share }
}

fn cost(category: &str, traditional: u32, cloud_kitchen: u32, savings: u32) -> CostComparison {
    CostComparison { category: category.to_string(), traditional, cloud_kitchen, savings }
}

fn demographic(age: &str, percentage: u32, description: &str) -> Demographic {
    Demographic {
        age: age.to_string(),
        percentage,
        description: description.to_string(),
    }
}

fn investment_item(category: &str, amount: u64, percentage: u32) -> InvestmentItem {
    InvestmentItem { category: category.to_string(), amount, percentage }
}

fn revenue(month: &str, orders: u64, avg_value: u64, revenue: u64, cumulative: u64) -> RevenuePoint {
    RevenuePoint { month: month.to_string(), orders, avg_value, revenue, cumulative }
}

fn dish(name: &str, price: &str, description: &str) -> MenuItem {
    MenuItem {
        name: name.to_string(),
        price: price.to_string(),
        description: description.to_string(),
    }
}

fn location(name: &str, area: &str, capacity: &str, features: &[&str], phase: Phase) -> Location {
    Location {
        name: name.to_string(),
        area: area.to_string(),
        capacity: capacity.to_string(),
        features: text(features),
        phase,
    }
}

fn build_plan() -> BusinessPlan {
    let vision = "Shanghai'da CAVA restorant zincirine benzer bir model ile premium, sağlıklı ve özelleştirilebilir Akdeniz yemeklerini cloud kitchen formatında sunmak.";
    let target = "Shanghai'daki sağlık bilincine sahip, premium yemek deneyimi arayan 25-45 yaş arası kentli profesyoneller.";

    BusinessPlan {
        company: Company {
            name: "SHANGHAI CLOUD KITCHEN PROJECT".to_string(),
            subtitle: "CAVA Tarzı Akdeniz Mutfağı - Yatırım Sunumu".to_string(),
            tagline: "Taze, Sağlıklı, Özelleştirilebilir".to_string(),
            vision: vision.to_string(),
            target: target.to_string(),
        },
        executive_summary: ExecutiveSummary {
            vision: vision.to_string(),
            target_market: target.to_string(),
            business_model: "Cloud kitchen (hayalet mutfak) formatında, sadece teslimat ve paket servis odaklı operasyon.".to_string(),
            financial_target: "İlk yıl 2 milyon RMB ciro, %20 net kar marjı.".to_string(),
        },
        market_data: MarketData {
            shanghai_market: MarketSizing {
                size: "50+ milyar RMB".to_string(),
                growth: "15-20%".to_string(),
                penetration: "85%+".to_string(),
                average_order: "45-80 RMB".to_string(),
            },
            cloud_kitchen_growth: vec![
                growth(2020, 5, 25, 15),
                growth(2021, 6, 30, 18),
                growth(2022, 7, 35, 22),
                growth(2023, 8, 40, 26),
                growth(2024, 8, 45, 28),
                growth(2025, 9, 50, 32),
                growth(2026, 9, 55, 37),
                growth(2027, 10, 60, 45),
            ],
            cost_comparison: vec![
                cost("Kira Maliyeti", 100, 35, 65),
                cost("Personel Gideri", 100, 55, 45),
                cost("Dekor/Mobilya", 100, 12, 88),
                cost("Toplam CapEx", 100, 40, 60),
            ],
            target_demographics: vec![
                demographic("25-35 yaş", 45, "Tech-savvy profesyoneller"),
                demographic("35-45 yaş", 35, "Aileli yöneticiler"),
                demographic("45+ yaş", 20, "Üst düzey yöneticiler"),
            ],
        },
        menu: Menu {
            signature_bowls: vec![
                dish("Mediterranean Power Bowl", "65 RMB", "Protein, taze sebzeler ve Akdeniz sosları"),
                dish("Greek Goddess Bowl", "58 RMB", "Klasik Yunan lezzetleri modern sunumla"),
                dish("Levantine Fusion Bowl", "62 RMB", "Doğu Akdeniz tatları Asya dokunuşlarıyla"),
                dish("Shanghai Spice Bowl", "55 RMB", "Yerel damak tadına uyarlanmış özel karışım"),
                dish("Quinoa Garden Bowl", "52 RMB", "Vegan dostu süper gıda kasesi"),
            ],
            pita_options: vec![
                dish("Mediterranean Pita Wrap", "38 RMB", "Taze malzemelerle dolu klasik pita"),
                dish("Chicken Shawarma Pita", "42 RMB", "Baharatlı tavuk ve taze soslarla"),
                dish("Falafel Pita Delight", "35 RMB", "Ev yapımı falafel ve tahini soslu"),
                dish("Shanghai Fusion Pita", "44 RMB", "Doğu-Batı füzyon lezzetleri"),
            ],
            proteins: text(&["Grilled Chicken", "Lamb Kofta", "Falafel", "Grilled Salmon", "Tofu Teriyaki"]),
            toppings: text(&["Hummus", "Tzatziki", "Harissa", "Tabbouleh", "Roasted Vegetables", "Fresh Herbs"]),
            sides: text(&["Pita Bread", "Baklava Bites", "Fresh Fruit Cups", "Premium Beverages"]),
        },
        financial_data: FinancialData {
            initial_investment: vec![
                investment_item("Mutfak Ekipmanları", 300_000, 30),
                investment_item("Renovasyon & Kurulum", 200_000, 20),
                investment_item("Marka Geliştirme", 50_000, 5),
                investment_item("İlk Stok & Malzeme", 100_000, 10),
                investment_item("Teknoloji & Yazılım", 80_000, 8),
                investment_item("Pazarlama", 150_000, 15),
                investment_item("İşletme Sermayesi", 120_000, 12),
            ],
            revenue_projection: vec![
                revenue("Ay 1-3", 3_000, 50, 150_000, 450_000),
                revenue("Ay 4-6", 8_000, 52, 416_000, 1_698_000),
                revenue("Ay 7-9", 12_000, 55, 660_000, 3_678_000),
                revenue("Ay 10-12", 15_000, 58, 870_000, 6_288_000),
            ],
            profitability: Profitability {
                yearly_revenue: 6_300_000,
                operation_costs: 5_040_000,
                net_profit: 1_260_000,
                margin: 20,
            },
        },
        locations: vec![
            location("Jing'an Cloud Kitchen", "200 m²", "150 sipariş/gün", &["Premium konut bölgesi", "5 km teslimat yarıçapı"], Phase::One),
            location("Huangpu Cloud Kitchen", "180 m²", "120 sipariş/gün", &["İş merkezi yakınlığı", "Hızlı teslimat imkanı"], Phase::One),
            location("Pudong Cloud Kitchen", "220 m²", "180 sipariş/gün", &["Finansal merkez", "Yüksek gelir demografisi"], Phase::Two),
            location("Xuhui Cloud Kitchen", "190 m²", "140 sipariş/gün", &["Genç profesyoneller", "Üniversite yakınlığı"], Phase::Two),
        ],
        investment: Investment {
            amount: "1,500,000 RMB".to_string(),
            usage: vec![
                UsageItem { purpose: "Cloud kitchen kurulum".to_string(), percentage: 60 },
                UsageItem { purpose: "Marka geliştirme & pazarlama".to_string(), percentage: 25 },
                UsageItem { purpose: "İşletme sermayesi".to_string(), percentage: 15 },
            ],
            roi_projection: vec![
                RoiProjection { year: 2, roi: "150%".to_string() },
                RoiProjection { year: 3, roi: "300%".to_string() },
                RoiProjection { year: 5, roi: "Exit Strategy: Series A (3-5x multiple)".to_string() },
            ],
            success_metrics: SuccessMetrics {
                six_months: text(&[
                    "2 cloud kitchen operasyonda",
                    "Günlük 200+ sipariş",
                    "4.5+ yıldız rating",
                    "%15+ repeat customer rate",
                    "%30+ marka bilinirliği",
                ]),
                twelve_months: text(&[
                    "4 cloud kitchen operasyonda",
                    "Günlük 600+ sipariş",
                    "6+ milyon RMB ciro",
                    "%20+ net profit margin",
                    "%60+ marka bilinirliği",
                ]),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_plan_is_built_once() {
        assert!(std::ptr::eq(static_plan(), static_plan()));
    }

    #[test]
    fn test_locations_split_evenly_between_phases() {
        let plan = static_plan();
        let phase_one = plan.locations.iter().filter(|l| l.phase == Phase::One).count();
        let phase_two = plan.locations.iter().filter(|l| l.phase == Phase::Two).count();

        assert_eq!(phase_one, 2);
        assert_eq!(phase_two, 2);
        assert_eq!(phase_one + phase_two, plan.locations.len());
    }

    #[test]
    fn test_investment_breakdown_sums_to_one_hundred_percent() {
        let plan = static_plan();
        let total: u32 = plan
            .financial_data
            .initial_investment
            .iter()
            .map(|item| item.percentage)
            .sum();
        assert_eq!(total, 100);

        let usage: u32 = plan.investment.usage.iter().map(|u| u.percentage).sum();
        assert_eq!(usage, 100);
    }
}
