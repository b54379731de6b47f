use common::presentation::{cost_ratio, format_millions, format_thousands, initial_investment_total};
use common::FinancialData;
use yew::prelude::*;

use super::SectionHeader;
use crate::components::charts::{InvestmentPieChart, RevenueProjectionChart};

#[derive(Properties, PartialEq)]
pub struct FinancialSectionProps {
    pub financial: FinancialData,
}

#[function_component(FinancialSection)]
pub fn financial_section(props: &FinancialSectionProps) -> Html {
    let financial = &props.financial;
    let profitability = &financial.profitability;

    html! {
        <section id="financial" class="mb-16">
            <SectionHeader title="Finansal Projeksiyonlar" subtitle="Başlangıç yatırımı ve gelir tahminleri" />

            <div class="grid lg:grid-cols-2 gap-8 mb-8">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">{"Başlangıç Yatırımı (İlk 2 Lokasyon)"}</h3>
                        <InvestmentPieChart data={financial.initial_investment.clone()} />
                        <div class="mt-4 text-center">
                            <span class="text-2xl font-bold text-gray-900">
                                {format!("{} RMB", format_thousands(initial_investment_total(financial)))}
                            </span>
                            <p class="text-sm text-gray-600">{"Toplam Yatırım"}</p>
                        </div>
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">{"Gelir Projeksiyonu (İlk Yıl)"}</h3>
                        <RevenueProjectionChart data={financial.revenue_projection.clone()} />
                        <div class="mt-4 text-center">
                            <span class="text-2xl font-bold text-green-600">
                                {format!("{} RMB", format_thousands(profitability.yearly_revenue))}
                            </span>
                            <p class="text-sm text-gray-600">{"Yıllık Ciro Hedefi"}</p>
                        </div>
                    </div>
                </div>
            </div>

            <div class="grid md:grid-cols-3 gap-6">
                { metric("green", &format_millions(profitability.yearly_revenue, 1), "Yıllık Ciro", "İlk yıl hedef") }
                { metric(
                    "blue",
                    &format_millions(profitability.operation_costs, 2),
                    "Operasyon Giderleri",
                    &format!("{}% gider oranı", cost_ratio(profitability.margin)),
                ) }
                { metric(
                    "purple",
                    &format_millions(profitability.net_profit, 2),
                    "Net Kâr",
                    &format!("{}% net marj", profitability.margin),
                ) }
            </div>
        </section>
    }
}

fn metric(tone: &str, millions: &str, caption: &str, note: &str) -> Html {
    html! {
        <div class={format!("card border border-{tone}-200 bg-gradient-to-br from-{tone}-50 to-white")}>
            <div class="card-body p-6 items-center text-center">
                <h3 class={format!("text-2xl font-bold text-{tone}-600")}>{format!("{millions} RMB")}</h3>
                <p class="text-sm text-gray-600 mb-2">{caption}</p>
                <div class={format!("text-xs text-{tone}-700")}>{note}</div>
            </div>
        </div>
    }
}
