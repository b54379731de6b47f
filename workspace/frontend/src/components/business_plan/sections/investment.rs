use common::presentation::roi_rows;
use common::Investment;
use yew::prelude::*;

use super::SectionHeader;

const OPPORTUNITIES: [&str; 5] = [
    "Hızla büyüyen pazar segmentinde erken giriş",
    "Kanıtlanmış ABD modeli",
    "Güçlü marka potansiyeli",
    "Ölçeklenebilir teknoloji altyapısı",
    "Güçlü financial return potansiyeli",
];

#[derive(Properties, PartialEq)]
pub struct InvestmentSectionProps {
    pub investment: Investment,
}

#[function_component(InvestmentSection)]
pub fn investment_section(props: &InvestmentSectionProps) -> Html {
    let investment = &props.investment;
    let metrics = &investment.success_metrics;

    html! {
        <section id="investment" class="mb-16">
            <SectionHeader title="Yatırım Teklifi" subtitle="Aranan yatırım ve yatırımcı fırsatları" />

            <div class="card bg-gradient-to-r from-red-600 to-blue-600 text-white shadow-lg mb-8">
                <div class="card-body p-8">
                    <div class="text-center mb-8">
                        <h3 class="text-4xl font-bold mb-2">{&investment.amount}</h3>
                        <p class="text-xl">{"Aranan Yatırım"}</p>
                    </div>
                    <div class="grid md:grid-cols-3 gap-6">
                        { for investment.usage.iter().map(|usage| html! {
                            <div class="text-center">
                                <h4 class="text-2xl font-bold">{format!("%{}", usage.percentage)}</h4>
                                <p class="text-sm opacity-90">{&usage.purpose}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <div class="grid md:grid-cols-2 gap-8">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">
                            <i class="fas fa-star text-yellow-500"></i>
                            {"Yatırımcı İçin Fırsatlar"}
                        </h3>
                        <ul class="space-y-3 text-gray-700">
                            { for OPPORTUNITIES.iter().map(|item| html! {
                                <li class="flex items-start">
                                    <i class="fas fa-arrow-right text-red-600 mr-2 mt-1"></i>
                                    {*item}
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">
                            <i class="fas fa-chart-line text-green-500"></i>
                            {"ROI Projeksiyonu"}
                        </h3>
                        <div class="space-y-4">
                            { for roi_rows(investment).into_iter().map(|row| html! {
                                <div class="flex items-center justify-between p-4 bg-gray-50 rounded-lg">
                                    <span class="font-medium">{row.label}</span>
                                    <span class="font-bold text-green-600">{row.value}</span>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow mt-8">
                <div class="card-body">
                    <h3 class="card-title">{"Başarı Kriterleri"}</h3>
                    <div class="grid md:grid-cols-2 gap-8">
                        { metric_list("6 Aylık Hedefler", "bg-red-600", &metrics.six_months) }
                        { metric_list("12 Aylık Hedefler", "bg-blue-600", &metrics.twelve_months) }
                    </div>
                </div>
            </div>
        </section>
    }
}

fn metric_list(title: &str, dot: &str, metrics: &[String]) -> Html {
    html! {
        <div>
            <h4 class="font-semibold text-gray-900 mb-3">{title}</h4>
            <ul class="space-y-2">
                { for metrics.iter().map(|metric| html! {
                    <li class="flex items-center text-sm text-gray-700">
                        <div class={format!("w-2 h-2 {dot} rounded-full mr-3")}></div>
                        {metric}
                    </li>
                }) }
            </ul>
        </div>
    }
}
