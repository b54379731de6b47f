use common::{Company, ExecutiveSummary};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OverviewSectionProps {
    pub company: Company,
    pub summary: ExecutiveSummary,
    pub location_count: usize,
    pub margin: u32,
}

#[function_component(OverviewSection)]
pub fn overview_section(props: &OverviewSectionProps) -> Html {
    let summary = &props.summary;

    html! {
        <section id="overview" class="mb-16">
            <div class="text-center mb-12">
                <div class="inline-flex items-center px-4 py-2 bg-red-100 text-red-800 rounded-full text-sm font-medium mb-6">
                    <i class="fas fa-award mr-2"></i>
                    {"Yatırım Sunumu"}
                </div>
                <h1 class="text-4xl lg:text-5xl font-bold text-gray-900 mb-4">{&props.company.name}</h1>
                <p class="text-xl text-gray-600 mb-6">{&props.company.subtitle}</p>
                <div class="flex flex-wrap justify-center gap-4 mb-8">
                    <span class="badge badge-lg bg-red-100 text-red-800 border-0 px-4 py-3">{"Taze, Sağlıklı"}</span>
                    <span class="badge badge-lg bg-blue-100 text-blue-800 border-0 px-4 py-3">{"Özelleştirilebilir"}</span>
                    <span class="badge badge-lg bg-green-100 text-green-800 border-0 px-4 py-3">{"Cloud Kitchen"}</span>
                </div>
            </div>

            <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6 mb-12">
                { highlight("fas fa-chart-line", "red", "2M RMB", "İlk Yıl Hedef Ciro") }
                { highlight("fas fa-users", "blue", "25-45 Yaş", "Hedef Demografisi") }
                { highlight("fas fa-building", "green", &format!("{} Lokasyon", props.location_count), "12 Ay İçinde") }
                { highlight("fas fa-bullseye", "purple", &format!("{}% Kar", props.margin), "Net Profit Margin") }
            </div>

            <div class="card bg-gradient-to-r from-red-600 to-blue-600 text-white shadow-lg">
                <div class="card-body p-8">
                    <h2 class="text-2xl font-bold mb-4">{"Executive Summary"}</h2>
                    <div class="grid md:grid-cols-2 gap-6">
                        <div>
                            <h3 class="font-semibold mb-2">{"🎯 Vizyon"}</h3>
                            <p class="text-red-100 mb-4">{&summary.vision}</p>
                            <h3 class="font-semibold mb-2">{"👥 Hedef Pazar"}</h3>
                            <p class="text-red-100">{&summary.target_market}</p>
                        </div>
                        <div>
                            <h3 class="font-semibold mb-2">{"🏢 İş Modeli"}</h3>
                            <p class="text-red-100 mb-4">{&summary.business_model}</p>
                            <h3 class="font-semibold mb-2">{"💰 Finansal Hedef"}</h3>
                            <p class="text-red-100">{&summary.financial_target}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn highlight(icon: &str, tone: &str, value: &str, caption: &str) -> Html {
    html! {
        <div class={format!("card border border-{tone}-200 bg-gradient-to-br from-{tone}-50 to-white")}>
            <div class="card-body p-6 items-center text-center">
                <i class={format!("{icon} text-4xl text-{tone}-600 mb-3")}></i>
                <h3 class="font-bold text-lg text-gray-900 mb-2">{value}</h3>
                <p class="text-sm text-gray-600">{caption}</p>
            </div>
        </div>
    }
}
