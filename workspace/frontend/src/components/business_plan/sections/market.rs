use common::MarketData;
use yew::prelude::*;

use super::SectionHeader;
use crate::components::charts::{CostComparisonChart, DemographicsChart, MarketGrowthChart};

#[derive(Properties, PartialEq)]
pub struct MarketSectionProps {
    pub market: MarketData,
}

#[function_component(MarketSection)]
pub fn market_section(props: &MarketSectionProps) -> Html {
    let sizing = &props.market.shanghai_market;

    html! {
        <section id="market" class="mb-16">
            <SectionHeader
                title="Pazar Analizi"
                subtitle="Shanghai yemek teslimat pazarı ve cloud kitchen büyüme trendi"
            />

            <div class="grid lg:grid-cols-2 gap-8 mb-8">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">
                            <i class="fas fa-chart-line text-red-600"></i>
                            {"Shanghai Yemek Pazarı"}
                        </h3>
                        <div class="grid grid-cols-2 gap-4">
                            { figure("red", &sizing.size, "Pazar Büyüklüğü (RMB)") }
                            { figure("blue", &sizing.growth, "Yıllık Büyüme") }
                            { figure("green", &sizing.penetration, "Online Penetrasyon") }
                            { figure("purple", &sizing.average_order, "Ortalama Sipariş (RMB)") }
                        </div>
                    </div>
                </div>

                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">{"Hedef Müşteri Demografisi"}</h3>
                        <DemographicsChart data={props.market.target_demographics.clone()} />
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow mb-8">
                <div class="card-body">
                    <h3 class="card-title">{"Pazar Büyüme Trendi (2020-2027)"}</h3>
                    <MarketGrowthChart data={props.market.cloud_kitchen_growth.clone()} />
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title">{"Cloud Kitchen vs Geleneksel Restoran Maliyet Karşılaştırması"}</h3>
                    <CostComparisonChart data={props.market.cost_comparison.clone()} />
                </div>
            </div>
        </section>
    }
}

fn figure(tone: &str, value: &str, caption: &str) -> Html {
    html! {
        <div class={format!("text-center p-4 bg-{tone}-50 rounded-lg")}>
            <h4 class={format!("text-2xl font-bold text-{tone}-600")}>{value}</h4>
            <p class="text-sm text-gray-600">{caption}</p>
        </div>
    }
}
