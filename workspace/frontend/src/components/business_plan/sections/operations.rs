use common::presentation::{locations_in_phase, phase_heading};
use common::{Location, Phase};
use yew::prelude::*;

use super::{BulletList, SectionHeader};

#[derive(Properties, PartialEq)]
pub struct OperationsSectionProps {
    pub locations: Vec<Location>,
}

#[function_component(OperationsSection)]
pub fn operations_section(props: &OperationsSectionProps) -> Html {
    html! {
        <section id="operations" class="mb-16">
            <SectionHeader title="Operasyon Planı" subtitle="Lokasyon stratejisi ve aşamalı büyüme planı" />

            <div class="mb-8">
                { for Phase::ALL.into_iter().map(|phase| html! {
                    <>
                        <h3 class="text-xl font-semibold text-gray-900 mb-4">{phase_heading(phase)}</h3>
                        <div class="grid md:grid-cols-2 gap-6 mb-6">
                            { for locations_in_phase(&props.locations, phase).into_iter().map(location_card) }
                        </div>
                    </>
                }) }
            </div>

            <div class="grid md:grid-cols-2 gap-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">{"🚛 Tedarik Zinciri"}</h3>
                        <BulletList items={vec![
                            AttrValue::from("%70 yerel, %30 ithal malzeme"),
                            AttrValue::from("HACCP standartları"),
                            AttrValue::from("Çevre dostu ambalaj"),
                            AttrValue::from("Günlük taze tedarik"),
                        ]} />
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">{"💻 Teknoloji Altyapısı"}</h3>
                        <BulletList items={vec![
                            AttrValue::from("Meituan, Ele.me entegrasyonu"),
                            AttrValue::from("Sipariş takip sistemi"),
                            AttrValue::from("WeChat mini-program"),
                            AttrValue::from("Çoklu ödeme sistemleri"),
                        ]} />
                    </div>
                </div>
            </div>
        </section>
    }
}

fn location_card(location: &Location) -> Html {
    let (frame, title, icon) = match location.phase {
        Phase::One => ("border-red-200 bg-base-100", "text-red-600", "fas fa-map-marker-alt"),
        Phase::Two => ("border-blue-200 bg-blue-50", "text-blue-600", "fas fa-clock"),
    };

    html! {
        <div class={format!("card border {frame}")}>
            <div class="card-body">
                <h4 class={format!("card-title {title}")}>
                    <i class={icon}></i>
                    {&location.name}
                </h4>
                <div class="space-y-3">
                    <div class="flex justify-between">
                        <span class="font-medium">{"Alan:"}</span>
                        <span>{&location.area}</span>
                    </div>
                    <div class="flex justify-between">
                        <span class="font-medium">{"Kapasite:"}</span>
                        <span>{&location.capacity}</span>
                    </div>
                    <div class="mt-3">
                        <span class="font-medium">{"Özellikler:"}</span>
                        <ul class="mt-2 space-y-1">
                            { for location.features.iter().map(|feature| html! {
                                <li class="text-sm text-gray-600">{"• "}{feature}</li>
                            }) }
                        </ul>
                    </div>
                </div>
            </div>
        </div>
    }
}
