use common::{Menu, MenuItem};
use yew::prelude::*;

use super::SectionHeader;

#[derive(Properties, PartialEq)]
pub struct MenuSectionProps {
    pub menu: Menu,
}

#[function_component(MenuSection)]
pub fn menu_section(props: &MenuSectionProps) -> Html {
    let menu = &props.menu;

    html! {
        <section id="menu" class="mb-16">
            <SectionHeader title="Menü & Ürünler" subtitle="Signature bowls ve özelleştirilebilir seçenekler" />

            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 mb-8">
                { for menu.signature_bowls.iter().map(|bowl| dish_card(bowl, html! {
                    <i class="fas fa-utensils text-3xl text-red-600"></i>
                }, "red")) }
            </div>

            <div class="mb-8">
                <h3 class="text-xl font-semibold text-gray-900 mb-4">{"🥙 Pita Seçenekleri"}</h3>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    { for menu.pita_options.iter().map(|pita| dish_card(pita, html! {
                        <div class="w-8 h-8 flex items-center justify-center font-bold text-lg">{"🥙"}</div>
                    }, "blue")) }
                </div>
            </div>

            <div class="grid md:grid-cols-3 gap-6">
                { option_card("🥩 Protein Seçenekleri", "red", &menu.proteins) }
                { option_card("🥗 Toppings & Soslar", "blue", &menu.toppings) }
                { option_card("🥖 Yan Ürünler", "green", &menu.sides) }
            </div>
        </section>
    }
}

fn dish_card(item: &MenuItem, icon: Html, tone: &str) -> Html {
    html! {
        <div class={format!("card bg-base-100 shadow hover:shadow-lg transition-shadow duration-300 border border-{tone}-200")}>
            <div class="card-body p-6">
                <div class="flex items-center justify-between mb-3">
                    {icon}
                    <span class={format!("badge bg-{tone}-100 text-{tone}-800 border-0")}>{&item.price}</span>
                </div>
                <h3 class="font-bold text-lg text-gray-900 mb-2">{&item.name}</h3>
                <p class="text-gray-600 text-sm">{&item.description}</p>
            </div>
        </div>
    }
}

fn option_card(title: &str, tone: &str, options: &[String]) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class={format!("card-title text-{tone}-600")}>{title}</h3>
                <div class="flex flex-wrap gap-2">
                    { for options.iter().map(|option| html! {
                        <span class={format!("badge bg-{tone}-100 text-{tone}-800 border-0")}>{option}</span>
                    }) }
                </div>
            </div>
        </div>
    }
}
