//! One component per presentation section. Each renders the `<section>`
//! anchor whose id matches its navigation entry.

mod business;
mod financial;
mod footer;
mod investment;
mod market;
mod menu;
mod operations;
mod overview;

pub use business::BusinessModelSection;
pub use financial::FinancialSection;
pub use footer::Footer;
pub use investment::InvestmentSection;
pub use market::MarketSection;
pub use menu::MenuSection;
pub use operations::OperationsSection;
pub use overview::OverviewSection;

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
}

#[function_component(SectionHeader)]
fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="mb-8">
            <h2 class="text-3xl font-bold text-gray-900 mb-4">{&props.title}</h2>
            <p class="text-lg text-gray-600">{&props.subtitle}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BulletListProps {
    pub items: Vec<AttrValue>,
    #[prop_or(AttrValue::from("space-y-2 text-gray-700"))]
    pub class: AttrValue,
}

#[function_component(BulletList)]
fn bullet_list(props: &BulletListProps) -> Html {
    html! {
        <ul class={props.class.clone()}>
            { for props.items.iter().map(|item| html! { <li>{"• "}{item}</li> }) }
        </ul>
    }
}
