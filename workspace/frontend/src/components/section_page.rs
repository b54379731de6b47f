//! A single presentation section, fetched through its own hook.

use common::navigation::find_section;
use common::{FinancialData, Investment, Location, MarketData, Menu, OverviewResponse};
use yew::prelude::*;
use yew_router::prelude::*;

use super::business_plan::sections::{
    BusinessModelSection, FinancialSection, InvestmentSection, MarketSection, MenuSection,
    OperationsSection, OverviewSection,
};
use crate::common::fetch_render::FetchRender;
use crate::hooks::{
    use_financial, use_investment, use_locations, use_market_analysis, use_menu, use_overview,
};
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct SectionPageProps {
    pub id: AttrValue,
}

#[function_component(SectionPage)]
pub fn section_page(props: &SectionPageProps) -> Html {
    let Some(section) = find_section(&props.id) else {
        log::warn!("Unknown section requested: {}", props.id);
        return html! { <Redirect<Route> to={Route::NotFound} /> };
    };

    let content = match section.id {
        "overview" => html! { <OverviewPage /> },
        "market" => html! { <MarketPage /> },
        "business" => html! { <BusinessModelSection /> },
        "menu" => html! { <MenuPage /> },
        "operations" => html! { <OperationsPage /> },
        "financial" => html! { <FinancialPage /> },
        _ => html! { <InvestmentPage /> },
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-4xl mx-auto p-6 lg:p-8">
                <div class="mb-6">
                    <Link<Route> to={Route::Home} classes="btn btn-ghost btn-sm">
                        <i class="fas fa-arrow-left"></i>
                        {" Tüm sunum"}
                    </Link<Route>>
                </div>
                {content}
            </div>
        </div>
    }
}

/// Overview highlights need the location count and margin, so this page
/// waits on three endpoints.
#[function_component(OverviewPage)]
fn overview_page() -> Html {
    let (overview, refetch_overview) = use_overview();
    let (locations, refetch_locations) = use_locations();
    let (financial, refetch_financial) = use_financial();

    let state = (*overview)
        .clone()
        .zip((*locations).clone())
        .zip((*financial).clone())
        .map(|((overview, locations), financial)| OverviewFigures {
            overview,
            location_count: locations.len(),
            margin: financial.profitability.margin,
        });
    let on_retry = Callback::from(move |_: ()| {
        refetch_overview.emit(());
        refetch_locations.emit(());
        refetch_financial.emit(());
    });
    let render = Callback::from(|figures: OverviewFigures| {
        html! {
            <OverviewSection
                company={figures.overview.company}
                summary={figures.overview.executive_summary}
                location_count={figures.location_count}
                margin={figures.margin}
            />
        }
    });
    html! { <FetchRender<OverviewFigures> {state} {render} on_retry={Some(on_retry)} /> }
}

#[derive(Debug, Clone, PartialEq)]
struct OverviewFigures {
    overview: OverviewResponse,
    location_count: usize,
    margin: u32,
}

#[function_component(MarketPage)]
fn market_page() -> Html {
    let (state, refetch) = use_market_analysis();
    let render = Callback::from(|market: MarketData| html! { <MarketSection {market} /> });
    html! { <FetchRender<MarketData> state={(*state).clone()} {render} on_retry={Some(refetch)} /> }
}

#[function_component(MenuPage)]
fn menu_page() -> Html {
    let (state, refetch) = use_menu();
    let render = Callback::from(|menu: Menu| html! { <MenuSection {menu} /> });
    html! { <FetchRender<Menu> state={(*state).clone()} {render} on_retry={Some(refetch)} /> }
}

#[function_component(OperationsPage)]
fn operations_page() -> Html {
    let (state, refetch) = use_locations();
    let render = Callback::from(|locations: Vec<Location>| html! { <OperationsSection {locations} /> });
    html! { <FetchRender<Vec<Location>> state={(*state).clone()} {render} on_retry={Some(refetch)} /> }
}

#[function_component(FinancialPage)]
fn financial_page() -> Html {
    let (state, refetch) = use_financial();
    let render = Callback::from(|financial: FinancialData| html! { <FinancialSection {financial} /> });
    html! { <FetchRender<FinancialData> state={(*state).clone()} {render} on_retry={Some(refetch)} /> }
}

#[function_component(InvestmentPage)]
fn investment_page() -> Html {
    let (state, refetch) = use_investment();
    let render = Callback::from(|investment: Investment| html! { <InvestmentSection {investment} /> });
    html! { <FetchRender<Investment> state={(*state).clone()} {render} on_retry={Some(refetch)} /> }
}
