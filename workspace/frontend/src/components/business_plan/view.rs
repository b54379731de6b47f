use std::rc::Rc;

use common::{BusinessPlan, SectionScroller, ViewState};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use super::navigation::{MobileHeader, MobileMenu, Sidebar};
use super::sections::{
    BusinessModelSection, FinancialSection, Footer, InvestmentSection, MarketSection, MenuSection,
    OperationsSection, OverviewSection,
};

/// Scrolls the live document with smooth behaviour.
struct DocumentScroller;

impl SectionScroller for DocumentScroller {
    fn scroll_to(&self, id: &str) -> bool {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id));

        let Some(element) = element else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

#[derive(Properties, PartialEq)]
pub struct BusinessPlanViewProps {
    pub plan: Rc<BusinessPlan>,
}

/// The full single-page presentation with its navigation chrome.
#[function_component(BusinessPlanView)]
pub fn business_plan_view(props: &BusinessPlanViewProps) -> Html {
    let view_state = use_state(ViewState::default);

    let on_select = {
        let view_state = view_state.clone();
        Callback::from(move |id: &'static str| {
            log::debug!("Section selected: {}", id);
            let mut next = (*view_state).clone();
            next.select_section(id, &DocumentScroller);
            view_state.set(next);
        })
    };

    let on_toggle = {
        let view_state = view_state.clone();
        Callback::from(move |_: ()| {
            let mut next = (*view_state).clone();
            next.toggle_mobile_menu();
            view_state.set(next);
        })
    };

    let on_close = {
        let view_state = view_state.clone();
        Callback::from(move |_: ()| {
            let mut next = (*view_state).clone();
            next.close_mobile_menu();
            view_state.set(next);
        })
    };

    let plan = &props.plan;
    let current = (*view_state).clone();

    html! {
        <div class="min-h-screen bg-gray-50">
            <MobileHeader menu_open={current.mobile_menu_open} {on_toggle} />

            if current.mobile_menu_open {
                <MobileMenu
                    view_state={current.clone()}
                    on_select={on_select.clone()}
                    {on_close}
                />
            }

            <div class="lg:flex">
                <Sidebar view_state={current.clone()} {on_select} />

                <main class="lg:ml-64 flex-1 max-w-4xl mx-auto p-6 lg:p-8">
                    <OverviewSection
                        company={plan.company.clone()}
                        summary={plan.executive_summary.clone()}
                        location_count={plan.locations.len()}
                        margin={plan.financial_data.profitability.margin}
                    />
                    <MarketSection market={plan.market_data.clone()} />
                    <BusinessModelSection />
                    <MenuSection menu={plan.menu.clone()} />
                    <OperationsSection locations={plan.locations.clone()} />
                    <FinancialSection financial={plan.financial_data.clone()} />
                    <InvestmentSection investment={plan.investment.clone()} />
                    <Footer />
                </main>
            </div>
        </div>
    }
}
