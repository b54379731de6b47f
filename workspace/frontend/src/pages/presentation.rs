use std::rc::Rc;

use common::{static_plan, BusinessPlan};
use yew::prelude::*;

use crate::common::fetch_render::FetchRender;
use crate::components::business_plan::BusinessPlanView;
use crate::hooks::use_business_plan;

/// Presentation backed by the API; renders nothing partial on failure.
#[function_component(LivePresentation)]
pub fn live_presentation() -> Html {
    let (state, refetch) = use_business_plan();
    let render = Callback::from(|plan: BusinessPlan| html! { <BusinessPlanView plan={Rc::new(plan)} /> });

    html! {
        <FetchRender<BusinessPlan>
            state={(*state).clone()}
            {render}
            on_retry={Some(refetch)}
            loading_text="İş planı yükleniyor..."
        />
    }
}

/// Presentation of the built-in content model, without network access.
#[function_component(StaticPresentation)]
pub fn static_presentation() -> Html {
    let plan = use_memo((), |_| static_plan().clone());
    html! { <BusinessPlanView plan={plan} /> }
}
