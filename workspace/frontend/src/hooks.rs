//! Data hooks feeding the presentation.

use std::future::Future;
use std::rc::Rc;

use common::{
    drive_fetch, load_business_plan, static_plan, BusinessPlan, BusinessPlanApi, FetchState,
    FinancialData, Investment, Location, MarketData, Menu, OverviewResponse, RequestError,
    LOAD_FAILED_MESSAGE,
};
use yew::prelude::*;

use crate::api_client::ApiClient;

/// Run `fetch_fn` on mount and expose its state plus a manual refetch.
#[hook]
pub fn use_fetch_with_refetch<T, F, Fut>(fetch_fn: F) -> (UseStateHandle<FetchState<T>>, Callback<()>)
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, RequestError>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);
    let fetch_fn = use_state(|| Rc::new(fetch_fn));

    let refetch = {
        let fetch_state = fetch_state.clone();
        let fetch_fn = fetch_fn.clone();

        use_callback((), move |_, _| {
            let fetch_state = fetch_state.clone();
            let fetch_fn = fetch_fn.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let fut = (*fetch_fn)();
                drive_fetch(fut, LOAD_FAILED_MESSAGE, |state| fetch_state.set(state)).await;
            });
        })
    };

    // Fetch on mount
    {
        let refetch = refetch.clone();
        use_effect_with((), move |_| {
            refetch.emit(());
            || ()
        });
    }

    (fetch_state, refetch)
}

/// Fill fallbacks in a partial plan the same way the aggregate load does.
fn normalized(plan: BusinessPlan) -> BusinessPlan {
    plan.apply_defaults(static_plan())
}

/// The whole plan: best-effort seed, then all six sections or nothing.
#[hook]
pub fn use_business_plan() -> (UseStateHandle<FetchState<BusinessPlan>>, Callback<()>) {
    use_fetch_with_refetch(|| async {
        let api = ApiClient::from_settings();
        load_business_plan(&api).await
    })
}

#[hook]
pub fn use_overview() -> (UseStateHandle<FetchState<OverviewResponse>>, Callback<()>) {
    use_fetch_with_refetch(|| async { ApiClient::from_settings().get_overview().await })
}

#[hook]
pub fn use_market_analysis() -> (UseStateHandle<FetchState<MarketData>>, Callback<()>) {
    use_fetch_with_refetch(|| async {
        let response = ApiClient::from_settings().get_market_analysis().await?;
        let plan = normalized(BusinessPlan {
            market_data: response.market_data,
            ..BusinessPlan::default()
        });
        Ok(plan.market_data)
    })
}

#[hook]
pub fn use_financial() -> (UseStateHandle<FetchState<FinancialData>>, Callback<()>) {
    use_fetch_with_refetch(|| async {
        let response = ApiClient::from_settings().get_financial().await?;
        let plan = normalized(BusinessPlan {
            financial_data: response.financial_data,
            ..BusinessPlan::default()
        });
        Ok(plan.financial_data)
    })
}

#[hook]
pub fn use_menu() -> (UseStateHandle<FetchState<Menu>>, Callback<()>) {
    use_fetch_with_refetch(|| async {
        ApiClient::from_settings().get_menu().await.map(|response| response.menu)
    })
}

#[hook]
pub fn use_locations() -> (UseStateHandle<FetchState<Vec<Location>>>, Callback<()>) {
    use_fetch_with_refetch(|| async {
        ApiClient::from_settings()
            .get_locations()
            .await
            .map(|response| response.locations)
    })
}

#[hook]
pub fn use_investment() -> (UseStateHandle<FetchState<Investment>>, Callback<()>) {
    use_fetch_with_refetch(|| async {
        let response = ApiClient::from_settings().get_investment().await?;
        let plan = normalized(BusinessPlan {
            investment: response.investment,
            ..BusinessPlan::default()
        });
        Ok(plan.investment)
    })
}
