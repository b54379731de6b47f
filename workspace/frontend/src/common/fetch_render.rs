use common::FetchState;
use yew::prelude::*;

use super::loading::Loading;
use crate::settings::{self, DataSource};

#[derive(Properties)]
pub struct FetchRenderProps<T: Clone + PartialEq + 'static> {
    pub state: FetchState<T>,
    pub render: Callback<T, Html>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    #[prop_or_default]
    pub loading_text: Option<AttrValue>,
}

impl<T: Clone + PartialEq + 'static> PartialEq for FetchRenderProps<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.loading_text == other.loading_text
    }
}

/// Component that handles rendering based on FetchState
/// - Loading: shows loading spinner
/// - Error: shows error display with optional retry
/// - Success: calls render callback with data
#[function_component(FetchRender)]
pub fn fetch_render<T>(props: &FetchRenderProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    match &props.state {
        FetchState::NotStarted => html! {},
        FetchState::Loading => html! { <Loading text={props.loading_text.clone()} /> },
        FetchState::Error(err) => html! {
            <LoadFailure message={AttrValue::from(err.clone())} on_retry={props.on_retry.clone()} />
        },
        FetchState::Success(data) => props.render.emit(data.clone()),
    }
}

#[derive(Properties, PartialEq)]
struct LoadFailureProps {
    message: AttrValue,
    on_retry: Option<Callback<()>>,
}

/// Names the backend that failed and offers the built-in presentation instead.
#[function_component(LoadFailure)]
fn load_failure(props: &LoadFailureProps) -> Html {
    let backend_url = settings::get_settings().backend_url;
    log::warn!("Presentation data unavailable from {}: {}", backend_url, props.message);

    let retry = props.on_retry.clone().map(|on_retry| {
        let onclick = Callback::from(move |_: MouseEvent| {
            log::debug!("Retrying presentation load");
            on_retry.emit(());
        });
        html! {
            <button class="btn btn-error btn-sm" {onclick}>
                <i class="fas fa-redo"></i>
                {" Tekrar Dene"}
            </button>
        }
    });

    let use_static = Callback::from(|_: MouseEvent| {
        settings::update_settings(|s| s.data_source = DataSource::Static);
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href("/") {
                log::error!("Failed to open the built-in presentation: {:?}", e);
            }
        }
    });

    html! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4 bg-gray-50 p-6">
            <div class="alert alert-error max-w-lg">
                <i class="fas fa-plug-circle-xmark text-2xl"></i>
                <div class="flex flex-col gap-1">
                    <span class="font-semibold">{"Veriler yüklenemedi"}</span>
                    <span class="text-sm">{&props.message}</span>
                    <span class="text-xs opacity-70">{format!("Sunucu: {backend_url}")}</span>
                </div>
            </div>
            <div class="flex gap-2">
                {retry}
                <button class="btn btn-ghost btn-sm" onclick={use_static}>
                    <i class="fas fa-database"></i>
                    {" Statik sunumu aç"}
                </button>
            </div>
        </div>
    }
}
