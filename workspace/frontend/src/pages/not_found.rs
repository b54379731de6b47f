use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4 bg-gray-50">
            <h1 class="text-4xl font-bold text-gray-900">{"404"}</h1>
            <p class="text-gray-600">{"Aradığınız sayfa bulunamadı."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-error btn-sm">{"Sunuma dön"}</Link<Route>>
        </div>
    }
}
