use common::{ViewState, NAVIGATION_SECTIONS};
use yew::prelude::*;

use crate::settings::{self, DataSource};

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub view_state: ViewState,
    pub on_select: Callback<&'static str>,
}

/// One button per section; exactly the active one is highlighted.
#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    html! {
        <nav class="space-y-2">
            { for NAVIGATION_SECTIONS.iter().map(|section| {
                let id = section.id;
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_select.emit(id));
                let state = if props.view_state.is_active(id) {
                    "bg-red-600 text-white shadow-md"
                } else {
                    "text-gray-700 hover:bg-red-50 hover:text-red-600"
                };

                html! {
                    <button
                        key={id}
                        {onclick}
                        class={classes!(
                            "w-full", "flex", "items-center", "gap-3", "px-4", "py-3", "text-left",
                            "rounded-lg", "transition-all", "duration-200", state
                        )}
                    >
                        <i class={classes!(section.icon.css_class(), "w-5")}></i>
                        <span class="font-medium">{section.title}</span>
                    </button>
                }
            }) }
        </nav>
    }
}

/// Fixed sidebar shown on large screens
#[function_component(Sidebar)]
pub fn sidebar(props: &NavigationProps) -> Html {
    html! {
        <aside class="hidden lg:block w-64 bg-white border-r border-gray-200 fixed left-0 top-0 h-screen overflow-y-auto z-30">
            <div class="p-6">
                <div class="mb-8">
                    <h1 class="text-2xl font-bold text-gray-900 mb-2">{"Shanghai Cloud Kitchen"}</h1>
                    <p class="text-sm text-gray-600">{"CAVA Tarzı Akdeniz Mutfağı"}</p>
                </div>
                <Navigation
                    view_state={props.view_state.clone()}
                    on_select={props.on_select.clone()}
                />
                <div class="divider"></div>
                <DataSourceToggle />
            </div>
        </aside>
    }
}

#[derive(Properties, PartialEq)]
pub struct MobileHeaderProps {
    pub menu_open: bool,
    pub on_toggle: Callback<()>,
}

/// Fixed top bar with the menu toggle, shown below the `lg` breakpoint
#[function_component(MobileHeader)]
pub fn mobile_header(props: &MobileHeaderProps) -> Html {
    let on_toggle = props.on_toggle.clone();
    let icon = if props.menu_open { "fas fa-times" } else { "fas fa-bars" };

    html! {
        <>
            <div class="lg:hidden bg-white border-b border-gray-200 px-4 py-3 flex items-center justify-between fixed top-0 left-0 right-0 z-40">
                <h1 class="text-lg font-bold text-gray-900">{"Shanghai Cloud Kitchen"}</h1>
                <button
                    aria-label="toggle menu"
                    class="btn btn-ghost btn-sm"
                    onclick={Callback::from(move |_: MouseEvent| on_toggle.emit(()))}
                >
                    <i class={classes!(icon, "text-xl")}></i>
                </button>
            </div>
            <div class="lg:hidden pt-16"></div>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub view_state: ViewState,
    pub on_select: Callback<&'static str>,
    pub on_close: Callback<()>,
}

#[function_component(MobileMenu)]
pub fn mobile_menu(props: &MobileMenuProps) -> Html {
    let on_close = props.on_close.clone();

    html! {
        <div class="lg:hidden fixed inset-0 z-30 bg-black bg-opacity-50">
            <div class="bg-white w-64 h-full p-6 overflow-y-auto">
                <div class="flex items-center justify-between mb-6">
                    <h2 class="text-xl font-bold text-gray-900">{"Menü"}</h2>
                    <button
                        aria-label="close menu"
                        class="btn btn-ghost btn-sm"
                        onclick={Callback::from(move |_: MouseEvent| on_close.emit(()))}
                    >
                        <i class="fas fa-times text-lg"></i>
                    </button>
                </div>
                <Navigation
                    view_state={props.view_state.clone()}
                    on_select={props.on_select.clone()}
                />
            </div>
        </div>
    }
}

/// Switches `/` between live API data and the built-in content, then reloads.
#[function_component(DataSourceToggle)]
fn data_source_toggle() -> Html {
    let current = settings::get_settings().data_source;
    let (label, next) = match current {
        DataSource::Api => ("Statik veriye geç", DataSource::Static),
        DataSource::Static => ("Canlı veriye geç", DataSource::Api),
    };

    let onclick = Callback::from(move |_: MouseEvent| {
        log::info!("Switching data source to {:?}", next);
        settings::update_settings(|s| s.data_source = next);
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                log::error!("Failed to reload after switching data source: {:?}", e);
            }
        }
    });

    html! {
        <button class="btn btn-ghost btn-sm w-full justify-start text-gray-500" {onclick}>
            <i class="fas fa-database w-5"></i>
            {label}
        </button>
    }
}
