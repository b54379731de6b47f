use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="text-center py-8 border-t border-gray-200">
            <p class="text-gray-600 text-sm">
                {"Bu sunum gizlidir ve sadece potansiyel yatırımcılar için hazırlanmıştır."}
            </p>
            <p class="text-gray-500 text-xs mt-2">{"Shanghai Cloud Kitchen Project © 2024"}</p>
        </footer>
    }
}
