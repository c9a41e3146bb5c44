use leptos::prelude::*;

/// Navigational tile: whole card is a link.
#[component]
pub fn LinkCard(
    href: &'static str,
    title: &'static str,
    #[prop(optional)] icon: Option<fn() -> AnyView>,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=href
            class="block bg-gray-800 border border-gray-700 hover:border-gray-500 transition-colors"
        >
            <div class="flex items-center gap-2 px-4 py-3 border-b border-gray-700 bg-gray-800/60">
                {icon.map(|f| f())}
                <h3 class="font-semibold text-sm">{title}</h3>
            </div>
            <div class="p-4 text-sm text-gray-400">
                {children()}
            </div>
        </a>
    }
}

/// Static info tile.
#[component]
pub fn InfoCard(
    title: &'static str,
    #[prop(optional)] icon: Option<fn() -> AnyView>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 border border-gray-700">
            <div class="flex items-center gap-2 px-4 py-3 border-b border-gray-700 bg-gray-800/60">
                {icon.map(|f| f())}
                <h3 class="font-semibold text-sm">{title}</h3>
            </div>
            <div class="p-4">
                {children()}
            </div>
        </div>
    }
}
