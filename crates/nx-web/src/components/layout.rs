use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::icons::*;

/// Shared layout: sidebar + main content outlet.
/// Used as the view for the root `ParentRoute`.
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class="flex min-h-screen">
            <Sidebar/>
            <main class="flex-1 overflow-auto">
                <Outlet/>
            </main>
        </div>
    }
}

/// Determine the current request path (SSR only).
fn current_path() -> String {
    #[cfg(feature = "ssr")]
    {
        use_context::<axum::http::request::Parts>()
            .map(|p| p.uri.path().to_string())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "ssr"))]
    {
        String::new()
    }
}

/// Returns CSS class for a nav link based on active state.
fn nav_class(href: &str, current: &str) -> &'static str {
    let active = if href == "/" {
        current == "/"
    } else {
        current.starts_with(href)
    };
    if active {
        "flex items-center gap-3 px-4 py-2 text-sm border-l-[3px] border-blue-400 bg-gray-700/50 text-white"
    } else {
        "flex items-center gap-3 px-4 py-2 text-sm text-gray-400 hover:bg-gray-700/30 hover:text-white border-l-[3px] border-transparent"
    }
}

/// Sidebar navigation.
#[component]
fn Sidebar() -> impl IntoView {
    let path = current_path();

    view! {
        <aside class="w-64 bg-gray-800 border-r border-gray-700 flex flex-col min-h-screen shrink-0">
            // Header
            <div class="px-4 py-4 border-b border-gray-700">
                <h1 class="text-lg font-bold text-white">"NetExplorer"</h1>
                <p class="text-xs text-gray-400">"mixnet directory explorer"</p>
            </div>

            // Navigation
            <nav class="flex-1 py-4 overflow-y-auto">
                <div class="mb-2">
                    <p class="px-4 py-1 text-xs font-semibold text-gray-500 uppercase tracking-wider">"Network"</p>
                    <a href="/" class=nav_class("/", &path)>
                        <IconDashboard class="w-5 h-5"/><span>"Overview"</span>
                    </a>
                    <a href="/gateways" class=nav_class("/gateways", &path)>
                        <IconServer class="w-5 h-5"/><span>"Gateways"</span>
                    </a>
                </div>
            </nav>

            // Footer
            <div class="border-t border-gray-700 px-4 py-3">
                <p class="text-xs text-gray-500">{format!("v{}", env!("CARGO_PKG_VERSION"))}</p>
            </div>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_class_root_only_active_on_root() {
        assert!(nav_class("/", "/").contains("border-blue-400"));
        assert!(!nav_class("/", "/gateways").contains("border-blue-400"));
    }

    #[test]
    fn test_nav_class_prefix_match() {
        assert!(nav_class("/gateways", "/gateways").contains("border-blue-400"));
        assert!(!nav_class("/gateways", "/").contains("border-blue-400"));
    }
}
