use leptos::prelude::*;

use crate::components::heading::Heading;

/// Gateways page. Only the heading for now; the gateway table is not
/// wired up yet (it will list the directory topology's gateways).
#[component]
pub fn GatewaysPage() -> impl IntoView {
    view! {
        <div class="p-6">
            <Heading variant="h5" class="mb-2">"Gateways"</Heading>
            // <GatewaysGrid loading=false columns=gateway_columns()/>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render() -> String {
        view! { <GatewaysPage/> }.to_html()
    }

    #[test]
    fn test_renders_single_h5_heading() {
        let html = render();
        assert_eq!(html.matches("<h5").count(), 1);
        assert!(html.contains("Gateways"));
    }

    #[test]
    fn test_heading_carries_bottom_margin() {
        let html = render();
        assert!(html.contains("mb-2"));
    }

    #[test]
    fn test_no_grid_markup() {
        let html = render();
        assert!(!html.contains("<table"));
        assert!(!html.contains("<tbody"));
    }

    #[test]
    fn test_render_is_idempotent() {
        assert_eq!(render(), render());
    }
}
