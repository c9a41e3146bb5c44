use leptos::prelude::*;

/// Typographic primitive: a section heading. `variant` picks the element
/// (`h1`..`h6`) and its size/weight classes; `class` appends caller
/// utilities (spacing, color). Unknown variants fall back to `h2`.
#[component]
pub fn Heading(
    variant: &'static str,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let size = match variant {
        "h1" => "text-3xl font-bold",
        "h2" => "text-2xl font-semibold",
        "h3" => "text-xl font-semibold",
        "h4" => "text-lg font-semibold",
        "h5" => "text-base font-semibold",
        "h6" => "text-sm font-semibold",
        _ => "text-2xl font-semibold",
    };
    let class = format!("{size} {class}");

    match variant {
        "h1" => view! { <h1 class=class>{children()}</h1> }.into_any(),
        "h3" => view! { <h3 class=class>{children()}</h3> }.into_any(),
        "h4" => view! { <h4 class=class>{children()}</h4> }.into_any(),
        "h5" => view! { <h5 class=class>{children()}</h5> }.into_any(),
        "h6" => view! { <h6 class=class>{children()}</h6> }.into_any(),
        _ => view! { <h2 class=class>{children()}</h2> }.into_any(),
    }
}
