use leptos::prelude::*;

use crate::components::card::{InfoCard, LinkCard};
use crate::components::heading::Heading;
use crate::components::icons::*;
use crate::types::OverviewData;

fn icon_info() -> AnyView {
    view! { <IconInfo class="w-5 h-5 text-blue-400"/> }.into_any()
}
fn icon_globe() -> AnyView {
    view! { <IconGlobe class="w-5 h-5 text-cyan-400"/> }.into_any()
}
fn icon_server() -> AnyView {
    view! { <IconServer class="w-5 h-5 text-emerald-400"/> }.into_any()
}

#[component]
pub fn OverviewPage() -> impl IntoView {
    let data = Resource::new(|| (), |_| get_overview_data());

    view! {
        <div class="p-6">
            <Heading variant="h5" class="mb-2">"Overview"</Heading>
            <Suspense fallback=|| view! { <div class="text-gray-400">"Loading..."</div> }>
                {move || Suspend::new(async move {
                    match data.await {
                        Ok(d) => view! { <OverviewContent data=d/> }.into_any(),
                        Err(e) => view! {
                            <div class="text-red-400">{e.to_string()}</div>
                        }.into_any(),
                    }
                })}
            </Suspense>
        </div>
    }
}

/// Use the server function type to call the function
async fn get_overview_data() -> Result<OverviewData, ServerFnError> {
    crate::server_fns::overview::get_overview_data().await
}

#[component]
fn OverviewContent(data: OverviewData) -> impl IntoView {
    let OverviewData {
        version,
        directory_url,
    } = data;

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4">
            <InfoCard title="Explorer" icon=icon_info>
                <p class="text-sm text-gray-400">"Version"</p>
                <p class="text-sm text-white">{format!("v{version}")}</p>
            </InfoCard>
            <InfoCard title="Directory" icon=icon_globe>
                <p class="text-sm text-gray-400">"Endpoint"</p>
                <p class="text-sm text-white break-all">{directory_url}</p>
            </InfoCard>
            <LinkCard href="/gateways" title="Gateways" icon=icon_server>
                "Browse the gateways announced to the directory."
            </LinkCard>
        </div>
    }
}
