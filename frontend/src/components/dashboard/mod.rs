//! Dashboard component: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering and helpers.
//!
//! All dashboard behavior lives in `dashboard_sync::Dashboard`; this
//! component owns one, forwards DOM events to it as messages and performs the
//! effects it asks for (HTTP exchanges, the upload, notice timers).
//!
//! On first render the runtime configuration is fetched from the host; the
//! initial load starts once it has arrived (or the defaults were taken).

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::config::ClientConfig;

mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::DashboardComponent;

/// Served by the host next to the bundle.
const CONFIG_PATH: &str = "/dashboard/config";

impl Component for DashboardComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        DashboardComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                let config = match Request::get(CONFIG_PATH).send().await {
                    Ok(resp) if resp.ok() => resp.json::<ClientConfig>().await.ok(),
                    _ => None,
                };
                let config = config.unwrap_or_else(|| {
                    log::warn!("no runtime config at {CONFIG_PATH}, using defaults");
                    ClientConfig::default()
                });
                link.send_message(Msg::ConfigLoaded(config));
            });
        }
    }
}
