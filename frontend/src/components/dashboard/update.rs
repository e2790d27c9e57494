//! Update function for the dashboard component.
//!
//! Every message ends up in `Dashboard::update`; the commands it returns are
//! run here. Backend exchanges and timers are spawned on the local executor
//! and report back through the component link.

use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use dashboard_sync::runtime::perform;
use dashboard_sync::{Command, Msg as CoreMsg};

use super::helpers::{selected_file_count, upload_form};
use super::messages::Msg;
use super::state::DashboardComponent;

pub fn update(component: &mut DashboardComponent, ctx: &Context<DashboardComponent>, msg: Msg) -> bool {
    let commands = match msg {
        Msg::ConfigLoaded(config) => {
            component.configure(&config);
            component.dashboard.init()
        }
        Msg::Core(msg) => component.dashboard.update(msg),
        Msg::UploadClicked => {
            let file_count = selected_file_count(&component.file_input_ref);
            component.dashboard.update(CoreMsg::UploadRequested { file_count })
        }
    };
    for command in commands {
        run(component, ctx, command);
    }
    true
}

fn run(component: &DashboardComponent, ctx: &Context<DashboardComponent>, command: Command) {
    let link = ctx.link().clone();
    match command {
        Command::Fetch(request) => {
            let backend = component.backend.clone();
            spawn_local(async move {
                let msg = perform(backend.as_ref(), request).await;
                link.send_message(Msg::Core(msg));
            });
        }
        Command::Upload => {
            let form = match upload_form(&component.file_input_ref) {
                Ok(form) => form,
                Err(err) => {
                    link.send_message(Msg::Core(CoreMsg::UploadFinished(Err(err))));
                    return;
                }
            };
            let backend = component.backend.clone();
            spawn_local(async move {
                let result = backend.upload(form).await;
                link.send_message(Msg::Core(CoreMsg::UploadFinished(result)));
            });
        }
        Command::ExpireNotice {
            scope,
            generation,
            after_ms,
        } => {
            spawn_local(async move {
                TimeoutFuture::new(after_ms).await;
                link.send_message(Msg::Core(CoreMsg::NoticeExpired { scope, generation }));
            });
        }
    }
}
