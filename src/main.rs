use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

mod config;
mod content;
mod forms;
mod hooks;
mod motion;
mod components {
    pub mod animated_background;
    pub mod contact_form;
    pub mod info_section;
    pub mod khan_shatyr;
    pub mod loading_screen;
    pub mod mouse_follower;
    pub mod parallax_text;
    pub mod place_card;
    pub mod progress_bar;
    pub mod remote_image;
    pub mod reveal;
    pub mod scroll_reveal;
}
mod pages {
    pub mod showcase;
}

use components::{
    loading_screen::LoadingScreen,
    mouse_follower::MouseFollower,
    progress_bar::ProgressBar,
};
use content::Variant;
use motion::gate::LoadingGate;
use pages::showcase::Showcase;

#[function_component]
fn App() -> Html {
    let gate = use_state(LoadingGate::new);
    let content = use_memo(
        |_| {
            let variant = Variant::from_document();
            info!("Loading {} page content", variant.name());
            variant.load().map(Rc::new)
        },
        (),
    );

    let on_loaded = {
        let gate = gate.clone();
        Callback::from(move |_: ()| {
            let mut next = *gate;
            if next.complete() {
                info!("Loading finished, showing page");
                gate.set(next);
            }
        })
    };

    let title = match &*content {
        Ok(page) => page.title.clone(),
        Err(_) => "ASTANA".to_string(),
    };

    if gate.is_loading() {
        return html! { <LoadingScreen {title} on_complete={on_loaded} /> };
    }

    match &*content {
        Ok(page) => html! {
            <>
                <MouseFollower />
                <ProgressBar />
                <Showcase content={Rc::clone(page)} />
            </>
        },
        Err(e) => {
            error!("Page content unavailable: {}", e);
            unavailable(&title)
        }
    }
}

fn unavailable(title: &str) -> Html {
    html! {
        <div style="min-height: 100vh; display: flex; align-items: center; justify-content: center; background: #020617; color: #cbd5e1; font-family: sans-serif;">
            <div style="text-align: center;">
                <h1 style="font-size: 4rem; margin: 0 0 1rem;">{ title }</h1>
                <p>{"This page could not be prepared. Please try again later."}</p>
            </div>
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if console_log::init_with_level(config::log_level()).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
