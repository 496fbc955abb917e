use yew::prelude::*;

use crate::config;
use crate::hooks::use_scroll_reveal;
use crate::motion::scroll::ScrollOffsets;

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Seconds the first reveal waits once the element enters the window.
    #[prop_or_default]
    pub delay: f64,
}

/// Text whose opacity and vertical offset track how far it has scrolled
/// into the viewport.
#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node = use_node_ref();
    let offsets = use_memo(
        |_| {
            ScrollOffsets::parse(config::REVEAL_START, config::REVEAL_END).unwrap_or_else(|e| {
                log::error!("bad reveal offsets: {}", e);
                ScrollOffsets::default()
            })
        },
        (),
    );
    let frame = use_scroll_reveal(node.clone(), *offsets, props.delay);

    let style = format!(
        "{} transition: opacity 0.1s linear, transform 0.1s linear;",
        frame.style()
    );

    html! {
        <div ref={node} class={props.class.clone()} {style}>
            { props.text.clone() }
        </div>
    }
}
