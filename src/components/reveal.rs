use yew::prelude::*;

use crate::hooks::use_in_view;
use crate::motion::entrance::Entrance;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub entrance: Entrance,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Pixels trimmed off the top and bottom of the viewport before the
    /// wrapper counts as in view.
    #[prop_or_default]
    pub margin: f64,
    #[prop_or_default]
    pub children: Children,
}

/// Plays `entrance` once, the first time the wrapper scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let shown = use_in_view(node.clone(), props.margin);

    html! {
        <div ref={node} id={props.id.clone()} class={props.class.clone()} style={props.entrance.style(shown)}>
            { for props.children.iter() }
        </div>
    }
}
