use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::InfoGroup;
use crate::motion::entrance::Entrance;

#[derive(Properties, PartialEq)]
pub struct InfoSectionProps {
    pub group: InfoGroup,
    #[prop_or_default]
    pub delay: f64,
}

/// Card listing one infrastructure area.
#[function_component(InfoSection)]
pub fn info_section(props: &InfoSectionProps) -> Html {
    let group = &props.group;
    let entrance = Entrance::slide_up(50.0).duration(0.6).delay(props.delay);

    html! {
        <Reveal {entrance}>
            <style>
                {r#"
                    .info-card {
                        height: 100%;
                        padding: 2rem;
                        border-radius: 1.5rem;
                        background: linear-gradient(135deg, rgba(16, 185, 129, 0.08), rgba(20, 184, 166, 0.05));
                        border: 1px solid rgba(52, 211, 153, 0.2);
                        transition: transform 0.3s ease, border-color 0.3s ease;
                    }
                    .info-card:hover {
                        transform: translateY(-8px);
                        border-color: rgba(52, 211, 153, 0.5);
                    }
                    .info-card .icon {
                        font-size: 2.5rem;
                        margin-bottom: 1rem;
                    }
                    .info-card h3 {
                        margin: 0 0 1rem;
                        color: #6ee7b7;
                    }
                    .info-card ul {
                        margin: 0;
                        padding: 0;
                        list-style: none;
                    }
                    .info-card li {
                        display: flex;
                        gap: 0.75rem;
                        padding: 0.4rem 0;
                        color: #cbd5e1;
                        transition: transform 0.2s ease;
                    }
                    .info-card li:hover {
                        transform: translateX(6px);
                    }
                    .info-card li::before {
                        content: "";
                        flex: none;
                        width: 6px;
                        height: 6px;
                        margin-top: 0.55rem;
                        border-radius: 50%;
                        background: #34d399;
                    }
                "#}
            </style>
            <div class="info-card">
                <div class="icon">{ &group.icon }</div>
                <h3>{ &group.title }</h3>
                <ul>
                    { for group.items.iter().map(|item| html! { <li>{ item }</li> }) }
                </ul>
            </div>
        </Reveal>
    }
}
