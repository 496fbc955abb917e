use yew::prelude::*;

use crate::components::remote_image::RemoteImage;
use crate::components::reveal::Reveal;
use crate::components::scroll_reveal::ScrollReveal;
use crate::config;
use crate::content::FeatureSection;
use crate::motion::entrance::{stagger, Entrance};

#[derive(Properties, PartialEq)]
pub struct KhanShatyrProps {
    pub section: FeatureSection,
}

/// Interactive feature block: pick a fact on the left, the photo panel on
/// the right shows its detail.
#[function_component(KhanShatyrSection)]
pub fn khan_shatyr_section(props: &KhanShatyrProps) -> Html {
    let section = &props.section;
    let active = use_state(|| 0usize);

    let select = |index: usize| {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| {
            if *active != index {
                active.set(index);
            }
        })
    };

    let current = section.facts.get(*active);

    html! {
        <section class="khan-shatyr" id={section.id.clone()}>
            <style>
                {r#"
                    .khan-shatyr {
                        position: relative;
                        padding: 8rem 1rem;
                    }
                    .khan-shatyr .inner {
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .khan-shatyr h2 {
                        text-align: center;
                        font-size: clamp(2.5rem, 6vw, 4rem);
                        font-weight: 900;
                        margin: 0 0 1.5rem;
                        background: linear-gradient(90deg, #fcd34d, #fb923c, #f472b6);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .khan-shatyr .intro {
                        text-align: center;
                        font-size: 1.25rem;
                        color: #cbd5e1;
                        max-width: 40rem;
                        margin: 0 auto 4rem;
                    }
                    .khan-shatyr .layout {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    @media (min-width: 900px) {
                        .khan-shatyr .layout { grid-template-columns: 2fr 3fr; }
                    }
                    .khan-shatyr .fact {
                        display: flex;
                        gap: 1rem;
                        align-items: center;
                        width: 100%;
                        padding: 1.25rem 1.5rem;
                        margin-bottom: 1rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(251, 146, 60, 0.15);
                        background: rgba(15, 23, 42, 0.5);
                        color: #e2e8f0;
                        font-size: 1.1rem;
                        text-align: left;
                        cursor: pointer;
                        transition: transform 0.3s ease, border-color 0.3s ease, background 0.3s ease;
                    }
                    .khan-shatyr .fact:hover {
                        transform: translateX(8px);
                    }
                    .khan-shatyr .fact.active {
                        border-color: rgba(251, 146, 60, 0.6);
                        background: rgba(251, 146, 60, 0.12);
                    }
                    .khan-shatyr .fact .icon {
                        font-size: 1.75rem;
                    }
                    .khan-shatyr .panel {
                        position: relative;
                        min-height: 26rem;
                        border-radius: 1.5rem;
                        overflow: hidden;
                    }
                    .khan-shatyr .panel img,
                    .khan-shatyr .panel .image-fallback {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .khan-shatyr .panel .detail {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        padding: 2rem;
                        background: linear-gradient(to top, rgba(2, 6, 23, 0.95), transparent);
                        animation: detailIn 0.5s ease-out;
                    }
                    .khan-shatyr .panel .detail h3 {
                        margin: 0 0 0.5rem;
                        font-size: 1.75rem;
                        color: #fdba74;
                    }
                    .khan-shatyr .panel .detail p {
                        margin: 0;
                        color: #e2e8f0;
                        line-height: 1.6;
                    }
                    @keyframes detailIn {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                "#}
            </style>
            <div class="inner">
                <Reveal entrance={Entrance::slide_up(50.0)}>
                    <h2>{ &section.heading }</h2>
                </Reveal>
                <ScrollReveal class="intro" text={section.intro.clone()} />
                <div class="layout">
                    <div>
                        { for section.facts.iter().enumerate().map(|(i, fact)| html! {
                            <Reveal key={i} entrance={Entrance::slide_up(30.0).duration(0.5).delay(stagger(i, config::STAGGER_STEP_S))}>
                                <button
                                    class={classes!("fact", (i == *active).then_some("active"))}
                                    onmouseenter={select(i)}
                                    onclick={select(i)}
                                >
                                    <span class="icon">{ &fact.icon }</span>
                                    <span>{ &fact.title }</span>
                                </button>
                            </Reveal>
                        }) }
                    </div>
                    <Reveal entrance={Entrance::scale(0.9)} class="panel">
                        <RemoteImage src={section.image.clone()} alt={section.heading.clone()} />
                        {
                            if let Some(fact) = current {
                                html! {
                                    <div class="detail" key={*active}>
                                        <h3>{ &fact.title }</h3>
                                        <p>{ &fact.detail }</p>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
