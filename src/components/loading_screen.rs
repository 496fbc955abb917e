use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::config;
use crate::hooks::now_ms;
use crate::motion::gate::LoadingProgress;

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    pub title: AttrValue,
    pub on_complete: Callback<()>,
}

/// Full-screen counter shown before the page. Counts to 100%, fades out
/// and then fires `on_complete` exactly once.
#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    let percent = use_state(|| 0u32);
    let fading = use_state(|| false);

    {
        let percent = percent.clone();
        let fading = fading.clone();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |_| {
                let progress = LoadingProgress::new(config::LOADING_DURATION_MS as f64);
                let started = now_ms();
                let fade: Rc<Cell<Option<Timeout>>> = Rc::new(Cell::new(None));

                let ticker = {
                    let fade = fade.clone();
                    let mut finished = false;
                    Interval::new(config::FRAME_MS, move || {
                        if finished {
                            return;
                        }
                        let elapsed = now_ms() - started;
                        percent.set(progress.percent(elapsed));
                        if progress.is_done(elapsed) {
                            finished = true;
                            fading.set(true);
                            let on_complete = on_complete.clone();
                            fade.set(Some(Timeout::new(config::LOADING_FADE_MS, move || {
                                log::debug!("loading screen done");
                                on_complete.emit(());
                            })));
                        }
                    })
                };

                move || {
                    drop(ticker);
                    // dropping a pending Timeout cancels it
                    drop(fade.take());
                }
            },
            (),
        );
    }

    let class = classes!("loading-screen", (*fading).then_some("fading"));

    html! {
        <div {class}>
            <style>
                {r#"
                    .loading-screen {
                        position: fixed;
                        inset: 0;
                        z-index: 100;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 2rem;
                        background: #020617;
                        color: white;
                        opacity: 1;
                        transition: opacity 0.5s ease-out;
                    }
                    .loading-screen.fading {
                        opacity: 0;
                    }
                    .loading-title {
                        font-size: clamp(3rem, 10vw, 6rem);
                        font-weight: 900;
                        letter-spacing: 0.2em;
                        background: linear-gradient(90deg, #67e8f9, #60a5fa, #a855f7);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                        animation: loadingPulse 2s ease-in-out infinite;
                    }
                    @keyframes loadingPulse {
                        0%, 100% { opacity: 0.6; transform: scale(0.98); }
                        50% { opacity: 1; transform: scale(1); }
                    }
                    .loading-track {
                        width: min(320px, 70vw);
                        height: 4px;
                        border-radius: 2px;
                        background: rgba(148, 163, 184, 0.2);
                        overflow: hidden;
                    }
                    .loading-fill {
                        height: 100%;
                        background: linear-gradient(90deg, #22d3ee, #3b82f6, #9333ea);
                        transform-origin: 0 50%;
                    }
                    .loading-percent {
                        font-variant-numeric: tabular-nums;
                        color: #94a3b8;
                    }
                "#}
            </style>
            <div class="loading-title">{ props.title.clone() }</div>
            <div class="loading-track">
                <div class="loading-fill" style={format!("transform: scaleX({});", *percent as f64 / 100.0)}></div>
            </div>
            <div class="loading-percent">{ format!("{}%", *percent) }</div>
        </div>
    }
}
