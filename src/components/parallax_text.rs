use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::Closure;
use yew::prelude::*;

use crate::config;
use crate::hooks::{listen_window, now_ms};
use crate::motion::ticker::{ScrollVelocity, Ticker};

#[derive(Properties, PartialEq)]
pub struct ParallaxTextProps {
    pub text: AttrValue,
    /// Percent of the strip per second, signed.
    pub base_velocity: f64,
}

/// Endless horizontal strip of repeated text. Drifts on its own and is
/// pushed along (or reversed) by scrolling.
#[function_component(ParallaxText)]
pub fn parallax_text(props: &ParallaxTextProps) -> Html {
    let translate_x = use_state(|| -100.0 / config::TICKER_COPIES as f64);

    {
        let translate_x = translate_x.clone();
        use_effect_with_deps(
            move |base_velocity: &f64| {
                let loop_width = 100.0 / config::TICKER_COPIES as f64;
                let ticker = Rc::new(RefCell::new(Ticker::new(*base_velocity, loop_width)));
                let velocity = Rc::new(RefCell::new(ScrollVelocity::new()));

                let stop_listening = {
                    let velocity = velocity.clone();
                    listen_window(
                        &["scroll"],
                        Closure::<dyn Fn()>::new(move || {
                            if let Some(y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                                velocity.borrow_mut().sample(y, now_ms());
                            }
                        }),
                    )
                };

                let last_frame = Rc::new(RefCell::new(now_ms()));
                let frames = Interval::new(config::FRAME_MS, move || {
                    let now = now_ms();
                    let dt = now - last_frame.replace(now);
                    let factor = {
                        let mut velocity = velocity.borrow_mut();
                        velocity.tick(now, dt);
                        velocity.factor()
                    };
                    let mut ticker = ticker.borrow_mut();
                    ticker.advance(dt, factor);
                    translate_x.set(ticker.translate_x());
                });

                move || {
                    drop(frames);
                    stop_listening();
                }
            },
            props.base_velocity,
        );
    }

    html! {
        <div class="parallax">
            <style>
                {r#"
                    .parallax {
                        overflow: hidden;
                        white-space: nowrap;
                        display: flex;
                        flex-wrap: nowrap;
                        padding: 4rem 0;
                    }
                    .parallax .scroller {
                        display: flex;
                        flex-wrap: nowrap;
                        white-space: nowrap;
                        font-weight: 900;
                        font-size: clamp(3rem, 8vw, 6rem);
                        text-transform: uppercase;
                        color: transparent;
                        -webkit-text-stroke: 1px rgba(34, 211, 238, 0.35);
                        will-change: transform;
                    }
                    .parallax .scroller span {
                        display: block;
                        margin-right: 3rem;
                    }
                "#}
            </style>
            <div class="scroller" style={format!("transform: translateX({:.3}%);", *translate_x)}>
                { for (0..config::TICKER_COPIES).map(|i| html! {
                    <span key={i}>{ props.text.clone() }</span>
                }) }
            </div>
        </div>
    }
}
