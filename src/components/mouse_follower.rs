use std::cell::RefCell;
use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::motion::follow::Follower;

/// Soft glow that trails the pointer around the page.
#[function_component(MouseFollower)]
pub fn mouse_follower() -> Html {
    let follower = use_mut_ref(Follower::default);
    let position = use_state(|| (0.0_f64, 0.0_f64));
    let visible = use_state(|| false);

    {
        let follower = follower.clone();
        let visible = visible.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            follower
                .borrow_mut()
                .set_target(e.client_x() as f64, e.client_y() as f64);
            if !*visible {
                visible.set(true);
            }
        });
    }

    {
        let position = position.clone();
        let follower: Rc<RefCell<Follower>> = follower.clone();
        use_interval(
            move || {
                let mut follower = follower.borrow_mut();
                if follower.step(config::FRAME_MS as f64) {
                    position.set((follower.x, follower.y));
                }
            },
            config::FRAME_MS,
        );
    }

    let (x, y) = *position;
    let style = format!(
        "transform: translate({:.1}px, {:.1}px); opacity: {};",
        x - 150.0,
        y - 150.0,
        if *visible { 1 } else { 0 }
    );

    html! {
        <>
            <style>
                {r#"
                    .mouse-follower {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 300px;
                        height: 300px;
                        border-radius: 50%;
                        pointer-events: none;
                        z-index: 1;
                        background: radial-gradient(circle, rgba(34, 211, 238, 0.15) 0%, rgba(59, 130, 246, 0.08) 40%, transparent 70%);
                        filter: blur(20px);
                        transition: opacity 0.6s ease;
                        will-change: transform;
                    }
                    @media (hover: none) {
                        .mouse-follower { display: none; }
                    }
                "#}
            </style>
            <div class="mouse-follower" {style}></div>
        </>
    }
}
