use yew::prelude::*;

use crate::hooks::use_page_progress;

#[function_component(ProgressBar)]
pub fn progress_bar() -> Html {
    let progress = use_page_progress();

    html! {
        <>
            <style>
                {r#"
                    .scroll-progress {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 4px;
                        z-index: 50;
                        transform-origin: 0 50%;
                        background: linear-gradient(90deg, #22d3ee, #3b82f6, #9333ea);
                        transition: transform 0.1s linear;
                    }
                "#}
            </style>
            <div class="scroll-progress" style={format!("transform: scaleX({:.4});", progress)}></div>
        </>
    }
}
