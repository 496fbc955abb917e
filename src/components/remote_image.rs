use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RemoteImageProps {
    pub src: String,
    pub alt: String,
    #[prop_or_default]
    pub class: Classes,
}

/// Image from a remote host. When the fetch fails it is replaced by a
/// gradient placeholder carrying the alt text instead of a broken icon.
#[function_component(RemoteImage)]
pub fn remote_image(props: &RemoteImageProps) -> Html {
    let failed = use_state(|| false);

    let onerror = {
        let failed = failed.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            log::warn!("image failed to load: {}", src);
            failed.set(true);
        })
    };

    // a new source gets a fresh attempt
    {
        let failed = failed.clone();
        use_effect_with_deps(
            move |_| {
                failed.set(false);
                || ()
            },
            props.src.clone(),
        );
    }

    if *failed {
        html! {
            <div class={classes!("image-fallback", props.class.clone())} role="img" aria-label={props.alt.clone()}>
                <style>
                    {r#"
                        .image-fallback {
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            background: linear-gradient(135deg, rgba(34, 211, 238, 0.25), rgba(147, 51, 234, 0.25));
                            color: rgba(226, 232, 240, 0.8);
                            font-weight: 600;
                            text-align: center;
                            padding: 1rem;
                        }
                    "#}
                </style>
                <span>{ &props.alt }</span>
            </div>
        }
    } else {
        html! {
            <img src={props.src.clone()} alt={props.alt.clone()} loading="lazy" class={props.class.clone()} {onerror} />
        }
    }
}
