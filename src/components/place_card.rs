use yew::prelude::*;

use crate::components::remote_image::RemoteImage;
use crate::components::reveal::Reveal;
use crate::content::Place;
use crate::motion::entrance::Entrance;

#[derive(Properties, PartialEq)]
pub struct PlaceCardProps {
    pub place: Place,
    #[prop_or_default]
    pub delay: f64,
}

#[function_component(PlaceCard)]
pub fn place_card(props: &PlaceCardProps) -> Html {
    let place = &props.place;
    let entrance = Entrance::slide_up(50.0).duration(0.6).delay(props.delay);

    html! {
        <Reveal {entrance} class="place-card-wrapper">
            <style>
                {r#"
                    .place-card {
                        position: relative;
                        height: 100%;
                        border-radius: 1.5rem;
                        overflow: hidden;
                        background: rgba(15, 23, 42, 0.6);
                        border: 1px solid rgba(148, 163, 184, 0.15);
                        backdrop-filter: blur(12px);
                        transition: transform 0.4s ease, border-color 0.4s ease, box-shadow 0.4s ease;
                    }
                    .place-card:hover {
                        transform: translateY(-10px);
                        border-color: rgba(34, 211, 238, 0.5);
                        box-shadow: 0 20px 40px rgba(34, 211, 238, 0.15);
                    }
                    .place-card .photo {
                        position: relative;
                        height: 16rem;
                        overflow: hidden;
                    }
                    .place-card .photo img,
                    .place-card .photo .image-fallback {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.7s ease;
                    }
                    .place-card:hover .photo img {
                        transform: scale(1.1);
                    }
                    .place-card .photo::after {
                        content: "";
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(2, 6, 23, 0.9), transparent 60%);
                    }
                    .place-card .badge {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        z-index: 1;
                        width: 3rem;
                        height: 3rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 1rem;
                        font-size: 1.5rem;
                        background: rgba(34, 211, 238, 0.2);
                        backdrop-filter: blur(8px);
                        transition: transform 0.5s ease;
                    }
                    .place-card:hover .badge {
                        transform: rotate(360deg);
                    }
                    .place-card .body {
                        padding: 1.5rem;
                    }
                    .place-card h3 {
                        margin: 0 0 0.75rem;
                        color: #e2e8f0;
                        font-size: 1.5rem;
                    }
                    .place-card p {
                        margin: 0;
                        color: #94a3b8;
                        line-height: 1.6;
                    }
                "#}
            </style>
            <article class="place-card">
                <div class="photo">
                    <RemoteImage src={place.image.clone()} alt={place.title.clone()} />
                    <div class="badge">{ &place.icon }</div>
                </div>
                <div class="body">
                    <h3>{ &place.title }</h3>
                    <p>{ &place.description }</p>
                </div>
            </article>
        </Reveal>
    }
}
