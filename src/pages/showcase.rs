use std::rc::Rc;

use yew::prelude::*;

use crate::components::{
    animated_background::AnimatedBackground,
    contact_form::ContactForm,
    info_section::InfoSection,
    khan_shatyr::KhanShatyrSection,
    parallax_text::ParallaxText,
    place_card::PlaceCard,
    reveal::Reveal,
};
use crate::config;
use crate::content::{
    Footer, GallerySection, InfoGrid, PageContent, Section, StatsSection, WhySection,
};
use crate::motion::entrance::{stagger, Entrance};

#[derive(Properties, PartialEq)]
pub struct ShowcaseProps {
    pub content: Rc<PageContent>,
}

/// The whole page: hero followed by whatever sections the content lists.
#[function_component(Showcase)]
pub fn showcase(props: &ShowcaseProps) -> Html {
    let content = &props.content;

    html! {
        <div class="showcase">
            <style>
                {r#"
                    .showcase {
                        min-height: 100vh;
                        overflow-x: hidden;
                        background: #020617;
                        color: white;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .showcase .section {
                        position: relative;
                        padding: 5rem 1rem;
                    }
                    .showcase .container {
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .showcase .section-head {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .showcase .section-head h2 {
                        display: inline-block;
                        margin: 0 0 1.5rem;
                        font-size: clamp(2.25rem, 5vw, 3.5rem);
                        font-weight: 900;
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                        transition: transform 0.3s ease;
                    }
                    .showcase .section-head h2:hover {
                        transform: scale(1.05);
                    }
                    .showcase .section-head p {
                        max-width: 48rem;
                        margin: 0 auto;
                        font-size: 1.25rem;
                        color: #cbd5e1;
                    }
                    .showcase .grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    @media (min-width: 768px) {
                        .showcase .grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 1024px) {
                        .showcase .grid { grid-template-columns: repeat(3, 1fr); }
                    }

                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 5rem 1rem 0;
                        overflow: hidden;
                        text-align: center;
                    }
                    .hero .content {
                        position: relative;
                        z-index: 10;
                        max-width: 64rem;
                    }
                    .hero .badge {
                        display: inline-flex;
                        gap: 0.5rem;
                        align-items: center;
                        padding: 0.75rem 1.5rem;
                        margin-bottom: 2rem;
                        border-radius: 999px;
                        border: 1px solid rgba(34, 211, 238, 0.3);
                        background: linear-gradient(90deg, rgba(6, 182, 212, 0.1), rgba(59, 130, 246, 0.1));
                        color: #67e8f9;
                        font-weight: 500;
                        transition: transform 0.3s ease;
                    }
                    .hero .badge:hover { transform: scale(1.05); }
                    .hero h1 {
                        margin: 0 0 2rem;
                        font-size: clamp(4rem, 14vw, 8rem);
                        font-weight: 900;
                        background: linear-gradient(90deg, #67e8f9, #60a5fa, #a855f7);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .hero .tagline {
                        margin: 0 0 3rem;
                        font-size: clamp(1.25rem, 2.5vw, 1.5rem);
                        line-height: 1.6;
                        color: #cbd5e1;
                    }
                    .hero .cta-wrap {
                        position: relative;
                        display: inline-block;
                    }
                    .hero .cta-glow {
                        position: absolute;
                        inset: 0;
                        border-radius: 0.5rem;
                        background: linear-gradient(90deg, #06b6d4, #3b82f6);
                        filter: blur(8px);
                        animation: ctaGlow 2s ease-in-out infinite;
                    }
                    @keyframes ctaGlow {
                        0%, 100% { opacity: 0.5; }
                        50% { opacity: 1; }
                    }
                    .hero .cta {
                        position: relative;
                        display: inline-block;
                        padding: 1rem 2rem;
                        border-radius: 0.5rem;
                        background: #020617;
                        color: #22d3ee;
                        font-weight: 600;
                        text-decoration: none;
                        transition: transform 0.2s ease;
                    }
                    .hero .cta:hover { transform: scale(1.05); }
                    .hero .cta:active { transform: scale(0.95); }
                    .hero .scroll-hint {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        font-size: 2rem;
                        color: #22d3ee;
                        animation: scrollHint 2s ease-in-out infinite;
                    }
                    @keyframes scrollHint {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, 12px); }
                    }

                    .stat {
                        position: relative;
                        height: 100%;
                        box-sizing: border-box;
                        padding: 2rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(34, 211, 238, 0.2);
                        background: linear-gradient(135deg, rgba(6, 182, 212, 0.1), rgba(59, 130, 246, 0.1));
                        transition: transform 0.3s ease, border-color 0.3s ease;
                    }
                    .stat:hover {
                        transform: translateY(-10px);
                        border-color: rgba(34, 211, 238, 0.5);
                    }
                    .stat .icon { font-size: 3rem; margin-bottom: 1rem; }
                    .stat .value {
                        font-size: 2.25rem;
                        font-weight: 900;
                        margin-bottom: 0.5rem;
                        background: linear-gradient(90deg, #67e8f9, #60a5fa);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .stat .label { color: #94a3b8; }

                    .why-card {
                        padding: 3rem;
                        border-radius: 1.5rem;
                        border: 1px solid rgba(96, 165, 250, 0.2);
                        background: linear-gradient(135deg, rgba(59, 130, 246, 0.1), rgba(168, 85, 247, 0.1), rgba(236, 72, 153, 0.1));
                        transition: transform 0.4s ease;
                    }
                    .why-card:hover { transform: scale(1.02); }
                    .why-card h2 {
                        text-align: center;
                        margin: 0 0 3rem;
                        font-size: clamp(2rem, 5vw, 3rem);
                        background: linear-gradient(90deg, #60a5fa, #c084fc);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .reason {
                        text-align: center;
                        transition: transform 0.3s ease;
                    }
                    .reason:hover { transform: translateY(-10px); }
                    .reason .icon {
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 1rem;
                        font-size: 2rem;
                        background: rgba(148, 163, 184, 0.12);
                        transition: transform 0.5s ease;
                    }
                    .reason:hover .icon { transform: rotate(360deg); }
                    .reason h3 { margin: 0 0 0.75rem; }
                    .reason p { margin: 0; color: #cbd5e1; }

                    .site-footer {
                        padding: 4rem 1rem;
                        border-top: 1px solid rgba(30, 41, 59, 0.5);
                        text-align: center;
                    }
                    .site-footer h3 {
                        display: inline-block;
                        margin: 0 0 1rem;
                        font-size: 2rem;
                        background: linear-gradient(90deg, #60a5fa, #c084fc, #f472b6);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                        transition: transform 0.3s ease;
                    }
                    .site-footer h3:hover { transform: scale(1.05); }
                    .site-footer .tagline { color: #94a3b8; font-size: 1.1rem; margin: 0 0 1.5rem; }
                    .site-footer .copyright {
                        display: inline-block;
                        color: #64748b;
                        transition: color 0.3s ease, transform 0.3s ease;
                    }
                    .site-footer .copyright:hover { color: #60a5fa; transform: scale(1.1); }
                "#}
            </style>
            { hero(content) }
            { for content.sections.iter().map(render_section) }
            { footer(&content.footer) }
        </div>
    }
}

fn hero(content: &PageContent) -> Html {
    let target = content.cta_target.clone().unwrap_or_else(|| "#about".to_string());

    html! {
        <section class="hero">
            <AnimatedBackground />
            <div class="content">
                <Reveal entrance={Entrance::scale(0.0).delay(0.2)}>
                    <div class="badge">{"⚡ "}{ &content.badge }</div>
                </Reveal>
                <Reveal entrance={Entrance::slide_up(100.0).duration(1.0)}>
                    <h1>{ &content.title }</h1>
                </Reveal>
                <Reveal entrance={Entrance::slide_up(50.0).duration(1.0).delay(0.2)}>
                    <p class="tagline">{ &content.tagline }</p>
                </Reveal>
                <Reveal entrance={Entrance::slide_up(50.0).duration(1.0).delay(0.4)}>
                    <div class="cta-wrap">
                        <div class="cta-glow"></div>
                        <a class="cta" href={target}>{ &content.cta }</a>
                    </div>
                </Reveal>
            </div>
            <div class="scroll-hint">{"⌄"}</div>
        </section>
    }
}

fn render_section(section: &Section) -> Html {
    match section {
        Section::Stats(stats) => stats_section(stats),
        Section::Ticker(ticker) => html! {
            <ParallaxText text={ticker.text.clone()} base_velocity={ticker.velocity} />
        },
        Section::KhanShatyr(feature) => html! {
            <KhanShatyrSection section={feature.clone()} />
        },
        Section::Gallery(gallery) => gallery_section(gallery),
        Section::Infrastructure(grid) => infrastructure_section(grid),
        Section::Why(why) => why_section(why),
        Section::Contact(contact) => html! {
            <ContactForm section={contact.clone()} />
        },
    }
}

const STATS_ACCENT: &str = "linear-gradient(90deg, #67e8f9, #3b82f6)";

fn section_head(heading: &str, intro: &str, accent: &str, margin: f64) -> Html {
    html! {
        <Reveal class="section-head" {margin}>
            <h2 style={format!("background-image: {};", accent)}>{ heading }</h2>
            <Reveal entrance={Entrance::fade().delay(0.2)}>
                <p>{ intro }</p>
            </Reveal>
        </Reveal>
    }
}

fn stats_section(stats: &StatsSection) -> Html {
    html! {
        <section class="section" id={stats.id.clone()}>
            <div class="container">
                { section_head(&stats.heading, &stats.intro, STATS_ACCENT, config::HEADLINE_MARGIN_PX) }
                <div class="grid">
                    { for stats.stats.iter().enumerate().map(|(i, stat)| html! {
                        <Reveal key={i} entrance={Entrance::slide_up(50.0).duration(0.6).delay(stagger(i, config::STAGGER_STEP_S))}>
                            <div class="stat">
                                <div class="icon">{ &stat.icon }</div>
                                <div class="value">{ &stat.value }</div>
                                <div class="label">{ &stat.label }</div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn gallery_section(gallery: &GallerySection) -> Html {
    html! {
        <section class="section" id={gallery.id.clone()}>
            <div class="container">
                { section_head(&gallery.heading, &gallery.intro, &gallery.accent, 0.0) }
                <div class="grid">
                    { for gallery.places.iter().enumerate().map(|(i, place)| html! {
                        <PlaceCard key={i} place={place.clone()} delay={stagger(i, config::STAGGER_STEP_S)} />
                    }) }
                </div>
            </div>
        </section>
    }
}

fn infrastructure_section(grid: &InfoGrid) -> Html {
    html! {
        <section class="section" id={grid.id.clone()}>
            <div class="container">
                { section_head(&grid.heading, &grid.intro, &grid.accent, 0.0) }
                <div class="grid">
                    { for grid.groups.iter().enumerate().map(|(i, group)| html! {
                        // stagger restarts on every row of three
                        <InfoSection key={i} group={group.clone()} delay={stagger(i % 3, config::STAGGER_STEP_S)} />
                    }) }
                </div>
            </div>
        </section>
    }
}

fn why_section(why: &WhySection) -> Html {
    html! {
        <section class="section" id={why.id.clone()}>
            <div class="container">
                <Reveal entrance={Entrance::scale(0.9)}>
                    <div class="why-card">
                        <h2>{ &why.heading }</h2>
                        <div class="grid">
                            { for why.reasons.iter().map(|reason| html! {
                                <div class="reason">
                                    <div class="icon">{ &reason.icon }</div>
                                    <h3 style={format!("color: {};", reason.color)}>{ &reason.title }</h3>
                                    <p>{ &reason.text }</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

fn footer(footer: &Footer) -> Html {
    html! {
        <footer class="site-footer">
            <Reveal entrance={Entrance::fade()}>
                <h3>{ &footer.title }</h3>
                <p class="tagline">{ &footer.tagline }</p>
                <Reveal entrance={Entrance::fade().delay(0.2)}>
                    <p class="copyright">{ &footer.copyright }</p>
                </Reveal>
            </Reveal>
        </footer>
    }
}
