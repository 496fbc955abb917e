use yew::prelude::*;

const PARTICLES: usize = 24;
/// Golden-ratio spacing keeps particles spread out without randomness.
const PHI: f64 = 0.618_033_988_75;

#[derive(Debug, Clone, PartialEq)]
struct Particle {
    left: f64,
    top: f64,
    size: f64,
    duration: f64,
    delay: f64,
}

fn particles(count: usize) -> Vec<Particle> {
    (0..count)
        .map(|i| {
            let a = (i as f64 * PHI).fract();
            let b = (i as f64 * PHI * PHI).fract();
            Particle {
                left: a * 100.0,
                top: b * 100.0,
                size: 2.0 + (i % 4) as f64,
                duration: 10.0 + (i % 7) as f64 * 2.0,
                delay: -((i % 5) as f64) * 1.7,
            }
        })
        .collect()
}

/// Grid lines, drifting gradient orbs and floating particles behind the hero.
#[function_component(AnimatedBackground)]
pub fn animated_background() -> Html {
    let dots = use_memo(|_| particles(PARTICLES), ());

    html! {
        <div class="animated-background">
            <style>
                {r#"
                    .animated-background {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                    }
                    .animated-background .grid {
                        position: absolute;
                        inset: 0;
                        background-image:
                            linear-gradient(rgba(34, 211, 238, 0.05) 1px, transparent 1px),
                            linear-gradient(90deg, rgba(34, 211, 238, 0.05) 1px, transparent 1px);
                        background-size: 60px 60px;
                        mask-image: radial-gradient(ellipse at center, black 30%, transparent 75%);
                    }
                    .animated-background .orb {
                        position: absolute;
                        width: 24rem;
                        height: 24rem;
                        border-radius: 50%;
                        filter: blur(64px);
                    }
                    .animated-background .orb.cyan {
                        top: 10%;
                        left: 10%;
                        background: rgba(6, 182, 212, 0.2);
                        animation: orbDriftA 20s linear infinite;
                    }
                    .animated-background .orb.purple {
                        bottom: 10%;
                        right: 10%;
                        background: rgba(168, 85, 247, 0.2);
                        animation: orbDriftB 25s linear infinite;
                    }
                    @keyframes orbDriftA {
                        0%, 100% { transform: translate(0, 0); }
                        33% { transform: translate(100px, -100px); }
                        66% { transform: translate(-100px, 100px); }
                    }
                    @keyframes orbDriftB {
                        0%, 100% { transform: translate(0, 0); }
                        33% { transform: translate(-100px, 100px); }
                        66% { transform: translate(100px, -100px); }
                    }
                    .animated-background .particle {
                        position: absolute;
                        border-radius: 50%;
                        background: rgba(103, 232, 249, 0.6);
                        box-shadow: 0 0 8px rgba(103, 232, 249, 0.8);
                        animation-name: particleFloat;
                        animation-timing-function: ease-in-out;
                        animation-iteration-count: infinite;
                    }
                    @keyframes particleFloat {
                        0%, 100% { transform: translateY(0); opacity: 0.2; }
                        50% { transform: translateY(-30px); opacity: 1; }
                    }
                "#}
            </style>
            <div class="grid"></div>
            <div class="orb cyan"></div>
            <div class="orb purple"></div>
            { for dots.iter().enumerate().map(|(i, p)| html! {
                <span
                    key={i}
                    class="particle"
                    style={format!(
                        "left: {:.2}%; top: {:.2}%; width: {}px; height: {}px; animation-duration: {}s; animation-delay: {:.1}s;",
                        p.left, p.top, p.size, p.size, p.duration, p.delay
                    )}
                ></span>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particles_stay_on_screen() {
        let ps = particles(PARTICLES);
        assert_eq!(ps.len(), PARTICLES);
        for p in &ps {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!(p.duration >= 10.0);
            assert!(p.delay <= 0.0);
        }
    }

    #[test]
    fn particles_are_stable_between_renders() {
        assert_eq!(particles(8), particles(8));
    }
}
