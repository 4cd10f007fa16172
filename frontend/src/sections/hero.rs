use yew::prelude::*;

/// Stagger between the hero's lines, in milliseconds.
const HERO_STAGGER_MS: u32 = 150;

fn fade_in(step: u32) -> String {
    format!("animation-delay: {}ms;", step * HERO_STAGGER_MS)
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero" aria-labelledby="hero-heading">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 90vh;
                        display: flex;
                        align-items: center;
                        background: var(--navy);
                        color: #fff;
                        overflow: hidden;
                    }
                    .hero-texture {
                        position: absolute;
                        inset: 0;
                        opacity: 0.04;
                        background-image: radial-gradient(circle at 1px 1px, white 1px, transparent 0);
                        background-size: 32px 32px;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        width: 100%;
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 7rem 1.5rem;
                    }
                    .hero-inner { max-width: 48rem; }
                    .hero-location {
                        display: inline-flex;
                        gap: 0.5rem;
                        font-size: 0.875rem;
                        color: #cbd5e1;
                        margin-bottom: 1.5rem;
                    }
                    .hero h1 {
                        font-size: clamp(2.25rem, 6vw, 3.75rem);
                        font-weight: 800;
                        line-height: 1.1;
                        letter-spacing: -0.02em;
                        margin: 0 0 1.5rem;
                    }
                    .hero h1 span { color: #cbd5e1; }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: #cbd5e1;
                        line-height: 1.6;
                        max-width: 42rem;
                        margin-bottom: 2.5rem;
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }
                    .hero-cta {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: #fff;
                        color: var(--navy);
                        font-weight: 700;
                        padding: 1rem 2rem;
                        border-radius: 0.5rem;
                        text-decoration: none;
                    }
                    .hero-cta:hover { background: #f1f5f9; }
                    .hero-secondary {
                        display: inline-flex;
                        align-items: center;
                        border: 2px solid rgba(255, 255, 255, 0.3);
                        color: #fff;
                        font-weight: 600;
                        padding: 1rem 2rem;
                        border-radius: 0.5rem;
                        text-decoration: none;
                    }
                    .hero-secondary:hover { border-color: rgba(255, 255, 255, 0.6); }
                    .hero-fade {
                        opacity: 0;
                        animation: fadeUp 0.5s ease-out forwards;
                    }
                "#}
            </style>
            <div class="hero-texture" aria-hidden="true"></div>
            <div class="hero-content">
                <div class="hero-inner">
                    <div class="hero-location hero-fade" style={fade_in(0)}>
                        <span aria-hidden="true">{"📍"}</span>
                        <span>{"Windsor & Thames Valley"}</span>
                    </div>
                    <h1 id="hero-heading" class="hero-fade" style={fade_in(1)}>
                        {"Your work speaks for\u{a0}itself."}
                        <br />
                        <span>{"Your website should\u{a0}too."}</span>
                    </h1>
                    <p class="hero-subtitle hero-fade" style={fade_in(2)}>
                        {"We help tradesmen across Windsor and the Thames Valley get found online, win more quotes, and stop relying on word of mouth alone. No jargon. No fluff. Just marketing that actually brings in work."}
                    </p>
                    <div class="hero-cta-group hero-fade" style={fade_in(3)}>
                        <a href="#contact" class="hero-cta">
                            {"Get a free website audit"}
                            <span aria-hidden="true">{"→"}</span>
                        </a>
                        <a href="#results" class="hero-secondary">
                            {"See our results"}
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
