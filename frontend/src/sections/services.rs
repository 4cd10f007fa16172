use yew::prelude::*;

use crate::config;
use crate::observers::reveal::use_reveal;

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [Service; 5] = [
    Service {
        icon: "🌐",
        title: "Websites that convert",
        description: "Fast, mobile-first sites built to turn visitors into enquiries. No templates. No recycled themes. Clean, purposeful design that loads in under two seconds and works on every device your customers use.",
    },
    Service {
        icon: "🖱️",
        title: "Google Ads management",
        description: "We put you at the top of Google when someone in your area searches for exactly what you do. You only pay when they click, and we make sure those clicks actually turn into phone calls.",
    },
    Service {
        icon: "🔍",
        title: "Search engine optimisation",
        description: "Ranking on Google takes patience and consistent effort. We handle the technical work (site structure, local listings, content) so your business climbs the results month after month.",
    },
    Service {
        icon: "📣",
        title: "Social media that works",
        description: "Consistent posts, local targeting, and content your customers actually want to see. Not stock photos with inspirational quotes, but real content that shows off your work and builds trust.",
    },
    Service {
        icon: "🎨",
        title: "Brand & identity",
        description: "Logo, van livery, workwear, business cards. Everything a customer sees before they have even spoken to you. We make sure it all tells the same story and looks the part.",
    },
];

/// Delay between cards once the list is revealed, in milliseconds.
pub const CARD_STAGGER_MS: usize = 100;

pub fn stagger(index: usize, step_ms: usize) -> String {
    format!("animation-delay: {}ms;", index * step_ms)
}

#[function_component(Services)]
pub fn services() -> Html {
    let section_ref = use_node_ref();
    let reveal = use_reveal(section_ref.clone(), config::SERVICES_REVEAL_MARGIN_PX);

    html! {
        <section id="services" ref={section_ref} class="services" aria-labelledby="services-heading">
            <style>
                {r#"
                    .services {
                        padding: 5rem 1.5rem;
                        background: #fff;
                    }
                    .services-grid {
                        display: grid;
                        gap: 1.5rem;
                        grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .service-card {
                        border: 1px solid #e2e8f0;
                        border-radius: 0.75rem;
                        padding: 1.75rem;
                        transition: border-color 0.2s, box-shadow 0.2s;
                    }
                    .service-card:hover {
                        border-color: rgba(15, 23, 42, 0.2);
                        box-shadow: 0 4px 12px rgba(15, 23, 42, 0.08);
                    }
                    .service-icon {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 0.5rem;
                        background: rgba(15, 23, 42, 0.05);
                        font-size: 1.5rem;
                        margin-bottom: 1.25rem;
                    }
                    .service-card h3 {
                        font-size: 1.125rem;
                        font-weight: 700;
                        color: var(--navy);
                        margin: 0 0 0.5rem;
                    }
                    .service-card p {
                        color: #475569;
                        line-height: 1.6;
                        font-size: 0.95rem;
                        margin: 0;
                    }
                "#}
            </style>
            <div class="section-container">
                <div class="section-intro">
                    <h2 id="services-heading">{"What we actually do"}</h2>
                    <p>
                        {"Most tradesmen are brilliant at what they do but have never had the time (or interest) to figure out marketing. That is where we come in. Here is what we can take off your plate."}
                    </p>
                </div>

                <ul class={classes!("services-grid", reveal.class())} role="list">
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <li key={service.title} class="service-card reveal-item" style={stagger(i, CARD_STAGGER_MS)}>
                            <div class="service-icon" aria-hidden="true">{service.icon}</div>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                        </li>
                    }) }
                </ul>
            </div>
        </section>
    }
}
