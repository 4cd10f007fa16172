use yew::prelude::*;

use crate::config;
use crate::observers::reveal::use_reveal;
use crate::sections::services::stagger;

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub trade: &'static str,
    pub stars: u8,
}

pub const STATS: [Stat; 4] = [
    Stat { value: "340+", label: "Leads generated last quarter" },
    Stat { value: "4.2x", label: "Average return on ad spend" },
    Stat { value: "12", label: "Active trade clients" },
    Stat { value: "48 hrs", label: "Average turnaround time" },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Before Scalix I was getting maybe two or three calls a week from my website. Now I am turning work away. Genuinely did not think marketing would make that much difference.",
        name: "Dan Mitchell",
        trade: "Plumber, Slough",
        stars: 5,
    },
    Testimonial {
        quote: "They redid our website and set up Google Ads. Within the first month we had more enquiries than the previous three combined. Straightforward people to deal with too, which helps.",
        name: "Chris Barker",
        trade: "Electrician, Windsor",
        stars: 5,
    },
    Testimonial {
        quote: "I was sceptical about paying someone to run my socials but the leads speak for themselves. They actually understand what tradesmen need, not just generic marketing talk.",
        name: "Sarah Kelley",
        trade: "Kitchen fitter, Maidenhead",
        stars: 5,
    },
];

pub const MAX_STARS: u8 = 5;
const ITEM_STAGGER_MS: usize = 100;

pub fn star_row(stars: u8) -> String {
    "★".repeat(stars.min(MAX_STARS) as usize)
}

pub fn rating_label(stars: u8) -> String {
    format!("Rated {} out of {} stars", stars.min(MAX_STARS), MAX_STARS)
}

#[function_component(Results)]
pub fn results() -> Html {
    // Stats and testimonials animate independently.
    let stats_ref = use_node_ref();
    let stats_reveal = use_reveal(stats_ref.clone(), config::RESULTS_REVEAL_MARGIN_PX);
    let testimonials_ref = use_node_ref();
    let testimonials_reveal = use_reveal(testimonials_ref.clone(), config::RESULTS_REVEAL_MARGIN_PX);

    html! {
        <section id="results" class="results" aria-labelledby="results-heading">
            <style>
                {r#"
                    .results {
                        padding: 5rem 1.5rem;
                        background: #f8fafc;
                    }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1.5rem;
                        margin-bottom: 5rem;
                    }
                    @media (min-width: 1024px) {
                        .stats-grid { grid-template-columns: repeat(4, 1fr); }
                    }
                    .stat-card {
                        background: #fff;
                        border: 1px solid #e2e8f0;
                        border-radius: 0.75rem;
                        padding: 1.5rem;
                        text-align: center;
                    }
                    .stat-value {
                        font-size: 2.25rem;
                        font-weight: 800;
                        color: var(--navy);
                        margin: 0 0 0.25rem;
                    }
                    .stat-label {
                        font-size: 0.875rem;
                        color: #64748b;
                        font-weight: 500;
                        margin: 0;
                    }
                    .testimonials h3 {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: var(--navy);
                        margin-bottom: 2rem;
                    }
                    .testimonial-list {
                        display: grid;
                        gap: 1.5rem;
                        grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .testimonial-card {
                        display: flex;
                        flex-direction: column;
                        background: #fff;
                        border: 1px solid #e2e8f0;
                        border-radius: 0.75rem;
                        padding: 1.75rem;
                    }
                    .testimonial-quote-mark {
                        font-size: 2rem;
                        line-height: 1;
                        color: rgba(15, 23, 42, 0.2);
                        margin-bottom: 1rem;
                    }
                    .testimonial-card blockquote {
                        flex: 1;
                        margin: 0 0 1.5rem;
                        color: #334155;
                        line-height: 1.6;
                    }
                    .testimonial-card footer {
                        border-top: 1px solid #f1f5f9;
                        padding-top: 1rem;
                    }
                    .stars {
                        color: #fbbf24;
                        letter-spacing: 0.1em;
                        margin-bottom: 0.5rem;
                    }
                    .testimonial-name {
                        font-weight: 700;
                        color: var(--navy);
                        font-size: 0.875rem;
                        margin: 0;
                    }
                    .testimonial-trade {
                        color: #64748b;
                        font-size: 0.875rem;
                        margin: 0;
                    }
                "#}
            </style>
            <div class="section-container">
                <div class="section-intro">
                    <h2 id="results-heading">{"The numbers don't lie"}</h2>
                    <p>
                        {"We track everything. Every click, every call, every form submission. Here is a snapshot of what we have delivered for our trade clients over the last quarter."}
                    </p>
                </div>

                <div
                    ref={stats_ref}
                    class={classes!("stats-grid", stats_reveal.class())}
                    role="list"
                    aria-label="Key performance statistics"
                >
                    { for STATS.iter().enumerate().map(|(i, stat)| html! {
                        <div key={stat.label} class="stat-card reveal-item" role="listitem" style={stagger(i, ITEM_STAGGER_MS)}>
                            <p class="stat-value">{stat.value}</p>
                            <p class="stat-label">{stat.label}</p>
                        </div>
                    }) }
                </div>

                <div ref={testimonials_ref} class="testimonials">
                    <h3>{"What our clients say"}</h3>
                    <ul
                        class={classes!("testimonial-list", testimonials_reveal.class())}
                        role="list"
                        aria-label="Client testimonials"
                    >
                        { for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                            <li key={t.name} class="testimonial-card reveal-item" style={stagger(i, ITEM_STAGGER_MS)}>
                                <div class="testimonial-quote-mark" aria-hidden="true">{"“"}</div>
                                <blockquote>{t.quote}</blockquote>
                                <footer>
                                    <div class="stars" role="img" aria-label={rating_label(t.stars)}>
                                        { star_row(t.stars) }
                                    </div>
                                    <p class="testimonial-name">{t.name}</p>
                                    <p class="testimonial-trade">{t.trade}</p>
                                </footer>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
        </section>
    }
}
