use chrono::Datelike;
use log::info;
use yew::prelude::*;

mod config;
mod contact {
    pub mod form;
    pub mod form_state;
    pub mod validation;
}
mod observers {
    pub mod reveal;
    pub mod scroll;
}
mod sections {
    pub mod hero;
    pub mod results;
    pub mod services;
}

use contact::form::Contact;
use observers::scroll::use_is_scrolled;
use sections::{hero::Hero, results::Results, services::Services};

#[function_component(Nav)]
pub fn nav() -> Html {
    let is_scrolled = use_is_scrolled(config::SCROLL_THRESHOLD_PX);

    html! {
        <header class={classes!("site-header", is_scrolled.then_some("scrolled"))}>
            // Mobile sticky bar
            <div class="mobile-bar">
                <div class="nav-logo">{config::BRAND}</div>
                <a href={config::PHONE_HREF} class="call-button">
                    <span aria-hidden="true">{"📞"}</span>
                    <span>{"Call Now"}</span>
                </a>
            </div>

            // Desktop nav
            <nav class="top-nav" aria-label="Main">
                <div class="nav-logo">{config::BRAND}</div>
                <div class="nav-right">
                    <a href="#services" class="nav-link">{"Services"}</a>
                    <a href="#results" class="nav-link">{"Results"}</a>
                    <a href={config::PHONE_HREF} class="nav-phone">
                        <span aria-hidden="true">{"📞"}</span>
                        {config::PHONE_DISPLAY}
                    </a>
                </div>
            </nav>
        </header>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div>
                    <h3>{config::COMPANY}</h3>
                    <p>{"Windsor's premier trade marketing agency."}</p>
                </div>
                <div class="copyright">
                    {format!("© {} {}. All rights reserved.", year, config::COMPANY)}
                </div>
            </div>
        </footer>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <style>
                {r#"
                    :root {
                        --navy: #0f172a;
                        --navy-light: #1e293b;
                    }
                    body {
                        margin: 0;
                        font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
                        color: #0f172a;
                        overflow-x: hidden;
                    }
                    html { scroll-behavior: smooth; }
                    .skip-link {
                        position: absolute;
                        left: 1rem;
                        top: -4rem;
                        z-index: 100;
                        background: var(--navy);
                        color: #fff;
                        padding: 0.75rem 1rem;
                        border-radius: 0.5rem;
                    }
                    .skip-link:focus { top: 1rem; }
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        transition: all 0.3s;
                    }
                    .site-header.scrolled {
                        background: rgba(255, 255, 255, 0.9);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 800;
                        letter-spacing: -0.02em;
                        color: #fff;
                    }
                    .site-header.scrolled .nav-logo,
                    .site-header.scrolled .nav-link,
                    .site-header.scrolled .nav-phone { color: var(--navy); }
                    .mobile-bar {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1rem;
                        transition: padding 0.3s;
                    }
                    .site-header.scrolled .mobile-bar { padding: 0.5rem 1rem; }
                    .call-button {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: var(--navy);
                        color: #fff;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        font-weight: 700;
                        font-size: 0.875rem;
                        text-decoration: none;
                    }
                    .top-nav {
                        display: none;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1rem 2.5rem;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link, .nav-phone {
                        color: #fff;
                        font-weight: 500;
                        text-decoration: none;
                    }
                    .nav-phone { font-weight: 700; }
                    @media (min-width: 768px) {
                        .mobile-bar { display: none; }
                        .top-nav { display: flex; }
                    }
                    .section-container {
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .section-intro {
                        max-width: 42rem;
                        margin-bottom: 3.5rem;
                    }
                    .section-intro h2 {
                        font-size: 2.25rem;
                        font-weight: 800;
                        letter-spacing: -0.02em;
                        color: var(--navy);
                        margin: 0 0 1rem;
                    }
                    .section-intro p {
                        font-size: 1.125rem;
                        color: #475569;
                        line-height: 1.6;
                    }
                    @keyframes fadeUp {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .reveal .reveal-item { opacity: 0; transform: translateY(20px); }
                    .revealed .reveal-item {
                        opacity: 0;
                        animation: fadeUp 0.45s ease-out forwards;
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .reveal .reveal-item, .revealed .reveal-item, .hero-fade {
                            opacity: 1;
                            transform: none;
                            animation: none;
                        }
                    }
                    .site-footer {
                        background: var(--navy);
                        color: #fff;
                        padding: 3rem 1.5rem;
                        border-top: 1px solid var(--navy-light);
                    }
                    .footer-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .footer-content h3 {
                        font-size: 1.5rem;
                        margin: 0 0 0.5rem;
                    }
                    .footer-content p { color: #d1d5db; margin: 0; }
                    .copyright { font-size: 0.875rem; color: #9ca3af; }
                "#}
            </style>
            <a href="#main-content" class="skip-link">{"Skip to main content"}</a>
            <Nav />
            <main id="main-content" tabindex="-1">
                <Hero />
                <Services />
                <Results />
                <Contact />
            </main>
            <Footer />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    gloo_console::log!(format!("{} site v{}", config::COMPANY, env!("CARGO_PKG_VERSION")));
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
