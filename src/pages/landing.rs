use chrono::Datelike;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::lead_form::LeadForm;
use crate::config::SiteConfig;
use crate::effects::cursor::CursorTrail;
use crate::effects::waves::WavesCanvas;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub config: SiteConfig,
}

fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer");
    }
}

fn smooth_scroll_to(id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(element) = document.get_element_by_id(id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let config = props.config.clone();

    // Scroll to top and set the tab title on initial mount only.
    {
        let name = config.name;
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                    if let Some(document) = window.document() {
                        document.set_title(&format!("{} – Where Voice Meets Intelligence", name));
                    }
                }
                || ()
            },
            (),
        );
    }

    let book_demo = {
        let calendly_url = config.calendly_url;
        Callback::from(move |_: MouseEvent| {
            open_in_new_tab(calendly_url);
        })
    };

    let try_demo = Callback::from(move |_: MouseEvent| {
        smooth_scroll_to("demos");
    });

    let year = chrono::Utc::now().year();

    html! {
        <div class="landing-page">
            <WavesCanvas />
            <CursorTrail />

            <header class="site-header">
                <div class="brand">
                    <div class="brand-mark">{"V"}</div>
                    <div>
                        <div class="brand-name">{config.name}</div>
                        <div class="brand-sub">{"Where Voice Meets Intelligence"}</div>
                    </div>
                </div>
                <nav class="top-nav">
                    <a href="#problem">{"Problem"}</a>
                    <a href="#solution">{"Solution"}</a>
                    <a href="#features">{"Features"}</a>
                    <a href="#pricing">{"Pricing"}</a>
                    <button class="nav-demo-button" onclick={book_demo.clone()}>
                        {"Book a Demo"}
                    </button>
                </nav>
            </header>

            <main>
                <section id="hero" class="hero">
                    <div class="hero-copy">
                        <h1>{config.tagline}</h1>
                        <p class="hero-subtitle">{config.subtitle}</p>
                        <div class="hero-cta-group">
                            <button class="cta-primary" onclick={try_demo.clone()}>
                                {"🎙️ Try Voice Demo"}
                            </button>
                            <button class="cta-secondary" onclick={book_demo.clone()}>
                                {"📅 Book a Free Consultation"}
                            </button>
                        </div>
                        <div class="hero-badges">
                            <span class="live-dot"></span>
                            <span>{"Live demos • Multilingual • Emotion-aware"}</span>
                        </div>
                    </div>
                    <div class="hero-visual">
                        <div class="hero-card">
                            <div class="hero-orb">{"AI"}</div>
                        </div>
                    </div>
                </section>

                <section id="problem" class="section">
                    <h2>{"Businesses waste thousands of hours every year managing repetitive calls and messages."}</h2>
                    <p>{"Customer queries, lead follow-ups, recordings — all of it takes human time and energy. Viora automates these moments with natural, emotionally aware voices that never tire."}</p>
                </section>

                <section id="solution" class="section panel">
                    <h2>{"Not just a voice. A personality."}</h2>
                    <p>{"Each AI voice is crafted to mirror your brand's tone, culture, and emotion — so it sounds like you, not a robot."}</p>
                    <div class="card-grid three">
                        <div class="card">
                            <div class="card-label">{"Emotionally Tuned"}</div>
                            <div class="card-title">{"Voices with empathy & nuance"}</div>
                        </div>
                        <div class="card">
                            <div class="card-label">{"Multilingual"}</div>
                            <div class="card-title">{"Hindi, Marathi, English & more"}</div>
                        </div>
                        <div class="card">
                            <div class="card-label">{"Seamless Integration"}</div>
                            <div class="card-title">{"Twilio · OpenAI · ElevenLabs"}</div>
                        </div>
                    </div>
                </section>

                <section id="features" class="section features">
                    <div class="features-copy">
                        <h2>{"The Future Speaks Fluent Human"}</h2>
                        <p>{"AI Receptionists, Voice Personality Design, Multilingual support, Narration & API-first integrations — built for real businesses."}</p>
                        <ul class="feature-list">
                            <li>{"🎙️ "}<strong>{"AI Receptionists"}</strong>{" — Answer calls 24/7 with intent and warmth."}</li>
                            <li>{"🧠 "}<strong>{"Voice Personality Design"}</strong>{" — Custom voices tuned to your brand."}</li>
                            <li>{"🌏 "}<strong>{"Multilingual Support"}</strong>{" — Expand to local & global markets."}</li>
                            <li>{"☁️ "}<strong>{"API Integrations"}</strong>{" — Twilio, OpenAI, ElevenLabs, Whisper."}</li>
                            <li>{"🔒 "}<strong>{"Secure"}</strong>{" — Data encrypted & auditable."}</li>
                        </ul>
                    </div>
                    <div id="demos" class="visualizer-panel">
                        <div class="card-label">{"Interactive"}</div>
                        <h3>{"Live Wave Visualizer"}</h3>
                        <p>{"The ambient waves behind this page swell with the synthetic voice level — the same motion a live call produces."}</p>
                        <div class="visualizer-window"></div>
                    </div>
                </section>

                <section id="usecases" class="section">
                    <h2>{"Who We Empower"}</h2>
                    <p>{"From clinics to creators and enterprises — Viora gives teams a voice that works."}</p>
                    <div class="card-grid four">
                        <div class="card">{"🏢 Clinics & Salons"}</div>
                        <div class="card">{"🎧 Creators & Agencies"}</div>
                        <div class="card">{"🚀 Startups"}</div>
                        <div class="card">{"💼 Enterprises"}</div>
                    </div>
                </section>

                <section id="tech" class="section panel">
                    <h2>{"Built on the Strongest AI Foundations"}</h2>
                    <p>{"ElevenLabs · OpenAI Whisper · GPT-4 · Twilio · AWS"}</p>
                    <div class="logo-strip">
                        <div class="logo-chip">{"ElevenLabs"}</div>
                        <div class="logo-chip">{"OpenAI"}</div>
                        <div class="logo-chip">{"Twilio"}</div>
                    </div>
                </section>

                <section id="testimonials" class="section">
                    <h2>{"Voices our clients trust"}</h2>
                    <div class="card-grid three">
                        <div class="card">{"“Our AI receptionist handles 90% of calls” — Dr. Meera"}</div>
                        <div class="card">{"“100+ videos in 10 days” — Arjun Media"}</div>
                        <div class="card">{"“Missed appointments dropped 75%” — Sonia"}</div>
                    </div>
                </section>

                <section id="pricing" class="section">
                    <h2>{"Simple, Transparent, Scalable"}</h2>
                    <div class="card-grid three">
                        <div class="card pricing-card">
                            <div class="card-label">{"Starter"}</div>
                            <div class="price">{"₹5,000 / mo"}</div>
                            <div class="price-detail">{"1 Voice Bot · 24/7 support"}</div>
                            <a href={config.calendly_url} target="_blank" rel="noopener noreferrer" class="price-cta">
                                {"Book Your Voice Setup Call"}
                            </a>
                        </div>
                        <div class="card pricing-card">
                            <div class="card-label">{"Growth"}</div>
                            <div class="price">{"₹15,000 / mo"}</div>
                            <div class="price-detail">{"3 Voice Bots · Analytics"}</div>
                            <a href={config.calendly_url} target="_blank" rel="noopener noreferrer" class="price-cta">
                                {"Book Your Voice Setup Call"}
                            </a>
                        </div>
                        <div class="card pricing-card">
                            <div class="card-label">{"Enterprise"}</div>
                            <div class="price">{"Custom"}</div>
                            <div class="price-detail">{"Multi-language · Full Automation"}</div>
                            <a href={config.calendly_url} target="_blank" rel="noopener noreferrer" class="price-cta">
                                {"Contact Sales"}
                            </a>
                        </div>
                    </div>
                </section>

                <section id="cta" class="section">
                    <h2>{"Ready to make your brand sound human again?"}</h2>
                    <p>{"Book a demo or request a personalized voice kit."}</p>
                    <div class="hero-cta-group centered">
                        <button class="cta-primary" onclick={try_demo}>
                            {"🎧 Try the Voice Demo"}
                        </button>
                        <button class="cta-secondary" onclick={book_demo.clone()}>
                            {"📅 Schedule a Consultation"}
                        </button>
                    </div>
                </section>

                <section id="contact" class="section">
                    <h2>{"Get in touch"}</h2>
                    <LeadForm
                        webhook_url={config.webhook_url.to_string()}
                        on_book_demo={book_demo}
                    />
                </section>

                <footer class="site-footer">
                    <div>
                        <div class="brand-name">{config.name}</div>
                        <div>{"Where Voice Meets Emotion."}</div>
                    </div>
                    <div class="footer-links">
                        <a href="#hero">{"Home"}</a>
                        <a href="#features">{"Services"}</a>
                        <a href="#contact">{"Contact"}</a>
                    </div>
                    <div>{format!("© {} Viora Technologies", year)}</div>
                </footer>
            </main>

            <style>
                {r#"
                    :root {
                        --accent-cyan: #00ffff;
                        --accent-purple: #9d00ff;
                        --ink: #e8ecf4;
                        --ink-dim: #9aa7bd;
                    }

                    body {
                        margin: 0;
                        background: #0B0C10;
                    }

                    .landing-page {
                        position: relative;
                        min-height: 100vh;
                        color: var(--ink);
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        overflow-x: hidden;
                    }

                    .waves-canvas {
                        position: fixed;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        z-index: -10;
                    }

                    .cursor-trail {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 300px;
                        height: 150px;
                        border-radius: 50%;
                        pointer-events: none;
                        mix-blend-mode: screen;
                        z-index: -5;
                    }

                    .cursor-trail-glow {
                        width: 100%;
                        height: 100%;
                        background: radial-gradient(circle at 30% 30%, rgba(0,255,255,0.08), rgba(157,0,255,0.02));
                        filter: blur(40px);
                    }

                    .site-header {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 2rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }

                    .brand {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }

                    .brand-mark {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        background: linear-gradient(135deg, rgba(103,232,249,0.6), rgba(167,139,250,0.6));
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #000;
                        font-weight: 600;
                        box-shadow: 0 12px 24px rgba(0,0,0,0.4);
                    }

                    .brand-name {
                        font-size: 0.9rem;
                        font-weight: 500;
                        letter-spacing: 0.03em;
                    }

                    .brand-sub {
                        font-size: 0.75rem;
                        color: var(--ink-dim);
                    }

                    .top-nav {
                        display: flex;
                        gap: 1.5rem;
                        align-items: center;
                        font-size: 0.9rem;
                    }

                    .top-nav a {
                        color: var(--ink);
                        text-decoration: none;
                    }

                    .top-nav a:hover {
                        text-decoration: underline;
                    }

                    .nav-demo-button {
                        margin-left: 1rem;
                        background: rgba(34,211,238,0.1);
                        border: 1px solid rgba(34,211,238,0.3);
                        padding: 0.5rem 1rem;
                        border-radius: 0.5rem;
                        color: #67e8f9;
                        cursor: pointer;
                        font-size: 0.9rem;
                    }

                    main {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 1.5rem 6rem;
                    }

                    .hero {
                        min-height: 70vh;
                        display: flex;
                        align-items: center;
                        gap: 3rem;
                        padding: 3rem 0;
                    }

                    .hero-copy {
                        flex: 1;
                    }

                    .hero-copy h1 {
                        font-size: 3.5rem;
                        font-weight: 600;
                        line-height: 1.1;
                        margin: 0 0 1.5rem;
                    }

                    .hero-subtitle {
                        color: var(--ink-dim);
                        max-width: 42rem;
                        font-size: 1.1rem;
                        line-height: 1.6;
                    }

                    .hero-cta-group {
                        margin-top: 2rem;
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }

                    .hero-cta-group.centered {
                        justify-content: center;
                    }

                    .cta-primary {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.75rem;
                        background: #fff;
                        color: #071226;
                        padding: 0.75rem 1.25rem;
                        border: none;
                        border-radius: 1rem;
                        font-weight: 500;
                        font-size: 1rem;
                        cursor: pointer;
                        transition: transform 0.2s ease;
                    }

                    .cta-primary:hover {
                        transform: scale(1.01);
                    }

                    .cta-primary:disabled {
                        opacity: 0.6;
                        cursor: default;
                    }

                    .cta-secondary {
                        padding: 0.75rem 1.25rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255,255,255,0.1);
                        background: transparent;
                        color: #67e8f9;
                        font-size: 1rem;
                        cursor: pointer;
                    }

                    .hero-badges {
                        margin-top: 2rem;
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 0.85rem;
                        color: var(--ink-dim);
                        background: rgba(255,255,255,0.03);
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                    }

                    .live-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: #67e8f9;
                        animation: pulse 2s infinite;
                    }

                    @keyframes pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.4; }
                    }

                    .hero-visual {
                        flex: 1;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .hero-card {
                        width: 360px;
                        height: 260px;
                        border-radius: 1.5rem;
                        background: linear-gradient(to bottom, rgba(7,18,38,0.4), rgba(0,31,45,0.3));
                        border: 1px solid rgba(255,255,255,0.06);
                        backdrop-filter: blur(12px);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .hero-orb {
                        width: 10rem;
                        height: 10rem;
                        border-radius: 50%;
                        background: linear-gradient(135deg, #22d3ee, #a78bfa);
                        box-shadow: 0 24px 48px rgba(0,0,0,0.5);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #000;
                        font-weight: 600;
                        font-size: 1.25rem;
                    }

                    .section {
                        padding: 4rem 0;
                        text-align: center;
                    }

                    .section h2 {
                        font-size: 1.9rem;
                        font-weight: 600;
                        max-width: 56rem;
                        margin: 0 auto 1.5rem;
                    }

                    .section > p {
                        color: var(--ink-dim);
                        line-height: 1.6;
                        max-width: 48rem;
                        margin: 0 auto;
                    }

                    .panel {
                        background: rgba(255,255,255,0.02);
                        border-radius: 1.5rem;
                        padding: 3rem 2rem;
                    }

                    .card-grid {
                        margin-top: 2rem;
                        display: grid;
                        gap: 1.5rem;
                    }

                    .card-grid.three {
                        grid-template-columns: repeat(3, 1fr);
                    }

                    .card-grid.four {
                        grid-template-columns: repeat(4, 1fr);
                    }

                    .card {
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: rgba(255,255,255,0.04);
                        border: 1px solid rgba(255,255,255,0.06);
                    }

                    .card-label {
                        font-size: 0.85rem;
                        color: var(--ink-dim);
                    }

                    .card-title {
                        font-weight: 600;
                        margin-top: 0.5rem;
                    }

                    .features {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                        text-align: left;
                    }

                    .features h2 {
                        margin: 0 0 1rem;
                    }

                    .features-copy > p {
                        color: var(--ink-dim);
                        line-height: 1.6;
                    }

                    .feature-list {
                        margin-top: 1.5rem;
                        padding: 0;
                        list-style: none;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }

                    .visualizer-panel {
                        border-radius: 1.5rem;
                        background: rgba(255,255,255,0.04);
                        border: 1px solid rgba(255,255,255,0.06);
                        padding: 2rem;
                    }

                    .visualizer-panel h3 {
                        font-size: 1.25rem;
                        margin: 0.5rem 0;
                    }

                    .visualizer-panel p {
                        color: var(--ink-dim);
                    }

                    .visualizer-window {
                        margin-top: 1.5rem;
                        height: 9rem;
                        border-radius: 0.75rem;
                        background: linear-gradient(to bottom, rgba(0,16,37,0.3), rgba(0,38,61,0.2));
                    }

                    .logo-strip {
                        margin-top: 2rem;
                        display: flex;
                        justify-content: center;
                        gap: 1.5rem;
                    }

                    .logo-chip {
                        height: 4rem;
                        width: 8rem;
                        background: rgba(255,255,255,0.04);
                        border-radius: 0.75rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .pricing-card .price {
                        font-size: 1.5rem;
                        font-weight: 600;
                        margin-top: 0.5rem;
                    }

                    .pricing-card .price-detail {
                        color: var(--ink-dim);
                        margin-top: 0.5rem;
                    }

                    .price-cta {
                        display: inline-block;
                        margin-top: 1rem;
                        padding: 0.5rem 1rem;
                        border-radius: 0.5rem;
                        background: #22d3ee;
                        color: #000;
                        text-decoration: none;
                    }

                    .lead-form-container {
                        max-width: 56rem;
                        margin: 2rem auto 0;
                        text-align: left;
                    }

                    .form-status {
                        margin-bottom: 1rem;
                        padding: 0.75rem 1rem;
                        border-radius: 0.75rem;
                        font-size: 0.95rem;
                    }

                    .form-error {
                        background: rgba(248,113,113,0.12);
                        border: 1px solid rgba(248,113,113,0.4);
                        color: #fca5a5;
                    }

                    .form-success {
                        background: rgba(74,222,128,0.12);
                        border: 1px solid rgba(74,222,128,0.4);
                        color: #86efac;
                    }

                    .lead-form {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                    }

                    .lead-form input,
                    .lead-form select,
                    .lead-form textarea {
                        padding: 1rem;
                        border-radius: 0.75rem;
                        background: rgba(255,255,255,0.05);
                        border: 1px solid rgba(255,255,255,0.06);
                        color: var(--ink);
                        font-size: 1rem;
                        font-family: inherit;
                    }

                    .lead-form-message {
                        grid-column: span 2;
                        resize: vertical;
                    }

                    .lead-form-actions {
                        grid-column: span 2;
                        display: flex;
                        gap: 1rem;
                    }

                    .site-footer {
                        padding: 3rem 0;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                        color: var(--ink-dim);
                        font-size: 0.85rem;
                        text-align: left;
                    }

                    .footer-links {
                        display: flex;
                        gap: 1.5rem;
                    }

                    .footer-links a {
                        color: var(--ink-dim);
                        text-decoration: none;
                    }

                    @media (prefers-reduced-motion: reduce) {
                        * {
                            animation: none !important;
                            transition: none !important;
                        }
                    }

                    @media (max-width: 900px) {
                        .top-nav a {
                            display: none;
                        }
                        .hero {
                            flex-direction: column;
                        }
                        .hero-copy h1 {
                            font-size: 2.5rem;
                        }
                        .features {
                            grid-template-columns: 1fr;
                        }
                        .card-grid.three,
                        .card-grid.four {
                            grid-template-columns: 1fr;
                        }
                        .lead-form {
                            grid-template-columns: 1fr;
                        }
                        .lead-form-message,
                        .lead-form-actions {
                            grid-column: span 1;
                        }
                        .site-footer {
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
