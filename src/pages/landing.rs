use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::contact::ContactSection;
use crate::components::faq::FaqSection;
use crate::components::icons::{ArrowRightIcon, CalendarIcon, MailIcon, WhatsAppIcon};
use crate::config::SiteConfig;
use crate::reveal::Reveal;

const NAV_LINKS: &[&str] = &["About", "Approach", "Services", "Resources", "FAQ", "Contact"];

const STATS: &[(&str, &str)] = &[
    ("10", "One-on-One Sessions"),
    ("3", "Continents Served"),
    ("100%", "Judgment-Free Zone"),
    ("∞", "Questions Welcome"),
];

struct CredentialCard {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
    sub: &'static str,
}

const CREDENTIAL_CARDS: &[CredentialCard] = &[
    CredentialCard {
        icon: "🏅",
        title: "Certified Kallah Teacher",
        body: "Trained and certified under Mindy Wiesner, one of the most respected and innovative Kallah educators in the world.",
        sub: "Mindy's approach combines traditional Halacha with modern understanding of relationships, attachment, and emotional health.",
    },
    CredentialCard {
        icon: "⭐",
        title: "Specialized Training",
        body: "Trained in attachment theory, emotional intelligence, and nervous-system science.",
        sub: "These aren't theoretical — they're practical tools I teach you to use in your marriage from day one.",
    },
    CredentialCard {
        icon: "📖",
        title: "Integrated Approach",
        body: "I don't compartmentalize. Torah, science, emotion, and body all belong together.",
        sub: "This integration is what makes the difference between knowing the laws and living them with confidence.",
    },
];

const APPROACH_CARDS: &[(&str, &str)] = &[
    (
        "Clarity Over Shame",
        "You'll leave knowing your anatomy, cycle, and needs — with real words, not whispered euphemisms. Knowledge is empowerment.",
    ),
    (
        "Attunement Over Perfection",
        "Marriage is a cycle of connection, disconnection, and repair. I teach you to navigate it with grace, not guilt.",
    ),
    (
        "Your Nervous System Matters",
        "Fear lives in the body. I integrate nervous-system regulation so you move through newness with calm, not anxiety.",
    ),
    (
        "A Safe Container",
        "I'm your emotional First Responder. I hold space for fears, validate your feelings, and help you trust your intuition.",
    ),
];

const ART_PILLARS: &[(&str, &str)] = &[
    ("A", "Acceptance"),
    ("R", "Respect"),
    ("T", "Trust"),
    ("A", "Appreciation"),
    ("R", "Resolution"),
    ("T", "Time"),
];

struct ServicePackage {
    badge: Option<&'static str>,
    price: &'static str,
    unit: &'static str,
    title: &'static str,
    sub: &'static str,
    accent: &'static str,
    desc: &'static str,
    items: &'static [&'static str],
    note: &'static str,
}

const SERVICE_PACKAGES: &[ServicePackage] = &[
    ServicePackage {
        badge: Some("Most Popular"),
        price: "$1,400",
        unit: "full course",
        title: "Comprehensive Kallah Course",
        sub: "10 sessions · For the engaged woman",
        accent: "accent-deep",
        desc: "The full journey covering Taharas HaMishpacha, female anatomy, emotional health, communication skills, nervous-system regulation, and space to ask every question.",
        items: &[
            "Taharas HaMishpacha laws — practical, clear, complete",
            "Female anatomy & the body you deserve to know",
            "The Intimacy Triangle & A.R.T. framework",
            "Emotional health & communication skills",
            "Nervous-system tools for the early weeks",
        ],
        note: "Flexible scheduling · Sessions spaced 1–2 weeks apart",
    },
    ServicePackage {
        badge: Some("Recommended"),
        price: "$420",
        unit: "3 sessions",
        title: "Post-Wedding Support",
        sub: "3 sessions · \"The Fourth Trimester\"",
        accent: "accent-mid",
        desc: "3 sessions to process, recalibrate, and clear intimacy blocks. One of the best gifts for a new marriage.",
        items: &[
            "3 dedicated post-wedding sessions",
            "Real-life halachic questions answered clearly",
            "Intimacy blocks identified and gently addressed",
            "Emotional processing for the newlywed transition",
        ],
        note: "Best booked within 3 months of wedding",
    },
    ServicePackage {
        badge: None,
        price: "$150",
        unit: "per session",
        title: "Refresher Classes",
        sub: "For married women · Flexible pricing",
        accent: "accent-light",
        desc: "For married women carrying unhelpful myths about intimacy. Reconnect with your body, your marriage, and yourself from a healthier place.",
        items: &[
            "Available in-person in Melbourne or via Zoom",
            "Completely confidential and deeply respectful",
            "Tailored to your specific stage of marriage",
            "Book 1 session or a package of 3–6",
        ],
        note: "Book 3+ sessions for 10% discount",
    },
];

const RESOURCES: &[(&str, &str, &str)] = &[
    (
        "Understanding Taharas HaMishpacha Beyond the Laws",
        "Why Halacha exists, what it's really about, and how it shapes intimacy",
        "Halacha & Intimacy",
    ),
    (
        "The Nervous System & Your Wedding Night",
        "Why you might feel anxious, what's happening in your body, and how to regulate it",
        "Nervous System Science",
    ),
    (
        "Building Secure Attachment in Marriage",
        "How to create the emotional foundation that makes everything else possible",
        "Attachment Theory",
    ),
    (
        "Communication Scripts for Difficult Conversations",
        "Real words for talking about needs, boundaries, and desire with your husband",
        "Communication",
    ),
    (
        "Myths About Female Desire (And What's Actually True)",
        "Unpacking the lies you've been told and replacing them with real knowledge",
        "Education",
    ),
    (
        "The First Year: What Nobody Warns You About",
        "Practical guidance for navigating the biggest transition of your life",
        "Marriage Prep",
    ),
];

#[derive(Properties, PartialEq)]
struct NavProps {
    booking_url: &'static str,
}

#[function_component(Nav)]
fn nav(props: &NavProps) -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().expect("no window");
                let window_for_cb = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = window_for_cb.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(offset > 20.0);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .expect("failed to add scroll listener");

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    html! {
        <nav class={classes!("site-nav", is_scrolled.then_some("scrolled"))}>
            <div class="nav-inner">
                <span class="nav-brand">{"Miri Rabi"}</span>
                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a href={format!("#{}", link.to_lowercase())} class="nav-link">{*link}</a>
                    }) }
                    <a href={props.booking_url} target="_blank" rel="noopener noreferrer" class="btn-primary nav-book">
                        <CalendarIcon /> {"Book Session"}
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct HeroProps {
    booking_url: &'static str,
}

#[function_component(Hero)]
fn hero(props: &HeroProps) -> Html {
    html! {
        <section class="hero">
            <div class="hero-orb hero-orb-top"></div>
            <div class="hero-orb hero-orb-bottom"></div>
            <div class="hero-inner">
                <div class="eyebrow hero-eyebrow">{"Kallah Teacher & Marriage Educator · Melbourne"}</div>
                <h1 class="hero-h1">
                    {"Where "}<em class="grad-text">{"Torah"}</em>{" meets"}<br />{"your whole heart."}
                </h1>
                <p class="hero-copy">
                    {"You deserve more than just a checklist of laws. You deserve to walk into your marriage feeling "}
                    <strong>{"confident, informed, and truly yourself."}</strong>
                    {" That's exactly what we build — together."}
                </p>
                <div class="hero-ctas">
                    <a href={props.booking_url} target="_blank" rel="noopener noreferrer" class="btn-primary">
                        <CalendarIcon /> {"Book Your First Session"}
                    </a>
                    <a href="#about" class="btn-outline">{"Meet Miri"}</a>
                </div>
                <p class="hero-credentials">
                    {"✦ Certified Kallah Teacher · Trained under Mindy Wiesner · Melbourne & Worldwide via Zoom"}
                </p>
            </div>
        </section>
    }
}

#[function_component(StatsBand)]
fn stats_band() -> Html {
    html! {
        <section class="stats-band">
            <div class="stats-grid four-col">
                { for STATS.iter().enumerate().map(|(i, (number, label))| html! {
                    <Reveal delay_ms={(i as u32) * 100}>
                        <div class="stat-number">{*number}</div>
                        <p class="stat-label">{*label}</p>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[function_component(AboutSection)]
fn about_section() -> Html {
    html! {
        <section id="about" class="about-section">
            <div class="about-grid two-col">
                <Reveal>
                    <div class="about-portrait-wrap">
                        <div class="about-portrait-anchor">
                            <div class="about-portrait">
                                <div class="about-portrait-text">
                                    <div class="about-portrait-name">{"Miri Rabi"}</div>
                                    <div class="about-portrait-role">{"Kallah Teacher &"}<br />{"Marriage Educator"}</div>
                                    <div class="about-portrait-mark">{"✦"}</div>
                                </div>
                            </div>
                            <div class="about-portrait-badge">
                                <span>{"Melbourne & Worldwide"}</span>
                            </div>
                        </div>
                    </div>
                </Reveal>
                <Reveal delay_ms={200}>
                    <div>
                        <span class="eyebrow">{"About Miri"}</span>
                        <h2>{"You've found your "}<em class="grad-text">{"safe place to land."}</em></h2>
                        <p class="body-copy">
                            {"Hi, I'm Miri — and if you're feeling nervous about what's ahead, take a breath. That's completely normal. Most Kallahs arrive with excitement, anxiety, and about a hundred questions they're scared to ask. By the end of our first session, that changes."}
                        </p>
                        <div class="pull-quote">
                            <p>{"\"I don't teach from across a formal dining room table. I teach from a cozy couch, with a cup of tea, and absolutely no judgment.\""}</p>
                        </div>
                        <p class="body-copy">
                            {"I'm a certified Kallah teacher and marriage educator, trained under "}
                            <strong>{"Mindy Wiesner"}</strong>
                            {". I weave together Halacha, emotional intelligence, attachment theory, and nervous-system science to give you the fullest picture of your life ahead."}
                        </p>
                        <p class="body-copy emphatic">
                            {"I believe every woman deserves to know her body, understand her feelings, and enter marriage with real knowledge — not shame. You are allowed to ask anything here. "}
                            <em>{"Anything."}</em>
                        </p>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(CredentialsSection)]
fn credentials_section() -> Html {
    html! {
        <section class="credentials-section">
            <div class="section-container">
                <Reveal>
                    <div class="section-heading">
                        <span class="eyebrow">{"Credentials & Expertise"}</span>
                        <h2>{"Trained, certified, and "}<em class="grad-text">{"deeply committed."}</em></h2>
                    </div>
                </Reveal>
                <div class="credentials-grid three-col">
                    { for CREDENTIAL_CARDS.iter().enumerate().map(|(i, card)| html! {
                        <Reveal delay_ms={(i as u32) * 100}>
                            <div class="credential-card">
                                <div class="credential-icon">{card.icon}</div>
                                <h3>{card.title}</h3>
                                <p class="body-copy small">{card.body}</p>
                                <p class="fine-print">{card.sub}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
                <Reveal>
                    <div class="commitment-banner">
                        <p>
                            <strong>{"My commitment: "}</strong>
                            {"Every Kallah who works with me receives the same depth, care, and expertise. You're not getting a script — you're getting a trained professional who has dedicated herself to understanding this crucial transition and helping you navigate it with wisdom and compassion."}
                        </p>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(ApproachSection)]
fn approach_section() -> Html {
    html! {
        <section id="approach" class="approach-section">
            <div class="section-container">
                <Reveal>
                    <div class="section-heading">
                        <span class="eyebrow">{"My Approach"}</span>
                        <h2>{"Teaching that goes "}<em class="grad-text">{"all the way in."}</em></h2>
                        <p class="section-subcopy">{"Halacha is the foundation — but it's not the whole house. My approach covers every room."}</p>
                    </div>
                </Reveal>
                <div class="approach-grid two-col">
                    { for APPROACH_CARDS.iter().enumerate().map(|(i, (title, body))| html! {
                        <Reveal delay_ms={(i as u32) * 100}>
                            <div class="approach-card">
                                <div class="approach-mark">{"✦"}</div>
                                <h3>{*title}</h3>
                                <p class="body-copy small">{*body}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
                <Reveal>
                    <div class="art-panel">
                        <span class="eyebrow">{"Core Framework"}</span>
                        <h3>{"The "}<span class="grad-text">{"A.R.T."}</span>{" of Marriage"}</h3>
                        <p class="art-subcopy">{"A six-pillar framework woven into every session — a compass for every stage of married life."}</p>
                        <div class="art-grid six-col">
                            { for ART_PILLARS.iter().map(|(letter, word)| html! {
                                <div class="art-pillar">
                                    <div class="art-letter">{*letter}</div>
                                    <div class="art-word">{*word}</div>
                                </div>
                            }) }
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ServicesProps {
    booking_url: &'static str,
}

#[function_component(ServicesSection)]
fn services_section(props: &ServicesProps) -> Html {
    html! {
        <section id="services" class="services-section">
            <div class="services-inner">
                <Reveal>
                    <div class="section-heading">
                        <span class="eyebrow">{"Services & Pricing"}</span>
                        <h2>{"Choose your "}<em class="grad-text">{"starting point."}</em></h2>
                    </div>
                </Reveal>
                <div class="package-list">
                    { for SERVICE_PACKAGES.iter().enumerate().map(|(i, package)| html! {
                        <Reveal delay_ms={(i as u32) * 100}>
                            <div class={classes!("package-card", package.accent)}>
                                <div class="package-head">
                                    <div>
                                        if let Some(badge) = package.badge {
                                            <span class="package-badge">{badge}</span>
                                        }
                                        <h3>{package.title}</h3>
                                        <p class="package-sub">{package.sub}</p>
                                    </div>
                                    <div class="package-price-wrap">
                                        <div class="package-price">{package.price}</div>
                                        <div class="package-unit">{package.unit}</div>
                                    </div>
                                </div>
                                <p class="body-copy small">{package.desc}</p>
                                <ul class="package-items">
                                    { for package.items.iter().map(|item| html! {
                                        <li><span class="item-mark">{"✦"}</span> {*item}</li>
                                    }) }
                                </ul>
                                <p class="fine-print">{package.note}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
                <Reveal delay_ms={300}>
                    <div class="pricing-banner">
                        <p>
                            <strong>{"All prices include: "}</strong>
                            {"Personalized approach, unlimited questions, email support between sessions, and a safe, judgment-free space."}
                        </p>
                        <p class="fine-print">{"Payment plans available. Reach out to discuss what works for you."}</p>
                    </div>
                </Reveal>
                <Reveal delay_ms={400}>
                    <div class="services-cta">
                        <a href={props.booking_url} target="_blank" rel="noopener noreferrer" class="btn-primary">
                            <CalendarIcon /> {"Book a Free 15-Minute Consultation"}
                        </a>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(ResourcesSection)]
fn resources_section() -> Html {
    html! {
        <section id="resources" class="resources-section">
            <div class="section-container">
                <Reveal>
                    <div class="section-heading">
                        <span class="eyebrow">{"Free Resources"}</span>
                        <h2>{"Start learning "}<em class="grad-text">{"right now."}</em></h2>
                        <p class="section-subcopy">{"Free guides, articles, and insights to help you begin your journey with confidence."}</p>
                    </div>
                </Reveal>
                <div class="resources-grid three-col">
                    { for RESOURCES.iter().enumerate().map(|(i, (title, description, category))| html! {
                        <Reveal delay_ms={((i % 3) as u32) * 100}>
                            <div class="resource-card">
                                <span class="resource-chip">{*category}</span>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                                <div class="resource-more">
                                    <span>{"Read more"}</span> <ArrowRightIcon />
                                </div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FooterProps {
    config: SiteConfig,
}

#[function_component(Footer)]
fn footer(props: &FooterProps) -> Html {
    let config = &props.config;
    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <p class="footer-brand">{"Miri Rabi"}</p>
                <p class="footer-role">{"Kallah Teacher & Marriage Educator · Melbourne, Australia"}</p>
                <div class="footer-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a href={format!("#{}", link.to_lowercase())}>{*link}</a>
                    }) }
                </div>
                <div class="footer-contact">
                    <a href={format!("mailto:{}", config.contact_email)}>
                        <MailIcon /> {config.contact_email}
                    </a>
                    <a href={config.whatsapp_url} target="_blank" rel="noopener noreferrer">
                        <WhatsAppIcon /> {config.whatsapp_display}
                    </a>
                </div>
                <div class="footer-legal">
                    {"© 2025 Miri Rabi. All rights reserved."}
                </div>
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub config: SiteConfig,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let config = props.config.clone();

    html! {
        <div class="page">
            <style>
                {r#"
                @import url('https://fonts.googleapis.com/css2?family=Playfair+Display:ital,wght@0,400;0,500;0,600;0,700;1,400;1,500&family=Lora:ital,wght@0,400;0,500;0,600;1,400;1,500&display=swap');

                *, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
                html { scroll-behavior: smooth; }
                body { -webkit-font-smoothing: antialiased; }

                @keyframes fadeInUp {
                    from { opacity: 0; transform: translateY(28px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes float {
                    0%, 100% { transform: translateY(0px); }
                    50% { transform: translateY(-10px); }
                }
                @keyframes pulseGlow {
                    0%, 100% { box-shadow: 0 0 0 0 rgba(217, 119, 6, 0.35); }
                    50% { box-shadow: 0 0 0 10px rgba(217, 119, 6, 0); }
                }

                .page {
                    font-family: 'Lora', Georgia, serif;
                    color: #1a1a1a;
                    background: #fff;
                }
                .icon-inline { display: inline-block; vertical-align: middle; }

                .eyebrow {
                    font-family: 'Lora', serif;
                    font-size: 0.7rem;
                    font-weight: 600;
                    letter-spacing: 0.25em;
                    text-transform: uppercase;
                    color: #b45309;
                    margin-bottom: 16px;
                    display: block;
                }
                h2 {
                    font-family: 'Playfair Display', Georgia, serif;
                    font-size: clamp(2rem, 3.5vw, 2.8rem);
                    line-height: 1.2;
                    color: #1a1a1a;
                    font-weight: 500;
                }
                .grad-text {
                    background: linear-gradient(135deg, #d97706, #b45309);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    background-clip: text;
                }
                .body-copy { color: #4b5563; line-height: 1.8; margin-bottom: 20px; }
                .body-copy.small { font-size: 0.88rem; margin-bottom: 16px; }
                .body-copy.emphatic { color: #374151; font-weight: 500; margin-bottom: 0; }
                .fine-print { color: #9ca3af; font-size: 0.8rem; line-height: 1.6; }
                .section-heading { text-align: center; margin-bottom: 64px; }
                .section-subcopy { color: #6b7280; max-width: 500px; margin: 12px auto 0; }
                .section-container { max-width: 1100px; margin: 0 auto; }

                .btn-primary {
                    display: inline-flex;
                    align-items: center;
                    gap: 8px;
                    padding: 13px 32px;
                    background: #d97706;
                    color: #fff;
                    border-radius: 50px;
                    font-family: 'Lora', serif;
                    font-weight: 600;
                    font-size: 0.92rem;
                    text-decoration: none;
                    border: none;
                    cursor: pointer;
                    transition: background 0.2s, transform 0.2s, box-shadow 0.2s;
                }
                .btn-primary:hover {
                    background: #b45309;
                    transform: translateY(-2px);
                    box-shadow: 0 8px 24px rgba(180, 83, 9, 0.3);
                }
                .btn-outline {
                    display: inline-flex;
                    align-items: center;
                    gap: 8px;
                    padding: 12px 32px;
                    background: transparent;
                    color: #1a1a1a;
                    border-radius: 50px;
                    font-family: 'Lora', serif;
                    font-weight: 600;
                    font-size: 0.92rem;
                    text-decoration: none;
                    border: 2px solid #1a1a1a;
                    transition: background 0.2s, transform 0.2s;
                }
                .btn-outline:hover { background: #f9f5f0; transform: translateY(-2px); }
                .btn-block { justify-content: center; width: 100%; }

                .site-nav {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.97);
                    backdrop-filter: blur(8px);
                    border-bottom: 1px solid #fef3c7;
                    transition: box-shadow 0.3s ease;
                }
                .site-nav.scrolled { box-shadow: 0 2px 24px rgba(0, 0, 0, 0.08); }
                .nav-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 16px 24px;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-brand { font-family: 'Playfair Display', Georgia, serif; font-size: 1.25rem; }
                .nav-links { display: flex; gap: 28px; align-items: center; }
                .nav-link { font-size: 0.85rem; color: #6b7280; text-decoration: none; transition: color 0.2s; }
                .nav-link:hover { color: #1a1a1a; }
                .nav-book { animation: pulseGlow 2.5s ease-in-out infinite; }

                .hero {
                    background: linear-gradient(160deg, #fffbf0 0%, #fef3c7 40%, #fff7ed 70%, #ffffff 100%);
                    padding: 80px 24px 96px;
                    text-align: center;
                    position: relative;
                    overflow: hidden;
                }
                .hero-orb { position: absolute; border-radius: 50%; pointer-events: none; }
                .hero-orb-top {
                    top: 40px; right: 40px; width: 280px; height: 280px;
                    background: radial-gradient(circle, rgba(253, 230, 138, 0.4), transparent);
                }
                .hero-orb-bottom {
                    bottom: 0; left: 0; width: 200px; height: 200px;
                    background: radial-gradient(circle, rgba(252, 211, 77, 0.3), transparent);
                }
                .hero-inner { max-width: 800px; margin: 0 auto; position: relative; }
                .hero-eyebrow { text-align: center; animation: fadeInUp 0.8s ease both; }
                .hero-h1 {
                    font-family: 'Playfair Display', Georgia, serif;
                    font-size: clamp(2.4rem, 6vw, 4rem);
                    line-height: 1.15;
                    color: #1a1a1a;
                    margin-bottom: 24px;
                    font-weight: 500;
                    animation: fadeInUp 0.8s ease 0.1s both;
                }
                .hero-copy {
                    color: #4b5563;
                    line-height: 1.8;
                    font-size: 1.1rem;
                    max-width: 600px;
                    margin: 0 auto 40px;
                    animation: fadeInUp 0.8s ease 0.2s both;
                }
                .hero-ctas {
                    display: flex;
                    gap: 16px;
                    justify-content: center;
                    flex-wrap: wrap;
                    animation: fadeInUp 0.8s ease 0.3s both;
                }
                .hero-credentials {
                    margin-top: 40px;
                    font-size: 0.85rem;
                    color: #b45309;
                    animation: fadeInUp 0.8s ease 0.4s both;
                }

                .stats-band { padding: 64px 24px; background: #fff; border-top: 1px solid #fef3c7; border-bottom: 1px solid #fef3c7; }
                .stats-grid { max-width: 900px; margin: 0 auto; display: grid; grid-template-columns: repeat(4, 1fr); gap: 32px; text-align: center; }
                .stat-number { font-family: 'Playfair Display', serif; font-size: clamp(2.2rem, 4vw, 3rem); font-weight: 700; color: #92400e; line-height: 1; }
                .stat-label { font-size: 0.7rem; color: #9ca3af; font-weight: 600; letter-spacing: 0.15em; text-transform: uppercase; margin-top: 8px; }

                .about-section { padding: 96px 24px; }
                .about-grid { max-width: 1100px; margin: 0 auto; display: grid; grid-template-columns: 1fr 1fr; gap: 64px; align-items: center; }
                .about-portrait-wrap { display: flex; justify-content: center; }
                .about-portrait-anchor { position: relative; }
                .about-portrait {
                    width: 320px; height: 320px; border-radius: 50%;
                    background: linear-gradient(135deg, #fef3c7 0%, #fde68a 50%, #fcd34d 100%);
                    border: 6px solid #fff;
                    box-shadow: 0 24px 60px rgba(180, 83, 9, 0.2);
                    display: flex; align-items: center; justify-content: center;
                    animation: float 4s ease-in-out infinite;
                }
                .about-portrait-text { text-align: center; padding: 0 32px; }
                .about-portrait-name { font-family: 'Playfair Display', serif; color: #78350f; font-size: 1.5rem; margin-bottom: 8px; }
                .about-portrait-role { color: #b45309; font-size: 0.9rem; line-height: 1.6; }
                .about-portrait-mark { margin-top: 16px; font-size: 1.5rem; color: #d97706; }
                .about-portrait-badge {
                    position: absolute; bottom: -12px; right: -12px;
                    background: #fff; border-radius: 50px; padding: 8px 16px;
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.1);
                    border: 1px solid #fef3c7;
                    font-size: 0.75rem; font-weight: 600; color: #78350f;
                }
                .pull-quote {
                    border-left: 4px solid #d97706;
                    background: linear-gradient(to right, #fffbf0, #fff);
                    padding: 20px 24px;
                    border-radius: 0 12px 12px 0;
                    margin: 24px 0;
                }
                .pull-quote p { color: #4b5563; line-height: 1.8; font-style: italic; }

                .credentials-section { padding: 96px 24px; background: linear-gradient(160deg, #fffbf0 0%, #fef3c7 60%, #fff7ed 100%); }
                .credentials-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 24px; margin-bottom: 32px; }
                .credential-card {
                    background: #fff; border-radius: 20px; padding: 32px;
                    box-shadow: 0 2px 16px rgba(180, 83, 9, 0.06);
                    border: 1px solid #fef3c7;
                    transition: transform 0.3s, box-shadow 0.3s;
                    height: 100%;
                }
                .credential-card:hover { transform: translateY(-4px); box-shadow: 0 20px 40px rgba(180, 83, 9, 0.12); }
                .credential-icon {
                    width: 56px; height: 56px; border-radius: 16px;
                    background: linear-gradient(135deg, #fef3c7, #fde68a);
                    display: flex; align-items: center; justify-content: center;
                    font-size: 1.5rem; margin-bottom: 24px;
                }
                .credential-card h3 { font-family: 'Playfair Display', serif; font-size: 1.2rem; margin-bottom: 12px; font-weight: 500; }
                .commitment-banner {
                    background: #fff; border-radius: 20px; padding: 32px;
                    border-left: 4px solid #d97706;
                    box-shadow: 0 2px 16px rgba(180, 83, 9, 0.06);
                }
                .commitment-banner p { color: #374151; line-height: 1.8; }

                .approach-section { padding: 96px 24px; background: #fff; }
                .approach-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 20px; margin-bottom: 64px; }
                .approach-card {
                    background: #fffbf0; border-radius: 20px; padding: 32px;
                    border: 1px solid #fef3c7;
                    transition: transform 0.3s, box-shadow 0.3s;
                }
                .approach-card:hover { transform: translateY(-4px); box-shadow: 0 16px 32px rgba(180, 83, 9, 0.1); }
                .approach-mark { color: #d97706; font-size: 1.3rem; margin-bottom: 12px; }
                .approach-card h3 { font-family: 'Playfair Display', serif; font-size: 1.15rem; margin-bottom: 10px; font-weight: 500; }
                .art-panel {
                    border-radius: 28px; padding: 64px 48px; text-align: center;
                    background: linear-gradient(135deg, #fffbf0 0%, #fef3c7 50%, #fde68a 100%);
                }
                .art-panel h3 { font-family: 'Playfair Display', serif; font-size: 2rem; margin-bottom: 12px; font-weight: 500; }
                .art-subcopy { color: #6b7280; max-width: 480px; margin: 0 auto 40px; font-size: 0.9rem; }
                .art-grid { display: grid; grid-template-columns: repeat(6, 1fr); gap: 16px; max-width: 600px; margin: 0 auto; }
                .art-pillar { text-align: center; }
                .art-letter { font-family: 'Playfair Display', serif; font-size: 2.2rem; font-weight: 700; color: #b45309; line-height: 1; }
                .art-word { font-size: 0.7rem; font-weight: 600; color: #78350f; margin-top: 4px; }

                .services-section { padding: 96px 24px; background: #fafaf9; }
                .services-inner { max-width: 800px; margin: 0 auto; }
                .package-list { display: flex; flex-direction: column; gap: 20px; }
                .package-card {
                    background: #fff; border-radius: 20px; padding: 32px;
                    box-shadow: 0 2px 16px rgba(0, 0, 0, 0.04);
                    transition: transform 0.3s, box-shadow 0.3s;
                }
                .package-card:hover { transform: translateX(4px); box-shadow: -4px 8px 32px rgba(180, 83, 9, 0.1); }
                .package-card.accent-deep { border-left: 4px solid #d97706; }
                .package-card.accent-mid { border-left: 4px solid #f59e0b; }
                .package-card.accent-light { border-left: 4px solid #fbbf24; }
                .package-head { display: flex; justify-content: space-between; align-items: flex-start; flex-wrap: wrap; gap: 16px; margin-bottom: 20px; }
                .package-badge {
                    display: inline-block; padding: 3px 12px;
                    background: #fef3c7; color: #78350f;
                    font-size: 0.7rem; font-weight: 700; border-radius: 20px;
                    letter-spacing: 0.05em; text-transform: uppercase;
                    margin-bottom: 10px;
                }
                .package-card h3 { font-family: 'Playfair Display', serif; font-size: 1.4rem; margin-bottom: 4px; font-weight: 500; }
                .package-sub { color: #b45309; font-size: 0.85rem; font-weight: 500; }
                .package-price-wrap { text-align: right; }
                .package-price { font-family: 'Playfair Display', serif; font-size: 2.2rem; color: #b45309; line-height: 1; }
                .package-unit { color: #9ca3af; font-size: 0.75rem; }
                .package-items { list-style: none; padding: 0; margin: 0 0 16px; display: flex; flex-direction: column; gap: 8px; }
                .package-items li { display: flex; align-items: flex-start; gap: 8px; color: #4b5563; font-size: 0.85rem; }
                .item-mark { color: #d97706; margin-top: 2px; flex-shrink: 0; }
                .pricing-banner {
                    margin-top: 40px; border-radius: 20px; padding: 32px;
                    border: 1px solid #fde68a; text-align: center;
                    background: linear-gradient(135deg, #fffbf0, #fef3c7);
                }
                .pricing-banner p { color: #374151; font-size: 0.9rem; margin-bottom: 6px; }
                .pricing-banner p.fine-print { color: #9ca3af; margin-bottom: 0; }
                .services-cta { text-align: center; margin-top: 40px; }

                .resources-section { padding: 96px 24px; background: #fff; }
                .resources-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 20px; }
                .resource-card {
                    background: #fff; border-radius: 20px; padding: 28px;
                    border: 1px solid #f3f4f6;
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.04);
                    transition: transform 0.3s, box-shadow 0.3s;
                    cursor: pointer;
                    height: 100%;
                }
                .resource-card:hover { transform: translateY(-4px); box-shadow: 0 16px 32px rgba(180, 83, 9, 0.1); }
                .resource-chip {
                    display: inline-block; padding: 3px 10px;
                    background: #fef3c7; color: #78350f;
                    font-size: 0.68rem; font-weight: 600; border-radius: 20px;
                    letter-spacing: 0.05em; text-transform: uppercase;
                    margin-bottom: 16px;
                }
                .resource-card h3 { font-family: 'Playfair Display', serif; font-size: 1rem; margin-bottom: 10px; line-height: 1.4; font-weight: 500; }
                .resource-card p { color: #6b7280; font-size: 0.83rem; line-height: 1.6; margin-bottom: 16px; }
                .resource-more { display: flex; align-items: center; gap: 6px; color: #b45309; font-size: 0.83rem; font-weight: 600; }

                .faq-section { padding: 96px 24px; background: #fafaf9; }
                .faq-inner { max-width: 720px; margin: 0 auto; }
                .faq-list { display: flex; flex-direction: column; gap: 12px; }
                .faq-item {
                    background: #fff; border-radius: 16px;
                    border: 1px solid #f3f4f6; overflow: hidden;
                    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.04);
                }
                .faq-question {
                    width: 100%; text-align: left; padding: 20px 28px;
                    display: flex; align-items: center; justify-content: space-between; gap: 16px;
                    background: none; border: none; cursor: pointer;
                    font-family: 'Lora', serif;
                }
                .faq-question-text { font-weight: 600; color: #1a1a1a; font-size: 0.9rem; line-height: 1.5; }
                .faq-chevron { color: #d97706; flex-shrink: 0; transition: transform 0.3s ease; }
                .faq-chevron.open { transform: rotate(180deg); }
                .faq-answer { max-height: 0; overflow: hidden; transition: max-height 0.4s cubic-bezier(0.4, 0, 0.2, 1); }
                .faq-answer.open { max-height: 300px; }
                .faq-answer p { padding: 0 28px 24px; color: #4b5563; font-size: 0.88rem; line-height: 1.8; }

                .contact-section { padding: 96px 24px; background: #fff; }
                .contact-inner { max-width: 1000px; margin: 0 auto; }
                .contact-columns { display: grid; grid-template-columns: 1fr 1fr; gap: 40px; }
                .booking-card { border-radius: 24px; padding: 32px; margin-bottom: 24px; background: linear-gradient(135deg, #fffbf0, #fef3c7); }
                .booking-card-icon {
                    width: 48px; height: 48px; border-radius: 14px;
                    background: #d97706; color: #fff;
                    display: flex; align-items: center; justify-content: center;
                    margin-bottom: 20px;
                }
                .booking-card h3 { font-family: 'Playfair Display', serif; font-size: 1.2rem; margin-bottom: 10px; font-weight: 500; }
                .booking-card p { color: #4b5563; line-height: 1.8; font-size: 0.85rem; margin-bottom: 20px; }
                .direct-contact-card { background: #fff; border-radius: 20px; padding: 28px; border: 1px solid #fef3c7; }
                .direct-contact-card h3 { font-family: 'Playfair Display', serif; font-size: 1.1rem; margin-bottom: 20px; font-weight: 500; }
                .direct-contact-list { display: flex; flex-direction: column; gap: 16px; }
                .direct-contact-link {
                    display: flex; align-items: center; gap: 12px;
                    color: #4b5563; text-decoration: none; font-size: 0.88rem;
                    transition: color 0.2s;
                }
                a.direct-contact-link.mail:hover { color: #b45309; }
                a.direct-contact-link.whatsapp:hover { color: #16a34a; }
                .direct-contact-badge {
                    width: 36px; height: 36px; border-radius: 10px;
                    display: flex; align-items: center; justify-content: center;
                    flex-shrink: 0;
                }
                .direct-contact-badge.mail { background: #fffbf0; color: #b45309; }
                .direct-contact-badge.whatsapp { background: #f0fdf4; color: #16a34a; }
                .contact-form-card {
                    background: #fff; border-radius: 20px; padding: 32px;
                    border: 1px solid #f3f4f6;
                    box-shadow: 0 2px 16px rgba(0, 0, 0, 0.04);
                }
                .contact-form-card h3 { font-family: 'Playfair Display', serif; font-size: 1.2rem; margin-bottom: 24px; font-weight: 500; }
                .contact-form-card form { display: flex; flex-direction: column; gap: 16px; }
                .contact-form-card input,
                .contact-form-card textarea {
                    width: 100%; padding: 12px 16px;
                    border: 1.5px solid #e5e7eb; border-radius: 10px;
                    font-family: 'Lora', serif; font-size: 0.9rem; color: #1a1a1a;
                    outline: none; resize: none;
                    transition: border-color 0.2s, box-shadow 0.2s;
                }
                .contact-form-card input:focus,
                .contact-form-card textarea:focus {
                    border-color: #d97706;
                    box-shadow: 0 0 0 3px rgba(217, 119, 6, 0.1);
                }
                .form-ack {
                    background: #f0fdf4; border: 1px solid #bbf7d0;
                    border-radius: 10px; padding: 12px 16px;
                    text-align: center; color: #15803d;
                    font-size: 0.85rem; font-weight: 500;
                }

                .site-footer { background: #1a1a1a; color: #9ca3af; padding: 64px 24px; }
                .footer-inner { max-width: 900px; margin: 0 auto; text-align: center; }
                .footer-brand { font-family: 'Playfair Display', serif; font-size: 1.5rem; color: #fff; margin-bottom: 8px; }
                .footer-role { font-size: 0.85rem; color: #6b7280; margin-bottom: 32px; }
                .footer-links { display: flex; justify-content: center; flex-wrap: wrap; gap: 24px; margin-bottom: 32px; font-size: 0.85rem; }
                .footer-links a { color: #6b7280; text-decoration: none; transition: color 0.2s; }
                .footer-links a:hover { color: #fff; }
                .footer-contact { display: flex; justify-content: center; gap: 24px; margin-bottom: 32px; flex-wrap: wrap; }
                .footer-contact a {
                    color: #6b7280; text-decoration: none; font-size: 0.83rem;
                    display: flex; align-items: center; gap: 6px;
                    transition: color 0.2s;
                }
                .footer-contact a:hover { color: #fff; }
                .footer-legal { border-top: 1px solid #374151; padding-top: 24px; font-size: 0.75rem; color: #4b5563; }

                @media (max-width: 768px) {
                    .two-col { grid-template-columns: 1fr !important; }
                    .three-col { grid-template-columns: 1fr 1fr !important; }
                    .four-col { grid-template-columns: 1fr 1fr !important; }
                    .six-col { grid-template-columns: repeat(3, 1fr) !important; }
                    .hero-h1 { font-size: 2.4rem !important; }
                    .nav-links { gap: 16px; }
                    .nav-link { display: none; }
                }
                @media (max-width: 480px) {
                    .three-col { grid-template-columns: 1fr !important; }
                    .four-col { grid-template-columns: 1fr 1fr !important; }
                }
                "#}
            </style>

            <Nav booking_url={config.booking_url} />
            <Hero booking_url={config.booking_url} />
            <StatsBand />
            <AboutSection />
            <CredentialsSection />
            <ApproachSection />
            <ServicesSection booking_url={config.booking_url} />
            <ResourcesSection />
            <FaqSection />
            <ContactSection config={config.clone()} />
            <Footer {config} />
        </div>
    }
}
