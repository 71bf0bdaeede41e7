use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::components::cards::{ImpactPlans, PillarLabel, PillarList, Timeline};
use crate::components::nav::Nav;
use crate::components::portrait::HeroPortrait;
use crate::components::section_header::SectionHeader;
use crate::content::Folio;
use crate::scroll::navigator::{BrowserViewport, NavTarget, Section, SectionAnchors, SectionNavigator};

#[derive(Properties, PartialEq)]
pub struct FolioPageProps {
    pub folio: Rc<Folio>,
}

#[function_component(FolioPage)]
pub fn folio_page(props: &FolioPageProps) -> Html {
    let folio = &props.folio;
    let anchors = use_memo(|_| SectionAnchors::default(), ());

    let navigate = {
        let anchors = anchors.clone();
        Callback::from(move |target: NavTarget| {
            info!("Navigating to {:?}", target);
            SectionNavigator::new(BrowserViewport::new((*anchors).clone())).navigate_to(target);
        })
    };

    // Honour a `#section` fragment in the address on first load
    {
        let anchors = anchors.clone();
        use_effect_with_deps(
            move |_| {
                let fragment = web_sys::window()
                    .and_then(|window| window.location().hash().ok())
                    .unwrap_or_default();
                let id = fragment.trim_start_matches('#');
                if !id.is_empty() {
                    SectionNavigator::new(BrowserViewport::new((*anchors).clone())).navigate_to_id(id);
                }
                || ()
            },
            (),
        );
    }

    let explore = {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(NavTarget::Section(Section::Portfolio)))
    };

    let section_attrs = |section: Section| (section.anchor(), anchors.node_ref(section));
    let (portfolio_id, portfolio_ref) = section_attrs(Section::Portfolio);
    let (timeline_id, timeline_ref) = section_attrs(Section::Timeline);
    let (blueprint_id, blueprint_ref) = section_attrs(Section::Blueprint);
    let (contact_id, contact_ref) = section_attrs(Section::Contact);

    html! {
        <div class="folio">
            <Nav brand={folio.brand.clone()} on_navigate={navigate.clone()} />

            <section class="hero">
                <div class="hero-grid">
                    <div class="hero-copy">
                        <div class="reveal-item">
                            <span class="personal-note hero-note">{&folio.hero.note}</span>
                        </div>
                        <h1 class="hero-headline">
                            { for folio.pillars.iter().enumerate().map(|(idx, pillar)| html! {
                                <div
                                    class="reveal-item"
                                    style={format!("animation-delay: {:.1}s;", 0.1 * (idx + 1) as f64)}
                                >
                                    <PillarLabel pillar={pillar.clone()} />
                                </div>
                            }) }
                        </h1>
                        <div class="reveal-item hero-text">
                            <p class="hero-lede">{&folio.hero.lede}</p>
                            <p class="hero-body">{&folio.hero.body}</p>
                        </div>
                        <button class="reveal-item hero-cta" onclick={explore}>
                            <span>{&folio.hero.cta}</span>
                            <i class="arrow">{"↓"}</i>
                        </button>
                    </div>

                    <div class="reveal-item hero-visual">
                        <HeroPortrait
                            src={folio.hero.portrait_url.clone()}
                            alt={folio.hero.portrait_alt.clone()}
                        />
                        <div class="hero-badge">
                            <span class="hero-badge-label">{&folio.hero.badge_label}</span>
                            <span class="hero-badge-value">{&folio.hero.badge_value}</span>
                        </div>
                        <span class="personal-note hero-signature">{&folio.hero.signature}</span>
                    </div>
                </div>
            </section>

            <section id={portfolio_id} ref={portfolio_ref} class="folio-section pillars-section">
                <div class="section-inner">
                    <SectionHeader heading={folio.headings.portfolio.clone()} />
                    <PillarList pillars={folio.pillars.clone()} />
                </div>
            </section>

            <section id={timeline_id} ref={timeline_ref} class="folio-section timeline-section">
                <div class="section-inner">
                    <SectionHeader heading={folio.headings.timeline.clone()} />
                    <Timeline entries={folio.career.clone()} />
                </div>
            </section>

            <section id={blueprint_id} ref={blueprint_ref} class="folio-section blueprint-section">
                <div class="section-inner">
                    <SectionHeader heading={folio.headings.blueprint.clone()} dark={true} />
                    <div class="reveal-item impact-callout">
                        <h3 class="impact-heading">{&folio.impact.heading}</h3>
                        <p class="impact-pitch">{&folio.impact.pitch}</p>
                        <ImpactPlans plans={folio.impact.plans.clone()} />
                    </div>
                </div>
            </section>

            <section id={contact_id} ref={contact_ref} class="folio-section contact-section">
                <div class="reveal-item contact-card">
                    <div class="contact-labels">
                        { for folio.pillars.iter().map(|pillar| html! {
                            <div><PillarLabel pillar={pillar.clone()} /></div>
                        }) }
                    </div>
                    <h3 class="contact-heading">{&folio.contact.heading}</h3>
                    <a class="contact-link" href={folio.contact.mailto()}>
                        <span class="contact-icon">{"✉"}</span>
                        <span class="contact-address">{&folio.contact.email}</span>
                    </a>
                </div>
            </section>

            <footer class="folio-footer">
                <div class="footer-inner">
                    <div>
                        <p class="footer-name">{&folio.footer.name}</p>
                        <p class="footer-tagline">{&folio.footer.tagline}</p>
                    </div>
                    <div class="footer-notes">
                        { for folio.footer.notes.iter().enumerate().map(|(idx, note)| html! {
                            <>
                                { if idx > 0 { html! { <span class="footer-dot"></span> } } else { html! {} } }
                                <span>{note}</span>
                            </>
                        }) }
                    </div>
                </div>
            </footer>

            <style>
                {r#"
                .folio {
                    min-height: 100vh;
                    background: #fafaf9;
                    color: #18181b;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    overflow-x: hidden;
                }

                @keyframes reveal {
                    from {
                        opacity: 0;
                        transform: translateY(24px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                .reveal-item {
                    animation: reveal 0.8s ease-out both;
                }

                .personal-note {
                    font-family: "Caveat", cursive;
                    color: #71717a;
                }

                .accent-text-amber { color: #f59e0b; }
                .accent-text-emerald { color: #10b981; }
                .accent-text-blue { color: #3b82f6; }
                .accent-bg-amber { background: #f59e0b; }
                .accent-bg-emerald { background: #10b981; }
                .accent-bg-blue { background: #3b82f6; }
                .accent-bg-slate { background: #64748b; }

                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding: 8rem 2rem 5rem;
                }

                .hero-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 5rem;
                    align-items: center;
                }

                .hero-note {
                    font-size: 1.5rem;
                }

                .hero-headline {
                    font-size: clamp(3.5rem, 9vw, 8rem);
                    font-weight: 900;
                    line-height: 0.9;
                    letter-spacing: -0.05em;
                    margin: 1.5rem 0 3rem;
                }

                .hero-lede {
                    font-size: 1.75rem;
                    font-weight: 900;
                    line-height: 1.2;
                    color: #27272a;
                }

                .hero-body {
                    font-size: 1.1rem;
                    color: #71717a;
                    line-height: 1.7;
                    border-left: 4px solid #f59e0b;
                    padding-left: 1.5rem;
                }

                .hero-cta {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-top: 3rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                    color: #a1a1aa;
                    font-size: 0.75rem;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                }

                .hero-cta:hover {
                    color: #d97706;
                }

                .hero-visual {
                    position: relative;
                }

                .portrait-frame {
                    aspect-ratio: 4 / 5;
                    background: #fff;
                    border: 24px solid #fff;
                    border-radius: 5rem;
                    overflow: hidden;
                    transform: rotate(2deg);
                    transition: transform 1.2s ease-out;
                    box-shadow: 0 30px 60px -15px rgba(0, 0, 0, 0.12);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .hero-visual:hover .portrait-frame {
                    transform: rotate(0deg);
                }

                .portrait-image {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .portrait-placeholder {
                    color: #a1a1aa;
                    font-weight: 900;
                    text-align: center;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    font-size: 0.75rem;
                    padding: 3rem;
                    line-height: 1.7;
                }

                .portrait-placeholder-sub {
                    font-size: 10px;
                    font-style: italic;
                    opacity: 0.6;
                }

                .hero-badge {
                    position: absolute;
                    top: -4rem;
                    right: -4rem;
                    background: #18181b;
                    color: #fff;
                    padding: 2.5rem;
                    border-radius: 2.5rem;
                    border: 6px solid #fff;
                    transform: rotate(12deg);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }

                .hero-badge-label {
                    font-size: 10px;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                    opacity: 0.7;
                    margin-bottom: 0.5rem;
                }

                .hero-badge-value {
                    font-size: 2.25rem;
                    font-weight: 900;
                }

                .hero-signature {
                    position: absolute;
                    bottom: -5rem;
                    right: 2rem;
                    transform: rotate(3deg);
                    opacity: 0.6;
                    font-size: 1.9rem;
                }

                .folio-section {
                    padding: 10rem 2rem;
                }

                .section-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                }

                .section-header {
                    margin-bottom: 3rem;
                }

                .section-header-rule-row {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                }

                .section-header-rule {
                    height: 2px;
                    width: 2.5rem;
                    background: #f59e0b;
                }

                .section-header-annotation {
                    color: #d97706;
                    font-weight: 900;
                    letter-spacing: 0.25em;
                    text-transform: uppercase;
                    font-size: 10px;
                }

                .section-header-title {
                    font-size: clamp(3rem, 10vw, 8rem);
                    font-weight: 900;
                    letter-spacing: -0.05em;
                    line-height: 1;
                    margin: 0 0 1.5rem;
                }

                .section-header-subtitle {
                    font-size: 1.25rem;
                    max-width: 48rem;
                    color: #52525b;
                    line-height: 1.6;
                }

                .section-header.dark .section-header-title {
                    color: #fff;
                }

                .section-header.dark .section-header-subtitle {
                    color: #d4d4d8;
                }

                .section-header.dark .section-header-annotation {
                    color: #fbbf24;
                }

                .pillars-section {
                    background: #fff;
                    border-top: 1px solid #f4f4f5;
                    border-bottom: 1px solid #f4f4f5;
                }

                .pillar-list {
                    display: grid;
                    gap: 8rem;
                    margin-top: 5rem;
                }

                .pillar-card {
                    display: flex;
                    align-items: center;
                    gap: 5rem;
                }

                .pillar-label {
                    font-size: clamp(3rem, 8vw, 6rem);
                    font-weight: 900;
                    letter-spacing: -0.05em;
                    margin: 0;
                    flex-shrink: 0;
                }

                .pillar-title-row {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .pillar-rule {
                    height: 2px;
                    width: 3rem;
                }

                .pillar-title {
                    font-size: 1.9rem;
                    font-weight: 900;
                    margin: 0;
                }

                .pillar-description {
                    font-size: 1.25rem;
                    color: #71717a;
                    line-height: 1.7;
                    padding-left: 1rem;
                    border-left: 4px solid #f4f4f5;
                }

                .timeline-section {
                    background: rgba(250, 250, 250, 0.5);
                }

                .timeline {
                    display: grid;
                    gap: 2.5rem;
                }

                .timeline-card {
                    background: #fff;
                    padding: 3rem;
                    border-radius: 3.5rem;
                    border: 1px solid #f4f4f5;
                    box-shadow: 0 10px 30px -10px rgba(0, 0, 0, 0.08);
                }

                .timeline-card-head {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    margin-bottom: 2.5rem;
                }

                .timeline-identity {
                    display: flex;
                    align-items: center;
                    gap: 1.25rem;
                }

                .timeline-badge {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 1rem;
                    border: 4px solid #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.75rem;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }

                .timeline-role {
                    font-size: 1.9rem;
                    font-weight: 900;
                    margin: 0 0 0.25rem;
                }

                .timeline-org {
                    color: #a1a1aa;
                    font-weight: 700;
                    font-size: 1.25rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    margin: 0;
                }

                .timeline-date {
                    font-size: 0.75rem;
                    font-weight: 900;
                    color: #71717a;
                    background: rgba(244, 244, 245, 0.8);
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    letter-spacing: 0.2em;
                }

                .timeline-details {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: grid;
                    gap: 1.25rem;
                }

                .timeline-detail {
                    display: flex;
                    align-items: flex-start;
                    gap: 1.25rem;
                    padding: 2rem;
                    background: rgba(250, 250, 250, 0.5);
                    border-radius: 1.5rem;
                    border: 1px solid rgba(244, 244, 245, 0.5);
                }

                .timeline-detail p {
                    margin: 0;
                    font-weight: 700;
                    font-size: 1.4rem;
                    color: #27272a;
                    line-height: 1.35;
                }

                .timeline-check {
                    color: #f59e0b;
                    font-weight: 900;
                }

                .blueprint-section {
                    background: #18181b;
                    color: #fff;
                }

                .impact-callout {
                    background: #f59e0b;
                    color: #18181b;
                    border-radius: 5rem;
                    padding: 6rem;
                }

                .impact-heading {
                    font-size: clamp(2.25rem, 7vw, 6rem);
                    font-weight: 900;
                    letter-spacing: -0.05em;
                    line-height: 1;
                    max-width: 64rem;
                    margin: 0 0 3rem;
                }

                .impact-pitch {
                    font-size: 1.5rem;
                    font-weight: 700;
                    font-style: italic;
                    opacity: 0.8;
                    border-left: 4px solid #18181b;
                    padding-left: 1.5rem;
                    margin-bottom: 4rem;
                }

                .impact-plans {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .impact-plan {
                    background: #fff;
                    padding: 3rem;
                    border-radius: 4rem;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    transition: transform 0.7s ease;
                }

                .impact-plan:hover {
                    transform: translateY(-5px);
                }

                .impact-plan h4 {
                    font-size: 1.9rem;
                    font-weight: 900;
                    margin: 0 0 1.5rem;
                }

                .impact-plan p {
                    font-size: 1.1rem;
                    color: #71717a;
                    line-height: 1.7;
                }

                .contact-section {
                    text-align: center;
                    background: #fff;
                }

                .contact-card {
                    max-width: 72rem;
                    margin: 0 auto;
                    background: #fafafa;
                    padding: 6rem;
                    border-radius: 6rem;
                    border: 1px solid #f4f4f5;
                }

                .contact-labels {
                    font-weight: 900;
                    font-size: clamp(2.25rem, 8vw, 7rem);
                    letter-spacing: -0.05em;
                    line-height: 0.85;
                    margin-bottom: 3rem;
                }

                .contact-heading {
                    font-size: 1.1rem;
                    font-weight: 900;
                    color: #a1a1aa;
                    text-transform: uppercase;
                    letter-spacing: 0.4em;
                    margin-bottom: 3rem;
                }

                .contact-link {
                    display: inline-flex;
                    align-items: center;
                    gap: 1.5rem;
                    background: #fff;
                    padding: 2.5rem 4rem;
                    border-radius: 9999px;
                    border: 1px solid #f4f4f5;
                    color: inherit;
                    text-decoration: none;
                    transition: all 0.7s ease;
                }

                .contact-link:hover {
                    background: #18181b;
                    color: #fff;
                }

                .contact-icon {
                    background: #fef3c7;
                    color: #d97706;
                    border-radius: 9999px;
                    padding: 1rem;
                    font-size: 2rem;
                }

                .contact-address {
                    font-size: clamp(1.1rem, 4vw, 3rem);
                    font-weight: 900;
                    letter-spacing: -0.05em;
                    word-break: break-all;
                }

                .folio-footer {
                    padding: 5rem 2rem;
                    border-top: 1px solid #f4f4f5;
                }

                .footer-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 2.5rem;
                }

                .footer-name {
                    font-weight: 900;
                    font-size: 1.25rem;
                    letter-spacing: -0.05em;
                    margin: 0 0 1rem;
                }

                .footer-tagline,
                .footer-notes {
                    color: #a1a1aa;
                    font-size: 10px;
                    font-weight: 900;
                    text-transform: uppercase;
                    letter-spacing: 0.3em;
                }

                .footer-notes {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .footer-dot {
                    height: 4px;
                    width: 4px;
                    background: #f59e0b;
                    border-radius: 9999px;
                }

                @media (max-width: 1024px) {
                    .hero-grid {
                        grid-template-columns: 1fr;
                        gap: 3rem;
                    }

                    .hero-visual {
                        order: -1;
                    }

                    .pillar-card {
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 2rem;
                    }

                    .impact-plans {
                        grid-template-columns: 1fr;
                    }
                }

                @media (max-width: 768px) {
                    .folio-section {
                        padding: 6rem 1.5rem;
                    }

                    .hero-badge {
                        top: -2rem;
                        right: -1rem;
                        padding: 1.5rem;
                    }

                    .impact-callout,
                    .contact-card {
                        padding: 3rem 1.5rem;
                        border-radius: 3rem;
                    }

                    .timeline-card {
                        padding: 2rem 1.75rem;
                        border-radius: 2.5rem;
                    }

                    .timeline-card-head,
                    .footer-inner {
                        flex-direction: column;
                        gap: 1.25rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
