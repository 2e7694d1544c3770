use yew::prelude::*;

use crate::content::{anchor, certifications, Certification, EXTERNAL_LINK_REL};
use crate::hooks::{use_loading_swap, use_scroll_reveal};
use crate::reveal::{stagger_delay_ms, RevealController};

pub const PLACEHOLDER_CARDS: usize = 2;
pub const LOADING_DELAY_MS: u32 = 1_000;
pub const CARD_STAGGER_MS: u32 = 100;

#[derive(Debug, PartialEq)]
enum CardSet<'a> {
    Placeholders(usize),
    Loaded(&'a [Certification]),
}

fn card_set(loading: bool, certs: &[Certification]) -> CardSet<'_> {
    if loading {
        CardSet::Placeholders(PLACEHOLDER_CARDS)
    } else {
        CardSet::Loaded(certs)
    }
}

#[function_component(SkeletonCard)]
fn skeleton_card() -> Html {
    html! {
        <div class="cert-card cert-card--skeleton">
            <div class="cert-card__body">
                <div class="skeleton-bar" style="height: 1.5rem; width: 66%;"></div>
                <div class="skeleton-bar" style="width: 50%;"></div>
                <div class="skeleton-bar" style="width: 100%;"></div>
                <div class="skeleton-bar" style="width: 75%;"></div>
                <div class="skeleton-bar skeleton-bar--pill"></div>
            </div>
        </div>
    }
}

/// Cards run a keyframe entrance, so the stagger also applies when they mount already revealed.
fn card_delay_style(index: usize) -> String {
    format!("animation-delay: {}ms;", stagger_delay_ms(index, CARD_STAGGER_MS))
}

fn certification_card(index: usize, cert: &Certification, visible: bool) -> Html {
    html! {
        <div
            key={cert.title.clone()}
            class={classes!("cert-card", "cert-card--loaded", visible.then(|| "revealed"))}
            style={card_delay_style(index)}
        >
            <div class="cert-card__body">
                <div class="cert-card__title">
                    <i class={classes!("fa-solid", cert.icon.clone())}></i>
                    <h3>{&cert.title}</h3>
                </div>
                <p class="cert-card__issuer">{format!("Issued by {}", cert.issuer)}</p>
                <p class="cert-card__description">{&cert.description}</p>
                <div class="cert-card__footer">
                    <a href={cert.link.clone()} target="_blank" rel={EXTERNAL_LINK_REL}>
                        <span>{"View Certificate"}</span>
                        <svg class="cert-card__arrow" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M17 8l4 4m0 0l-4 4m4-4H3" />
                        </svg>
                    </a>
                </div>
            </div>
        </div>
    }
}

#[function_component(Certifications)]
pub fn certifications_section() -> Html {
    let visible = use_scroll_reveal(RevealController::new(anchor::CERTIFICATIONS, false));
    let loading = use_loading_swap(LOADING_DELAY_MS);
    let certs = use_memo(|_| certifications(), ());

    let cards = match card_set(loading, &certs) {
        CardSet::Placeholders(count) => (0..count)
            .map(|index| html! { <SkeletonCard key={index} /> })
            .collect::<Html>(),
        CardSet::Loaded(certs) => certs
            .iter()
            .enumerate()
            .map(|(index, cert)| certification_card(index, cert, visible))
            .collect::<Html>(),
    };

    html! {
        <section id={anchor::CERTIFICATIONS} class="certifications">
            <div class="certifications-inner">
                <div class={classes!("certifications-heading", visible.then(|| "revealed"))}>
                    <h2>{"My Certifications"}</h2>
                    <div class="certifications-underline"></div>
                    <p>{"A showcase of my professional certifications in full-stack development and UX design"}</p>
                </div>

                <div class="certifications-grid">
                    {cards}
                </div>
            </div>

            <style>
                {r#"
                .certifications {
                    position: relative;
                    min-height: 100vh;
                    padding: 6rem 0;
                    overflow: hidden;
                }

                .certifications-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 2rem;
                }

                .certifications-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                    opacity: 0;
                    transform: translateY(4px);
                    transition: opacity 0.7s ease, transform 0.7s ease;
                }

                .certifications-heading h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #ffffff;
                    margin-bottom: 1rem;
                }

                .certifications-underline {
                    width: 5rem;
                    height: 0.25rem;
                    margin: 0 auto 1rem;
                    border-radius: 9999px;
                    background: #3b82f6;
                }

                .certifications-heading p {
                    max-width: 42rem;
                    margin: 0 auto;
                    color: #9ca3af;
                }

                .certifications-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                }

                .cert-card {
                    border-radius: 0.75rem;
                    overflow: hidden;
                    background: rgba(31, 41, 55, 0.3);
                }

                .cert-card--loaded {
                    border: 1px solid rgba(55, 65, 81, 0.5);
                    backdrop-filter: blur(4px);
                    opacity: 0;
                    transition: transform 0.5s ease, border-color 0.5s ease;
                }

                .cert-card--loaded.revealed {
                    animation: card-rise 0.5s ease forwards;
                }

                @keyframes card-rise {
                    from {
                        opacity: 0;
                        translate: 0 4px;
                    }
                    to {
                        opacity: 1;
                        translate: 0 0;
                    }
                }

                .certifications-heading.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }

                .cert-card--loaded.revealed:hover {
                    border-color: rgba(59, 130, 246, 0.5);
                    transform: translateY(-0.5rem);
                }

                .cert-card__body {
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .cert-card__title {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .cert-card__title i {
                    font-size: 1.5rem;
                    color: #60a5fa;
                }

                .cert-card__title h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #ffffff;
                    transition: color 0.3s ease;
                }

                .cert-card:hover .cert-card__title h3 {
                    color: #60a5fa;
                }

                .cert-card__issuer,
                .cert-card__description {
                    color: #9ca3af;
                    font-size: 0.875rem;
                }

                .cert-card__footer {
                    padding-top: 1rem;
                    border-top: 1px solid rgba(55, 65, 81, 0.5);
                }

                .cert-card__footer a {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #60a5fa;
                    text-decoration: none;
                }

                .cert-card__arrow {
                    width: 1rem;
                    height: 1rem;
                    transition: transform 0.3s ease;
                }

                .cert-card:hover .cert-card__arrow {
                    transform: translateX(0.25rem);
                }

                .cert-card--skeleton {
                    animation: pulse 2s ease-in-out infinite;
                }

                .skeleton-bar {
                    height: 1rem;
                    border-radius: 0.25rem;
                    background: rgba(55, 65, 81, 0.3);
                }

                .skeleton-bar--pill {
                    height: 2rem;
                    width: 6rem;
                    border-radius: 9999px;
                }

                @keyframes pulse {
                    50% { opacity: 0.5; }
                }

                @media (max-width: 768px) {
                    .certifications-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loading::LoadingSwap;

    #[test]
    fn placeholders_until_loaded_then_every_certification() {
        let certs = certifications();
        let mut swap = LoadingSwap::Loading;

        assert_eq!(card_set(swap.is_loading(), &certs), CardSet::Placeholders(2));

        swap.finish();
        match card_set(swap.is_loading(), &certs) {
            CardSet::Loaded(loaded) => assert_eq!(loaded.len(), 2),
            other => panic!("expected loaded cards, got {:?}", other),
        }
    }

    #[test]
    fn second_card_waits_100ms() {
        assert_eq!(stagger_delay_ms(1, CARD_STAGGER_MS), 100);
    }

    #[test]
    fn card_stagger_is_an_animation_delay() {
        assert_eq!(card_delay_style(0), "animation-delay: 0ms;");
        assert_eq!(card_delay_style(1), "animation-delay: 100ms;");
    }
}
