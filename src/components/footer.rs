use chrono::{Datelike, Local};
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::content::{anchor, FooterContent, EXTERNAL_LINK_REL};
use crate::hooks::use_scroll_reveal;
use crate::reveal::{stagger_delay_ms, RevealController};

pub const LINK_STAGGER_MS: u32 = 100;

/// `© <year> <brand>. All rights reserved.` with `<`, `/` and `>` stripped from the brand.
pub fn copyright_line(year: i32, brand_title: &str) -> String {
    let brand: String = brand_title
        .chars()
        .filter(|c| !matches!(c, '<' | '/' | '>'))
        .collect();
    format!("© {} {}. All rights reserved.", year, brand)
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

fn delay_style(delay_ms: u32) -> String {
    format!("transition-delay: {}ms;", delay_ms)
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    #[prop_or_default]
    pub content: FooterContent,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let content = &props.content;
    let visible = use_scroll_reveal(RevealController::new(anchor::FOOTER, false));
    let revealed = visible.then(|| "revealed");

    let on_scroll_top = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_top();
    });

    let copyright = copyright_line(Local::now().year(), &content.brand_title);

    html! {
        <footer id={anchor::FOOTER} role="contentinfo" class="site-footer">
            <div class="site-footer__inner">
                <div class={classes!("site-footer__columns", "fade-rise", revealed)}>
                    <div class="site-footer__column">
                        <h2 class="site-footer__brand" tabindex="0">{&content.brand_title}</h2>
                        <p class="site-footer__description">{&content.brand_description}</p>
                        <div class="site-footer__socials">
                            {
                                for content.unique_social_links().into_iter().enumerate().map(|(index, social)| html! {
                                    <a
                                        key={social.name.clone()}
                                        href={social.url.clone()}
                                        target="_blank"
                                        rel={EXTERNAL_LINK_REL}
                                        title={social.label().to_string()}
                                        aria-label={format!("Visit {} profile", social.name)}
                                        class={classes!("social-link", "pop-in", revealed)}
                                        style={delay_style(stagger_delay_ms(index, LINK_STAGGER_MS))}
                                    >
                                        <i class={social.icon.clone()}></i>
                                    </a>
                                })
                            }
                        </div>
                    </div>

                    <div class="site-footer__column">
                        <h2>{"Quick Links"}</h2>
                        <nav aria-label="Quick Links">
                            <ul class="site-footer__links">
                                {
                                    for content.quick_links.iter().enumerate().map(|(index, link)| html! {
                                        <li
                                            key={format!("{}{}", link.label, index)}
                                            class={classes!("slide-in-left", revealed)}
                                            style={delay_style(stagger_delay_ms(index, LINK_STAGGER_MS))}
                                        >
                                            <a href={link.href()}>{&link.label}</a>
                                        </li>
                                    })
                                }
                            </ul>
                        </nav>
                    </div>

                    <div class="site-footer__column">
                        <h2>{"Contact"}</h2>
                        <div class="site-footer__contact">
                            <div class={classes!("contact-row", "slide-in-right", revealed)} tabindex="0">
                                <i class="fas fa-envelope" aria-hidden="true"></i>
                                <a href={content.contact.mailto()}>{&content.contact.email}</a>
                            </div>
                            <div class={classes!("contact-row", "slide-in-right", revealed)} tabindex="0" style={delay_style(100)}>
                                <i class="fas fa-location-dot" aria-hidden="true"></i>
                                <span>{&content.contact.location}</span>
                            </div>
                        </div>
                    </div>
                </div>

                <div class={classes!("site-footer__top", "fade-in", revealed)} style={delay_style(400)}>
                    <button onclick={on_scroll_top} class="scroll-top" aria-label="Scroll to top">
                        <i class="fas fa-arrow-up"></i>
                    </button>
                </div>

                <div class={classes!("site-footer__bottom", "fade-in", revealed)} style={delay_style(500)}>
                    <p>{copyright}</p>
                    <div class="site-footer__legal">
                        <a href={content.privacy_policy_link.clone()}>{"Privacy Policy"}</a>
                        <a href={content.terms_of_service_link.clone()}>{"Terms of Service"}</a>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    position: relative;
                    padding: 5rem 0;
                    background: rgba(31, 41, 55, 0.3);
                    backdrop-filter: blur(4px);
                    border-top: 1px solid rgba(55, 65, 81, 0.5);
                }

                .site-footer__inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 2rem;
                }

                .site-footer__columns {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 5rem;
                }

                .site-footer__column {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .site-footer h2 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #ffffff;
                }

                .site-footer__brand {
                    cursor: pointer;
                    transition: color 0.3s ease;
                }

                .site-footer__brand:hover {
                    color: #60a5fa;
                }

                .site-footer p,
                .site-footer a,
                .site-footer span {
                    color: #9ca3af;
                    text-decoration: none;
                }

                .site-footer a:hover {
                    color: #60a5fa;
                }

                .site-footer__socials {
                    display: flex;
                    gap: 1rem;
                }

                .social-link {
                    padding: 0.5rem;
                    border-radius: 0.5rem;
                    background: rgba(31, 41, 55, 0.3);
                    border: 1px solid rgba(55, 65, 81, 0.5);
                }

                .social-link i,
                .site-footer__contact i,
                .scroll-top i {
                    font-size: 1.25rem;
                    color: #60a5fa;
                }

                .site-footer__links {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .site-footer__contact {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .contact-row {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    cursor: pointer;
                }

                .fade-rise,
                .pop-in,
                .slide-in-left,
                .slide-in-right,
                .fade-in {
                    opacity: 0;
                    transition: opacity 0.3s ease, transform 0.3s ease;
                }

                .fade-rise {
                    transform: translateY(20px);
                    transition-duration: 0.7s;
                }

                .pop-in {
                    transform: scale(0.8);
                }

                .slide-in-left {
                    transform: translateX(-10px);
                }

                .slide-in-right {
                    transform: translateX(10px);
                }

                .fade-rise.revealed,
                .pop-in.revealed,
                .slide-in-left.revealed,
                .slide-in-right.revealed,
                .fade-in.revealed {
                    opacity: 1;
                    transform: none;
                }

                .site-footer__top {
                    display: flex;
                    justify-content: center;
                    margin-top: 3rem;
                }

                .scroll-top {
                    padding: 0.5rem 0.75rem;
                    border: none;
                    border-radius: 9999px;
                    background: rgba(31, 41, 55, 0.5);
                    cursor: pointer;
                    transition: background 0.3s ease;
                }

                .scroll-top:hover {
                    background: rgba(59, 130, 246, 0.2);
                }

                .site-footer__bottom {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    margin-top: 5rem;
                    padding-top: 2rem;
                    border-top: 1px solid #1f2937;
                }

                .site-footer__legal {
                    display: flex;
                    gap: 1rem;
                }

                @media (max-width: 768px) {
                    .site-footer__columns {
                        grid-template-columns: 1fr;
                        gap: 3rem;
                    }

                    .site-footer__bottom {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
