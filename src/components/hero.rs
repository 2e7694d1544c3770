use yew::prelude::*;

use crate::content::{anchor, HeroContent};
use crate::hooks::{use_scroll_reveal, use_typewriter};
use crate::reveal::RevealController;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    #[prop_or_default]
    pub content: HeroContent,
}

fn entrance(visible: bool, delay_ms: u32) -> (Classes, String) {
    (
        classes!("hero-rise", visible.then(|| "revealed")),
        format!("animation-delay: {}ms;", delay_ms),
    )
}

/// First thing on screen, so it never waits for a scroll.
fn hero_reveal() -> RevealController {
    RevealController::new(anchor::HOME, true)
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let content = &props.content;
    let visible = use_scroll_reveal(hero_reveal());
    let role = use_typewriter(content.roles.clone());

    let (greeting_class, greeting_style) = entrance(visible, 0);
    let (name_class, name_style) = entrance(visible, 100);
    let (role_class, role_style) = entrance(visible, 200);
    let (cta_class, cta_style) = entrance(visible, 300);
    let (image_class, image_style) = entrance(visible, 200);

    html! {
        <section id={anchor::HOME} class="hero">
            <div class="hero-grid">
                <div class="hero-text">
                    <div class={greeting_class} style={greeting_style}>
                        <div class="hero-greeting">{&content.greeting}</div>
                    </div>

                    <h1 class={name_class} style={name_style}>
                        {"Hello, I'm"}<br />
                        <span class="hero-name">{&content.name}</span>
                    </h1>

                    <div class={role_class} style={role_style}>
                        <span class="hero-role">{role}</span>
                        <span class="hero-cursor">{"|"}</span>
                    </div>

                    <div class={classes!(cta_class, "hero-actions")} style={cta_style}>
                        <a href={anchor::href(&content.cta_anchor)} class="hero-button hero-button--primary" aria-label="Get in Touch">
                            <span>{"Get in Touch"}</span>
                        </a>
                        <a href={content.cv_href()} download="" class="hero-button hero-button--outline" aria-label="Download CV">
                            <span>{"Download CV"}</span>
                        </a>
                    </div>
                </div>

                <div class={classes!(image_class, "hero-photo")} style={image_style}>
                    <div class="hero-photo__blur"></div>
                    <div class="hero-photo__ring"></div>
                    <img src={content.profile_image.clone()} alt={content.profile_image_alt.clone()} />
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 80vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }

                .hero-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    max-width: 80rem;
                    min-height: 80vh;
                    padding: 0 2rem;
                    align-items: center;
                    justify-items: center;
                }

                .hero-text {
                    max-width: 36rem;
                    text-align: left;
                }

                .hero-rise {
                    opacity: 0;
                }

                .hero-rise.revealed {
                    animation: hero-rise 0.5s ease forwards;
                }

                @keyframes hero-rise {
                    from { opacity: 0; transform: translateY(10px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .hero-greeting {
                    display: inline-block;
                    margin-bottom: 2rem;
                    padding: 0.375rem 1rem;
                    border: 1px solid #374151;
                    border-radius: 9999px;
                    color: #d1d5db;
                    font-size: 0.875rem;
                    backdrop-filter: blur(4px);
                    transition: border-color 0.3s ease;
                }

                .hero-greeting:hover {
                    border-color: #3b82f6;
                }

                .hero h1 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #ffffff;
                    margin-bottom: 2rem;
                }

                .hero-name,
                .hero-role {
                    color: #3b82f6;
                }

                .hero-role {
                    font-size: 1.5rem;
                    font-weight: 500;
                }

                .hero-cursor {
                    color: #3b82f6;
                    animation: blink 1s step-end infinite;
                }

                @keyframes blink {
                    50% { opacity: 0; }
                }

                .hero-actions {
                    display: flex;
                    gap: 1.5rem;
                    margin-top: 2.5rem;
                }

                .hero-button {
                    padding: 0.625rem 1rem;
                    border-radius: 0.5rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }

                .hero-button:hover {
                    transform: scale(1.05);
                }

                .hero-button--primary {
                    background: #3b82f6;
                    color: #ffffff;
                }

                .hero-button--primary:hover {
                    background: #2563eb;
                }

                .hero-button--outline {
                    border: 1px solid #3b82f6;
                    color: #3b82f6;
                }

                .hero-button--outline:hover {
                    background: #3b82f6;
                    color: #ffffff;
                }

                .hero-photo {
                    position: relative;
                    width: 350px;
                    height: 350px;
                }

                .hero-photo.revealed {
                    animation-name: hero-slide;
                }

                @keyframes hero-slide {
                    from { opacity: 0; transform: translateX(10px); }
                    to { opacity: 1; transform: translateX(0); }
                }

                .hero-photo__blur {
                    position: absolute;
                    inset: 0;
                    border-radius: 50%;
                    background: rgba(59, 130, 246, 0.1);
                    backdrop-filter: blur(12px);
                }

                .hero-photo__ring {
                    position: absolute;
                    inset: 4px;
                    border-radius: 50%;
                    border: 2px dashed #60a5fa;
                    animation: spin 12s linear infinite;
                }

                @keyframes spin {
                    to { transform: rotate(360deg); }
                }

                .hero-photo img {
                    position: relative;
                    display: block;
                    width: 300px;
                    height: 300px;
                    margin: 25px auto;
                    object-fit: contain;
                    z-index: 2;
                }

                @media (max-width: 768px) {
                    .hero-grid {
                        grid-template-columns: 1fr;
                        padding: 4rem 1rem 0;
                    }

                    .hero-text {
                        text-align: center;
                    }

                    .hero-actions {
                        justify-content: center;
                    }

                    .hero-photo {
                        width: 250px;
                        height: 250px;
                    }

                    .hero-photo img {
                        width: 200px;
                        height: 200px;
                    }
                }
                "#}
            </style>
        </section>
    }
}
