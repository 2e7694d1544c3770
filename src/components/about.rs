use yew::prelude::*;

use crate::content::{anchor, AboutContent};
use crate::hooks::use_scroll_reveal;
use crate::reveal::{stagger_delay_ms, RevealController};

pub const ENTRY_STAGGER_MS: u32 = 200;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    #[prop_or_default]
    pub content: AboutContent,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let content = &props.content;
    let visible = use_scroll_reveal(RevealController::new(anchor::ABOUT, false));

    html! {
        <section id={anchor::ABOUT} class="about">
            <div class="about-inner">
                <div class={classes!("about-heading", visible.then(|| "revealed"))}>
                    <h2>{&content.title}</h2>
                    <div class="about-underline"></div>
                </div>

                <div class="timeline">
                    <div class="timeline-line"></div>
                    {
                        for content.timeline.iter().enumerate().map(|(index, entry)| {
                            let side = if index % 2 == 0 { "timeline-entry--left" } else { "timeline-entry--right" };
                            html! {
                                <div
                                    key={format!("{}{}", entry.year, index)}
                                    class={classes!("timeline-entry", side, visible.then(|| "revealed"))}
                                    style={format!("transition-delay: {}ms;", stagger_delay_ms(index, ENTRY_STAGGER_MS))}
                                >
                                    <div class="timeline-year">
                                        <span>{&entry.year}</span>
                                    </div>
                                    <div class="timeline-body">
                                        <div class="timeline-card">
                                            <h3>{&entry.title}</h3>
                                            <p>{&entry.description}</p>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                    }
                </div>
            </div>

            <style>
                {r#"
                .about {
                    position: relative;
                    min-height: 100vh;
                    padding: 6rem 0;
                    overflow: hidden;
                }

                .about-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 2rem;
                }

                .about-heading {
                    text-align: center;
                    margin: -2.5rem 0 5rem;
                    opacity: 0;
                    transform: translateY(4px);
                    transition: opacity 0.7s ease, transform 0.7s ease;
                }

                .about-heading h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #ffffff;
                    margin-bottom: 1rem;
                }

                .about-underline {
                    width: 5rem;
                    height: 0.25rem;
                    margin: 0 auto;
                    border-radius: 9999px;
                    background: #3b82f6;
                }

                .timeline {
                    position: relative;
                }

                .timeline-line {
                    position: absolute;
                    left: 50%;
                    width: 2px;
                    height: 100%;
                    transform: translateX(-50%);
                    background: rgba(59, 130, 246, 0.2);
                }

                .timeline-entry {
                    position: relative;
                    display: flex;
                    align-items: center;
                    margin-bottom: 3rem;
                    opacity: 0;
                    transform: translateY(1rem);
                    transition: opacity 0.7s ease, transform 0.7s ease;
                }

                .about-heading.revealed,
                .timeline-entry.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }

                .timeline-year {
                    position: absolute;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    background: #3b82f6;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #ffffff;
                    font-weight: 700;
                    font-size: 0.8rem;
                }

                .timeline-body {
                    width: 41.666%;
                }

                .timeline-entry--left .timeline-body {
                    padding-right: 4rem;
                    text-align: right;
                }

                .timeline-entry--right .timeline-body {
                    padding-left: 4rem;
                    margin-left: auto;
                }

                .timeline-card {
                    padding: 1.5rem;
                    border-radius: 0.75rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(59, 130, 246, 0.2);
                    backdrop-filter: blur(4px);
                    transition: all 0.3s ease;
                }

                .timeline-card:hover {
                    border-color: rgba(59, 130, 246, 0.4);
                    transform: translateY(-0.25rem);
                }

                .timeline-card h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #ffffff;
                    margin-bottom: 0.5rem;
                }

                .timeline-card p {
                    color: #d1d5db;
                }

                @media (max-width: 640px) {
                    .timeline-line {
                        display: none;
                    }

                    .timeline-entry {
                        flex-direction: column;
                        margin-bottom: 2rem;
                    }

                    .timeline-year {
                        position: static;
                        transform: none;
                        margin-bottom: 1rem;
                    }

                    .timeline-body,
                    .timeline-entry--left .timeline-body,
                    .timeline-entry--right .timeline-body {
                        width: 100%;
                        padding: 0;
                        margin: 0;
                        text-align: left;
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

    #[test]
    fn third_entry_waits_400ms() {
        assert_eq!(stagger_delay_ms(2, ENTRY_STAGGER_MS), 400);
    }
}
