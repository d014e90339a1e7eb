use yew::prelude::*;

use crate::components::copy_code::CopyCode;
use crate::config::{CONTACT_EMAIL, SOCIAL_LINKS};

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero__card">
                <div class="hero__grid"></div>

                <div class="hero__top">
                    <CopyCode code={CONTACT_EMAIL} class="hero__copy" />
                    <nav class="hero__social">
                        { for SOCIAL_LINKS.iter().map(|(name, href)| html! {
                            <a href={*href} target="_blank" rel="noopener noreferrer">{ *name }</a>
                        }) }
                    </nav>
                </div>

                <div class="hero__center">
                    <div class="hero__avatar">
                        <div class="hero__avatar-frame">
                            <img src="https://picsum.photos/200" alt="Profile" />
                        </div>
                        <div class="hero__badge">
                            <strong>{"Ibrakhim"}</strong>
                            <span>{"Magomaev"}</span>
                        </div>
                    </div>

                    <h1 class="hero__headline">
                        <span class="hero__marker"><span>{"Идеи"}</span></span>
                        {". Нейросети. "}
                        <span class="accent">{"Кейсы"}</span>
                        {"."}
                        <br />
                        {"Чатботы. Автоматизации."}
                    </h1>

                    <p class="hero__subtitle">
                        {"Воплощаю идеи с "}<span class="accent">{"AI"}</span>
                    </p>
                </div>

                <div class="hero__bottom">
                    <button class="hero__cta">
                        <span>{"Latest Shots"}</span>
                        <span class="hero__cta-arrow">{"↗"}</span>
                    </button>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    width: 100%;
                    min-height: 90vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 6rem 0 2rem;
                }
                .hero__card {
                    position: relative;
                    width: 100%;
                    min-height: 75vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    overflow: hidden;
                    background: rgba(63, 63, 70, 0.05);
                    border: 1px solid rgba(63, 63, 70, 0.1);
                    border-radius: 2rem;
                    backdrop-filter: blur(4px);
                    animation: hero-in 0.6s cubic-bezier(0.16, 1, 0.3, 1) both;
                }
                @keyframes hero-in {
                    from { opacity: 0; transform: scale(0.98) translateY(10px); }
                    to { opacity: 1; transform: scale(1) translateY(0); }
                }
                .hero__grid {
                    position: absolute;
                    inset: 0;
                    opacity: 0.03;
                    pointer-events: none;
                    background-image: linear-gradient(#000 1px, transparent 1px),
                        linear-gradient(90deg, #000 1px, transparent 1px);
                    background-size: 32px 32px;
                }
                .hero__top {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    padding: 2.5rem;
                }
                .hero__social {
                    display: flex;
                    gap: 1.5rem;
                    font-family: var(--font-heading);
                    font-size: 0.875rem;
                    font-weight: 500;
                }
                .hero__social a, .footer__links a {
                    color: var(--text-secondary);
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .hero__social a:hover, .footer__links a:hover { color: var(--brand-accent); }
                .hero__center {
                    position: relative;
                    z-index: 10;
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 0 1rem;
                    margin-top: -2.5rem;
                }
                .hero__avatar { position: relative; display: inline-block; margin-bottom: 2rem; transition: transform 0.3s; }
                .hero__avatar:hover { transform: scale(1.05); }
                .hero__avatar-frame {
                    width: 8rem;
                    height: 8rem;
                    border-radius: 9999px;
                    overflow: hidden;
                    border: 4px solid #fff;
                    box-shadow: 0 20px 40px -10px rgba(0, 0, 0, 0.05);
                    background: #f3f4f6;
                }
                .hero__avatar-frame img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: grayscale(1);
                    transition: filter 0.5s;
                }
                .hero__avatar-frame img:hover { filter: grayscale(0); }
                .hero__badge {
                    position: absolute;
                    bottom: -0.5rem;
                    right: -0.5rem;
                    display: flex;
                    gap: 0.5rem;
                    background: #fff;
                    padding: 0.375rem 1rem;
                    border-radius: 9999px;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    font-size: 0.75rem;
                }
                .hero__badge span { color: var(--text-secondary); }
                .hero__headline {
                    font-family: var(--font-heading);
                    font-weight: 500;
                    font-size: clamp(3rem, 7vw, 6rem);
                    letter-spacing: -0.025em;
                    line-height: 1;
                    max-width: 64rem;
                    margin: 0 auto;
                }
                .hero__marker { position: relative; display: inline-block; padding: 0 0.5rem; margin-left: -0.5rem; }
                .hero__marker::before {
                    content: '';
                    position: absolute;
                    inset: 0;
                    background: rgba(253, 224, 71, 0.4);
                    transform: skewX(-6deg);
                    border-radius: 0.5rem;
                }
                .hero__marker span { position: relative; }
                .hero__subtitle { margin-top: 2rem; font-size: 1.25rem; color: var(--text-secondary); }
                .hero__bottom { position: relative; z-index: 10; display: flex; justify-content: center; padding: 2.5rem 2.5rem 4rem; }
                .hero__cta {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    background: var(--brand);
                    color: #fff;
                    border: none;
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    font-size: 1rem;
                    font-weight: 500;
                    cursor: pointer;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transition: all 0.3s;
                }
                .hero__cta:hover { background: var(--brand-accent); }
                .hero__cta:hover .hero__cta-arrow { transform: translate(2px, -2px); }
                .hero__cta-arrow { transition: transform 0.2s; }
                @media (max-width: 767px) {
                    .hero__top { flex-direction: column; gap: 1rem; padding: 1.5rem; }
                    .hero__avatar-frame { width: 6rem; height: 6rem; }
                }
                "#}
            </style>
        </section>
    }
}
