use yew::prelude::*;

use crate::navigation::{scroll_to_section, STORY, STORY_CTA};

#[function_component(StickyHeader)]
pub fn sticky_header() -> Html {
    let to_story = Callback::from(|_: MouseEvent| scroll_to_section(STORY));
    let to_cta = Callback::from(|_: MouseEvent| scroll_to_section(STORY_CTA));

    html! {
        <header class="sticky-header">
            <div class="sticky-header__bar">
                <button class="sticky-header__link" onclick={to_story}>
                    {"История"}
                </button>
                <button class="sticky-header__link sticky-header__link--primary" onclick={to_cta}>
                    {"Полезно"}
                </button>
            </div>
            <style>
                {r#"
                .sticky-header {
                    position: fixed;
                    top: 1.5rem;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    display: flex;
                    justify-content: center;
                    pointer-events: none;
                }
                .sticky-header__bar {
                    display: flex;
                    gap: 0.5rem;
                    padding: 0.375rem;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(12px);
                    border-radius: 9999px;
                    border: 1px solid rgba(229, 231, 235, 0.5);
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    pointer-events: auto;
                }
                .sticky-header__link {
                    cursor: pointer;
                    border: none;
                    background: transparent;
                    border-radius: 9999px;
                    padding: 0.5rem 1.25rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: var(--text-secondary);
                    transition: all 0.2s;
                }
                .sticky-header__link:hover { background: #f3f4f6; color: var(--text-primary); }
                .sticky-header__link:active { transform: scale(0.95); }
                .sticky-header__link--primary {
                    background: var(--brand);
                    color: #fff;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }
                .sticky-header__link--primary:hover { background: var(--brand-accent); color: #fff; }
                "#}
            </style>
        </header>
    }
}
