use log::debug;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::clipboard::{copy_best_effort, BrowserClipboard};
use crate::config;
use crate::confirmation::{ConfirmationDriver, ConfirmationTimings};
use crate::timing::{GlooScheduler, SystemClock};

#[derive(Properties, PartialEq)]
pub struct CopyCodeProps {
    #[prop_or(AttrValue::Static(config::CONTACT_EMAIL))]
    pub code: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

pub enum CopyCodeMsg {
    Copy,
    Tick,
}

/// Text plus a copy button that swaps into a "copied" confirmation with a
/// filling progress background.
pub struct CopyCode {
    driver: ConfirmationDriver<SystemClock, GlooScheduler>,
}

impl Component for CopyCode {
    type Message = CopyCodeMsg;
    type Properties = CopyCodeProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            driver: ConfirmationDriver::new(
                ConfirmationTimings::default(),
                SystemClock,
                GlooScheduler,
            ),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            CopyCodeMsg::Copy => {
                // The write starts here, inside the click handler; only the
                // outcome is awaited later.
                let text = ctx.props().code.to_string();
                let copying = copy_best_effort(&BrowserClipboard, text);
                spawn_local(async move {
                    debug!("copy finished: {:?}", copying.await);
                });

                // The confirmation plays whether or not the copy worked.
                let link = ctx.link().clone();
                self.driver
                    .trigger(move || link.send_message(CopyCodeMsg::Tick));
                true
            }
            CopyCodeMsg::Tick => {
                let before = self.driver.state().phase();
                self.driver.tick();
                let after = self.driver.state().phase();
                if after != before {
                    debug!("copy confirmation {:?} -> {:?}", before, after);
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let state = self.driver.state();
        let copied = state.is_confirming();
        let visible = state.is_visible();

        let progress_style = format!(
            "width: {:.2}%; opacity: {};",
            state.progress(),
            if copied { 1 } else { 0 }
        );

        html! {
            <div class={classes!("copy-code", props.class.clone())}>
                <div class="copy-code__progress" style={progress_style}></div>

                <div class={classes!("copy-code__content", copied.then(|| "copy-code__content--hidden"))}>
                    <span class="copy-code__text">{ props.code.to_string() }</span>
                    <button
                        type="button"
                        class="copy-code__button"
                        onclick={ctx.link().callback(|_| CopyCodeMsg::Copy)}
                    >
                        {"Скопировать"}
                    </button>
                </div>

                <div class={classes!("copy-code__confirmation", visible.then(|| "copy-code__confirmation--shown"))}>
                    <div class="copy-code__check">{"✓"}</div>
                    <span>{"Скопировано!"}</span>
                </div>

                <style>
                    {r#"
                    .copy-code {
                        position: relative;
                        overflow: hidden;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        background: #fff;
                        border: 1px solid rgba(63, 63, 70, 0.1);
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                        border-radius: 9999px;
                        padding: 0.25rem 0.25rem 0.25rem 0.5rem;
                    }
                    .copy-code__progress {
                        position: absolute;
                        left: 0;
                        top: 0;
                        bottom: 0;
                        background: rgba(24, 24, 27, 0.05);
                        pointer-events: none;
                        transition: opacity 0.5s cubic-bezier(0.4, 0, 0.2, 1);
                    }
                    .copy-code__content {
                        position: relative;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                        width: 100%;
                        padding-left: 1rem;
                        z-index: 20;
                        transition: all 0.5s cubic-bezier(0.4, 0, 0.2, 1);
                    }
                    .copy-code__content--hidden {
                        opacity: 0;
                        filter: blur(12px);
                        transform: scale(0.92);
                        pointer-events: none;
                        z-index: 0;
                    }
                    .copy-code__text {
                        font-size: 1.125rem;
                        color: var(--text-secondary);
                        user-select: all;
                        white-space: nowrap;
                    }
                    .copy-code__button {
                        background: var(--brand);
                        color: #fff;
                        font-weight: 500;
                        font-size: 0.875rem;
                        padding: 0.625rem 1.5rem;
                        border: none;
                        border-radius: 9999px;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .copy-code__button:hover { background: var(--brand-secondary); }
                    .copy-code__button:active { transform: scale(0.95); }
                    .copy-code__confirmation {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.75rem;
                        opacity: 0;
                        filter: blur(12px);
                        transform: scale(1.08);
                        pointer-events: none;
                        z-index: 10;
                        font-size: 1.125rem;
                        font-weight: 500;
                        transition: all 0.8s cubic-bezier(0.4, 0, 0.2, 1);
                    }
                    .copy-code__confirmation--shown {
                        opacity: 1;
                        filter: blur(0);
                        transform: scale(1);
                    }
                    .copy-code__check {
                        width: 1.5rem;
                        height: 1.5rem;
                        border-radius: 9999px;
                        background: var(--brand);
                        color: #fff;
                        font-size: 0.75rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    "#}
                </style>
            </div>
        }
    }
}
