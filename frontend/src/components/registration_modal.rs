use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::leads::{submit_lead, LeadError, LeadFlow, SupabaseStore};
use crate::timing::{GlooDelay, SystemClock};

#[derive(Properties, PartialEq)]
pub struct RegistrationModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

pub enum RegistrationMsg {
    SetEmail(String),
    SetTelegram(String),
    Submit,
    Finished(Result<(), LeadError>),
    SuccessShown,
    Close,
}

pub struct RegistrationModal {
    flow: LeadFlow<SystemClock, GlooDelay>,
    store: SupabaseStore,
}

impl Component for RegistrationModal {
    type Message = RegistrationMsg;
    type Properties = RegistrationModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            flow: LeadFlow::new(config::LEAD_SUCCESS_CLOSE_MS, SystemClock, GlooDelay),
            store: SupabaseStore::from_config(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            RegistrationMsg::SetEmail(email) => {
                self.flow.form_mut().email = email;
                true
            }
            RegistrationMsg::SetTelegram(telegram) => {
                self.flow.form_mut().telegram = telegram;
                true
            }
            RegistrationMsg::Submit => {
                match self.flow.form_mut().begin_submit() {
                    Ok(record) => {
                        let store = self.store.clone();
                        // Dropped silently if the modal is gone by the time it resolves.
                        ctx.link().send_future(async move {
                            RegistrationMsg::Finished(submit_lead(&store, record).await)
                        });
                    }
                    Err(e) => info!("Lead form not sent: {}", e),
                }
                true
            }
            RegistrationMsg::Finished(result) => {
                let link = ctx.link().clone();
                self.flow.finish(result, move || {
                    link.send_message(RegistrationMsg::SuccessShown)
                });
                true
            }
            RegistrationMsg::SuccessShown => {
                if !self.flow.poll_close() {
                    return false;
                }
                ctx.props().on_close.emit(());
                true
            }
            RegistrationMsg::Close => {
                ctx.props().on_close.emit(());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !ctx.props().is_open {
            return html! {};
        }

        let close = ctx.link().callback(|_: MouseEvent| RegistrationMsg::Close);
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            RegistrationMsg::Submit
        });
        let form = self.flow.form();
        let submitting = form.is_submitting();

        html! {
            <>
                <div class="modal-backdrop" onclick={close.clone()}></div>
                <div class="modal-frame">
                    <div class="modal">
                        <button class="modal__close" onclick={close}>{"✕"}</button>
                        if form.is_success() {
                            <div class="modal__success">
                                <div class="modal__success-icon">{"✓"}</div>
                                <h3>{"Отлично!"}</h3>
                                <p>{"Мы свяжемся с тобой, когда всё будет готово."}</p>
                            </div>
                        } else {
                            <h2 class="modal__title">
                                {"Оставь контакты, в конце года планирую "}
                                <span class="accent">{"интересный проект)"}</span>
                            </h2>
                            <p class="modal__lead">{"Не спамлю. Просто напишу один раз."}</p>

                            <form class="modal__form" {onsubmit}>
                                <label>
                                    <span>{"Email"}</span>
                                    <input
                                        type="email"
                                        required=true
                                        placeholder="hello@example.com"
                                        value={form.email.clone()}
                                        oninput={ctx.link().callback(|e: InputEvent| {
                                            let input: HtmlInputElement = e.target_unchecked_into();
                                            RegistrationMsg::SetEmail(input.value())
                                        })}
                                    />
                                </label>
                                <label>
                                    <span>{"Telegram"}</span>
                                    <input
                                        type="text"
                                        required=true
                                        placeholder="@username"
                                        value={form.telegram.clone()}
                                        oninput={ctx.link().callback(|e: InputEvent| {
                                            let input: HtmlInputElement = e.target_unchecked_into();
                                            RegistrationMsg::SetTelegram(input.value())
                                        })}
                                    />
                                </label>

                                if let Some(error) = form.error() {
                                    <p class="modal__error">{ error }</p>
                                }

                                <button type="submit" class="modal__submit" disabled={submitting}>
                                    if submitting {
                                        <span class="spinner"></span>
                                        {"Отправка..."}
                                    } else {
                                        {"Вступить"}
                                    }
                                </button>
                            </form>
                        }
                    </div>
                </div>
                <style>
                    {r#"
                    .modal-backdrop {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.4);
                        backdrop-filter: blur(4px);
                        z-index: 100;
                        animation: modal-fade 0.2s ease-out;
                    }
                    .modal-frame {
                        position: fixed;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        z-index: 101;
                        pointer-events: none;
                    }
                    .modal {
                        position: relative;
                        width: 100%;
                        max-width: 32rem;
                        background: #fff;
                        border-radius: 2rem;
                        padding: 3rem;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                        pointer-events: auto;
                        overflow: hidden;
                        animation: modal-pop 0.3s cubic-bezier(0.16, 1, 0.3, 1);
                    }
                    .modal__close {
                        position: absolute;
                        top: 1.5rem;
                        right: 1.5rem;
                        border: none;
                        background: transparent;
                        font-size: 1.25rem;
                        color: #6b7280;
                        border-radius: 9999px;
                        padding: 0.5rem;
                        cursor: pointer;
                    }
                    .modal__close:hover { background: #f3f4f6; }
                    .modal__title {
                        font-family: var(--font-heading);
                        font-size: 2.25rem;
                        font-weight: 500;
                        line-height: 1.2;
                        margin: 0 0 1rem;
                    }
                    .modal__lead {
                        color: var(--text-secondary);
                        font-size: 1.125rem;
                        margin-bottom: 2rem;
                    }
                    .modal__form { display: flex; flex-direction: column; gap: 1rem; }
                    .modal__form label span {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: var(--text-secondary);
                        margin: 0 0 0.375rem 0.25rem;
                    }
                    .modal__form input {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 1rem 1.5rem;
                        border-radius: 0.75rem;
                        background: #f9fafb;
                        border: 2px solid transparent;
                        font-size: 1.125rem;
                        transition: all 0.2s;
                    }
                    .modal__form input:focus {
                        outline: none;
                        background: #fff;
                        border-color: rgba(37, 99, 235, 0.2);
                    }
                    .modal__error { color: #ef4444; font-size: 0.875rem; margin: 0 0 0 0.25rem; }
                    .modal__submit {
                        margin-top: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        background: var(--brand);
                        color: #fff;
                        font-size: 1.125rem;
                        font-weight: 500;
                        padding: 1rem;
                        border: none;
                        border-radius: 9999px;
                        cursor: pointer;
                        transition: all 0.2s;
                    }
                    .modal__submit:hover { background: var(--brand-accent); }
                    .modal__submit:disabled { opacity: 0.7; cursor: not-allowed; }
                    .modal__success {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                        padding: 3rem 0;
                    }
                    .modal__success h3 { font-family: var(--font-heading); font-size: 1.5rem; font-weight: 500; margin: 0 0 0.5rem; }
                    .modal__success p { color: var(--text-secondary); }
                    .modal__success-icon {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 9999px;
                        background: #dcfce7;
                        color: #16a34a;
                        font-size: 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1.5rem;
                    }
                    .spinner {
                        width: 1.25rem;
                        height: 1.25rem;
                        border: 2px solid rgba(255, 255, 255, 0.4);
                        border-top-color: #fff;
                        border-radius: 50%;
                        animation: spin 0.8s linear infinite;
                    }
                    @keyframes spin { to { transform: rotate(360deg); } }
                    @keyframes modal-fade { from { opacity: 0; } to { opacity: 1; } }
                    @keyframes modal-pop {
                        from { opacity: 0; transform: scale(0.9) translateY(20px); }
                        to { opacity: 1; transform: scale(1) translateY(0); }
                    }
                    "#}
                </style>
            </>
        }
    }
}
