use common::auth::{self, AuthError};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::error_message::ErrorMessage;
use super::input_field::InputField;
use crate::hooks::login::LOGIN_LATENCY_MS;

#[derive(Properties, PartialEq)]
pub struct ForgotPasswordFormProps {
    pub on_back_to_login: Callback<()>,
}

/// Password-reset stand-in: validates the email shape, pretends to send a
/// reset link, then shows a confirmation. No mail leaves the browser.
#[function_component(ForgotPasswordForm)]
pub fn forgot_password_form(props: &ForgotPasswordFormProps) -> Html {
    let email = use_state(String::new);
    let sending = use_state(|| false);
    let submitted = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    let on_email_change = {
        let email = email.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            error.set(None);
        })
    };

    let on_submit = {
        let email = email.clone();
        let sending = sending.clone();
        let submitted = submitted.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }
            if !auth::validate_email(&email) {
                error.set(Some(AuthError::InvalidEmail.to_string()));
                return;
            }
            error.set(None);
            sending.set(true);

            let sending = sending.clone();
            let submitted = submitted.clone();
            spawn_local(async move {
                TimeoutFuture::new(LOGIN_LATENCY_MS).await;
                sending.set(false);
                submitted.set(true);
            });
        })
    };

    let on_back = {
        let on_back_to_login = props.on_back_to_login.clone();
        Callback::from(move |_| on_back_to_login.emit(()))
    };

    html! {
        <div class="bg-white rounded-lg border border-border shadow-sm p-8">
            <div class="text-center mb-8">
                <h1 class="text-2xl font-bold text-text-primary">{"Reset Password"}</h1>
                <p class="text-text-secondary mt-2">
                    {"Enter your email to receive a password reset link"}
                </p>
            </div>

            {if let Some(message) = (*error).as_ref() {
                html! { <ErrorMessage message={message.clone()} /> }
            } else {
                html! {}
            }}

            {if !*submitted {
                html! {
                    <form onsubmit={on_submit} class="space-y-6">
                        <InputField
                            label="Email"
                            input_type="email"
                            id="reset-email"
                            placeholder="your@email.com"
                            value={(*email).clone()}
                            on_change={on_email_change}
                            disabled={*sending}
                        />

                        <button
                            type="submit"
                            class="w-full py-2.5 bg-primary text-white rounded-md text-sm font-medium hover:bg-primary-light disabled:opacity-60"
                            disabled={*sending}
                        >
                            {if *sending { "Sending..." } else { "Send Reset Link" }}
                        </button>

                        <button
                            type="button"
                            class="w-full py-2.5 text-sm font-medium text-text-secondary hover:text-primary"
                            onclick={on_back.clone()}
                        >
                            {"Back to Sign In"}
                        </button>
                    </form>
                }
            } else {
                html! {
                    <div class="text-center space-y-6">
                        <p class="text-text-secondary">
                            {format!(
                                "If an account exists for {}, a reset link is on its way.",
                                *email
                            )}
                        </p>
                        <button
                            class="w-full py-2.5 bg-primary text-white rounded-md text-sm font-medium hover:bg-primary-light"
                            onclick={on_back}
                        >
                            {"Back to Sign In"}
                        </button>
                    </div>
                }
            }}
        </div>
    }
}
