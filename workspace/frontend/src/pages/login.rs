use yew::prelude::*;

use crate::components::auth::error_message::ErrorMessage;
use crate::components::auth::forgot_password::ForgotPasswordForm;
use crate::components::auth::input_field::InputField;
use crate::hooks::login::use_login;

/// Shown in the card footer; the value is static until a health endpoint
/// exists to back it.
const SYSTEM_STATUS: &str = "operational";

fn status_dot_class(status: &str) -> &'static str {
    match status {
        "operational" => "bg-success",
        "degraded" => "bg-warning",
        "maintenance" => "bg-info",
        _ => "bg-danger",
    }
}

/// Demo login screen: a two-state machine between the sign-in form and the
/// forgot-password form, toggled by explicit user action only.
#[function_component(UserAuthentication)]
pub fn user_authentication() -> Html {
    let show_forgot_password = use_state(|| false);
    let login = use_login();

    let on_submit = {
        let submit = login.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let open_forgot_password = {
        let show_forgot_password = show_forgot_password.clone();
        Callback::from(move |_| show_forgot_password.set(true))
    };

    let back_to_login = {
        let show_forgot_password = show_forgot_password.clone();
        Callback::from(move |_| show_forgot_password.set(false))
    };

    let toggle_remember = {
        let toggle = login.toggle_remember.clone();
        Callback::from(move |_| toggle.emit(()))
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-slate-50 px-4 py-12">
            <div class="w-full max-w-md">
                {if !*show_forgot_password {
                    html! {
                        <div class="bg-white rounded-lg border border-border shadow-sm p-8">
                            <div class="text-center mb-8">
                                <h1 class="text-2xl font-bold text-text-primary">{"Crime Analyzer"}</h1>
                                <p class="text-text-secondary mt-2">
                                    {"AI-driven crime data analysis platform"}
                                </p>
                            </div>

                            {if let Some(message) = login.form.error.as_ref() {
                                html! { <ErrorMessage message={message.clone()} /> }
                            } else {
                                html! {}
                            }}

                            <form onsubmit={on_submit} class="space-y-6">
                                <InputField
                                    label="Email"
                                    input_type="email"
                                    id="email"
                                    placeholder="your@email.com"
                                    value={login.form.email.clone()}
                                    on_change={login.on_email_change.clone()}
                                    disabled={login.form.submitting}
                                />

                                <InputField
                                    label="Password"
                                    input_type="password"
                                    id="password"
                                    placeholder="••••••••"
                                    value={login.form.password.clone()}
                                    on_change={login.on_password_change.clone()}
                                    disabled={login.form.submitting}
                                />

                                <div class="flex items-center justify-between">
                                    <label class="flex items-center text-sm text-text-secondary">
                                        <input
                                            type="checkbox"
                                            id="remember-me"
                                            class="mr-2"
                                            checked={login.form.remember_me}
                                            onchange={toggle_remember}
                                        />
                                        {"Remember me"}
                                    </label>
                                    <button
                                        type="button"
                                        class="text-sm font-medium text-primary hover:text-primary-dark"
                                        onclick={open_forgot_password}
                                    >
                                        {"Forgot password?"}
                                    </button>
                                </div>

                                <button
                                    type="submit"
                                    class="w-full py-2.5 bg-primary text-white rounded-md text-sm font-medium hover:bg-primary-light disabled:opacity-60"
                                    disabled={login.form.submitting}
                                >
                                    {if login.form.submitting { "Signing in..." } else { "Sign In" }}
                                </button>
                            </form>

                            <div class="mt-6 text-center text-sm text-text-tertiary">
                                <p>
                                    {"By signing in, you agree to our "}
                                    <a href="#" class="text-primary hover:underline">{"Privacy Policy"}</a>
                                </p>
                            </div>

                            <div class="mt-8 flex items-center justify-center space-x-2 text-sm">
                                <span class={classes!(
                                    "h-2", "w-2", "rounded-full",
                                    status_dot_class(SYSTEM_STATUS)
                                )}></span>
                                <span class="text-text-secondary">
                                    {format!("System status: {SYSTEM_STATUS}")}
                                </span>
                            </div>
                        </div>
                    }
                } else {
                    html! { <ForgotPasswordForm on_back_to_login={back_to_login} /> }
                }}
            </div>
        </div>
    }
}
