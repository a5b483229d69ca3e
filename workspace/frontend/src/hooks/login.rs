use common::auth::{self, AuthError};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;
use crate::session;

/// Pretend round-trip time of the credential check.
pub const LOGIN_LATENCY_MS: u32 = 1_500;

#[derive(Clone, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    pub submitting: bool,
    pub error: Option<String>,
}

pub struct LoginHandle {
    pub form: LoginForm,
    pub on_email_change: Callback<Event>,
    pub on_password_change: Callback<Event>,
    pub toggle_remember: Callback<()>,
    pub submit: Callback<()>,
}

/// Form state and submit flow of the login screen.
///
/// Format failures surface immediately without the simulated latency; only a
/// well-formed pair goes through the pretend round-trip. On success the
/// static auth cookie is written and the router moves to the dashboard.
#[hook]
pub fn use_login() -> LoginHandle {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let remember_me = use_state(|| false);
    let submitting = use_state(|| false);
    let error = use_state(|| Option::<String>::None);
    let navigator = use_navigator().unwrap();

    let on_email_change = {
        let email = email.clone();
        let error = error.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            error.set(None);
        })
    };

    let on_password_change = {
        let password = password.clone();
        let error = error.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
            error.set(None);
        })
    };

    let toggle_remember = {
        let remember_me = remember_me.clone();
        use_callback((), move |_: (), _| {
            remember_me.set(!*remember_me);
        })
    };

    let submit = {
        let email = email.clone();
        let password = password.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        use_callback((), move |_: (), _| {
            if *submitting {
                return;
            }
            let email_value = (*email).clone();
            let password_value = (*password).clone();

            if !auth::validate_email(&email_value) {
                error.set(Some(AuthError::InvalidEmail.to_string()));
                return;
            }
            if !auth::validate_password(&password_value) {
                error.set(Some(AuthError::PasswordTooShort.to_string()));
                return;
            }

            error.set(None);
            submitting.set(true);

            let submitting = submitting.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                TimeoutFuture::new(LOGIN_LATENCY_MS).await;
                match auth::verify(&email_value, &password_value) {
                    Ok(()) => {
                        session::store_auth_cookie();
                        log::info!("Login accepted, entering dashboard");
                        navigator.push(&Route::DashboardHome);
                    }
                    Err(err) => {
                        log::warn!("Login rejected: {err}");
                        error.set(Some(err.to_string()));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    LoginHandle {
        form: LoginForm {
            email: (*email).clone(),
            password: (*password).clone(),
            remember_me: *remember_me,
            submitting: *submitting,
            error: (*error).clone(),
        },
        on_email_change,
        on_password_change,
        toggle_remember,
        submit,
    }
}
