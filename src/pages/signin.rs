use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{config, session, Route};

/// Sign-in view. There is no account backend: a non-empty email and password
/// set the per-tab session flags and move on to the membership page.
#[function_component(SignIn)]
pub fn sign_in() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error_setter = error.clone();
        let success_setter = success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email = (*email).trim().to_string();
            let password = (*password).trim().to_string();

            if email.is_empty() || password.is_empty() {
                error_setter.set(Some("Please enter your email and password".to_string()));
                return;
            }

            session::store_login(&email);
            gloo_console::log!("Session flags stored for", email);
            error_setter.set(None);
            success_setter.set(Some("Signed in! Redirecting...".to_string()));

            // Redirect after a short delay to show the success message
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(600).await;
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(config::MEMBERSHIP_PATH);
                }
            });
        })
    };

    html! {
        <div class="min-h-screen gradient-bg">
            <div class="signin-container">
                <h1>{"Member Sign In"}</h1>
                {
                    if let Some(error_message) = (*error).as_ref() {
                        html! {
                            <div class="error-message" style="color: red; margin-bottom: 10px;">
                                {error_message}
                            </div>
                        }
                    } else if let Some(success_message) = (*success).as_ref() {
                        html! {
                            <div class="success-message" style="color: green; margin-bottom: 10px;">
                                {success_message}
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <form onsubmit={onsubmit}>
                    <input
                        type="email"
                        placeholder="Email"
                        onchange={let email = email.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            email.set(input.value());
                        }}
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        onchange={let password = password.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            password.set(input.value());
                        }}
                    />
                    <button type="submit">{"Sign In"}</button>
                </form>
                <div class="auth-redirect">
                    {"Not a member yet? "}
                    <Link<Route> to={Route::Home}>
                        {"Learn about LIMCOMA"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
