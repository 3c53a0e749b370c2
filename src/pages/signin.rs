//! Combined sign-in / register page.
//!
//! Validation here is intentionally shallow (non-empty fields, a
//! literal `@`, matching confirmation); the store decides everything
//! else and reports it as a boolean, never an exception.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::use_auth;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Login,
    Register,
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let remembered = auth.remembered_identity();
    let mode = RwSignal::new(Mode::Login);
    let email = RwSignal::new(remembered.clone());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let keep = RwSignal::new(auth.keep_session());
    let remember_email = RwSignal::new(!remembered.is_empty());
    let error = RwSignal::new(None::<String>);
    let info = RwSignal::new(None::<String>);

    let reset_messages = move || {
        error.set(None);
        info.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        reset_messages();

        let email_value = email.get();
        let password_value = password.get();

        if email_value.is_empty() || password_value.is_empty() {
            error.set(Some("Enter an email and a password.".to_owned()));
            return;
        }
        if !email_value.contains('@') {
            error.set(Some("That email address does not look valid.".to_owned()));
            return;
        }

        match mode.get() {
            Mode::Register => {
                if password_value != confirm.get() {
                    error.set(Some("Password confirmation does not match.".to_owned()));
                    return;
                }
                if !auth.register(&email_value, &password_value) {
                    error.set(Some("That email is already registered.".to_owned()));
                    return;
                }
                info.set(Some("Account created. Sign in to continue.".to_owned()));
                mode.set(Mode::Login);
                password.set(String::new());
                confirm.set(String::new());
            }
            Mode::Login => {
                if !auth.login(&email_value, &password_value, Some(keep.get())) {
                    error.set(Some("Wrong email or password.".to_owned()));
                    return;
                }
                if remember_email.get() {
                    auth.set_remembered_identity(&email_value);
                } else {
                    auth.set_remembered_identity("");
                }
                navigate("/", NavigateOptions::default());
            }
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-toggle">
                    <button
                        type="button"
                        class=("active", move || mode.get() == Mode::Login)
                        on:click=move |_| {
                            reset_messages();
                            mode.set(Mode::Login);
                        }
                    >
                        "Sign In"
                    </button>
                    <button
                        type="button"
                        class=("active", move || mode.get() == Mode::Register)
                        on:click=move |_| {
                            reset_messages();
                            mode.set(Mode::Register);
                        }
                    >
                        "Register"
                    </button>
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <label>
                        "Email"
                        <input
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>

                    <label>
                        "Password"
                        <input
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <Show when=move || mode.get() == Mode::Register>
                        <label>
                            "Confirm password"
                            <input
                                type="password"
                                placeholder="Confirm password"
                                prop:value=move || confirm.get()
                                on:input=move |ev| confirm.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>

                    <Show when=move || mode.get() == Mode::Login>
                        <label class="auth-check">
                            <input
                                type="checkbox"
                                prop:checked=move || keep.get()
                                on:change=move |ev| keep.set(event_target_checked(&ev))
                            />
                            "Keep me signed in"
                        </label>
                        <label class="auth-check">
                            <input
                                type="checkbox"
                                prop:checked=move || remember_email.get()
                                on:change=move |ev| remember_email.set(event_target_checked(&ev))
                            />
                            "Remember my email"
                        </label>
                    </Show>

                    {move || error.get().map(|msg| view! { <div class="auth-error">{msg}</div> })}
                    {move || info.get().map(|msg| view! { <div class="auth-info">{msg}</div> })}

                    <button type="submit" class="auth-submit">
                        {move || match mode.get() {
                            Mode::Login => "Sign In",
                            Mode::Register => "Register",
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
