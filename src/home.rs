//! Landing page: enter an `owner/name` identifier and open its issue page.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

#[component]
pub fn HomePage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let navigate = use_navigate();

    let open_repository = move || {
        let target = name.get();
        let target = target.trim();
        if target.is_empty() {
            return;
        }
        navigate(
            &format!("/repository/{}", urlencoding::encode(target)),
            Default::default(),
        );
    };

    let submit = open_repository.clone();

    view! {
        <div class="app">
            <Title text="Issue Browser" />

            <header>
                <h1>"Issue Browser"</h1>
                <p class="subtitle">"Browse a repository's issues by state, five at a time"</p>
            </header>

            <div class="search-box">
                <input
                    type="text"
                    placeholder="owner/repository (e.g., 'facebook/react')"
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        set_name.set(event_target_value(&ev));
                    }
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            submit();
                        }
                    }
                />
                <button on:click=move |_| open_repository()>"Open issues"</button>
            </div>
        </div>
    }
}
