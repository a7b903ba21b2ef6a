//! The repository page: header, pagination and filter controls, issue list.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::github::{self, IssueFilter};
use crate::state::{Direction, Event, Phase, ViewState};

#[component]
pub fn RepositoryPage() -> impl IntoView {
    let params = use_params_map();
    let repo_name = Memo::new(move |_| {
        github::decode_repo_name(&params.get().get("name").unwrap_or_default())
    });

    let state = RwSignal::new(ViewState::new());

    // Post-await writes go through try_update: a response that resolves after
    // the page is gone is dropped instead of touching a disposed signal.
    let dispatch = move |event: Event| {
        let _ = state.try_update(|s| s.apply(event));
    };

    let load = move || {
        let name = repo_name.get_untracked();
        if name.is_empty() {
            return;
        }
        let (filter, page) = state.with_untracked(|s| (s.filter, s.page));
        let seq = state.try_update(|s| s.begin_request()).unwrap_or_default();

        leptos::task::spawn_local(async move {
            let result = futures::future::try_join(
                github::fetch_repository(&name),
                github::fetch_issues(&name, filter, page),
            )
            .await;

            match result {
                Ok((repository, issues)) => dispatch(Event::LoadSucceeded {
                    seq,
                    repository,
                    issues,
                }),
                Err(e) => dispatch(Event::LoadFailed {
                    seq,
                    message: e.to_string(),
                }),
            }
        });
    };

    // Initial load, once per mount.
    Effect::new(move |_| {
        load();
    });

    let fetch_issues_for = move |filter: IssueFilter, page: u32| {
        let name = repo_name.get_untracked();
        let seq = state.try_update(|s| s.begin_request()).unwrap_or_default();

        leptos::task::spawn_local(async move {
            match github::fetch_issues(&name, filter, page).await {
                Ok(issues) => dispatch(Event::IssuesSucceeded {
                    seq,
                    filter,
                    page,
                    issues,
                }),
                Err(e) => dispatch(Event::IssuesFailed {
                    seq,
                    message: e.to_string(),
                }),
            }
        });
    };

    let change_page = move |direction: Direction| {
        let filter = state.with_untracked(|s| s.filter);
        if let Some(page) = state.with_untracked(|s| s.target_page(direction)) {
            fetch_issues_for(filter, page);
        }
    };

    let change_filter = move |filter: IssueFilter| {
        let page = state.with_untracked(|s| s.page);
        fetch_issues_for(filter, page);
    };

    view! {
        <div class="app">
            <Title text=move || format!("{} | Issue Browser", repo_name.get()) />

            <header class="detail-header">
                <A href="/" attr:class="back-link">"< Back to repositories"</A>
            </header>

            {move || state.with(|s| s.error.clone()).map(|e| view! {
                <div class="error">
                    <strong>"Error: "</strong>{e}
                </div>
            })}

            {move || {
                match state.with(|s| s.phase.clone()) {
                    Phase::Loading => {
                        view! { <div class="loading">"Loading repository..."</div> }.into_any()
                    }
                    Phase::Failed(message) => {
                        view! {
                            <div class="error">
                                <strong>"Error: "</strong>{message}
                                <button class="retry-btn" on:click=move |_| load()>
                                    "Try again"
                                </button>
                            </div>
                        }.into_any()
                    }
                    Phase::Ready => {
                        let Some(repository) = state.with(|s| s.repository.clone()) else {
                            return view! { <div class="empty">"Repository not found."</div> }
                                .into_any();
                        };
                        let issues = state.with(|s| s.issues.clone());
                        let (filter, page) = state.with(|s| (s.filter, s.page));

                        view! {
                            <div class="owner">
                                <img
                                    src=repository.owner.avatar_url.clone()
                                    alt=repository.owner.login.clone()
                                    class="owner-avatar"
                                />
                                <h1>{repository.name.clone()}</h1>
                                <p>{repository.description.clone().unwrap_or_else(|| "No description".to_string())}</p>
                            </div>

                            <div class="issue-controls">
                                <button
                                    class="page-btn"
                                    disabled={page == 1}
                                    on:click=move |_| change_page(Direction::Previous)
                                >
                                    "Previous"
                                </button>
                                <div class="filter-list">
                                    {IssueFilter::VARIANTS.iter().map(|f| {
                                        let f = *f;
                                        view! {
                                            <button
                                                disabled={filter == f}
                                                on:click=move |_| change_filter(f)
                                            >
                                                {f.label()}
                                            </button>
                                        }
                                    }).collect::<Vec<_>>()}
                                </div>
                                <button
                                    class="page-btn"
                                    on:click=move |_| change_page(Direction::Next)
                                >
                                    "Next"
                                </button>
                            </div>

                            <ul class="issue-list">
                                {issues.into_iter().map(|issue| {
                                    view! {
                                        <li class="issue">
                                            <img
                                                src=issue.user.avatar_url.clone()
                                                alt=issue.user.login.clone()
                                                class="issue-avatar"
                                            />
                                            <div class="issue-info">
                                                <strong>
                                                    <a href=issue.html_url.clone() target="_blank">
                                                        {issue.title.clone()}
                                                    </a>
                                                    {issue.labels.iter().map(|label| {
                                                        view! {
                                                            <span class="label-badge">{label.name.clone()}</span>
                                                        }
                                                    }).collect::<Vec<_>>()}
                                                </strong>
                                                <p>{issue.user.login.clone()}</p>
                                            </div>
                                        </li>
                                    }
                                }).collect::<Vec<_>>()}
                            </ul>
                        }.into_any()
                    }
                }
            }}
        </div>
    }
}
