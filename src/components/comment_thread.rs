//! Comment Thread Component
//!
//! Fetches the server-shaped comment tree for a task and renders it as
//! indented rows via the depth-first flatten. Every mutation (comment, reply,
//! mark solved) re-fetches the whole thread and then bumps the notification
//! trigger, since comment activity can generate notifications.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, CreateCommentArgs};
use crate::context::AppContext;
use crate::models::Comment;
use crate::tree::flatten_thread;

#[component]
pub fn CommentThread(task_id: i64) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (comments, set_comments) = signal(Vec::<Comment>::new());
    let (thread_version, set_thread_version) = signal(0u32);

    Effect::new(move |_| {
        let _ = thread_version.get();
        spawn_local(async move {
            match api::list_comments(task_id).await {
                Ok(loaded) => set_comments.set(loaded),
                Err(failure) => api::alert_error(&failure),
            }
        });
    });

    let reload_thread = move || {
        set_thread_version.update(|v| *v += 1);
        ctx.reload_notifications();
    };

    let rows = move || flatten_thread(&comments.get());

    view! {
        <div class="comment-thread">
            <For
                each=rows
                key=|(comment, depth)| (comment.id, *depth, comment.solved, comment.replies.len())
                children=move |(comment, depth)| view! {
                    <CommentRow
                        comment=comment
                        depth=depth
                        task_id=task_id
                        on_mutated=Callback::new(move |_| reload_thread())
                    />
                }
            />

            <CommentForm
                task_id=task_id
                parent_id=None
                on_submitted=Callback::new(move |_| reload_thread())
            />
        </div>
    }
}

/// A single comment row with its solve action and reply form
#[component]
fn CommentRow(
    comment: Comment,
    depth: usize,
    task_id: i64,
    #[prop(into)] on_mutated: Callback<()>,
) -> impl IntoView {
    let id = comment.id;
    let solved = comment.solved;
    let author = comment.author.username.clone();
    let created_at = comment.created_at.clone();
    let content = comment.content.clone();
    let indent = depth * 24;

    let mark_solved = move |_| {
        spawn_local(async move {
            match api::solve_comment(id).await {
                Ok(_) => on_mutated.run(()),
                Err(failure) => api::alert_error(&failure),
            }
        });
    };

    view! {
        <div
            class=if solved { "comment solved" } else { "comment" }
            style=format!("margin-left: {}px;", indent)
        >
            <div class="meta">{format!("{} • {}", author, created_at)}</div>
            <div class="content">{content}</div>

            // Solving is one-way; the action disappears once solved
            {(!solved).then(|| view! {
                <div class="comment-actions">
                    <button type="button" class="solve-btn" on:click=mark_solved>
                        "Mark solved"
                    </button>
                </div>
            })}

            <CommentForm task_id=task_id parent_id=Some(id) on_submitted=on_mutated />
        </div>
    }
}

/// Comment submission form; replies attach directly under the comment whose
/// form was used
#[component]
fn CommentForm(
    task_id: i64,
    parent_id: Option<i64>,
    #[prop(into)] on_submitted: Callback<()>,
) -> impl IntoView {
    let (content, set_content) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = content.get();
        if text.trim().is_empty() {
            return;
        }
        spawn_local(async move {
            let args = CreateCommentArgs {
                task_id,
                content: &text,
                parent_id,
            };
            match api::create_comment(&args).await {
                Ok(_) => {
                    set_content.set(String::new());
                    on_submitted.run(());
                }
                Err(failure) => api::alert_error(&failure),
            }
        });
    };

    view! {
        <form class="comment-form" on:submit=submit>
            <textarea
                class="comment-content"
                placeholder=if parent_id.is_some() { "Reply" } else { "Add a comment" }
                required
                prop:value=move || content.get()
                on:input=move |ev| set_content.set(event_target_value(&ev))
            ></textarea>
            <button type="submit">
                {if parent_id.is_some() { "Reply" } else { "Comment" }}
            </button>
        </form>
    }
}
