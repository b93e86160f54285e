use leptos::*;

#[leptos::component]
pub fn action_button<F>(
    disabled: ReadSignal<bool>,
    on_activate: F,
    children: Children,
) -> impl leptos::IntoView
where
    F: Fn() + 'static,
{
    let style = stylers::style! {
        "ActionButton",
        button {
            width: 100%;
            padding: 10px 16px;

            color: #f1f1f1;
            background-color: #3b82f6;

            border: none;
            border-radius: 6px;
            font-size: 16px;
            cursor: pointer;
        }
        button:hover {
            background-color: #2563eb;
        }

        .muted {
            opacity: 0.5;
            cursor: not-allowed;
        }
        .muted:hover {
            background-color: #3b82f6;
        }
    };

    view! {class = style,
        <button
            disabled=move || disabled.get()
            class:muted=move || disabled.get()
            on:click=move |_| {
                if !disabled.get() {
                    on_activate();
                }
            }
        >
            { children() }
        </button>
    }
}

#[leptos::component]
pub fn card(#[prop(optional)] tinted: bool, children: Children) -> impl leptos::IntoView {
    let style = stylers::style! {
        "Card",
        .card {
            background-color: #ffffff;

            border-radius: 10px;
            box-shadow: 0px 4px 12px #00000022;
        }

        .tinted {
            background-color: #eef2ff;
            border: solid #c7d2fe 1px;
            box-shadow: none;
        }
    };

    view! {class = style,
        <div class="card" class:tinted=move || tinted>
            { children() }
        </div>
    }
}
