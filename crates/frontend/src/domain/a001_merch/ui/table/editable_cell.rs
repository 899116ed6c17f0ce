use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Kind of input an editable cell switches to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellInput {
    Text,
    /// Free text that is cleaned of currency formatting before it is sent
    Currency,
    Number { max: u32 },
    Date,
}

impl CellInput {
    fn html_type(&self) -> &'static str {
        match self {
            CellInput::Text | CellInput::Currency => "text",
            CellInput::Number { .. } => "number",
            CellInput::Date => "date",
        }
    }

    fn max(&self) -> Option<String> {
        match self {
            CellInput::Number { max } => Some(max.to_string()),
            _ => None,
        }
    }

    fn input_mode(&self) -> Option<&'static str> {
        match self {
            CellInput::Currency | CellInput::Number { .. } => Some("numeric"),
            _ => None,
        }
    }
}

/// Table cell that shows a preview and turns into an input on click.
///
/// Every input event is handed to `on_change` as is. The input is seeded from
/// `value` when editing starts and is not re-synced while it is open, so text
/// the parent stores differently (a half-typed number arrives as "" and is
/// stored as 0) is not wiped under the cursor. The preview always shows what
/// `value` holds.
#[component]
pub fn EditableCell(
    /// Value shown inside the input
    #[prop(into)]
    value: Signal<String>,
    /// Text shown while not editing
    #[prop(into)]
    preview: Signal<String>,
    input: CellInput,
    #[prop(optional)]
    class: &'static str,
    /// Id of a `<datalist>` with suggestions
    #[prop(optional, into)]
    list: Option<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    let (is_editing, set_is_editing) = signal(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let start_editing = move |_: leptos::ev::MouseEvent| {
        if is_editing.get_untracked() {
            return;
        }
        set_is_editing.set(true);
        // the input only exists after the next render
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(0).await;
            if let Some(el) = input_ref.get_untracked() {
                let _ = el.focus();
            }
        });
    };

    let stop_on_key = move |ev: leptos::ev::KeyboardEvent| {
        if matches!(ev.key().as_str(), "Enter" | "Escape") {
            set_is_editing.set(false);
        }
    };

    view! {
        <TableCell class=class>
            <div class="editable" on:click=start_editing>
                <Show
                    when=move || is_editing.get()
                    fallback=move || view! {
                        <span class="editable__preview">{move || preview.get()}</span>
                    }
                >
                    <input
                        node_ref=input_ref
                        class="editable__input"
                        type=input.html_type()
                        max=input.max()
                        inputmode=input.input_mode()
                        list=list.clone()
                        prop:value=value.get_untracked()
                        on:input=move |ev| on_change.run(event_target_value(&ev))
                        on:blur=move |_| set_is_editing.set(false)
                        on:keydown=stop_on_key
                    />
                </Show>
            </div>
        </TableCell>
    }
}
