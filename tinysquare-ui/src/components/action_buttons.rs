use crate::clipboard;
use leptos::*;
use tinysquare_core::RenderPlan;

const BUTTON_CLASS: &str =
    "px-4 py-2 rounded font-medium text-white shadow hover:brightness-110 transition";

/// Download anchor styled as a button.
///
/// The filename and href are set at click time so the browser picks up the
/// latest render. The href is the canvas's PNG data URL, matching the
/// `.png` filename.
#[component]
pub fn DownloadButton(
    /// Render commands, for the download filename
    #[prop(into)]
    plan: Signal<RenderPlan>,
    /// Current PNG data URL
    #[prop(into)]
    data_url: Signal<String>,
    /// CSS background mirroring the resolved color
    #[prop(into)]
    background: Signal<String>,
) -> impl IntoView {
    let anchor_ref = create_node_ref::<html::A>();

    let on_click = move |_| {
        let Some(anchor) = anchor_ref.get() else {
            return;
        };
        anchor.set_download(&plan.get().filename);
        anchor.set_href(&data_url.get());
    };

    view! {
        <a
            node_ref=anchor_ref
            href="#"
            class=BUTTON_CLASS
            style:background=move || background.get()
            on:click=on_click
        >
            "Download image"
        </a>
    }
}

/// Copies the data URL to the clipboard on click.
#[component]
pub fn CopyButton(
    /// Current PNG data URL
    #[prop(into)]
    data_url: Signal<String>,
    /// CSS background mirroring the resolved color
    #[prop(into)]
    background: Signal<String>,
) -> impl IntoView {
    view! {
        <button
            class=BUTTON_CLASS
            style:background=move || background.get()
            on:click=move |_| clipboard::copy_text(&data_url.get())
        >
            "Copy data URL"
        </button>
    }
}
