use crate::clipboard;
use crate::components::{ColorPicker, CopyButton, DataUrlField, DownloadButton, SquareCanvas};
use crate::query::read_query;
use leptos::*;
use tinysquare_core::{default_config, plan, resolve_color, Fill, ResolvedState};

#[component]
pub fn App() -> impl IntoView {
    let config = default_config();

    // ========== Resolve query parameters once at mount ==========
    let query = read_query();
    let auto_copy = query.auto_copy;

    let initial_state = match ResolvedState::from_query(&query, config) {
        Ok(state) => state,
        Err(e) => {
            // Defined error, defaulted here rather than silently coerced.
            log::warn!("ignoring size parameter: {e}");
            ResolvedState {
                color: resolve_color(&query, config),
                size: config.default_size_px(),
            }
        }
    };
    log::info!(
        "resolved color={} size={}",
        initial_state.color,
        initial_state.size
    );

    let (state, set_state) = create_signal(initial_state);
    let (data_url, set_data_url) = create_signal(String::new());

    // ========== Derived render commands ==========
    let render_plan = create_memo(move |_| plan(&state.get()));
    let color_label = Signal::derive(move || render_plan.get().color_label);
    let button_background = Signal::derive(move || render_plan.get().fill.css_background());
    let is_striped = create_memo(move |_| matches!(render_plan.get().fill, Fill::Stripes(_)));

    // ========== Callbacks ==========
    let on_rendered = Callback::new(move |url: String| {
        set_data_url.set(url.clone());
        if auto_copy {
            clipboard::copy_text(&url);
        }
    });

    let on_pick = Callback::new(move |picked: String| {
        set_state.update(|s| *s = s.with_color(picked));
    });

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4 bg-gray-900 text-white">
            <SquareCanvas plan=render_plan on_rendered=on_rendered />
            <div class="flex items-center gap-6">
                // Stripe palettes are fixed, so the picker is omitted and
                // only the readout remains.
                {move || if is_striped.get() {
                    view! {
                        <span class="font-mono">{move || color_label.get()}</span>
                    }
                    .into_view()
                } else {
                    view! { <ColorPicker color=color_label on_pick=on_pick /> }.into_view()
                }}
                <span class="font-mono">{move || render_plan.get().size}</span>
            </div>
            <div class="flex gap-4">
                <DownloadButton plan=render_plan data_url=data_url background=button_background />
                <CopyButton data_url=data_url background=button_background />
            </div>
            <div class="w-96 max-w-full">
                <DataUrlField value=data_url />
            </div>
        </div>
    }
}
