use leptos::*;

/// Read-only field mirroring the canvas's data URL.
#[component]
pub fn DataUrlField(
    /// Current PNG data URL (empty until the first paint)
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <input
            type="text"
            readonly=true
            class="w-full font-mono text-xs bg-gray-800 text-gray-300 rounded px-2 py-1"
            prop:value=move || value.get()
        />
    }
}
