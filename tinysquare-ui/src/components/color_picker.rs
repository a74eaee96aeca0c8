use leptos::*;

/// Color readout plus the picker input.
///
/// Clicking the readout opens the picker, so the text doubles as a target
/// for the tiny swatch control. Picker input re-resolves the color; the
/// size is untouched. Not rendered at all for stripe palettes.
#[component]
pub fn ColorPicker(
    /// Normalized color shown in the readout and seeding the picker
    #[prop(into)]
    color: Signal<String>,
    /// Called with the picked value on every input event
    on_pick: Callback<String>,
) -> impl IntoView {
    let input_ref = create_node_ref::<html::Input>();

    let open_picker = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <span class="flex items-center gap-2">
            <span class="font-mono cursor-pointer" on:click=open_picker>
                {move || color.get()}
            </span>
            <input
                type="color"
                node_ref=input_ref
                class="w-8 h-8 cursor-pointer bg-transparent"
                prop:value=move || color.get()
                on:input=move |ev| on_pick.call(event_target_value(&ev))
            />
        </span>
    }
}
