use crate::rendering::paint;
use leptos::*;
use tinysquare_core::RenderPlan;

/// The square itself.
///
/// Repaints whenever the plan changes and reports the fresh data URL
/// upward. An unmounted canvas or a missing 2D context skips the paint and
/// every dependent update.
#[component]
pub fn SquareCanvas(
    /// Render commands for the current state
    #[prop(into)]
    plan: Signal<RenderPlan>,
    /// Called with the PNG data URL after each successful paint
    on_rendered: Callback<String>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let plan = plan.get();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        match paint::paint_square(&canvas, &plan) {
            Ok(()) => match paint::data_url(&canvas) {
                Ok(url) => on_rendered.call(url),
                Err(e) => log::debug!("data URL unavailable: {e:?}"),
            },
            Err(e) => log::debug!("canvas rendering unavailable: {e:?}"),
        }
    });

    view! {
        <canvas node_ref=canvas_ref class="shadow-lg" />
    }
}
