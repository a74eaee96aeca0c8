//! Canvas painting.
//!
//! Applies a [`RenderPlan`] to a real `<canvas>`: sizes it, then fills it
//! solid or with a vertical hard-stop gradient. The canvas context is
//! opaque (`alpha: false`), matching what the square needs.

use tinysquare_core::{stripe_stops, Fill, RenderPlan};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, ContextAttributes2d, HtmlCanvasElement};

/// Get an opaque 2D rendering context from canvas.
pub fn get_2d_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    let attrs = ContextAttributes2d::new();
    attrs.set_alpha(false);
    Ok(canvas
        .get_context_with_context_options("2d", &attrs)?
        .ok_or_else(|| JsValue::from_str("No 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?)
}

/// Paint the square described by the plan.
///
/// Fails when the 2D context is unavailable; the caller skips the
/// dependent UI updates in that case.
pub fn paint_square(canvas: &HtmlCanvasElement, plan: &RenderPlan) -> Result<(), JsValue> {
    canvas.set_width(plan.size);
    canvas.set_height(plan.size);
    let ctx = get_2d_context(canvas)?;
    let size = plan.size as f64;

    match &plan.fill {
        Fill::Solid(color) => ctx.set_fill_style_str(color),
        Fill::Stripes(palette) => {
            // One band per color, hard edges via coincident stops.
            let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, size);
            for stop in stripe_stops(palette.colors) {
                gradient.add_color_stop(stop.offset as f32, stop.color)?;
            }
            ctx.set_fill_style_canvas_gradient(&gradient);
        }
    }
    ctx.fill_rect(0.0, 0.0, size, size);
    Ok(())
}

/// The canvas's current contents as a PNG data URL.
pub fn data_url(canvas: &HtmlCanvasElement) -> Result<String, JsValue> {
    canvas.to_data_url()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use tinysquare_core::{plan, ResolvedState};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fresh_canvas() -> HtmlCanvasElement {
        web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .create_element("canvas")
            .unwrap()
            .dyn_into()
            .unwrap()
    }

    fn plan_for(color: &str, size: u32) -> RenderPlan {
        plan(&ResolvedState {
            color: color.to_string(),
            size,
        })
    }

    #[wasm_bindgen_test]
    fn solid_paint_sizes_canvas_and_yields_png() {
        let canvas = fresh_canvas();
        paint_square(&canvas, &plan_for("00FF00", 32)).unwrap();

        assert_eq!(canvas.width(), 32);
        assert_eq!(canvas.height(), 32);
        assert!(data_url(&canvas).unwrap().starts_with("data:image/png"));
    }

    #[wasm_bindgen_test]
    fn stripe_paint_succeeds_at_odd_sizes() {
        let canvas = fresh_canvas();
        paint_square(&canvas, &plan_for("rainbow", 21)).unwrap();

        assert_eq!(canvas.width(), 21);
        assert_eq!(canvas.height(), 21);
    }

    #[wasm_bindgen_test]
    fn repaint_is_idempotent() {
        let canvas = fresh_canvas();
        let plan = plan_for("#123456", 16);
        paint_square(&canvas, &plan).unwrap();
        let first = data_url(&canvas).unwrap();
        paint_square(&canvas, &plan).unwrap();
        assert_eq!(data_url(&canvas).unwrap(), first);
    }
}
