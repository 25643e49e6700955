use std::f64::consts::PI;

use shared::wheel::{SEGMENTS, SEGMENT_ANGLE};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    /// Current rotation in degrees.
    pub rotation: f64,
    pub is_spinning: bool,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let rotation = props.rotation;
        let is_spinning = props.is_spinning;

        use_effect_with((rotation, is_spinning), move |(rotation, is_spinning)| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let context = canvas
                    .get_context("2d")
                    .unwrap()
                    .unwrap()
                    .dyn_into::<CanvasRenderingContext2d>()
                    .unwrap();
                draw_wheel(&context, &canvas, *rotation, *is_spinning);
            }
            || ()
        });
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width="450"
                height="450"
                class="w-full max-w-[450px] h-auto rounded-full transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(255, 170, 60, 0.5));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.25));"
                }}
            />
        </div>
    }
}

fn draw_wheel(
    context: &CanvasRenderingContext2d,
    canvas: &HtmlCanvasElement,
    rotation: f64,
    is_spinning: bool,
) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.min(height) / 2.0 - 20.0;
    let segment_rad = SEGMENT_ANGLE * PI / 180.0;

    context.clear_rect(0.0, 0.0, width, height);

    // Soft outer glow, brighter while the wheel is moving
    let glow = if is_spinning { 0.3 } else { 0.15 };
    context.begin_path();
    context.set_fill_style_str(&format!("rgba(255, 200, 90, {})", glow));
    let _ = context.arc(center_x, center_y, radius + 12.0, 0.0, 2.0 * PI);
    context.fill();

    context.save();
    let _ = context.translate(center_x, center_y);
    let _ = context.rotate(rotation * PI / 180.0);
    let _ = context.translate(-center_x, -center_y);

    // Segment wedges
    for (i, segment) in SEGMENTS.iter().enumerate() {
        let start = i as f64 * segment_rad;
        context.begin_path();
        context.set_fill_style_str(segment.color);
        context.move_to(center_x, center_y);
        let _ = context.arc(center_x, center_y, radius, start, start + segment_rad);
        context.fill();

        context.begin_path();
        context.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
        context.set_line_width(2.0);
        context.move_to(center_x, center_y);
        context.line_to(
            center_x + radius * start.cos(),
            center_y + radius * start.sin(),
        );
        context.stroke();
    }

    // Labels, drawn along each wedge's bisector
    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.set_font("bold 20px 'Segoe UI', Roboto, system-ui, sans-serif");
    for (i, segment) in SEGMENTS.iter().enumerate() {
        let mid = (i as f64 + 0.5) * segment_rad;
        context.save();
        let _ = context.translate(center_x, center_y);
        let _ = context.rotate(mid);
        let _ = context.translate(radius * 0.65, 0.0);
        let _ = context.rotate(PI / 2.0);
        context.set_fill_style_str(segment.text_color);
        let _ = context.fill_text(segment.label, 0.0, 0.0);
        context.restore();
    }

    context.restore();

    // Outer ring
    context.begin_path();
    context.set_stroke_style_str("#1f2937");
    context.set_line_width(8.0);
    let _ = context.arc(center_x, center_y, radius - 2.0, 0.0, 2.0 * PI);
    context.stroke();

    // Center hub
    let hub_radius = radius * 0.18;
    context.begin_path();
    context.set_fill_style_str("#facc15");
    let _ = context.arc(center_x, center_y, hub_radius, 0.0, 2.0 * PI);
    context.fill();
    context.begin_path();
    context.set_stroke_style_str("#1f2937");
    context.set_line_width(4.0);
    let _ = context.arc(center_x, center_y, hub_radius, 0.0, 2.0 * PI);
    context.stroke();

    context.set_fill_style_str("#1f2937");
    context.set_font("bold 16px 'Segoe UI', Roboto, system-ui, sans-serif");
    let _ = context.fill_text("SPIN", center_x, center_y);

    // Pointer at the top of the wheel
    context.set_shadow_color("rgba(0, 0, 0, 0.4)");
    context.set_shadow_blur(if is_spinning { 8.0 } else { 4.0 });
    context.begin_path();
    context.move_to(center_x, center_y - radius + 18.0);
    context.line_to(center_x - 14.0, center_y - radius - 14.0);
    context.line_to(center_x + 14.0, center_y - radius - 14.0);
    context.close_path();
    context.set_fill_style_str("#1f2937");
    context.fill();
    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);
}

/// Easing for the spin deceleration: 1 - (1-t)^4.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}
