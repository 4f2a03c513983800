use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use lucky_shared::lucky_wheel::{AnimatedProperty, RotationCompletion, RotationRequest, SpinPlan, WheelPresenter};
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

// Modern magical color palette, cycled over the prize wedges
const WEDGE_COLORS: [&str; 6] = [
    "#f97316", // Orange
    "#06b6d4", // Cyan
    "#8b5cf6", // Violet
    "#ec4899", // Pink
    "#22c55e", // Green
    "#eab308", // Gold
];
const NO_WIN_COLOR: &str = "#64748b";

pub fn wedge_color(index: usize, is_no_win: bool) -> &'static str {
    if is_no_win {
        NO_WIN_COLOR
    } else {
        WEDGE_COLORS[index % WEDGE_COLORS.len()]
    }
}

/// Canvas angle (radians, 0 = east) of a wheel-frame angle in degrees (0 = top, clockwise).
pub fn canvas_angle(wheel_degrees: f64) -> f64 {
    (wheel_degrees - 90.0) * PI / 180.0
}

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub rotation: f64,
    pub is_spinning: bool,
    pub labels: Vec<String>,
    #[prop_or_default]
    pub no_win_index: Option<usize>,
    /// Wedge to light up while its result is shown.
    #[prop_or_default]
    pub highlight: Option<usize>,
}

fn is_dark_mode() -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| el.class_list().contains("dark"))
        .unwrap_or(false)
}

fn draw_wheel(context: &CanvasRenderingContext2d, width: f64, height: f64, props: &WheelCanvasProps) {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.min(height) / 2.0 - 20.0;
    let dark = is_dark_mode();

    context.clear_rect(0.0, 0.0, width, height);

    // Outer glow
    let glow_intensity = if props.is_spinning { 0.25 } else { 0.15 };
    context.begin_path();
    if dark {
        context.set_fill_style_str(&format!("rgba(130, 100, 255, {})", glow_intensity));
    } else {
        context.set_fill_style_str(&format!("rgba(100, 130, 255, {})", glow_intensity));
    }
    let _ = context.arc(center_x, center_y, radius + 15.0, 0.0, 2.0 * PI);
    context.fill();

    let count = props.labels.len();
    if count == 0 {
        return;
    }
    let span = 360.0 / count as f64;

    // Rotate the wheel around its center
    context.save();
    let _ = context.translate(center_x, center_y);
    let _ = context.rotate(props.rotation * PI / 180.0);
    let _ = context.translate(-center_x, -center_y);

    for (index, label) in props.labels.iter().enumerate() {
        let start = canvas_angle(index as f64 * span);
        let end = canvas_angle((index + 1) as f64 * span);

        context.begin_path();
        context.set_fill_style_str(wedge_color(index, props.no_win_index == Some(index)));
        context.move_to(center_x, center_y);
        let _ = context.arc(center_x, center_y, radius, start, end);
        context.close_path();
        context.fill();

        if props.highlight == Some(index) {
            context.begin_path();
            context.set_fill_style_str("rgba(255, 255, 255, 0.35)");
            context.move_to(center_x, center_y);
            let _ = context.arc(center_x, center_y, radius, start, end);
            context.close_path();
            context.fill();
        }

        // Divider
        context.begin_path();
        context.set_stroke_style_str(if dark { "rgba(255, 255, 255, 0.7)" } else { "rgba(255, 255, 255, 0.9)" });
        context.set_line_width(2.5);
        context.move_to(center_x, center_y);
        context.line_to(center_x + radius * start.cos(), center_y + radius * start.sin());
        context.stroke();

        // Label along the wedge's center line
        context.save();
        let _ = context.translate(center_x, center_y);
        let _ = context.rotate(canvas_angle(index as f64 * span + span / 2.0));
        let _ = context.translate(radius * 0.62, 0.0);
        context.set_text_align("center");
        context.set_text_baseline("middle");
        context.set_fill_style_str("#ffffff");
        context.set_shadow_color("rgba(0, 0, 0, 0.5)");
        context.set_shadow_blur(3.0);
        context.set_font(if count > 8 { "bold 14px 'Segoe UI', Roboto, system-ui, sans-serif" } else { "bold 18px 'Segoe UI', Roboto, system-ui, sans-serif" });
        let _ = context.fill_text(label, 0.0, 0.0);
        context.restore();
    }

    context.restore();

    // Hub
    context.begin_path();
    context.set_fill_style_str(if dark { "#2d3142" } else { "#8b5cf6" });
    let _ = context.arc(center_x, center_y, radius * 0.18, 0.0, 2.0 * PI);
    context.fill();

    // Outer ring
    context.begin_path();
    context.set_stroke_style_str(if dark { "rgba(180, 130, 255, 0.5)" } else { "rgba(130, 100, 255, 0.5)" });
    context.set_line_width(if props.is_spinning { 5.0 } else { 4.0 });
    let _ = context.arc(center_x, center_y, radius - 2.0, 0.0, 2.0 * PI);
    context.stroke();

    // Pointer, fixed at the top
    context.set_shadow_color(if props.is_spinning { "rgba(255, 215, 130, 0.8)" } else { "rgba(255, 215, 0, 0.6)" });
    context.set_shadow_blur(if props.is_spinning { 10.0 } else { 4.0 });
    context.begin_path();
    context.move_to(center_x, center_y - radius + 5.0);
    context.line_to(center_x - 20.0, center_y - radius - 30.0);
    context.line_to(center_x + 20.0, center_y - radius - 30.0);
    context.close_path();
    context.set_fill_style_str(if props.is_spinning { "#ffd700" } else { "#f59e0b" });
    context.fill();
    context.set_stroke_style_str("#e69500");
    context.set_line_width(1.5);
    context.stroke();
    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let snapshot = WheelCanvasProps {
            rotation: props.rotation,
            is_spinning: props.is_spinning,
            labels: props.labels.clone(),
            no_win_index: props.no_win_index,
            highlight: props.highlight,
        };

        use_effect_with(snapshot, move |props| {
            let context = canvas_ref.cast::<HtmlCanvasElement>().and_then(|canvas| {
                let context = canvas
                    .get_context("2d")
                    .ok()
                    .flatten()?
                    .dyn_into::<CanvasRenderingContext2d>()
                    .ok()?;
                Some((canvas, context))
            });
            if let Some((canvas, context)) = context {
                draw_wheel(&context, canvas.width() as f64, canvas.height() as f64, props);
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
                class="w-full max-w-[450px] h-auto rounded-full shadow-lg transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(130, 100, 255, 0.4));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}

struct SpinAnimation {
    plan: SpinPlan,
    duration_ms: f64,
    start_time: f64,
    on_frame: Callback<f64>,
    on_complete: RotationCompletion,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
}

/// Drives the wheel through `requestAnimationFrame`, publishing each frame's
/// rotation to the canvas state.
#[derive(Clone)]
pub struct CanvasPresenter {
    on_frame: Callback<f64>,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
}

impl CanvasPresenter {
    pub fn new(on_frame: Callback<f64>) -> Self {
        Self {
            on_frame,
            frame: Rc::new(RefCell::new(None)),
        }
    }

    /// Cancels the pending frame when the screen unmounts. The completion is
    /// dropped with it and never fires.
    pub fn detach(&self) {
        self.frame.borrow_mut().take();
    }
}

impl WheelPresenter for CanvasPresenter {
    fn start_rotation(&self, request: RotationRequest, on_complete: RotationCompletion) {
        let animation = Rc::new(SpinAnimation {
            plan: request.plan,
            duration_ms: f64::from(request.duration_ms),
            start_time: js_sys::Date::now(),
            on_frame: self.on_frame.clone(),
            on_complete,
            frame: self.frame.clone(),
        });
        schedule_frame(animation);
    }
}

fn schedule_frame(animation: Rc<SpinAnimation>) {
    let slot = animation.frame.clone();
    let handle = request_animation_frame(move |_| animate(animation));
    *slot.borrow_mut() = Some(handle);
}

fn animate(animation: Rc<SpinAnimation>) {
    let elapsed = js_sys::Date::now() - animation.start_time;
    let progress = (elapsed / animation.duration_ms).min(1.0);
    let rotation = animation.plan.rotation_at(progress);
    animation.on_frame.emit(rotation);

    if progress < 1.0 {
        schedule_frame(animation);
    } else {
        // Animation complete
        animation.on_complete.animation_ended(AnimatedProperty::Rotation, rotation);
    }
}
