//! Freehand drawing canvas
//!
//! Pointer input goes through a [`DrawingSurface`]; this component only
//! paints the segments it hands back.

use leptos::html::Canvas;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use vectorink_canvas::{DrawingSurface, Point, SurfaceConfig};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, PointerEvent};

/// Shared surface, owned by the page
pub type SurfaceHandle = Rc<RefCell<DrawingSurface>>;

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Fill the canvas with the surface background
pub fn wipe(canvas: &HtmlCanvasElement, config: &SurfaceConfig) {
    if let Some(ctx) = context_2d(canvas) {
        ctx.set_fill_style(&JsValue::from_str(&config.background.to_string()));
        ctx.fill_rect(0.0, 0.0, config.width as f64, config.height as f64);
    }
}

fn draw_segment(canvas: &HtmlCanvasElement, config: &SurfaceConfig, from: Point, to: Point) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };
    ctx.set_stroke_style(&JsValue::from_str(&config.stroke_color.to_string()));
    ctx.set_line_width(config.line_width as f64);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    ctx.begin_path();
    ctx.move_to(from.x as f64, from.y as f64);
    ctx.line_to(to.x as f64, to.y as f64);
    ctx.stroke();
}

/// Map a pointer position from CSS pixels to canvas pixels
fn surface_point(canvas: &HtmlCanvasElement, ev: &PointerEvent) -> Point {
    let rect = canvas.get_bounding_client_rect();
    let scale_x = if rect.width() > 0.0 {
        canvas.width() as f64 / rect.width()
    } else {
        1.0
    };
    let scale_y = if rect.height() > 0.0 {
        canvas.height() as f64 / rect.height()
    } else {
        1.0
    };
    Point::new(
        ((ev.client_x() as f64 - rect.left()) * scale_x) as f32,
        ((ev.client_y() as f64 - rect.top()) * scale_y) as f32,
    )
}

/// Canvas element driven by `surface`
#[component]
pub fn DrawingCanvas(surface: StoredValue<SurfaceHandle>, node_ref: NodeRef<Canvas>) -> impl IntoView {
    let config = surface.with_value(|s| s.borrow().config().clone());
    let (width, height) = (config.width, config.height);

    {
        let config = config.clone();
        node_ref.on_load(move |canvas| wipe(&canvas, &config));
    }

    let on_down = move |ev: PointerEvent| {
        let Some(canvas) = node_ref.get() else {
            return;
        };
        ev.prevent_default();
        let point = surface_point(&canvas, &ev);
        surface.with_value(|s| {
            s.borrow_mut().begin_stroke(point);
        });
    };

    let on_move = {
        let config = config.clone();
        move |ev: PointerEvent| {
            let Some(canvas) = node_ref.get() else {
                return;
            };
            let point = surface_point(&canvas, &ev);
            let segment = surface.with_value(|s| s.borrow_mut().extend_stroke(point));
            if let Some((from, to)) = segment {
                draw_segment(&canvas, &config, from, to);
            }
        }
    };

    let on_up = move |_: PointerEvent| {
        surface.with_value(|s| {
            s.borrow_mut().end_stroke();
        });
    };

    let on_leave = move |_: PointerEvent| {
        surface.with_value(|s| {
            s.borrow_mut().pointer_leave();
        });
    };

    view! {
        <canvas
            node_ref=node_ref
            width=width
            height=height
            class="w-full h-auto border rounded-md bg-white cursor-crosshair touch-none"
            aria-label="Drawing canvas"
            on:pointerdown=on_down
            on:pointermove=on_move
            on:pointerup=on_up
            on:pointerleave=on_leave
        />
    }
}
