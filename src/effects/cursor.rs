use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

// Half the glow's footprint, so it stays centred on the pointer.
const OFFSET_X: f64 = 150.0;
const OFFSET_Y: f64 = 75.0;

/// Translucent glow that tracks the pointer 1:1. No smoothing, no clamping;
/// if the element is missing the effect just stays inert.
#[function_component(CursorTrail)]
pub fn cursor_trail() -> Html {
    let trail_ref = use_node_ref();

    {
        let trail_ref = trail_ref.clone();
        use_effect_with_deps(
            move |_| {
                let mut listener: Option<(web_sys::Window, Closure<dyn FnMut(MouseEvent)>)> =
                    None;
                if let (Some(window), Some(el)) =
                    (web_sys::window(), trail_ref.cast::<HtmlElement>())
                {
                    let move_cb = Closure::wrap(Box::new(move |e: MouseEvent| {
                        let x = e.client_x() as f64 - OFFSET_X;
                        let y = e.client_y() as f64 - OFFSET_Y;
                        let _ = el.style().set_property(
                            "transform",
                            &format!("translate3d({x}px, {y}px, 0)"),
                        );
                    }) as Box<dyn FnMut(MouseEvent)>);
                    if window
                        .add_event_listener_with_callback(
                            "mousemove",
                            move_cb.as_ref().unchecked_ref(),
                        )
                        .is_ok()
                    {
                        listener = Some((window, move_cb));
                    }
                }
                move || {
                    if let Some((window, cb)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "mousemove",
                            cb.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <div ref={trail_ref} aria-hidden="true" class="cursor-trail">
            <div class="cursor-trail-glow"></div>
        </div>
    }
}
