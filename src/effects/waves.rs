use std::cell::{Cell, RefCell};
use std::f64::consts::PI;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

pub const PARTICLE_COUNT: usize = 30;
pub const WRAP_MARGIN: f64 = 10.0;

/// Interval between voice-level updates, and the phase step per tick.
const VOICE_TICK_MS: u32 = 60;
const VOICE_PHASE_STEP: f64 = 0.02;

const FRAME_STEP: f64 = 0.02;
const WAVE_SAMPLE_STEP: f64 = 8.0;

/// A drifting background particle. No identity beyond its slot in the field.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub vx: f64,
    pub vy: f64,
    pub hue: f64,
    pub alpha: f64,
}

impl Particle {
    /// Spawns a particle somewhere in the viewport. `rand` supplies uniform
    /// values in [0, 1); the component passes `js_sys::Math::random`, tests
    /// pass something deterministic.
    pub fn spawn(w: f64, h: f64, rand: &mut impl FnMut() -> f64) -> Self {
        Particle {
            x: rand() * w,
            y: rand() * h,
            r: 0.6 + rand() * 2.2,
            vx: -0.2 + rand() * 0.4,
            vy: -0.1 + rand() * 0.2,
            hue: 180.0 + rand() * 120.0,
            alpha: 0.04 + rand() * 0.08,
        }
    }
}

pub fn spawn_field(w: f64, h: f64, rand: &mut impl FnMut() -> f64) -> Vec<Particle> {
    (0..PARTICLE_COUNT).map(|_| Particle::spawn(w, h, rand)).collect()
}

/// Advances every particle by its velocity scaled by (1 + voice) and wraps
/// anything past the margin back to the opposite edge. The field never grows
/// or shrinks; particles wrap, they don't die.
pub fn step_field(particles: &mut [Particle], w: f64, h: f64, voice: f64) {
    let scale = 1.0 + voice;
    for p in particles.iter_mut() {
        p.x += p.vx * scale;
        p.y += p.vy * scale;
        if p.x < -WRAP_MARGIN {
            p.x = w + WRAP_MARGIN;
        }
        if p.x > w + WRAP_MARGIN {
            p.x = -WRAP_MARGIN;
        }
        if p.y < -WRAP_MARGIN {
            p.y = h + WRAP_MARGIN;
        }
        if p.y > h + WRAP_MARGIN {
            p.y = -WRAP_MARGIN;
        }
    }
}

/// Synthetic "voice level" in [0, 0.5]. Purely cosmetic; there is no real
/// audio input behind it.
pub fn voice_level(phase: f64) -> f64 {
    (phase.sin() + 1.0) * 0.25
}

/// Y-coordinate of a wave stroke sample. Amplitude swells with the voice
/// level, phase drifts with the frame counter.
pub fn wave_y(x: f64, frame: f64, offset: f64, amp: f64, speed: f64, voice: f64, h: f64) -> f64 {
    h / 2.0 + (x * 0.006 + frame * speed + offset).sin() * amp * (1.0 + voice)
}

fn draw_wave(
    ctx: &CanvasRenderingContext2d,
    frame: f64,
    offset: f64,
    amp: f64,
    color: &str,
    speed: f64,
    voice: f64,
    w: f64,
    h: f64,
) {
    ctx.begin_path();
    ctx.move_to(0.0, h / 2.0);
    let mut x = 0.0;
    while x <= w {
        ctx.line_to(x, wave_y(x, frame, offset, amp, speed, voice, h));
        x += WAVE_SAMPLE_STEP;
    }
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(1.4);
    ctx.stroke();
}

fn draw_frame(
    ctx: &CanvasRenderingContext2d,
    particles: &mut [Particle],
    frame: f64,
    voice: f64,
    w: f64,
    h: f64,
) {
    ctx.clear_rect(0.0, 0.0, w, h);

    let gradient = ctx.create_linear_gradient(0.0, 0.0, w, h);
    let _ = gradient.add_color_stop(0.0, "rgba(8,18,34,0.6)");
    let _ = gradient.add_color_stop(1.0, "rgba(2,24,38,0.6)");
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, w, h);

    step_field(particles, w, h, voice);
    for p in particles.iter() {
        ctx.begin_path();
        ctx.set_fill_style_str(&format!("hsla({:.0}, 100%, 60%, {})", p.hue, p.alpha));
        let _ = ctx.arc(p.x, p.y, p.r * (1.0 + voice * 0.6), 0.0, PI * 2.0);
        ctx.fill();
    }

    draw_wave(ctx, frame, 0.0, 22.0, "rgba(0,255,255,0.06)", 0.9, voice, w, h);
    draw_wave(ctx, frame, 1.6, 38.0, "rgba(157,0,255,0.06)", 0.6, voice, w, h);
    draw_wave(ctx, frame, 3.2, 60.0 + voice * 40.0, "rgba(0,255,255,0.10)", 0.3, voice, w, h);
}

/// Starts the whole ambient engine against a canvas: voice-level interval,
/// resize listener and the frame loop. Returns a disposer that tears all
/// three down; `None` if the window or 2d context is unavailable, in which
/// case the effect simply never runs.
fn start_engine(canvas: HtmlCanvasElement) -> Option<Box<dyn FnOnce()>> {
    let window = web_sys::window()?;
    let ctx = canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;

    let width = Rc::new(Cell::new(window.inner_width().ok()?.as_f64()?));
    let height = Rc::new(Cell::new(window.inner_height().ok()?.as_f64()?));
    canvas.set_width(width.get() as u32);
    canvas.set_height(height.get() as u32);

    let mut rand = || web_sys::js_sys::Math::random();
    let particles = Rc::new(RefCell::new(spawn_field(width.get(), height.get(), &mut rand)));

    // Sole writer of the voice level; the frame loop is the sole reader. A
    // frame drawn with a one-tick-stale value is fine, it only moves pixels.
    let voice = Rc::new(Cell::new(0.0f64));
    let interval = {
        let voice = voice.clone();
        let phase = Cell::new(0.0f64);
        Interval::new(VOICE_TICK_MS, move || {
            phase.set(phase.get() + VOICE_PHASE_STEP);
            voice.set(voice_level(phase.get()));
        })
    };

    // Resize re-reads the viewport but leaves in-flight particles alone;
    // anything now out of bounds drifts back in through the wrap.
    let resize_cb = {
        let window = window.clone();
        let canvas = canvas.clone();
        let width = width.clone();
        let height = height.clone();
        Closure::wrap(Box::new(move || {
            let w = window.inner_width().ok().and_then(|v| v.as_f64());
            let h = window.inner_height().ok().and_then(|v| v.as_f64());
            if let (Some(w), Some(h)) = (w, h) {
                width.set(w);
                height.set(h);
                canvas.set_width(w as u32);
                canvas.set_height(h as u32);
            }
        }) as Box<dyn FnMut()>)
    };
    window
        .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
        .ok()?;

    let running = Rc::new(Cell::new(true));
    let raf_id = Rc::new(Cell::new(0i32));
    let raf_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    {
        let raf_cb = raf_cb.clone();
        let raf_cb_inner = raf_cb.clone();
        let running = running.clone();
        let raf_id = raf_id.clone();
        let window = window.clone();
        let width = width.clone();
        let height = height.clone();
        let voice = voice.clone();
        let particles = particles.clone();
        let mut frame = 0.0f64;
        *raf_cb.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !running.get() {
                return;
            }
            frame += FRAME_STEP;
            draw_frame(
                &ctx,
                &mut particles.borrow_mut(),
                frame,
                voice.get(),
                width.get(),
                height.get(),
            );
            if let Some(cb) = raf_cb_inner.borrow().as_ref() {
                if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    raf_id.set(id);
                }
            }
        }) as Box<dyn FnMut()>));
    }
    if let Some(cb) = raf_cb.borrow().as_ref() {
        if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            raf_id.set(id);
        }
    }

    Some(Box::new(move || {
        running.set(false);
        let _ = window.cancel_animation_frame(raf_id.get());
        let _ = window
            .remove_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
        drop(interval);
        // Break the closure's self-reference so it is actually freed.
        raf_cb.borrow_mut().take();
    }))
}

#[function_component(WavesCanvas)]
pub fn waves_canvas() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let disposer = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .and_then(start_engine);
                move || {
                    if let Some(dispose) = disposer {
                        dispose();
                    }
                }
            },
            (),
        );
    }

    html! {
        <canvas ref={canvas_ref} class="waves-canvas" />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(value: f64) -> impl FnMut() -> f64 {
        move || value
    }

    #[test]
    fn field_keeps_its_particle_count() {
        let seq = [0.1, 0.9, 0.5, 0.3, 0.7, 0.2, 0.8];
        let mut values = seq.iter().cycle().copied();
        let mut rand = move || values.next().unwrap();
        let mut field = spawn_field(1280.0, 720.0, &mut rand);
        assert_eq!(field.len(), PARTICLE_COUNT);
        for _ in 0..10_000 {
            step_field(&mut field, 1280.0, 720.0, 0.3);
        }
        assert_eq!(field.len(), PARTICLE_COUNT);
        for p in &field {
            assert!(p.x >= -WRAP_MARGIN && p.x <= 1280.0 + WRAP_MARGIN);
            assert!(p.y >= -WRAP_MARGIN && p.y <= 720.0 + WRAP_MARGIN);
        }
    }

    #[test]
    fn spawn_ranges_hold_at_the_extremes() {
        let low = Particle::spawn(800.0, 600.0, &mut fixed(0.0));
        assert_eq!(low.x, 0.0);
        assert_eq!(low.r, 0.6);
        assert_eq!(low.vx, -0.2);
        assert_eq!(low.vy, -0.1);
        assert_eq!(low.hue, 180.0);
        assert_eq!(low.alpha, 0.04);

        let high = Particle::spawn(800.0, 600.0, &mut fixed(0.999));
        assert!(high.x < 800.0);
        assert!(high.r < 2.8);
        assert!(high.vx < 0.2);
        assert!(high.vy < 0.1);
        assert!(high.hue < 300.0);
        assert!(high.alpha < 0.12);
    }

    #[test]
    fn particle_wraps_at_all_four_bounds() {
        let (w, h) = (100.0, 50.0);
        let mut base = Particle::spawn(w, h, &mut fixed(0.5));
        base.vx = 0.0;
        base.vy = 0.0;

        let mut right = vec![Particle { x: w + WRAP_MARGIN + 1.0, ..base.clone() }];
        right[0].vx = 1.0;
        step_field(&mut right, w, h, 0.0);
        assert_eq!(right[0].x, -WRAP_MARGIN);

        let mut left = vec![Particle { x: -WRAP_MARGIN - 1.0, ..base.clone() }];
        left[0].vx = -1.0;
        step_field(&mut left, w, h, 0.0);
        assert_eq!(left[0].x, w + WRAP_MARGIN);

        let mut bottom = vec![Particle { y: h + WRAP_MARGIN + 1.0, ..base.clone() }];
        bottom[0].vy = 1.0;
        step_field(&mut bottom, w, h, 0.0);
        assert_eq!(bottom[0].y, -WRAP_MARGIN);

        let mut top = vec![Particle { y: -WRAP_MARGIN - 1.0, ..base }];
        top[0].vy = -1.0;
        step_field(&mut top, w, h, 0.0);
        assert_eq!(top[0].y, h + WRAP_MARGIN);
    }

    #[test]
    fn voice_level_stays_in_range() {
        let mut phase = 0.0;
        for _ in 0..100_000 {
            phase += VOICE_PHASE_STEP;
            let level = voice_level(phase);
            assert!((0.0..=0.5).contains(&level), "out of range at {phase}: {level}");
        }
        // Both extremes are actually reached (to float tolerance).
        assert!(voice_level(std::f64::consts::FRAC_PI_2) > 0.499);
        assert!(voice_level(-std::f64::consts::FRAC_PI_2) < 0.001);
    }

    #[test]
    fn voice_level_scales_wave_amplitude() {
        let quiet = wave_y(40.0, 1.0, 0.0, 22.0, 0.9, 0.0, 600.0);
        let loud = wave_y(40.0, 1.0, 0.0, 22.0, 0.9, 0.5, 600.0);
        let mid = 300.0;
        assert!((loud - mid).abs() > (quiet - mid).abs());
        assert!(((loud - mid) / (quiet - mid) - 1.5).abs() < 1e-9);
    }
}
