//! Browser client for Pong
//!
//! Draws on a 2D canvas and drives the game loop from `requestAnimationFrame`.

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod input;

#[cfg(target_arch = "wasm32")]
mod canvas;

#[cfg(target_arch = "wasm32")]
pub use web::start;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::RefCell;
    use std::rc::Rc;

    use game_core::{Config, GameLoop};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, Window};

    use crate::canvas::CanvasSurface;
    use crate::input::{get_key_code, is_game_key};

    macro_rules! log {
        ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
    }

    macro_rules! error {
        ($($t:tt)*) => (web_sys::console::error_1(&format!($($t)*).into()))
    }

    type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

    fn window() -> Result<Window, JsValue> {
        web_sys::window().ok_or_else(|| JsValue::from_str("No window"))
    }

    fn request_animation_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
        window()?.request_animation_frame(callback.as_ref().unchecked_ref())
    }

    /// Create the canvas, wire the keyboard and start the frame loop
    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let config = Config::new();
        let document = window()?
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;

        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        canvas.set_width(config.field_width as u32);
        canvas.set_height(config.field_height as u32);
        document
            .body()
            .ok_or_else(|| JsValue::from_str("No body"))?
            .append_child(&canvas)?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;

        let game = Rc::new(RefCell::new(GameLoop::new(config)));
        bind_keyboard(&document, &game)?;

        let mut surface = CanvasSurface::new(ctx);
        let frame: FrameCallback = Rc::new(RefCell::new(None));
        let next = frame.clone();
        *frame.borrow_mut() = Some(Closure::new(move || {
            {
                let mut game = game.borrow_mut();
                if let Err(e) = game.step(&mut surface) {
                    error!("Frame {} failed to render: {}", game.state.frame, e);
                }
                let events = &game.state.events;
                if events.any_score() {
                    log!(
                        "Score - player {} : computer {}",
                        game.state.player.score,
                        game.state.computer.score
                    );
                }
            }

            if let Some(callback) = next.borrow().as_ref() {
                if let Err(e) = request_animation_frame(callback) {
                    error!("Failed to schedule next frame: {:?}", e);
                }
            }
        }));

        if let Some(callback) = frame.borrow().as_ref() {
            request_animation_frame(callback)?;
        }
        log!("Pong started");
        Ok(())
    }

    fn bind_keyboard(
        document: &web_sys::Document,
        game: &Rc<RefCell<GameLoop>>,
    ) -> Result<(), JsValue> {
        let down_game = game.clone();
        let on_key_down = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            let code = get_key_code(&event);
            let mut game = down_game.borrow_mut();
            if is_game_key(code, &game.state.config) {
                event.prevent_default();
            }
            game.state.key_down(code);
        });
        document
            .add_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref())?;
        on_key_down.forget();

        let up_game = game.clone();
        let on_key_up = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            up_game.borrow_mut().state.key_up(get_key_code(&event));
        });
        document.add_event_listener_with_callback("keyup", on_key_up.as_ref().unchecked_ref())?;
        on_key_up.forget();

        Ok(())
    }
}
