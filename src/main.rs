//! Chicken Crossing entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlImageElement, KeyboardEvent};

    use chicken_crossing::consts::*;
    use chicken_crossing::platform::key_from_code;
    use chicken_crossing::renderer::{AssetError, Canvas, Sprite, SpriteAtlas, render_frame};
    use chicken_crossing::sim::{GameEvent, GameState, handle_key, tick};

    /// `Canvas` over a 2D rendering context
    struct Canvas2d {
        ctx: CanvasRenderingContext2d,
    }

    impl Canvas for Canvas2d {
        type Image = HtmlImageElement;

        fn draw_image(&mut self, image: &HtmlImageElement, pos: Vec2, size: Option<Vec2>) {
            let (x, y) = (pos.x as f64, pos.y as f64);
            let result = match size {
                Some(size) => self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    image,
                    x,
                    y,
                    size.x as f64,
                    size.y as f64,
                ),
                None => self.ctx.draw_image_with_html_image_element(image, x, y),
            };
            if let Err(e) = result {
                log::warn!("drawImage failed: {:?}", e);
            }
        }
    }

    impl Canvas2d {
        /// Grass, then the road band the cars drive on
        fn draw_background(&self) {
            self.ctx.set_fill_style_str("#6aa84f");
            self.ctx
                .fill_rect(0.0, 0.0, PLAYFIELD_WIDTH as f64, PLAYFIELD_HEIGHT as f64);
            self.ctx.set_fill_style_str("#555555");
            self.ctx.fill_rect(
                0.0,
                (LANE_OFFSET - 15.0) as f64,
                PLAYFIELD_WIDTH as f64,
                (LANE_COUNT as f32 * MOVE_Y) as f64,
            );
        }
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        canvas: Canvas2d,
        atlas: SpriteAtlas<HtmlImageElement>,
        screen: Element,
        score_board: Element,
        banner: Element,
        asset_warning: Element,
        last_time: f64,
    }

    impl Game {
        /// Advance the sim by the time since the previous frame
        fn update(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                (((time - self.last_time) / 1000.0) as f32).min(MAX_FRAME_DT)
            } else {
                SIM_DT
            };
            self.last_time = time;
            tick(&mut self.state, dt);
        }

        /// Images that finished loading with no pixels failed to load
        fn check_images(&mut self) {
            let broken: Vec<Sprite> = self
                .atlas
                .images()
                .filter(|(_, img)| img.complete() && img.natural_width() == 0)
                .map(|(sprite, _)| *sprite)
                .collect();
            if broken.is_empty() {
                return;
            }
            for sprite in broken {
                self.atlas
                    .mark_failed(sprite, AssetError::Load { path: sprite.path() });
            }
            let text: Vec<String> = self.atlas.failures().map(|e| e.to_string()).collect();
            self.asset_warning.set_text_content(Some(&text.join("; ")));
        }

        fn render(&mut self) {
            self.canvas.draw_background();
            let requests = self.state.draw_list();
            render_frame(&mut self.canvas, &self.atlas, &requests);
        }

        /// Push score and banner changes into the DOM
        fn update_hud(&mut self) {
            for event in self.state.drain_events() {
                match event {
                    GameEvent::ScoreChanged(score) => self.show_score(score),
                    GameEvent::GameOver { score } => {
                        log::info!("Game over, final score {}", score);
                        let _ = self.screen.append_child(&self.banner);
                    }
                    GameEvent::GameReset => self.banner.remove(),
                    GameEvent::LifeLost { .. } | GameEvent::Respawned => {}
                }
            }
        }

        fn show_score(&self, score: u32) {
            self.score_board
                .set_text_content(Some(&format!("Score: {}", score)));
        }
    }

    fn create_div(document: &Document, id: &str) -> Result<Element, JsValue> {
        let el = document.create_element("div")?;
        el.set_id(id);
        Ok(el)
    }

    /// Start loading every sprite; failures to even create the element are
    /// recorded right away, load errors are picked up per frame
    fn load_sprites() -> SpriteAtlas<HtmlImageElement> {
        let mut atlas = SpriteAtlas::new();
        for sprite in Sprite::ALL {
            let image = HtmlImageElement::new()
                .map(|img| {
                    img.set_src(sprite.path());
                    img
                })
                .map_err(|e| AssetError::Create {
                    path: sprite.path(),
                    reason: format!("{:?}", e),
                });
            atlas.register(sprite, image);
        }
        atlas
    }

    fn setup(seed: u64) -> Result<Rc<RefCell<Game>>, JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let body = document.body().ok_or("no body")?;

        let screen = create_div(&document, "game")?;
        screen.set_attribute(
            "style",
            &format!("width: {}px; height: {}px", PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
        )?;
        body.append_child(&screen)?;

        let canvas: web_sys::HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        canvas.set_width(PLAYFIELD_WIDTH as u32);
        canvas.set_height(PLAYFIELD_HEIGHT as u32);
        screen.append_child(&canvas)?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let score_board = create_div(&document, "score")?;
        screen.append_child(&score_board)?;

        let banner = create_div(&document, "game-over")?;
        banner.set_inner_html("Game Over! <br> Hit space to try again.");

        let asset_warning = create_div(&document, "asset-warning")?;
        screen.append_child(&asset_warning)?;

        let game = Game {
            state: GameState::new(seed),
            canvas: Canvas2d { ctx },
            atlas: load_sprites(),
            screen,
            score_board,
            banner,
            asset_warning,
            last_time: 0.0,
        };
        game.show_score(game.state.score());

        Ok(Rc::new(RefCell::new(game)))
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(key) = key_from_code(event.key_code()) {
                event.prevent_default();
                handle_key(&mut game.borrow_mut().state, key);
            }
        });
        window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.check_images();
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("logger init failed: {}", e).into());
        }

        log::info!("Chicken Crossing starting...");

        let seed = js_sys::Date::now() as u64;
        let game = match setup(seed) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Setup failed: {:?}", e);
                return;
            }
        };
        log::info!("Game initialized with seed: {}", seed);

        if let Err(e) = setup_input_handlers(game.clone()) {
            log::error!("Input setup failed: {:?}", e);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use serde::Serialize;

    use chicken_crossing::consts::*;
    use chicken_crossing::sim::{GameEvent, GamePhase, GameState, Key, handle_key, tick};

    /// Ticks between key presses of the scripted player
    const TICKS_PER_STEP: u64 = 20;
    const MAX_TICKS: u64 = 60 * 60 * 5;

    #[derive(Debug, Default, Serialize)]
    struct Summary<'a> {
        ticks: u64,
        crossings: u32,
        deaths: u32,
        state: Option<&'a GameState>,
    }

    /// Keep pressing up until the run ends or time runs out
    pub fn run(seed: u64) {
        let mut state = GameState::new(seed);
        let mut summary = Summary::default();

        while summary.ticks < MAX_TICKS && state.phase != GamePhase::GameOver {
            tick(&mut state, SIM_DT);
            summary.ticks += 1;
            if summary.ticks % TICKS_PER_STEP == 0 {
                handle_key(&mut state, Key::Up);
            }

            for event in state.drain_events() {
                log::debug!("tick {}: {:?}", summary.ticks, event);
                match event {
                    GameEvent::ScoreChanged(score) if score > 0 => summary.crossings += 1,
                    GameEvent::LifeLost { .. } => summary.deaths += 1,
                    _ => {}
                }
            }
        }

        log::info!(
            "Finished after {} ticks: score {}, {} lives left",
            summary.ticks,
            state.score(),
            state.avatar.lives
        );

        summary.state = Some(&state);
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize summary: {}", e),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Chicken Crossing (native) starting...");
    log::info!("Native mode runs a headless scripted game - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    log::info!("Seed: {}", seed);

    headless::run(seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
