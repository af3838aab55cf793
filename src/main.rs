//! Hexadrop entry point
//!
//! Handles platform-specific initialization and runs the animation loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use glam::Vec2;
    use hexadrop::consts::*;
    use hexadrop::renderer::{RenderState, shapes, vertex::colors};
    use hexadrop::sim::{World, step};

    /// App instance holding all state
    struct App {
        world: World,
        render_state: Option<RenderState>,
    }

    impl App {
        fn new() -> Self {
            Self {
                world: World::new(),
                render_state: None,
            }
        }

        /// One animation frame: rotate, redraw, then advance physics.
        ///
        /// The physics step runs every frame unconditionally, even when a
        /// render error drops the frame's pixels.
        fn frame(&mut self) {
            self.world.hexagon.rotate();
            let walls = self.world.hexagon.vertices();

            let mut scene = shapes::polygon_outline(&walls, 2.0, colors::HEX_OUTLINE);
            scene.extend(shapes::circle(
                self.world.ball.pos,
                self.world.ball.radius,
                colors::BALL,
                48,
            ));
            self.render(&scene);

            step(&mut self.world.ball, &walls);
        }

        fn render(&mut self, scene: &[hexadrop::renderer::Vertex]) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(scene) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Hexadrop starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        canvas.set_width(CANVAS_SIZE as u32);
        canvas.set_height(CANVAS_SIZE as u32);

        let app = Rc::new(RefCell::new(App::new()));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state =
            RenderState::new(surface, &adapter, CANVAS_SIZE as u32, CANVAS_SIZE as u32).await;
        app.borrow_mut().render_state = Some(render_state);

        setup_click_handler(&canvas, app.clone());

        // Start the animation loop
        request_animation_frame(app);

        log::info!("Hexadrop running!");
    }

    /// Click re-launches the ball toward the click point, immediately and
    /// independent of the frame cadence.
    fn setup_click_handler(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let x = event.client_x() as f32 - rect.left() as f32;
            let y = event.client_y() as f32 - rect.top() as f32;
            app.borrow_mut().world.kick_toward(Vec2::new(x, y));
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            animation_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Self-re-arming frame callback; the loop never terminates.
    fn animation_loop(app: Rc<RefCell<App>>) {
        app.borrow_mut().frame();
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Hexadrop (native) starting...");
    log::info!("Rendering requires a browser - run with `trunk serve` for the web version");

    // Smoke check
    println!("\nRunning simulation smoke check...");
    smoke_check();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn smoke_check() {
    use hexadrop::sim::{World, step};

    let mut world = World::new();
    for _ in 0..1000 {
        world.hexagon.rotate();
        let walls = world.hexagon.vertices();
        step(&mut world.ball, &walls);
        assert!(world.ball.pos.is_finite(), "ball position went non-finite");
    }
    println!("✓ 1000 frames simulated, ball at {:?}", world.ball.pos);
}
