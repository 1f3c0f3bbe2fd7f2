pub mod frame;
pub mod runner;

pub use eve_backdrop;
#[doc(hidden)]
pub use {console_error_panic_hook, console_log, log};
pub use frame::FrameLoop;
pub use runner::BackdropRunner;

/// Generate all `#[wasm_bindgen]` exports for a backdrop variant.
///
/// Generates:
/// - `thread_local!` storage for the runner and its frame loop
/// - `with_runner()` helper function
/// - lifecycle exports (`backdrop_init`, `backdrop_start`, `backdrop_stop`, `backdrop_tick`)
/// - input, site content and shared-buffer accessor exports
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod landing;
/// use landing::LandingBackdrop;
///
/// eve_web::export_backdrop!(LandingBackdrop, "eve-landing");
/// ```
///
/// The backdrop type must provide `fn new() -> Self`.
#[macro_export]
macro_rules! export_backdrop {
    ($backdrop_type:ty, $name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::BackdropRunner<$backdrop_type>>> = RefCell::new(None);
            static FRAMES: RefCell<Option<$crate::FrameLoop>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::BackdropRunner<$backdrop_type>) -> R) -> Option<R> {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                match borrow.as_mut() {
                    Some(runner) => Some(f(runner)),
                    None => {
                        $crate::log::warn!("{}: not initialized, call backdrop_init() first", $name);
                        None
                    }
                }
            })
        }

        fn not_initialized() -> JsValue {
            JsValue::from_str(concat!($name, ": not initialized"))
        }

        fn to_js(e: $crate::eve_backdrop::BackdropError) -> JsValue {
            JsValue::from_str(&e.to_string())
        }

        #[wasm_bindgen]
        pub fn backdrop_init() -> Result<(), JsValue> {
            $crate::console_error_panic_hook::set_once();
            let _ = $crate::console_log::init_with_level($crate::log::Level::Info);

            let runner = $crate::BackdropRunner::new(<$backdrop_type>::new()).map_err(|e| {
                $crate::log::error!("{}: bad config: {}", $name, e);
                to_js(e)
            })?;
            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            $crate::log::info!("{}: initialized", $name);
            Ok(())
        }

        /// Start animating on the browser's frame clock.
        #[wasm_bindgen]
        pub fn backdrop_start() -> Result<(), JsValue> {
            with_runner(|r| r.start()).ok_or_else(not_initialized)?;
            let frames = $crate::FrameLoop::start(|dt| {
                with_runner(|r| r.tick(dt));
            })?;
            let previous = FRAMES.with(|cell| cell.borrow_mut().replace(frames));
            drop(previous);
            Ok(())
        }

        #[wasm_bindgen]
        pub fn backdrop_stop() {
            let frames = FRAMES.with(|cell| cell.borrow_mut().take());
            drop(frames);
            with_runner(|r| r.stop());
        }

        /// Advance one frame from a host-owned loop instead of `backdrop_start`'s.
        #[wasm_bindgen]
        pub fn backdrop_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn backdrop_resize(width: f32, height: f32) {
            with_runner(|r| r.resize(width, height));
        }

        #[wasm_bindgen]
        pub fn backdrop_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::eve_backdrop::HostEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn backdrop_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::eve_backdrop::HostEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn backdrop_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input($crate::eve_backdrop::HostEvent::Custom { kind, a, b, c }));
        }

        // ---- Site content ----

        #[wasm_bindgen]
        pub fn backdrop_load_site(json: &str) -> Result<(), JsValue> {
            with_runner(|r| r.load_site(json))
                .ok_or_else(not_initialized)?
                .map_err(to_js)
        }

        #[wasm_bindgen]
        pub fn backdrop_style_json(width: f32) -> Result<String, JsValue> {
            with_runner(|r| r.style_json(width))
                .ok_or_else(not_initialized)?
                .map_err(to_js)
        }

        #[wasm_bindgen]
        pub fn backdrop_flags_json(width: f32) -> Result<String, JsValue> {
            with_runner(|r| r.flags_json(width))
                .ok_or_else(not_initialized)?
                .map_err(to_js)
        }

        /// Route index (0 home, 1 documentation, 2 protocol) for a path.
        #[wasm_bindgen]
        pub fn backdrop_route(path: &str) -> Result<u32, JsValue> {
            with_runner(|r| r.route(path))
                .ok_or_else(not_initialized)?
                .map_err(to_js)
        }

        #[wasm_bindgen]
        pub fn backdrop_select_tab(id: &str) -> Result<(), JsValue> {
            with_runner(|r| r.select_tab(id))
                .ok_or_else(not_initialized)?
                .map_err(to_js)
        }

        #[wasm_bindgen]
        pub fn backdrop_active_tab() -> Option<String> {
            with_runner(|r| r.active_tab().map(str::to_string)).flatten()
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_buffer_ptr() -> *const f32 {
            with_runner(|r| r.buffer_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_dots_ptr() -> *const f32 {
            with_runner(|r| r.dots_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_dot_count() -> u32 {
            with_runner(|r| r.dot_count()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_channels_ptr() -> *const f32 {
            with_runner(|r| r.channels_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_events_ptr() -> *const f32 {
            with_runner(|r| r.events_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_events_len() -> u32 {
            with_runner(|r| r.events_len()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_viewport_width() -> f32 {
            with_runner(|r| r.viewport_width()).unwrap_or(0.0)
        }

        #[wasm_bindgen]
        pub fn get_viewport_height() -> f32 {
            with_runner(|r| r.viewport_height()).unwrap_or(0.0)
        }

        #[wasm_bindgen]
        pub fn get_population() -> u32 {
            with_runner(|r| r.population()).unwrap_or(0)
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_dots() -> u32 {
            with_runner(|r| r.max_dots()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_max_channels() -> u32 {
            with_runner(|r| r.max_channels()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events()).unwrap_or(0)
        }
    };
}
