// Console logging. Off the browser (host-side tests) messages go to stderr,
// since web_sys imports cannot be called there.

#[cfg(target_arch = "wasm32")]
use web_sys::console;

pub fn log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    console::log_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{}", message);
}

pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    console::warn_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("warning: {}", message);
}

/// Reports the time spent between creation and drop under `name`.
pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        #[cfg(target_arch = "wasm32")]
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        console::time_end_with_label(self.name);
        #[cfg(not(target_arch = "wasm32"))]
        let _ = self.name;
    }
}
