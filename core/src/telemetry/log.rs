use log::info;

pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!("{}", message);
    }

    /// One line per completed redraw pass.
    pub fn record_pass(&self, renderer: &'static str, primitives: usize) {
        info!("{} redrew {} primitives", renderer, primitives);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
