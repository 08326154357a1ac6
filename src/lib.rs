pub mod args;
pub mod autoclick;
pub mod gui;
pub mod headless;
pub mod screen;
pub mod settings;
pub mod template_matching;

pub use autoclick::Autoclicker;
pub use settings::Settings;
pub use template_matching::MultiScaleMatcher;
