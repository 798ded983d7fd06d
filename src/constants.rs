/// DOM ids and asset paths the page provides.
///
/// The host page owns the markup; these names are the contract between it
/// and the wasm module.
pub const CANVAS_ID: &str = "lebrain";
pub const LOADER_ID: &str = "loader";

// Toast label naming the hovered hemisphere
pub const TOASTER_ID: &str = "toaster";

// Info panel and its backdrop
pub const INFO_OVERLAY_ID: &str = "info-overlay";
pub const INFO_PANEL_ID: &str = "info-panel";
pub const INFO_TITLE_ID: &str = "info-title";
pub const INFO_IMAGE_ID: &str = "info-image";
pub const INFO_CONTENT_ID: &str = "info-content";
pub const INFO_CLOSE_ID: &str = "info-close";

pub const HELP_OVERLAY_ID: &str = "help-overlay";

// CSS class toggled to hide an element
pub const HIDDEN_CLASS: &str = "hidden";

// Sounds
pub const SOUND_ENGINE_SRC: &str = "sounds/spaceship.ogg";
pub const SOUND_BOOST_SRC: &str = "sounds/spaceship-boost.ogg";
pub const SOUND_SQUISH_SRC: &str = "sounds/squish-01.mp3";
pub const SOUND_VOLUME: f64 = 0.6;

// Info panel images are resolved relative to this directory
pub const IMAGE_DIR: &str = "images/";
