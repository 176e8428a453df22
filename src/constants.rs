pub const RENDER_WIDTH: i32 = 1920;           // Reference window width, opened at half size
pub const RENDER_HEIGHT: i32 = 1080;          // Reference window height, opened at half size
pub const FPS: u32 = 60;                      // Frames per second of the windowed host

pub const ASPECT_WIDTH: u32 = 16;             // Content aspect ratio (width term)
pub const ASPECT_HEIGHT: u32 = 9;             // Content aspect ratio (height term)

pub const MOBILE_BREAKPOINT: u32 = 769;       // Viewports narrower than this get mobile assets
pub const MOBILE_SUFFIX: &str = "-sq";        // Square crop suffix for mobile assets
pub const ASSET_ROOT: &str = "assets/";       // Prefix for every resolved asset path

pub const LOAD_WINDOW_RADIUS: usize = 2;      // Slides resolved on each side of the current one
pub const TRAILING_SLIDES: usize = 0;         // Non-content slides after the story body (credits, share)
pub const COMPLETION_QUARTERS: u8 = 4;        // Completion is reported in 25% steps

pub const ARROW_FADE_DEBOUNCE_MS: u64 = 1;    // Bursts of arrow show/hide collapse into one fade

pub const COPY_ACKNOWLEDGEMENT: &str = "Copied to your clipboard!";
