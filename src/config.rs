//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Built-in virtual filesystem manifest.
pub const FILESYSTEM_MANIFEST: &str = include_str!("../assets/fs.json");

/// Documentation commands and the rich-text block each one prints.
///
/// These are looked up before any structural command, so a key listed here
/// shadows a verb of the same name.
pub const DOC_PAGES: &[(&str, &str)] = &[
    ("help", include_str!("../assets/text/help.html")),
    ("whoami", include_str!("../assets/text/whoami.html")),
    ("ed", include_str!("../assets/text/ed.html")),
    ("ac", include_str!("../assets/text/ac.html")),
    ("xp", include_str!("../assets/text/xp.html")),
    ("go", include_str!("../assets/text/go.html")),
];

/// Look up the documentation block for a (lower-cased) verb.
pub fn doc_page(key: &str) -> Option<&'static str> {
    DOC_PAGES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, body)| *body)
}

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in terminal.
pub const APP_NAME: &str = "GelOS";

/// Application version.
pub const APP_VERSION: &str = "2.0";

/// User name shown in the prompt.
pub const PROMPT_USER: &str = "root";

/// Host name shown in the prompt.
pub const PROMPT_HOST: &str = "gelo";

/// First line of every terminal session.
pub const WELCOME_MESSAGE: &str = "Welcome to GelOS v2.0. Type 'help'.";

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Maximum number of terminal output lines to keep in the log.
pub const MAX_TERMINAL_HISTORY: usize = 1000;

/// Window the `exit` command closes.
pub const TERMINAL_WINDOW: &str = "terminal";

/// Window used to display `pdf` files.
pub const PDF_VIEWER_WINDOW: &str = "pdf";

/// Window used to display `img` files.
pub const IMAGE_VIEWER_WINDOW: &str = "image";

/// Screen effect toggled by the `matrix` command.
pub const MATRIX_EFFECT: &str = "matrix";

/// Messages logged after the matrix effect is toggled.
pub mod matrix_messages {
    pub const ENABLED: &str = "Matrix Protocol Enabled... Wake up, Neo!";
    pub const DISABLED: &str = "Matrix Protocol Disabled... Hello, Gelo!";
}

// =============================================================================
// Window Manager Configuration
// =============================================================================

/// Stacking counter value before any window has been focused.
pub const INITIAL_Z_INDEX: u32 = 100;

/// z-index every window starts with.
pub const BASE_WINDOW_Z_INDEX: u32 = 10;

/// Windows known to the desktop: `(id, title)`.
pub const WINDOWS: &[(&str, &str)] = &[
    ("terminal", "Terminal"),
    ("files", "File Explorer"),
    ("browser", "GeloNet"),
    ("readme", "README.md"),
    ("features", "Sys Specs"),
    ("settings", "Settings"),
    ("mail", "Mail"),
    ("pdf", "PDF Viewer"),
    ("image", "Image Viewer"),
];

// =============================================================================
// Icon Theme
// =============================================================================

/// Icon set used by the desktop.
///
/// - `Bootstrap` - Filled, classic desktop look
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Persistence
// =============================================================================

/// localStorage key for the window manager snapshot.
pub const STORAGE_KEY: &str = "gelos_state";

// =============================================================================
// Boot Sequence
// =============================================================================

/// Lines printed by the boot screen, in order. `[OK]` is highlighted.
pub const BOOT_LINES: &[&str] = &[
    "Initializing GELO-KERNEL v2.0...",
    "Loading BIOS settings... [OK]",
    "Verifying CPU microcode... [OK]",
    "Mounting root filesystem (/) read-only...",
    "Checking integrity of filesystem...",
    "Remounting root filesystem read-write... [OK]",
    "Loading kernel modules...",
    "   - crypto_user.ko",
    "   - security_layer.ko",
    "   - networking.ko",
    "[OK] Interfaces: eth0, wlan0 initialized.",
    "Starting Network Manager...",
    "   > Connecting to secure-node-1...",
    "[OK] Connection established.",
    "Loading Portfolio Assets...",
    "Starting Graphical User Interface...",
    "Welcome, User.",
];

/// Boot screen timing in milliseconds.
pub mod boot_delays {
    /// Shortest pause between two boot lines.
    pub const LINE_MIN: u32 = 50;
    /// Random extra pause added per line, up to this many ms.
    pub const LINE_JITTER: u32 = 100;
    /// Pause after the last line before the desktop shows.
    pub const FINISH: u32 = 800;
}

/// Window opened once the boot screen is gone.
pub const BOOT_WINDOW: &str = "readme";

// =============================================================================
// Matrix Rain
// =============================================================================

/// Matrix rain canvas parameters.
pub mod matrix_rain {
    /// Characters a drop can show.
    pub const GLYPHS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ123456789@#$%^&*()*&^%";
    /// Glyph size in pixels; also the column width.
    pub const FONT_SIZE: f64 = 14.0;
    /// Frame interval in milliseconds.
    pub const FRAME_MS: u32 = 33;
    /// Chance per frame that a drop past the bottom restarts at the top.
    pub const RESET_CHANCE: f64 = 0.025;
}

// =============================================================================
// Sound Effects
// =============================================================================

/// UI sound effects, played only while sound is enabled in settings.
pub mod sounds {
    pub const CLICK: &str = "assets/sounds/click.mp3";
    pub const CLICK_VOLUME: f64 = 0.4;
    pub const KEY: &str = "assets/sounds/keypress.wav";
    pub const KEY_VOLUME: f64 = 0.2;
}
