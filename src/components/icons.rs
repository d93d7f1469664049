//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::{EntryStyle, WindowId};

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBookOpen as FilePdf, LuCpu as Specs, LuFile as File, LuFileText as FileText,
        LuFolder as Folder, LuFolderOpen as Explorer, LuGlobe as Browser, LuImage as FileImage,
        LuLayoutGrid as Start, LuLink as FileLink, LuMail as Mail, LuMaximize2 as Maximize,
        LuMinimize2 as Restore, LuSettings as Settings, LuTerminal as Terminal, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowsFullscreen as Maximize, BsCpu as Specs, BsEnvelope as Mail,
        BsFileEarmark as File, BsFileEarmarkImage as FileImage, BsFileEarmarkPdf as FilePdf,
        BsFileEarmarkText as FileText, BsFolder2Open as Explorer, BsFolderFill as Folder,
        BsFullscreenExit as Restore, BsGear as Settings, BsGlobe as Browser, BsGrid as Start,
        BsLink45deg as FileLink, BsTerminal as Terminal, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(TERMINAL, Terminal);
themed_icon!(EXPLORER, Explorer);
themed_icon!(BROWSER, Browser);
themed_icon!(SPECS, Specs);
themed_icon!(SETTINGS, Settings);
themed_icon!(MAIL, Mail);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_LINK, FileLink);
themed_icon!(START, Start);
themed_icon!(MAXIMIZE, Maximize);
themed_icon!(RESTORE, Restore);
themed_icon!(CLOSE, Close);

// =============================================================================
// Lookups
// =============================================================================

/// Icon for a desktop window; unknown ids get a generic file.
pub fn window_icon(id: &WindowId) -> Icon {
    match id.as_str() {
        "terminal" => TERMINAL,
        "files" => EXPLORER,
        "browser" => BROWSER,
        "readme" => FILE_TEXT,
        "features" => SPECS,
        "settings" => SETTINGS,
        "mail" => MAIL,
        "pdf" => FILE_PDF,
        "image" => FILE_IMAGE,
        _ => FILE,
    }
}

/// Icon for a filesystem entry.
pub fn entry_icon(style: EntryStyle) -> Icon {
    match style {
        EntryStyle::Directory => FOLDER,
        EntryStyle::Shortcut | EntryStyle::Executable => FILE_LINK,
        EntryStyle::Pdf => FILE_PDF,
        EntryStyle::Image => FILE_IMAGE,
        EntryStyle::File => FILE_TEXT,
    }
}
