//! Headless Chromium rendering backend.
//!
//! [`ChromeRenderer`] implements [`fleetdoc_traits::HtmlRenderer`] by
//! launching one browser process per call, loading the HTML into a single
//! tab, waiting for the network to settle and printing the page to an A4
//! PDF with backgrounds enabled.
//!
//! The binary and its launch flags depend on where the process runs: a
//! constrained hosted runtime needs a purpose-built Chromium with the
//! sandbox disabled, a developer machine uses the installed Chrome. The
//! choice is made by [`ChromeConfig::environment`] and the matching
//! [`BinaryResolver`].

mod config;
mod events;
mod idle;
mod print;
mod renderer;
mod resolver;
mod session;

pub use config::ChromeConfig;
pub use idle::NetworkIdleTracker;
pub use print::print_options;
pub use renderer::ChromeRenderer;
pub use resolver::{
    BinaryResolver, BrowserBinary, CHROMIUM_PATH_VAR, HostedChromiumResolver,
    LocalChromeResolver,
};
pub use session::BrowserSession;
