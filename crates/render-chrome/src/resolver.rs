use fleetdoc_traits::RenderFailure;
use std::ffi::OsString;
use std::fmt::Debug;
use std::path::{Path, PathBuf};

/// Environment variable naming the Chromium binary in hosted runs.
pub const CHROMIUM_PATH_VAR: &str = "FLEETDOC_CHROMIUM_PATH";

/// Install locations probed for a hosted Chromium, in order.
const HOSTED_CANDIDATES: &[&str] = &[
    "/opt/chromium/chromium",
    "/tmp/chromium",
    "/usr/bin/chromium",
    "/usr/bin/chromium-browser",
];

/// Flags a hosted runtime needs: no user namespaces, a tiny `/dev/shm`, no
/// GPU and no spare processes.
const HOSTED_ARGS: &[&str] = &[
    "--no-sandbox",
    "--disable-setuid-sandbox",
    "--disable-dev-shm-usage",
    "--disable-gpu",
    "--no-zygote",
    "--single-process",
];

const LOCAL_ARGS: &[&str] = &["--hide-scrollbars", "--mute-audio"];

/// A browser executable plus the flags it must be launched with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserBinary {
    pub path: PathBuf,
    pub args: Vec<OsString>,
    pub sandbox: bool,
}

impl BrowserBinary {
    pub fn with_extra_args<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(extra.into_iter().map(Into::into));
        self
    }
}

/// Finds the browser to launch for one execution environment.
pub trait BinaryResolver: Send + Sync + Debug {
    fn resolve(&self) -> Result<BrowserBinary, RenderFailure>;

    fn name(&self) -> &'static str;
}

/// Uses the configured Chrome, or whatever installation headless_chrome
/// can discover on this machine.
#[derive(Debug, Clone, Default)]
pub struct LocalChromeResolver {
    configured: Option<PathBuf>,
}

impl LocalChromeResolver {
    pub fn new(configured: Option<PathBuf>) -> Self {
        Self { configured }
    }
}

impl BinaryResolver for LocalChromeResolver {
    fn resolve(&self) -> Result<BrowserBinary, RenderFailure> {
        let path = match &self.configured {
            Some(path) => existing(path)?,
            None => headless_chrome::browser::default_executable()
                .map_err(RenderFailure::BinaryNotFound)?,
        };
        Ok(BrowserBinary {
            path,
            args: to_os_args(LOCAL_ARGS),
            sandbox: true,
        })
    }

    fn name(&self) -> &'static str {
        "local-chrome"
    }
}

/// Locates the Chromium build shipped with a hosted runtime and launches it
/// without a sandbox.
#[derive(Debug, Clone)]
pub struct HostedChromiumResolver {
    configured: Option<PathBuf>,
    candidates: Vec<PathBuf>,
}

impl HostedChromiumResolver {
    /// `configured` wins. Otherwise [`CHROMIUM_PATH_VAR`] is consulted, then
    /// the well-known install locations.
    pub fn from_env(configured: Option<PathBuf>) -> Self {
        let configured = configured.or_else(|| {
            std::env::var_os(CHROMIUM_PATH_VAR)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        });
        Self::new(
            configured,
            HOSTED_CANDIDATES.iter().map(PathBuf::from).collect(),
        )
    }

    pub fn new(configured: Option<PathBuf>, candidates: Vec<PathBuf>) -> Self {
        Self {
            configured,
            candidates,
        }
    }
}

impl BinaryResolver for HostedChromiumResolver {
    fn resolve(&self) -> Result<BrowserBinary, RenderFailure> {
        let path = match &self.configured {
            Some(path) => existing(path)?,
            None => self
                .candidates
                .iter()
                .find(|candidate| candidate.is_file())
                .cloned()
                .ok_or_else(|| {
                    RenderFailure::BinaryNotFound(format!(
                        "no hosted Chromium at {}; set {}",
                        self.candidates
                            .iter()
                            .map(|p| p.display().to_string())
                            .collect::<Vec<_>>()
                            .join(", "),
                        CHROMIUM_PATH_VAR
                    ))
                })?,
        };
        Ok(BrowserBinary {
            path,
            args: to_os_args(HOSTED_ARGS),
            sandbox: false,
        })
    }

    fn name(&self) -> &'static str {
        "hosted-chromium"
    }
}

fn existing(path: &Path) -> Result<PathBuf, RenderFailure> {
    if path.is_file() {
        Ok(path.to_path_buf())
    } else {
        Err(RenderFailure::BinaryNotFound(format!(
            "configured browser {} does not exist",
            path.display()
        )))
    }
}

fn to_os_args(args: &[&str]) -> Vec<OsString> {
    args.iter().map(OsString::from).collect()
}
