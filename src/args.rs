use crate::settings::SETTINGS_FILE;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Gui,
    Headless,
}

#[derive(Debug, Error, PartialEq)]
pub enum ArgsError {
    #[error("Invalid timeout value: {0}")]
    InvalidTimeout(String),

    #[error("Empty settings path")]
    EmptySettingsPath,

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
}

#[derive(Debug)]
pub struct Args {
    pub mode: Mode,
    pub debug_mode: bool,
    pub timeout_secs: Option<u64>,
    pub settings_path: PathBuf,
}

impl Args {
    pub fn parse() -> Result<Option<Self>, ArgsError> {
        Self::parse_from(env::args().skip(1))
    }

    /// Parse flags (program name already stripped). `Ok(None)` means help or
    /// version was printed and the process should exit successfully.
    pub fn parse_from<I>(args: I) -> Result<Option<Self>, ArgsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut mode: Option<Mode> = None;
        let mut debug_mode: bool = false;
        let mut timeout_secs: Option<u64> = None;
        let mut settings_path = PathBuf::from(SETTINGS_FILE);

        for arg in args {
            if arg == "--help" || arg == "-h" {
                print_help();
                return Ok(None);
            } else if arg == "--version" || arg == "-v" {
                println!("Image Autoclick v{}", env!("APP_VERSION_DISPLAY"));
                return Ok(None);
            } else if arg == "--debug" {
                debug_mode = true;
            } else if arg == "--gui" {
                mode = Some(Mode::Gui);
            } else if arg == "--headless" {
                mode = Some(Mode::Headless);
            } else if let Some(val) = arg.strip_prefix("--timeout=") {
                let secs = val
                    .parse::<u64>()
                    .map_err(|_| ArgsError::InvalidTimeout(val.to_string()))?;
                timeout_secs = Some(secs);
            } else if let Some(val) = arg.strip_prefix("--settings=") {
                if val.is_empty() {
                    return Err(ArgsError::EmptySettingsPath);
                }
                settings_path = PathBuf::from(val);
            } else {
                return Err(ArgsError::UnknownArgument(arg));
            }
        }

        Ok(Some(Args {
            mode: mode.unwrap_or(Mode::Gui),
            debug_mode,
            timeout_secs,
            settings_path,
        }))
    }
}

pub fn print_help() {
    println!("🖱️ Image Detection Autoclicker");
    println!();
    println!("USAGE:");
    println!("    image-autoclick [FLAGS]");
    println!();
    println!("FLAGS:");
    println!("    (no flags)          Launch GUI interface");
    println!("    --gui               Launch GUI interface");
    println!("    --headless          Run the detection loop in the terminal (Ctrl-C to stop)");
    println!("    --settings=PATH     Settings file to load and save (default: {SETTINGS_FILE})");
    println!("    --timeout=N         Stop headless detection after N seconds");
    println!("    --debug             Enable debug logging");
    println!("    --help, -h          Show this help message");
    println!("    --version, -v       Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    image-autoclick");
    println!("    image-autoclick --headless");
    println!("    image-autoclick --headless --timeout=60 --settings=game.json");
}
