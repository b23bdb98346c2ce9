use clap::Parser;
use hand_cube_grab::wire::WireFormat;

// Some defaults; some of which can be overriden via CLI args
const CONFIG_FILE_PATH: &str = "./cubeGrab.json";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Where to load session config (cube poses, colours, surface size)
    #[arg(long="configPath",default_value_t=String::from(CONFIG_FILE_PATH))]
    pub config_path: String,

    /// Read landmark frames from this file instead of stdin
    #[arg(long = "input")]
    pub input_path: Option<String>,

    /// Encoding of both incoming messages and outgoing frames
    #[arg(long = "format", value_enum, default_value_t = WireFormat::Json)]
    pub format: WireFormat,

    /// Write the config in use back to configPath (creating it if missing)
    #[arg(long = "saveConfig")]
    pub save_config: bool,

    #[arg(long = "loglevel",default_value_t=String::from("info"))]
    pub log_level: String,
}
