use clap::Parser;
use regview_app::ViewerConfig;
use regview_app::config::{DEFAULT_HOST, DEFAULT_PORT};
use regview_core::display::{SCREEN_HEIGHT, SCREEN_WIDTH};

#[derive(Debug, Parser)]
#[clap(about = "Viewer and keyboard for a remote register display")]
pub struct Args {
    #[clap(long, default_value = DEFAULT_HOST)]
    pub host: String,

    #[clap(short = 'p', long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Full WebSocket URL, overrides --host and --port
    #[clap(short = 'u', long)]
    pub url: Option<String>,

    #[clap(long, default_value_t = SCREEN_WIDTH)]
    pub width: usize,

    #[clap(long, default_value_t = SCREEN_HEIGHT)]
    pub height: usize,

    #[clap(short = 's', long, default_value = "2")]
    pub scale: f32,
}

impl Args {
    pub fn into_config(self) -> ViewerConfig {
        let url = self
            .url
            .unwrap_or_else(|| ViewerConfig::endpoint(&self.host, self.port));
        ViewerConfig {
            url,
            width: self.width,
            height: self.height,
            scale: self.scale,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults_match_viewer_config() {
        let args = Args::parse_from(["regview"]);
        assert_eq!(args.into_config(), ViewerConfig::default());
    }

    #[test]
    fn test_host_and_port() {
        let args = Args::parse_from(["regview", "--host", "10.0.0.7", "-p", "9100"]);
        assert_eq!(args.into_config().url, "ws://10.0.0.7:9100");
    }

    #[test]
    fn test_url_wins() {
        let args = Args::parse_from(["regview", "-p", "1", "--url", "ws://board:7000/screen"]);
        assert_eq!(args.into_config().url, "ws://board:7000/screen");
    }
}
