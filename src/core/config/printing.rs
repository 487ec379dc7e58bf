use crate::core::config::data::{path_display, Config};
use crate::core::constants::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE};

impl Config {
    pub fn print_all(&self) {
        match Config::get_config_path() {
            Ok(path) => println!("Current configuration ({}):", path_display(path)),
            Err(_) => println!("Current configuration:"),
        }
        match &self.model {
            Some(model) => println!("  model: {model}"),
            None => println!("  model: (unset, default {DEFAULT_MODEL})"),
        }
        match &self.base_url {
            Some(url) => println!("  base-url: {url}"),
            None => println!("  base-url: (unset, default {DEFAULT_BASE_URL})"),
        }
        match self.temperature {
            Some(temperature) => println!("  temperature: {temperature}"),
            None => println!("  temperature: (unset, default {DEFAULT_TEMPERATURE})"),
        }
        match self.sidebar {
            Some(true) => println!("  sidebar: on"),
            Some(false) => println!("  sidebar: off"),
            None => println!("  sidebar: auto"),
        }
    }
}
