use nearmark::{finder::Finder, request::Config};

pub struct AppState {
    pub finder: Finder,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            finder: Finder::new(config),
        }
    }
}
