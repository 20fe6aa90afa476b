pub mod settings;

pub use settings::{
    ConnectionParts, ConnectionPolicy, ConnectionTarget, DatabaseSettings, Settings, UrlSource,
};
