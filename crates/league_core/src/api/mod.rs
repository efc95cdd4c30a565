pub mod league_json;

pub use league_json::{
    create_league_config_json, default_config_json, settings_json, CreateLeagueRequest,
    CreateLeagueResponse, API_SCHEMA_VERSION,
};
