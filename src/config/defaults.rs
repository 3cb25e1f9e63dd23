pub const DEFAULT_ENV_FILE: &str = ".env";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_RUST_LOG: &str = "info,tower_http=info";
pub const DEFAULT_MONGO_DATABASE: &str = "todoify";
pub const DEFAULT_MONGO_COLLECTION: &str = "Todo";
pub const DEFAULT_MONGO_MAX_POOL_SIZE: u32 = 50;
pub const DEFAULT_MONGO_MIN_POOL_SIZE: u32 = 25;
pub const DEFAULT_MONGO_MAX_IDLE_SECS: u64 = 60;
pub const DEFAULT_MONGO_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MONGO_SERVER_SELECTION_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MONGO_DISCONNECT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
