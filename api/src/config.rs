use clap::Parser;
use clap::ValueEnum;

#[derive(Clone, Parser, Debug, Default)]
#[command(name = "posts-api")]
#[command(about = "Posts API Server", long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub database: DatabaseConfig,

    #[command(flatten)]
    pub jwt: JwtConfig,

    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub media: MediaConfig,

    #[arg(
        long = "environment",
        env = "ENVIRONMENT",
        default_value = "development"
    )]
    pub environment: Environment,
}

#[derive(Clone, Parser, Debug, Default)]
pub struct DatabaseConfig {
    #[arg(
        long = "mongo-uri",
        env = "MONGO_URI",
        default_value = "mongodb://localhost:27017"
    )]
    pub mongo_uri: String,

    #[arg(
        long = "database-name",
        env = "DATABASE_NAME",
        default_value = "posts",
        value_name = "database_name"
    )]
    pub db_name: String,
}

#[derive(Clone, Parser, Debug, Default)]
pub struct JwtConfig {
    #[arg(
        long = "jwt-secret-key",
        env = "JWT_SECRET_KEY",
        name = "jwt_secret_key"
    )]
    pub secret_key: String,
}

#[derive(Clone, Parser, Debug, Default)]
pub struct ServerConfig {
    #[arg(
        long = "server-api-port",
        env = "API_PORT",
        default_value = "8080",
        name = "api_port"
    )]
    pub api_port: u16,
}

#[derive(Clone, Parser, Debug, Default)]
pub struct MediaConfig {
    #[arg(
        long = "media-upload-url",
        env = "MEDIA_UPLOAD_URL",
        default_value = "http://localhost:3004/upload"
    )]
    pub upload_url: String,

    #[arg(long = "media-api-key", env = "MEDIA_API_KEY", default_value = "")]
    pub api_key: String,
}

#[derive(Clone, Debug, ValueEnum, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
    Test,
}
