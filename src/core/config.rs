use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub swagger: SwaggerConfig,
    pub admin: AdminConfig,
    pub notifications: NotificationConfig,
    pub email: EmailConfig,
    pub profile: ProfileConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

/// Database settings. Without a `DATABASE_URL` reviews are kept in process.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Basic auth credentials for the review moderation endpoints
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Generic JSON webhook (IFTTT and similar)
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct SmsToConfig {
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct VonageConfig {
    pub api_key: String,
    pub api_secret: String,
}

#[derive(Debug, Clone)]
pub struct TextBeltConfig {
    pub key: String,
}

#[derive(Debug, Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
}

/// Credential bundles for every text notification channel.
///
/// A channel is configured when its bundle is `Some`. The SMS providers are
/// only populated when `NOTIFY_PHONE_NUMBER` is set, since they have nowhere
/// to deliver without it.
#[derive(Debug, Clone, Default)]
pub struct NotificationConfig {
    pub recipient_phone: Option<String>,
    pub sender_id: String,
    pub attempt_timeout: Duration,
    pub webhook: Option<WebhookConfig>,
    pub sms_to: Option<SmsToConfig>,
    pub vonage: Option<VonageConfig>,
    pub textbelt: Option<TextBeltConfig>,
    pub twilio: Option<TwilioConfig>,
}

#[derive(Debug, Clone)]
pub struct SendGridConfig {
    pub api_key: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Default)]
pub struct EmailConfig {
    pub sendgrid: Option<SendGridConfig>,
}

#[derive(Debug, Clone)]
pub struct ProfileConfig {
    pub path: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            admin: AdminConfig::from_env()?,
            notifications: NotificationConfig::from_env()?,
            email: EmailConfig::from_env()?,
            profile: ProfileConfig::from_env()?,
        })
    }
}

/// Read a variable, treating empty values as unset
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    const DEFAULT_MAX_CONNECTIONS: u32 = 5;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = non_empty_var("DATABASE_URL");

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let min_connections = env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MIN_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        let idle_timeout_secs = env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        let max_lifetime_secs = env::var("DB_MAX_LIFETIME_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_LIFETIME_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_MAX_LIFETIME_SECS must be a valid number".to_string())?;

        Ok(Self {
            url,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        let username = non_empty_var("SWAGGER_USERNAME");
        let password = non_empty_var("SWAGGER_PASSWORD");
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Linkpage API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "API documentation for the link-in-bio page".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        basic_credentials(&self.username, &self.password)
    }
}

impl AdminConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            username: non_empty_var("ADMIN_USERNAME"),
            password: non_empty_var("ADMIN_PASSWORD"),
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        basic_credentials(&self.username, &self.password)
    }
}

fn basic_credentials(username: &Option<String>, password: &Option<String>) -> Option<String> {
    match (username, password) {
        (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
        _ => None,
    }
}

impl NotificationConfig {
    const DEFAULT_ATTEMPT_TIMEOUT_SECS: u64 = 8;
    const DEFAULT_SENDER_ID: &'static str = "Linkpage";

    pub fn from_env() -> Result<Self, String> {
        let attempt_timeout = Self::parse_attempt_timeout(env::var("NOTIFY_TIMEOUT_SECS").ok())?;

        let sender_id =
            non_empty_var("SMS_SENDER_ID").unwrap_or_else(|| Self::DEFAULT_SENDER_ID.to_string());

        let recipient_phone = non_empty_var("NOTIFY_PHONE_NUMBER");
        let has_recipient = recipient_phone.is_some();

        let webhook = non_empty_var("SMS_WEBHOOK_URL").map(|url| WebhookConfig { url });

        let sms_to = non_empty_var("SMS_TO_API_KEY")
            .filter(|_| has_recipient)
            .map(|api_key| SmsToConfig { api_key });

        let vonage = match (
            non_empty_var("VONAGE_API_KEY"),
            non_empty_var("VONAGE_API_SECRET"),
        ) {
            (Some(api_key), Some(api_secret)) if has_recipient => Some(VonageConfig {
                api_key,
                api_secret,
            }),
            _ => None,
        };

        let textbelt = non_empty_var("TEXTBELT_KEY")
            .filter(|_| has_recipient)
            .map(|key| TextBeltConfig { key });

        let twilio = match (
            non_empty_var("TWILIO_ACCOUNT_SID"),
            non_empty_var("TWILIO_AUTH_TOKEN"),
            non_empty_var("TWILIO_PHONE_NUMBER"),
        ) {
            (Some(account_sid), Some(auth_token), Some(from_number)) if has_recipient => {
                Some(TwilioConfig {
                    account_sid,
                    auth_token,
                    from_number,
                })
            }
            _ => None,
        };

        Ok(Self {
            recipient_phone,
            sender_id,
            attempt_timeout,
            webhook,
            sms_to,
            vonage,
            textbelt,
            twilio,
        })
    }
}

impl NotificationConfig {
    /// A zero timeout would fail every channel before it is tried
    fn parse_attempt_timeout(raw: Option<String>) -> Result<Duration, String> {
        let secs = match raw {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| "NOTIFY_TIMEOUT_SECS must be a valid number".to_string())?,
            None => Self::DEFAULT_ATTEMPT_TIMEOUT_SECS,
        };
        if secs == 0 {
            return Err("NOTIFY_TIMEOUT_SECS must be greater than 0".to_string());
        }
        Ok(Duration::from_secs(secs))
    }
}

impl EmailConfig {
    pub fn from_env() -> Result<Self, String> {
        let sendgrid = match (
            non_empty_var("SENDGRID_API_KEY"),
            non_empty_var("NOTIFY_EMAIL_TO"),
        ) {
            (Some(api_key), Some(to)) => {
                let from = non_empty_var("NOTIFY_EMAIL_FROM").unwrap_or_else(|| to.clone());
                Some(SendGridConfig { api_key, from, to })
            }
            _ => None,
        };

        Ok(Self { sendgrid })
    }
}

impl ProfileConfig {
    const DEFAULT_PATH: &'static str = "config/profile.json";

    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            path: non_empty_var("PROFILE_PATH").unwrap_or_else(|| Self::DEFAULT_PATH.to_string()),
        })
    }
}
