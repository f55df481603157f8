use clap::{Parser, Subcommand, ValueEnum};
use std::time::Duration;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "scanit")]
#[command(about = "Generate a shopping list from a recipe description")]
pub struct Args {
    // Backend base url, endpoint path is appended per revision
    #[arg(short, long, env = "SCANIT_BASE_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    // Which backend generation to talk to
    #[arg(short, long, env = "SCANIT_REVISION", value_enum, default_value_t = ApiRevision::Current)]
    pub revision: ApiRevision,

    // Splash screen duration in milliseconds
    #[arg(long, default_value_t = 5000)]
    pub splash_ms: u64,

    // Hold a finished result this long before showing it
    #[arg(long, default_value_t = 0)]
    pub reveal_delay_ms: u64,

    // Request timeout in seconds, none by default
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    // Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Interactive session: splash, form, loading, result
    Run,

    /// Generate one list from flags and print it
    Generate {
        /// What you want to cook
        #[arg(long, default_value = "")]
        recipe: String,

        /// Number of people
        #[arg(long, default_value_t = crate::models::DEFAULT_PEOPLE)]
        people: u32,

        /// Budget ceiling in euros (0 to 100)
        #[arg(long, default_value_t = crate::models::DEFAULT_BUDGET)]
        budget: f64,

        /// Dietary or shopping tag, repeatable
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiRevision {
    /// `/api/get_listes`, plain text answer
    Legacy,
    /// `/api/shopping-list`, JSON product array
    Current,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    Text,
    Products,
}

// What differs between backend revisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiProfile {
    pub endpoint_path: &'static str,
    pub response_shape: ResponseShape,
}

impl ApiRevision {
    pub fn profile(self) -> ApiProfile {
        match self {
            ApiRevision::Legacy => ApiProfile {
                endpoint_path: "/api/get_listes",
                response_shape: ResponseShape::Text,
            },
            ApiRevision::Current => ApiProfile {
                endpoint_path: "/api/shopping-list",
                response_shape: ResponseShape::Products,
            },
        }
    }

    // Legacy backend expects a whole number budget
    pub fn whole_budget(self) -> bool {
        self == ApiRevision::Legacy
    }
}

impl Args {
    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_ms)
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
