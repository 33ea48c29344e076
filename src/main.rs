//! CLI entrypoint: serves the API and provides admin commands.

use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Confirm;
use uuid::Uuid;

use user_hub::config::{self, Config, mask_connection_string};
use user_hub::server;

#[derive(Parser)]
#[command(name = "user-hub", version, about = "User directory service with a social follow graph")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Manage users from the command line
    User {
        #[command(subcommand)]
        command: UserCommand,
    },
    /// Print the resolved configuration
    Config,
    /// Check connectivity of the configured backends
    DbCheck,
}

#[derive(Subcommand)]
enum UserCommand {
    /// Create a user
    Create {
        username: String,
        email: String,
        #[arg(long)]
        display_name: Option<String>,
    },
    /// Look up a user by id or username
    Get { id_or_username: String },
    /// List all users
    List,
    /// Delete a user
    Delete {
        id: Uuid,
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = config::load_from_env()?;
    init_tracing(&config);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            config.print_summary();
            server::run(config).await
        }
        Command::User { command } => run_user_command(&config, command).await,
        Command::Config => {
            print_config(&config);
            Ok(())
        }
        Command::DbCheck => db_check(&config).await,
    }
}

async fn run_user_command(config: &Config, command: UserCommand) -> anyhow::Result<()> {
    let state = server::build_state(config).await?;

    match command {
        UserCommand::Create {
            username,
            email,
            display_name,
        } => {
            let user = state
                .user_service
                .create_user(&username, &email, display_name)
                .await?;

            println!("{} {}", "Created user".green(), user.id());
            print_user(&user);
        }

        UserCommand::Get { id_or_username } => {
            let user = match Uuid::parse_str(&id_or_username) {
                Ok(id) => state.user_service.get_user(id).await?,
                Err(_) => {
                    state
                        .user_service
                        .get_user_by_username(&id_or_username)
                        .await?
                }
            };

            print_user(&user);
        }

        UserCommand::List => {
            let users = state.user_service.list_users().await?;

            if users.is_empty() {
                println!("{}", "No users found".yellow());
            } else {
                println!("{} user(s):", users.len());
                for user in &users {
                    println!(
                        "  {}  {}  {}",
                        user.id().to_string().dimmed(),
                        user.username().bold(),
                        user.email()
                    );
                }
            }
        }

        UserCommand::Delete { id, force } => {
            if !force {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Delete user {}?", id))
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "Aborted".yellow());
                    return Ok(());
                }
            }

            if state.user_service.delete_user(id).await? {
                println!("{} {}", "Deleted user".green(), id);
            } else {
                anyhow::bail!("User {id} not found");
            }
        }
    }

    Ok(())
}

fn print_user(user: &user_hub::domain::entities::User) {
    println!("  id:           {}", user.id());
    println!("  username:     {}", user.username());
    println!("  email:        {}", user.email());
    println!("  display_name: {}", user.display_name().unwrap_or("-"));
    println!("  created_at:   {}", user.created_at());
}

fn print_config(config: &Config) {
    println!("{}", "Configuration:".bold());
    println!("  listen:       {}", config.listen_addr);
    println!(
        "  database:     {}",
        config
            .database_url
            .as_deref()
            .map(mask_connection_string)
            .unwrap_or_else(|| "in-memory".to_string())
    );
    println!(
        "  redis:        {}",
        config
            .redis_url
            .as_deref()
            .map(mask_connection_string)
            .unwrap_or_else(|| "disabled".to_string())
    );
    println!(
        "  social graph: {}",
        if config.is_graph_enabled() {
            format!("enabled ('{}')", config.graph_name)
        } else {
            "disabled".to_string()
        }
    );
    println!("  log:          {} ({})", config.log_level, config.log_format);
    println!("  sync queue:   {}", config.sync_queue_capacity);
}

/// Probes every configured backend and fails if any is unreachable.
async fn db_check(config: &Config) -> anyhow::Result<()> {
    let mut failed = false;

    match &config.database_url {
        Some(url) => match sqlx::postgres::PgPoolOptions::new()
            .max_connections(1)
            .connect(url)
            .await
        {
            Ok(pool) => {
                sqlx::query("SELECT 1").execute(&pool).await?;
                println!("{} PostgreSQL", "ok".green().bold());
            }
            Err(e) => {
                println!("{} PostgreSQL: {}", "FAIL".red().bold(), e);
                failed = true;
            }
        },
        None => println!("{} PostgreSQL (in-memory mode)", "skip".yellow()),
    }

    match &config.redis_url {
        Some(url) => match user_hub::infrastructure::cache::RedisCache::connect(url).await {
            Ok(_) => println!("{} Redis", "ok".green().bold()),
            Err(e) => {
                println!("{} Redis: {}", "FAIL".red().bold(), e);
                failed = true;
            }
        },
        None => println!("{} Redis (not configured)", "skip".yellow()),
    }

    if config.is_graph_enabled() {
        if let Some(url) = config.redis_url.as_deref() {
            match user_hub::infrastructure::graph::FalkorGraph::connect(url, &config.graph_name)
                .await
            {
                Ok(_) => println!("{} FalkorDB", "ok".green().bold()),
                Err(e) => {
                    println!("{} FalkorDB: {}", "FAIL".red().bold(), e);
                    failed = true;
                }
            }
        }
    } else {
        println!("{} FalkorDB (not enabled)", "skip".yellow());
    }

    if failed {
        anyhow::bail!("One or more backends are unreachable");
    }

    Ok(())
}

fn init_tracing(config: &Config) {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
