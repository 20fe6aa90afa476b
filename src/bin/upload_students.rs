use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use enrollment_lib::modules::data_import::{
    ImportOutcome, ImportStudentsCommand, ImportStudentsHandler, RecordSource,
    StudentImportRepositoryImpl,
};
use enrollment_lib::shared::application::UseCase;
use enrollment_lib::shared::config::{ConnectionParts, ConnectionPolicy, DatabaseSettings};
use enrollment_lib::shared::utils::logger::init_logger;
use enrollment_lib::shared::DatabaseState;

/// Upload students from a CSV file with a single bulk insert
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// CSV with first_name, last_name, enrollment_date columns
    #[arg(short, long)]
    file: PathBuf,

    #[arg(long, env = "DB_HOST")]
    host: Option<String>,

    #[arg(long, env = "DB_PORT")]
    port: Option<u16>,

    #[arg(long, env = "DB_NAME")]
    database: Option<String>,

    #[arg(long, env = "DB_USER")]
    user: Option<String>,

    #[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Full connection string; wins over the individual parameters
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,

    /// prefer-explicit or fail-fast when the URL and the parts disagree
    #[arg(long, env = "DB_CONNECTION_POLICY", default_value = "prefer-explicit")]
    policy: String,

    #[arg(short, long, default_value = "students")]
    table: String,

    /// Print the tuples instead of inserting them
    #[arg(long)]
    dry_run: bool,
}

impl Args {
    /// Connection settings from the flags and their env fallbacks; blank
    /// values count as unset
    fn database_settings(&self) -> anyhow::Result<DatabaseSettings> {
        let present = |value: &Option<String>| value.clone().filter(|v| !v.trim().is_empty());

        let policy: ConnectionPolicy = self.policy.parse()?;
        let parts = ConnectionParts {
            host: present(&self.host),
            port: self.port,
            database: present(&self.database),
            user: present(&self.user),
            password: present(&self.password),
        };

        Ok(DatabaseSettings::resolve(
            present(&self.database_url),
            &parts,
            policy,
        )?)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_logger();

    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let db_state = if args.dry_run {
        DatabaseState::unavailable("dry run does not connect")
    } else {
        let settings = args.database_settings()?;
        tokio::task::spawn_blocking(move || DatabaseState::initialize(&settings)).await?
    };

    let command = ImportStudentsCommand::new(RecordSource::File(args.file))
        .into_table(args.table)
        .dry_run(args.dry_run);

    let repository = Arc::new(StudentImportRepositoryImpl::new(db_state.into_shared()));
    let result = ImportStudentsHandler::new(repository)
        .execute(command)
        .await?;

    match &result.outcome {
        ImportOutcome::NothingToInsert => {
            println!("No student rows found; nothing inserted into {}", result.table)
        }
        ImportOutcome::Preview { tuples } => {
            for tuple in tuples {
                println!("({})", tuple.join(", "));
            }
            println!("{} rows would be inserted into {}", tuples.len(), result.table);
        }
        ImportOutcome::Inserted { rows_affected } => {
            println!("Inserted {} rows into {}", rows_affected, result.table)
        }
    }

    Ok(())
}
