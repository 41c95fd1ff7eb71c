use clap::Parser;
use serde_json::{json, Value};
use std::fs;

use nameforge::{
    config::Config,
    constants::*, // Import all constants
    emit_filter_event, NameForge,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "NameForge Filter Host (HEF Mode)")]
struct Args {
    /// Optional path to config file (TOML)
    #[arg(short, long)]
    config: Option<String>,

    /// Filter to apply to the input names
    #[arg(short, long, default_value = FILTER_INCREMENT_NAMES)]
    filter: String,

    /// Signed step for sequence filters (overrides config default_step)
    #[arg(short, long, allow_hyphen_values = true)]
    step: Option<i64>,

    /// Read names from a file, one per line (wins over positional names)
    #[arg(long)]
    names_file: Option<String>,

    /// List registered filter identifiers and exit
    #[arg(long)]
    list_filters: bool,

    /// Names to feed the filter
    names: Vec<String>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| "config.toml".to_string());
    let config = match fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str::<Config>(&content) {
            Ok(cfg) => {
                println!("{}Loaded config from: {}", ICON_PLACEHOLDER, config_path);
                cfg
            }
            Err(err) => {
                eprintln!("❌ Failed to parse config file '{}': {}", config_path, err);
                std::process::exit(1);
            }
        },
        Err(_) => {
            println!(
                "⚠️ No config file found at '{}', falling back to default config.",
                config_path
            );
            Config::default()
        }
    };

    let mut host = NameForge::new(config);

    // Registration table: built-ins plus any dynamic libraries from filter_dir.
    let manager = match host.build_filters() {
        Ok(m) => m,
        Err(err) => {
            eprintln!("❌ Failed to load filter libraries: {}", err);
            std::process::exit(1);
        }
    };
    if host.loaded_libraries() > 0 {
        println!(
            "{}Dynamic filter libraries loaded: {}",
            ICON_PLACEHOLDER,
            host.loaded_libraries()
        );
    }

    // Filter-provided defaults fill config fields the operator left unset,
    // so the event pipeline comes up after the merge.
    manager.collect_config_defaults().apply(&mut host.config);
    host.init_events().await;

    let app_name = host
        .config
        .app_name
        .clone()
        .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());
    {
        use nameforge::events::{
            dispatcher,
            model::{LogEvent, LogLevel, SystemEvent},
        };
        let evt = SystemEvent {
            meta: dispatcher::meta("system", LogLevel::Info),
            action: "startup".to_string(),
            detail: Some(format!("{} {}", app_name, full_version())),
        };
        dispatcher::emit(LogEvent::System(evt));
    }

    if args.list_filters {
        for name in manager.filter_names() {
            println!("{}", name);
        }
        nameforge::events::dispatcher::flush().await;
        return;
    }

    let names: Vec<String> = match args.names_file.as_deref() {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect(),
            Err(err) => {
                eprintln!("❌ Failed to read names file '{}': {}", path, err);
                std::process::exit(1);
            }
        },
        None => args.names.clone(),
    };

    let step = host.config.resolve_step(args.step);
    let input = Value::Array(names.iter().cloned().map(Value::String).collect());
    emit_filter_event!(
        &args.filter,
        "apply",
        Some(format!("{} names, step {}", names.len(), step))
    );

    match manager.apply(&args.filter, &input, &[json!(step)]) {
        Ok(Value::Null) => {
            emit_filter_event!(&args.filter, "no_candidate", None);
            eprintln!("⚠️ No name with a numeric suffix found in the input.");
            nameforge::events::dispatcher::flush().await;
            std::process::exit(2);
        }
        Ok(Value::String(name)) => {
            emit_filter_event!(&args.filter, "result", Some(name.clone()));
            println!("{}", name);
        }
        Ok(Value::Array(items)) => {
            for item in &items {
                match item {
                    Value::String(s) => println!("{}", s),
                    other => println!("{}", other),
                }
            }
        }
        Ok(other) => {
            println!("{}", other);
        }
        Err(err) => {
            eprintln!("❌ Filter '{}' failed: {}", args.filter, err);
            nameforge::events::dispatcher::flush().await;
            std::process::exit(1);
        }
    }

    nameforge::events::dispatcher::flush().await;
}
