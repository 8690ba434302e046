use chef_ai::client::{complete, FormState, RecipeClient, Screen, DEFAULT_SERVER_URL};
use chef_ai::config::DEFAULT_LOG_FILTER;
use chef_ai::PrepTime;
use clap::{Parser, ValueEnum};
use log::debug;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PrepTimeArg {
    /// Under 30 minutes
    Quick,
    /// 30 to 60 minutes
    Medium,
    /// Over 60 minutes
    Long,
}

impl From<PrepTimeArg> for PrepTime {
    fn from(arg: PrepTimeArg) -> Self {
        match arg {
            PrepTimeArg::Quick => PrepTime::Quick,
            PrepTimeArg::Medium => PrepTime::Medium,
            PrepTimeArg::Long => PrepTime::Long,
        }
    }
}

/// Generate amazing recipes from the ingredients you have
#[derive(Parser, Debug)]
#[command(name = "chef-ai", version, about)]
struct Args {
    /// Ingredients you have, e.g. "rice, egg, onion"
    #[arg(short, long, default_value = "")]
    ingredients: String,

    /// Preferred prep time
    #[arg(short, long, value_enum, default_value = "medium")]
    prep_time: PrepTimeArg,

    /// Number of servings
    #[arg(short, long, default_value = "2")]
    servings: String,

    /// Allow non-vegetarian recipes
    #[arg(long)]
    non_veg: bool,

    /// Base URL of the recipe server
    #[arg(long, default_value = DEFAULT_SERVER_URL)]
    server: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER),
    )
    .init();

    let args = Args::parse();
    debug!("{:?}", args);

    let state = FormState::default()
        .with_ingredients(args.ingredients)
        .with_prep_time(args.prep_time.into())
        .with_servings_input(&args.servings);
    let state = if args.non_veg {
        state.select_non_vegetarian()
    } else {
        state.select_vegetarian()
    };

    let (loading, request) = match state.begin_submit() {
        Ok(started) => started,
        Err(blocked) => {
            eprintln!("{}", blocked);
            return ExitCode::FAILURE;
        }
    };
    println!("{}", Screen::from(&loading));

    let client = RecipeClient::new(args.server);
    let state = complete(loading, &request, &client).await;
    println!("{}", Screen::from(&state));

    if state.error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
