use crate::{
    config::{self, Config},
    error::AgentError,
    services::serpapi::SerpApiClient,
    tools::{MathTool, SearchInternetTool},
    Agent, FunctionFactory,
};
use clap::{Arg, ArgAction, Command};
use std::io::Write;
use std::time::Duration;
use tokio::io::AsyncBufReadExt;
use tracing::{error, info};

/// Exit code when a required credential is absent or empty
pub const EXIT_MISSING_CREDENTIAL: i32 = 2;
/// Exit code when the search client fails to initialize
pub const EXIT_SEARCH_CLIENT_INIT: i32 = 3;

/// CLI entry point for the mistral-agent tool
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = Command::new("mistral-agent")
        .version("0.1.0")
        .about("A chat agent for Mistral tool calling with internet search")
        .arg(
            Arg::new("question")
                .help("Ask a single question and exit instead of starting the chat loop")
                .index(1),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .value_name("MODEL")
                .help("The Mistral model to use")
                .default_value(config::DEFAULT_MODEL),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("Mistral API base URL")
                .default_value(config::DEFAULT_BASE_URL),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("Request timeout in seconds")
                .default_value("120"),
        )
        .arg(
            Arg::new("max-iterations")
                .short('i')
                .long("max-iterations")
                .value_name("COUNT")
                .help("Maximum model round trips per turn")
                .default_value("10"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print the full execution trace after each answer")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    // Startup gate 1: both credentials must be present before anything
    // touches the network.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(AgentError::MissingCredential(name)) => {
            eprintln!("Error: {} not found in environment variables. Please set it.", name);
            if name == config::SERPAPI_API_KEY_VAR {
                eprintln!("You can get one from: https://serpapi.com/");
            }
            std::process::exit(EXIT_MISSING_CREDENTIAL);
        }
        Err(err) => return Err(err.into()),
    };

    let timeout_seconds: u64 = matches.get_one::<String>("timeout").unwrap().parse()?;
    let max_iterations: usize = matches
        .get_one::<String>("max-iterations")
        .unwrap()
        .parse()?;

    let config = config
        .with_model(matches.get_one::<String>("model").unwrap().as_str())
        .with_base_url(matches.get_one::<String>("base-url").unwrap().as_str())
        .with_timeout(Duration::from_secs(timeout_seconds))
        .with_max_iterations(max_iterations);

    // Startup gate 2: the search client must construct cleanly.
    let serpapi = match SerpApiClient::new(config.serpapi_api_key.clone()) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Error initializing search client: {}", err);
            eprintln!("Please check your SERPAPI_API_KEY and internet connection.");
            std::process::exit(EXIT_SEARCH_CLIENT_INIT);
        }
    };

    let mut function_factory = FunctionFactory::new();
    function_factory.register_tool(MathTool::new());
    function_factory.register_tool(SearchInternetTool::new(serpapi));

    let agent = Agent::from_config(&config, function_factory)?;

    info!("Using model: {}", config.model);
    info!("Base URL: {}", config.base_url);

    let verbose = matches.get_flag("verbose");

    if let Some(question) = matches.get_one::<String>("question") {
        return run_once(&agent, question, verbose).await;
    }

    interactive_loop(&agent, verbose).await
}

/// Answer one question and exit; failures propagate as a non-zero exit
async fn run_once(agent: &Agent, question: &str, verbose: bool) -> anyhow::Result<()> {
    match agent.run(question).await {
        Ok(result) => {
            println!("{}", result.output);
            if verbose {
                println!("\n{}", result.replay());
            }
            Ok(())
        }
        Err(err) => {
            error!("Agent execution failed: {}", err);
            Err(err.into())
        }
    }
}

/// The chat loop: one question per line until `exit`, EOF, or Ctrl-C.
///
/// A failed turn prints a diagnostic and re-prompts; only the exit
/// keyword, end of input, or an interrupt leaves the loop.
async fn interactive_loop(agent: &Agent, verbose: bool) -> anyhow::Result<()> {
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("Enter your question (or 'exit' to quit): ");
        std::io::stdout().flush()?;

        // Ctrl-C is honored both at the prompt and mid-call.
        let line = tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!("\nExiting...");
                break;
            }
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            // EOF on stdin
            println!();
            break;
        };

        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if is_exit_command(question) {
            break;
        }

        let result = tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!("\nExiting...");
                break;
            }
            result = agent.run(question) => result,
        };

        match result {
            Ok(result) => {
                println!("{}", result.output);
                if verbose {
                    println!("\n{}", result.replay());
                }
            }
            Err(err) => {
                error!("Agent turn failed: {}", err);
                eprintln!("An error occurred during agent execution: {}", err);
            }
        }
    }

    Ok(())
}

/// Case-insensitive check for the exit keyword
fn is_exit_command(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("exit")
}
