//! Architect CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use architect_foundation::Direction;
use architect_language::InterpreterConfig;
use architect_runtime::{DEFAULT_START_ROOM, GameConfig, Repl, Session, demo_content};
use architect_storage::World;
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
struct CliConfig {
    batch_file: Option<PathBuf>,
    show_help: bool,
    show_version: bool,
    verbose: bool,
    euclidean: bool,
    max_depth: Option<usize>,
    blueprint: bool,
    start_room: String,
    dump_world: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            batch_file: None,
            show_help: false,
            show_version: false,
            verbose: false,
            euclidean: true,
            max_depth: None,
            blueprint: false,
            start_room: DEFAULT_START_ROOM.to_string(),
            dump_world: false,
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-v" | "--verbose" => config.verbose = true,
            "--no-euclidean" => config.euclidean = false,
            "--blueprint" => config.blueprint = true,
            "--dump-world" => config.dump_world = true,
            "-b" | "--batch" => {
                i += 1;
                if i >= args.len() {
                    return Err("--batch requires a value".into());
                }
                config.batch_file = Some(PathBuf::from(&args[i]));
            }
            "--start" => {
                i += 1;
                if i >= args.len() {
                    return Err("--start requires a value".into());
                }
                config.start_room.clone_from(&args[i]);
            }
            "--max-depth" => {
                i += 1;
                if i >= args.len() {
                    return Err("--max-depth requires a value".into());
                }
                config.max_depth = Some(
                    args[i]
                        .parse()
                        .map_err(|_| format!("invalid --max-depth value: {}", args[i]))?,
                );
            }
            arg => {
                return Err(format!("unknown option: {arg}").into());
            }
        }
        i += 1;
    }

    Ok(config)
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "architect=debug"
    } else {
        "architect=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("architect {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_tracing(config.verbose);

    let mut interpreter = InterpreterConfig::new().with_euclidean(config.euclidean);
    if let Some(max_depth) = config.max_depth {
        interpreter = interpreter.with_max_depth(max_depth);
    }
    let game = GameConfig::new()
        .with_start_room(config.start_room)
        .with_interpreter(interpreter)
        .with_blueprint_commands(config.blueprint)
        .with_banner(config.batch_file.is_none());

    let session = Session::new(&demo_content(), game)?;
    let mut repl = Repl::new(session)?;

    if let Some(path) = &config.batch_file {
        print!("{}", repl.eval_file(path)?);
    } else {
        repl.run()?;
    }

    if config.dump_world {
        dump_world_state(repl.session().world());
    }
    Ok(())
}

fn dump_world_state(world: &World) {
    println!("\x1b[1;36m=== World State ===\x1b[0m");
    println!("Location: {}", world.room_label(world.location()));

    for room in world.rooms() {
        let held: Vec<String> = room.holding.iter().map(|&t| world.thing_label(t)).collect();
        println!(
            "  {}{} [{}]",
            room.identifier,
            if room.visited { " (visited)" } else { "" },
            held.join(", ")
        );
        for direction in Direction::ALL {
            if let Some(destination) = room.link(direction) {
                println!("    {direction} -> {}", world.room_label(destination));
            }
        }
    }

    let carried: Vec<String> = world.inventory().items().map(|t| world.thing_label(t)).collect();
    println!("Inventory: [{}]", carried.join(", "));
    println!();
}

fn print_help() {
    println!(
        "\x1b[1mArchitect\x1b[0m - Blueprint-driven text adventure

\x1b[1mUSAGE:\x1b[0m
    architect [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -b, --batch FILE     Play the commands in FILE and exit
    -v, --verbose        Log instruction dispatch to stderr
    --start ROOM         Start in ROOM instead of `initial`
    --no-euclidean       Create one-way links only
    --max-depth N        Limit nested `ift` instructions to N levels
    --blueprint          Accept `:`-prefixed Blueprint instructions
    --dump-world         Print rooms and inventory on exit

\x1b[1mEXAMPLES:\x1b[0m
    architect                        Play the demo
    architect -b walkthrough.txt     Play a scripted walkthrough
    architect --blueprint -v         Play with raw instructions and logging

\x1b[1mCOMMANDS:\x1b[0m
    n, s, e, w / go <dir>   Move
    i, inventory            List what you carry
    l, look                 Examine the room
    ?, help                 List movement and actions
    q, quit                 Leave the game
    :<instruction>          Run a Blueprint instruction (with --blueprint)

\x1b[1mENVIRONMENT:\x1b[0m
    RUST_LOG             Overrides the log filter, e.g. architect=trace"
    );
}
