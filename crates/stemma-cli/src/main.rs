use std::io::Read;
use stemma::Genealogy;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Stemma(stemma::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Stemma(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<stemma::Error> for CliError {
    fn from(value: stemma::Error) -> Self {
        Self::Stemma(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Render,
    Parse,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    out: Option<String>,
}

fn usage() -> &'static str {
    "stemma-cli\n\
\n\
USAGE:\n\
  stemma-cli [render] [--out <path>] [<path>|-]\n\
  stemma-cli parse [--pretty] [--out <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Input is YAML by default; files ending in .json (and stdin that parses\n\
    as JSON) are read as JSON.\n\
  - render prints the Graphviz DOT document to stdout; use --out to write a file.\n\
  - parse prints the normalized semantic model as JSON.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "render" => args.command = Command::Render,
            "parse" => args.command = Command::Parse,
            "--pretty" => args.pretty = true,
            "--out" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(path.clone());
            }
            other if other == "-" || !other.starts_with('-') => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(other.to_string());
            }
            _ => return Err(CliError::Usage(usage())),
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn load_document(input: Option<&str>, text: &str) -> Result<Genealogy, CliError> {
    match input {
        Some(path) if path.ends_with(".json") => Ok(Genealogy::from_json_str(text)?),
        Some(path) if path != "-" => Ok(Genealogy::from_yaml_str(text)?),
        // stdin: JSON documents are accepted too, YAML is the fallback.
        _ => match Genealogy::from_json_str(text) {
            Ok(doc) => Ok(doc),
            Err(_) => Ok(Genealogy::from_yaml_str(text)?),
        },
    }
}

fn run() -> Result<(), CliError> {
    let argv: Vec<String> = std::env::args().collect();
    let args = parse_args(&argv)?;

    let text = read_input(args.input.as_deref())?;
    let doc = load_document(args.input.as_deref(), &text)?;

    let output = match args.command {
        Command::Render => stemma_render::render(&doc),
        Command::Parse => {
            let mut json = if args.pretty {
                serde_json::to_string_pretty(&doc)?
            } else {
                serde_json::to_string(&doc)?
            };
            json.push('\n');
            json
        }
    };

    match args.out.as_deref() {
        Some(path) => std::fs::write(path, output)?,
        None => print!("{output}"),
    }

    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
