use clap::{CommandFactory, Parser};
use ejson::{ParserOptions, SerializerOptions, StringEscape, Style, UnicodeEscapes};
use std::io::Read;
use std::path::Path;

#[derive(Debug, Parser)]
#[command(name = "ejson")]
#[command(about = "Validate and reformat JSON documents", long_about = None)]
#[command(after_help = "\x1b[1;4mExamples:\x1b[0m
  Pretty-print JSON from a URL:
    \x1b[1mejson\x1b[0m https://api.github.com/users

  Reformat a local file on one line:
    \x1b[1mejson\x1b[0m --compact data.json

  Read from standard input:
    cat data.json | \x1b[1mejson\x1b[0m -

  Validate a raw JSON string:
    \x1b[1mejson\x1b[0m --check '{\"name\":\"Alice\",\"age\":30}'")]
struct Cli {
    #[arg(help = "Input source: file path, URL, `-` for stdin, or raw JSON string")]
    input: String,

    #[arg(long, help = "Render on a single line instead of indenting")]
    compact: bool,

    #[arg(long, help = "Decode \\uXXXX escapes instead of keeping them verbatim")]
    decode_unicode: bool,

    #[arg(long, help = "Escape quotes, backslashes and control characters in output")]
    escape: bool,

    #[arg(long, help = "Only validate the input; print nothing on success")]
    check: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = process(&cli).await {
        eprintln!("Error: {}\n", e);
        let _ = Cli::command().print_help();
        std::process::exit(1);
    }
}

async fn get_input_content(source: &str) -> Result<String, Box<dyn std::error::Error>> {
    if source == "-" {
        read_from_stdin()
    } else if source.starts_with("http://") || source.starts_with("https://") {
        download_from_url(source).await
    } else if Path::new(source).exists() {
        read_from_file(source)
    } else {
        Ok(source.to_string())
    }
}

async fn download_from_url(url: &str) -> Result<String, Box<dyn std::error::Error>> {
    let client = reqwest::Client::builder()
        .user_agent("ejson-cli/0.1.0")
        .build()?;
    let response = client.get(url).send().await?.error_for_status()?;
    let content = response.text().await?;
    Ok(content)
}

fn read_from_file(path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    Ok(content)
}

fn read_from_stdin() -> Result<String, Box<dyn std::error::Error>> {
    let mut content = String::new();
    std::io::stdin().read_to_string(&mut content)?;
    Ok(content)
}

impl Cli {
    fn parser_options(&self) -> ParserOptions {
        ParserOptions {
            unicode_escapes: if self.decode_unicode {
                UnicodeEscapes::Decode
            } else {
                UnicodeEscapes::Verbatim
            },
            ..Default::default()
        }
    }

    fn serializer_options(&self) -> SerializerOptions {
        SerializerOptions {
            style: if self.compact {
                Style::Compact
            } else {
                Style::Indented
            },
            escape: if self.escape {
                StringEscape::Json
            } else {
                StringEscape::Raw
            },
            ..Default::default()
        }
    }
}

async fn process(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let content = get_input_content(&cli.input).await?;
    let value = ejson::parse_with_options(&content, cli.parser_options())?;

    if !cli.check {
        println!("{}", ejson::to_string_with_options(&value, cli.serializer_options()));
    }

    Ok(())
}
