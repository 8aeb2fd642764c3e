use std::path::PathBuf;
use std::process::ExitCode;
use clap::{CommandFactory, Parser, builder::NonEmptyStringValueParser, error::ErrorKind};
use webpage2pdf::logging::{self, LogConfig};

/// Converts a webpage to a PDF using a headless browser, with a header and
/// footer fetched from `<SOURCE_URL>?part=header` and `<SOURCE_URL>?part=footer`
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// URL of the webpage to convert to PDF
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    source_url: String,

    /// Path of the PDF file to write
    file_name: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // a failed write to stderr has nowhere left to be reported
            e.print().ok();
            // only the missing-argument error carries a usage line of its own
            if e.kind() != ErrorKind::MissingRequiredArgument {
                eprintln!("\n{}", Args::command().render_usage());
            }
            return ExitCode::from(1);
        }
    };

    logging::init(LogConfig::from_env());

    match webpage2pdf::convert(&args.source_url, &args.file_name).await {
        Ok(()) => println!("PDF generated successfully!"),
        Err(e) => eprintln!("An error occurred: {}", e),
    }

    // exit status stays 0 when the conversion itself fails
    ExitCode::SUCCESS
}
