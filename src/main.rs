use clap::Parser;
use folio::generate::Generator;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Static site generator for personal portfolio sites")]
#[command(long_about = "\
Static site generator for personal portfolio sites

Your profile is the data source: one JSON document describing who you are,
what you've built, and where you've worked. folio renders it through an HTML
template and mirrors your static assets next to the result.

Project structure:

  portfolio.json               # Profile data (see the fixtures/ directory
                               # in the repository for a full example)
  templates/
  └── index.html               # Tera template for the page
  static/                      # Copied verbatim into the output directory
  └── js/
      ├── theme.js
      └── sand.js

Build output:

  dist/
  ├── index.html               # Rendered page
  └── js/                      # Mirrored static tree
      └── ...")]
#[command(version)]
struct Cli {
    /// Path to the profile JSON data file
    #[arg(long, default_value = "portfolio.json")]
    data: PathBuf,

    /// Path to the HTML template
    #[arg(long, default_value = "templates/index.html")]
    template: PathBuf,

    /// Static assets directory, mirrored into the output
    #[arg(long = "static", default_value = "static")]
    static_dir: PathBuf,

    /// Output directory for the generated site
    #[arg(long, default_value = "dist")]
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut generator = Generator::new(&cli.data, &cli.template, &cli.static_dir, &cli.output);

    println!("Loading profile data...");
    if let Err(e) = generator.load_data() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    println!("Generating site...");
    if let Err(e) = generator.render_site() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    let copied = match generator.copy_assets() {
        Ok(copied) => copied,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Site generated in '{}' ({} static files copied)",
        cli.output.display(),
        copied
    );
    ExitCode::SUCCESS
}
